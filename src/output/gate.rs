//! `TerminalGate` — Presentation-layer implementation of `ConfirmationGate`.
//!
//! Renders the deployment summary block and blocks on one line of operator
//! input. Only `y` / `yes` (case-insensitive) proceed; anything else,
//! including an empty line, declines.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::ports::{ConfirmationGate, ReleaseSummary};
use crate::output::OutputContext;

/// Terminal confirmation gate wrapping an `OutputContext`.
pub struct TerminalGate<'a> {
    ctx: &'a OutputContext,
    /// Skip the prompt and approve immediately (`--yes`).
    assume_yes: bool,
}

impl<'a> TerminalGate<'a> {
    /// Create a new `TerminalGate` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext, assume_yes: bool) -> Self {
        Self { ctx, assume_yes }
    }

    fn render_summary(&self, summary: &ReleaseSummary) {
        println!();
        self.ctx.header("Deployment confirmation");
        self.ctx.kv("Agent name:", &summary.agent_display_name);
        self.ctx.kv("Agent id:", &summary.agent_id);
        self.ctx.kv("Project:", &summary.project_id);
        self.ctx.kv("Location:", &summary.location);
        self.ctx.kv("Target env:", &summary.environment);
        self.ctx.kv("Release:", &summary.release_label);
        println!();
    }
}

impl ConfirmationGate for TerminalGate<'_> {
    fn confirm(&self, summary: &ReleaseSummary) -> Result<bool> {
        self.render_summary(summary);

        if self.assume_yes {
            self.ctx.info("proceeding without prompt (--yes)");
            return Ok(true);
        }

        print!("Proceed with deployment? [y/N]: ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        let n = std::io::stdin().lock().read_line(&mut line)?;
        anyhow::ensure!(n > 0, "no input provided");

        let reply = line.trim().to_lowercase();
        Ok(reply == "y" || reply == "yes")
    }
}
