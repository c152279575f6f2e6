//! `dfcx version` — print the CLI version.

use anyhow::Result;

/// Run `dfcx version`.
///
/// # Errors
///
/// Infallible; returns `Result` for uniformity with the other commands.
pub fn run() -> Result<()> {
    println!("dfcx {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
