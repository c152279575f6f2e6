//! Unit tests for dfcx CLI
//!
//! These tests use mocked platform ports and run fast without external I/O.

mod auth_tests;
mod config_tests;
mod logging_tests;
mod publish_service;
