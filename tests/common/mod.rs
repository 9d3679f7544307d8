//! Shared test utilities for bubbletrace
//!
//! - Fixed inputs and temporary config files
//! - TUI terminal testing helpers
