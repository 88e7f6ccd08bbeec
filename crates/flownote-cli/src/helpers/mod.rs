//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Entry body reading (`input`)
//! - Lock window, timezone and format parsing (`parsing`)

mod input;
mod parsing;

pub use input::read_entry_body;
pub use parsing::{parse_lock_duration, parse_output_format, parse_timezone};
