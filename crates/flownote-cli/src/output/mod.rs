//! Output formatting helpers for the CLI.
//!
//! Entries render as JSON values, list rows or a detail block. Every form
//! hides the content of an entry that is still locked.

mod json;
mod text;

pub use json::{entries_json, entry_json};
pub use text::{entry_detail, entry_row, ENTRY_COLUMNS};
