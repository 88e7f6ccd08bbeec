//! UI primitives for the FlowNote CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode) plus stored preferences
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, owo-colors styles, fade styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Progress**: Refinement spinner, doctor step list
//! - **Prompt**: dialoguer prompts
//! - **Format**: Countdown, lock window, truncation, timestamps
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Badge};
//! use crate::ui::render::{header, simple_table, hint};
//!
//! let ctx = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color, cli.ascii);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "list", None));
//! println!("{}", simple_table(&ctx, &columns, &rows));
//! println!("{}", hint(&ctx, "flownote show <id>"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod prompt;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::{OutputMode, Refresh, Review};
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print, print_error, receipt, simple_table,
    table, Column,
};

pub use progress::{Spinner, StepList};

pub use format::{format_bytes, format_countdown, format_datetime, format_lock, short_id, truncate};
