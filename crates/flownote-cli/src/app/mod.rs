//! Application-level utilities for the FlowNote CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - The `AppContext` shared by every command handler

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{missing_config_message, resolve_config_path};
