//! Command handlers, one module per command group.

pub mod entries;
pub mod init;
pub mod maintenance;
pub mod misc;
pub mod prefs;
pub mod seal;
pub mod write;

pub use entries::{handle_edit, handle_list, handle_refine, handle_show};
pub use init::handle_init;
pub use maintenance::{handle_backup, handle_doctor};
pub use misc::handle_completions;
pub use prefs::{handle_lang, handle_theme};
pub use seal::handle_seal;
pub use write::handle_write;
