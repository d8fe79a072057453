//! Value objects supplied by the host application.
//!
//! - [`Tool`]: a selectable capability offered to the chat input
//! - [`AttachedFile`]: metadata for a file added to the pending message
//! - [`Selectable`]: tagged union over both, for mixed menus

mod files;
mod selectable;
mod tools;

pub use files::{AttachedFile, format_file_size};
pub use selectable::{Named, Selectable};
pub use tools::Tool;
