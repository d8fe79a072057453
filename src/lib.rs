//! Chat-input state engine
//!
//! The decision logic behind a chat composer: which tools are enabled,
//! which files are attached, what the search menus show, and whether a
//! drag-and-drop gesture is in progress. Rendering is left to the host;
//! it reads snapshots from here after every event.
//!
//! # Architecture
//!
//! - **Selection**: ordered, id-unique tool and file sets with a file cap
//! - **Filter**: case-insensitive substring search over named items
//! - **Drag-drop**: `Idle`/`Active` session with a per-file size gate
//! - **Chat input**: one owned instance tying the three together
//!
//! # Modules
//!
//! - [`domain`]: `Tool`, `AttachedFile` and the `Selectable` union
//! - [`selection`]: tool and file sets plus the engine that owns them
//! - [`filter`]: search query and filtering
//! - [`drag_drop`]: drag session state machine
//! - [`chat_input`]: per-instance state, drop handling and snapshots
//! - [`events`]: serializable input events
//!
//! # Example
//!
//! ```rust
//! use chat_input_state::{ChatInput, ChatInputOptions};
//! use chat_input_state::domain::{AttachedFile, Tool};
//!
//! let mut input = ChatInput::new(ChatInputOptions::new(5).with_max_file_size(1024));
//! input.toggle_tool(&Tool::new("web", "Web Search", "Search the web"));
//!
//! input.drag_enter(true);
//! let report = input.drop_files(vec![
//!     AttachedFile::new("small.txt", 512, "text/plain"),
//!     AttachedFile::new("huge.bin", 2048, "application/octet-stream"),
//! ]);
//!
//! assert_eq!(report.accepted.len(), 1);
//! assert_eq!(report.rejected.len(), 1);
//! assert!(!input.is_dragging());
//! ```

#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod chat_input;
pub mod config;
pub mod domain;
pub mod drag_drop;
pub mod error;
pub mod events;
pub mod filter;
pub mod selection;
pub mod telemetry;

pub use chat_input::{ChatInput, ChatInputOptions, ChatInputSnapshot, DropReport, RejectedFile};
pub use error::{AttachmentError, CapacityError, FileTooLargeError};
pub use filter::filter;
