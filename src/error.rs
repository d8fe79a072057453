//! Typed, recoverable failures surfaced by the engine.
//!
//! None of these are fatal: the engine state is left unchanged and the
//! caller decides how to present them (toast, inline notice, ...).

use std::fmt;

use thiserror::Error;

use crate::domain::format_file_size;

/// Adding a file would exceed the attachment cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Maximum file count ({max_files}) exceeded")]
pub struct CapacityError {
    pub max_files: usize,
}

/// A dragged file is larger than the drag session allows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct FileTooLargeError {
    pub name: String,
    pub size: u64,
    pub max_file_size: u64,
}

impl fmt::Display for FileTooLargeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File '{}' exceeds max size ({} > {})",
            self.name,
            format_file_size(self.size),
            format_file_size(self.max_file_size)
        )
    }
}

/// Any reason a single file was not attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error(transparent)]
    FileTooLarge(#[from] FileTooLargeError),
}

impl AttachmentError {
    /// Stable machine-readable code for the rendering layer.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Capacity(_) => "CAPACITY_EXCEEDED",
            Self::FileTooLarge(_) => "FILE_TOO_LARGE",
        }
    }
}
