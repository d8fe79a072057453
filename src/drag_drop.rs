//! Drag-and-drop session for the chat-input drop target.
//!
//! Two states. `Idle` becomes `Active` on a drag-enter that carries files;
//! drag-leave, drop, or completed validation return it to `Idle`. While
//! active, each offered file is checked against `max_file_size` on its own.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::AttachedFile;
use crate::error::FileTooLargeError;

/// 10 MiB, the usual cap for files dropped onto the chat input.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Phase of the current drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Active,
}

/// Events delivered by the host's drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    /// Pointer entered the drop target. `has_files` is false for text or
    /// link drags, which never activate the session.
    Enter { has_files: bool },
    Leave,
    Drop,
    ValidationComplete,
}

/// Drag state plus the size gate applied to offered files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
    max_file_size: u64,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE)
    }
}

impl DragSession {
    #[must_use]
    pub fn new(max_file_size: u64) -> Self {
        Self {
            state: DragState::Idle,
            max_file_size,
        }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == DragState::Active
    }

    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Advance the state machine and return the resulting state.
    pub fn handle(&mut self, event: DragEvent) -> DragState {
        let next = match (self.state, event) {
            (DragState::Idle, DragEvent::Enter { has_files: true }) => DragState::Active,
            (
                DragState::Active,
                DragEvent::Leave | DragEvent::Drop | DragEvent::ValidationComplete,
            ) => DragState::Idle,
            (state, _) => state,
        };

        if next != self.state {
            debug!(
                name: "drag.state.changed",
                from = ?self.state,
                to = ?next,
                event = ?event,
                "Drag session transition"
            );
        }
        self.state = next;
        next
    }

    pub fn drag_enter(&mut self, has_files: bool) -> DragState {
        self.handle(DragEvent::Enter { has_files })
    }

    pub fn drag_leave(&mut self) -> DragState {
        self.handle(DragEvent::Leave)
    }

    pub fn drop_files(&mut self) -> DragState {
        self.handle(DragEvent::Drop)
    }

    pub fn validation_complete(&mut self) -> DragState {
        self.handle(DragEvent::ValidationComplete)
    }

    /// Check a single offered file against the size gate.
    pub fn validate(&self, file: &AttachedFile) -> Result<(), FileTooLargeError> {
        if file.size <= self.max_file_size {
            return Ok(());
        }

        info!(
            name: "drag.file.rejected",
            file = %file.name,
            size = file.size,
            max_file_size = self.max_file_size,
            "Dropped file exceeds size limit"
        );
        Err(FileTooLargeError {
            name: file.name.clone(),
            size: file.size,
            max_file_size: self.max_file_size,
        })
    }
}
