//! One chat-input instance: selection, search term and drag session together.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{AttachedFile, Tool};
use crate::drag_drop::{DEFAULT_MAX_FILE_SIZE, DragSession, DragState};
use crate::error::{AttachmentError, CapacityError};
use crate::events::{EventOutcome, InputEvent};
use crate::filter::SearchQuery;
use crate::selection::{AttachedFileSet, SelectedToolSet, SelectionEngine};

/// Construction options for a [`ChatInput`].
///
/// `max_files` has no default: call sites disagree on the right cap, so it
/// must be chosen explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInputOptions {
    pub max_files: usize,
    pub max_file_size: u64,
    pub search_term: String,
}

impl ChatInputOptions {
    #[must_use]
    pub fn new(max_files: usize) -> Self {
        Self {
            max_files,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            search_term: String::new(),
        }
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }
}

/// A file that was not attached, as reported to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedFile {
    pub file_id: String,
    pub name: String,
    pub code: &'static str,
    pub message: String,
    #[serde(skip)]
    pub error: AttachmentError,
}

impl RejectedFile {
    fn new(file: &AttachedFile, error: AttachmentError) -> Self {
        Self {
            file_id: file.id.clone(),
            name: file.name.clone(),
            code: error.code(),
            message: error.to_string(),
            error,
        }
    }
}

/// Per-file result of a drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DropReport {
    /// Ids of files that were attached, in drop order.
    pub accepted: Vec<String>,
    /// Ids already attached (or repeated within the batch); nothing was added.
    pub skipped: Vec<String>,
    pub rejected: Vec<RejectedFile>,
}

impl DropReport {
    #[must_use]
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Everything the rendering layer needs to draw the chat input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatInputSnapshot {
    pub selected_tools: SelectedToolSet,
    pub attached_files: Vec<AttachedFile>,
    pub max_files: usize,
    pub remaining_capacity: usize,
    pub search_term: String,
    pub drag_active: bool,
    pub max_file_size: u64,
}

/// State owned by a single chat-input control.
///
/// Mutation requires `&mut self`; the host's event loop is the only writer.
#[derive(Debug, Clone)]
pub struct ChatInput {
    selection: SelectionEngine,
    search: SearchQuery,
    drag: DragSession,
}

impl ChatInput {
    #[must_use]
    pub fn new(options: ChatInputOptions) -> Self {
        debug!(
            name: "chat_input.created",
            max_files = options.max_files,
            max_file_size = options.max_file_size,
            "Chat input created"
        );
        Self {
            selection: SelectionEngine::new(options.max_files),
            search: SearchQuery::new(options.search_term),
            drag: DragSession::new(options.max_file_size),
        }
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    #[must_use]
    pub fn tools(&self) -> &SelectedToolSet {
        self.selection.tools()
    }

    #[must_use]
    pub fn files(&self) -> &AttachedFileSet {
        self.selection.files()
    }

    #[must_use]
    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    #[must_use]
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn toggle_tool(&mut self, tool: &Tool) -> &SelectedToolSet {
        self.selection.toggle_tool(tool)
    }

    pub fn remove_tool(&mut self, tool_id: &str) -> &SelectedToolSet {
        self.selection.remove_tool(tool_id)
    }

    pub fn clear_tools(&mut self) {
        self.selection.clear_tools();
    }

    /// Attach a file picked outside a drag gesture (e.g. a file dialog).
    pub fn add_file(&mut self, file: AttachedFile) -> Result<&AttachedFileSet, CapacityError> {
        self.selection.add_file(file)
    }

    pub fn remove_file(&mut self, file_id: &str) -> &AttachedFileSet {
        self.selection.remove_file(file_id)
    }

    /// Detach everything, typically once the message has been sent.
    pub fn clear_attachments(&mut self) {
        self.selection.clear_files();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> &SearchQuery {
        self.search = SearchQuery::new(term);
        &self.search
    }

    pub fn clear_search(&mut self) {
        self.search = SearchQuery::default();
    }

    /// Candidate tools matching the current search term.
    #[must_use]
    pub fn filtered_tools<'a>(&self, available: &'a [Tool]) -> Vec<&'a Tool> {
        self.search.apply(available)
    }

    /// Attached files matching the current search term.
    #[must_use]
    pub fn filtered_files(&self) -> Vec<&AttachedFile> {
        self.search.apply(self.selection.files().as_slice())
    }

    pub fn drag_enter(&mut self, has_files: bool) -> DragState {
        self.drag.drag_enter(has_files)
    }

    pub fn drag_leave(&mut self) -> DragState {
        self.drag.drag_leave()
    }

    /// Validate and attach one file offered during a drag gesture.
    ///
    /// The size gate applies whatever the session state, so a file offered
    /// while `Idle` is still checked and attached. The session stays active; the host ends it with
    /// [`finish_validation`](Self::finish_validation) or a drop.
    pub fn offer_file(&mut self, file: AttachedFile) -> Result<&AttachedFileSet, AttachmentError> {
        self.drag.validate(&file)?;
        Ok(self.selection.add_file(file)?)
    }

    pub fn finish_validation(&mut self) -> DragState {
        self.drag.validation_complete()
    }

    /// End the drag gesture and attach every dropped file that passes
    /// the size gate and fits under the cap.
    ///
    /// Each file is judged on its own; a rejection never stops the batch.
    pub fn drop_files<I>(&mut self, files: I) -> DropReport
    where
        I: IntoIterator<Item = AttachedFile>,
    {
        self.drag.drop_files();

        let mut report = DropReport::default();
        for file in files {
            if self.selection.files().contains(&file.id) {
                debug!(name: "chat_input.drop.duplicate", file_id = %file.id, "Dropped file already attached");
                report.skipped.push(file.id);
                continue;
            }

            let outcome = self
                .drag
                .validate(&file)
                .map_err(AttachmentError::from)
                .and_then(|()| {
                    self.selection
                        .add_file(file.clone())
                        .map(|_| ())
                        .map_err(AttachmentError::from)
                });

            match outcome {
                Ok(()) => report.accepted.push(file.id),
                Err(error) => report.rejected.push(RejectedFile::new(&file, error)),
            }
        }

        info!(
            name: "chat_input.drop.processed",
            accepted = report.accepted.len(),
            skipped = report.skipped.len(),
            rejected = report.rejected.len(),
            attached = self.selection.files().len(),
            "Processed dropped files"
        );
        report
    }

    /// Apply a serialized interaction.
    pub fn apply(&mut self, event: InputEvent) -> Result<EventOutcome, AttachmentError> {
        match event {
            InputEvent::ToggleTool { tool } => {
                self.toggle_tool(&tool);
            }
            InputEvent::RemoveTool { tool_id } => {
                self.remove_tool(&tool_id);
            }
            InputEvent::ClearTools => self.clear_tools(),
            InputEvent::AddFile { file } => {
                self.add_file(file.into_attached())?;
            }
            InputEvent::RemoveFile { file_id } => {
                self.remove_file(&file_id);
            }
            InputEvent::ClearAttachments => self.clear_attachments(),
            InputEvent::SetSearch { term } => {
                self.set_search_term(term);
            }
            InputEvent::ClearSearch => self.clear_search(),
            InputEvent::DragEnter { has_files } => {
                self.drag_enter(has_files);
            }
            InputEvent::DragLeave => {
                self.drag_leave();
            }
            InputEvent::Drop { files } => {
                let report = self.drop_files(files.into_iter().map(AttachedFile::from));
                return Ok(EventOutcome::Dropped(report));
            }
        }
        Ok(EventOutcome::Applied)
    }

    #[must_use]
    pub fn snapshot(&self) -> ChatInputSnapshot {
        let files = self.selection.files();
        ChatInputSnapshot {
            selected_tools: self.selection.tools().clone(),
            attached_files: files.as_slice().to_vec(),
            max_files: files.max_files(),
            remaining_capacity: files.remaining_capacity(),
            search_term: self.search.as_str().to_string(),
            drag_active: self.drag.is_active(),
            max_file_size: self.drag.max_file_size(),
        }
    }
}
