//! Selected tools and attached files for one chat-input instance.
//!
//! # Architecture
//!
//! - [`SelectedToolSet`]: ordered, id-unique snapshot of enabled tools
//! - [`AttachedFileSet`]: ordered, id-unique, capacity-bounded snapshot of files
//! - [`SelectionEngine`]: owns both sets and swaps in new snapshots on mutation
//!
//! # Example
//!
//! ```rust
//! use chat_input_state::domain::{AttachedFile, Tool};
//! use chat_input_state::selection::SelectionEngine;
//!
//! let mut engine = SelectionEngine::new(2);
//! let search = Tool::new("web", "Web Search", "Search the web");
//!
//! engine.toggle_tool(&search);
//! assert!(engine.tools().contains("web"));
//!
//! engine.add_file(AttachedFile::new("a.txt", 10, "text/plain")).unwrap();
//! engine.add_file(AttachedFile::new("b.txt", 10, "text/plain")).unwrap();
//! assert!(engine.add_file(AttachedFile::new("c.txt", 10, "text/plain")).is_err());
//! assert_eq!(engine.files().len(), 2);
//! ```

mod file_set;
mod tool_set;

pub use file_set::AttachedFileSet;
pub use tool_set::SelectedToolSet;

use tracing::{debug, info};

use crate::domain::{AttachedFile, Tool};
use crate::error::CapacityError;

/// Owner of the tool and file selections.
///
/// Every mutation replaces the held snapshot with a new one; callers that
/// kept an earlier snapshot still see the old state.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    tools: SelectedToolSet,
    files: AttachedFileSet,
}

impl SelectionEngine {
    /// Create an empty selection with the given attachment cap.
    #[must_use]
    pub fn new(max_files: usize) -> Self {
        Self {
            tools: SelectedToolSet::new(),
            files: AttachedFileSet::new(max_files),
        }
    }

    /// Currently selected tools, in selection order.
    #[must_use]
    pub fn tools(&self) -> &SelectedToolSet {
        &self.tools
    }

    /// Currently attached files, in attachment order.
    #[must_use]
    pub fn files(&self) -> &AttachedFileSet {
        &self.files
    }

    /// Select the tool if it is not selected, deselect it otherwise.
    pub fn toggle_tool(&mut self, tool: &Tool) -> &SelectedToolSet {
        self.tools = self.tools.toggled(tool);
        debug!(
            name: "selection.tool.toggled",
            tool_id = %tool.id,
            selected = self.tools.contains(&tool.id),
            count = self.tools.len(),
            "Tool toggled"
        );
        &self.tools
    }

    /// Deselect a tool by id. Unknown ids are ignored.
    pub fn remove_tool(&mut self, tool_id: &str) -> &SelectedToolSet {
        if self.tools.contains(tool_id) {
            self.tools = self.tools.without(tool_id);
            debug!(name: "selection.tool.removed", tool_id, count = self.tools.len(), "Tool removed");
        }
        &self.tools
    }

    /// Attach a file, failing without side effects when the set is full.
    pub fn add_file(&mut self, file: AttachedFile) -> Result<&AttachedFileSet, CapacityError> {
        let file_id = file.id.clone();
        match self.files.try_with(file) {
            Ok(next) => {
                self.files = next;
                debug!(
                    name: "selection.file.added",
                    file_id = %file_id,
                    count = self.files.len(),
                    max_files = self.files.max_files(),
                    "File attached"
                );
                Ok(&self.files)
            }
            Err(err) => {
                info!(
                    name: "selection.file.rejected",
                    file_id = %file_id,
                    max_files = err.max_files,
                    "Attachment rejected: capacity reached"
                );
                Err(err)
            }
        }
    }

    /// Detach a file by id. Unknown ids are ignored.
    pub fn remove_file(&mut self, file_id: &str) -> &AttachedFileSet {
        if self.files.contains(file_id) {
            self.files = self.files.without(file_id);
            debug!(name: "selection.file.removed", file_id, count = self.files.len(), "File removed");
        }
        &self.files
    }

    /// Deselect every tool.
    pub fn clear_tools(&mut self) {
        self.tools = SelectedToolSet::new();
    }

    /// Detach every file, keeping the cap.
    pub fn clear_files(&mut self) {
        self.files = AttachedFileSet::new(self.files.max_files());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str) -> AttachedFile {
        AttachedFile::with_id(id, format!("{id}.txt"), 100, "text/plain")
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut engine = SelectionEngine::new(5);
        let web = Tool::new("web", "Web Search", "");
        let db = Tool::new("db", "Database Query", "");

        engine.toggle_tool(&db);
        let before = engine.tools().clone();

        engine.toggle_tool(&web);
        engine.toggle_tool(&web);
        assert_eq!(engine.tools(), &before);
    }

    #[test]
    fn test_capacity_scenario() {
        let mut engine = SelectionEngine::new(2);

        assert!(engine.add_file(file("a")).is_ok());
        assert!(engine.add_file(file("b")).is_ok());

        let err = engine.add_file(file("c")).unwrap_err();
        assert_eq!(err, CapacityError { max_files: 2 });
        assert_eq!(engine.files().ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut engine = SelectionEngine::new(3);
        engine.add_file(file("a")).unwrap();
        engine.toggle_tool(&Tool::new("web", "Web Search", ""));

        assert_eq!(engine.remove_file("missing").len(), 1);
        assert_eq!(engine.remove_tool("missing").len(), 1);
    }

    #[test]
    fn test_removal_frees_capacity() {
        let mut engine = SelectionEngine::new(1);
        engine.add_file(file("a")).unwrap();
        assert!(engine.add_file(file("b")).is_err());

        engine.remove_file("a");
        assert!(engine.add_file(file("b")).is_ok());
        assert_eq!(engine.files().ids(), vec!["b"]);
    }

    #[test]
    fn test_clear() {
        let mut engine = SelectionEngine::new(4);
        engine.add_file(file("a")).unwrap();
        engine.toggle_tool(&Tool::new("web", "Web Search", ""));

        engine.clear_files();
        engine.clear_tools();

        assert!(engine.files().is_empty());
        assert!(engine.tools().is_empty());
        assert_eq!(engine.files().max_files(), 4);
    }
}
