//! Serializable user events that drive a [`ChatInput`](crate::ChatInput).
//!
//! Hosts that already dispatch events as data (or a scripted replay) can
//! feed these straight into [`ChatInput::apply`](crate::ChatInput::apply)
//! instead of calling the individual operations.

use serde::{Deserialize, Serialize};

use crate::chat_input::DropReport;
use crate::domain::{AttachedFile, Tool};

/// File metadata as supplied by an event source.
///
/// Missing ids are generated, missing MIME types are guessed from the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl FileSpec {
    #[must_use]
    pub fn into_attached(self) -> AttachedFile {
        match (self.id, self.mime_type) {
            (Some(id), Some(mime)) => AttachedFile::with_id(id, self.name, self.size, mime),
            (Some(id), None) => {
                let guessed = AttachedFile::from_name(self.name, self.size);
                AttachedFile { id, ..guessed }
            }
            (None, Some(mime)) => AttachedFile::new(self.name, self.size, mime),
            (None, None) => AttachedFile::from_name(self.name, self.size),
        }
    }
}

impl From<FileSpec> for AttachedFile {
    fn from(source: FileSpec) -> Self {
        source.into_attached()
    }
}

fn default_has_files() -> bool {
    true
}

/// A discrete interaction with the chat input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    ToggleTool {
        tool: Tool,
    },
    RemoveTool {
        tool_id: String,
    },
    ClearTools,
    AddFile {
        file: FileSpec,
    },
    RemoveFile {
        file_id: String,
    },
    ClearAttachments,
    SetSearch {
        term: String,
    },
    ClearSearch,
    DragEnter {
        #[serde(default = "default_has_files")]
        has_files: bool,
    },
    DragLeave,
    Drop {
        files: Vec<FileSpec>,
    },
}

/// What applying an event produced, beyond the state change itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    Applied,
    Dropped(DropReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_script() {
        let script = r"
- type: toggle_tool
  tool: { id: web, name: Web Search }
- type: add_file
  file: { name: photo.png, size: 2048 }
- type: drag_enter
- type: drop
  files:
    - { id: big, name: movie.mp4, size: 99999999 }
";
        let events: Vec<InputEvent> = serde_yaml::from_str(script).unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], InputEvent::ToggleTool { tool } if tool.description.is_empty()));
        assert_eq!(events[2], InputEvent::DragEnter { has_files: true });
        assert!(matches!(&events[3], InputEvent::Drop { files } if files.len() == 1));
    }

    #[test]
    fn test_file_spec_defaults() {
        let described = FileSpec {
            id: Some("f1".to_string()),
            name: "photo.png".to_string(),
            size: 10,
            mime_type: None,
        };
        let file = described.into_attached();
        assert_eq!(file.id, "f1");
        assert_eq!(file.mime_type, "image/png");
        assert!(file.is_image);

        let explicit = FileSpec {
            id: None,
            name: "data".to_string(),
            size: 1,
            mime_type: Some("text/csv".to_string()),
        }
        .into_attached();
        assert_eq!(explicit.mime_type, "text/csv");
        assert!(!explicit.id.is_empty());
    }
}
