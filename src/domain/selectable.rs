use serde::{Deserialize, Serialize};

use super::{AttachedFile, Tool};

/// Anything that can be searched by display name and identified by id.
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl Named for Tool {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for AttachedFile {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// An entry in a mixed menu of tools and files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selectable {
    Tool(Tool),
    File(AttachedFile),
}

impl Named for Selectable {
    fn id(&self) -> &str {
        match self {
            Self::Tool(tool) => &tool.id,
            Self::File(file) => &file.id,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Tool(tool) => &tool.name,
            Self::File(file) => &file.name,
        }
    }
}

impl From<Tool> for Selectable {
    fn from(tool: Tool) -> Self {
        Self::Tool(tool)
    }
}

impl From<AttachedFile> for Selectable {
    fn from(file: AttachedFile) -> Self {
        Self::File(file)
    }
}
