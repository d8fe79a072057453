use serde::{Deserialize, Serialize};

/// A capability the user can enable for the next message (e.g. "Web Search").
///
/// Identity is `id`; two tools with the same id are the same tool even if
/// their display fields differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Tool {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}
