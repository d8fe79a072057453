use serde::Serialize;

use crate::domain::Tool;

/// Ordered set of selected tools, unique by id.
///
/// Order is selection order, which is also badge display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectedToolSet {
    tools: Vec<Tool>,
}

impl SelectedToolSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New snapshot with `tool` removed if present, appended otherwise.
    #[must_use]
    pub fn toggled(&self, tool: &Tool) -> Self {
        if self.contains(&tool.id) {
            self.without(&tool.id)
        } else {
            let mut tools = self.tools.clone();
            tools.push(tool.clone());
            Self { tools }
        }
    }

    /// New snapshot without the tool with `tool_id`.
    #[must_use]
    pub fn without(&self, tool_id: &str) -> Self {
        Self {
            tools: self
                .tools
                .iter()
                .filter(|tool| tool.id != tool_id)
                .cloned()
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, tool_id: &str) -> bool {
        self.tools.iter().any(|tool| tool.id == tool_id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Tool] {
        &self.tools
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tool> {
        self.tools.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.id.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl<'a> IntoIterator for &'a SelectedToolSet {
    type Item = &'a Tool;
    type IntoIter = std::slice::Iter<'a, Tool>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
