use super::DocumentStore;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    content: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from arbitrary raw content, valid or not.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.content.clone())
    }

    fn save(&mut self, content: &str) -> Result<()> {
        self.content = Some(content.to_string());
        Ok(())
    }
}
