use super::TemplateStore;
use crate::error::Result;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, filename: &str, content: &str) -> Self {
        self.files.insert(filename.to_string(), content.to_string());
        self
    }

    pub fn content(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }
}

impl TemplateStore for InMemoryStore {
    fn write_file(&mut self, filename: &str, content: &str) -> Result<bool> {
        if self.files.contains_key(filename) {
            return Ok(false);
        }
        self.files.insert(filename.to_string(), content.to_string());
        Ok(true)
    }

    fn list_files(&self) -> Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
