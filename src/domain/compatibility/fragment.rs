//! Prioritized text fragments joined into narrative paragraphs.

use serde::Serialize;

/// A sentence with an explicit ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub priority: u8,
    pub text: String,
}

impl Fragment {
    pub fn new(priority: u8, text: impl Into<String>) -> Self {
        Self {
            priority,
            text: text.into(),
        }
    }
}

/// Joins fragments by priority (stable for equal priorities), skipping empty text.
pub fn join_fragments(mut fragments: Vec<Fragment>) -> String {
    fragments.sort_by_key(|f| f.priority);
    fragments
        .into_iter()
        .map(|f| f.text.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
