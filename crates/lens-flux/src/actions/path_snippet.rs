//! Path/snippet actions
//!
//! The details view lets the user paste an element path and resolve the
//! matching markup snippet from the target page.

use serde::{Deserialize, Serialize};

use crate::action::Action;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPayload {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetPayload {
    pub snippet: String,
}

pub struct PathSnippetActions {
    pub add_path: Action<PathPayload>,
    pub add_snippet: Action<SnippetPayload>,
    pub clear_data: Action<()>,
}

impl PathSnippetActions {
    pub fn new() -> Self {
        Self {
            add_path: Action::new(),
            add_snippet: Action::new(),
            clear_data: Action::new(),
        }
    }
}

impl Default for PathSnippetActions {
    fn default() -> Self {
        Self::new()
    }
}
