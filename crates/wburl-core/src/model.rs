//! Inputs to the URL builder: file descriptors, file-tree rows and page state.

use serde::{Deserialize, Serialize};

/// A file about to be addressed under a directory path. Only `name` is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A row from the project file tree, as the file browser hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeItem {
    pub data: ItemData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    /// Empty when the row carries no path; the builder then uses `/`.
    #[serde(default)]
    pub path: String,
    pub provider: String,
}

impl TreeItem {
    pub fn new(path: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            data: ItemData {
                path: path.into(),
                provider: provider.into(),
            },
        }
    }
}

/// Page state that used to be read from globals: the current node and the
/// browser's cookie string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageContext {
    pub node_id: String,
    pub cookies: String,
}

impl PageContext {
    pub fn new(node_id: impl Into<String>, cookies: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            cookies: cookies.into(),
        }
    }
}
