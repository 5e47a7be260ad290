use crate::error::{ContextError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a workspace when talking to collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceHandle {
    root: Utf8PathBuf,
}

impl WorkspaceHandle {
    /// Create a handle for the workspace rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidArgument`] if `root` is empty or blank.
    pub fn new(root: impl Into<Utf8PathBuf>) -> Result<Self> {
        let root = root.into();
        if root.as_str().trim().is_empty() {
            return Err(ContextError::InvalidArgument(
                "workspace root must not be empty".to_string(),
            ));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl fmt::Display for WorkspaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Role a unit plays inside a hybris installation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Platform,
    Core,
    Config,
    Ootb,
    Custom,
    Ext,
    #[default]
    Other,
}

/// A named module of a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,

    #[serde(default)]
    pub kind: UnitKind,
}

impl Unit {
    pub fn new(name: impl Into<String>, kind: UnitKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
