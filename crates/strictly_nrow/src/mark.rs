//! Player marks.

use serde::{Deserialize, Serialize};

/// The token a player places on the board: their short name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct Mark(String);

impl Mark {
    /// Creates a mark from a player name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<&str> for Mark {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
