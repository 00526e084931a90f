//! Failure taxonomy for graph operations.
//!
//! Every variant is reported before any storage is touched, so a rejected call
//! leaves the graph exactly as it was.

use core::fmt;

/// Why an edge insertion was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionError {
    /// `from` and `to` name the same vertex.
    SelfLoop,
    /// An edge with the same ordered endpoints already exists.
    Duplicate,
}

impl fmt::Display for InsertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop => f.write_str("self-loops are not allowed"),
            Self::Duplicate => f.write_str("an edge between these vertices already exists"),
        }
    }
}

impl std::error::Error for InsertionError {}

/// The error type for graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A handle was issued by a different graph or refers to a removed entity.
    Position,
    /// An edge insertion would break the no-self-loop or no-duplicate invariant.
    Insertion(InsertionError),
    /// A vertex still has incident edges.
    Removal,
}

impl GraphError {
    /// Returns `true` for [`GraphError::Position`].
    pub fn is_position(&self) -> bool {
        matches!(self, Self::Position)
    }

    /// Returns `true` for any [`GraphError::Insertion`].
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::Insertion(_))
    }

    /// Returns `true` for [`GraphError::Removal`].
    pub fn is_removal(&self) -> bool {
        matches!(self, Self::Removal)
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position => f.write_str("invalid position"),
            Self::Insertion(reason) => write!(f, "edge insertion failed: {reason}"),
            Self::Removal => f.write_str("vertex still has incident edges"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Insertion(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<InsertionError> for GraphError {
    fn from(reason: InsertionError) -> Self {
        Self::Insertion(reason)
    }
}
