//! Errors produced while building a tree.

use thiserror::Error;

/// The ways constructing a tree from a sequence of values can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The sequence had no values so there was nothing to use as the root.
    #[error("cannot build a tree from an empty sequence")]
    Empty,
}
