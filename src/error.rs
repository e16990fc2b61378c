//! Errors reported by the frame engine.
//!
//! Every checked contract violation comes back to the caller as a
//! [`FrameError`]. Out-of-range row or column indices are not checked and
//! panic through slice indexing.

use thiserror::Error;

use crate::frame::DataType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    /// A required argument was absent, e.g. `add_column(None)`.
    #[error("null argument: {0}")]
    NullArgument(&'static str),

    /// A column or row slot was accessed as the wrong type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: DataType, found: DataType },

    /// A row was used with a frame whose schema differs from the row's.
    #[error("schema mismatch: frame is [{expected}], row is [{found}]")]
    SchemaMismatch { expected: String, found: String },

    /// A schema tag could not be parsed.
    #[error("invalid type tag '{0}'")]
    InvalidType(char),
}

impl FrameError {
    /// Report the error at `warn` level before handing it back.
    pub(crate) fn logged(self, operation: &str) -> FrameError {
        log::warn!("{}: {}", operation, self);
        self
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
