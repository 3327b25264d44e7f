use thiserror::Error;

/// Errors raised by sequence operations.
///
/// Everything here is raised synchronously by the call that detects it.
/// Only `MultipleMatches` and `DuplicateKey` are found mid-scan, because they
/// need to see more than one element before they can be decided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// An argument fell outside the values the operation accepts
    #[error("specified argument was out of the range of valid values (parameter '{param}')")]
    ArgumentOutOfRange { param: &'static str },

    /// A positional access fell outside the sequence
    ///
    /// `len` is the number of elements the sequence had, when the sequence
    /// knows it without a traversal.
    #[error("index {index} was outside the bounds of the sequence")]
    IndexOutOfRange { index: usize, len: Option<usize> },

    #[error("sequence contains no elements")]
    EmptySequence,

    #[error("sequence contains more than one matching element")]
    MultipleMatches,

    /// Two elements produced the same key while building a dictionary
    ///
    /// `index` is the traversal position of the second element.
    #[error("an item with the same key has already been added (element {index})")]
    DuplicateKey { index: usize },

    #[error("operation is not supported: {0}")]
    UnsupportedOperation(&'static str),
}

impl SeqError {
    /// True for both argument and index range failures
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            SeqError::ArgumentOutOfRange { .. } | SeqError::IndexOutOfRange { .. }
        )
    }
}

pub type SeqResult<T> = Result<T, SeqError>;
