use thiserror::Error;

/// Errors raised by the bucket container substrate and the structures built
/// on top of it.
///
/// `OutOfRange` and `InvalidHandle` indicate caller bugs and are checked
/// unconditionally, the checks are O(1). `Empty` is an ordinary precondition
/// failure that callers can avoid by checking `len` first.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BucketError {
    /// A bucket or vertex index outside the range fixed at construction.
    #[error("index {index} outside bucket range [{bottom}, {top})")]
    OutOfRange {
        index: usize,
        bottom: usize,
        top: usize,
    },

    /// A handle that does not refer to a live entry, typically one whose
    /// entry has already been removed.
    #[error("handle does not refer to a live entry")]
    InvalidHandle,

    /// Peek or pop on an empty structure.
    #[error("structure is empty")]
    Empty,
}

/// Errors raised while reading a graph from text input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// An edge line appeared before any header line declaring the vertex
    /// and edge counts.
    #[error("line {line}: edge before header")]
    MissingHeader { line: usize },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// An endpoint id outside the declared vertex count, reported as
    /// written in the file.
    #[error("line {line}: vertex {vertex} not among the declared {vertices} vertices")]
    EndpointOutOfRange {
        line: usize,
        vertex: usize,
        vertices: usize,
    },
}

impl ParseError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ParseError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias; structure operations default to [`BucketError`].
pub type Result<T, E = BucketError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_reports_range() {
        let err = BucketError::OutOfRange {
            index: 7,
            bottom: 0,
            top: 5,
        };
        assert_eq!(err.to_string(), "index 7 outside bucket range [0, 5)");
    }

    #[test]
    fn test_parse_error_carries_line() {
        let err = ParseError::malformed(12, "expected two endpoints");
        assert_eq!(err.to_string(), "line 12: expected two endpoints");
    }
}
