use std::fmt;

/// The error type returned by fallible `leidenrs` operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

/// The kind of an [Error](./struct.Error.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value was malformed: a membership vector of the
    /// wrong length, a vertex or community index out of range, an edge
    /// endpoint outside `[0, n)`, a non-finite or negative edge weight.
    InvalidInput,
    /// The requested configuration is not supported: a negative maximal
    /// community size, a resolution parameter on a quality function that
    /// has none, Significance on a weighted graph.
    InvalidConfig,
    /// Cached partition statistics drifted from a recomputation. Indicates
    /// a bug in the incremental bookkeeping rather than bad input.
    InvariantViolation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}
