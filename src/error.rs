use crate::node::NodeId;

/// Errors reported by the manager and the reachability engine.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The engine was configured with zero state bits.
    InvalidConfiguration(String),
    /// A caller-supplied vector does not have one entry per state bit.
    SizeMismatch { expected: usize, actual: usize },
    /// A node handle that does not belong to the manager.
    InvalidReference(NodeId),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::SizeMismatch { expected, actual } => {
                write!(f, "Size mismatch: expected {} entries, got {}", expected, actual)
            }
            Error::InvalidReference(id) => write!(f, "Invalid reference: no node {}", id),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
