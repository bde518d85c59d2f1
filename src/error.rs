#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The projection is read-only and namespace-unaware.
    NotSupported,
    /// Sibling navigation was asked of a node that has no parent.
    Detached,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub operation: &'static str,
    pub message: String,
}

impl Error {
    pub fn not_supported(operation: &'static str) -> Self {
        Self {
            kind: ErrorKind::NotSupported,
            operation,
            message: format!("not supported: {operation}"),
        }
    }

    pub fn detached(operation: &'static str) -> Self {
        Self {
            kind: ErrorKind::Detached,
            operation,
            message: format!("{operation} requires a parent node"),
        }
    }

    pub fn is_not_supported(&self) -> bool {
        self.kind == ErrorKind::NotSupported
    }
}
