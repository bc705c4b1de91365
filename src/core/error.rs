use std::fmt;
use thiserror::Error;

/// Tag carried by every [`Fault`].
///
/// Feedback classification matches on this tag instead of inspecting
/// concrete error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// A required argument was not supplied.
    MissingArgument,
    /// An argument was supplied but is malformed or conflicts with stored data.
    InvalidArgument,
    /// Anything else: storage, locking, unexpected state.
    System,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::MissingArgument => write!(f, "missing argument"),
            FaultKind::InvalidArgument => write!(f, "invalid argument"),
            FaultKind::System => write!(f, "system"),
        }
    }
}

/// Fault raised by a persistence or lookup operation.
///
/// Faults nest: a service may wrap a lower level fault with its own context
/// through [`Fault::caused_by`]. Consumers that report to a user usually want
/// [`Fault::innermost`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
    #[source]
    cause: Option<Box<Fault>>,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::new(FaultKind::MissingArgument, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(FaultKind::InvalidArgument, message)
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::new(FaultKind::System, message)
    }

    /// Wraps `cause` beneath this fault.
    pub fn caused_by(mut self, cause: Fault) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }

    /// Follows the cause chain down to the deepest fault.
    pub fn innermost(&self) -> &Fault {
        let mut current = self;
        while let Some(next) = current.cause.as_deref() {
            current = next;
        }
        current
    }
}

pub type FaultResult<T> = std::result::Result<T, Fault>;

/// Errors surfaced while setting up an editor page or its configuration.
///
/// Actions on an initialized page never return these; they turn every
/// failure into feedback instead.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Record '{0}' not found")]
    NotFound(String),

    #[error("Service error: {0}")]
    Service(#[from] Fault),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_innermost_of_flat_fault_is_itself() {
        let fault = Fault::invalid_argument("bad price");
        assert_eq!(fault.innermost(), &fault);
    }

    #[test]
    fn test_innermost_follows_chain() {
        let fault = Fault::system("save failed").caused_by(
            Fault::system("transaction aborted")
                .caused_by(Fault::missing_argument("product name is required")),
        );

        let inner = fault.innermost();
        assert_eq!(inner.kind(), FaultKind::MissingArgument);
        assert_eq!(inner.message(), "product name is required");
        assert_eq!(fault.kind(), FaultKind::System);
    }

    #[test]
    fn test_source_exposes_cause() {
        let fault = Fault::system("outer").caused_by(Fault::invalid_argument("inner"));
        let source = fault.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("inner"));
    }

    #[test]
    fn test_editor_error_from_fault() {
        let err: EditorError = Fault::system("offline").into();
        assert_eq!(err.to_string(), "Service error: offline");
    }
}
