use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GeneratorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeneratorError::Config(_) => ErrorKind::Config,
            GeneratorError::Transport(_) => ErrorKind::Transport,
            GeneratorError::Service { .. } => ErrorKind::Service,
            GeneratorError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Transport,
    Service,
    MalformedResponse,
}

/// Cloneable view of a [`GeneratorError`] that the state controller can hold
/// onto after the underlying error has been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&GeneratorError> for ErrorInfo {
    fn from(error: &GeneratorError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
