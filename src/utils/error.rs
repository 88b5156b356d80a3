use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl PuzzleError {
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Input problems are `High`; a broken output stream is `Critical`.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Overflow { .. } | Self::InvalidArgument { .. } => ErrorSeverity::High,
            Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Overflow { operation } => {
                format!("The numbers are too large for {}", operation)
            }
            Self::InvalidArgument { field, reason, .. } => {
                format!("Setting '{}' is not usable: {}", field, reason)
            }
            Self::Io(e) => format!("Could not write the results: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
