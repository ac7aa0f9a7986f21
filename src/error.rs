use std::fmt;

/// All errors produced by rrwindow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WindowError {
    /// The window configuration is unusable (unknown frequency, bad week start).
    Config { message: String },

    /// An operation was called with arguments that violate its precondition.
    InvalidArgument { message: String },

    /// A normalized calendar value fell outside the supported civil range.
    Range { message: String },

    /// The selected frequency does not implement the requested operation.
    Unsupported { message: String },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { message } => write!(f, "{message}"),
            Self::InvalidArgument { message } => write!(f, "{message}"),
            Self::Range { message } => write!(f, "{message}"),
            Self::Unsupported { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for WindowError {}

impl WindowError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::Range {
            message: message.into(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Short category label, used as the prefix of [`display_rich`](Self::display_rich).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "configuration error",
            Self::InvalidArgument { .. } => "invalid argument",
            Self::Range { .. } => "out of range",
            Self::Unsupported { .. } => "unsupported",
        }
    }

    /// Format the error for terminal output.
    pub fn display_rich(&self) -> String {
        format!("error: {} ({})", self, self.kind())
    }
}

impl From<jiff::Error> for WindowError {
    fn from(e: jiff::Error) -> Self {
        Self::range(e.to_string())
    }
}
