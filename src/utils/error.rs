use thiserror::Error;

#[derive(Error, Debug)]
pub enum FerienError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Malformed record: {message}")]
    MalformedRecord { message: String },

    #[error("ferien-api.de failed with http code = '{status}'\nError: {body}")]
    Transport { status: u16, body: String },

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FerienError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            message: message.into(),
        }
    }

    /// True for failures that happened on the wire: bad status or no response at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Request(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Process exit code used by the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::Config { .. } | Self::Io(_) => 2,
            Self::Transport { .. } | Self::Request(_) => 3,
            Self::MalformedRecord { .. } => 4,
            Self::Csv(_) | Self::Serialization(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FerienError>;
