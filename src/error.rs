use crate::units::format_size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Server,
    Transport,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Please select a video to upload")]
    NoFileSelected,

    #[error("File is too large: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Server reported a failure")]
    Server(Option<String>),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Base URL cannot carry path segments: {0}")]
    InvalidBaseUrl(String),

    #[error("Video name cannot be used as a path segment: {0:?}")]
    InvalidName(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NoFileSelected
            | ClientError::FileTooLarge { .. }
            | ClientError::InvalidName(_) => ErrorKind::Validation,
            ClientError::Server(_) => ErrorKind::Server,
            ClientError::Http(_)
            | ClientError::Io(_)
            | ClientError::InvalidUrl(_)
            | ClientError::InvalidBaseUrl(_) => ErrorKind::Transport,
        }
    }

    /// Text shown to the user. Transport failures never surface their detail.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::NoFileSelected => self.to_string(),
            ClientError::FileTooLarge { size, limit } => {
                let (size_text, limit_text) = (format_size(*size), format_size(*limit));
                if size_text == limit_text {
                    format!("File is too large. Maximum size is {}", limit_text)
                } else {
                    format!(
                        "File is too large ({}). Maximum size is {}",
                        size_text, limit_text
                    )
                }
            }
            ClientError::Server(Some(text)) => text.clone(),
            ClientError::Server(None) => fallback.to_string(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
