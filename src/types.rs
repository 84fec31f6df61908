use thiserror::Error;

/// Errors raised while talking to the controller or running a sync.
#[derive(Debug, Error)]
pub enum PanoramaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("controller returned HTTP {status}")]
    HttpStatus { status: u16, body: String },

    #[error("unexpected controller response: {message}")]
    Protocol { message: String, body: String },

    #[error("controller rejected the commit-all request")]
    SubmissionRejected { body: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("confirmation prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl PanoramaError {
    pub fn protocol(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
            body: body.into(),
        }
    }

    /// Network, timeout and non-2xx failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpStatus { .. })
    }

    /// Raw controller body attached to the error, if any.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. }
            | Self::Protocol { body, .. }
            | Self::SubmissionRejected { body } => Some(body.as_str()),
            _ => None,
        }
    }
}
