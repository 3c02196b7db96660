use thiserror::Error;

/// Every way a search can go wrong between building the request URL
/// and decoding the last item of the response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("URL creation failed: {0}")]
    InvalidUrl(String),
    #[error("problem retrieving the book JSON results: {0}")]
    Transport(String),
    #[error("error response code: {0}")]
    Status(u16),
    #[error("problem parsing the book JSON results: {0}")]
    Decode(String),
}

impl FetchError {
    /// Label attached as the `kind` field of log events. A non-200
    /// status is reported as a transport failure.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::Transport(_) | FetchError::Status(_) => "transport",
            FetchError::Decode(_) => "decode",
        }
    }
}
