use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Malformed entry: {0}")]
    MalformedEntry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Authentication unavailable: {0}")]
    AuthUnavailable(String),

    #[error("Branch mismatch: local HEAD is '{local}', configured branch is '{expected}'")]
    BranchMismatch { local: String, expected: String },

    #[error("Push rejected: {0}")]
    PushRejected(String),

    #[error("Git command error: {0}")]
    GitCommand(String),
}

pub type Result<T> = std::result::Result<T, Error>;
