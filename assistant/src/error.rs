use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("upload rejected ({status}): {body}")]
    UploadRejected { status: StatusCode, body: String },
    #[error("ask rejected ({status})")]
    AskRejected { status: StatusCode },
    #[error("invalid file: {0}")]
    InvalidFile(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
