use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unrecognized font format")]
    UnrecognizedFormat,
}

pub type Result<T> = std::result::Result<T, FontError>;
