use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserStoreError {
    #[error("--{0} has to be specified")]
    MissingParameter(&'static str),

    #[error("Format error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation {0} not allowed!")]
    UnknownOperation(String),
}

pub type Result<T> = std::result::Result<T, UserStoreError>;
