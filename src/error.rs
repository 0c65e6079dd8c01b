use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("Invalid hook input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HookError>;
