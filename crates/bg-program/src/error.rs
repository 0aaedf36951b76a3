use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("program JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid link {0:?}: expected a brick object, \"Nil\", or null")]
    BadLink(String),

    #[error("invalid brick argument {0}: expected a string or a number")]
    BadArgument(String),

    #[error("program has more than u32::MAX bricks")]
    TooLarge,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProgramResult<T> = Result<T, ProgramError>;
