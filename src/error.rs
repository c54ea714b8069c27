use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown difficulty, expected Beginner, Intermediate or Expert")]
    InvalidDifficulty,
    #[error("Rows, columns or mine count out of bounds")]
    InvalidConfiguration,
}

pub type Result<T> = core::result::Result<T, GameError>;
