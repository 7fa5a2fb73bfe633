use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid hand: expected {expected} landmarks, found {found}")]
    InvalidLandmarkCount { expected: usize, found: usize },

    #[error("session is already running")]
    AlreadyRunning,
}

pub type Result<T> = std::result::Result<T, GameError>;
