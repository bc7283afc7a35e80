use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Not enough items to sample from")]
    PoolTooSmall,
    #[error("Board shape does not match declared config")]
    ShapeMismatch,
    #[error("Cell address is out of range")]
    InvalidAddr,
}

pub type Result<T> = core::result::Result<T, BoardError>;
