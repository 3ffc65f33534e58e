use thiserror::Error;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("invalid deck config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Render(String),
}
