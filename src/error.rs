use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PalabraError {
    #[error("unknown language slot: {0}")]
    UnknownSlot(usize),

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, PalabraError>;
