use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid tracker parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Invalid smoothing weights: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, Error>;
