use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("malformed speedgolf score: {0:?}")]
    Malformed(String),
    #[error("unparseable instant: {0}")]
    UnparseableInstant(String),
    #[error("start instant must come before finish instant")]
    UnorderedInstants,
    #[error("speedgolf score out of range")]
    OutOfRange,
}

impl From<chrono::ParseError> for ScoreError {
    fn from(err: chrono::ParseError) -> Self {
        Self::UnparseableInstant(err.to_string())
    }
}

impl From<std::num::ParseIntError> for ScoreError {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::Malformed(err.to_string())
    }
}
