//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolCalcError {
    #[error("VALIDATION/{0}")]
    Validation(String),

    #[error("PROFILE/{0}")]
    Profile(String),

    #[error("SERIALIZE/{0}")]
    Serialize(String),

    #[error("RENDER/{0}")]
    Render(String),
}

impl From<serde_json::Error> for PoolCalcError {
    fn from(err: serde_json::Error) -> Self {
        PoolCalcError::Serialize(err.to_string())
    }
}
