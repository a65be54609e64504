use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HaversineError {
    #[error("Unknown distance unit: {0}")]
    UnknownUnit(String),
}
