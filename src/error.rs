use thiserror::Error;

pub type RangeResult<T> = Result<T, RangeError>;

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("invalid chart layout: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvalidLayout {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
