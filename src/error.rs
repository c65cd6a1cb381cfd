use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinchError {
    #[error("failed to parse pinch config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid pinch config: {0}")]
    InvalidConfig(String),
    #[error("failed to listen for `{event}`: {reason}")]
    Listen { event: &'static str, reason: String },
}
