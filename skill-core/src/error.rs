use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("no handler matched request of kind {request_kind}")]
    Unhandled { request_kind: String },

    #[error("handler failed: {0}")]
    Handler(String),

    #[error("request envelope could not be read: {0}")]
    Envelope(String),
}

pub type Result<T> = std::result::Result<T, SkillError>;
