use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Malformed JSON:API document: {0}")]
    MalformedInput(#[source] serde_json::Error),
    #[error("Invalid normalize options: {0}")]
    InvalidOptions(#[source] serde_json::Error),
    #[error("Unhandled")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl NormalizeError {
    pub fn is_malformed_input(&self) -> bool { matches!(self, NormalizeError::MalformedInput(_)) }
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self { NormalizeError::Unhandled(Box::new(err)) }
}
