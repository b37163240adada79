use super::error_code::{self, TransitErrorCode};

/// Intent bank and classification result errors.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("intent bank has no intents")]
    EmptyBank,

    #[error("intent {label} has no examples")]
    NoExamples { label: String },

    #[error("intent {label} has a blank example at index {index}")]
    BlankExample { label: String, index: usize },

    #[error("intent {label} is defined more than once")]
    DuplicateLabel { label: String },

    #[error("classification result must contain at least one intent")]
    EmptyResult,
}

impl TransitErrorCode for IntentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyResult => error_code::EMPTY_RESULT,
            _ => error_code::INVALID_INTENT_BANK,
        }
    }
}
