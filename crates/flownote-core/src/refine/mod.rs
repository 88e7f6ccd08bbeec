//! Typo-correction capability.
//!
//! The vault only depends on [`Refiner`]; the HTTP client in [`http`] is one
//! implementation of it. A refiner returns corrected text and nothing else,
//! and every failure is recoverable: the entry is left as it was.

pub mod http;

use thiserror::Error;

pub use http::{GeminiRefiner, RefinerConfig};

/// Instruction given to the correction model.
pub const CORRECTION_CONTRACT: &str = "You are a proofreader. Fix only spelling typos and \
accidentally duplicated words in the text you are given. Do not change vocabulary, tone, \
style, sentence structure, line breaks or punctuation in any other way. Return only the \
corrected text, with no commentary, quotes or formatting.";

/// Failure of the refinement collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefinementError {
    /// No credentials or endpoint available
    #[error("refinement service is not configured: {0}")]
    NotConfigured(String),

    /// Network-level failure (timeout, DNS, TLS, connection)
    #[error("network error ({kind})")]
    Transport { kind: &'static str },

    /// Non-success HTTP status other than quota exhaustion
    #[error("service returned HTTP {status}")]
    Http { status: u16 },

    /// Rate limit or quota exhausted
    #[error("service quota exhausted")]
    Quota,

    /// Response body did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Response parsed but carried no text
    #[error("service returned no text")]
    EmptyResponse,
}

/// Narrow correction capability: `correct(text) -> text`.
pub trait Refiner {
    /// Return `text` with typos and accidental duplicate words fixed.
    ///
    /// # Errors
    ///
    /// Any `RefinementError`; callers treat all of them as retryable.
    fn correct(&self, text: &str) -> Result<String, RefinementError>;
}

impl<R: Refiner + ?Sized> Refiner for &R {
    fn correct(&self, text: &str) -> Result<String, RefinementError> {
        (**self).correct(text)
    }
}

impl<R: Refiner + ?Sized> Refiner for Box<R> {
    fn correct(&self, text: &str) -> Result<String, RefinementError> {
        (**self).correct(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Refiner for Upper {
        fn correct(&self, text: &str) -> Result<String, RefinementError> {
            Ok(text.to_uppercase())
        }
    }

    #[test]
    fn test_boxed_refiner_delegates() {
        let boxed: Box<dyn Refiner> = Box::new(Upper);
        assert_eq!(boxed.correct("abc").unwrap(), "ABC");
    }

    #[test]
    fn test_error_messages_are_short() {
        assert_eq!(
            RefinementError::Http { status: 500 }.to_string(),
            "service returned HTTP 500"
        );
        assert_eq!(
            RefinementError::Transport { kind: "timeout" }.to_string(),
            "network error (timeout)"
        );
    }
}
