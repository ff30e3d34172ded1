//! Errors surfaced by the exercise handlers.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::{AdvisorError, ExtractionError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Could not extract enough text from the provided source. Please try a different file or URL.")]
    InsufficientContent { chars: usize },
}

impl ExerciseError {
    /// True when the request itself was unusable.
    pub fn is_client_error(&self) -> bool {
        match self {
            ExerciseError::Validation(_) | ExerciseError::InsufficientContent { .. } => true,
            ExerciseError::Extraction(e) => e.is_client_error(),
            ExerciseError::Advisor(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::BlockReason;

    #[test]
    fn client_errors_are_classified() {
        assert!(ExerciseError::from(ValidationError::empty_field("input")).is_client_error());
        assert!(ExerciseError::InsufficientContent { chars: 12 }.is_client_error());
        assert!(ExerciseError::from(ExtractionError::BlockedHost(BlockReason::Localhost))
            .is_client_error());

        assert!(!ExerciseError::from(ExtractionError::HttpStatus { status: 403 }).is_client_error());
        assert!(!ExerciseError::from(AdvisorError::Disabled).is_client_error());
    }

    #[test]
    fn validation_message_passes_through() {
        let err = ExerciseError::from(ValidationError::too_short("input", 100, 20));
        assert_eq!(
            err.to_string(),
            "Field 'input' must be at least 100 characters, got 20"
        );
    }
}
