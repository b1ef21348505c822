pub type TransformResult<T> = Result<T, TransformError>;

/// Degenerate input to a transform builder.
///
/// Only the checked `try_*` builders report this. The plain builders return a matrix with
/// non-finite entries instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("precondition violation in {builder}: {reason}")]
    PreconditionViolation {
        builder: &'static str,
        reason: &'static str,
    },
}

impl TransformError {
    pub fn precondition(builder: &'static str, reason: &'static str) -> Self {
        tracing::debug!(builder, reason, "rejected transform input");

        Self::PreconditionViolation { builder, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_builder_and_reason() {
        let msg = TransformError::precondition("perspective", "near must be positive").to_string();
        assert_eq!(
            msg,
            "precondition violation in perspective: near must be positive"
        );
    }
}
