//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input document could not be read or parsed.
    #[error("Invalid input: {0}")]
    Input(String),

    /// Output failed a reconciliation check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            Self::Input(_) | Self::Validation(_) => 65,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Input(_) => "INVALID_INPUT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Config(String::new()), 78, "CONFIG_ERROR")]
    #[case(AppError::Input(String::new()), 65, "INVALID_INPUT")]
    #[case(AppError::Validation(String::new()), 65, "VALIDATION_ERROR")]
    #[case(AppError::Internal(String::new()), 70, "INTERNAL_ERROR")]
    fn test_error_codes(#[case] err: AppError, #[case] exit: i32, #[case] code: &str) {
        assert_eq!(err.exit_code(), exit);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(AppError::Input("msg".into()).to_string(), "Invalid input: msg");
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = config::ConfigError::Message("missing key".into()).into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: missing key");
    }
}
