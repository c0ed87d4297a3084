//! Serialisable outcome of a single validation call.

use serde::Serialize;

use crate::utils::validation::ValidationError;

/// Either a cleaned value ready for storage, or a reason for rejection.
///
/// `sanitized_value` is empty whenever `is_valid` is false, and `error` is
/// only present on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub sanitized_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid(value: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            sanitized_value: value.into(),
            error: None,
        }
    }

    pub fn invalid(error: &ValidationError) -> Self {
        Self {
            is_valid: false,
            sanitized_value: String::new(),
            error: Some(error.to_string()),
        }
    }

    /// Returns the sanitized value, or the error message on failure
    pub fn into_result(self) -> Result<String, String> {
        match self.error {
            None if self.is_valid => Ok(self.sanitized_value),
            Some(error) => Err(error),
            None => Err(String::new()),
        }
    }
}

impl From<Result<String, ValidationError>> for ValidationResult {
    fn from(result: Result<String, ValidationError>) -> Self {
        match result {
            Ok(value) => Self::valid(value),
            Err(error) => Self::invalid(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_value_only() {
        let result = ValidationResult::from(Ok::<_, ValidationError>("ok".to_string()));
        assert!(result.is_valid);
        assert_eq!(result.sanitized_value, "ok");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_failure_carries_error_only() {
        let result = ValidationResult::from(Err(ValidationError::Suspicious));
        assert!(!result.is_valid);
        assert!(result.sanitized_value.is_empty());
        assert_eq!(result.error.as_deref(), Some("Invalid input detected"));
        assert_eq!(result.into_result(), Err("Invalid input detected".to_string()));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(ValidationResult::valid("a@b.ch")).unwrap();
        assert_eq!(json, serde_json::json!({"isValid": true, "sanitizedValue": "a@b.ch"}));
    }
}
