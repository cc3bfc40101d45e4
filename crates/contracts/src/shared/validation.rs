//! Validation rules for form fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for a required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    /// Add a maximum length constraint
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Check if the field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} must not be empty", field_label));
        }

        if let Some(min) = self.min_length {
            if value.len() < min {
                return Err(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if value.len() > max {
                return Err(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_empty() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("", "Prompt").is_err());
        assert!(rules.validate_string("   ", "Prompt").is_err());
    }

    #[test]
    fn test_required_accepts_non_empty() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("hello", "Prompt").is_ok());
    }

    #[test]
    fn test_none_accepts_empty() {
        let rules = ValidationRules::none();
        assert!(rules.validate_string("", "Comment").is_ok());
    }

    #[test]
    fn test_max_length() {
        let rules = ValidationRules::required().with_max_length(5);
        assert!(rules.validate_string("abcde", "Code").is_ok());
        assert!(rules.validate_string("abcdef", "Code").is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let rules = ValidationRules::required();
        let err = rules.validate_string("", "Prompt").unwrap_err();
        assert!(err.contains("Prompt"));
    }
}
