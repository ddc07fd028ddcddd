//! Client-side form validation.
//!
//! Field checks return `Result<(), String>` with the message to show next to
//! the field. `ValidationErrorBuilder` collects them into `ValidationErrors`.

use std::collections::HashMap;
use std::fmt;

/// Field name to messages, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Field names, sorted for stable output.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    pub fn as_map(&self) -> &HashMap<String, Vec<String>> {
        &self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.len() == 1 {
            let message = self
                .errors
                .values()
                .next()
                .and_then(|v| v.first())
                .map(String::as_str)
                .unwrap_or("Validation failed");
            f.write_str(message)
        } else {
            write!(f, "Validation failed for {} fields", self.errors.len())
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Builder for collecting multiple validation errors
#[derive(Debug, Default)]
pub struct ValidationErrorBuilder {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationErrorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validation error for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    /// Record `result` against `field` if it is an error.
    pub fn check(&mut self, field: &str, result: Result<(), String>) -> &mut Self {
        if let Err(message) = result {
            self.add(field, message);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn build(self) -> Option<ValidationErrors> {
        if self.errors.is_empty() {
            None
        } else {
            Some(ValidationErrors {
                errors: self.errors,
            })
        }
    }

    /// Return Ok(()) if no errors, or Err(ValidationErrors) if there are errors
    pub fn finish(self) -> Result<(), ValidationErrors> {
        match self.build() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Require at least `min` characters after trimming surrounding whitespace.
pub fn validate_min_trimmed(value: &str, min: usize, message: &str) -> Result<(), String> {
    if value.trim().chars().count() < min {
        return Err(message.to_string());
    }
    Ok(())
}

/// Require a non-empty value. Whitespace counts as content.
pub fn validate_required(value: &str, message: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_min_trimmed() {
        assert!(validate_min_trimmed("Ravi", 2, "Name is required").is_ok());
        assert!(validate_min_trimmed("ab", 2, "Name is required").is_ok());

        assert_eq!(
            validate_min_trimmed(" a ", 2, "Name is required"),
            Err("Name is required".to_string())
        );
        assert!(validate_min_trimmed("", 2, "Name is required").is_err());
        assert!(validate_min_trimmed("      ", 1, "x").is_err());
    }

    #[test]
    fn test_validate_min_trimmed_counts_chars() {
        // Two characters, six bytes.
        assert!(validate_min_trimmed("अन", 2, "x").is_ok());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("2025-01-05", "Date is required").is_ok());
        assert!(validate_required(" ", "Date is required").is_ok());
        assert!(validate_required("", "Date is required").is_err());
    }

    #[test]
    fn test_builder_collects_errors() {
        let mut builder = ValidationErrorBuilder::new();
        builder.add("phone", "Valid phone number is required");
        builder.check("date", Err("Date is required".to_string()));
        builder.check("time", Ok(()));

        assert!(!builder.is_empty());
        let errors = builder.build().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first("phone"), Some("Valid phone number is required"));
        assert!(!errors.contains("time"));
        assert_eq!(errors.fields(), vec!["date", "phone"]);
        assert_eq!(errors.to_string(), "Validation failed for 2 fields");
    }

    #[test]
    fn test_single_error_display() {
        let mut builder = ValidationErrorBuilder::new();
        builder.add("doctor", "Doctor is required");
        let err = builder.finish().unwrap_err();
        assert_eq!(err.to_string(), "Doctor is required");
    }

    #[test]
    fn test_empty_builder_finishes_ok() {
        assert!(ValidationErrorBuilder::new().finish().is_ok());
    }
}
