use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Regex for validating full name fields
    /// Must start with a letter; allows letters, marks, spaces, dots,
    /// commas, apostrophes and hyphens
    /// - Valid: "A. User", "Jean-Luc Picard", "O'Brien"
    /// - Invalid: "123", "  ", "<script>"
    pub static ref FULL_NAME_REGEX: Regex = Regex::new(r"^[\p{L}][\p{L}\p{M} .,'\-]*$").unwrap();
}

/// Flatten `validator` errors into "field: message" strings for the
/// response envelope. Sorted by field so output is deterministic.
pub fn collect_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut out: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_full_name_regex_valid() {
        assert!(FULL_NAME_REGEX.is_match("A. User"));
        assert!(FULL_NAME_REGEX.is_match("Jean-Luc Picard"));
        assert!(FULL_NAME_REGEX.is_match("O'Brien"));
        assert!(FULL_NAME_REGEX.is_match("Anne Marie, Jr."));
    }

    #[test]
    fn test_full_name_regex_invalid() {
        assert!(!FULL_NAME_REGEX.is_match("123"));
        assert!(!FULL_NAME_REGEX.is_match(" leading space"));
        assert!(!FULL_NAME_REGEX.is_match("<script>"));
        assert!(!FULL_NAME_REGEX.is_match(""));
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(email(message = "Invalid email format"))]
        email: String,
        #[validate(length(min = 1, message = "description is required"))]
        description: String,
    }

    #[test]
    fn test_collect_validation_errors_is_field_level_and_sorted() {
        let sample = Sample {
            email: "not-an-email".to_string(),
            description: String::new(),
        };
        let errors = sample.validate().unwrap_err();
        let collected = collect_validation_errors(&errors);
        assert_eq!(
            collected,
            vec![
                "description: description is required".to_string(),
                "email: Invalid email format".to_string(),
            ]
        );
    }
}
