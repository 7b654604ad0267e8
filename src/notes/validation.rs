//! Payload validation shared by the create and update handlers.

use std::collections::BTreeMap;

/// Maximum title length in characters, after trimming.
pub const MAX_TITLE_LEN: usize = 200;

/// Field name → human-readable messages, as returned in 400 bodies.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// Validate a create/update payload. The same rules apply to both.
/// Returns `None` when the payload is valid; content is always accepted.
pub fn validate_note_payload(title: Option<&str>) -> Option<ValidationErrors> {
    let mut errors = ValidationErrors::new();

    match title {
        None => {
            errors.insert("Title".to_string(), vec!["Title is required.".to_string()]);
        }
        Some(t) if t.trim().is_empty() => {
            errors.insert("Title".to_string(), vec!["Title is required.".to_string()]);
        }
        Some(t) if t.trim().chars().count() > MAX_TITLE_LEN => {
            errors.insert(
                "Title".to_string(),
                vec!["Title must be at most 200 characters.".to_string()],
            );
        }
        Some(_) => {}
    }

    if errors.is_empty() { None } else { Some(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_title_is_required_error() {
        let errors = validate_note_payload(None).expect("should fail");
        assert_eq!(errors["Title"], vec!["Title is required.".to_string()]);
    }

    #[test]
    fn test_empty_title_is_required_error() {
        let errors = validate_note_payload(Some("")).expect("should fail");
        assert_eq!(errors["Title"], vec!["Title is required.".to_string()]);
    }

    #[test]
    fn test_whitespace_title_is_required_error() {
        let errors = validate_note_payload(Some("  \t ")).expect("should fail");
        assert_eq!(errors["Title"], vec!["Title is required.".to_string()]);
    }

    #[test]
    fn test_title_over_limit_is_rejected() {
        let title = "a".repeat(MAX_TITLE_LEN + 1);
        let errors = validate_note_payload(Some(&title)).expect("should fail");
        assert_eq!(
            errors["Title"],
            vec!["Title must be at most 200 characters.".to_string()]
        );
    }

    #[test]
    fn test_title_at_limit_is_accepted() {
        let title = "a".repeat(MAX_TITLE_LEN);
        assert!(validate_note_payload(Some(&title)).is_none());
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        // 200 two-byte characters is still 200 characters
        let title = "é".repeat(MAX_TITLE_LEN);
        assert!(validate_note_payload(Some(&title)).is_none());
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count_toward_limit() {
        let title = format!("  {}  ", "a".repeat(MAX_TITLE_LEN));
        assert!(validate_note_payload(Some(&title)).is_none());
    }

    #[test]
    fn test_exactly_one_error_per_failing_payload() {
        let errors = validate_note_payload(Some(" ")).expect("should fail");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["Title"].len(), 1);
    }
}
