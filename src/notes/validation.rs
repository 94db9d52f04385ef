use super::types::NoteFormValues;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

// Lengths are Unicode scalar counts, not bytes.
pub fn validate(values: &NoteFormValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    let title_chars = values.title.chars().count();
    if values.title.is_empty() {
        errors.title = Some("Title is required".to_string());
    } else if title_chars < TITLE_MIN_CHARS {
        errors.title = Some("Title must be at least 3 characters".to_string());
    } else if title_chars > TITLE_MAX_CHARS {
        errors.title = Some("Title must be at most 50 characters".to_string());
    }

    if values.content.chars().count() > CONTENT_MAX_CHARS {
        errors.content = Some("Content must be at most 500 characters".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::types::NoteTag;

    fn values(title: &str, content: &str) -> NoteFormValues {
        NoteFormValues {
            title: title.to_string(),
            content: content.to_string(),
            tag: NoteTag::Todo,
        }
    }

    #[test]
    fn accepts_a_minimal_valid_note() {
        assert_eq!(validate(&values("Buy milk", "")), Ok(()));
    }

    #[test]
    fn empty_title_is_required() {
        let errors = validate(&values("", "")).expect_err("empty title should fail");
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert!(errors.content.is_none());
    }

    #[test]
    fn two_character_title_is_too_short() {
        let errors = validate(&values("ab", "")).expect_err("short title should fail");
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be at least 3 characters")
        );
    }

    #[test]
    fn title_length_is_counted_in_characters_not_bytes() {
        // Three two-byte scalars: exactly the minimum length.
        assert_eq!(validate(&values("äöü", "")), Ok(()));
    }

    #[test]
    fn title_boundaries_are_inclusive() {
        assert_eq!(validate(&values(&"a".repeat(3), "")), Ok(()));
        assert_eq!(validate(&values(&"a".repeat(50), "")), Ok(()));

        let errors = validate(&values(&"a".repeat(51), "")).expect_err("51 chars should fail");
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be at most 50 characters")
        );
    }

    #[test]
    fn content_boundaries_are_inclusive() {
        assert_eq!(validate(&values("Buy milk", &"x".repeat(500))), Ok(()));

        let errors =
            validate(&values("Buy milk", &"x".repeat(501))).expect_err("501 chars should fail");
        assert_eq!(
            errors.content.as_deref(),
            Some("Content must be at most 500 characters")
        );
    }

    #[test]
    fn reports_title_and_content_errors_together() {
        let errors =
            validate(&values("ab", &"x".repeat(501))).expect_err("both fields should fail");
        assert!(errors.title.is_some());
        assert!(errors.content.is_some());
        assert!(!errors.is_empty());
    }
}
