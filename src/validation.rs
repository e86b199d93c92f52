// 📐 Validation - attribute checks shared by Owner and Pet
// Names are trimmed and must be non-empty; everything else is typed.

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The single error kind of the model.
///
/// `context` is the entity being built ("Owner", "Pet"), `field` the
/// attribute that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl ValidationError {
    pub fn new(context: &str, field: &str, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.to_string(),
            message: message.into(),
            context: context.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// FIELD VALIDATORS
// ============================================================================

/// Padding stripped from names: Unicode whitespace plus the ASCII
/// information separators `\x1c`..=`\x1f`.
fn is_name_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim `raw` and reject it if nothing is left.
///
/// Returns the trimmed, owned name on success.
pub fn validate_name(context: &str, raw: &str) -> ValidationResult<String> {
    let trimmed = raw.trim_matches(is_name_padding);

    if trimmed.is_empty() {
        let err = ValidationError::new(context, "name", "must be a non-empty string");
        tracing::debug!(context, error = %err, "rejected name");
        return Err(err);
    }

    Ok(trimmed.to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("Owner", "  Maya \n").unwrap(), "Maya");
        assert_eq!(validate_name("Pet", "Fido").unwrap(), "Fido");
    }

    #[test]
    fn test_validate_name_strips_separator_controls() {
        for raw in ["\x1c", " \x1c ", "\x1d\x1e\x1f"] {
            assert!(validate_name("Owner", raw).is_err());
        }
        assert_eq!(validate_name("Pet", "\x1fFido\x1c ").unwrap(), "Fido");
        assert_eq!(validate_name("Pet", "Fi\x1cdo").unwrap(), "Fi\x1cdo");
    }

    #[test]
    fn test_validate_name_keeps_inner_whitespace() {
        assert_eq!(validate_name("Pet", " Mr  Whiskers ").unwrap(), "Mr  Whiskers");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        for raw in ["", " ", "\t\n", "   "] {
            let err = validate_name("Owner", raw).unwrap_err();
            assert_eq!(err.field, "name");
            assert_eq!(err.context, "Owner");
        }
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Pet", "pet_type", "unknown category 'dinosaur'");
        assert_eq!(err.to_string(), "[Pet] pet_type: unknown category 'dinosaur'");
    }

    #[test]
    fn test_validation_error_composes_with_anyhow() {
        fn build() -> anyhow::Result<String> {
            let name = validate_name("Owner", "   ")?;
            Ok(name)
        }

        let err = build().unwrap_err();
        assert!(err.downcast_ref::<ValidationError>().is_some());
        assert!(err.to_string().contains("non-empty"));
    }
}
