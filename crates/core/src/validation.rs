//! Helpers that turn `validator` derive output into a single [`CoreError`].
//!
//! `ValidationErrors` is keyed by a hash map, so the reported violation
//! would otherwise depend on iteration order. Callers pass the field order
//! they want checked; the first failing field in that order wins.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules on `input` and report the first
/// violation, checking fields in `field_order`.
pub fn validate_in_order<T: Validate>(input: &T, field_order: &[&str]) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(first_violation(&errors, field_order)))
}

/// Pick the message of the first failing field.
///
/// Fields not named in `field_order` are considered afterwards, sorted by
/// name.
pub fn first_violation(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let fields = errors.field_errors();

    for name in field_order {
        if let Some(first) = fields.get(*name).and_then(|errs| errs.first()) {
            return describe(name, first);
        }
    }

    let mut rest: Vec<_> = fields.iter().collect();
    rest.sort_by(|a, b| a.0.cmp(b.0));
    rest.into_iter()
        .find_map(|(name, errs)| errs.first().map(|e| describe(name, e)))
        .unwrap_or_else(|| "Validation failed".to_string())
}

fn describe(field: &str, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("Field '{field}' is invalid ({})", error.code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "a is empty"))]
        a: String,
        #[validate(length(min = 1, message = "b is empty"))]
        b: String,
        #[validate(range(min = 0, max = 10))]
        c: i32,
    }

    #[test]
    fn valid_input_passes() {
        let s = Sample { a: "x".into(), b: "y".into(), c: 3 };
        assert!(validate_in_order(&s, &["a", "b", "c"]).is_ok());
    }

    #[test]
    fn first_field_in_order_is_reported() {
        let s = Sample { a: String::new(), b: String::new(), c: 3 };

        assert_matches!(
            validate_in_order(&s, &["a", "b"]),
            Err(CoreError::Validation(msg)) if msg == "a is empty"
        );
        assert_matches!(
            validate_in_order(&s, &["b", "a"]),
            Err(CoreError::Validation(msg)) if msg == "b is empty"
        );
    }

    #[test]
    fn unlisted_field_falls_back_to_code() {
        let s = Sample { a: "x".into(), b: "y".into(), c: 11 };
        let err = s.validate().unwrap_err();

        assert_eq!(first_violation(&err, &["a"]), "Field 'c' is invalid (range)");
    }
}
