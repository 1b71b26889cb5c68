//! Cinema row model and request DTOs.

use cinema_core::cinema::{check_name_length, normalize_rating, FIELD_ORDER};
use cinema_core::error::CoreError;
use cinema_core::partial_update::NO_FIELDS_TO_UPDATE;
use cinema_core::types::{DbId, Timestamp};
use cinema_core::validation::validate_in_order;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `cinema` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Cinema {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a cinema. `name` and `location` are required keys.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCinema {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: String,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating should be between 0.0 to 5.0"))]
    pub rating: Option<f64>,
}

impl CreateCinema {
    /// Check field constraints, reporting the first violation in
    /// name, location, rating order.
    pub fn check(&self) -> Result<(), CoreError> {
        check_name_length(&self.name)?;
        validate_in_order(self, FIELD_ORDER)
    }

    /// Rating to insert, with the default applied.
    pub fn effective_rating(&self) -> f64 {
        normalize_rating(self.rating)
    }
}

/// DTO for partially updating a cinema.
///
/// A key that is absent (or `null`) means "leave unchanged". A key that is
/// present is written even when it matches the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCinema {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating should be between 0.0 to 5.0"))]
    pub rating: Option<f64>,
}

impl UpdateCinema {
    /// True when no updatable field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.rating.is_none()
    }

    /// Check field constraints, then reject a patch with nothing to set.
    pub fn check(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            check_name_length(name)?;
        }
        validate_in_order(self, FIELD_ORDER)?;
        if self.is_empty() {
            return Err(CoreError::Validation(NO_FIELDS_TO_UPDATE.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use cinema_core::cinema::{
        LOCATION_EMPTY, NAME_EMPTY, NAME_MAX_CHARS, NAME_TOO_LONG, RATING_OUT_OF_RANGE,
    };

    fn create(name: &str, location: &str, rating: Option<f64>) -> CreateCinema {
        CreateCinema {
            name: name.to_string(),
            location: location.to_string(),
            rating,
        }
    }

    #[test]
    fn create_accepts_inclusive_rating_bounds() {
        for rating in [0.0, 0.5, 2.5, 4.9, 5.0] {
            assert!(create("Grand", "Downtown", Some(rating)).check().is_ok(), "{rating}");
        }
    }

    #[test]
    fn create_rejects_rating_outside_bounds() {
        for rating in [-0.1, -5.0, 5.01, 10.0] {
            assert_matches!(
                create("Grand", "Downtown", Some(rating)).check(),
                Err(CoreError::Validation(msg)) if msg == RATING_OUT_OF_RANGE
            );
        }
    }

    #[test]
    fn create_reports_name_before_location() {
        assert_matches!(
            create("", "", Some(9.0)).check(),
            Err(CoreError::Validation(msg)) if msg == NAME_EMPTY
        );
        assert_matches!(
            create("Grand", "", Some(9.0)).check(),
            Err(CoreError::Validation(msg)) if msg == LOCATION_EMPTY
        );
    }

    #[test]
    fn create_defaults_missing_rating() {
        let dto: CreateCinema =
            serde_json::from_str(r#"{"name":"Grand","location":"Downtown"}"#).unwrap();
        assert!(dto.check().is_ok());
        assert_eq!(dto.effective_rating(), 0.0);
    }

    #[test]
    fn create_requires_name_key() {
        let result = serde_json::from_str::<CreateCinema>(r#"{"location":"Downtown"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_distinguishes_absent_from_present() {
        let dto: UpdateCinema = serde_json::from_str(r#"{"rating":3.0}"#).unwrap();
        assert_eq!(dto.name, None);
        assert_eq!(dto.location, None);
        assert_eq!(dto.rating, Some(3.0));
        assert!(dto.check().is_ok());
    }

    #[test]
    fn update_with_no_recognized_fields_is_rejected() {
        let dto: UpdateCinema = serde_json::from_str(r#"{"screens":12}"#).unwrap();
        assert!(dto.is_empty());
        assert_matches!(
            dto.check(),
            Err(CoreError::Validation(msg)) if msg == NO_FIELDS_TO_UPDATE
        );
    }

    #[test]
    fn update_validates_present_fields() {
        let dto = UpdateCinema {
            rating: Some(5.5),
            ..Default::default()
        };
        assert_matches!(
            dto.check(),
            Err(CoreError::Validation(msg)) if msg == RATING_OUT_OF_RANGE
        );

        let dto = UpdateCinema {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_matches!(
            dto.check(),
            Err(CoreError::Validation(msg)) if msg == NAME_EMPTY
        );
    }

    #[test]
    fn update_accepts_inclusive_rating_bounds() {
        for rating in [0.0, 5.0] {
            let dto = UpdateCinema {
                rating: Some(rating),
                ..Default::default()
            };
            assert!(dto.check().is_ok(), "{rating}");
        }
    }

    #[test]
    fn update_messages_match_create_messages() {
        let dto = UpdateCinema {
            location: Some(String::new()),
            ..Default::default()
        };
        assert_matches!(
            dto.check(),
            Err(CoreError::Validation(msg)) if msg == LOCATION_EMPTY
        );
    }

    #[test]
    fn update_treats_null_as_absent() {
        let dto: UpdateCinema = serde_json::from_str(r#"{"name":null,"rating":2.0}"#).unwrap();
        assert_eq!(dto.name, None);
        assert_eq!(dto.rating, Some(2.0));
        assert!(dto.check().is_ok());
    }

    #[test]
    fn name_longer_than_column_is_rejected() {
        let long = "x".repeat(NAME_MAX_CHARS + 1);

        assert_matches!(
            create(&long, "", None).check(),
            Err(CoreError::Validation(msg)) if msg == NAME_TOO_LONG
        );
        assert!(create(&"x".repeat(NAME_MAX_CHARS), "Downtown", None).check().is_ok());

        let dto = UpdateCinema {
            name: Some(long),
            ..Default::default()
        };
        assert_matches!(
            dto.check(),
            Err(CoreError::Validation(msg)) if msg == NAME_TOO_LONG
        );
    }
}
