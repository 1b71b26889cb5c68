//! Cinema domain constants and request normalization.

use crate::error::CoreError;

/// Entity name used in not-found errors and log lines.
pub const ENTITY: &str = "Cinema";

/// Rating stored when a create request omits it.
pub const DEFAULT_RATING: f64 = 0.0;

/// Column width of `cinema.name`, in characters.
pub const NAME_MAX_CHARS: usize = 255;

// `validator` attributes take literal messages; the DTOs repeat these.
pub const NAME_EMPTY: &str = "Name cannot be empty";
pub const NAME_TOO_LONG: &str = "Name cannot exceed 255 characters";
pub const LOCATION_EMPTY: &str = "Location cannot be empty";
pub const RATING_OUT_OF_RANGE: &str = "Rating should be between 0.0 to 5.0";

/// Order in which payload fields are checked and reported.
pub const FIELD_ORDER: &[&str] = &["name", "location", "rating"];

/// Resolve the rating to persist for a create request.
pub fn normalize_rating(rating: Option<f64>) -> f64 {
    rating.unwrap_or(DEFAULT_RATING)
}

/// Reject names the `VARCHAR(255)` column would refuse.
pub fn check_name_length(name: &str) -> Result<(), CoreError> {
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(CoreError::Validation(NAME_TOO_LONG.to_string()));
    }
    Ok(())
}
