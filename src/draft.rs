//! Add-Place Form Draft
//!
//! Raw text state of the add-place form and its submit-time validation.
//! Every field is checked on submit so all messages show at once.

use std::fmt;

use thiserror::Error;

use crate::config::CoordinatePolicy;
use crate::models::Place;

/// Form input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Latitude,
    Longitude,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Latitude, Field::Longitude];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single field's validation failure; Display is the user-facing message
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("{0} is required.")]
    Required(Field),

    #[error("{0} must be a number.")]
    NotANumber(Field),
}

/// Per-field errors from the last submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub latitude: Option<FieldError>,
    pub longitude: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Latitude => self.latitude.as_ref(),
            Field::Longitude => self.longitude.as_ref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Name => &mut self.name,
            Field::Latitude => &mut self.latitude,
            Field::Longitude => &mut self.longitude,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Transient, unvalidated form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub errors: FieldErrors,
}

impl FormDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Latitude => &self.latitude,
            Field::Longitude => &self.longitude,
        }
    }

    /// Error message for a field, empty when the field is valid
    pub fn error_message(&self, field: Field) -> String {
        self.errors
            .get(field)
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    /// Store raw text verbatim. No validation at keystroke time.
    pub fn update_field(&mut self, field: Field, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            Field::Name => self.name = raw,
            Field::Latitude => self.latitude = raw,
            Field::Longitude => self.longitude = raw,
        }
    }

    /// Validate without touching the draft
    pub fn validate(&self, policy: CoordinatePolicy) -> Result<Place, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() {
            errors.name = Some(FieldError::Required(Field::Name));
        }
        let latitude = check_coordinate(Field::Latitude, &self.latitude, policy, &mut errors);
        let longitude = check_coordinate(Field::Longitude, &self.longitude, policy, &mut errors);

        match (errors.is_empty(), latitude, longitude) {
            (true, Some(latitude), Some(longitude)) => Ok(Place {
                name: self.name.clone(),
                latitude,
                longitude,
            }),
            _ => Err(errors),
        }
    }

    /// Validate, record the errors, and on success reset the draft and return the place.
    /// On failure the entered text is kept so it can be corrected.
    pub fn submit(&mut self, policy: CoordinatePolicy) -> Option<Place> {
        match self.validate(policy) {
            Ok(place) => {
                *self = FormDraft::default();
                Some(place)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

fn check_coordinate(
    field: Field,
    raw: &str,
    policy: CoordinatePolicy,
    errors: &mut FieldErrors,
) -> Option<f64> {
    if raw.is_empty() {
        *errors.slot(field) = Some(FieldError::Required(field));
        return None;
    }
    match policy {
        CoordinatePolicy::Permissive => Some(parse_float_prefix(raw)),
        CoordinatePolicy::Strict => match parse_strict(raw) {
            Some(value) => Some(value),
            None => {
                *errors.slot(field) = Some(FieldError::NotANumber(field));
                None
            }
        },
    }
}

/// Whole-text numeric parse. Word literals like "NaN" or "inf" are not numbers,
/// but digit input that overflows ("1e400") is kept as infinity.
fn parse_strict(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Lenient float parse: longest leading numeric prefix, NaN if there is none.
/// "12.5abc" -> 12.5, "abc" -> NaN, "  -3e2x" -> -300.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, latitude: &str, longitude: &str) -> FormDraft {
        let mut d = FormDraft::default();
        d.update_field(Field::Name, name);
        d.update_field(Field::Latitude, latitude);
        d.update_field(Field::Longitude, longitude);
        d
    }

    #[test]
    fn test_all_empty_reports_every_field() {
        let mut d = FormDraft::default();
        for policy in [CoordinatePolicy::Strict, CoordinatePolicy::Permissive] {
            assert_eq!(d.submit(policy), None);
            assert_eq!(d.error_message(Field::Name), "Name is required.");
            assert_eq!(d.error_message(Field::Latitude), "Latitude is required.");
            assert_eq!(d.error_message(Field::Longitude), "Longitude is required.");
        }
    }

    #[test]
    fn test_valid_submit_emits_and_resets() {
        let mut d = draft("Library", "12.97", "77.60");
        d.errors.name = Some(FieldError::Required(Field::Name));

        let place = d.submit(CoordinatePolicy::Strict).expect("valid draft");
        assert_eq!(place, Place::new("Library", 12.97, 77.60));
        assert_eq!(d, FormDraft::default());
        assert!(d.errors.is_empty());
    }

    #[test]
    fn test_missing_name_only() {
        let mut d = draft("", "10", "20");
        assert_eq!(d.submit(CoordinatePolicy::Strict), None);
        assert_eq!(d.error_message(Field::Name), "Name is required.");
        assert_eq!(d.error_message(Field::Latitude), "");
        assert_eq!(d.error_message(Field::Longitude), "");
        // Draft kept for correction
        assert_eq!(d.latitude, "10");
        assert_eq!(d.longitude, "20");
    }

    #[test]
    fn test_errors_cleared_when_fixed() {
        let mut d = draft("", "", "20");
        assert!(d.submit(CoordinatePolicy::Strict).is_none());
        assert!(d.errors.name.is_some());
        assert!(d.errors.latitude.is_some());

        d.update_field(Field::Name, "Park");
        assert!(d.submit(CoordinatePolicy::Strict).is_none());
        assert!(d.errors.name.is_none());
        assert!(d.errors.latitude.is_some());
        assert!(d.errors.longitude.is_none());
    }

    #[test]
    fn test_update_field_idempotent() {
        let mut d = draft("Park", "1", "2");
        d.update_field(Field::Latitude, "12.5");
        let once = d.clone();
        d.update_field(Field::Latitude, "12.5");
        assert_eq!(d, once);
        assert!(d.errors.is_empty());
    }

    #[test]
    fn test_update_field_does_not_validate() {
        let mut d = FormDraft::default();
        d.update_field(Field::Latitude, "not a number");
        assert!(d.errors.is_empty());
        assert_eq!(d.value(Field::Latitude), "not a number");
    }

    #[test]
    fn test_permissive_accepts_non_numeric_as_nan() {
        let mut d = draft("Somewhere", "abc", "77.5");
        let place = d.submit(CoordinatePolicy::Permissive).expect("permissive accepts");
        assert!(place.latitude.is_nan());
        assert_eq!(place.longitude, 77.5);
    }

    #[test]
    fn test_permissive_uses_numeric_prefix() {
        let place = draft("Prefix", "12abc", "200")
            .validate(CoordinatePolicy::Permissive)
            .unwrap();
        assert_eq!(place.latitude, 12.0);
        // No range check in permissive mode
        assert_eq!(place.longitude, 200.0);
    }

    #[test]
    fn test_strict_rejects_non_numeric() {
        let mut d = draft("Somewhere", "abc", "77.5");
        assert_eq!(d.submit(CoordinatePolicy::Strict), None);
        assert_eq!(d.error_message(Field::Latitude), "Latitude must be a number.");
        assert_eq!(d.error_message(Field::Longitude), "");
    }

    #[test]
    fn test_strict_rejects_nan_and_infinity_literals() {
        let errors = draft("X", "NaN", "inf")
            .validate(CoordinatePolicy::Strict)
            .unwrap_err();
        assert_eq!(errors.latitude, Some(FieldError::NotANumber(Field::Latitude)));
        assert_eq!(errors.longitude, Some(FieldError::NotANumber(Field::Longitude)));
    }

    #[test]
    fn test_strict_accepts_out_of_range_numbers() {
        let place = draft("Far", "95", "-181")
            .validate(CoordinatePolicy::Strict)
            .unwrap();
        assert_eq!(place.latitude, 95.0);
        assert_eq!(place.longitude, -181.0);
    }

    #[test]
    fn test_default_policy_adds_out_of_range_place() {
        let mut d = draft("North", "95", "10");
        let place = d.submit(CoordinatePolicy::default()).expect("numeric input is accepted");
        assert_eq!(place, Place::new("North", 95.0, 10.0));
        assert!(d.errors.is_empty());
    }

    #[test]
    fn test_strict_keeps_overflow_as_infinity() {
        let place = draft("Huge", "1e400", "-1e400")
            .validate(CoordinatePolicy::Strict)
            .unwrap();
        assert_eq!(place.latitude, f64::INFINITY);
        assert_eq!(place.longitude, f64::NEG_INFINITY);
    }

    #[test]
    fn test_strict_rejects_trailing_garbage() {
        let errors = draft("X", "12abc", "77")
            .validate(CoordinatePolicy::Strict)
            .unwrap_err();
        assert_eq!(errors.latitude, Some(FieldError::NotANumber(Field::Latitude)));
        assert!(errors.longitude.is_none());
    }

    #[test]
    fn test_strict_accepts_bounds_and_whitespace() {
        let place = draft("Pole", " 90 ", "-180")
            .validate(CoordinatePolicy::Strict)
            .unwrap();
        assert_eq!(place.latitude, 90.0);
        assert_eq!(place.longitude, -180.0);
    }

    #[test]
    fn test_whitespace_name_counts_as_present() {
        assert!(draft(" ", "1", "2").validate(CoordinatePolicy::Strict).is_ok());
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.97"), 12.97);
        assert_eq!(parse_float_prefix("  -3e2x"), -300.0);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("5."), 5.0);
        assert_eq!(parse_float_prefix("+7,5"), 7.0);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix("").is_nan());
    }
}
