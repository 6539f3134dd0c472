//! Field-level validation for reminder payloads.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::requests::ReminderRequest;
use super::types::ReminderPayload;

/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Field-keyed validation failures.
///
/// Keys are lower-cased field names, values lower-cased human readable
/// messages. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Records a failure for `field`, keeping the first message per field.
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_lowercase())
            .or_insert_with(|| message.into().to_lowercase());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "validation failed: {}", details.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a reminder request, producing the typed payload on success.
///
/// Rules:
/// - `message`, `time`, `latitude` and `longitude` are required
/// - `latitude` must lie within [-90, 90]
/// - `longitude` must lie within [-180, 180]
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use reminders_core::reminder::{validate_request, ReminderRequest};
///
/// let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let ok = ReminderRequest::new("pay rent", time, 90.0, -73.0);
/// assert!(validate_request(&ok).is_ok());
///
/// let bad = ReminderRequest::new("pay rent", time, 90.0001, -73.0);
/// let errors = validate_request(&bad).unwrap_err();
/// assert_eq!(errors.get("latitude"), Some("latitude must be a valid latitude"));
/// ```
pub fn validate_request(request: &ReminderRequest) -> Result<ReminderPayload, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if request.message.is_none() {
        errors.add("message", required("message"));
    }
    if request.time.is_none() {
        errors.add("time", required("time"));
    }
    match request.latitude {
        None => errors.add("latitude", required("latitude")),
        Some(lat) if !within(lat, LATITUDE_RANGE) => {
            errors.add("latitude", "latitude must be a valid latitude")
        }
        Some(_) => {}
    }
    match request.longitude {
        None => errors.add("longitude", required("longitude")),
        Some(lon) if !within(lon, LONGITUDE_RANGE) => {
            errors.add("longitude", "longitude must be a valid longitude")
        }
        Some(_) => {}
    }

    match (
        &request.message,
        request.time,
        request.latitude,
        request.longitude,
    ) {
        (Some(message), Some(time), Some(latitude), Some(longitude)) if errors.is_empty() => {
            Ok(ReminderPayload {
                message: message.clone(),
                time,
                latitude,
                longitude,
            })
        }
        _ => Err(errors),
    }
}

fn required(field: &str) -> String {
    format!("{field} is a required field")
}

/// NaN and infinities are never within bounds.
fn within(value: f64, (min, max): (f64, f64)) -> bool {
    value.is_finite() && value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn valid_request() -> ReminderRequest {
        ReminderRequest::new("pay rent", fixed_time(), 40.0, -73.0)
    }

    #[test]
    fn test_valid_request_produces_payload() {
        let payload = validate_request(&valid_request()).unwrap();

        assert_eq!(payload.message, "pay rent");
        assert_eq!(payload.time, fixed_time());
        assert_eq!(payload.latitude, 40.0);
        assert_eq!(payload.longitude, -73.0);
    }

    #[test]
    fn test_empty_request_reports_every_field() {
        let errors = validate_request(&ReminderRequest::default()).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("message"), Some("message is a required field"));
        assert_eq!(errors.get("time"), Some("time is a required field"));
        assert_eq!(errors.get("latitude"), Some("latitude is a required field"));
        assert_eq!(
            errors.get("longitude"),
            Some("longitude is a required field")
        );
    }

    #[test]
    fn test_latitude_boundaries_are_inclusive() {
        assert!(validate_request(&valid_request().with_latitude(90.0)).is_ok());
        assert!(validate_request(&valid_request().with_latitude(-90.0)).is_ok());
    }

    #[test]
    fn test_latitude_just_outside_range_fails() {
        let errors = validate_request(&valid_request().with_latitude(90.0001)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("latitude"),
            Some("latitude must be a valid latitude")
        );

        assert!(validate_request(&valid_request().with_latitude(-90.0001)).is_err());
    }

    #[test]
    fn test_longitude_boundaries() {
        assert!(validate_request(&valid_request().with_longitude(180.0)).is_ok());
        assert!(validate_request(&valid_request().with_longitude(-180.0)).is_ok());

        let errors = validate_request(&valid_request().with_longitude(180.5)).unwrap_err();
        assert_eq!(
            errors.get("longitude"),
            Some("longitude must be a valid longitude")
        );
    }

    #[test]
    fn test_zero_coordinates_are_valid() {
        let request = valid_request().with_latitude(0.0).with_longitude(0.0);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_non_finite_coordinates_fail() {
        assert!(validate_request(&valid_request().with_latitude(f64::NAN)).is_err());
        assert!(validate_request(&valid_request().with_longitude(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_errors_serialize_as_flat_object() {
        let mut request = valid_request().with_latitude(100.0);
        request.message = None;

        let errors = validate_request(&request).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "latitude": "latitude must be a valid latitude",
                "message": "message is a required field"
            })
        );
    }

    #[test]
    fn test_errors_display() {
        let errors = validate_request(&valid_request().with_latitude(100.0)).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "validation failed: latitude must be a valid latitude"
        );
    }
}
