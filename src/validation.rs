// Intake validation - phone and date formats
//
// Both checks are strict: one accepted shape each, anything else is
// rejected before any state changes.

use chrono::DateTime;

use crate::errors::HotelError;

/// Validate a guest phone number.
///
/// Accepted shape is exactly three digits, dash, four digits, dash,
/// four digits ("123-4567-8901").
pub fn validate_phone(phone: &str) -> Result<(), HotelError> {
    let mut groups = phone.split('-');

    let well_formed = matches!(
        (groups.next(), groups.next(), groups.next(), groups.next()),
        (Some(a), Some(b), Some(c), None)
            if is_digit_group(a, 3) && is_digit_group(b, 4) && is_digit_group(c, 4)
    );

    if well_formed {
        Ok(())
    } else {
        Err(HotelError::InvalidPhoneFormat(phone.to_string()))
    }
}

fn is_digit_group(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a reservation date.
///
/// The canonical format is a full ISO 8601 / RFC 3339 date-time with
/// offset, e.g. `2016-10-27T17:13:40+00:00`. The compact 8-digit form
/// is not accepted.
pub fn validate_date(date: &str) -> Result<(), HotelError> {
    DateTime::parse_from_rfc3339(date)
        .map(|_| ())
        .map_err(|_| HotelError::InvalidDateFormat(date.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_canonical_shape() {
        assert!(validate_phone("123-4567-8901").is_ok());
        assert!(validate_phone("010-1234-5678").is_ok());
    }

    #[test]
    fn test_phone_rejects_undashed_digits() {
        assert_eq!(
            validate_phone("1234567890"),
            Err(HotelError::InvalidPhoneFormat("1234567890".to_string()))
        );
    }

    #[test]
    fn test_phone_rejects_wrong_group_lengths() {
        assert!(validate_phone("12-4567-8901").is_err());
        assert!(validate_phone("123-456-8901").is_err());
        assert!(validate_phone("123-4567-890").is_err());
        assert!(validate_phone("123-4567-89012").is_err());
    }

    #[test]
    fn test_phone_rejects_non_digits_and_extra_groups() {
        assert!(validate_phone("abc-defg-hijk").is_err());
        assert!(validate_phone("123-4567-8901-2").is_err());
        assert!(validate_phone("123-4567").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_date_accepts_rfc3339() {
        assert!(validate_date("2016-10-27T17:13:40+00:00").is_ok());
        assert!(validate_date("2026-03-01T15:00:00+09:00").is_ok());
        assert!(validate_date("2026-03-01T15:00:00Z").is_ok());
    }

    #[test]
    fn test_date_rejects_other_shapes() {
        // Compact lineage variant is deliberately not accepted
        assert!(validate_date("20261027").is_err());
        assert!(validate_date("2026-10-27").is_err());
        assert!(validate_date("2026-10-27 17:13:40").is_err());
        assert!(validate_date("not a date").is_err());
    }

    #[test]
    fn test_date_rejects_impossible_calendar_values() {
        assert!(validate_date("2026-13-01T00:00:00+00:00").is_err());
        assert!(validate_date("2026-02-30T00:00:00+00:00").is_err());
    }
}
