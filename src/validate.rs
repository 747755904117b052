//! Field validators for the request DTOs.
//!
//! Each validator rejects with a 422-mapped [`ApiError::Validation`] naming
//! the offending field. They run before any store access, so a request can
//! fail validation without touching the database.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;
use crate::model::attendance::AttendanceStatus;

pub const EMPLOYEE_ID_MAX: usize = 20;
pub const FULL_NAME_MAX: usize = 100;
pub const DEPARTMENT_MAX: usize = 50;

// Rough email shape: one '@', no whitespace, a dot in the domain part.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub fn employee_id(value: &str) -> Result<(), ApiError> {
    bounded("employee_id", value, EMPLOYEE_ID_MAX)
}

pub fn full_name(value: &str) -> Result<(), ApiError> {
    bounded("full_name", value, FULL_NAME_MAX)
}

pub fn department(value: &str) -> Result<(), ApiError> {
    bounded("department", value, DEPARTMENT_MAX)
}

pub fn email(value: &str) -> Result<(), ApiError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ApiError::Validation {
            field: "email",
            reason: "must be a valid email address".to_string(),
        })
    }
}

/// Accepts exactly "Present" or "Absent".
pub fn status(value: &str) -> Result<AttendanceStatus, ApiError> {
    AttendanceStatus::parse(value).ok_or_else(|| ApiError::Validation {
        field: "status",
        reason: r#"must be either "Present" or "Absent""#.to_string(),
    })
}

/// Accepts a real calendar date in YYYY-MM-DD form.
pub fn date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ApiError::Validation {
        field: "date",
        reason: "must be a calendar date in YYYY-MM-DD format".to_string(),
    })
}

/// Non-empty and at most `max` characters, counted as chars so multibyte
/// names are not penalized.
fn bounded(field: &'static str, value: &str, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(ApiError::Validation {
            field,
            reason: format!("must be 1-{max} characters"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ApiError) -> &'static str {
        match err {
            ApiError::Validation { field, .. } => field,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn employee_id_bounds() {
        assert!(employee_id("E").is_ok());
        assert!(employee_id(&"X".repeat(20)).is_ok());
        assert_eq!(field_of(employee_id("").unwrap_err()), "employee_id");
        assert_eq!(
            field_of(employee_id(&"X".repeat(21)).unwrap_err()),
            "employee_id"
        );
    }

    #[test]
    fn full_name_counts_chars_not_bytes() {
        // 100 two-byte characters is still within the 100-char bound.
        let name = "é".repeat(100);
        assert!(full_name(&name).is_ok());
        assert!(full_name(&"é".repeat(101)).is_err());
    }

    #[test]
    fn department_bounds() {
        assert!(department("Engineering").is_ok());
        assert_eq!(field_of(department("").unwrap_err()), "department");
        assert!(department(&"D".repeat(51)).is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(email("jane@x.com").is_ok());
        assert!(email("a.b+c@sub.domain.org").is_ok());
        for bad in ["", "jane", "jane@", "@x.com", "jane@x", "ja ne@x.com", "jane@@x.com"] {
            assert_eq!(field_of(email(bad).unwrap_err()), "email", "accepted {bad:?}");
        }
    }

    #[test]
    fn status_is_case_sensitive() {
        assert_eq!(status("Present").unwrap(), AttendanceStatus::Present);
        assert_eq!(status("Absent").unwrap(), AttendanceStatus::Absent);
        for bad in ["present", "PRESENT", "absent", "Late", ""] {
            assert_eq!(field_of(status(bad).unwrap_err()), "status", "accepted {bad:?}");
        }
    }

    #[test]
    fn date_requires_a_real_calendar_day() {
        assert_eq!(
            date("2026-02-04").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()
        );
        // 2024 is a leap year, 2026 is not.
        assert!(date("2024-02-29").is_ok());
        for bad in ["2026-02-30", "2026-13-01", "04-02-2026", "2026/02/04", "yesterday", ""] {
            assert_eq!(field_of(date(bad).unwrap_err()), "date", "accepted {bad:?}");
        }
    }
}
