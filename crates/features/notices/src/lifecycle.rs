//! Expiry-driven notice lifecycle.
//!
//! All functions are pure: they read the input slice and return fresh
//! collections with `is_archived` recomputed. Each comes in two flavors, one
//! pinned to an explicit instant (`*_at`) and one evaluated against the wall
//! clock.
//!
//! Accepted expiry formats, all interpreted in UTC when no offset is given:
//! * `2024-05-01`
//! * `2024-05-01T17:30` / `2024-05-01T17:30:00`
//! * RFC 3339 (`2024-05-01T17:30:00+02:00`)
//!
//! A present but unparsable expiry never archives a notice. Use [`parse_expiry`]
//! to surface the problem instead.

use crate::error::NoticeError;
use campus_domain::notice::Notice;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses an optional expiry. Blank values count as absent.
pub fn parse_expiry(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, NoticeError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }
    if let Some(at) =
        LOCAL_DATETIME_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Ok(Some(at.and_utc()));
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(Some(day.and_time(NaiveTime::MIN).and_utc()));
    }

    Err(NoticeError::MalformedExpiryDate { value: raw.to_owned().into(), context: None })
}

/// True iff `now` is strictly later than the expiry.
#[must_use]
pub fn is_expired_at(expiry: Option<&str>, now: DateTime<Utc>) -> bool {
    match parse_expiry(expiry) {
        Ok(Some(at)) => now > at,
        Ok(None) => false,
        Err(e) => {
            warn!(error = %e, "Treating notice as active");
            false
        },
    }
}

#[must_use]
pub fn is_expired(expiry: Option<&str>) -> bool {
    is_expired_at(expiry, Utc::now())
}

/// Copies `notices`, deriving `is_archived` for each one.
#[must_use]
pub fn classify_at(notices: &[Notice], now: DateTime<Utc>) -> Vec<Notice> {
    notices
        .iter()
        .map(|notice| Notice {
            is_archived: is_expired_at(notice.expiry_date.as_deref(), now),
            ..notice.clone()
        })
        .collect()
}

#[must_use]
pub fn classify(notices: &[Notice]) -> Vec<Notice> {
    classify_at(notices, Utc::now())
}

/// Splits into `(active, archived)`, each in input order.
#[must_use]
pub fn partition_at(notices: &[Notice], now: DateTime<Utc>) -> (Vec<Notice>, Vec<Notice>) {
    classify_at(notices, now).into_iter().partition(|notice| !notice.is_archived)
}

#[must_use]
pub fn partition(notices: &[Notice]) -> (Vec<Notice>, Vec<Notice>) {
    partition_at(notices, Utc::now())
}

#[must_use]
pub fn active_only_at(notices: &[Notice], now: DateTime<Utc>) -> Vec<Notice> {
    partition_at(notices, now).0
}

#[must_use]
pub fn active_only(notices: &[Notice]) -> Vec<Notice> {
    active_only_at(notices, Utc::now())
}

#[must_use]
pub fn archived_only_at(notices: &[Notice], now: DateTime<Utc>) -> Vec<Notice> {
    partition_at(notices, now).1
}

#[must_use]
pub fn archived_only(notices: &[Notice]) -> Vec<Notice> {
    archived_only_at(notices, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn accepted_formats() {
        assert_eq!(parse_expiry(Some("2024-05-01")).unwrap(), Some(at(2024, 5, 1, 0)));
        assert_eq!(parse_expiry(Some("2024-05-01T17:00")).unwrap(), Some(at(2024, 5, 1, 17)));
        assert_eq!(parse_expiry(Some("2024-05-01T17:00:00")).unwrap(), Some(at(2024, 5, 1, 17)));
        assert_eq!(
            parse_expiry(Some("2024-05-01T19:00:00+02:00")).unwrap(),
            Some(at(2024, 5, 1, 17))
        );
        assert_eq!(parse_expiry(Some("  ")).unwrap(), None);
        assert_eq!(parse_expiry(None).unwrap(), None);
    }

    #[test]
    fn malformed_is_reported_but_not_expired() {
        let err = parse_expiry(Some("next tuesday")).unwrap_err();
        assert!(matches!(err, NoticeError::MalformedExpiryDate { .. }));
        assert!(!is_expired_at(Some("next tuesday"), at(2999, 1, 1, 0)));
        assert!(!is_expired_at(Some("2024-13-45"), at(2999, 1, 1, 0)));
    }

    #[test]
    fn boundary_is_strict() {
        let expiry = Some("2024-05-01");
        assert!(!is_expired_at(expiry, at(2024, 5, 1, 0)));
        assert!(is_expired_at(expiry, at(2024, 5, 1, 1)));
    }

    #[test]
    fn classify_leaves_input_untouched() {
        let input = vec![Notice::new("1", "Old", "1999-12-01").expires("2000-01-01")];
        let out = classify_at(&input, at(2024, 1, 1, 0));
        assert!(out[0].is_archived);
        assert!(!input[0].is_archived);
        assert_eq!(out[0].title, input[0].title);
    }
}
