//! Birth facts validation and historical timezone resolution.
//!
//! A birth moment is a calendar date plus a wall-clock time in a named IANA
//! zone. The zone's offset on that specific date is what matters: DST rules
//! shift over decades, so today's offset is not usable.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref TIME_OF_BIRTH_RE: Regex =
        Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("time pattern is valid");
}

#[derive(Error, Debug)]
pub enum BirthMomentError {
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("could not resolve historical offset for timezone {timezone} on {date}")]
    TimezoneResolution { timezone: String, date: NaiveDate },
}

/// Geographic coordinates of the birth place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Immutable birth input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthFacts {
    pub date_of_birth: NaiveDate,
    /// Wall-clock time as "HH:mm".
    pub time_of_birth: String,
    /// IANA zone name, e.g. "America/New_York".
    pub timezone_name: String,
    pub coordinates: GeoLocation,
}

impl BirthFacts {
    /// Validate all fields. Runs before any engine work so malformed input
    /// never costs an ephemeris call.
    pub fn validate(&self) -> Result<(), BirthMomentError> {
        if !TIME_OF_BIRTH_RE.is_match(&self.time_of_birth) {
            return Err(BirthMomentError::Validation {
                field: "timeOfBirth",
                message: format!("expected HH:mm, got {:?}", self.time_of_birth),
            });
        }
        if self.timezone_name.trim().is_empty() {
            return Err(BirthMomentError::Validation {
                field: "timezoneName",
                message: "timezone name must not be empty".to_string(),
            });
        }
        if !self.coordinates.lat.is_finite() || self.coordinates.lat.abs() > 90.0 {
            return Err(BirthMomentError::Validation {
                field: "coordinates.lat",
                message: format!("latitude {} outside [-90, 90]", self.coordinates.lat),
            });
        }
        if !self.coordinates.lng.is_finite() || self.coordinates.lng.abs() > 180.0 {
            return Err(BirthMomentError::Validation {
                field: "coordinates.lng",
                message: format!("longitude {} outside [-180, 180]", self.coordinates.lng),
            });
        }
        Ok(())
    }

    fn naive_local(&self) -> Result<NaiveDateTime, BirthMomentError> {
        let caps = TIME_OF_BIRTH_RE
            .captures(&self.time_of_birth)
            .ok_or_else(|| BirthMomentError::Validation {
                field: "timeOfBirth",
                message: format!("expected HH:mm, got {:?}", self.time_of_birth),
            })?;
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);
        self.date_of_birth
            .and_hms_opt(hour, minute, 0)
            .ok_or_else(|| BirthMomentError::Validation {
                field: "dateOfBirth",
                message: format!("{} {} is not a real instant", self.date_of_birth, self.time_of_birth),
            })
    }
}

/// Resolve birth facts into the absolute UTC instant, applying the zone's
/// historical rules for the birth date.
pub fn resolve_birth_moment(facts: &BirthFacts) -> Result<DateTime<Utc>, BirthMomentError> {
    facts.validate()?;
    let naive = facts.naive_local()?;

    let tz: Tz = facts
        .timezone_name
        .parse()
        .map_err(|_| BirthMomentError::TimezoneResolution {
            timezone: facts.timezone_name.clone(),
            date: facts.date_of_birth,
        })?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
        // Fall-back hour repeats; the earlier instant wins.
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        // Spring-forward gap: the wall-clock time never existed. Sample the
        // zone's offset at noon UTC of the same date and apply it as plain
        // arithmetic, fractional for 30/45-minute zones.
        LocalResult::None => noon_offset_fallback(tz, facts, naive),
    }
}

fn noon_offset_fallback(
    tz: Tz,
    facts: &BirthFacts,
    naive_local: NaiveDateTime,
) -> Result<DateTime<Utc>, BirthMomentError> {
    let noon = facts
        .date_of_birth
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| BirthMomentError::TimezoneResolution {
            timezone: facts.timezone_name.clone(),
            date: facts.date_of_birth,
        })?;
    let offset_seconds = tz.offset_from_utc_datetime(&noon).fix().local_minus_utc();
    let utc_naive = naive_local - Duration::seconds(offset_seconds as i64);
    Ok(Utc.from_utc_datetime(&utc_naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(date: &str, time: &str, tz: &str) -> BirthFacts {
        BirthFacts {
            date_of_birth: date.parse().unwrap(),
            time_of_birth: time.to_string(),
            timezone_name: tz.to_string(),
            coordinates: GeoLocation { lat: 40.7128, lng: -74.0060 },
        }
    }

    #[test]
    fn test_time_pattern() {
        assert!(TIME_OF_BIRTH_RE.is_match("00:00"));
        assert!(TIME_OF_BIRTH_RE.is_match("9:05"));
        assert!(TIME_OF_BIRTH_RE.is_match("23:59"));
        assert!(!TIME_OF_BIRTH_RE.is_match("24:00"));
        assert!(!TIME_OF_BIRTH_RE.is_match("25:99"));
        assert!(!TIME_OF_BIRTH_RE.is_match("12:60"));
        assert!(!TIME_OF_BIRTH_RE.is_match("noon"));
    }

    #[test]
    fn test_validation_names_field() {
        let bad = facts("1990-06-15", "25:99", "America/New_York");
        match resolve_birth_moment(&bad) {
            Err(BirthMomentError::Validation { field, .. }) => assert_eq!(field, "timeOfBirth"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_latitude_bounds() {
        let mut bad = facts("1990-06-15", "14:30", "America/New_York");
        bad.coordinates.lat = 95.0;
        match bad.validate() {
            Err(BirthMomentError::Validation { field, .. }) => {
                assert_eq!(field, "coordinates.lat")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_historical_dst_offset() {
        // June 1990 in New York was EDT, UTC-4.
        let moment = resolve_birth_moment(&facts("1990-06-15", "14:30", "America/New_York")).unwrap();
        assert_eq!(moment.to_rfc3339(), "1990-06-15T18:30:00+00:00");
        // Determinism across calls.
        let again = resolve_birth_moment(&facts("1990-06-15", "14:30", "America/New_York")).unwrap();
        assert_eq!(moment, again);
    }

    #[test]
    fn test_fractional_offset_zone() {
        // Kolkata is UTC+5:30 year round.
        let moment = resolve_birth_moment(&facts("1990-06-15", "05:30", "Asia/Kolkata")).unwrap();
        assert_eq!(moment.to_rfc3339(), "1990-06-15T00:00:00+00:00");
    }

    #[test]
    fn test_ambiguous_time_uses_earlier_instant() {
        // 2020-11-01 01:30 happened twice in New York; EDT comes first.
        let moment = resolve_birth_moment(&facts("2020-11-01", "1:30", "America/New_York")).unwrap();
        assert_eq!(moment.to_rfc3339(), "2020-11-01T05:30:00+00:00");
    }

    #[test]
    fn test_gap_time_uses_noon_offset() {
        // 2020-03-08 02:30 never existed in New York; noon that day was EDT.
        let moment = resolve_birth_moment(&facts("2020-03-08", "2:30", "America/New_York")).unwrap();
        assert_eq!(moment.to_rfc3339(), "2020-03-08T06:30:00+00:00");
    }

    #[test]
    fn test_unknown_timezone() {
        let bad = facts("1990-06-15", "14:30", "Mars/Olympus_Mons");
        assert!(matches!(
            resolve_birth_moment(&bad),
            Err(BirthMomentError::TimezoneResolution { .. })
        ));
    }
}
