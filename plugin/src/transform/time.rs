//! Timestamp normalization for table columns.
//!
//! Slack encodes timestamps three ways depending on the resource: message
//! `ts` fields are decimal strings with sub-second precision, a few profile
//! fields are plain integer seconds, and most object metadata uses the
//! integer [`JsonTime`] wrapper. All three normalize to one column shape: a
//! UTC instant, or `None` when the field is unset.
//!
//! Slack writes Unix epoch zero to mean "never set". Exactly zero maps to
//! `None` so queries never see 1970-01-01 as a real date; every other value
//! converts, including pre-epoch ones.

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use crate::client::types::JsonTime;

#[derive(Error, Debug)]
pub enum TransformError {
    /// The decimal text was not a number. Carries the float parser's error
    /// unchanged.
    #[error(transparent)]
    InvalidSeconds(#[from] std::num::ParseFloatError),

    /// Seconds chrono cannot represent (also non-finite input).
    #[error("Timestamp {seconds} s is out of range")]
    OutOfRange { seconds: f64 },
}

impl TransformError {
    fn out_of_range(seconds: f64) -> Self {
        Self::OutOfRange { seconds }
    }
}

/// Normalize decimal-string seconds (`"1612085967.000300"`) to an instant.
///
/// Text parsing to exactly zero means the field is unset.
pub fn seconds_str_to_datetime(value: &str) -> Result<Option<DateTime<Utc>>, TransformError> {
    let seconds: f64 = value.parse()?;
    if seconds == 0.0 {
        return Ok(None);
    }
    if !seconds.is_finite() {
        return Err(TransformError::out_of_range(seconds));
    }
    let whole = seconds.floor();
    let frac_nanos = ((seconds - whole) * 1e9).round() as u32;
    let (secs, nsecs) = if frac_nanos >= 1_000_000_000 {
        // Rounding can land exactly on the next second.
        (whole as i64 + 1, 0)
    } else {
        (whole as i64, frac_nanos)
    };
    Utc.timestamp_opt(secs, nsecs)
        .single()
        .map(Some)
        .ok_or_else(|| TransformError::out_of_range(seconds))
}

/// Normalize plain integer seconds to an instant. Zero means unset.
pub fn seconds_to_datetime(seconds: i64) -> Result<Option<DateTime<Utc>>, TransformError> {
    if seconds == 0 {
        return Ok(None);
    }
    Utc.timestamp_opt(seconds, 0)
        .single()
        .map(Some)
        .ok_or_else(|| TransformError::out_of_range(seconds as f64))
}

/// Normalize the integer wrapper encoding. Zero means unset.
pub fn json_time_to_datetime(value: JsonTime) -> Result<Option<DateTime<Utc>>, TransformError> {
    if value.is_unset() {
        return Ok(None);
    }
    value
        .to_datetime()
        .map(Some)
        .ok_or_else(|| TransformError::out_of_range(value.0 as f64))
}
