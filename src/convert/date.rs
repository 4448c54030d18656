//! Date conversions, values read as milliseconds since the Unix epoch

use chrono::{DateTime, Utc};

use super::Primitive;

/// Interpret a primitive as epoch milliseconds
///
/// `None` for NaN, infinities, or instants chrono cannot represent.
///
/// # Example
///
/// ```rust
/// use commons_util::convert::to_date;
///
/// let date = to_date(1_700_000_000_000i64).unwrap();
/// assert_eq!(date.to_rfc3339(), "2023-11-14T22:13:20+00:00");
/// assert!(to_date(f64::NAN).is_none());
/// ```
pub fn to_date<T: Primitive>(value: T) -> Option<DateTime<Utc>> {
    value.to_epoch_millis().and_then(DateTime::from_timestamp_millis)
}

/// Boxed form of [`to_date`], using `default` when absent or unrepresentable
pub fn to_date_or<T: Primitive>(value: Option<T>, default: DateTime<Utc>) -> DateTime<Utc> {
    value.and_then(to_date).unwrap_or(default)
}

/// Epoch milliseconds of a date
pub fn from_date(date: &DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}
