use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{GraphError, GraphResult};

/// Converts a decimal to `f64`, rejecting values that do not fit.
pub fn decimal_to_f64(value: Decimal, field_name: &str) -> GraphResult<f64> {
    value
        .to_f64()
        .filter(|converted| converted.is_finite())
        .ok_or_else(|| GraphError::InvalidData(format!("{field_name} `{value}` is not a finite f64")))
}

/// Unix seconds with millisecond precision.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    let millis = time.timestamp_millis();
    millis.div_euclid(1000) as f64 + millis.rem_euclid(1000) as f64 / 1000.0
}

/// Linear interpolation between `from` and `to`.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
