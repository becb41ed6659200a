//! Display-time unit conversion. Accumulators always work in raw host units.

/// Seconds to milliseconds.
#[inline]
pub fn to_ms(seconds: f64) -> f64 {
    seconds * 1000.0
}

/// Bytes to megabytes (decimal).
#[inline]
pub fn to_mb(bytes: f64) -> f64 {
    bytes * 1e-6
}
