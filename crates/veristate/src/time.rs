//! Time utilities for veristate.
//!
//! All timestamps are Unix epoch microseconds (u64). Resolution takes the
//! query time as a parameter and never reads the wall clock; only item
//! construction defaults `verified_at` to the current time.

/// Microseconds in one day, for expiry arithmetic.
pub const MICROS_PER_DAY: u64 = 24 * 60 * 60 * 1_000_000;

/// Return the current time as microseconds since Unix epoch.
pub fn now_micros() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_micros() as u64
}

/// Convert microseconds to an RFC 3339 string.
pub fn micros_to_rfc3339(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    let nsecs = ((micros % 1_000_000) * 1000) as u32;
    let dt = chrono::DateTime::from_timestamp(secs, nsecs).unwrap_or(chrono::DateTime::UNIX_EPOCH);
    dt.to_rfc3339()
}
