//! # Derived Claim Helpers
//!
//! Pure functions over an already-decoded payload. These sit outside the
//! gated decode pipeline: they never fail, rendering a fixed sentinel for
//! out-of-range input instead.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Sentinel rendered for timestamps chrono cannot represent.
const INVALID_TIMESTAMP: &str = "Invalid timestamp";

/// Render Unix seconds as a combined absolute/local display string,
/// e.g. `1970-01-01T00:00:01.000Z (1970-01-01 01:00:01 +01:00)`.
///
/// Out-of-range input yields the fixed `"Invalid timestamp"` sentinel
/// rather than an error.
pub fn format_timestamp(unix_seconds: i64) -> String {
    match DateTime::<Utc>::from_timestamp(unix_seconds, 0) {
        Some(utc) => {
            let local = utc.with_timezone(&Local);
            format!(
                "{} ({})",
                utc.to_rfc3339_opts(SecondsFormat::Millis, true),
                local.format("%Y-%m-%d %H:%M:%S %:z")
            )
        }
        None => INVALID_TIMESTAMP.to_string(),
    }
}

/// True when the `exp` claim is at or before the current time.
///
/// Boundary inclusive: a token expiring exactly now counts as expired.
pub fn is_expired(exp: i64) -> bool {
    exp <= Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch() {
        let rendered = format_timestamp(0);
        assert!(rendered.starts_with("1970-01-01T00:00:00.000Z ("));
        assert!(rendered.ends_with(')'));
    }

    #[test]
    fn test_format_known_instant() {
        assert!(format_timestamp(1_516_239_022).starts_with("2018-01-18T01:30:22.000Z"));
    }

    #[test]
    fn test_format_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), INVALID_TIMESTAMP);
        assert_eq!(format_timestamp(i64::MIN), INVALID_TIMESTAMP);
    }

    #[test]
    fn test_expired_in_the_past() {
        assert!(is_expired(1));
    }

    #[test]
    fn test_expired_at_boundary() {
        // exp == now is expired (boundary inclusive).
        assert!(is_expired(Utc::now().timestamp()));
    }

    #[test]
    fn test_not_expired_in_the_future() {
        assert!(!is_expired(Utc::now().timestamp() + 3600));
    }
}
