//! Time handling for the prediction core
//!
//! The core never reads a clock. Observations carry their own timestamps and
//! the projection queries take an explicit reference instant, so the only
//! job of this module is converting timestamp deltas into the fractional
//! hours the regression works in.

use crate::constants::MS_PER_HOUR;

/// Timestamp in milliseconds since epoch (or device boot for monotonic sources)
pub type Timestamp = u64;

/// Signed elapsed hours from `earlier` to `later`.
///
/// Histories are arrival-ordered, not time-sorted, so a later position may
/// carry an earlier timestamp. The sign of the result matters: the fit
/// accepts negative elapsed hours rather than re-sorting the data.
pub fn hours_between(earlier: Timestamp, later: Timestamp) -> f32 {
    let delta_ms = later as i64 - earlier as i64;
    (delta_ms as f64 / MS_PER_HOUR as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_hours() {
        assert_eq!(hours_between(0, MS_PER_HOUR), 1.0);
        assert_eq!(hours_between(0, 10 * MS_PER_HOUR), 10.0);
    }

    #[test]
    fn fractional_hours() {
        // 90 minutes
        assert_eq!(hours_between(0, 5_400_000), 1.5);
    }

    #[test]
    fn negative_when_reversed() {
        assert_eq!(hours_between(MS_PER_HOUR, 0), -1.0);
    }

    #[test]
    fn zero_delta() {
        assert_eq!(hours_between(42, 42), 0.0);
    }
}
