use chrono::{Local, Timelike};
use hydeclock_proto::ports::time::{TimeOfDay, TimeSource};
use log::warn;

/// [`TimeSource`] backed by the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimeSource;

impl LocalTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for LocalTimeSource {
    fn sample(&self) -> TimeOfDay {
        from_timelike(&Local::now())
    }
}

/// Truncates any chrono time value to a [`TimeOfDay`].
///
/// chrono reports a leap second as second 59 plus extra nanoseconds, so the
/// components always fit; the fallback only guards against a broken clock.
pub(crate) fn from_timelike<T: Timelike>(time: &T) -> TimeOfDay {
    TimeOfDay::new(time.hour(), time.minute(), time.second()).unwrap_or_else(|err| {
        warn!("Clock returned an invalid time: {err}");
        TimeOfDay::MIDNIGHT
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    #[test]
    fn converts_chrono_time() {
        let time = NaiveTime::from_hms_opt(14, 5, 9).expect("valid time");
        assert_eq!(
            from_timelike(&time),
            TimeOfDay::new(14, 5, 9).expect("valid time")
        );
    }

    #[test]
    fn leap_second_stays_in_range() {
        let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).expect("leap second");
        let sample = from_timelike(&time);
        assert_eq!(sample.second(), 59);
    }

    #[test]
    fn local_source_samples_valid_time() {
        let sample = LocalTimeSource::new().sample();
        assert!(sample.hour() < 24);
        assert!(sample.minute() < 60);
        assert!(sample.second() < 60);
    }
}
