use std::fmt;

use masterror::Error;

/// Errors returned when building a [`TimeOfDay`] from raw components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeOfDayError {
    /// A component was outside its valid range.
    #[error("{component} value {value} is out of range (max {max})")]
    OutOfRange {
        /// Name of the offending component.
        component: &'static str,
        /// Value that was provided.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
}

/// AM/PM designator used by the 12-hour readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Designator for the given hour on a 24-hour clock.
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= 12 { Self::Pm } else { Self::Am }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single wall-clock sample with second precision.
///
/// Values are always in range: `hour` in `0..=23`, `minute` and `second` in
/// `0..=59`. Instances are cheap to copy and are replaced on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeOfDay {
    hour:   u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    /// Midnight, used before the first sample arrives.
    pub const MIDNIGHT: Self = Self {
        hour:   0,
        minute: 0,
        second: 0,
    };

    /// Builds a sample from 24-hour components.
    ///
    /// # Errors
    ///
    /// Returns [`TimeOfDayError::OutOfRange`] when any component exceeds its
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydeclock_proto::ports::time::{Meridiem, TimeOfDay};
    ///
    /// let time = TimeOfDay::new(14, 5, 9).expect("valid time");
    /// assert_eq!(time.meridiem(), Meridiem::Pm);
    /// assert!(TimeOfDay::new(24, 0, 0).is_err());
    /// ```
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeOfDayError> {
        check_range("hour", hour, 23)?;
        check_range("minute", minute, 59)?;
        check_range("second", second, 59)?;

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    pub const fn second(&self) -> u32 {
        self.second
    }

    pub const fn meridiem(&self) -> Meridiem {
        Meridiem::from_hour(self.hour)
    }

    /// Hour on a 12-hour dial, where midnight and noon read as `12`.
    pub const fn hour12(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }
}

fn check_range(component: &'static str, value: u32, max: u32) -> Result<(), TimeOfDayError> {
    if value > max {
        return Err(TimeOfDayError::OutOfRange {
            component,
            value,
            max,
        });
    }

    Ok(())
}

/// Source of wall-clock samples.
///
/// The production implementation reads the host's local clock; tests inject a
/// fixed or scripted source. Sampling never fails.
pub trait TimeSource: Send + Sync + fmt::Debug {
    /// Reads the current local time.
    fn sample(&self) -> TimeOfDay;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_boundaries() {
        assert!(TimeOfDay::new(0, 0, 0).is_ok());
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range_components() {
        assert_eq!(
            TimeOfDay::new(24, 0, 0),
            Err(TimeOfDayError::OutOfRange {
                component: "hour",
                value:     24,
                max:       23,
            })
        );
        assert!(matches!(
            TimeOfDay::new(0, 60, 0),
            Err(TimeOfDayError::OutOfRange { component: "minute", .. })
        ));
        assert!(matches!(
            TimeOfDay::new(0, 0, 60),
            Err(TimeOfDayError::OutOfRange { component: "second", .. })
        ));
    }

    #[test]
    fn meridiem_switches_at_noon() {
        assert_eq!(Meridiem::from_hour(0), Meridiem::Am);
        assert_eq!(Meridiem::from_hour(11), Meridiem::Am);
        assert_eq!(Meridiem::from_hour(12), Meridiem::Pm);
        assert_eq!(Meridiem::from_hour(23), Meridiem::Pm);
        assert_eq!(Meridiem::Pm.to_string(), "PM");
    }

    #[test]
    fn hour12_maps_midnight_and_noon_to_twelve() {
        let hours: Vec<u32> = [0, 1, 11, 12, 13, 23]
            .into_iter()
            .map(|hour| TimeOfDay::new(hour, 0, 0).expect("valid").hour12())
            .collect();

        assert_eq!(hours, vec![12, 1, 11, 12, 1, 11]);
    }

    #[test]
    fn error_message_names_component() {
        let err = TimeOfDay::new(0, 75, 0).expect_err("out of range");
        assert_eq!(err.to_string(), "minute value 75 is out of range (max 59)");
    }
}
