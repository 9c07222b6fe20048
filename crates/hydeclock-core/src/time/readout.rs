use std::fmt;

use hydeclock_proto::ports::time::{Meridiem, TimeOfDay};

/// Zero-pads a clock component to two digits.
///
/// # Examples
///
/// ```
/// use hydeclock_core::time::pad2;
///
/// assert_eq!(pad2(7), "07");
/// assert_eq!(pad2(23), "23");
/// ```
pub fn pad2(value: u32) -> String {
    format!("{value:02}")
}

/// Text pieces of the digital readout, already padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalReadout {
    pub hours:    String,
    pub minutes:  String,
    pub seconds:  String,
    pub meridiem: Meridiem,
}

impl DigitalReadout {
    /// Builds the 12-hour readout for a sample.
    pub fn from_time(time: &TimeOfDay) -> Self {
        Self {
            hours:    pad2(time.hour12()),
            minutes:  pad2(time.minute()),
            seconds:  pad2(time.second()),
            meridiem: time.meridiem(),
        }
    }
}

impl Default for DigitalReadout {
    fn default() -> Self {
        Self::from_time(&TimeOfDay::MIDNIGHT)
    }
}

impl fmt::Display for DigitalReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} {}",
            self.hours, self.minutes, self.seconds, self.meridiem
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readout(hour: u32, minute: u32, second: u32) -> String {
        let time = TimeOfDay::new(hour, minute, second).expect("valid time");
        DigitalReadout::from_time(&time).to_string()
    }

    #[test]
    fn pad2_pads_single_digits() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(23), "23");
        assert_eq!(pad2(59), "59");
    }

    #[test]
    fn afternoon_readout_uses_twelve_hour_clock() {
        assert_eq!(readout(14, 5, 9), "02:05:09 PM");
    }

    #[test]
    fn midnight_and_noon_read_twelve() {
        assert_eq!(readout(0, 0, 0), "12:00:00 AM");
        assert_eq!(readout(12, 30, 0), "12:30:00 PM");
    }

    #[test]
    fn last_second_of_day() {
        assert_eq!(readout(23, 59, 59), "11:59:59 PM");
    }

    #[test]
    fn pieces_are_exposed_for_coloring() {
        let time = TimeOfDay::new(9, 41, 3).expect("valid time");
        let readout = DigitalReadout::from_time(&time);

        assert_eq!(readout.hours, "09");
        assert_eq!(readout.minutes, "41");
        assert_eq!(readout.seconds, "03");
        assert_eq!(readout.meridiem, Meridiem::Am);
    }
}
