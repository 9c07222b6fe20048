//! Wall-clock sampling and the pure mappings from a sample to what the widget
//! draws: hand rotations and the digital readout.

mod angles;
mod readout;
mod source;

pub use angles::{
    DEGREES_PER_HOUR, DEGREES_PER_UNIT, HandAngles, angle_for_hours, angle_for_minutes,
    angle_for_seconds, normalize_degrees,
};
pub use hydeclock_proto::ports::time::{Meridiem, TimeOfDay, TimeOfDayError, TimeSource};
pub use readout::{DigitalReadout, pad2};
pub use source::LocalTimeSource;
