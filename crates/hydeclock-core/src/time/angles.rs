use hydeclock_proto::ports::time::TimeOfDay;

/// Rotation of the minute and second rings per unit.
pub const DEGREES_PER_UNIT: f32 = 6.0;

/// Rotation of the hour ring per hour.
pub const DEGREES_PER_HOUR: f32 = 30.0;

/// Rotation of the second ring, in degrees clockwise from twelve o'clock.
pub fn angle_for_seconds(second: u32) -> f32 {
    second as f32 * DEGREES_PER_UNIT
}

/// Rotation of the minute ring, in degrees clockwise from twelve o'clock.
pub fn angle_for_minutes(minute: u32) -> f32 {
    minute as f32 * DEGREES_PER_UNIT
}

/// Rotation of the hour ring.
///
/// Takes the 24-hour value as sampled, so afternoon results exceed 360 and
/// must go through [`normalize_degrees`] before drawing. The minute term only
/// nudges the ring by `minute / 12` degrees.
pub fn angle_for_hours(hour: u32, minute: u32) -> f32 {
    hour as f32 * DEGREES_PER_HOUR + minute as f32 / 12.0
}

/// Maps any angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let normalized = degrees.rem_euclid(360.0);

    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Rotations of the three rings for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub second: f32,
    pub minute: f32,
    pub hour:   f32,
}

impl HandAngles {
    pub fn from_time(time: &TimeOfDay) -> Self {
        Self {
            second: angle_for_seconds(time.second()),
            minute: angle_for_minutes(time.minute()),
            hour:   angle_for_hours(time.hour(), time.minute()),
        }
    }

    /// Same rotations folded into `[0, 360)`.
    pub fn normalized(&self) -> Self {
        Self {
            second: normalize_degrees(self.second),
            minute: normalize_degrees(self.minute),
            hour:   normalize_degrees(self.hour),
        }
    }
}

impl Default for HandAngles {
    fn default() -> Self {
        Self::from_time(&TimeOfDay::MIDNIGHT)
    }
}
