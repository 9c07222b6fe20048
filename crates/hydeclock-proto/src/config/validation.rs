use std::ops::RangeInclusive;

use masterror::Error;

use super::Config;

/// Dial radii the widget can render without overlapping its own markers or
/// exceeding common output sizes.
pub const RADIUS_RANGE: RangeInclusive<u32> = 60..=1000;

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// The dial radius is outside [`RADIUS_RANGE`].
    #[error("clock radius {radius} must be between {min} and {max}")]
    RadiusOutOfRange { radius: u32, min: u32, max: u32 },

    /// The log level string is empty.
    #[error("log level must not be empty")]
    EmptyLogLevel,
}

impl Config {
    /// Validates the configuration, ensuring the clock geometry is drawable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] if the radius is outside
    /// [`RADIUS_RANGE`] or the log level is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydeclock_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !RADIUS_RANGE.contains(&self.clock.radius) {
            return Err(ConfigValidationError::RadiusOutOfRange {
                radius: self.clock.radius,
                min:    *RADIUS_RANGE.start(),
                max:    *RADIUS_RANGE.end(),
            });
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogLevel);
        }

        Ok(())
    }
}
