use hex_color::HexColor;
use iced::Color;
use serde::Deserialize;

mod validation;

pub use validation::{ConfigValidationError, RADIUS_RANGE};

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/hydeclock/config.toml";

static SECOND_HAND: HexColor = HexColor::rgb(4, 252, 67);
static MINUTE_HAND: HexColor = HexColor::rgb(254, 232, 0);
static HOUR_HAND: HexColor = HexColor::rgb(255, 41, 114);

/// Converts a configured [`HexColor`] into an opaque iced [`Color`].
#[must_use]
pub fn to_color(color: HexColor) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

/// Settings of the clock widget itself.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    /// Radius of the dial in logical pixels.
    #[serde(default = "default_radius")]
    pub radius:             u32,
    #[serde(default = "default_second_hand_color")]
    pub second_hand_color:  HexColor,
    #[serde(default = "default_minute_hand_color")]
    pub minute_hand_color:  HexColor,
    #[serde(default = "default_hour_hand_color")]
    pub hour_hand_color:    HexColor,
    #[serde(default = "default_show_digital_clock")]
    pub show_digital_clock: bool,
}

impl ClockConfig {
    pub fn second_color(&self) -> Color {
        to_color(self.second_hand_color)
    }

    pub fn minute_color(&self) -> Color {
        to_color(self.minute_hand_color)
    }

    pub fn hour_color(&self) -> Color {
        to_color(self.hour_hand_color)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            radius:             default_radius(),
            second_hand_color:  default_second_hand_color(),
            minute_hand_color:  default_minute_hand_color(),
            hour_hand_color:    default_hour_hand_color(),
            show_digital_clock: default_show_digital_clock(),
        }
    }
}

fn default_radius() -> u32 {
    300
}

fn default_second_hand_color() -> HexColor {
    SECOND_HAND
}

fn default_minute_hand_color() -> HexColor {
    MINUTE_HAND
}

fn default_hour_hand_color() -> HexColor {
    HOUR_HAND
}

fn default_show_digital_clock() -> bool {
    true
}

/// Widget settings. The surface is always centred on the active output and
/// follows the compositor's scale, so only the clock itself is configurable.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub clock:     ClockConfig,
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            clock:     ClockConfig::default(),
        }
    }
}
