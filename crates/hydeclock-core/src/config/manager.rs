use std::{
    path::PathBuf,
    sync::{Arc, RwLock}
};

use hydeclock_proto::config::{Config, ConfigValidationError};

/// Represents the effect a configuration update has on the running widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigImpact {
    /// Hand colours changed; the dial must be redrawn.
    pub colors_changed:    bool,
    /// Radius or readout visibility changed; the surface must resize.
    pub geometry_changed:  bool,
    /// Whether the log level changed.
    pub log_level_changed: bool
}

impl ConfigImpact {
    /// Returns `true` if nothing visible or operational changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applied configuration along with its computed impact.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigApplied {
    /// The fully validated configuration that was applied.
    pub config: Arc<Config>,
    /// The impact of applying the configuration.
    pub impact: ConfigImpact
}

/// Describes failures that occurred while attempting to refresh the
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigUpdateError {
    /// Reading the configuration file from disk failed.
    Read { path: PathBuf, context: String },
    /// Parsing TOML content failed.
    Parse { path: PathBuf, context: String },
    /// Validation detected a logical inconsistency.
    Validation(ConfigValidationError),
    /// The configuration file was removed.
    Removed,
    /// Updating the configuration state failed for an internal reason.
    State { context: String }
}

impl std::fmt::Display for ConfigUpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read {
                path,
                context
            } => {
                write!(f, "failed to read config at {:?}: {}", path, context)
            }
            Self::Parse {
                path,
                context
            } => {
                write!(f, "failed to parse config at {:?}: {}", path, context)
            }
            Self::Validation(err) => write!(f, "{}", err),
            Self::Removed => write!(f, "configuration file removed"),
            Self::State {
                context
            } => {
                write!(f, "failed to update configuration state: {}", context)
            }
        }
    }
}

impl std::error::Error for ConfigUpdateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None
        }
    }
}

impl From<ConfigValidationError> for ConfigUpdateError {
    fn from(err: ConfigValidationError) -> Self {
        Self::Validation(err)
    }
}

impl ConfigUpdateError {
    /// Construct a read error with contextual information.
    pub fn read(path: PathBuf, err: &std::io::Error) -> Self {
        Self::Read {
            path,
            context: err.to_string()
        }
    }

    /// Construct a parse error with contextual information.
    pub fn parse(path: PathBuf, err: &toml::de::Error) -> Self {
        Self::Parse {
            path,
            context: err.to_string()
        }
    }

    /// Construct a state management error.
    pub fn state(context: impl Into<String>) -> Self {
        Self::State {
            context: context.into()
        }
    }
}

/// Information about configuration degradation events.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDegradation {
    /// The reason the configuration could not be refreshed.
    pub reason:     ConfigUpdateError,
    /// The last known valid configuration.
    pub last_valid: Box<Config>
}

/// Errors produced by [`ConfigManager`].
#[derive(Debug)]
pub enum ConfigManagerError {
    /// The internal configuration state lock was poisoned.
    Poisoned
}

impl std::fmt::Display for ConfigManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poisoned => write!(f, "config state lock poisoned")
        }
    }
}

impl std::error::Error for ConfigManagerError {}

/// Tracks and manages the last known valid configuration.
#[derive(Debug)]
pub struct ConfigManager {
    state: RwLock<Config>
}

impl ConfigManager {
    /// Creates a new manager seeded with the initial configuration.
    pub fn new(initial: Config) -> Self {
        Self {
            state: RwLock::new(initial)
        }
    }

    fn with_state<F, T>(&self, f: F) -> Result<T, ConfigManagerError>
    where
        F: FnOnce(&Config) -> T
    {
        self.state
            .read()
            .map_err(|_| ConfigManagerError::Poisoned)
            .map(|guard| f(&guard))
    }

    /// Returns the last successfully applied configuration.
    pub fn last_valid(&self) -> Result<Config, ConfigManagerError> {
        self.with_state(Clone::clone)
    }

    /// Records a degradation event and returns contextual information for
    /// consumers.
    pub fn degraded(
        &self,
        reason: ConfigUpdateError
    ) -> Result<ConfigDegradation, ConfigManagerError> {
        self.with_state(|config| ConfigDegradation {
            reason,
            last_valid: Box::new(config.clone())
        })
    }

    /// Applies a freshly loaded configuration, computing the impact relative to
    /// the previous state.
    pub fn apply(&self, updated: Config) -> Result<ConfigApplied, ConfigManagerError> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| ConfigManagerError::Poisoned)?;

        let impact = compute_impact(&guard, &updated);
        *guard = updated.clone();

        Ok(ConfigApplied {
            config: Arc::new(updated),
            impact
        })
    }
}

fn compute_impact(previous: &Config, next: &Config) -> ConfigImpact {
    let (prev_clock, next_clock) = (&previous.clock, &next.clock);

    ConfigImpact {
        colors_changed:    prev_clock.second_hand_color != next_clock.second_hand_color
            || prev_clock.minute_hand_color != next_clock.minute_hand_color
            || prev_clock.hour_hand_color != next_clock.hour_hand_color,
        geometry_changed:  prev_clock.radius != next_clock.radius
            || prev_clock.show_digital_clock != next_clock.show_digital_clock,
        log_level_changed: previous.log_level != next.log_level
    }
}

#[cfg(test)]
mod tests {
    use hex_color::HexColor;
    use hydeclock_proto::config::ClockConfig;

    use super::*;

    #[test]
    fn apply_identical_config_has_no_impact() {
        let manager = ConfigManager::new(Config::default());

        let applied = manager.apply(Config::default()).expect("applied");

        assert!(applied.impact.is_empty());
    }

    #[test]
    fn apply_detects_color_change() {
        let manager = ConfigManager::new(Config::default());
        let updated = Config {
            clock: ClockConfig {
                hour_hand_color: HexColor::rgb(1, 2, 3),
                ..Default::default()
            },
            ..Default::default()
        };

        let impact = manager.apply(updated).expect("applied").impact;

        assert!(impact.colors_changed);
        assert!(!impact.geometry_changed);
        assert!(!impact.log_level_changed);
    }

    #[test]
    fn apply_detects_geometry_change() {
        let manager = ConfigManager::new(Config::default());
        let updated = Config {
            clock: ClockConfig {
                show_digital_clock: false,
                ..Default::default()
            },
            ..Default::default()
        };

        let impact = manager.apply(updated).expect("applied").impact;

        assert!(impact.geometry_changed);
        assert!(!impact.colors_changed);
    }

    #[test]
    fn apply_detects_log_level_change() {
        let manager = ConfigManager::new(Config::default());
        let updated = Config {
            log_level: "debug".to_owned(),
            ..Default::default()
        };

        let impact = manager.apply(updated).expect("applied").impact;

        assert!(impact.log_level_changed);
        assert!(!impact.geometry_changed);
    }

    #[test]
    fn apply_updates_last_valid() {
        let manager = ConfigManager::new(Config::default());
        let updated = Config {
            clock: ClockConfig {
                radius: 90,
                ..Default::default()
            },
            ..Default::default()
        };

        manager.apply(updated.clone()).expect("applied");

        assert_eq!(manager.last_valid().expect("state"), updated);
    }

    #[test]
    fn degraded_reports_last_valid_config() {
        let manager = ConfigManager::new(Config::default());

        let degradation = manager
            .degraded(ConfigUpdateError::Removed)
            .expect("degradation");

        assert_eq!(degradation.reason, ConfigUpdateError::Removed);
        assert_eq!(*degradation.last_valid, Config::default());
    }
}
