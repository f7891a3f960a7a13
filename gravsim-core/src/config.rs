//! Engine configuration
//!
//! Every field has a default, so a YAML file only needs the keys it wants to
//! change:
//!
//! ```yaml
//! area:
//!   width: 500.0
//!   height: 500.0
//!   margin_x: 100.0     # bodies further than this outside the area are destroyed
//!   margin_y: 100.0
//! step_size: 0.01       # fixed physics step, seconds
//! gravitational_constant: 6.67408
//! default_mass: 100.0   # used when the mass field is left blank
//! default_radius: 10.0
//! collision: swap       # or "elastic"
//! ```

use crate::error::ConfigError;
use glam::DVec2;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 6.67408;
pub const DEFAULT_STEP_SIZE: f64 = 0.01;
pub const DEFAULT_MASS: f64 = 100.0;
pub const DEFAULT_RADIUS: f64 = 10.0;

/// How overlapping bodies exchange momentum
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionModel {
    #[default]
    #[serde(rename = "swap")] // velocities are exchanged wholesale
    Swap,

    #[serde(rename = "elastic")] // mass-weighted impulse along the contact normal
    Elastic,
}

/// Simulation area and the margin beyond it that bodies may drift into
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AreaConfig {
    pub width: f64,
    pub height: f64,
    pub margin_x: f64,
    pub margin_y: f64,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            margin_x: 100.0,
            margin_y: 100.0,
        }
    }
}

impl AreaConfig {
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// True while `pos` lies within the area extended by the margin
    pub fn contains(&self, pos: DVec2) -> bool {
        pos.x >= -self.margin_x
            && pos.y >= -self.margin_y
            && pos.x <= self.width + self.margin_x
            && pos.y <= self.height + self.margin_y
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub area: AreaConfig,
    pub step_size: f64,
    pub gravitational_constant: f64,
    pub default_mass: f64,
    pub default_radius: f64,
    pub collision: CollisionModel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            area: AreaConfig::default(),
            step_size: DEFAULT_STEP_SIZE,
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            default_mass: DEFAULT_MASS,
            default_radius: DEFAULT_RADIUS,
            collision: CollisionModel::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let config: EngineConfig = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("area.width", self.area.width),
            ("area.height", self.area.height),
            ("step_size", self.step_size),
            ("default_mass", self.default_mass),
            ("default_radius", self.default_radius),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{key} must be positive, got {value}")));
            }
        }

        for (key, value) in [("area.margin_x", self.area.margin_x), ("area.margin_y", self.area.margin_y)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{key} must not be negative, got {value}")));
            }
        }

        if !self.gravitational_constant.is_finite() {
            return Err(ConfigError::Invalid("gravitational_constant must be finite".to_string()));
        }

        Ok(())
    }
}
