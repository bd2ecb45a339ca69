//! Mining model constants configuration

use serde::{Deserialize, Serialize};

/// Tunable constants of the rock-breaking model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningConstants {
    /// Mass-to-power conversion factor: required power scales with
    /// `mass * mass_constant` before resistance is applied
    #[serde(default = "default_mass_constant")]
    pub mass_constant: f64,
    /// Rock resistance ceiling in percent; effective resistance at or above
    /// this saturates and the rock becomes unbreakable
    #[serde(default = "default_max_resistance")]
    pub max_resistance: f64,
    /// Module slots on a laserhead without an explicit "Module Slots"
    /// attribute
    #[serde(default = "default_module_slots")]
    pub default_module_slots: usize,
}

impl Default for MiningConstants {
    fn default() -> Self {
        MiningConstants {
            mass_constant: 0.175,
            max_resistance: 100.0,
            default_module_slots: 3,
        }
    }
}

fn default_mass_constant() -> f64 {
    0.175
}
fn default_max_resistance() -> f64 {
    100.0
}
fn default_module_slots() -> usize {
    3
}

impl MiningConstants {
    /// Reject values the model cannot work with.
    pub fn validate(&self) -> Result<(), super::ConfigError> {
        if self.mass_constant <= 0.0 {
            return Err(super::ConfigError::ValidationError(format!(
                "mass_constant must be positive, got {}",
                self.mass_constant
            )));
        }
        if self.max_resistance <= 0.0 {
            return Err(super::ConfigError::ValidationError(format!(
                "max_resistance must be positive, got {}",
                self.max_resistance
            )));
        }
        Ok(())
    }
}
