//! Curve generation: breakable mass as a function of rock resistance

use crate::calc::power::effective_resistance;
use crate::config::MiningConstants;
use serde::{Deserialize, Serialize};

/// Resistance sweep step in percent.
pub const CURVE_STEP: f64 = 0.1;

/// One chart sample: x is rock resistance in percent, y the largest
/// breakable mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Power envelope of one laser feeding the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveInput {
    pub min_power: f64,
    pub max_power: f64,
    pub resistance_modifier: f64,
}

/// Min- and max-power series of a laser (or of a combined loadout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvePair {
    pub min: Vec<CurvePoint>,
    pub max: Vec<CurvePoint>,
}

/// Largest breakable mass at one resistance sample.
pub fn mass_at_resistance(
    power: f64,
    resistance: f64,
    modifier: f64,
    constants: &MiningConstants,
) -> f64 {
    power * (1.0 - effective_resistance(resistance, modifier)) / constants.mass_constant
}

/// Sample the mass curve over resistance 0..=max_resistance in 0.1 steps
/// (1001 points for the standard 0-100 sweep). Stateless and restartable;
/// integer stepping keeps the sweep free of float drift.
pub fn mass_curve(power: f64, modifier: f64, constants: &MiningConstants) -> Vec<CurvePoint> {
    let steps = (constants.max_resistance / CURVE_STEP).round() as usize;
    (0..=steps)
        .map(|i| {
            let resistance = i as f64 / (1.0 / CURVE_STEP);
            CurvePoint {
                x: resistance,
                y: mass_at_resistance(power, resistance, modifier, constants),
            }
        })
        .collect()
}

/// Min/max envelope series for one laser.
pub fn laser_curves(input: &CurveInput, constants: &MiningConstants) -> CurvePair {
    CurvePair {
        min: mass_curve(input.min_power, input.resistance_modifier, constants),
        max: mass_curve(input.max_power, input.resistance_modifier, constants),
    }
}

/// The "Total" envelope for several lasers firing together: powers add,
/// resistance modifiers multiply at every sample point.
pub fn total_curves(inputs: &[CurveInput], constants: &MiningConstants) -> CurvePair {
    let min_power: f64 = inputs.iter().map(|i| i.min_power).sum();
    let max_power: f64 = inputs.iter().map(|i| i.max_power).sum();
    let modifier: f64 = inputs.iter().map(|i| i.resistance_modifier).product();
    CurvePair {
        min: mass_curve(min_power, modifier, constants),
        max: mass_curve(max_power, modifier, constants),
    }
}
