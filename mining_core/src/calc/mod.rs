//! Calculators: modifier combination, attribute resolution, resistance
//! folding, power allocation and curve generation

mod attribute;
mod combine;
mod curve;
mod power;
mod resistance;

pub use attribute::{calculate_attribute_value, create_synthetic_attribute, modifier_source};
pub use combine::{
    combine, factor_to_percentage, format_rounded, percentage_to_factor, round_value,
};
pub use curve::{
    laser_curves, mass_at_resistance, mass_curve, total_curves, CurveInput, CurvePair,
    CurvePoint, CURVE_STEP,
};
pub use power::{
    allocate_power, effective_resistance, required_power, LaserPower, PowerAllocation,
};
pub use resistance::calculate_resistance_modifier;
