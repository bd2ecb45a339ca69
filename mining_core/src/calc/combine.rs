//! Modifier combination: merging one module value into a base value
//!
//! Unit-specific rules:
//! - `%`: both values are percentages; each converts to a factor
//!   `1 + x/100`, factors multiply, the product converts back. Percent
//!   bonuses therefore stack multiplicatively (25% + 10% = 37.5%).
//! - `MW`: the modifier is a percent-of-100 multiplier (100 = no change,
//!   120 = +20%). A zero base stands in for a missing attribute and is
//!   treated as 1 so a purely module-granted stat comes out nonzero.
//! - anything else: `|modifier| <= 100` is read as a percentage adjustment
//!   (zero base again substituted with 1), larger magnitudes as a flat
//!   additive delta. The magnitude cut-off is a deliberate heuristic for
//!   telling percent-style modifiers from absolute ones; changing it would
//!   shift game-balance-sensitive output.

use crate::types::Unit;

/// Combine a base value with one module modifier under the unit's rule.
///
/// Total over its inputs: an inactive module or an unparsable modifier
/// (`None`) leaves the base untouched.
pub fn combine(base: f64, modifier: Option<f64>, unit: Unit, modifier_active: bool) -> f64 {
    if !modifier_active {
        return base;
    }
    let Some(modifier) = modifier else {
        return base;
    };
    match unit {
        Unit::Percent => {
            let combined = percentage_to_factor(base) * percentage_to_factor(modifier);
            factor_to_percentage(combined)
        }
        Unit::MegaWatts => {
            let effective_base = if base == 0.0 { 1.0 } else { base };
            effective_base * (1.0 + (modifier - 100.0) / 100.0)
        }
        _ => {
            if modifier.abs() <= 100.0 {
                let effective_base = if base == 0.0 { 1.0 } else { base };
                effective_base * (1.0 + modifier / 100.0)
            } else {
                base + modifier
            }
        }
    }
}

/// Percentage to multiplicative factor, e.g. 25 -> 1.25, -10 -> 0.9.
pub fn percentage_to_factor(percentage: f64) -> f64 {
    1.0 + percentage / 100.0
}

/// Multiplicative factor back to percentage, e.g. 1.25 -> 25.
pub fn factor_to_percentage(factor: f64) -> f64 {
    (factor - 1.0) * 100.0
}

/// Round to 2 decimal places.
pub fn round_value(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a value rounded to 2 decimals, as an integer when whole.
pub fn format_rounded(value: f64) -> String {
    let rounded = round_value(value);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_modifier_is_noop() {
        for unit in [Unit::Percent, Unit::MegaWatts, Unit::Meters, Unit::Unitless] {
            assert_eq!(combine(25.0, Some(500.0), unit, false), 25.0);
        }
    }

    #[test]
    fn test_missing_modifier_is_noop() {
        assert_eq!(combine(25.0, None, Unit::Percent, true), 25.0);
    }

    #[test]
    fn test_percent_bonuses_stack_multiplicatively() {
        // 25% and 10% combine to 37.5%, not 35%
        let combined = combine(25.0, Some(10.0), Unit::Percent, true);
        assert!((combined - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_percent_modifier() {
        // 1.25 * 0.8 = 1.0 -> 0%
        let combined = combine(25.0, Some(-20.0), Unit::Percent, true);
        assert!(combined.abs() < 1e-9);
    }

    #[test]
    fn test_megawatt_modifier_is_percent_of_100() {
        // 120 means +20%
        let combined = combine(2000.0, Some(120.0), Unit::MegaWatts, true);
        assert!((combined - 2400.0).abs() < 1e-9);
        // 100 means no change
        let unchanged = combine(2000.0, Some(100.0), Unit::MegaWatts, true);
        assert!((unchanged - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_megawatt_zero_base_treated_as_one() {
        let combined = combine(0.0, Some(150.0), Unit::MegaWatts, true);
        assert!((combined - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_generic_small_modifier_is_percentage() {
        let combined = combine(200.0, Some(10.0), Unit::Meters, true);
        assert!((combined - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_generic_large_modifier_is_additive() {
        let combined = combine(200.0, Some(150.0), Unit::Meters, true);
        assert!((combined - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_generic_zero_base_percentage_path() {
        let combined = combine(0.0, Some(50.0), Unit::Unitless, true);
        assert!((combined - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_round_value() {
        assert_eq!(round_value(37.499999), 37.5);
        assert_eq!(round_value(5.004), 5.0);
        assert_eq!(round_value(5.005), 5.01);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for x in [0.0, 1.005, -3.14159, 12345.678, 0.001] {
            assert_eq!(round_value(round_value(x)), round_value(x));
        }
    }

    #[test]
    fn test_format_rounded_drops_whole_fraction() {
        assert_eq!(format_rounded(5.0), "5");
        assert_eq!(format_rounded(5.004), "5");
        assert_eq!(format_rounded(37.5), "37.5");
        assert_eq!(format_rounded(-2.25), "-2.25");
    }

    #[test]
    fn test_factor_round_trip() {
        assert!((percentage_to_factor(25.0) - 1.25).abs() < 1e-12);
        assert!((factor_to_percentage(0.9) - -10.0).abs() < 1e-12);
        assert!((factor_to_percentage(percentage_to_factor(33.0)) - 33.0).abs() < 1e-9);
    }
}
