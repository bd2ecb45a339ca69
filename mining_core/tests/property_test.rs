//! Property tests for the numeric core: modifier combination, rounding
//! and the power allocation search.

use mining_core::calc::{allocate_power, combine, mass_curve, round_value, CurveInput, LaserPower};
use mining_core::config::MiningConstants;
use mining_core::types::Unit;
use proptest::prelude::*;

proptest! {
    // An inactive modifier never changes the base, whatever the unit.
    #[test]
    fn inactive_modifier_is_identity(
        base in -1e6f64..1e6,
        modifier in -1e4f64..1e4,
    ) {
        for unit in [Unit::MegaWatts, Unit::Percent, Unit::Meters, Unit::Unitless] {
            prop_assert_eq!(combine(base, Some(modifier), unit, false), base);
        }
        prop_assert_eq!(combine(base, None, Unit::Percent, true), base);
    }

    // Rounding to two decimals is idempotent.
    #[test]
    fn rounding_is_idempotent(value in -1e9f64..1e9) {
        let once = round_value(value);
        prop_assert_eq!(round_value(once), once);
        prop_assert!((value - once).abs() <= 0.005 + 1e-9);
    }

    // Percentage composition is order independent.
    #[test]
    fn percentage_combination_commutes(
        base in -99.0f64..500.0,
        a in -99.0f64..500.0,
        b in -99.0f64..500.0,
    ) {
        let ab = combine(combine(base, Some(a), Unit::Percent, true), Some(b), Unit::Percent, true);
        let ba = combine(combine(base, Some(b), Unit::Percent, true), Some(a), Unit::Percent, true);
        prop_assert!((ab - ba).abs() < 1e-6 * (1.0 + ab.abs()));
    }

    // The search never returns a subset that exceeds full load while a
    // smaller-percentage one exists, and a sufficient answer really covers
    // the rock.
    #[test]
    fn allocation_answer_is_consistent(
        mass in 1.0f64..1e5,
        resistance in 0.0f64..100.0,
        powers in prop::collection::vec(100.0f64..10000.0, 1..5),
    ) {
        let constants = MiningConstants::default();
        let lasers: Vec<LaserPower> = powers
            .iter()
            .enumerate()
            .map(|(i, &p)| LaserPower {
                name: format!("L{i}"),
                max_power: p,
                resistance_modifier: 1.0,
            })
            .collect();

        let result = allocate_power(mass, resistance, &lasers, &constants);
        prop_assert!(!result.unbreakable);
        prop_assert!(result.percentage.is_finite());
        if result.insufficient {
            // Even the full set falls short, so the shortfall is positive.
            prop_assert!(result.missing_power.unwrap_or(0.0) > 0.0);
        } else {
            prop_assert!(result.percentage <= 1.0 + 1e-12);
            prop_assert!(!result.used_lasers.is_empty());
        }
    }

    // Required mass decreases (weakly) as resistance grows.
    #[test]
    fn curve_is_monotone_decreasing(
        min_power in 10.0f64..1000.0,
        extra in 0.0f64..9000.0,
        modifier in 0.1f64..3.0,
    ) {
        let constants = MiningConstants::default();
        let input = CurveInput {
            min_power,
            max_power: min_power + extra,
            resistance_modifier: modifier,
        };
        let points = mass_curve(input.max_power, input.resistance_modifier, &constants);
        for pair in points.windows(2) {
            prop_assert!(pair[1].y <= pair[0].y + 1e-9);
        }
    }
}
