//! Power allocation: the minimal laser subset that can break a rock

use crate::config::MiningConstants;
use serde::{Deserialize, Serialize};

/// Effective mining stats of one equipped laser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserPower {
    pub name: String,
    /// Maximum laser power with module modifiers applied
    pub max_power: f64,
    /// Net resistance multiplier (1.0 = neutral)
    pub resistance_modifier: f64,
}

/// Outcome of the power allocation search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerAllocation {
    /// Required power over combined max power of the chosen subset, as a
    /// fraction (<= 1.0 means the rock breaks)
    pub percentage: f64,
    /// Indices into the input laser list, slot order preserved
    pub used_lasers: Vec<usize>,
    /// No subset reached the required power
    pub insufficient: bool,
    /// How much raw power the best subset falls short by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_power: Option<f64>,
    /// Effective resistance saturates for every subset; no amount of power
    /// breaks this rock
    pub unbreakable: bool,
}

impl PowerAllocation {
    /// One-line human-readable outcome.
    pub fn summary(&self) -> String {
        if self.unbreakable {
            return "unbreakable at this resistance".to_string();
        }
        if self.insufficient {
            let mut text = format!(
                "insufficient: best subset of {} laser(s) reaches {:.1}% of required power",
                self.used_lasers.len(),
                100.0 / self.percentage.max(f64::MIN_POSITIVE)
            );
            if let Some(missing) = self.missing_power {
                text.push_str(&format!(", {:.1} MW short", missing));
            }
            return text;
        }
        format!(
            "breakable with {} laser(s) at {:.1}% power",
            self.used_lasers.len(),
            self.percentage * 100.0
        )
    }
}

/// Resistance after the modifier, as a fraction clamped to [0, 1].
pub fn effective_resistance(resistance: f64, modifier: f64) -> f64 {
    (resistance / 100.0 * modifier).clamp(0.0, 1.0)
}

/// Raw power needed to break a rock, or `None` when effective resistance
/// saturates and the requirement is infinite.
pub fn required_power(
    mass: f64,
    resistance: f64,
    modifier: f64,
    constants: &MiningConstants,
) -> Option<f64> {
    let effective = effective_resistance(resistance, modifier);
    if effective >= 1.0 {
        return None;
    }
    Some(mass * constants.mass_constant / (1.0 - effective))
}

/// Search every non-empty laser subset, smallest first, for one whose
/// combined power meets the requirement.
///
/// Subsets are ordered by ascending cardinality and tie-broken by
/// enumeration order, so the result uses the fewest lasers that work (not
/// necessarily the lowest load percentage). With no sufficient subset, the
/// closest one is reported with its shortfall; with every subset saturated,
/// the rock is flagged unbreakable. Laser counts are small (a handful of
/// equipped lasers), so the 2^n - 1 enumeration stays trivial.
pub fn allocate_power(
    mass: f64,
    resistance: f64,
    lasers: &[LaserPower],
    constants: &MiningConstants,
) -> PowerAllocation {
    if lasers.is_empty() {
        return PowerAllocation {
            percentage: 0.0,
            used_lasers: Vec::new(),
            insufficient: true,
            missing_power: None,
            unbreakable: false,
        };
    }

    let n = lasers.len();
    let mut masks: Vec<u32> = (1..(1u32 << n)).collect();
    // Stable sort keeps enumeration order within each cardinality.
    masks.sort_by_key(|mask| mask.count_ones());

    let mut best: Option<(f64, u32, f64)> = None;
    for mask in masks {
        let mut combined_power = 0.0;
        let mut combined_modifier = 1.0;
        for (i, laser) in lasers.iter().enumerate() {
            if mask & (1 << i) != 0 {
                combined_power += laser.max_power;
                combined_modifier *= laser.resistance_modifier;
            }
        }

        let Some(required) = required_power(mass, resistance, combined_modifier, constants)
        else {
            continue;
        };
        let percentage = load_percentage(required, combined_power);
        if percentage <= 1.0 {
            return PowerAllocation {
                percentage,
                used_lasers: subset_indices(mask, n),
                insufficient: false,
                missing_power: None,
                unbreakable: false,
            };
        }
        if best.map_or(true, |(p, _, _)| percentage < p) {
            best = Some((percentage, mask, required - combined_power));
        }
    }

    match best {
        Some((percentage, mask, missing)) => PowerAllocation {
            percentage,
            used_lasers: subset_indices(mask, n),
            insufficient: true,
            missing_power: Some(missing),
            unbreakable: false,
        },
        None => PowerAllocation {
            percentage: 0.0,
            used_lasers: Vec::new(),
            insufficient: false,
            missing_power: None,
            unbreakable: true,
        },
    }
}

fn load_percentage(required: f64, combined_power: f64) -> f64 {
    if combined_power > 0.0 {
        required / combined_power
    } else if required == 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}

fn subset_indices(mask: u32, n: usize) -> Vec<usize> {
    (0..n).filter(|i| mask & (1 << i) != 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laser(name: &str, max_power: f64, resistance_modifier: f64) -> LaserPower {
        LaserPower {
            name: name.to_string(),
            max_power,
            resistance_modifier,
        }
    }

    #[test]
    fn test_empty_laser_list() {
        let result = allocate_power(50.0, 0.0, &[], &MiningConstants::default());
        assert_eq!(result.percentage, 0.0);
        assert!(result.used_lasers.is_empty());
        assert!(result.insufficient);
        assert!(!result.unbreakable);
    }

    #[test]
    fn test_single_laser_zero_resistance() {
        // required = 50 * 0.175 = 8.75, so 8.75% of a 100 MW laser
        let lasers = vec![laser("A", 100.0, 1.0)];
        let result = allocate_power(50.0, 0.0, &lasers, &MiningConstants::default());
        assert!(!result.insufficient);
        assert!(!result.unbreakable);
        assert_eq!(result.used_lasers, vec![0]);
        assert!((result.percentage - 0.0875).abs() < 1e-9);
    }

    #[test]
    fn test_prefers_fewest_lasers() {
        // Either laser alone suffices; the single-laser subset must win.
        let lasers = vec![laser("A", 100.0, 1.0), laser("B", 100.0, 1.0)];
        let result = allocate_power(50.0, 0.0, &lasers, &MiningConstants::default());
        assert_eq!(result.used_lasers.len(), 1);
        assert_eq!(result.used_lasers, vec![0]);
    }

    #[test]
    fn test_falls_through_to_larger_subset() {
        // required = 100 * 0.175 = 17.5; each laser alone gives 10 MW,
        // together 20 MW.
        let lasers = vec![laser("A", 10.0, 1.0), laser("B", 10.0, 1.0)];
        let result = allocate_power(100.0, 0.0, &lasers, &MiningConstants::default());
        assert!(!result.insufficient);
        assert_eq!(result.used_lasers, vec![0, 1]);
        assert!((result.percentage - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_reports_shortfall() {
        // required = 1000 * 0.175 = 175 MW, only 100 MW available
        let lasers = vec![laser("A", 100.0, 1.0)];
        let result = allocate_power(1000.0, 0.0, &lasers, &MiningConstants::default());
        assert!(result.insufficient);
        assert!(!result.unbreakable);
        assert_eq!(result.used_lasers, vec![0]);
        assert!((result.percentage - 1.75).abs() < 1e-9);
        assert!((result.missing_power.unwrap() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_picks_lowest_percentage_subset() {
        // Neither subset suffices; B has more power and the better ratio.
        let lasers = vec![laser("A", 10.0, 1.0), laser("B", 50.0, 1.0)];
        let result = allocate_power(1000.0, 0.0, &lasers, &MiningConstants::default());
        assert!(result.insufficient);
        // Best ratio is the 2-laser subset: 175 / 60
        assert_eq!(result.used_lasers, vec![0, 1]);
        assert!((result.percentage - 175.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_unbreakable_when_resistance_saturates() {
        // 100% resistance with amplifying modifiers saturates every subset.
        let lasers = vec![laser("A", 1e9, 1.5), laser("B", 1e9, 2.0)];
        let result = allocate_power(1.0, 100.0, &lasers, &MiningConstants::default());
        assert!(result.unbreakable);
        assert!(!result.insufficient);
        assert!(result.used_lasers.is_empty());
    }

    #[test]
    fn test_reducing_modifier_rescues_saturated_resistance() {
        // Alone, laser A saturates (1.0 * 100%); pairing with B's 0.5
        // modifier brings effective resistance to 50%.
        let lasers = vec![laser("A", 100.0, 1.0), laser("B", 100.0, 0.5)];
        let result = allocate_power(100.0, 100.0, &lasers, &MiningConstants::default());
        assert!(!result.unbreakable);
        // B alone already works: eff = 0.5, required = 17.5 / 0.5 = 35 MW
        assert_eq!(result.used_lasers, vec![1]);
        assert!((result.percentage - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_effective_resistance_clamps() {
        assert_eq!(effective_resistance(100.0, 1.5), 1.0);
        assert_eq!(effective_resistance(-10.0, 1.0), 0.0);
        assert!((effective_resistance(50.0, 1.2) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_required_power_saturated_is_none() {
        let constants = MiningConstants::default();
        assert!(required_power(10.0, 100.0, 1.0, &constants).is_none());
        assert!(required_power(10.0, 50.0, 2.0, &constants).is_none());
        let required = required_power(50.0, 0.0, 1.0, &constants).unwrap();
        assert!((required - 8.75).abs() < 1e-9);
    }

    #[test]
    fn test_summary_strings() {
        let lasers = vec![laser("A", 100.0, 1.0)];
        let constants = MiningConstants::default();

        let ok = allocate_power(50.0, 0.0, &lasers, &constants);
        assert!(ok.summary().contains("breakable with 1 laser"));

        let short = allocate_power(1000.0, 0.0, &lasers, &constants);
        assert!(short.summary().contains("insufficient"));

        let stuck = allocate_power(1.0, 100.0, &lasers, &constants);
        assert!(stuck.summary().contains("unbreakable"));
    }
}
