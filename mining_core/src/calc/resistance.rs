//! Resistance folding: laserhead, modules and gadget into one multiplier

use crate::calc::combine::combine;
use crate::item::{Attribute, Gadget, Laserhead, ModuleInstance};
use crate::types::{AttributeName, Unit};

/// Fold all resistance contributions into a single multiplier.
///
/// Returns e.g. 1.25 for a net 25% resistance amplification and exactly
/// 1.0 when neither the laserhead nor any module defines a Resistance
/// attribute. A laserhead without native resistance still picks up
/// module-granted resistance through a synthesized 0% base. The gadget,
/// when present, folds in last and has no activity toggle.
pub fn calculate_resistance_modifier(
    laserhead: &Laserhead,
    slots: &[Option<ModuleInstance>],
    gadget: Option<&Gadget>,
) -> f64 {
    let module_has_resistance = slots
        .iter()
        .flatten()
        .any(|m| m.module.attribute(&AttributeName::Resistance).is_some());

    let base_attr = match laserhead.attribute(&AttributeName::Resistance) {
        Some(attr) => attr.clone(),
        None if module_has_resistance => {
            Attribute::new(AttributeName::Resistance, "0").with_unit(Unit::Percent)
        }
        None => return 1.0,
    };

    let mut resistance = base_attr.parsed_value().unwrap_or(0.0);
    let unit = base_attr.unit();

    for instance in slots.iter().flatten() {
        if let Some(modifier) = instance.module.attribute(&AttributeName::Resistance) {
            resistance = combine(
                resistance,
                modifier.parsed_value(),
                unit,
                instance.in_effect(),
            );
        }
    }

    if let Some(gadget) = gadget {
        if let Some(modifier) = gadget.resistance_attribute() {
            resistance = combine(resistance, modifier.parsed_value(), unit, true);
        }
    }

    1.0 + resistance / 100.0
}
