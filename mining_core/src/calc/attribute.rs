//! Attribute value resolution: base item stats merged with module modifiers

use crate::calc::combine::{combine, factor_to_percentage, percentage_to_factor, round_value};
use crate::item::{Attribute, ModuleInstance};
use crate::types::{AttributeName, Unit};

/// The module attribute that modifies a given item attribute.
///
/// The laser power envelope is the one aliased pair: a single module
/// "Mining Laser Power" stat boosts minimum and maximum power identically.
pub fn modifier_source(name: &AttributeName) -> AttributeName {
    if name.is_laser_power() {
        AttributeName::MiningLaserPower
    } else {
        name.clone()
    }
}

/// Compute an attribute's effective value with all slot modules applied.
///
/// Returns the parsed base unchanged when no module modifies the
/// attribute; otherwise the combined value rounded to 2 decimals. `None`
/// when the attribute's value is empty or not numeric.
pub fn calculate_attribute_value(
    attr: &Attribute,
    slots: &[Option<ModuleInstance>],
) -> Option<f64> {
    if !attr.has_value() {
        return None;
    }
    let base = attr.parsed_value()?;
    let modifiers = module_modifiers(&attr.attribute_name, slots);
    if modifiers.is_empty() {
        return Some(base);
    }

    let value = if attr.attribute_name.is_laser_power() {
        laser_power_chain(base, &modifiers)
    } else if attr.unit() == Unit::Percent {
        percentage_chain(base, &modifiers)
    } else {
        generic_chain(base, &modifiers, attr.unit())
    };
    Some(round_value(value))
}

/// Fabricate a zero base for an attribute the item lacks but some module
/// modifies, so the module-granted stat still resolves to a value.
///
/// `None` when no module carries a non-empty, non-zero modifier under the
/// aliased name — there is nothing to display then.
pub fn create_synthetic_attribute(
    name: &AttributeName,
    slots: &[Option<ModuleInstance>],
) -> Option<Attribute> {
    let source = modifier_source(name);
    let donor = slots
        .iter()
        .flatten()
        .filter_map(|m| m.module.attribute(&source))
        .find(|a| a.has_value() && a.parsed_value().map_or(false, |v| v != 0.0))?;
    Some(Attribute {
        attribute_name: name.clone(),
        value: "0".to_string(),
        unit: donor.unit,
    })
}

/// Modules carrying a parsable modifier for the attribute, in slot order.
/// Pairing each value with its own module keeps activity checks aligned
/// even when some slots are empty or lack the attribute.
fn module_modifiers<'a>(
    name: &AttributeName,
    slots: &'a [Option<ModuleInstance>],
) -> Vec<(&'a ModuleInstance, f64)> {
    let source = modifier_source(name);
    slots
        .iter()
        .flatten()
        .filter_map(|instance| {
            instance
                .module
                .attribute(&source)
                .filter(|a| a.has_value())
                .and_then(Attribute::parsed_value)
                .map(|value| (instance, value))
        })
        .collect()
}

/// Laser power: each modifier is a pure multiplicative `value/100` factor.
/// Passive modules always apply; active-typed ones honor their toggle.
fn laser_power_chain(base: f64, modifiers: &[(&ModuleInstance, f64)]) -> f64 {
    let mut value = base;
    for (instance, modifier) in modifiers {
        if instance.module.is_passive_type() || instance.in_effect() {
            value *= modifier / 100.0;
        }
    }
    value
}

/// Percentage attributes: factor composition. Only modules tagged with
/// Item Type "Active" are eligible here (and still honor their toggle);
/// untagged and passive modules do not touch generic percentage stats.
fn percentage_chain(base: f64, modifiers: &[(&ModuleInstance, f64)]) -> f64 {
    let mut factor = percentage_to_factor(base);
    for (instance, modifier) in modifiers {
        if instance.module.is_active_type() && instance.in_effect() {
            factor *= percentage_to_factor(*modifier);
        }
    }
    factor_to_percentage(factor)
}

/// Everything else: thread the running value through `combine` once per
/// module in slot order.
fn generic_chain(base: f64, modifiers: &[(&ModuleInstance, f64)], unit: Unit) -> f64 {
    let mut value = base;
    for (instance, modifier) in modifiers {
        value = combine(value, Some(*modifier), unit, instance.in_effect());
    }
    value
}
