//! Item model: laserheads, modules, gadgets and their attributes

use crate::types::{AttributeName, Unit};
use serde::{Deserialize, Serialize};

/// A single named stat on an item.
///
/// Values are kept as the catalog's strings and parsed on demand; a value
/// is either a plain decimal or a `"low-high"` range of two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub attribute_name: AttributeName,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl Attribute {
    pub fn new(attribute_name: AttributeName, value: impl Into<String>) -> Self {
        Attribute {
            attribute_name,
            value: value.into(),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Effective unit: the explicit one if present, otherwise the static
    /// per-name default. Unknown names resolve to `Unitless`.
    pub fn unit(&self) -> Unit {
        self.unit.unwrap_or_else(|| self.attribute_name.default_unit())
    }

    /// Whether the value holds anything beyond whitespace.
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Leading decimal of the value, if any. For a `"low-high"` range this
    /// is the low bound.
    pub fn parsed_value(&self) -> Option<f64> {
        parse_leading_f64(&self.value)
    }

    /// Both bounds of a `"low-high"` range value.
    pub fn parsed_range(&self) -> Option<(f64, f64)> {
        let low = parse_leading_f64(&self.value)?;
        let rest = after_leading_number(&self.value);
        let rest = rest.trim_start();
        let high = parse_leading_f64(rest.strip_prefix('-')?)?;
        Some((low, high))
    }
}

/// Parse the longest leading decimal numeral of a string, ignoring leading
/// whitespace and anything after the numeral.
pub fn parse_leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = leading_number_len(s)?;
    s[..end].parse().ok()
}

/// Length in bytes of the leading signed decimal, if one is present.
fn leading_number_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }
    seen_digit.then_some(end)
}

fn after_leading_number(s: &str) -> &str {
    let trimmed = s.trim_start();
    match leading_number_len(trimmed) {
        Some(end) => &trimmed[end..],
        None => trimmed,
    }
}

fn find_attribute<'a>(attributes: &'a [Attribute], name: &AttributeName) -> Option<&'a Attribute> {
    attributes.iter().find(|a| &a.attribute_name == name)
}

/// A mining laser tool as listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laserhead {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub attributes: Vec<Attribute>,
}

impl Laserhead {
    pub fn attribute(&self, name: &AttributeName) -> Option<&Attribute> {
        find_attribute(&self.attributes, name)
    }

    /// Laser size class: explicit field, then the "Size" attribute, then 1.
    pub fn size(&self) -> u32 {
        self.size
            .or_else(|| {
                self.attribute(&AttributeName::Size)
                    .and_then(Attribute::parsed_value)
                    .map(|v| v as u32)
            })
            .unwrap_or(1)
    }

    /// Module slot count from the "Module Slots" attribute, when present.
    pub fn module_slots(&self) -> Option<usize> {
        self.attribute(&AttributeName::ModuleSlots)
            .and_then(Attribute::parsed_value)
            .map(|v| v as usize)
    }

    /// Display name without the "(S#)" suffix and "Mining Laser" prefix.
    pub fn short_name(&self) -> String {
        clean_laser_name(&self.name)
    }
}

/// Strip the size suffix and the common "Mining Laser" prefix from a
/// catalog laser name, e.g. "Helix Mining Laser (S1)" -> "Helix".
pub fn clean_laser_name(name: &str) -> String {
    let mut cleaned = name.to_string();
    if let Some(open) = cleaned.find("(S") {
        if let Some(close) = cleaned[open..].find(')') {
            cleaned.replace_range(open..open + close + 1, "");
        }
    }
    if let Some(pos) = cleaned.to_lowercase().find("mining laser") {
        let mut end = pos + "mining laser".len();
        if cleaned[end..].starts_with(' ') {
            end += 1;
        }
        cleaned.replace_range(pos..end, "");
    }
    cleaned.trim().to_string()
}

/// An attachable modifier item as listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Module {
    pub fn attribute(&self, name: &AttributeName) -> Option<&Attribute> {
        find_attribute(&self.attributes, name)
    }

    /// Whether the "Item Type" attribute marks this module as toggleable.
    pub fn is_active_type(&self) -> bool {
        self.attribute(&AttributeName::ItemType)
            .map_or(false, |a| a.value == "Active")
    }

    /// Whether the "Item Type" attribute marks this module as passive.
    pub fn is_passive_type(&self) -> bool {
        self.attribute(&AttributeName::ItemType)
            .map_or(false, |a| a.value == "Passive")
    }
}

/// A module occupying a laserhead slot: a copy of the catalog module plus
/// the per-slot activity toggle. The toggle is only meaningful for
/// active-typed modules; passive modules are always in effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleInstance {
    #[serde(flatten)]
    pub module: Module,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ModuleInstance {
    pub fn new(module: Module) -> Self {
        ModuleInstance {
            module,
            is_active: None,
        }
    }

    /// Activity flag semantics: absent or true means active, only an
    /// explicit false disables.
    pub fn in_effect(&self) -> bool {
        self.is_active != Some(false)
    }

    /// Flip the activity flag. No-op for modules that are not active-typed;
    /// returns whether the flag changed.
    pub fn toggle(&mut self) -> bool {
        if !self.module.is_active_type() {
            return false;
        }
        self.is_active = Some(!self.in_effect());
        true
    }
}

/// An optional resistance-modifying item, not tied to any slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gadget {
    pub id: u32,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Gadget {
    pub fn attribute(&self, name: &AttributeName) -> Option<&Attribute> {
        find_attribute(&self.attributes, name)
    }

    /// The gadget's Resistance attribute, when it holds a value.
    pub fn resistance_attribute(&self) -> Option<&Attribute> {
        self.attribute(&AttributeName::Resistance)
            .filter(|a| a.has_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(name: &str, value: &str) -> Attribute {
        Attribute::new(AttributeName::from_name(name), value)
    }

    #[test]
    fn test_parse_leading_decimal() {
        assert_eq!(parse_leading_f64("42"), Some(42.0));
        assert_eq!(parse_leading_f64("  3.5 MW"), Some(3.5));
        assert_eq!(parse_leading_f64("-12.25"), Some(-12.25));
        assert_eq!(parse_leading_f64("340-4080"), Some(340.0));
        assert_eq!(parse_leading_f64("n/a"), None);
        assert_eq!(parse_leading_f64(""), None);
    }

    #[test]
    fn test_parsed_range() {
        let a = attr("Mining Laser Power", "340-4080");
        assert_eq!(a.parsed_range(), Some((340.0, 4080.0)));
        assert_eq!(a.parsed_value(), Some(340.0));

        let plain = attr("Resistance", "25");
        assert_eq!(plain.parsed_range(), None);
    }

    #[test]
    fn test_unit_prefers_explicit_field() {
        let mut a = attr("Resistance", "25");
        assert_eq!(a.unit(), Unit::Percent);
        a.unit = Some(Unit::Meters);
        assert_eq!(a.unit(), Unit::Meters);
    }

    #[test]
    fn test_unknown_name_has_no_unit() {
        let a = attr("Warp Stability", "7");
        assert_eq!(a.unit(), Unit::Unitless);
    }

    #[test]
    fn test_laserhead_size_fallbacks() {
        let mut head = Laserhead {
            id: 1,
            name: "Helix Mining Laser (S2)".to_string(),
            size: None,
            attributes: vec![attr("Size", "2")],
        };
        assert_eq!(head.size(), 2);

        head.size = Some(1);
        assert_eq!(head.size(), 1);

        head.size = None;
        head.attributes.clear();
        assert_eq!(head.size(), 1);
    }

    #[test]
    fn test_clean_laser_name() {
        assert_eq!(clean_laser_name("Helix Mining Laser (S1)"), "Helix");
        assert_eq!(clean_laser_name("Mining Laser Klinge (S2)"), "Klinge");
        assert_eq!(clean_laser_name("Pitman"), "Pitman");
    }

    #[test]
    fn test_module_item_type_predicates() {
        let active = Module {
            id: 1,
            name: "Surge".to_string(),
            attributes: vec![attr("Item Type", "Active")],
        };
        let passive = Module {
            id: 2,
            name: "Rieger".to_string(),
            attributes: vec![attr("Item Type", "Passive")],
        };
        let untyped = Module {
            id: 3,
            name: "Bare".to_string(),
            attributes: vec![],
        };
        assert!(active.is_active_type() && !active.is_passive_type());
        assert!(passive.is_passive_type() && !passive.is_active_type());
        assert!(!untyped.is_active_type() && !untyped.is_passive_type());
    }

    #[test]
    fn test_toggle_only_for_active_type() {
        let mut active = ModuleInstance::new(Module {
            id: 1,
            name: "Surge".to_string(),
            attributes: vec![attr("Item Type", "Active")],
        });
        assert!(active.in_effect());
        assert!(active.toggle());
        assert!(!active.in_effect());
        assert!(active.toggle());
        assert!(active.in_effect());

        let mut passive = ModuleInstance::new(Module {
            id: 2,
            name: "Rieger".to_string(),
            attributes: vec![attr("Item Type", "Passive")],
        });
        assert!(!passive.toggle());
        assert!(passive.in_effect());
    }

    #[test]
    fn test_module_instance_snapshot_shape() {
        let mut inst = ModuleInstance::new(Module {
            id: 7,
            name: "Surge".to_string(),
            attributes: vec![attr("Item Type", "Active")],
        });
        inst.is_active = Some(false);

        let json = serde_json::to_value(&inst).unwrap();
        // Flattened: module fields sit alongside the activity flag.
        assert_eq!(json["id"], 7);
        assert_eq!(json["is_active"], false);

        let back: ModuleInstance = serde_json::from_value(json).unwrap();
        assert!(!back.in_effect());
        assert_eq!(back.module.name, "Surge");
    }
}
