//! Core types: recognized attribute names and units of measure

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of attribute names the calculators know how to handle.
///
/// Catalog data addresses attributes by display string; parsing into this
/// enum keeps string matching at the load boundary. Names outside the
/// recognized set are carried as `Other` and treated as plain numeric
/// attributes with no default unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeName {
    MinimumLaserPower,
    MaximumLaserPower,
    MiningLaserPower,
    ExtractionLaserPower,
    Resistance,
    LaserInstability,
    OptimalChargeWindowSize,
    OptimalChargeWindowRate,
    OptimalChargeRate,
    CatastrophicChargeRate,
    MaximumRange,
    OptimalRange,
    ShatterDamage,
    MaximumDamage,
    InertMaterialLevel,
    Duration,
    Uses,
    ItemType,
    ModuleSlots,
    Size,
    Other(String),
}

impl AttributeName {
    /// Parse a catalog display name. Unrecognized names become `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Minimum Laser Power" => AttributeName::MinimumLaserPower,
            "Maximum Laser Power" => AttributeName::MaximumLaserPower,
            "Mining Laser Power" => AttributeName::MiningLaserPower,
            "Extraction Laser Power" => AttributeName::ExtractionLaserPower,
            "Resistance" => AttributeName::Resistance,
            "Laser Instability" => AttributeName::LaserInstability,
            "Optimal Charge Window Size" => AttributeName::OptimalChargeWindowSize,
            "Optimal Charge Window Rate" => AttributeName::OptimalChargeWindowRate,
            "Optimal Charge Rate" => AttributeName::OptimalChargeRate,
            "Catastrophic Charge Rate" => AttributeName::CatastrophicChargeRate,
            "Maximum Range" => AttributeName::MaximumRange,
            "Optimal Range" => AttributeName::OptimalRange,
            "Shatter Damage" => AttributeName::ShatterDamage,
            "Maximum Damage" => AttributeName::MaximumDamage,
            "Inert Material Level" => AttributeName::InertMaterialLevel,
            "Duration" => AttributeName::Duration,
            "Uses" => AttributeName::Uses,
            "Item Type" => AttributeName::ItemType,
            "Module Slots" => AttributeName::ModuleSlots,
            "Size" => AttributeName::Size,
            other => AttributeName::Other(other.to_string()),
        }
    }

    /// The catalog display string for this name.
    pub fn name(&self) -> &str {
        match self {
            AttributeName::MinimumLaserPower => "Minimum Laser Power",
            AttributeName::MaximumLaserPower => "Maximum Laser Power",
            AttributeName::MiningLaserPower => "Mining Laser Power",
            AttributeName::ExtractionLaserPower => "Extraction Laser Power",
            AttributeName::Resistance => "Resistance",
            AttributeName::LaserInstability => "Laser Instability",
            AttributeName::OptimalChargeWindowSize => "Optimal Charge Window Size",
            AttributeName::OptimalChargeWindowRate => "Optimal Charge Window Rate",
            AttributeName::OptimalChargeRate => "Optimal Charge Rate",
            AttributeName::CatastrophicChargeRate => "Catastrophic Charge Rate",
            AttributeName::MaximumRange => "Maximum Range",
            AttributeName::OptimalRange => "Optimal Range",
            AttributeName::ShatterDamage => "Shatter Damage",
            AttributeName::MaximumDamage => "Maximum Damage",
            AttributeName::InertMaterialLevel => "Inert Material Level",
            AttributeName::Duration => "Duration",
            AttributeName::Uses => "Uses",
            AttributeName::ItemType => "Item Type",
            AttributeName::ModuleSlots => "Module Slots",
            AttributeName::Size => "Size",
            AttributeName::Other(name) => name,
        }
    }

    /// Default unit when the attribute record carries no explicit one.
    pub fn default_unit(&self) -> Unit {
        match self {
            AttributeName::MinimumLaserPower
            | AttributeName::MaximumLaserPower
            | AttributeName::MiningLaserPower
            | AttributeName::ExtractionLaserPower => Unit::MegaWatts,
            AttributeName::Resistance
            | AttributeName::LaserInstability
            | AttributeName::OptimalChargeWindowSize
            | AttributeName::OptimalChargeWindowRate
            | AttributeName::OptimalChargeRate
            | AttributeName::CatastrophicChargeRate
            | AttributeName::ShatterDamage
            | AttributeName::MaximumDamage
            | AttributeName::InertMaterialLevel => Unit::Percent,
            AttributeName::MaximumRange | AttributeName::OptimalRange => Unit::Meters,
            AttributeName::Duration => Unit::Seconds,
            AttributeName::Uses
            | AttributeName::ItemType
            | AttributeName::ModuleSlots
            | AttributeName::Size
            | AttributeName::Other(_) => Unit::Unitless,
        }
    }

    /// Whether this is one of the laser power envelope attributes whose
    /// modifiers come from module "Mining Laser Power" entries.
    pub fn is_laser_power(&self) -> bool {
        matches!(
            self,
            AttributeName::MaximumLaserPower | AttributeName::MinimumLaserPower
        )
    }
}

impl From<String> for AttributeName {
    fn from(name: String) -> Self {
        AttributeName::from_name(&name)
    }
}

impl From<&str> for AttributeName {
    fn from(name: &str) -> Self {
        AttributeName::from_name(name)
    }
}

impl From<AttributeName> for String {
    fn from(name: AttributeName) -> Self {
        name.name().to_string()
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit of measure for an attribute value.
///
/// The unit drives how module modifiers combine with a base value:
/// percentages compose multiplicatively as factors, megawatt modifiers are
/// percent-of-100 multipliers, everything else falls to the generic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    MegaWatts,
    Percent,
    Meters,
    Seconds,
    Unitless,
}

impl Unit {
    /// Parse a unit symbol. Unknown symbols resolve to `Unitless`.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "MW" => Unit::MegaWatts,
            "%" => Unit::Percent,
            "m" => Unit::Meters,
            "s" => Unit::Seconds,
            _ => Unit::Unitless,
        }
    }

    /// The display symbol ("" for unitless).
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::MegaWatts => "MW",
            Unit::Percent => "%",
            Unit::Meters => "m",
            Unit::Seconds => "s",
            Unit::Unitless => "",
        }
    }
}

impl From<String> for Unit {
    fn from(symbol: String) -> Self {
        Unit::from_symbol(&symbol)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
