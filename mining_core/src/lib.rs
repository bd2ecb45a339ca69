//! mining_core - Mining loadout calculator library
//!
//! This library provides:
//! - Item model: laserheads, modules, gadgets and their attributes
//! - Attribute resolution: base stats merged with module modifiers under
//!   unit-specific combination rules
//! - Resistance folding into a single per-laser multiplier
//! - Power allocation: the minimal laser subset that breaks a given rock
//! - Mass/resistance curve generation for charting

pub mod calc;
pub mod catalog;
pub mod config;
pub mod item;
pub mod prelude;
pub mod selection;
pub mod types;

// Re-export core types for convenience
pub use calc::{
    allocate_power, calculate_attribute_value, calculate_resistance_modifier, combine,
    create_synthetic_attribute, format_rounded, laser_curves, mass_at_resistance, mass_curve,
    required_power, round_value, total_curves, CurveInput, CurvePair, CurvePoint, LaserPower,
    PowerAllocation,
};
pub use catalog::{CatalogError, ItemCatalog};
pub use config::{ConfigError, MiningConstants};
pub use item::{Attribute, Gadget, Laserhead, Module, ModuleInstance};
pub use selection::{LaserheadLoadout, SelectionError, SelectionState};
pub use types::{AttributeName, Unit};
