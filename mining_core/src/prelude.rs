//! Prelude module for convenient imports
//!
//! ```rust
//! use mining_core::prelude::*;
//! ```

// Core types
pub use crate::item::{Attribute, Gadget, Laserhead, Module, ModuleInstance};
pub use crate::types::{AttributeName, Unit};

// Selection state
pub use crate::selection::{LaserheadLoadout, SelectionState};

// Calculators
pub use crate::calc::{
    allocate_power, calculate_attribute_value, calculate_resistance_modifier, mass_curve,
    total_curves, CurveInput, CurvePair, CurvePoint, LaserPower, PowerAllocation,
};

// Catalog and config
pub use crate::catalog::ItemCatalog;
pub use crate::config::MiningConstants;
