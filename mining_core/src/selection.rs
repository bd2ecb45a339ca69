//! Selection state: the chosen laserheads, their module slots and the
//! optional gadget
//!
//! This is the unit of work the calculators operate on. The state is an
//! explicit value owned by the caller (typically a UI layer); the
//! calculators read it and never mutate it. It round-trips through JSON as
//! an opaque snapshot.

use crate::calc::{
    allocate_power, calculate_attribute_value, calculate_resistance_modifier,
    create_synthetic_attribute, total_curves, CurveInput, CurvePair, LaserPower, PowerAllocation,
};
use crate::config::MiningConstants;
use crate::item::{clean_laser_name, Gadget, Laserhead, Module, ModuleInstance};
use crate::types::AttributeName;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selection state error
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Module slot {slot} out of range (capacity {capacity})")]
    SlotOutOfRange { slot: usize, capacity: usize },
}

/// One chosen laserhead with its module slots.
///
/// The slot array holds at most the laserhead's capacity; a slot is either
/// empty or holds a module instance. Trailing empty slots are trimmed on
/// removal, internal gaps persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserheadLoadout {
    pub laserhead: Laserhead,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub slots: Vec<Option<ModuleInstance>>,
}

impl LaserheadLoadout {
    pub fn new(laserhead: Laserhead) -> Self {
        LaserheadLoadout {
            laserhead,
            custom_name: None,
            slots: Vec::new(),
        }
    }

    /// Slot capacity: the laserhead's "Module Slots" attribute, or the
    /// configured default.
    pub fn slot_capacity(&self, constants: &MiningConstants) -> usize {
        self.laserhead
            .module_slots()
            .unwrap_or(constants.default_module_slots)
    }

    /// Place a module into a slot, replacing any occupant.
    pub fn set_module(
        &mut self,
        slot: usize,
        module: Module,
        constants: &MiningConstants,
    ) -> Result<(), SelectionError> {
        let capacity = self.slot_capacity(constants);
        if slot >= capacity {
            return Err(SelectionError::SlotOutOfRange { slot, capacity });
        }
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
        self.slots[slot] = Some(ModuleInstance::new(module));
        Ok(())
    }

    /// Empty a slot, returning its occupant. Trailing empties are trimmed;
    /// gaps before occupied slots stay.
    pub fn remove_module(&mut self, slot: usize) -> Option<ModuleInstance> {
        let removed = self.slots.get_mut(slot)?.take();
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        removed
    }

    /// Toggle the activity flag of an active-typed module in a slot.
    /// Returns whether anything changed.
    pub fn toggle_module(&mut self, slot: usize) -> bool {
        self.slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .map_or(false, ModuleInstance::toggle)
    }

    /// Custom name when set, otherwise the cleaned catalog name.
    pub fn display_name(&self) -> String {
        self.custom_name
            .clone()
            .unwrap_or_else(|| clean_laser_name(&self.laserhead.name))
    }

    /// Effective value of an attribute with slot modules applied. Falls
    /// back to a synthesized zero base when the laserhead lacks the
    /// attribute but a module modifies it.
    pub fn attribute_value(&self, name: &AttributeName) -> Option<f64> {
        match self.laserhead.attribute(name) {
            Some(attr) => calculate_attribute_value(attr, &self.slots),
            None => {
                let synthetic = create_synthetic_attribute(name, &self.slots)?;
                calculate_attribute_value(&synthetic, &self.slots)
            }
        }
    }

    pub fn max_power(&self) -> f64 {
        self.attribute_value(&AttributeName::MaximumLaserPower)
            .unwrap_or(0.0)
    }

    pub fn min_power(&self) -> f64 {
        self.attribute_value(&AttributeName::MinimumLaserPower)
            .unwrap_or(0.0)
    }

    /// Net resistance multiplier for this loadout.
    pub fn resistance_modifier(&self, gadget: Option<&Gadget>) -> f64 {
        calculate_resistance_modifier(&self.laserhead, &self.slots, gadget)
    }

    /// The record the power allocation search consumes.
    pub fn laser_power(&self, gadget: Option<&Gadget>) -> LaserPower {
        LaserPower {
            name: self.display_name(),
            max_power: self.max_power(),
            resistance_modifier: self.resistance_modifier(gadget),
        }
    }

    /// The record the curve generator consumes.
    pub fn curve_input(&self, gadget: Option<&Gadget>) -> CurveInput {
        CurveInput {
            min_power: self.min_power(),
            max_power: self.max_power(),
            resistance_modifier: self.resistance_modifier(gadget),
        }
    }
}

/// The full selection: ordered loadouts plus at most one gadget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub loadouts: Vec<LaserheadLoadout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gadget: Option<Gadget>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    pub fn add_laserhead(&mut self, laserhead: Laserhead) -> &mut LaserheadLoadout {
        let index = self.loadouts.len();
        self.loadouts.push(LaserheadLoadout::new(laserhead));
        &mut self.loadouts[index]
    }

    pub fn remove_laserhead(&mut self, index: usize) -> Option<LaserheadLoadout> {
        if index < self.loadouts.len() {
            Some(self.loadouts.remove(index))
        } else {
            None
        }
    }

    pub fn set_gadget(&mut self, gadget: Gadget) {
        self.gadget = Some(gadget);
    }

    pub fn clear_gadget(&mut self) -> Option<Gadget> {
        self.gadget.take()
    }

    /// Effective power records for all loadouts, in selection order.
    pub fn laser_powers(&self) -> Vec<LaserPower> {
        self.loadouts
            .iter()
            .map(|l| l.laser_power(self.gadget.as_ref()))
            .collect()
    }

    /// Run the power allocation search against a rock.
    pub fn allocate_power(
        &self,
        mass: f64,
        resistance: f64,
        constants: &MiningConstants,
    ) -> PowerAllocation {
        allocate_power(mass, resistance, &self.laser_powers(), constants)
    }

    /// Combined "Total" chart series for all loadouts.
    pub fn total_curves(&self, constants: &MiningConstants) -> CurvePair {
        let inputs: Vec<CurveInput> = self
            .loadouts
            .iter()
            .map(|l| l.curve_input(self.gadget.as_ref()))
            .collect();
        total_curves(&inputs, constants)
    }

    /// Serialize the selection as an opaque JSON snapshot.
    pub fn to_snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a selection from a snapshot produced by `to_snapshot`.
    pub fn from_snapshot(snapshot: &str) -> serde_json::Result<Self> {
        serde_json::from_str(snapshot)
    }
}
