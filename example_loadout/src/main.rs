//! Example Loadout - A console walkthrough of the mining_core calculators
//!
//! This demo shows:
//! - Loading an item catalog from embedded JSON dumps
//! - Fitting modules and a gadget onto laserheads
//! - Resolving effective stats through the modifier rules
//! - Searching for the smallest laser subset that breaks a rock
//! - Sampling the mass/resistance curves that back the chart view

use mining_core::config::parse_toml;
use mining_core::prelude::*;
use mining_core::{format_rounded, ConfigError, SelectionError};

const LASERHEADS_JSON: &str = include_str!("../data/laserheads.json");
const MODULES_JSON: &str = include_str!("../data/modules.json");
const GADGETS_JSON: &str = include_str!("../data/gadgets.json");
const CONSTANTS_TOML: &str = include_str!("../data/constants.toml");

#[derive(Debug)]
enum DemoError {
    Catalog(mining_core::CatalogError),
    Config(ConfigError),
    Selection(SelectionError),
    MissingItem(&'static str, u32),
    Snapshot(serde_json::Error),
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoError::Catalog(e) => write!(f, "catalog: {}", e),
            DemoError::Config(e) => write!(f, "config: {}", e),
            DemoError::Selection(e) => write!(f, "selection: {}", e),
            DemoError::MissingItem(kind, id) => write!(f, "no {} with id {}", kind, id),
            DemoError::Snapshot(e) => write!(f, "snapshot: {}", e),
        }
    }
}

impl std::error::Error for DemoError {}

impl From<mining_core::CatalogError> for DemoError {
    fn from(e: mining_core::CatalogError) -> Self {
        DemoError::Catalog(e)
    }
}

impl From<ConfigError> for DemoError {
    fn from(e: ConfigError) -> Self {
        DemoError::Config(e)
    }
}

impl From<SelectionError> for DemoError {
    fn from(e: SelectionError) -> Self {
        DemoError::Selection(e)
    }
}

fn print_loadout(loadout: &LaserheadLoadout, gadget: Option<&Gadget>) {
    println!("  {} (size {})", loadout.display_name(), loadout.laserhead.size());
    for slot in loadout.slots.iter().flatten() {
        let state = if slot.in_effect() { "on" } else { "off" };
        println!("    module: {} [{}]", slot.module.name, state);
    }
    println!(
        "    power: {} - {} MW",
        format_rounded(loadout.min_power()),
        format_rounded(loadout.max_power())
    );
    println!(
        "    resistance modifier: x{}",
        format_rounded(loadout.resistance_modifier(gadget))
    );
}

fn check_rock(selection: &SelectionState, mass: f64, resistance: f64, constants: &MiningConstants) {
    let result = selection.allocate_power(mass, resistance, constants);
    println!(
        "  rock {} kg at {}% resistance -> {}",
        format_rounded(mass),
        format_rounded(resistance),
        result.summary()
    );
}

fn run() -> Result<(), DemoError> {
    let constants: MiningConstants = parse_toml(CONSTANTS_TOML)?;
    constants.validate()?;
    let catalog = ItemCatalog::from_json(LASERHEADS_JSON, MODULES_JSON, GADGETS_JSON)?;

    println!(
        "Catalog: {} laserheads, {} modules, {} gadgets",
        catalog.laserheads.len(),
        catalog.modules.len(),
        catalog.gadgets.len()
    );

    // Fit out two lasers: one tuned for power, one bare.
    let mut selection = SelectionState::new();
    {
        let head = catalog
            .laserhead(1)
            .ok_or(DemoError::MissingItem("laserhead", 1))?;
        let rieger = catalog
            .module(11)
            .ok_or(DemoError::MissingItem("module", 11))?;
        let surge = catalog
            .module(10)
            .ok_or(DemoError::MissingItem("module", 10))?;

        let loadout = selection.add_laserhead(head.clone());
        loadout.set_module(0, rieger.clone(), &constants)?;
        loadout.set_module(1, surge.clone(), &constants)?;
    }
    let second = catalog
        .laserhead(2)
        .ok_or(DemoError::MissingItem("laserhead", 2))?;
    selection.add_laserhead(second.clone());

    let gadget = catalog
        .gadget(20)
        .ok_or(DemoError::MissingItem("gadget", 20))?;
    selection.set_gadget(gadget.clone());

    println!("\nLoadout ({} active):", gadget.name);
    for loadout in &selection.loadouts {
        print_loadout(loadout, selection.gadget.as_ref());
    }

    println!("\nPower check:");
    check_rock(&selection, 20000.0, 40.0, &constants);
    check_rock(&selection, 28000.0, 40.0, &constants);
    check_rock(&selection, 100000.0, 40.0, &constants);

    // Toggling the surge module off changes the answer.
    if selection.loadouts[0].toggle_module(1) {
        println!("\nWith the surge module disabled:");
        check_rock(&selection, 20000.0, 40.0, &constants);
        selection.loadouts[0].toggle_module(1);
    }

    println!("\nCombined curve (max power):");
    let pair = selection.total_curves(&constants);
    for resistance in [0, 250, 500, 750, 1000] {
        let point = &pair.max[resistance];
        println!(
            "  R = {:>5}% -> {} kg",
            format_rounded(point.x),
            format_rounded(point.y)
        );
    }

    // The selection round-trips through an opaque snapshot.
    let snapshot = selection.to_snapshot().map_err(DemoError::Snapshot)?;
    let restored = SelectionState::from_snapshot(&snapshot).map_err(DemoError::Snapshot)?;
    println!(
        "\nSnapshot: {} bytes, restores {} loadouts",
        snapshot.len(),
        restored.loadouts.len()
    );

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
