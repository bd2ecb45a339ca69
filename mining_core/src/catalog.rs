//! Item catalog loading and load-time validation

use crate::item::{Attribute, Gadget, Laserhead, Module};
use crate::types::AttributeName;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Catalog validation error: {0}")]
    ValidationError(String),
}

/// All selectable items, loaded from the game data dumps.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    pub laserheads: Vec<Laserhead>,
    pub modules: Vec<Module>,
    pub gadgets: Vec<Gadget>,
}

impl ItemCatalog {
    /// Load `laserheads.json`, `modules.json` and `gadgets.json` from a
    /// directory and validate the result.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let laserheads = fs::read_to_string(dir.join("laserheads.json"))?;
        let modules = fs::read_to_string(dir.join("modules.json"))?;
        let gadgets = fs::read_to_string(dir.join("gadgets.json"))?;
        Self::from_json(&laserheads, &modules, &gadgets)
    }

    /// Build a catalog from three JSON arrays and validate it.
    pub fn from_json(
        laserheads: &str,
        modules: &str,
        gadgets: &str,
    ) -> Result<Self, CatalogError> {
        let catalog = ItemCatalog {
            laserheads: serde_json::from_str(laserheads)?,
            modules: serde_json::from_str(modules)?,
            gadgets: serde_json::from_str(gadgets)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the data-model invariant: every non-empty value of a
    /// recognized numeric attribute is a decimal or a "low-high" range.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for head in &self.laserheads {
            validate_attributes("laserhead", &head.name, &head.attributes)?;
        }
        for module in &self.modules {
            validate_attributes("module", &module.name, &module.attributes)?;
        }
        for gadget in &self.gadgets {
            validate_attributes("gadget", &gadget.name, &gadget.attributes)?;
        }
        Ok(())
    }

    pub fn laserhead(&self, id: u32) -> Option<&Laserhead> {
        self.laserheads.iter().find(|l| l.id == id)
    }

    pub fn module(&self, id: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn gadget(&self, id: u32) -> Option<&Gadget> {
        self.gadgets.iter().find(|g| g.id == id)
    }

    /// Laserheads of the given size classes, in catalog order.
    pub fn laserheads_of_sizes(&self, sizes: &[u32]) -> Vec<&Laserhead> {
        self.laserheads
            .iter()
            .filter(|l| sizes.contains(&l.size()))
            .collect()
    }
}

fn validate_attributes(
    kind: &str,
    item_name: &str,
    attributes: &[Attribute],
) -> Result<(), CatalogError> {
    for attr in attributes {
        if !attr.has_value() {
            continue;
        }
        // "Item Type" holds Active/Passive tags; unrecognized names carry
        // free-form data the calculators never parse.
        if matches!(
            attr.attribute_name,
            AttributeName::ItemType | AttributeName::Other(_)
        ) {
            continue;
        }
        if attr.parsed_value().is_none() {
            return Err(CatalogError::ValidationError(format!(
                "{} \"{}\": attribute \"{}\" has non-numeric value \"{}\"",
                kind, item_name, attr.attribute_name, attr.value
            )));
        }
    }
    Ok(())
}
