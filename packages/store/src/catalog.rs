//! # Lab catalog: static autocomplete reference data
//!
//! The catalog maps laboratory names to their ordered product lists. It is
//! kept in `data/labs.json` and embedded in the binary; the client never
//! mutates it.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const BUNDLED_LABS: &str = include_str!("../data/labs.json");

/// One laboratory and its products, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabEntry {
    #[serde(rename = "lab")]
    pub name: String,
    pub products: Vec<String>,
}

/// Ordered list of [`LabEntry`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabCatalog {
    entries: Vec<LabEntry>,
}

impl LabCatalog {
    /// Parse a `labs.json` document (`[{ "lab": .., "products": [..] }]`).
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let mut entries: Vec<LabEntry> = serde_json::from_str(json)?;
        for entry in &mut entries {
            entry.name = entry.name.trim().to_string();
            for product in &mut entry.products {
                *product = product.trim().to_string();
            }
        }
        Ok(Self { entries })
    }

    /// The catalog shipped with the client.
    pub fn bundled() -> Result<Self, StoreError> {
        Self::from_json(BUNDLED_LABS)
    }

    pub fn entries(&self) -> &[LabEntry] {
        &self.entries
    }

    /// Exact (case-sensitive) lookup by lab name.
    pub fn find(&self, name: &str) -> Option<&LabEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Products of `name`, or an empty slice for an unknown lab.
    pub fn products_of(&self, name: &str) -> &[String] {
        self.find(name).map(|e| e.products.as_slice()).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = LabCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find("SANOFI").is_some());
    }

    #[test]
    fn test_from_json_trims_names() {
        let catalog =
            LabCatalog::from_json(r#"[{"lab":" LabX ","products":[" A1 ","B2"]}]"#).unwrap();
        assert_eq!(catalog.products_of("LabX"), ["A1".to_string(), "B2".to_string()]);
        assert!(catalog.products_of("LabY").is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            LabCatalog::from_json("{not json"),
            Err(StoreError::Json(_))
        ));
    }
}
