//! Ordered label → code lookup tables

use std::collections::HashMap;

use motoprice_types::{Error, Result};

use crate::constants::{
    ENGINE_SIZE_BRACKETS, FALLBACK_MODEL_CODE, FALLBACK_MODEL_LABEL, FUEL_CODES, GEAR_CODES,
};

/// Immutable mapping from a display label to its numeric code
///
/// Entry order is preserved and is the order in which choices are offered.
/// Labels are unique: a duplicate is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    name: String,
    entries: Vec<(String, i64)>,
    index: HashMap<String, usize>,
}

impl LookupTable {
    /// Build a table, failing on duplicate labels
    pub fn from_entries<I, S>(name: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut table = Self {
            name: name.to_string(),
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (label, code) in entries {
            let label = label.into();
            if table.index.contains_key(&label) {
                return Err(Error::MappingInvalid(format!(
                    "duplicate {} entry {:?}",
                    name, label
                )));
            }
            table.index.insert(label.clone(), table.entries.len());
            table.entries.push((label, code));
        }

        Ok(table)
    }

    fn from_static(name: &str, entries: &[(&str, i64)]) -> Self {
        Self {
            name: name.to_string(),
            entries: entries.iter().map(|(l, c)| (l.to_string(), *c)).collect(),
            index: entries
                .iter()
                .enumerate()
                .map(|(i, (l, _))| (l.to_string(), i))
                .collect(),
        }
    }

    /// Engine-size bracket → representative displacement (cc)
    pub fn engine_sizes() -> Self {
        Self::from_static("engine size", ENGINE_SIZE_BRACKETS)
    }

    pub fn fuels() -> Self {
        Self::from_static("fuel", FUEL_CODES)
    }

    pub fn gears() -> Self {
        Self::from_static("gear", GEAR_CODES)
    }

    /// Placeholder model table used when the mapping file is absent
    pub fn fallback_models() -> Self {
        Self::from_static("model", &[(FALLBACK_MODEL_LABEL, FALLBACK_MODEL_CODE)])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve a label to its code
    ///
    /// A label the table does not offer is a contract violation between the
    /// form and the table, reported as [`Error::UnknownChoice`].
    pub fn resolve(&self, label: &str) -> Result<i64> {
        self.get(label).ok_or_else(|| Error::UnknownChoice {
            table: self.name.clone(),
            label: label.to_string(),
        })
    }

    pub fn get(&self, label: &str) -> Option<i64> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    /// Labels in offer order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn first_label(&self) -> Option<&str> {
        self.entries.first().map(|(l, _)| l.as_str())
    }

    pub fn entries(&self) -> &[(String, i64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_codes() {
        let gears = LookupTable::gears();
        assert_eq!(gears.resolve("Manual").unwrap(), 1);
        assert_eq!(gears.resolve("Otomatis").unwrap(), 2);
        assert_eq!(gears.resolve("Semi-Otomatis").unwrap(), 3);

        let fuels = LookupTable::fuels();
        assert_eq!(fuels.resolve("Gasoline (Bensin)").unwrap(), 3);
        assert_eq!(fuels.resolve("LPG").unwrap(), 1);
    }

    #[test]
    fn test_resolve_unknown_fails() {
        let err = LookupTable::gears().resolve("Matic").unwrap_err();
        match err {
            Error::UnknownChoice { table, label } => {
                assert_eq!(table, "gear");
                assert_eq!(label, "Matic");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_labels_keep_insertion_order() {
        let table =
            LookupTable::from_entries("model", vec![("Zeta", 9), ("Alpha", 1), ("Mid", 5)]).unwrap();
        let labels: Vec<&str> = table.labels().collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(table.first_label(), Some("Zeta"));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let result = LookupTable::from_entries("model", vec![("Vario 125", 10), ("Vario 125", 11)]);
        assert!(matches!(result, Err(Error::MappingInvalid(_))));
    }

    #[test]
    fn test_fallback_has_single_entry() {
        let table = LookupTable::fallback_models();
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(FALLBACK_MODEL_LABEL).unwrap(), 0);
    }
}
