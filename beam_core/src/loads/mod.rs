//! Applied loads
//!
//! Loads are entered one at a time through the add-load dialog and kept in
//! three insertion-ordered lists, one per [`LoadKind`]. Magnitude and
//! position stay as the text the user typed.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{LoadEntry, LoadKind, LoadSet};
//!
//! let loads = LoadSet::new()
//!     .with_load(LoadKind::Point, LoadEntry::new("1000", "2.5"))
//!     .with_load(LoadKind::Distributed, LoadEntry::new("200", "0"));
//!
//! assert_eq!(loads.len(), 2);
//! assert_eq!(loads.to_json(LoadKind::Point), r#"[{"magnitude":"1000","position":"2.5"}]"#);
//! assert_eq!(loads.to_json(LoadKind::Moment), "[]");
//! ```

pub mod load_types;

pub use load_types::LoadKind;

use serde::{Deserialize, Serialize};

/// One applied load as entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadEntry {
    /// Magnitude in the kind's unit (N, Nm or N/m)
    pub magnitude: String,
    /// Position from the left end (m)
    pub position: String,
}

impl LoadEntry {
    pub fn new(magnitude: impl Into<String>, position: impl Into<String>) -> Self {
        LoadEntry {
            magnitude: magnitude.into(),
            position: position.into(),
        }
    }
}

/// The three load lists of a calculation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadSet {
    pub point: Vec<LoadEntry>,
    pub moment: Vec<LoadEntry>,
    pub distributed: Vec<LoadEntry>,
}

impl LoadSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append
    pub fn with_load(mut self, kind: LoadKind, entry: LoadEntry) -> Self {
        self.push(kind, entry);
        self
    }

    /// Append an entry to the end of `kind`'s list
    pub fn push(&mut self, kind: LoadKind, entry: LoadEntry) {
        self.entries_mut(kind).push(entry);
    }

    /// Entries of one kind, in insertion order
    pub fn entries(&self, kind: LoadKind) -> &[LoadEntry] {
        match kind {
            LoadKind::Point => &self.point,
            LoadKind::Moment => &self.moment,
            LoadKind::Distributed => &self.distributed,
        }
    }

    fn entries_mut(&mut self, kind: LoadKind) -> &mut Vec<LoadEntry> {
        match kind {
            LoadKind::Point => &mut self.point,
            LoadKind::Moment => &mut self.moment,
            LoadKind::Distributed => &mut self.distributed,
        }
    }

    /// Total number of loads across all kinds
    pub fn len(&self) -> usize {
        self.point.len() + self.moment.len() + self.distributed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compact JSON array of one kind's entries, e.g. `[{"magnitude":"10","position":"2"}]`
    pub fn to_json(&self, kind: LoadKind) -> String {
        // A Vec of plain string structs always serializes
        serde_json::to_string(self.entries(kind)).unwrap_or_else(|_| "[]".to_string())
    }

    /// All loads as display lines: point loads first, then moments, then distributed
    pub fn describe(&self) -> Vec<String> {
        LoadKind::ALL
            .iter()
            .flat_map(|&kind| {
                self.entries(kind).iter().map(move |entry| {
                    format!(
                        "{}: {}{} at {}m",
                        kind.list_label(),
                        entry.magnitude,
                        kind.unit(),
                        entry.position
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_only_touches_one_kind() {
        let mut loads = LoadSet::new();
        loads.push(LoadKind::Point, LoadEntry::new("10", "2"));

        assert_eq!(loads.point, vec![LoadEntry::new("10", "2")]);
        assert!(loads.moment.is_empty());
        assert!(loads.distributed.is_empty());
        assert_eq!(loads.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let loads = LoadSet::new()
            .with_load(LoadKind::Moment, LoadEntry::new("5", "1"))
            .with_load(LoadKind::Moment, LoadEntry::new("7", "0.5"));
        let magnitudes: Vec<_> = loads.moment.iter().map(|e| e.magnitude.as_str()).collect();
        assert_eq!(magnitudes, vec!["5", "7"]);
    }

    #[test]
    fn test_json_field_order() {
        let loads = LoadSet::new().with_load(LoadKind::Point, LoadEntry::new("1000", "2.5"));
        assert_eq!(loads.to_json(LoadKind::Point), r#"[{"magnitude":"1000","position":"2.5"}]"#);
        assert_eq!(loads.to_json(LoadKind::Distributed), "[]");
    }

    #[test]
    fn test_json_escapes_free_text() {
        let loads = LoadSet::new().with_load(LoadKind::Point, LoadEntry::new("1\"0", ""));
        assert_eq!(loads.to_json(LoadKind::Point), r#"[{"magnitude":"1\"0","position":""}]"#);
    }

    #[test]
    fn test_describe() {
        let loads = LoadSet::new()
            .with_load(LoadKind::Distributed, LoadEntry::new("200", "0"))
            .with_load(LoadKind::Point, LoadEntry::new("10", "2"))
            .with_load(LoadKind::Moment, LoadEntry::new("50", "4"));

        assert_eq!(
            loads.describe(),
            vec![
                "Point Load: 10N at 2m".to_string(),
                "Moment: 50Nm at 4m".to_string(),
                "Distributed Load: 200N/m at 0m".to_string(),
            ]
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let loads: LoadSet =
            serde_json::from_str(r#"{"point":[{"magnitude":"1","position":"2"}]}"#).unwrap();
        assert_eq!(loads.point.len(), 1);
        assert!(loads.moment.is_empty());
    }
}
