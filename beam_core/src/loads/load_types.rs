//! Load kind definitions
//!
//! The calculator accepts three kinds of load, each collected in its own
//! ordered list and reported to the model in its own JSON array.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BeamError;

/// Kind of applied load
///
/// # Example
/// ```
/// use beam_core::loads::LoadKind;
///
/// let kind: LoadKind = "moment".parse().unwrap();
/// assert_eq!(kind.unit(), "Nm");
/// assert_eq!(kind.title(), "Add Moment Load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadKind {
    /// Concentrated force (N)
    Point,
    /// Applied couple (Nm)
    Moment,
    /// Line load (N/m)
    Distributed,
}

impl LoadKind {
    /// All load kinds in display order
    pub const ALL: [LoadKind; 3] = [LoadKind::Point, LoadKind::Moment, LoadKind::Distributed];

    /// Wire name (`point`, `moment`, `distributed`)
    pub fn code(&self) -> &'static str {
        match self {
            LoadKind::Point => "point",
            LoadKind::Moment => "moment",
            LoadKind::Distributed => "distributed",
        }
    }

    /// Unit the magnitude is read in
    pub fn unit(&self) -> &'static str {
        match self {
            LoadKind::Point => "N",
            LoadKind::Moment => "Nm",
            LoadKind::Distributed => "N/m",
        }
    }

    /// Label used in the load list
    pub fn list_label(&self) -> &'static str {
        match self {
            LoadKind::Point => "Point Load",
            LoadKind::Moment => "Moment",
            LoadKind::Distributed => "Distributed Load",
        }
    }

    /// Title of the add-load dialog and its opening button
    pub fn title(&self) -> &'static str {
        match self {
            LoadKind::Point => "Add Point Load",
            LoadKind::Moment => "Add Moment Load",
            LoadKind::Distributed => "Add Distributed Load",
        }
    }
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for LoadKind {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" => Ok(LoadKind::Point),
            "moment" => Ok(LoadKind::Moment),
            "distributed" => Ok(LoadKind::Distributed),
            other => Err(BeamError::invalid_input(
                "load_kind",
                other,
                "Expected one of: point, moment, distributed",
            )),
        }
    }
}
