//! # Beam Configuration
//!
//! The structural description of the beam being analyzed: how it is
//! modeled, how it is supported, and its dimensions and stiffness.
//!
//! Beam and support types are closed enums. Their wire names match the
//! select-box values of the calculator form (`"simply-supported"`,
//! `"pinned"`, ...), with `Unset` written as the empty string. Anything else
//! is rejected when parsing.
//!
//! Dimensions stay as text. The form forwards whatever the user typed, so
//! nothing here checks units, signs or cross-field consistency.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{BeamConfiguration, BeamType, SupportType};
//!
//! let beam = BeamConfiguration {
//!     beam_type: "simply-supported".parse().unwrap(),
//!     support_type: SupportType::Pinned,
//!     length: "5".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(beam.beam_type, BeamType::SimplySupported);
//! assert!("hinged".parse::<SupportType>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BeamError;

/// How the beam is modeled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BeamType {
    /// Nothing selected yet
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "simply-supported")]
    SimplySupported,
    #[serde(rename = "cantilever")]
    Cantilever,
    #[serde(rename = "fixed")]
    Fixed,
}

impl BeamType {
    /// Selectable beam types, in form order (excludes `Unset`)
    pub const ALL: [BeamType; 3] = [
        BeamType::SimplySupported,
        BeamType::Cantilever,
        BeamType::Fixed,
    ];

    /// Wire name, as embedded in the prompt
    pub fn code(&self) -> &'static str {
        match self {
            BeamType::Unset => "",
            BeamType::SimplySupported => "simply-supported",
            BeamType::Cantilever => "cantilever",
            BeamType::Fixed => "fixed",
        }
    }

    /// Human-readable name for selection lists
    pub fn display_name(&self) -> &'static str {
        match self {
            BeamType::Unset => "Select Beam Type",
            BeamType::SimplySupported => "Simply Supported",
            BeamType::Cantilever => "Cantilever",
            BeamType::Fixed => "Fixed",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, BeamType::Unset)
    }
}

impl fmt::Display for BeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BeamType {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(BeamType::Unset),
            "simply-supported" => Ok(BeamType::SimplySupported),
            "cantilever" => Ok(BeamType::Cantilever),
            "fixed" => Ok(BeamType::Fixed),
            other => Err(BeamError::invalid_input(
                "beam_type",
                other,
                "Expected one of: simply-supported, cantilever, fixed",
            )),
        }
    }
}

/// How the beam is restrained at its supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportType {
    /// Nothing selected yet
    #[default]
    #[serde(rename = "")]
    Unset,
    /// Restrains displacement and rotation
    #[serde(rename = "fixed")]
    Fixed,
    /// Restrains vertical displacement only
    #[serde(rename = "roller")]
    Roller,
    /// Restrains displacement, allows rotation
    #[serde(rename = "pinned")]
    Pinned,
}

impl SupportType {
    /// Selectable support types, in form order (excludes `Unset`)
    pub const ALL: [SupportType; 3] = [
        SupportType::Fixed,
        SupportType::Roller,
        SupportType::Pinned,
    ];

    /// Wire name, as embedded in the prompt
    pub fn code(&self) -> &'static str {
        match self {
            SupportType::Unset => "",
            SupportType::Fixed => "fixed",
            SupportType::Roller => "roller",
            SupportType::Pinned => "pinned",
        }
    }

    /// Human-readable name for selection lists
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::Unset => "Select Support Type",
            SupportType::Fixed => "Fixed",
            SupportType::Roller => "Roller",
            SupportType::Pinned => "Pinned",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, SupportType::Unset)
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SupportType {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(SupportType::Unset),
            "fixed" => Ok(SupportType::Fixed),
            "roller" => Ok(SupportType::Roller),
            "pinned" => Ok(SupportType::Pinned),
            other => Err(BeamError::invalid_input(
                "support_type",
                other,
                "Expected one of: fixed, roller, pinned",
            )),
        }
    }
}

/// Beam model, supports and material properties as entered in the form.
///
/// Lengths are meters and Young's modulus is GPa by convention of the
/// prompt template; the strings themselves are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfiguration {
    pub beam_type: BeamType,
    pub support_type: SupportType,
    /// Span (m)
    pub length: String,
    /// Section width (m)
    pub width: String,
    /// Section height (m)
    pub height: String,
    /// Young's modulus (GPa)
    pub youngs_modulus: String,
}
