//! # File I/O Module
//!
//! Reads the two JSON files BeamCee accepts:
//! - **Settings** (`ClientSettings`): endpoint and timeouts
//! - **Calculation input** (`CalculationInput`): a beam plus its loads, for
//!   running the CLI without interactive prompts
//!
//! Both are read-only inputs. Nothing is ever written back.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_calculation_input, load_settings};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("beamcee.json"))?;
//! let input = load_calculation_input(Path::new("beam.json"))?;
//! println!("{} loads against {}", input.loads.len(), settings.endpoint_url());
//! # Ok::<(), beam_core::BeamError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::beam::BeamConfiguration;
use crate::errors::{BeamError, BeamResult};
use crate::loads::LoadSet;
use crate::prompt::build_prompt;
use crate::settings::ClientSettings;

/// A beam and its loads, as stored in a calculation input file.
///
/// ```json
/// {
///   "beam": { "beam_type": "simply-supported", "support_type": "pinned", "length": "5" },
///   "loads": { "point": [{ "magnitude": "1000", "position": "2.5" }] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    pub beam: BeamConfiguration,
    pub loads: LoadSet,
}

impl CalculationInput {
    /// Analysis prompt for this input
    pub fn prompt(&self) -> String {
        build_prompt(&self.beam, &self.loads)
    }
}

/// Load client settings from a JSON file and validate them.
pub fn load_settings(path: &Path) -> BeamResult<ClientSettings> {
    let settings: ClientSettings = read_json(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Load a calculation input file.
///
/// Unknown beam, support or load-kind values are rejected here.
pub fn load_calculation_input(path: &Path) -> BeamResult<CalculationInput> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> BeamResult<T> {
    let mut file = File::open(path).map_err(|e| {
        BeamError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        BeamError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| BeamError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;

    use crate::beam::{BeamType, SupportType};
    use crate::loads::{LoadEntry, LoadKind};
    use crate::segmenter::MissingMarkerPolicy;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beamcee_test_{}.json", name))
    }

    #[test]
    fn test_load_calculation_input() {
        let path = temp_path("input");
        fs::write(
            &path,
            r#"{
                "beam": {"beam_type": "simply-supported", "support_type": "pinned", "length": "5"},
                "loads": {"point": [{"magnitude": "1000", "position": "2.5"}]}
            }"#,
        )
        .unwrap();

        let input = load_calculation_input(&path).unwrap();
        assert_eq!(input.beam.beam_type, BeamType::SimplySupported);
        assert_eq!(input.beam.support_type, SupportType::Pinned);
        assert_eq!(input.loads.entries(LoadKind::Point), &[LoadEntry::new("1000", "2.5")]);
        assert!(input.prompt().contains("Length: 5m"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_enum_rejected() {
        let path = temp_path("bad_enum");
        fs::write(&path, r#"{"beam": {"beam_type": "propped"}}"#).unwrap();

        let err = load_calculation_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_settings(&temp_path("does_not_exist")).unwrap_err();
        assert!(matches!(err, BeamError::FileError { ref operation, .. } if operation == "open"));
    }

    #[test]
    fn test_load_settings_validates() {
        let path = temp_path("settings_bad");
        fs::write(&path, r#"{"base_url": "localhost:3000"}"#).unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "SETTINGS");
        let _ = fs::remove_file(&path);

        let path = temp_path("settings_ok");
        fs::write(&path, r#"{"missing_marker_policy": "single-block"}"#).unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.missing_marker_policy, MissingMarkerPolicy::SingleBlock);
        let _ = fs::remove_file(&path);
    }
}
