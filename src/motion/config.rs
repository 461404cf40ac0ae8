//! Movement domain: configuration faults and RON tuning loader.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::motion::MotionTuning;

/// A controller configuration that cannot be run. Raised at construction,
/// never during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An enabled ability has no probe to drive it.
    MissingSensor {
        sensor: &'static str,
        feature: &'static str,
    },
    /// A speed, force, duration or probe size is negative or not finite.
    InvalidValue { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingSensor { sensor, feature } => {
                write!(f, "{} is enabled but the {} sensor is not set", feature, sensor)
            }
            ConfigError::InvalidValue { field, value } => {
                write!(f, "invalid value {} for '{}'", value, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type for tuning file failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for TuningLoadError {}

/// RON options with `IMPLICIT_SOME`, so optional ability blocks can be
/// written without a `Some(...)` wrapper.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load and validate a [`MotionTuning`] from a RON file.
pub fn load_tuning(path: &Path) -> Result<MotionTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}

/// Parse and validate RON tuning text. `file` only labels errors.
pub fn parse_tuning(contents: &str, file: &str) -> Result<MotionTuning, TuningLoadError> {
    let tuning: MotionTuning = ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    tuning.validate().map_err(|e| TuningLoadError {
        file: file.to_string(),
        message: e.to_string(),
    })?;

    Ok(tuning)
}
