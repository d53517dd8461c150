use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const DEFAULT_EPSILON: f64 = 0.01;
const DEFAULT_SIGMA: f64 = 3.4;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Parameter `{name}` must be strictly positive, got {value}")]
pub struct ParameterError {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Lennard-Jones 12-6 parameter pair.
///
/// `epsilon` is the well depth (energy units), `sigma` the separation at
/// which the pair energy crosses zero (length units). Both must be strictly
/// positive; [`LjParams::validate`] rejects anything else before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LjParams {
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_sigma")]
    pub sigma: f64,
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

fn default_sigma() -> f64 {
    DEFAULT_SIGMA
}

impl Default for LjParams {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl LjParams {
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        Self { epsilon, sigma }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.epsilon > 0.0) {
            return Err(ParameterError {
                name: "epsilon",
                value: self.epsilon,
            });
        }
        if !(self.sigma > 0.0) {
            return Err(ParameterError {
                name: "sigma",
                value: self.sigma,
            });
        }
        Ok(())
    }

    /// Loads parameters from a TOML file. Keys absent from the file fall
    /// back to the documented defaults (epsilon = 0.01, sigma = 3.4).
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_parameters_match_documented_values() {
        let params = LjParams::default();
        assert_eq!(params.epsilon, 0.01);
        assert_eq!(params.sigma, 3.4);
    }

    #[test]
    fn validate_accepts_positive_parameters() {
        assert!(LjParams::new(1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_epsilon() {
        let err = LjParams::new(0.0, 3.4).validate().unwrap_err();
        assert_eq!(err.name, "epsilon");
        assert_eq!(err.value, 0.0);
    }

    #[test]
    fn validate_rejects_negative_sigma() {
        let err = LjParams::new(0.01, -1.0).validate().unwrap_err();
        assert_eq!(err.name, "sigma");
        assert_eq!(err.value, -1.0);
    }

    #[test]
    fn validate_rejects_nan_epsilon() {
        let err = LjParams::new(f64::NAN, 3.4).validate().unwrap_err();
        assert_eq!(err.name, "epsilon");
    }

    #[test]
    fn load_succeeds_with_full_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");
        fs::write(&path, "epsilon = 0.5\nsigma = 2.0\n").unwrap();

        let params = LjParams::load(&path).unwrap();
        assert_eq!(params, LjParams::new(0.5, 2.0));
    }

    #[test]
    fn load_applies_defaults_for_missing_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");
        fs::write(&path, "epsilon = 0.5\n").unwrap();

        let params = LjParams::load(&path).unwrap();
        assert_eq!(params.epsilon, 0.5);
        assert_eq!(params.sigma, 3.4);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("non_existent.toml");
        assert!(matches!(
            LjParams::load(&path),
            Err(ParamLoadError::Io { .. })
        ));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("malformed.toml");
        fs::write(&path, "this is not toml").unwrap();
        assert!(matches!(
            LjParams::load(&path),
            Err(ParamLoadError::Toml { .. })
        ));
    }
}
