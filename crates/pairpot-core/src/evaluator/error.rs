use crate::core::forcefield::params::ParameterError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluatorError {
    #[error("Invalid parameter: {source}")]
    InvalidParameter {
        #[from]
        source: ParameterError,
    },

    #[error("Particles {first} and {second} have zero separation")]
    DegenerateGeometry { first: usize, second: usize },

    #[error("Unsupported property `{0}`; implemented properties are `energy` and `forces`")]
    UnsupportedProperty(String),
}
