use thiserror::Error;

use crate::support::dictionary::DictionaryError;

/// Errors that may occur when reading turbulent-Prandtl model settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoefficientError {
    /// A dictionary entry is missing or has the wrong type.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// The properties select a different model than the one being read.
    #[error("properties select {found:?}, not {expected:?}")]
    ModelMismatch {
        expected: &'static str,
        found: String,
    },

    /// A coefficient must be a finite, strictly positive number.
    #[error("coefficient {name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// Errors that may occur when selecting a model from a [`ModelRegistry`].
///
/// [`ModelRegistry`]: super::ModelRegistry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// The selecting keyword is missing or not a word.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// No variant is registered under the requested name.
    #[error("unknown turbulentPrandtlModel {name:?}, valid models are {available:?}")]
    UnknownModel {
        name: String,
        available: Vec<String>,
    },

    /// A variant with this name is already registered.
    #[error("turbulentPrandtlModel {name:?} is already registered")]
    DuplicateModel { name: String },

    /// The selected variant rejected its settings.
    #[error("invalid settings for {name:?}")]
    Settings {
        name: String,
        #[source]
        source: CoefficientError,
    },
}
