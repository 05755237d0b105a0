//! Typed failures for artifact handling and inference.
//!
//! Vocabulary and artifact problems are fatal for the operation that hit
//! them; nothing in this crate substitutes a fallback value.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Classifier or encoder table could not be deserialized. Fatal at
    /// startup; no prediction is attempted.
    #[error("loading artifact {path}: {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },

    #[error("writing artifact {path}: {reason}")]
    ArtifactWrite { path: PathBuf, reason: String },

    /// A categorical value that was never seen at training time. Guessing
    /// a code here would silently misalign with the fitted model.
    #[error("column {column:?} has no trained code for label {label:?}")]
    UnknownLabel { column: &'static str, label: String },

    /// A class id outside the trained vocabulary. Only happens when the
    /// classifier and encoder table come from different training runs.
    #[error("column {column:?} has no label for class id {code}")]
    UnknownClass { column: &'static str, code: usize },

    #[error("column {column:?} is missing from the encoder table")]
    MissingColumn { column: &'static str },

    #[error("feature {column:?}: {reason}")]
    BadFeature { column: &'static str, reason: String },

    /// The forest references nodes, features, or classes that don't exist.
    #[error("classifier artifact is internally inconsistent: {0}")]
    MalformedClassifier(String),
}
