//! Bidirectional label↔code table fixed at training time.
//!
//! Codes are never re-derived from the records at hand: a locally
//! recomputed mapping (say, an alphabetical index over the categories in
//! the current log) drifts silently whenever the observed set differs from
//! the training vocabulary. Every translation goes through this table and
//! unknowns fail fast.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The two categorical columns the pipeline translates.
pub const TASK_TYPE: &str = "Task_Type";
pub const PRIORITY_LEVEL: &str = "Priority_Level";

/// One column's code space: `classes[code] == label`.
///
/// Matches a fitted label encoder's sorted class list, so code assignment
/// is exactly what the classifier saw during training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCodec {
    classes: Vec<String>,
}

impl LabelCodec {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn forward(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    pub fn inverse(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Immutable column-name → codec mapping, one of the two trained artifacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncoderTable {
    columns: BTreeMap<String, LabelCodec>,
}

impl EncoderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by the training collaborator and by tests.
    pub fn with_column(mut self, name: impl Into<String>, classes: Vec<&str>) -> Self {
        let classes = classes.into_iter().map(str::to_string).collect();
        self.columns.insert(name.into(), LabelCodec::new(classes));
        self
    }

    pub fn codec(&self, column: &'static str) -> Result<&LabelCodec, ModelError> {
        self.columns
            .get(column)
            .ok_or(ModelError::MissingColumn { column })
    }

    /// Translate a raw label to its trained code.
    pub fn forward(&self, column: &'static str, label: &str) -> Result<usize, ModelError> {
        self.codec(column)?
            .forward(label)
            .ok_or_else(|| ModelError::UnknownLabel {
                column,
                label: label.to_string(),
            })
    }

    /// Translate a class id back to its trained label.
    pub fn inverse(&self, column: &'static str, code: usize) -> Result<&str, ModelError> {
        self.codec(column)?
            .inverse(code)
            .ok_or(ModelError::UnknownClass { column, code })
    }
}
