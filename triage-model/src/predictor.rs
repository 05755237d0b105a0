//! The priority predictor: classifier + encoder table, loaded once and
//! passed around as an explicit immutable value.

use crate::artifacts;
use crate::encoders::{EncoderTable, PRIORITY_LEVEL};
use crate::error::ModelError;
use crate::features::{encode_features, FeatureRow};
use crate::forest::Classifier;
use std::path::Path;
use triage_core::task::TaskRecord;

/// Owns both trained artifacts for the lifetime of the process.
///
/// Constructed explicitly (no module-level singletons), so tests can hand
/// it mock artifacts via [`PriorityPredictor::from_parts`]. Stateless per
/// call: identical inputs against identical artifacts always produce the
/// same prediction.
#[derive(Debug, Clone)]
pub struct PriorityPredictor {
    classifier: Classifier,
    encoders: EncoderTable,
}

impl PriorityPredictor {
    /// Deserialize both artifacts. Any failure here is fatal for the run;
    /// no prediction is attempted against a half-loaded model.
    pub fn load(
        model_path: impl AsRef<Path>,
        encoders_path: impl AsRef<Path>,
    ) -> Result<Self, ModelError> {
        let classifier = artifacts::load_classifier(model_path)?;
        let encoders = artifacts::load_encoder_table(encoders_path)?;
        Ok(Self::from_parts(classifier, encoders))
    }

    pub fn from_parts(classifier: Classifier, encoders: EncoderTable) -> Self {
        Self { classifier, encoders }
    }

    pub fn encoders(&self) -> &EncoderTable {
        &self.encoders
    }

    /// Classify an encoded row.
    pub fn predict(&self, row: &FeatureRow) -> Result<usize, ModelError> {
        self.classifier.predict(row)
    }

    /// Map a class id back to its human-readable priority label.
    ///
    /// An out-of-range id means the classifier and the table come from
    /// different training runs; that is a configuration error, not
    /// something to paper over.
    pub fn decode(&self, class_id: usize) -> Result<&str, ModelError> {
        self.encoders.inverse(PRIORITY_LEVEL, class_id)
    }

    /// Full encode → predict → decode for one record.
    pub fn predict_for(&self, task: &TaskRecord) -> Result<String, ModelError> {
        let row = encode_features(task, &self.encoders)?;
        let class_id = self.predict(&row)?;
        Ok(self.decode(class_id)?.to_string())
    }
}
