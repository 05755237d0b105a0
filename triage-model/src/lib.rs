//! triage-model: trained-artifact handling and priority inference.
//!
//! The two artifacts (classifier forest + label-encoder table) come from an
//! external training run and are read-only here. Everything in this crate
//! is a pure transform parameterized by those artifacts; there is no
//! module-level model state.

pub mod artifacts;
pub mod encoders;
pub mod error;
pub mod features;
pub mod forest;
pub mod predictor;

pub use artifacts::{load_classifier, load_encoder_table, write_classifier, write_encoder_table};
pub use encoders::{EncoderTable, LabelCodec, PRIORITY_LEVEL, TASK_TYPE};
pub use error::ModelError;
pub use features::{encode_features, FeatureRow, FEATURE_COLUMNS, FEATURE_COUNT};
pub use forest::{Classifier, DecisionTree, Node};
pub use predictor::PriorityPredictor;
