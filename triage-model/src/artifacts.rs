//! Binary artifact I/O.
//!
//! Both artifacts are opaque bincode blobs: `priority_model.bin` holds the
//! fitted forest and `label_encoders.bin` the label↔code table. The write
//! half exists for the training collaborator and for test fixtures; this
//! pipeline never mutates an artifact it loaded.

use crate::encoders::EncoderTable;
use crate::error::ModelError;
use crate::forest::Classifier;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn load_classifier(path: impl AsRef<Path>) -> Result<Classifier, ModelError> {
    read_artifact(path.as_ref())
}

pub fn load_encoder_table(path: impl AsRef<Path>) -> Result<EncoderTable, ModelError> {
    read_artifact(path.as_ref())
}

pub fn write_classifier(classifier: &Classifier, path: impl AsRef<Path>) -> Result<(), ModelError> {
    write_artifact(classifier, path.as_ref())
}

pub fn write_encoder_table(table: &EncoderTable, path: impl AsRef<Path>) -> Result<(), ModelError> {
    write_artifact(table, path.as_ref())
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let file = File::open(path).map_err(|e| ModelError::ArtifactLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    bincode::deserialize_from(BufReader::new(file)).map_err(|e| ModelError::ArtifactLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_artifact<T: Serialize>(value: &T, path: &Path) -> Result<(), ModelError> {
    let file = File::create(path).map_err(|e| ModelError::ArtifactWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    bincode::serialize_into(BufWriter::new(file), value).map_err(|e| ModelError::ArtifactWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
