//! Feature encoding: one task record → the fixed-order numeric row the
//! classifier was fitted on.

use crate::encoders::{EncoderTable, TASK_TYPE};
use crate::error::ModelError;
use serde_json::Number;
use triage_core::task::TaskRecord;
use triage_core::time::deadline_minutes;

/// Canonical column order into the classifier. Training and inference
/// must agree on this exactly.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "Days_Left",
    "Task_Type",
    "Estimated_Duration",
    "Deadline_Time",
    "Task_Importance",
    "Past_Completion_Rate",
    "Number_Of_Overdue_Tasks",
];

pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

/// One encoded record, in `FEATURE_COLUMNS` order.
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Encode one record for classification.
///
/// `Task_Type` resolves through the persisted training-time table (an
/// unseen label aborts the prediction), `Deadline_Time` reduces to minutes
/// since midnight, and the remaining fields cast to `f64` as-is.
pub fn encode_features(
    task: &TaskRecord,
    encoders: &EncoderTable,
) -> Result<FeatureRow, ModelError> {
    let task_type = encoders.forward(TASK_TYPE, &task.task_type)? as f64;

    let deadline = deadline_minutes(&task.deadline_time).map_err(|e| ModelError::BadFeature {
        column: "Deadline_Time",
        reason: e.to_string(),
    })?;

    Ok([
        task.days_left as f64,
        task_type,
        numeric("Estimated_Duration", &task.estimated_duration)?,
        f64::from(deadline),
        numeric("Task_Importance", &task.task_importance)?,
        numeric("Past_Completion_Rate", &task.past_completion_rate)?,
        task.number_of_overdue_tasks as f64,
    ])
}

fn numeric(column: &'static str, n: &Number) -> Result<f64, ModelError> {
    n.as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ModelError::BadFeature {
            column,
            reason: format!("{n} is not a finite number"),
        })
}
