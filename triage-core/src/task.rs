//! Task record model for the priority pipeline.
//!
//! The field set is fixed: seven scheduling/urgency attributes plus the
//! predicted `Priority_Level`, which is absent until a prediction runs.
//! Serde renames keep the on-disk keys identical to the training data.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One to-do item as stored in the task log.
///
/// The free-form numeric fields are kept as `serde_json::Number` so that a
/// record loaded from the log and saved back is reproduced verbatim
/// (an input `3` never comes back out as `3.0`). Integer fields are plain
/// `i64`/`u64` and always serialize as portable JSON integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique within the log; assigned externally.
    pub id: u64,

    #[serde(rename = "Days_Left")]
    pub days_left: i64,

    /// Categorical, open vocabulary (e.g. "Work", "Personal").
    #[serde(rename = "Task_Type")]
    pub task_type: String,

    #[serde(rename = "Estimated_Duration")]
    pub estimated_duration: Number,

    /// "H:MM AM/PM", e.g. "5:00 PM".
    #[serde(rename = "Deadline_Time")]
    pub deadline_time: String,

    #[serde(rename = "Task_Importance")]
    pub task_importance: Number,

    /// In [0, 1].
    #[serde(rename = "Past_Completion_Rate")]
    pub past_completion_rate: Number,

    #[serde(rename = "Number_Of_Overdue_Tasks")]
    pub number_of_overdue_tasks: i64,

    /// Set by the predictor; one of the trained label vocabulary.
    #[serde(
        rename = "Priority_Level",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub priority_level: Option<String>,
}

impl TaskRecord {
    pub fn new(id: u64, task_type: impl Into<String>) -> Self {
        Self {
            id,
            days_left: 1,
            task_type: task_type.into(),
            estimated_duration: Number::from(30),
            deadline_time: "5:00 PM".to_string(),
            task_importance: Number::from(3),
            past_completion_rate: Number::from(1),
            number_of_overdue_tasks: 0,
            priority_level: None,
        }
    }

    pub fn with_days_left(mut self, days: i64) -> Self {
        self.days_left = days;
        self
    }

    pub fn with_duration(mut self, duration: i64) -> Self {
        self.estimated_duration = Number::from(duration);
        self
    }

    pub fn with_deadline_time(mut self, raw: impl Into<String>) -> Self {
        self.deadline_time = raw.into();
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.task_importance = Number::from(importance);
        self
    }

    pub fn with_completion_rate(mut self, rate: f64) -> Self {
        if let Some(n) = Number::from_f64(rate) {
            self.past_completion_rate = n;
        }
        self
    }

    pub fn with_overdue(mut self, count: i64) -> Self {
        self.number_of_overdue_tasks = count;
        self
    }
}
