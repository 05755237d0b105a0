//! triage-core: task records, the JSON Lines task log, and deadline features.

pub mod store;
pub mod task;
pub mod time;

pub use store::{find_task, find_task_mut, load_tasks, save_tasks};
pub use task::TaskRecord;
pub use time::deadline_minutes;
