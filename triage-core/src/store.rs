//! Task log storage: UTF-8 JSON Lines, one record per line.
//!
//! Load is tolerant: a missing file yields an empty log and a malformed
//! line is skipped with a warning, so partial corruption never takes the
//! rest of the log down. Save rewrites the whole file through a sibling
//! temp file and an atomic rename, so an interrupted save leaves the
//! previous log intact.
//!
//! Constraint: single-process, single-invocation usage. Two concurrent
//! invocations against the same log path race on the whole-file rewrite
//! and one update can be lost. There is no locking here.

use crate::task::TaskRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::warn;

/// Load the task log at `path`, in file order.
///
/// A missing file is reported and treated as an empty log; the caller
/// decides whether "no tasks" is actionable. Blank lines are ignored.
pub fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<TaskRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("task log not found at {}; treating as empty", path.display());
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut tasks = Vec::new();

    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        match serde_json::from_str::<TaskRecord>(raw) {
            Ok(task) => tasks.push(task),
            Err(e) => warn!("skipping malformed record at {}:{}: {e}", path.display(), i + 1),
        }
    }

    Ok(tasks)
}

/// Rewrite the whole log at `path` with `tasks`, preserving order.
///
/// Writes to a temp file in the destination directory and renames it into
/// place, so a crash mid-save cannot truncate the existing log. The temp
/// file is removed on every exit path by its RAII guard.
pub fn save_tasks(tasks: &[TaskRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;

    for task in tasks {
        serde_json::to_writer(&mut tmp, task)
            .with_context(|| format!("serializing task {}", task.id))?;
        tmp.write_all(b"\n")?;
    }
    tmp.flush()?;

    tmp.persist(path)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

/// Look up a task by id.
pub fn find_task(tasks: &[TaskRecord], id: u64) -> Option<&TaskRecord> {
    tasks.iter().find(|t| t.id == id)
}

/// Mutable id lookup, for attaching a predicted priority in place.
pub fn find_task_mut(tasks: &mut [TaskRecord], id: u64) -> Option<&mut TaskRecord> {
    tasks.iter_mut().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const THREE_RECORDS: &str = concat!(
        r#"{"id":1,"Days_Left":2,"Task_Type":"Work","Estimated_Duration":3,"Deadline_Time":"5:00 PM","Task_Importance":4,"Past_Completion_Rate":0.8,"Number_Of_Overdue_Tasks":1}"#,
        "\n",
        r#"{"id":2,"Days_Left":7,"Task_Type":"Personal","Estimated_Duration":1,"Deadline_Time":"9:30 AM","Task_Importance":2,"Past_Completion_Rate":0.5,"Number_Of_Overdue_Tasks":0}"#,
        "\n",
        r#"{"id":3,"Days_Left":0,"Task_Type":"Work","Estimated_Duration":2,"Deadline_Time":"12:00 PM","Task_Importance":5,"Past_Completion_Rate":1.0,"Number_Of_Overdue_Tasks":3}"#,
        "\n",
    );

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = load_tasks(dir.path().join("nope.txt")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn load_then_save_reproduces_the_log_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("tasks.txt");
        fs::write(&log, THREE_RECORDS).unwrap();

        let tasks = load_tasks(&log).unwrap();
        assert_eq!(tasks.len(), 3);

        let out = dir.path().join("out.txt");
        save_tasks(&tasks, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), THREE_RECORDS);
    }

    #[test]
    fn malformed_line_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("tasks.txt");
        let mut content = String::from(THREE_RECORDS);
        content.insert_str(content.find('\n').unwrap() + 1, "{not json}\n");
        fs::write(&log, &content).unwrap();

        let tasks = load_tasks(&log).unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("tasks.txt");
        fs::write(&log, format!("\n{THREE_RECORDS}\n\n")).unwrap();

        let tasks = load_tasks(&log).unwrap();
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn find_task_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("tasks.txt");
        fs::write(&log, THREE_RECORDS).unwrap();
        let tasks = load_tasks(&log).unwrap();

        assert_eq!(find_task(&tasks, 2).unwrap().task_type, "Personal");
        assert!(find_task(&tasks, 99).is_none());
    }

    #[test]
    fn save_overwrites_previous_content_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("tasks.txt");
        fs::write(&log, "stale garbage that should disappear\n").unwrap();

        let tasks = vec![TaskRecord::new(10, "Work")];
        save_tasks(&tasks, &log).unwrap();

        let content = fs::read_to_string(&log).unwrap();
        assert!(content.starts_with("{\"id\":10"));
        assert_eq!(content.lines().count(), 1);

        // No temp residue left behind in the log's directory.
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn save_preserves_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("tasks.txt");

        let tasks = vec![
            TaskRecord::new(3, "Work"),
            TaskRecord::new(1, "Personal"),
            TaskRecord::new(2, "Work"),
        ];
        save_tasks(&tasks, &log).unwrap();

        let back = load_tasks(&log).unwrap();
        assert_eq!(back.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
