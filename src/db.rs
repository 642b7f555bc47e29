//! Task-list storage and JSON persistence.
//!
//! The list is held in memory as an ordered `Vec` and written back to a
//! single JSON file on exit. The persisted form is a bare array of task
//! objects, so the wrapper struct is transparent to serde.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::fields::Priority;
use crate::task::{today_utc, Task};

/// The in-memory task list.
///
/// Positions are an invariant of the list, not of the file: every task's
/// `position` equals its 1-based index, re-established on load and on every
/// removal.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Load the list from a JSON file. A missing file yields an empty list;
    /// an unreadable or malformed file is an error, since the session cannot
    /// proceed without a valid list.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(TaskList::default());
        }
        let mut buf = String::new();
        File::open(path)?.read_to_string(&mut buf)?;
        let mut list: TaskList = serde_json::from_str(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let today = today_utc();
        for (i, task) in list.tasks.iter_mut().enumerate() {
            task.position = i + 1;
            task.refresh_due(today);
        }
        Ok(list)
    }

    /// Save the list to a JSON file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        // Atomic-ish write via temp + rename.
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Append a new task at the end of the list, at position `len + 1`.
    pub fn push(&mut self, text: String, priority: Priority, date: NaiveDate, time: NaiveTime) {
        let position = self.tasks.len() + 1;
        self.tasks.push(Task::new(position, text, priority, date, time));
    }

    /// Remove the task at the given 1-based position and renumber everything
    /// after it. The caller has already validated the range.
    pub fn remove(&mut self, position: usize) {
        self.tasks.remove(position - 1);
        for task in self.tasks.iter_mut().skip(position - 1) {
            task.decrement_position();
        }
    }

    /// Get a mutable reference to the task at the given 1-based position.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Task> {
        self.tasks.get_mut(position - 1)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
