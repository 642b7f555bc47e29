//! Task record and due-tag derivation.
//!
//! A task carries a 1-based position within the list, a free-text body that
//! may span multiple lines, a priority, and a due date and time. The due tag
//! is derived from the date and is deliberately not part of the persisted
//! form.

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{DueTag, Priority};

/// A single entry in the task list.
///
/// The due tag is computed when the task is created, when the list is loaded,
/// and when the date field is edited. It is not refreshed on print, so a
/// session running past midnight shows the tags as of its last derivation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub position: usize,
    pub text: String,
    pub priority: Priority,
    pub date: NaiveDate,
    #[serde(with = "time_hhmm")]
    pub time: NaiveTime,
    #[serde(skip)]
    pub due: DueTag,
}

impl Task {
    /// Create a task at `position`, deriving the due tag from `date` against
    /// the current UTC date.
    pub fn new(
        position: usize,
        text: String,
        priority: Priority,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Task {
            position,
            text,
            priority,
            date,
            time,
            due: DueTag::classify(date, today_utc()),
        }
    }

    /// Replace the date and re-derive the due tag.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.due = DueTag::classify(date, today_utc());
    }

    /// Re-derive the due tag against `today`. Used after deserialization,
    /// where the serde default stands in for the skipped field.
    pub fn refresh_due(&mut self, today: NaiveDate) {
        self.due = DueTag::classify(self.date, today);
    }

    /// Shift the task one position up. Called for every task that follows a
    /// deleted one.
    pub fn decrement_position(&mut self) {
        self.position -= 1;
    }
}

/// The reference date for due-tag derivation: the current date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Persist `NaiveTime` as `hh:mm`. Chrono's default form carries seconds,
/// which the file format does not.
mod time_hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(position: usize, date: NaiveDate) -> Task {
        Task::new(
            position,
            "water the plants".to_string(),
            Priority::Normal,
            date,
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn new_task_derives_due_tag() {
        let today = today_utc();
        assert_eq!(sample(1, today - Duration::days(2)).due, DueTag::Overdue);
        assert_eq!(sample(1, today).due, DueTag::Today);
        assert_eq!(sample(1, today + Duration::days(2)).due, DueTag::InTime);
    }

    #[test]
    fn set_date_recomputes_due_tag() {
        let today = today_utc();
        let mut task = sample(1, today + Duration::days(5));
        assert_eq!(task.due, DueTag::InTime);
        task.set_date(today - Duration::days(1));
        assert_eq!(task.due, DueTag::Overdue);
    }

    #[test]
    fn decrement_position_shifts_up() {
        let mut task = sample(3, today_utc());
        task.decrement_position();
        assert_eq!(task.position, 2);
    }

    #[test]
    fn time_persists_without_seconds() {
        let task = sample(1, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"09:30\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time, task.time);
    }
}
