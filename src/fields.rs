//! Enumerations and field types for the task list.
//!
//! This module defines the structured data types used to classify tasks and
//! drive the interactive session: priority levels, derived due tags, editable
//! field names, and session actions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Priority classification, entered as a single letter (C, H, N, L).
///
/// Persisted as that letter to keep the on-disk form identical to what the
/// user types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    #[serde(rename = "C")]
    Critical,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "L")]
    Low,
}

/// Urgency of a task's due date relative to the reference date.
///
/// Derived, never persisted. `InTime` is the serde fallback required by
/// `#[serde(skip)]` on the task field; loading always overwrites it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueTag {
    Overdue,
    Today,
    #[default]
    InTime,
}

impl DueTag {
    /// Classify `date` against `today`: strictly before is `Overdue`, equal
    /// is `Today`, strictly after is `InTime`.
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        let days = (date - today).num_days();
        if days < 0 {
            DueTag::Overdue
        } else if days == 0 {
            DueTag::Today
        } else {
            DueTag::InTime
        }
    }
}

/// Task fields that the edit command can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Priority,
    Date,
    Time,
    Task,
}

/// Top-level session actions read by the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}
