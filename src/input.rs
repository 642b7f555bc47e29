//! Interactive input validation for the session prompts.
//!
//! Each `parse_*` function is pure: string in, `Option` out, checked by a
//! `read_*` loop that re-prompts with a specific message until the input
//! parses. The loops read from any `BufRead` so command flows can be driven
//! from scripted buffers in tests.

use std::io::{self, BufRead};

use chrono::{NaiveDate, NaiveTime};

use crate::fields::{Action, Field, Priority};

/// Parse a single-letter priority, case-insensitive.
pub fn parse_priority(s: &str) -> Option<Priority> {
    match s.trim().to_uppercase().as_str() {
        "C" => Some(Priority::Critical),
        "H" => Some(Priority::High),
        "N" => Some(Priority::Normal),
        "L" => Some(Priority::Low),
        _ => None,
    }
}

/// Parse `yyyy-mm-dd`: exactly three numeric segments forming a valid
/// calendar date. Unpadded segments are accepted.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year = parts[0].parse().ok()?;
    let month = parts[1].parse().ok()?;
    let day = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse `hh:mm`: exactly two numeric segments forming a valid time of day.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse().ok()?;
    let minute = parts[1].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse an editable-field name.
pub fn parse_field(s: &str) -> Option<Field> {
    match s.trim().to_lowercase().as_str() {
        "priority" => Some(Field::Priority),
        "date" => Some(Field::Date),
        "time" => Some(Field::Time),
        "task" => Some(Field::Task),
        _ => None,
    }
}

/// Parse a menu action name.
pub fn parse_action(s: &str) -> Option<Action> {
    match s.trim().to_lowercase().as_str() {
        "add" => Some(Action::Add),
        "print" => Some(Action::Print),
        "edit" => Some(Action::Edit),
        "delete" => Some(Action::Delete),
        "end" => Some(Action::End),
        _ => None,
    }
}

/// Read one line, trimmed. EOF is an error: every prompt requires an answer.
fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt for a menu action until one parses.
pub fn read_action(input: &mut impl BufRead) -> io::Result<Action> {
    loop {
        println!("Input an action (add, print, edit, delete, end):");
        match parse_action(&read_line(input)?) {
            Some(action) => return Ok(action),
            None => println!("The input action is invalid"),
        }
    }
}

/// Prompt for a priority until one parses.
pub fn read_priority(input: &mut impl BufRead) -> io::Result<Priority> {
    loop {
        println!("Input the task priority (C, H, N, L):");
        match parse_priority(&read_line(input)?) {
            Some(priority) => return Ok(priority),
            None => println!("The input priority is invalid"),
        }
    }
}

/// Prompt for a due date until one parses.
pub fn read_date(input: &mut impl BufRead) -> io::Result<NaiveDate> {
    loop {
        println!("Input the date (yyyy-mm-dd):");
        match parse_date(&read_line(input)?) {
            Some(date) => return Ok(date),
            None => println!("The input date is invalid"),
        }
    }
}

/// Prompt for a due time until one parses.
pub fn read_time(input: &mut impl BufRead) -> io::Result<NaiveTime> {
    loop {
        println!("Input the time (hh:mm):");
        match parse_time(&read_line(input)?) {
            Some(time) => return Ok(time),
            None => println!("The input time is invalid"),
        }
    }
}

/// Prompt for an editable-field name until one parses.
pub fn read_field(input: &mut impl BufRead) -> io::Result<Field> {
    loop {
        println!("Input a field to edit (priority, date, time, task):");
        match parse_field(&read_line(input)?) {
            Some(field) => return Ok(field),
            None => println!("Invalid field"),
        }
    }
}

/// Prompt for a 1-based task number within `1..=len`.
pub fn read_task_number(input: &mut impl BufRead, len: usize) -> io::Result<usize> {
    loop {
        println!("Input the task number (1-{len}):");
        match read_line(input)?.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(n),
            _ => println!("Invalid task number"),
        }
    }
}

/// Read a multi-line task body. Lines are trimmed; a blank line terminates;
/// surviving lines join with `\n`. An empty result means the caller must
/// reject the operation as a blank task.
pub fn read_text(input: &mut impl BufRead) -> io::Result<String> {
    println!("Input a new task (enter a blank line to end):");
    let mut lines = Vec::new();
    loop {
        let line = read_line(input)?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
