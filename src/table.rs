//! Fixed-width table rendering for the task list.
//!
//! Layout: position (2 digits), date, time, one-character color swatches for
//! priority and due tag, and a 44-character text column. Bodies wider than
//! the text column hard-wrap onto continuation rows that leave the left
//! columns blank.

use crossterm::style::{Color, Stylize};

use crate::fields::{DueTag, Priority};
use crate::task::Task;

/// Width of the task-text column, in characters.
pub const TEXT_WIDTH: usize = 44;

/// Header row; its column widths match `separator()`.
pub const HEADER: &str =
    "| N  |    Date    | Time  | P | D |                   Task                     |";

/// Horizontal rule printed before and after the header and after every task.
pub fn separator() -> String {
    format!(
        "+{}+{}+{}+{}+{}+{}+",
        "-".repeat(4),
        "-".repeat(12),
        "-".repeat(7),
        "-".repeat(3),
        "-".repeat(3),
        "-".repeat(TEXT_WIDTH),
    )
}

/// Color block for a priority: a single space on a colored background.
pub fn priority_swatch(priority: Priority) -> String {
    let color = match priority {
        Priority::Critical => Color::Red,
        Priority::High => Color::Yellow,
        Priority::Normal => Color::Green,
        Priority::Low => Color::Blue,
    };
    " ".on(color).to_string()
}

/// Color block for a due tag.
pub fn due_swatch(tag: DueTag) -> String {
    let color = match tag {
        DueTag::InTime => Color::Green,
        DueTag::Today => Color::Yellow,
        DueTag::Overdue => Color::Red,
    };
    " ".on(color).to_string()
}

/// Split a body on embedded line breaks, then hard-chunk each line into at
/// most `TEXT_WIDTH` characters. Empty interior lines contribute no chunks.
pub fn wrap_text(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(TEXT_WIDTH) {
            chunks.push(chunk.iter().collect());
        }
    }
    if chunks.is_empty() {
        chunks.push(String::new());
    }
    chunks
}

/// Render one task as its table rows: the first row carries every column,
/// continuation rows repeat only the text cell.
pub fn task_rows(task: &Task) -> Vec<String> {
    let chunks = wrap_text(&task.text);
    let mut rows = Vec::with_capacity(chunks.len());
    rows.push(format!(
        "| {:<2} | {} | {} | {} | {} |{:<44}|",
        task.position,
        task.date,
        task.time.format("%H:%M"),
        priority_swatch(task.priority),
        due_swatch(task.due),
        chunks[0],
    ));
    for chunk in &chunks[1..] {
        rows.push(format!("|    |            |       |   |   |{:<44}|", chunk));
    }
    rows
}

/// Render the full bordered table, one separator after every task.
pub fn render_table(tasks: &[Task]) -> String {
    let sep = separator();
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for task in tasks {
        for row in task_rows(task) {
            out.push_str(&row);
            out.push('\n');
        }
        out.push_str(&sep);
        out.push('\n');
    }
    out
}

/// Render the table, or the empty-list message when there is nothing to show.
pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        "No tasks have been input\n".to_string()
    } else {
        render_table(tasks)
    }
}

/// Print the table or the empty-list message.
pub fn print_tasks(tasks: &[Task]) {
    print!("{}", render_tasks(tasks));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn sample(position: usize, text: &str) -> Task {
        let mut task = Task::new(
            position,
            text.to_string(),
            Priority::Normal,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        );
        task.due = DueTag::InTime;
        task
    }

    #[test]
    fn header_and_separator_have_equal_width() {
        assert_eq!(HEADER.chars().count(), separator().chars().count());
    }

    #[test]
    fn wrap_splits_long_line_into_width_chunks() {
        let body = "x".repeat(100);
        let chunks = wrap_text(&body);
        let lengths: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
        assert_eq!(lengths, vec![44, 44, 12]);
    }

    #[test]
    fn wrap_splits_on_embedded_newlines_first() {
        let chunks = wrap_text("short\nanother line");
        assert_eq!(chunks, vec!["short".to_string(), "another line".to_string()]);
    }

    #[test]
    fn wrap_drops_empty_interior_lines() {
        let chunks = wrap_text("a\n\nb");
        assert_eq!(chunks, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        let body = "ä".repeat(50);
        let chunks = wrap_text(&body);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 44);
        assert_eq!(chunks[1].chars().count(), 6);
    }

    #[test]
    fn hundred_character_body_renders_three_rows() {
        let task = sample(1, &"x".repeat(100));
        assert_eq!(task_rows(&task).len(), 3);
    }

    #[test]
    fn continuation_rows_leave_left_columns_blank() {
        let task = sample(1, &"x".repeat(50));
        let rows = task_rows(&task);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("| 1  | 2024-06-15 | 12:00 |"));
        assert!(rows[1].starts_with("|    |            |       |   |   |"));
    }

    #[test]
    fn text_cell_is_padded_to_full_width() {
        let task = sample(1, "short");
        let rows = task_rows(&task);
        let cells: Vec<&str> = rows[0].split('|').collect();
        // Last non-empty cell is the text column.
        let text_cell = cells[cells.len() - 2];
        assert_eq!(text_cell.chars().count(), TEXT_WIDTH);
        assert!(text_cell.starts_with("short"));
    }

    #[test]
    fn two_digit_positions_consume_the_padding() {
        let task = sample(10, "short");
        let rows = task_rows(&task);
        assert!(rows[0].starts_with("| 10 |"));
    }

    #[test]
    fn swatches_carry_ansi_background_codes() {
        assert_eq!(priority_swatch(Priority::Critical), " ".on(Color::Red).to_string());
        assert_eq!(priority_swatch(Priority::Low), " ".on(Color::Blue).to_string());
        assert_eq!(due_swatch(DueTag::Today), " ".on(Color::Yellow).to_string());
        assert!(priority_swatch(Priority::Normal).contains('\u{1b}'));
    }

    #[test]
    fn empty_list_renders_message_and_no_table() {
        let rendered = render_tasks(&[]);
        assert_eq!(rendered, "No tasks have been input\n");
        assert!(!rendered.contains('+'));
    }

    #[test]
    fn table_prints_separator_after_every_task() {
        let tasks = vec![sample(1, "one"), sample(2, "two")];
        let rendered = render_table(&tasks);
        let sep = separator();
        assert_eq!(rendered.matches(&sep).count(), 4);
        assert!(rendered.contains(HEADER));
    }
}
