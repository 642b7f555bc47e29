//! Command implementations for the interactive session.
//!
//! The four task operations read their arguments through the prompt loops in
//! `input` and mutate the `TaskList` they borrow; nothing here touches global
//! state. `run_session` is the menu loop that dispatches them until `end`.

use std::io::{self, BufRead};

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::db::TaskList;
use crate::fields::{Action, Field};
use crate::input::{
    read_action, read_date, read_field, read_priority, read_task_number, read_text, read_time,
};
use crate::table::print_tasks;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Write a completion script for the given shell to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

/// Prompt for every field of a new task and append it. A blank body rejects
/// the whole operation; nothing is mutated until the body has been read.
pub fn cmd_add(list: &mut TaskList, input: &mut impl BufRead) -> io::Result<()> {
    let priority = read_priority(input)?;
    let date = read_date(input)?;
    let time = read_time(input)?;
    let text = read_text(input)?;
    if text.is_empty() {
        println!("The task is blank");
        return Ok(());
    }
    list.push(text, priority, date, time);
    Ok(())
}

/// Print the task table, or the empty-list message.
pub fn cmd_print(list: &TaskList) {
    print_tasks(&list.tasks);
}

/// Remove a task chosen by number and renumber the tasks after it.
pub fn cmd_delete(list: &mut TaskList, input: &mut impl BufRead) -> io::Result<()> {
    if list.is_empty() {
        println!("No tasks have been input");
        return Ok(());
    }
    print_tasks(&list.tasks);
    let number = read_task_number(input, list.len())?;
    list.remove(number);
    println!("The task is deleted");
    Ok(())
}

/// Edit a single field of a task chosen by number.
pub fn cmd_edit(list: &mut TaskList, input: &mut impl BufRead) -> io::Result<()> {
    if list.is_empty() {
        println!("No tasks have been input");
        return Ok(());
    }
    print_tasks(&list.tasks);
    let number = read_task_number(input, list.len())?;
    let field = read_field(input)?;
    match field {
        Field::Priority => {
            let priority = read_priority(input)?;
            if let Some(task) = list.get_mut(number) {
                task.priority = priority;
            }
        }
        Field::Date => {
            let date = read_date(input)?;
            if let Some(task) = list.get_mut(number) {
                task.set_date(date);
            }
        }
        Field::Time => {
            let time = read_time(input)?;
            if let Some(task) = list.get_mut(number) {
                task.time = time;
            }
        }
        Field::Task => {
            let text = read_text(input)?;
            if text.is_empty() {
                println!("The task is blank");
                return Ok(());
            }
            if let Some(task) = list.get_mut(number) {
                task.text = text;
            }
        }
    }
    println!("The task is changed");
    Ok(())
}

/// The menu loop: dispatch actions until `end`.
pub fn run_session(list: &mut TaskList, input: &mut impl BufRead) -> io::Result<()> {
    loop {
        match read_action(input)? {
            Action::Add => cmd_add(list, input)?,
            Action::Print => cmd_print(list),
            Action::Edit => cmd_edit(list, input)?,
            Action::Delete => cmd_delete(list, input)?,
            Action::End => return Ok(()),
        }
    }
}
