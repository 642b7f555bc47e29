//! # Tasklist - menu-driven terminal task manager
//!
//! A small interactive task list for the terminal: tasks carry a priority,
//! a due date and time, and a free-text body, and are shown in a bordered
//! table with color-coded priority and urgency swatches. State persists to
//! a single JSON file between runs.
//!
//! ## Key Features
//!
//! - **Menu loop**: `add`, `print`, `edit`, `delete`, `end`, with every
//!   invalid input re-prompted rather than aborting the command
//! - **Derived urgency**: each task shows Overdue / Today / In-time,
//!   computed from its due date against the current UTC date
//! - **Wrapped table output**: bodies hard-wrap at 44 characters across
//!   continuation rows, with ANSI color swatches for priority and urgency
//! - **Local File Storage**: a single JSON array, written on exit
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the interactive session against ./tasklist.json
//! tasklist
//!
//! # Keep the list somewhere else
//! tasklist --db ~/notes/tasklist.json
//!
//! # Shell completions
//! tasklist completions bash
//! ```
//!
//! A session asks for one action at a time:
//!
//! ```text
//! Input an action (add, print, edit, delete, end):
//! ```
//!
//! `end` saves the list and exits; everything else leaves the file untouched.

use std::io;
use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod fields;
pub mod input;
pub mod table;
pub mod task;

use cli::Cli;
use cmd::{cmd_completions, run_session, Commands};
use db::TaskList;

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        cmd_completions(shell);
        return;
    }

    let db_path = cli.db.unwrap_or_else(|| PathBuf::from("tasklist.json"));

    let mut list = match TaskList::load(&db_path) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Failed to load task list {}: {}", db_path.display(), e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    if let Err(e) = run_session(&mut list, &mut input) {
        eprintln!("Session error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = list.save(&db_path) {
        eprintln!("Failed to save task list {}: {}", db_path.display(), e);
        std::process::exit(1);
    }
    println!("Tasklist exiting!");
}
