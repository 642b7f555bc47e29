use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Menu-driven, file-backed task list.
/// Storage defaults to ./tasklist.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "tasklist", version, about = "Terminal task list with due-date tracking")]
pub struct Cli {
    /// Path to the JSON task-list file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
