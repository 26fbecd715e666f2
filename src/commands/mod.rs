//! Command-line interface.
//!
//! Every subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. Commands that change tasks load the task file through
//! [`Workspace::open`] and write it back with [`Workspace::save`].

pub mod add;
pub mod export;
pub mod init;
pub mod list;
pub mod progress;
pub mod remove;
pub mod report;
pub mod show;
pub mod update;

use crate::libs::config::Config;
use crate::libs::formatter::parse_date;
use crate::libs::index::TaskIndex;
use crate::libs::task_file;
use crate::msg_debug;
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a study task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks")]
    List(list::ListArgs),
    #[command(about = "Show the details of a task", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Edit a task, record used time or mark it completed", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Remove a task", arg_required_else_help = true)]
    Remove(remove::RemoveArgs),
    #[command(about = "Show progress of open tasks")]
    Progress,
    #[command(about = "Prepare a periodic report")]
    Report(report::ReportArgs),
    #[command(about = "Export tasks or a report to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Remove(args) => remove::cmd(args),
            Commands::Progress => progress::cmd(),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Configuration plus the task index loaded from the configured file.
pub struct Workspace {
    pub config: Config,
    pub path: PathBuf,
    pub index: TaskIndex,
}

impl Workspace {
    pub fn open() -> Result<Self> {
        let config = Config::read()?;
        let path = config.tasks_path()?;
        let index = task_file::load(&path)?;
        msg_debug!(format!("{} task(s) loaded from {}", index.len(), path.display()));

        Ok(Workspace { config, path, index })
    }

    pub fn save(&self) -> Result<()> {
        task_file::save(&self.path, &self.index)?;
        Ok(())
    }

    /// Parses a command-line date with the configured format.
    pub fn parse_date(&self, input: &str) -> Result<DateTime<Utc>> {
        Ok(parse_date(input, &self.config.date_format)?)
    }
}
