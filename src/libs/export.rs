//! CSV and JSON export of tasks and reports.
//!
//! Exported values are pre-formatted strings (dates in the configured
//! format, durations as `HH:MM`), so the files read the same as the console
//! tables. Without an explicit output path a timestamped file name is
//! generated in the current directory.

use super::formatter::{format_date, format_minutes};
use super::index::TaskIndex;
use super::report::{Report, TaskStatus};
use super::task::Task;
use super::worklist::Worklist;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// What to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Every stored task in id order
    Tasks,
    /// The categorized report for a period
    Report,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTask {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub course: String,
    pub priority: String,
    pub status: String,
    pub inserted_at: String,
    pub expires_at: String,
    pub completed_at: String,
    pub total: String,
    pub used: String,
    pub completion: u64,
}

impl ExportTask {
    pub fn new(task: &Task, now: DateTime<Utc>, date_format: &str) -> Self {
        ExportTask {
            id: task.id,
            name: task.name.clone().unwrap_or_default(),
            description: task.description.clone().unwrap_or_default(),
            course: task.course.clone().unwrap_or_default(),
            priority: task.priority.to_string(),
            status: TaskStatus::of(task, now).to_string(),
            inserted_at: format_date(task.inserted_at, date_format),
            expires_at: format_date(task.expires_at, date_format),
            completed_at: format_date(task.completed_at, date_format),
            total: format_minutes(task.total_minutes),
            used: format_minutes(task.used_minutes),
            completion: task.completion_percentage(),
        }
    }

    const HEADERS: [&'static str; 12] = [
        "ID",
        "Name",
        "Description",
        "Course",
        "Priority",
        "Status",
        "Inserted",
        "Expires",
        "Completed",
        "Total",
        "Used",
        "Completion",
    ];

    fn record(&self) -> [String; 12] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.course.clone(),
            self.priority.clone(),
            self.status.clone(),
            self.inserted_at.clone(),
            self.expires_at.clone(),
            self.completed_at.clone(),
            self.total.clone(),
            self.used.clone(),
            format!("{}%", self.completion),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReport {
    pub period_start: String,
    pub generated_at: String,
    pub completed: Vec<ExportTask>,
    pub yet_to_begin: Vec<ExportTask>,
    pub ongoing: Vec<ExportTask>,
    pub expired: Vec<ExportTask>,
}

impl ExportReport {
    pub fn new(report: &Report<'_>, date_format: &str) -> Self {
        let section = |list: &Worklist<&Task>| -> Vec<ExportTask> {
            list.iter().map(|task| ExportTask::new(task, report.now, date_format)).collect()
        };

        ExportReport {
            period_start: format_date(Some(report.period_start), date_format),
            generated_at: format_date(Some(report.now), date_format),
            completed: section(&report.completed),
            yet_to_begin: section(&report.yet_to_begin),
            ongoing: section(&report.ongoing),
            expired: section(&report.expired),
        }
    }

    fn sections(&self) -> [(&'static str, &[ExportTask]); 4] {
        [
            ("COMPLETED", self.completed.as_slice()),
            ("YET TO BEGIN", self.yet_to_begin.as_slice()),
            ("ONGOING", self.ongoing.as_slice()),
            ("EXPIRED", self.expired.as_slice()),
        ]
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
    date_format: String,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, date_format: &str) -> Self {
        let default_name = format!("coursework_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self {
            format,
            output_path,
            date_format: date_format.to_string(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_tasks(&self, index: &TaskIndex, now: DateTime<Utc>) -> Result<()> {
        let tasks: Vec<ExportTask> = index.iter().map(|task| ExportTask::new(task, now, &self.date_format)).collect();

        match self.format {
            ExportFormat::Csv => self.export_tasks_csv(&tasks)?,
            ExportFormat::Json => self.write_json(&tasks)?,
        }

        tracing::debug!(path = %self.output_path.display(), tasks = tasks.len(), "tasks exported");
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_report(&self, report: &Report<'_>) -> Result<()> {
        let report = ExportReport::new(report, &self.date_format);

        match self.format {
            ExportFormat::Csv => self.export_report_csv(&report)?,
            ExportFormat::Json => self.write_json(&report)?,
        }

        tracing::debug!(path = %self.output_path.display(), "report exported");
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_tasks_csv(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(ExportTask::HEADERS)?;

        for task in tasks {
            wtr.write_record(task.record())?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_report_csv(&self, report: &ExportReport) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        wtr.write_record(["Period start", report.period_start.as_str()])?;
        wtr.write_record(["Generated", report.generated_at.as_str()])?;

        for (title, tasks) in report.sections() {
            wtr.write_record([""])?;
            wtr.write_record([title])?;
            wtr.write_record(ExportTask::HEADERS)?;
            for task in tasks {
                wtr.write_record(task.record())?;
            }
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
