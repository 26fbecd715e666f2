use super::formatter::{format_date, format_minutes, format_percentage, format_text};
use super::index::TaskIndex;
use super::report::{Report, TaskStatus};
use super::task::Task;
use super::worklist::Worklist;
use crate::libs::messages::Message;
use anyhow::Result;
use chrono::{DateTime, Utc};
use prettytable::{row, Table};
use std::io::Write;

/// Longest name or course shown in a table cell.
const MAX_CELL_CHARS: usize = 32;

pub struct View {}

impl View {
    pub fn tasks<'a, I>(tasks: I, date_format: &str) -> Result<()>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COURSE", "PRIORITY", "EXPIRES", "USED", "TOTAL", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                format_text(task.name.as_deref(), MAX_CELL_CHARS),
                format_text(task.course.as_deref(), MAX_CELL_CHARS),
                task.priority,
                format_date(task.expires_at, date_format),
                format_minutes(task.used_minutes),
                format_minutes(task.total_minutes),
                format_percentage(task.completion_percentage())
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Open tasks in id order with the time still left on each.
    pub fn progress(index: &TaskIndex, date_format: &str) -> Result<usize> {
        let mut table = Table::new();
        let mut shown = 0;

        table.add_row(row!["ID", "NAME", "DONE", "USED", "LEFT", "TOTAL", "EXPIRES"]);
        index.in_order_traverse(|task| {
            if task.is_completed() {
                return;
            }
            table.add_row(row![
                task.id,
                format_text(task.name.as_deref(), MAX_CELL_CHARS),
                format_percentage(task.completion_percentage()),
                format_minutes(task.used_minutes),
                format_minutes(task.minutes_to_completion()),
                format_minutes(task.total_minutes),
                format_date(task.expires_at, date_format)
            ]);
            shown += 1;
        });

        if shown > 0 {
            table.printstd();
        }
        Ok(shown)
    }

    pub fn task(task: &Task, now: DateTime<Utc>, date_format: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["NAME", format_text(task.name.as_deref(), usize::MAX)]);
        table.add_row(row!["DESCRIPTION", format_text(task.description.as_deref(), usize::MAX)]);
        table.add_row(row!["COURSE", format_text(task.course.as_deref(), usize::MAX)]);
        table.add_row(row!["PRIORITY", task.priority]);
        table.add_row(row!["STATUS", TaskStatus::of(task, now)]);
        table.add_row(row!["INSERTED", format_date(task.inserted_at, date_format)]);
        table.add_row(row!["EXPIRES", format_date(task.expires_at, date_format)]);
        table.add_row(row!["COMPLETED", format_date(task.completed_at, date_format)]);
        table.add_row(row!["TOTAL", format_minutes(task.total_minutes)]);
        table.add_row(row!["USED", format_minutes(task.used_minutes)]);
        table.add_row(row!["LEFT", format_minutes(task.minutes_to_completion())]);
        table.add_row(row!["DONE", format_percentage(task.completion_percentage())]);
        table.printstd();

        Ok(())
    }

    pub fn report(report: &Report<'_>, date_format: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        Self::write_report(&mut stdout, report, date_format)
    }

    /// Renders all four report sections as text tables into `out`.
    pub fn write_report<W: Write>(out: &mut W, report: &Report<'_>, date_format: &str) -> Result<()> {
        writeln!(
            out,
            "{}",
            Message::ReportHeader(
                format_date(Some(report.period_start), date_format),
                format_date(Some(report.now), date_format),
            )
        )?;

        let sections = [
            (Message::ReportSectionCompleted, &report.completed),
            (Message::ReportSectionYetToBegin, &report.yet_to_begin),
            (Message::ReportSectionOngoing, &report.ongoing),
            (Message::ReportSectionExpired, &report.expired),
        ];
        for (title, tasks) in sections {
            writeln!(out, "\n{} ({})", title, tasks.len())?;
            if tasks.is_empty() {
                writeln!(out, "{}", Message::ReportSectionEmpty)?;
                continue;
            }
            Self::section_table(tasks, date_format).print(out)?;
        }
        out.flush()?;

        Ok(())
    }

    fn section_table(tasks: &Worklist<&Task>, date_format: &str) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COURSE", "PRIORITY", "INSERTED", "EXPIRES", "COMPLETED", "USED", "TOTAL", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                format_text(task.name.as_deref(), MAX_CELL_CHARS),
                format_text(task.course.as_deref(), MAX_CELL_CHARS),
                task.priority,
                format_date(task.inserted_at, date_format),
                format_date(task.expires_at, date_format),
                format_date(task.completed_at, date_format),
                format_minutes(task.used_minutes),
                format_minutes(task.total_minutes),
                format_percentage(task.completion_percentage())
            ]);
        }
        table
    }
}
