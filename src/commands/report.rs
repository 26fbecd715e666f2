use super::Workspace;
use crate::{
    libs::{messages::Message, report, view::View},
    msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Window start, in the configured date format or YYYY-MM-DD
    #[arg(short, long)]
    since: Option<String>,

    /// Write the report to a file instead of the terminal
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let workspace = Workspace::open()?;
    let now = Utc::now();
    let days = workspace.config.report_period_days;

    let requested = report_args.since.as_deref().map(|since| workspace.parse_date(since)).transpose()?;
    if matches!(requested, Some(start) if start >= now) {
        msg_warning!(Message::ReportStartInFuture(days));
    }
    let period_start = report::resolve_period_start(requested, now, days);

    let report = report::categorize_and_sort(&workspace.index, period_start, now);
    tracing::debug!(tasks = report.len(), "report categorized");

    match report_args.output {
        Some(path) => {
            let mut file = BufWriter::new(File::create(&path)?);
            View::write_report(&mut file, &report, &workspace.config.date_format)?;
            msg_success!(Message::ReportSaved(path.display().to_string()));
        }
        None => View::report(&report, &workspace.config.date_format)?,
    }
    Ok(())
}
