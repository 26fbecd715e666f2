use super::Workspace;
use crate::{
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        report,
    },
    msg_info,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "tasks")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report window start; only used when exporting a report
    #[arg(short, long)]
    since: Option<String>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let workspace = Workspace::open()?;
    let now = Utc::now();

    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output, &workspace.config.date_format);
    match args.data {
        ExportData::Tasks => exporter.export_tasks(&workspace.index, now),
        ExportData::Report => {
            let requested = args.since.as_deref().map(|since| workspace.parse_date(since)).transpose()?;
            let period_start = report::resolve_period_start(requested, now, workspace.config.report_period_days);
            let report = report::categorize_and_sort(&workspace.index, period_start, now);
            exporter.export_report(&report)
        }
    }
}
