use super::Workspace;
use crate::{
    libs::{compare::SortBy, messages::Message, task::Task, view::View, worklist::Worklist},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort criterion; tasks are listed in id order by default
    #[arg(short, long, value_enum)]
    sort: Option<SortBy>,
}

pub fn cmd(list_args: ListArgs) -> Result<()> {
    let workspace = Workspace::open()?;

    if workspace.index.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    let mut tasks: Worklist<&Task> = workspace.index.iter().collect();
    if let Some(sort) = list_args.sort {
        tasks.sort(sort);
    }

    msg_print!(Message::TasksHeader(tasks.len()), true);
    View::tasks(tasks.iter().copied(), &workspace.config.date_format)
}
