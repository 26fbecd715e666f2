use super::Workspace;
use crate::{
    libs::{messages::Message, view::View},
    msg_error_anyhow,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    id: u32,
}

pub fn cmd(show_args: ShowArgs) -> Result<()> {
    let workspace = Workspace::open()?;

    let task = workspace
        .index
        .find(show_args.id)
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(show_args.id)))?;
    View::task(task, Utc::now(), &workspace.config.date_format)
}
