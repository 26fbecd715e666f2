use super::Workspace;
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let workspace = Workspace::open()?;

    msg_print!(Message::ProgressHeader, true);
    let shown = View::progress(&workspace.index, &workspace.config.date_format)?;
    if shown == 0 {
        msg_info!(Message::NoOpenTasks);
    }
    Ok(())
}
