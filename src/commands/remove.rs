use super::Workspace;
use crate::{
    libs::{formatter::format_text, messages::Message},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    id: u32,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(remove_args: RemoveArgs) -> Result<()> {
    let mut workspace = Workspace::open()?;
    let id = remove_args.id;

    let Some(task) = workspace.index.find(id) else {
        msg_bail_anyhow!(Message::TaskNotFound(id));
    };

    if !remove_args.yes {
        let name = format_text(task.name.as_deref(), usize::MAX);
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(id, name).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if workspace.index.remove(id).is_none() {
        msg_bail_anyhow!(Message::TaskNotFound(id));
    }
    workspace.save()?;

    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
