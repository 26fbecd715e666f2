use super::Workspace;
use crate::{
    libs::{
        messages::Message,
        task::{is_valid_total_minutes, Priority, Task, MAX_TOTAL_MINUTES},
    },
    msg_bail_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name; without it every field is asked for interactively
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long)]
    course: Option<String>,
    /// Expiry date, in the configured date format or YYYY-MM-DD
    #[arg(short, long)]
    expires: Option<String>,
    /// Planned minutes (1..=525600)
    #[arg(short, long)]
    minutes: Option<u32>,
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
}

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let mut workspace = Workspace::open()?;
    let interactive = add_args.name.is_none();

    let name = match add_args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .interact_text()?,
    };
    let description = optional_text(add_args.description, interactive, Message::PromptTaskDescription)?;
    let course = optional_text(add_args.course, interactive, Message::PromptTaskCourse)?;
    let expires = optional_text(add_args.expires, interactive, Message::PromptTaskExpiry)?;

    let total_minutes = match add_args.minutes {
        Some(minutes) if is_valid_total_minutes(minutes) => minutes,
        Some(minutes) => msg_bail_anyhow!(Message::InvalidTotalMinutes(minutes, MAX_TOTAL_MINUTES)),
        None => prompt_total_minutes(None)?,
    };

    let priority = match add_args.priority {
        Some(priority) => priority,
        None if interactive => prompt_priority(Priority::default())?,
        None => Priority::default(),
    };

    let now = Utc::now();
    let mut task = Task::new(&name, &description, &course, total_minutes, priority);
    if !expires.is_empty() {
        let expires_at = workspace.parse_date(&expires)?;
        if expires_at < now {
            msg_warning!(Message::ExpiryInPast);
        }
        task.expires_at = Some(expires_at);
    }

    let id = workspace.index.next_id();
    if !workspace.index.insert(task) {
        msg_bail_anyhow!(Message::TaskDuplicateId(id));
    }
    workspace.save()?;

    msg_success!(Message::TaskCreated(id, name));
    Ok(())
}

fn optional_text(value: Option<String>, interactive: bool, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

pub(crate) fn prompt_total_minutes(default: Option<u32>) -> Result<u32> {
    let theme = ColorfulTheme::default();
    let mut input = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskMinutes.to_string())
        .validate_with(|minutes: &u32| -> Result<(), String> {
            if is_valid_total_minutes(*minutes) {
                Ok(())
            } else {
                Err(Message::InvalidTotalMinutes(*minutes, MAX_TOTAL_MINUTES).to_string())
            }
        });
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}

pub(crate) fn prompt_priority(default: Priority) -> Result<Priority> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&Priority::ALL)
        .default(Priority::ALL.iter().position(|priority| *priority == default).unwrap_or(1))
        .interact()?;
    Ok(Priority::ALL[selection])
}
