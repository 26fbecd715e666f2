use super::add::{prompt_priority, prompt_total_minutes};
use super::Workspace;
use crate::{
    libs::{
        formatter::format_date,
        messages::Message,
        task::{is_valid_total_minutes, non_empty, Priority, Task, MAX_TOTAL_MINUTES},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct UpdateArgs {
    id: u32,
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long)]
    course: Option<String>,
    /// New expiry date, in the configured date format or YYYY-MM-DD
    #[arg(short, long, conflicts_with = "clear_expiry")]
    expires: Option<String>,
    /// Remove the expiry date
    #[arg(long)]
    clear_expiry: bool,
    /// Planned minutes (1..=525600)
    #[arg(short, long)]
    minutes: Option<u32>,
    /// Minutes spent so far, at most the planned minutes
    #[arg(short, long)]
    used: Option<u32>,
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
    /// Mark the task as completed now
    #[arg(long)]
    complete: bool,
}

impl UpdateArgs {
    fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.course.is_some()
            || self.expires.is_some()
            || self.clear_expiry
            || self.minutes.is_some()
            || self.used.is_some()
            || self.priority.is_some()
            || self.complete
    }
}

/// Entries of the interactive edit menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
    Course,
    Expiry,
    TotalTime,
    UsedTime,
    Priority,
    Complete,
    Save,
    Cancel,
}

impl Field {
    const ALL: [Field; 10] = [
        Field::Name,
        Field::Description,
        Field::Course,
        Field::Expiry,
        Field::TotalTime,
        Field::UsedTime,
        Field::Priority,
        Field::Complete,
        Field::Save,
        Field::Cancel,
    ];

    fn label(self) -> Message {
        match self {
            Field::Name => Message::MenuUpdateName,
            Field::Description => Message::MenuUpdateDescription,
            Field::Course => Message::MenuUpdateCourse,
            Field::Expiry => Message::MenuUpdateExpiry,
            Field::TotalTime => Message::MenuUpdateTotalTime,
            Field::UsedTime => Message::MenuUpdateUsedTime,
            Field::Priority => Message::MenuUpdatePriority,
            Field::Complete => Message::MenuMarkCompleted,
            Field::Save => Message::MenuSaveChanges,
            Field::Cancel => Message::MenuDiscardChanges,
        }
    }
}

pub fn cmd(update_args: UpdateArgs) -> Result<()> {
    let mut workspace = Workspace::open()?;
    let id = update_args.id;
    let now = Utc::now();

    let Some(current) = workspace.index.find(id).cloned() else {
        msg_bail_anyhow!(Message::TaskNotFound(id));
    };

    let mut draft = current.clone();
    if update_args.has_changes() {
        apply_args(update_args, &mut draft, &workspace, now)?;
    } else if !edit_interactively(&mut draft, &workspace, now)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if draft == current {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    workspace.index.update(id, |task| *task = draft);
    workspace.save()?;

    msg_success!(Message::TaskUpdated(id));
    Ok(())
}

fn apply_args(args: UpdateArgs, draft: &mut Task, workspace: &Workspace, now: DateTime<Utc>) -> Result<()> {
    if let Some(name) = args.name {
        draft.name = non_empty(&name);
    }
    if let Some(description) = args.description {
        draft.description = non_empty(&description);
    }
    if let Some(course) = args.course {
        draft.course = non_empty(&course);
    }
    if let Some(expires) = args.expires {
        draft.expires_at = Some(workspace.parse_date(&expires)?);
    }
    if args.clear_expiry {
        draft.expires_at = None;
    }
    if let Some(minutes) = args.minutes {
        if !is_valid_total_minutes(minutes) {
            msg_bail_anyhow!(Message::InvalidTotalMinutes(minutes, MAX_TOTAL_MINUTES));
        }
        draft.total_minutes = minutes;
    }
    if let Some(used) = args.used {
        if used > draft.total_minutes {
            msg_bail_anyhow!(Message::InvalidUsedMinutes(used, draft.total_minutes));
        }
        draft.used_minutes = used;
    }
    if let Some(priority) = args.priority {
        draft.priority = priority;
    }
    if args.complete {
        complete(draft, now);
    }
    Ok(())
}

/// Runs the edit menu on `draft`. Returns `false` when the edits were discarded.
fn edit_interactively(draft: &mut Task, workspace: &Workspace, now: DateTime<Utc>) -> Result<bool> {
    let date_format = &workspace.config.date_format;
    let labels: Vec<String> = Field::ALL.iter().map(|field| field.label().to_string()).collect();

    loop {
        View::task(draft, now, date_format)?;

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectField.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match Field::ALL[selection] {
            Field::Name => draft.name = prompt_text(Message::PromptTaskName, draft.name.as_deref())?,
            Field::Description => {
                draft.description = prompt_text(Message::PromptTaskDescription, draft.description.as_deref())?
            }
            Field::Course => draft.course = prompt_text(Message::PromptTaskCourse, draft.course.as_deref())?,
            Field::Expiry => {
                let current = match draft.expires_at {
                    Some(_) => format_date(draft.expires_at, date_format),
                    None => String::new(),
                };
                let input: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptTaskExpiry.to_string())
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()?;
                draft.expires_at = if input.trim().is_empty() {
                    None
                } else {
                    match workspace.parse_date(&input) {
                        Ok(at) => Some(at),
                        Err(e) => {
                            msg_warning!(e);
                            draft.expires_at
                        }
                    }
                };
            }
            Field::TotalTime => {
                draft.total_minutes = prompt_total_minutes(Some(draft.total_minutes).filter(|m| is_valid_total_minutes(*m)))?;
                if draft.used_minutes > draft.total_minutes {
                    msg_warning!(Message::UsedMinutesClamped(draft.total_minutes));
                    draft.used_minutes = draft.total_minutes;
                }
            }
            Field::UsedTime => {
                let total = draft.total_minutes;
                draft.used_minutes = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptUsedMinutes(total).to_string())
                    .default(draft.used_minutes)
                    .validate_with(|used: &u32| -> Result<(), String> {
                        if *used <= total {
                            Ok(())
                        } else {
                            Err(Message::InvalidUsedMinutes(*used, total).to_string())
                        }
                    })
                    .interact_text()?;
            }
            Field::Priority => draft.priority = prompt_priority(draft.priority)?,
            Field::Complete => complete(draft, now),
            Field::Save => return Ok(true),
            Field::Cancel => return Ok(false),
        }
    }
}

fn prompt_text(prompt: Message, current: Option<&str>) -> Result<Option<String>> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .with_initial_text(current.unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    Ok(non_empty(input.trim()))
}

fn complete(draft: &mut Task, now: DateTime<Utc>) {
    if draft.is_completed() {
        msg_warning!(Message::TaskAlreadyCompleted(draft.id));
        return;
    }
    draft.mark_completed(now);
}
