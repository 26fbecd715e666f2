//! Text of every [`Message`].
//!
//! ```rust
//! use coursework::libs::messages::Message;
//!
//! assert_eq!(Message::TaskNotFound(4).to_string(), "Task with ID 4 not found.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, name) => format!("Task '{}' created with ID {}.", name, id),
            Message::TaskUpdated(id) => format!("Task {} updated.", id),
            Message::TaskDeleted(id) => format!("Task {} deleted.", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TaskDuplicateId(id) => format!("A task with ID {} already exists.", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} is already completed.", id),
            Message::TasksNotFound => "No tasks stored yet. Add one with 'coursework add'.".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({}):", count),
            Message::ProgressHeader => "Progress of open tasks:".to_string(),
            Message::NoOpenTasks => "No open tasks.".to_string(),
            Message::ConfirmDeleteTask(id, name) => format!("Delete task {} '{}'?", id, name),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),

            // === TASK INPUT ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskCourse => "Course (optional)".to_string(),
            Message::PromptTaskExpiry => "Expiry date (optional)".to_string(),
            Message::PromptTaskMinutes => "Planned time in minutes".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptUsedMinutes(total) => format!("Minutes spent (0-{})", total),
            Message::PromptSelectField => "What do you want to change?".to_string(),
            Message::InvalidTotalMinutes(minutes, max) => {
                format!("Planned time must be between 1 and {} minutes, got {}.", max, minutes)
            }
            Message::InvalidUsedMinutes(used, total) => {
                format!("Minutes spent must not exceed the planned {} minutes, got {}.", total, used)
            }
            Message::UsedMinutesClamped(total) => format!("Minutes spent reduced to the new planned time of {}.", total),
            Message::ExpiryInPast => "The expiry date is already in the past.".to_string(),

            // === EDIT MENU ===
            Message::MenuUpdateName => "Name".to_string(),
            Message::MenuUpdateDescription => "Description".to_string(),
            Message::MenuUpdateCourse => "Course".to_string(),
            Message::MenuUpdateExpiry => "Expiry date".to_string(),
            Message::MenuUpdateTotalTime => "Planned time".to_string(),
            Message::MenuUpdateUsedTime => "Time spent".to_string(),
            Message::MenuUpdatePriority => "Priority".to_string(),
            Message::MenuMarkCompleted => "Mark as completed".to_string(),
            Message::MenuSaveChanges => "Save and exit".to_string(),
            Message::MenuDiscardChanges => "Discard and exit".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(start, now) => format!("Report from {} to {}", start, now),
            Message::ReportSectionCompleted => "Completed".to_string(),
            Message::ReportSectionYetToBegin => "Yet to begin".to_string(),
            Message::ReportSectionOngoing => "Ongoing".to_string(),
            Message::ReportSectionExpired => "Expired".to_string(),
            Message::ReportSectionEmpty => "Nothing here.".to_string(),
            Message::ReportSaved(path) => format!("Report saved to {}", path),
            Message::ReportStartInFuture(days) => {
                format!("The report start is not in the past, using the last {} days instead.", days)
            }

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::ConfigDeleted => "Configuration deleted.".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found.".to_string(),
            Message::ConfigModuleTasks => "Task storage and reports".to_string(),
            Message::PromptTasksFile => "Task file".to_string(),
            Message::PromptReportPeriodDays => "Default report period in days".to_string(),
            Message::PromptDateFormat => "Date format".to_string(),
            Message::InvalidReportPeriodDays(max) => format!("The report period must be between 1 and {} days.", max),
            Message::InvalidDateFormat(format) => format!("'{}' is not a valid date format.", format),
        };
        write!(f, "{}", text)
    }
}
