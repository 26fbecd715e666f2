//! Line-oriented task file.
//!
//! Every task takes exactly ten lines:
//!
//! ```text
//! id
//! name
//! description
//! course
//! inserted_at     (unix seconds, 0 = unset)
//! expires_at      (unix seconds, 0 = unset)
//! completed_at    (unix seconds, 0 = unset)
//! total_minutes
//! used_minutes
//! priority        (1 = high, 2 = medium, 3 = low)
//! ```
//!
//! Empty text lines mean "absent"; empty numeric lines keep their default.
//! Loading stops at the first incomplete record, so a truncated tail is
//! ignored. The tree shape is not stored: loading rebuilds the index by
//! inserting tasks in file order.

use super::index::TaskIndex;
use super::task::{Priority, Task};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const LINES_PER_TASK: usize = 10;

#[derive(Debug, Error)]
pub enum TaskFileError {
    #[error("Task file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid {field} on line {line}: '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Reads every complete record from `reader`.
pub fn read_tasks<R: BufRead>(reader: R) -> Result<Vec<Task>, TaskFileError> {
    let lines = reader.lines().collect::<Result<Vec<String>, io::Error>>()?;

    lines
        .chunks_exact(LINES_PER_TASK)
        .enumerate()
        .map(|(record, chunk)| parse_record(record * LINES_PER_TASK + 1, chunk))
        .collect()
}

fn parse_record(first_line: usize, lines: &[String]) -> Result<Task, TaskFileError> {
    let field = |offset: usize| lines[offset].trim_end_matches('\r');
    let line = |offset: usize| first_line + offset;

    Ok(Task {
        id: parse_number(field(0), line(0), "id")?,
        name: parse_text(field(1)),
        description: parse_text(field(2)),
        course: parse_text(field(3)),
        inserted_at: parse_timestamp(field(4), line(4), "insertion date")?,
        expires_at: parse_timestamp(field(5), line(5), "expiry date")?,
        completed_at: parse_timestamp(field(6), line(6), "completion date")?,
        total_minutes: parse_number(field(7), line(7), "total minutes")?,
        used_minutes: parse_number(field(8), line(8), "used minutes")?,
        priority: match field(9) {
            "" => Priority::default(),
            value => Priority::from_code(parse_number(value, line(9), "priority")?),
        },
    })
}

fn parse_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_number<N>(value: &str, line: usize, field: &'static str) -> Result<N, TaskFileError>
where
    N: FromStr + Default,
{
    let value = value.trim();
    if value.is_empty() {
        return Ok(N::default());
    }
    value.parse().map_err(|_| TaskFileError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_timestamp(value: &str, line: usize, field: &'static str) -> Result<Option<DateTime<Utc>>, TaskFileError> {
    let seconds: i64 = parse_number(value, line, field)?;
    if seconds == 0 {
        return Ok(None);
    }
    DateTime::from_timestamp(seconds, 0).map(Some).ok_or_else(|| TaskFileError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}

/// Writes one record. Line breaks inside text fields become spaces.
pub fn write_task<W: Write>(writer: &mut W, task: &Task) -> io::Result<()> {
    writeln!(writer, "{}", task.id)?;
    writeln!(writer, "{}", text_line(&task.name))?;
    writeln!(writer, "{}", text_line(&task.description))?;
    writeln!(writer, "{}", text_line(&task.course))?;
    writeln!(writer, "{}", timestamp_line(task.inserted_at))?;
    writeln!(writer, "{}", timestamp_line(task.expires_at))?;
    writeln!(writer, "{}", timestamp_line(task.completed_at))?;
    writeln!(writer, "{}", task.total_minutes)?;
    writeln!(writer, "{}", task.used_minutes)?;
    writeln!(writer, "{}", task.priority.code())
}

fn text_line(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().replace(['\r', '\n'], " ")
}

fn timestamp_line(value: Option<DateTime<Utc>>) -> i64 {
    value.map_or(0, |at| at.timestamp())
}

/// Writes all tasks of `index` in ascending id order.
pub fn write_index<W: Write>(writer: &mut W, index: &TaskIndex) -> io::Result<()> {
    for task in index {
        write_task(writer, task)?;
    }
    writer.flush()
}

/// Loads the task file at `path`. A missing file yields an empty index.
pub fn load(path: &Path) -> Result<TaskIndex, TaskFileError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "task file not found, starting empty");
        return Ok(TaskIndex::new());
    }

    let tasks = read_tasks(BufReader::new(File::open(path)?))?;
    let read = tasks.len();
    let index: TaskIndex = tasks.into_iter().collect();
    if index.len() != read {
        tracing::warn!(read, stored = index.len(), "duplicate ids dropped while loading");
    }
    tracing::debug!(path = %path.display(), tasks = index.len(), "task file loaded");
    Ok(index)
}

/// Replaces the file at `path` with the contents of `index`.
pub fn save(path: &Path, index: &TaskIndex) -> Result<(), TaskFileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_index(&mut writer, index)?;
    tracing::debug!(path = %path.display(), tasks = index.len(), "task file saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;

    const RECORD: &str = "3\nEssay\n\nHistory\n1746613562\n0\n\n120\n30\n1\n";

    #[test]
    fn test_parse_record() {
        let tasks = read_tasks(Cursor::new(RECORD)).unwrap();
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(task.id, 3);
        assert_eq!(task.name.as_deref(), Some("Essay"));
        assert_eq!(task.description, None);
        assert_eq!(task.course.as_deref(), Some("History"));
        assert_eq!(task.inserted_at, Some(Utc.timestamp_opt(1746613562, 0).unwrap()));
        assert_eq!(task.expires_at, None);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.total_minutes, 120);
        assert_eq!(task.used_minutes, 30);
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_empty_numeric_lines_use_defaults() {
        let tasks = read_tasks(Cursor::new("\nName\n\n\n\n\n\n\n\n\n")).unwrap();
        assert_eq!(tasks[0].id, 0);
        assert_eq!(tasks[0].total_minutes, 0);
        assert_eq!(tasks[0].priority, Priority::Medium);
    }

    #[test]
    fn test_truncated_tail_is_ignored() {
        let input = format!("{}4\nPartial\n", RECORD);
        let tasks = read_tasks(Cursor::new(input)).unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let input = RECORD.replace("120", "lots");
        let err = read_tasks(Cursor::new(input)).unwrap_err();
        match err {
            TaskFileError::InvalidField { line, field, value } => {
                assert_eq!(line, 8);
                assert_eq!(field, "total minutes");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_write_flattens_line_breaks() {
        let task = Task {
            id: 1,
            description: Some("two\nlines".to_string()),
            ..Task::default()
        };
        let mut buffer = Vec::new();
        write_task(&mut buffer, &task).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), LINES_PER_TASK);
        assert_eq!(text.lines().nth(2), Some("two lines"));
    }

    #[test]
    fn test_windows_line_endings() {
        let input = RECORD.replace('\n', "\r\n");
        let tasks = read_tasks(Cursor::new(input)).unwrap();
        assert_eq!(tasks[0].name.as_deref(), Some("Essay"));
        assert_eq!(tasks[0].priority, Priority::High);
    }
}
