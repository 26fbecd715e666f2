//! Application configuration.
//!
//! Settings live in `config.json` inside the data directory resolved by
//! [`DataStorage`]. A missing file is not an error: [`Config::read`] returns
//! the defaults, so the tool works before `coursework init` was ever run.
//!
//! ```rust,no_run
//! use coursework::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("tasks are stored in {}", config.tasks_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::is_valid_date_format;
use super::report::{DEFAULT_PERIOD_DAYS, MAX_PERIOD_DAYS};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Task file name used when `tasks_file` is not configured.
pub const DEFAULT_TASKS_FILE_NAME: &str = "tasks.txt";

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Task file location. `None` means `tasks.txt` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    /// Length of the default report window in days.
    pub report_period_days: i64,

    /// chrono format used to show and parse dates.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: None,
            report_period_days: DEFAULT_PERIOD_DAYS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// holds values rejected by [`Config::validate`].
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that are not constrained by their types.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_report_period_days(self.report_period_days) {
            msg_bail_anyhow!(Message::InvalidReportPeriodDays(MAX_PERIOD_DAYS));
        }
        if !is_valid_date_format(&self.date_format) {
            msg_bail_anyhow!(Message::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Resolved task file path.
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.tasks_file {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DEFAULT_TASKS_FILE_NAME),
        }
    }

    /// Interactive setup. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let default_tasks_file = current.tasks_path()?;

        msg_print!(Message::ConfigModuleTasks);

        let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(default_tasks_file.display().to_string())
            .interact_text()?;

        let report_period_days: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReportPeriodDays.to_string())
            .default(current.report_period_days)
            .validate_with(|days: &i64| -> Result<(), String> {
                if is_valid_report_period_days(*days) {
                    Ok(())
                } else {
                    Err(Message::InvalidReportPeriodDays(MAX_PERIOD_DAYS).to_string())
                }
            })
            .interact_text()?;

        let date_format: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(current.date_format.clone())
            .validate_with(|format: &String| -> Result<(), String> {
                if is_valid_date_format(format) {
                    Ok(())
                } else {
                    Err(Message::InvalidDateFormat(format.clone()).to_string())
                }
            })
            .interact_text()?;

        let tasks_file = PathBuf::from(tasks_file);
        let tasks_file = if tasks_file == DataStorage::new().get_path(DEFAULT_TASKS_FILE_NAME)? {
            None
        } else {
            Some(tasks_file)
        };

        Ok(Config {
            tasks_file,
            report_period_days,
            date_format,
        })
    }
}

pub fn is_valid_report_period_days(days: i64) -> bool {
    (1..=MAX_PERIOD_DAYS).contains(&days)
}
