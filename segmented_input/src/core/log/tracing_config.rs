// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::try_create_layers;
use crate::CommonResult;

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level.
///
/// You can use the [`crate::try_initialize_logging_global()`] to initialize the tracing
/// system with this configuration.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `tracing_log_file_path_and_prefix`: [String] is the file path and prefix to use for
///   the log file. Eg: `/tmp/slot_replay` or `slot_replay`.
/// - `DisplayPreference`: [`DisplayPreference`] is the preferred display to use for
///   logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference /* Stdout, Stderr */),
    File(String /* tracing_log_file_path_and_prefix */),
    DisplayAndFile(
        DisplayPreference,
        String, /* tracing_log_file_path_and_prefix */
    ),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

pub mod tracing_config_options {
    pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";
}

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file.
    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| {
                    tracing_config_options::DEFAULT_LOG_FILE_NAME.to_string()
                }),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(filename.unwrap_or_else(|| {
                tracing_config_options::DEFAULT_LOG_FILE_NAME.to_string()
            })),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install the layers as the global default subscriber. This can only be done once
    /// per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber has
    /// already been installed.
    pub fn install_global(self) -> CommonResult<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| {
                miette::miette!("Could not install global tracing subscriber: {err}")
            })
    }

    /// Install the layers as the default subscriber for the current thread only. Drop the
    /// returned guard to uninstall it. This is great for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> CommonResult<tracing::dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

/// Lets a bare [`LevelFilter`] stand in for a full [`TracingConfig`]. Logs go to a file
/// named [`tracing_config_options::DEFAULT_LOG_FILE_NAME`], since stdout belongs to the
/// program's own output.
impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                tracing_config_options::DEFAULT_LOG_FILE_NAME.to_string(),
            ),
            level_filter,
        }
    }
}
