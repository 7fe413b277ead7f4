// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**.
//!
//! If you don't call one of these functions w/ a value other than
//! [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter
//! if the crate (or your code) uses the [`tracing::info!`], [`tracing::debug!`], etc.
//! macros.
//!
//! Anything that converts into a [`TracingConfig`] can be passed in, including a bare
//! [`tracing_core::LevelFilter`].

use tracing::dispatcher;

use super::TracingConfig;
use crate::{CommonResult, ok};

/// Install a process wide subscriber built from `options`.
///
/// # Errors
///
/// Returns an error if the log file can't be created or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> CommonResult<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads. This is great for tests. Returns `None` when logging is off.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> CommonResult<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
