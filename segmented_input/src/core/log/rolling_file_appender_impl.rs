// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

/// File writer for the log output of a replay session, eg: `log.txt` or
/// `/tmp/slot_replay.log`. The file is appended to and never rotated.
///
/// # Errors
///
/// If `path_str` has no parent directory or no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(path_str);

    let (Some(parent), Some(file_name)) = (path.parent(), path.file_name()) else {
        miette::bail!("📁 Can't open log file at {}", path.display());
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}
