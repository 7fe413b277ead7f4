// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{BufRead, Write};

use miette::IntoDiagnostic;

use crate::{CLIArg, CommonResult, ControllerMode, ReplayCommand, ReplaySession,
            SlotRegistry, ok};

/// Lines starting with this are skipped, as are blank lines.
pub const COMMENT_PREFIX: char = '#';

/// Build the registry from `--layout` or `--layout-file`.
///
/// # Errors
///
/// If the layout file can't be read, or the layout is invalid.
pub fn load_registry(cli_arg: &CLIArg) -> CommonResult<SlotRegistry> {
    match (&cli_arg.layout, &cli_arg.layout_file) {
        (Some(layout), _) => Ok(SlotRegistry::try_from_layout_str(layout)?),
        (None, Some(path)) => {
            let json = std::fs::read_to_string(path).into_diagnostic()?;
            Ok(SlotRegistry::try_from_json(&json)?)
        }
        (None, None) => miette::bail!("Provide either --layout or --layout-file"),
    }
}

/// Replay the commands in `input` and print the resulting events to `output`. A bad line
/// (unparseable, or naming an unknown slot) is reported to `output` and skipped.
///
/// # Errors
///
/// If the layout is invalid, or reading `input` / writing `output` fails.
pub fn run_replay(
    cli_arg: &CLIArg,
    input: impl BufRead,
    mut output: impl Write,
) -> CommonResult<()> {
    let registry = load_registry(cli_arg)?;
    let mode = if cli_arg.controlled {
        ControllerMode::Controlled
    } else {
        ControllerMode::Uncontrolled
    };
    let mut session = ReplaySession::try_new(registry, mode)?;

    writeln!(output, "🔢 {} ({mode})", session.render()).into_diagnostic()?;
    for event in session.drain_events() {
        writeln!(output, "{event}").into_diagnostic()?;
    }

    for line in input.lines() {
        let line = line.into_diagnostic()?;
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let result = line
            .parse::<ReplayCommand>()
            .map_err(miette::Report::from)
            .and_then(|command| session.apply(&command).map_err(miette::Report::from));

        match result {
            Ok(events) => {
                for event in events {
                    writeln!(output, "{event}").into_diagnostic()?;
                }
            }
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::warn!(message = "❌ replay line failed", line = %line, error = %report);
                writeln!(output, "❌ {line}: {report}").into_diagnostic()?;
            }
        }
    }

    ok!()
}
