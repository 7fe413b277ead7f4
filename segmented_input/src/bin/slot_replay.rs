// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Headless driver for a segmented input. Reads a slot layout from the command line,
//! then replays edit commands from stdin and prints what happened after each one.
//!
//! ```text
//! $ printf 'edit a 12\nedit b xyz\nshow\n' | slot_replay --layout a:2,-,b:3
//! 🔢 [__]-___ (uncontrolled)
//! 🎯 focus → a
//! ✏️  a = "12"
//! 🎯 focus → b
//! ✏️  b = "XYZ"
//! ✅ complete: 12XYZ
//! 📋 12-[XYZ] (complete: true)
//! ```

use std::io::{stdin, stdout};

use clap::Parser;
use r3bl_segmented_input::{CLIArg, CommonResult, ok, run_replay,
                           try_initialize_logging_global};

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    run_replay(&cli_arg, stdin().lock(), stdout().lock())?;

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
