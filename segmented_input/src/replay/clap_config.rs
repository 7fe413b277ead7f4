// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "slot_replay")]
#[command(about = "🔢 Replay edit commands from stdin against a segmented input")]
#[command(version)]
#[command(next_line_help = true)]
#[command(group(
    ArgGroup::new("layout_source")
        .required(true)
        .args(["layout", "layout_file"])
))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nCommands are read from stdin, one per line:\n  edit <id> [text] | delete <id> | key <id> <backspace|other> | reset [id=value ...] | show\nUSAGE 📓:\n  slot_replay [\x1b[34moptions\x1b[0m] < commands.txt\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'y',
        help = "Slot layout, eg: `a:2,-,b:3` or `otp1:3,-,otp2:3=AB`. `id:len[=default]` is an editable slot, anything else is static text."
    )]
    pub layout: Option<String>,

    #[arg(
        long,
        short = 'f',
        help = "Path to a JSON slot layout, eg: `[{\"type\":\"input\",\"name\":\"a\",\"length\":2},{\"type\":\"static\",\"value\":\"-\"}]`."
    )]
    pub layout_file: Option<PathBuf>,

    #[arg(
        long,
        short = 'c',
        help = "Keep the values in a form that drives the input in controlled mode."
    )]
    pub controlled: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_layout_or_layout_file_is_required() {
        assert!(CLIArg::try_parse_from(["slot_replay"]).is_err());
        assert!(
            CLIArg::try_parse_from(["slot_replay", "-y", "a:2", "-f", "layout.json"]).is_err()
        );
    }

    #[test]
    fn test_parse_flags() {
        let cli_arg =
            CLIArg::try_parse_from(["slot_replay", "--layout", "a:2,-,b:3", "-c", "-l"])
                .unwrap();
        assert_eq!(cli_arg.layout.as_deref(), Some("a:2,-,b:3"));
        assert_eq!(cli_arg.layout_file, None);
        assert!(cli_arg.controlled);
        assert!(cli_arg.global_options.enable_logging);
    }
}
