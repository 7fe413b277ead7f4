// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use crate::{SlotId, SlotKey, SlotValueMap};

/// One line of a replay script.
///
/// ```text
/// edit <id> [text]        text may contain spaces, missing text clears the slot
/// delete <id>
/// key <id> <backspace|other>
/// reset [id=value ...]
/// show
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayCommand {
    Edit { id: SlotId, text: String },
    Delete { id: SlotId },
    Key { id: SlotId, key: SlotKey },
    Reset { overrides: SlotValueMap },
    Show,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ReplayCommandError {
    #[error("❓ Unknown command: `{command}`")]
    #[diagnostic(
        code(r3bl_segmented_input::replay::unknown_command),
        help("Use one of: edit, delete, key, reset, show")
    )]
    UnknownCommand { command: String },

    #[error("🕳️ `{command}` needs a {argument}")]
    #[diagnostic(code(r3bl_segmented_input::replay::missing_argument))]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("❓ Unknown key: `{key}`")]
    #[diagnostic(
        code(r3bl_segmented_input::replay::unknown_key),
        help("Use `backspace` or `other`")
    )]
    UnknownKey { key: String },

    #[error("🧩 Reset override `{item}` is not of the form id=value")]
    #[diagnostic(code(r3bl_segmented_input::replay::invalid_override))]
    InvalidOverride { item: String },
}

impl FromStr for ReplayCommand {
    type Err = ReplayCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = split_word(line);

        match command {
            "edit" => {
                let (id, text) = split_word(rest);
                Ok(Self::Edit {
                    id: require_id("edit", id)?,
                    text: text.to_string(),
                })
            }
            "delete" => {
                let (id, _) = split_word(rest);
                Ok(Self::Delete {
                    id: require_id("delete", id)?,
                })
            }
            "key" => {
                let (id, key) = split_word(rest);
                let id = require_id("key", id)?;
                if key.is_empty() {
                    return Err(ReplayCommandError::MissingArgument {
                        command: "key",
                        argument: "key name",
                    });
                }
                let key = SlotKey::from_str(key).map_err(|_| ReplayCommandError::UnknownKey {
                    key: key.to_string(),
                })?;
                Ok(Self::Key { id, key })
            }
            "reset" => {
                let overrides = rest
                    .split_whitespace()
                    .map(|item| {
                        item.split_once('=')
                            .filter(|(id, _)| !id.is_empty())
                            .ok_or_else(|| ReplayCommandError::InvalidOverride {
                                item: item.to_string(),
                            })
                    })
                    .collect::<Result<SlotValueMap, _>>()?;
                Ok(Self::Reset { overrides })
            }
            "show" => Ok(Self::Show),
            _ => Err(ReplayCommandError::UnknownCommand {
                command: command.to_string(),
            }),
        }
    }
}

/// Splits off the first whitespace separated word. The remainder has its leading
/// whitespace removed.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn require_id(command: &'static str, id: &str) -> Result<SlotId, ReplayCommandError> {
    if id.is_empty() {
        return Err(ReplayCommandError::MissingArgument {
            command,
            argument: "slot id",
        });
    }
    Ok(id.into())
}
