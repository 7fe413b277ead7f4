// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Two ways to describe a [`SlotRegistry`] outside of code.
//!
//! 1. A compact layout string, handy on the command line. Items are separated by `,`.
//!    An item of the form `id:len` or `id:len=default` is an editable slot, anything
//!    else is static text. Eg: `otp1:3,-,otp2:2,+,otp3:3` or `a:2=12, ,b:3`.
//! 2. JSON, an array of `{"type": "input", "name", "length", "defaultValue"?}` and
//!    `{"type": "static", "value"}` objects.

use std::str::FromStr;

use crate::{SlotDefinition, SlotInputError, SlotInputResult, SlotRegistry};

pub const LAYOUT_ITEM_SEPARATOR: char = ',';
pub const LAYOUT_LENGTH_SEPARATOR: char = ':';
pub const LAYOUT_DEFAULT_SEPARATOR: char = '=';

impl SlotRegistry {
    /// # Errors
    ///
    /// [`SlotInputError::InvalidLayout`] for an empty item or an unrepresentable
    /// length, plus any error from [`SlotRegistry::try_new`].
    pub fn try_from_layout_str(layout: &str) -> SlotInputResult<Self> {
        let definitions = layout
            .split(LAYOUT_ITEM_SEPARATOR)
            .map(parse_layout_item)
            .collect::<SlotInputResult<Vec<_>>>()?;
        SlotRegistry::try_new(definitions)
    }

    /// # Errors
    ///
    /// [`SlotInputError::LayoutJson`] if `json` isn't a valid layout, plus any error from
    /// [`SlotRegistry::try_new`].
    pub fn try_from_json(json: &str) -> SlotInputResult<Self> {
        let definitions: Vec<SlotDefinition> = serde_json::from_str(json)?;
        SlotRegistry::try_new(definitions)
    }

    /// # Errors
    ///
    /// [`SlotInputError::LayoutJson`] if serialization fails.
    pub fn to_json(&self) -> SlotInputResult<String> {
        Ok(serde_json::to_string(self.definitions())?)
    }
}

impl FromStr for SlotRegistry {
    type Err = SlotInputError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> { Self::try_from_layout_str(layout) }
}

fn parse_layout_item(item: &str) -> SlotInputResult<SlotDefinition> {
    if item.is_empty() {
        return Err(SlotInputError::InvalidLayout {
            item: item.to_string(),
            reason: "empty item".to_string(),
        });
    }

    let trimmed = item.trim();
    let Some((id, rest)) = trimmed.split_once(LAYOUT_LENGTH_SEPARATOR) else {
        return Ok(SlotDefinition::static_text(item));
    };

    let (length_str, maybe_default) = match rest.split_once(LAYOUT_DEFAULT_SEPARATOR) {
        Some((length_str, default)) => (length_str, Some(default)),
        None => (rest, None),
    };

    let looks_editable = !id.is_empty()
        && !id.contains(char::is_whitespace)
        && !length_str.is_empty()
        && length_str.chars().all(|it| it.is_ascii_digit());
    if !looks_editable {
        return Ok(SlotDefinition::static_text(item));
    }

    let max_length = length_str
        .parse::<usize>()
        .map_err(|err| SlotInputError::InvalidLayout {
            item: item.to_string(),
            reason: err.to_string(),
        })?;

    Ok(match maybe_default {
        Some(default) => SlotDefinition::editable_with_default(id, max_length, default),
        None => SlotDefinition::editable(id, max_length),
    })
}
