// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SlotId;

/// Result type for every fallible slot operation.
pub type SlotInputResult<T> = Result<T, SlotInputError>;

/// Errors from the slot registry, the controller, and the layout parsers.
///
/// Note what is **not** here, since these conditions are policies rather than failures:
///
/// | Condition                                    | Behavior                         |
/// | :------------------------------------------- | :------------------------------- |
/// | Input longer than the slot's max length      | Silently truncated.              |
/// | Focus handle not registered (slot unmounted) | Focus transfer is a no-op.       |
/// | No completion callback supplied              | Completion is detected, no call. |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SlotInputError {
    /// An operation referenced an id that isn't an editable slot in the registry.
    #[error("🔍 Slot '{id}' not found")]
    #[diagnostic(
        code(r3bl_segmented_input::slot_not_found),
        help("Slot ids are fixed when the registry is created. Check for typos.")
    )]
    SlotNotFound { id: SlotId },

    #[error("👯 Slot id '{id}' is used by more than one editable slot")]
    #[diagnostic(code(r3bl_segmented_input::duplicate_slot_id))]
    DuplicateSlotId { id: SlotId },

    #[error("📏 Slot '{id}' has a max length of 0")]
    #[diagnostic(
        code(r3bl_segmented_input::zero_max_length),
        help("Editable slots must hold at least one character.")
    )]
    ZeroMaxLength { id: SlotId },

    #[error(
        "📏 Default value '{default_value}' for slot '{id}' is longer than its max length {max_length}"
    )]
    #[diagnostic(code(r3bl_segmented_input::default_value_too_long))]
    DefaultValueTooLong {
        id: SlotId,
        default_value: String,
        max_length: usize,
    },

    #[error("🕳️ Registry has no editable slots")]
    #[diagnostic(
        code(r3bl_segmented_input::empty_registry),
        help("Add at least one editable slot, static slots alone compose no value.")
    )]
    EmptyRegistry,

    #[error("🧩 Invalid layout item '{item}': {reason}")]
    #[diagnostic(
        code(r3bl_segmented_input::invalid_layout),
        help("Use `id:len` or `id:len=default` for editable slots, any other text is static.")
    )]
    InvalidLayout { item: String, reason: String },

    #[error("🧩 Could not parse JSON layout: {message}")]
    #[diagnostic(code(r3bl_segmented_input::layout_json))]
    LayoutJson { message: String },
}

impl SlotInputError {
    pub fn slot_not_found(id: impl Into<SlotId>) -> Self {
        Self::SlotNotFound { id: id.into() }
    }
}

impl From<serde_json::Error> for SlotInputError {
    fn from(error: serde_json::Error) -> Self {
        Self::LayoutJson {
            message: error.to_string(),
        }
    }
}
