// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditOutcome, FocusHandle, FocusTransfer, SlotId, SlotInputResult,
            SlotStateController};

/// Keys a presentation layer forwards to [`SlotStateController::handle_key`]. Anything
/// that isn't a backspace maps to [`SlotKey::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotKey {
    Backspace,
    Other,
}

/// Everything a rendered editable slot needs: what to show, how long it may get, and
/// handlers that route events for this slot back into the controller.
///
/// The handlers take the controller explicitly rather than capturing it, so the bundle
/// is plain data that can be cloned into a render tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputProps {
    pub id: SlotId,
    /// Position among editable slots only.
    pub editable_index: usize,
    pub max_length: usize,
    pub value: String,
    pub has_focus: bool,
}

impl InputProps {
    /// Change handler.
    ///
    /// # Errors
    ///
    /// See [`SlotStateController::handle_edit`].
    pub fn on_change<H: FocusHandle>(
        &self,
        controller: &mut SlotStateController<H>,
        raw: &str,
    ) -> SlotInputResult<EditOutcome> {
        controller.handle_edit(self.id.as_str(), raw)
    }

    /// Key handler.
    ///
    /// # Errors
    ///
    /// See [`SlotStateController::handle_key`].
    pub fn on_key_down<H: FocusHandle>(
        &self,
        controller: &mut SlotStateController<H>,
        key: SlotKey,
    ) -> SlotInputResult<Option<FocusTransfer>> {
        controller.handle_key(self.id.as_str(), key)
    }

    /// Focus handler, for when the slot gains focus without the controller asking.
    ///
    /// # Errors
    ///
    /// See [`SlotStateController::notify_focused`].
    pub fn on_focus<H: FocusHandle>(
        &self,
        controller: &mut SlotStateController<H>,
    ) -> SlotInputResult<()> {
        controller.notify_focused(self.id.as_str())
    }

    /// Focus handle registration callback. `None` on unmount.
    ///
    /// # Errors
    ///
    /// See [`SlotStateController::set_focus_handle`].
    pub fn set_ref<H: FocusHandle>(
        &self,
        controller: &mut SlotStateController<H>,
        maybe_handle: Option<H>,
    ) -> SlotInputResult<()> {
        controller.set_focus_handle(self.id.as_str(), maybe_handle)
    }
}
