// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap,
          fmt::{Debug, Formatter, Result}};

use crate::{DEBUG_SLOT_INPUT, InlineVec, SlotId, SlotInputError, SlotInputResult,
            SlotRegistry, unwrap_or_err};

/// Opaque, replaceable handle to the input surface that renders one editable slot. The
/// presentation layer decides what "focus" means (move a terminal cursor, focus a
/// widget, set a flag in a test).
pub trait FocusHandle {
    fn request_focus(&mut self);
}

/// Headless use, where nothing is rendered and focus moves are only reported.
impl FocusHandle for () {
    fn request_focus(&mut self) {}
}

/// What happened when focus was asked to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusTransfer {
    /// The handle for `to` was asked to take focus.
    Moved { from: SlotId, to: SlotId },
    /// There is a neighbor, but its handle isn't registered (the slot is unmounted).
    HandleNotRegistered { to: SlotId },
    /// Already at the first (retreat) or last (advance) editable slot.
    NoNeighbor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum FocusDirection {
    #[strum(to_string = "next")]
    Next,
    #[strum(to_string = "previous")]
    Previous,
}

/// Moves keyboard focus between editable slots, using the editable only ordering from
/// the [`SlotRegistry`].
///
/// 1. Handles are registered / unregistered as slots mount / unmount. Re-registering an
///    id replaces its handle.
/// 2. [`advance`](Self::advance) and [`retreat`](Self::retreat) never fail because of a
///    missing handle or a missing neighbor; they report it in the returned
///    [`FocusTransfer`] instead.
/// 3. The id of the slot that has focus is tracked, similar to a `HasFocus` in a
///    component registry. Transfers requested here update it. Focus moves that start in
///    the presentation layer must be reported via [`notify_focused`](Self::notify_focused).
pub struct FocusCoordinator<H: FocusHandle> {
    editable_ids: InlineVec<SlotId>,
    handles: HashMap<SlotId, H>,
    maybe_focused_id: Option<SlotId>,
}

impl<H: FocusHandle> FocusCoordinator<H> {
    #[must_use]
    pub fn new(registry: &SlotRegistry) -> Self {
        Self {
            editable_ids: registry.editable_slots().map(|it| it.id.clone()).collect(),
            handles: HashMap::new(),
            maybe_focused_id: None,
        }
    }

    fn index_of(&self, id: &str) -> SlotInputResult<usize> {
        let index = unwrap_or_err! {
            self.editable_ids.iter().position(|it| it.as_str() == id),
            or_else: || SlotInputError::slot_not_found(id)
        };
        Ok(index)
    }

    /// Returns the handle that was replaced, if any.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn register(&mut self, id: &str, handle: H) -> SlotInputResult<Option<H>> {
        let index = self.index_of(id)?;
        let key = self.editable_ids[index].clone();
        Ok(self.handles.insert(key, handle))
    }

    /// Returns the handle that was removed, if any. Unknown ids are ignored.
    pub fn unregister(&mut self, id: &str) -> Option<H> {
        if self.does_id_have_focus(id) {
            self.maybe_focused_id = None;
        }
        self.handles.remove(id)
    }

    /// Ref callback style: `Some` mounts (or replaces), `None` unmounts.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn set_handle(&mut self, id: &str, maybe_handle: Option<H>) -> SlotInputResult<()> {
        match maybe_handle {
            Some(handle) => {
                self.register(id, handle)?;
            }
            None => {
                self.index_of(id)?;
                self.unregister(id);
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool { self.handles.contains_key(id) }

    /// Get the id of the slot that was last handed focus, or reported as focused.
    #[must_use]
    pub fn focused_id(&self) -> Option<&SlotId> { self.maybe_focused_id.as_ref() }

    /// Check whether the given `id` currently has keyboard focus.
    #[must_use]
    pub fn does_id_have_focus(&self, id: &str) -> bool {
        self.maybe_focused_id
            .as_ref()
            .is_some_and(|it| it.as_str() == id)
    }

    /// Hand focus directly to `id`. Returns `false` if its handle isn't registered.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn focus(&mut self, id: &str) -> SlotInputResult<bool> {
        let index = self.index_of(id)?;
        let target = self.editable_ids[index].clone();
        Ok(self.try_request_focus(&target))
    }

    /// Record that the presentation layer moved focus to `id` on its own, eg: on a click.
    /// No handle is asked to take focus.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn notify_focused(&mut self, id: &str) -> SlotInputResult<()> {
        let index = self.index_of(id)?;
        self.maybe_focused_id = Some(self.editable_ids[index].clone());

        DEBUG_SLOT_INPUT.then(|| {
            tracing::debug!(message = "🎯 focus moved by presentation layer", id = %id);
        });

        Ok(())
    }

    /// Move focus to the editable slot after `id`.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn advance(&mut self, id: &str) -> SlotInputResult<FocusTransfer> {
        self.transfer(id, FocusDirection::Next)
    }

    /// Move focus to the editable slot before `id`.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn retreat(&mut self, id: &str) -> SlotInputResult<FocusTransfer> {
        self.transfer(id, FocusDirection::Previous)
    }

    fn transfer(
        &mut self,
        id: &str,
        direction: FocusDirection,
    ) -> SlotInputResult<FocusTransfer> {
        let index = self.index_of(id)?;
        let from = self.editable_ids[index].clone();

        let maybe_target_index = match direction {
            FocusDirection::Next => index.checked_add(1),
            FocusDirection::Previous => index.checked_sub(1),
        };
        let Some(target) = maybe_target_index
            .and_then(|it| self.editable_ids.get(it))
            .cloned()
        else {
            return Ok(FocusTransfer::NoNeighbor);
        };

        let transfer = if self.try_request_focus(&target) {
            FocusTransfer::Moved { from, to: target }
        } else {
            FocusTransfer::HandleNotRegistered { to: target }
        };

        DEBUG_SLOT_INPUT.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🎯 focus transfer",
                direction = %direction,
                id = %id,
                transfer = ?transfer
            );
        });

        Ok(transfer)
    }

    fn try_request_focus(&mut self, target: &SlotId) -> bool {
        match self.handles.get_mut(target) {
            Some(handle) => {
                handle.request_focus();
                self.maybe_focused_id = Some(target.clone());
                true
            }
            None => false,
        }
    }
}

mod debug_helpers {
    use super::*;

    impl<H: FocusHandle> Debug for FocusCoordinator<H> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let mut registered: Vec<&SlotId> = self.handles.keys().collect();
            registered.sort();
            f.debug_struct("FocusCoordinator")
                .field("editable_ids", &self.editable_ids)
                .field("registered", &registered)
                .field("maybe_focused_id", &self.maybe_focused_id)
                .finish()
        }
    }
}
