// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use crate::{DEBUG_SLOT_INPUT, FocusCoordinator, FocusHandle, FocusTransfer, InputProps,
            SlotDefinition, SlotId, SlotInputError, SlotInputResult, SlotKey,
            SlotRegistry, SlotValueMap, grapheme_len, normalize, ok};

/// Who owns the slot values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum ControllerMode {
    /// The controller owns the values and commits every edit itself.
    #[strum(to_string = "uncontrolled")]
    Uncontrolled,
    /// An external owner is the source of truth. Edits are reported through the change
    /// callback, and the owner supplies values back via
    /// [`SlotStateController::set_controlled_values`].
    #[strum(to_string = "controlled")]
    Controlled,
}

/// Called with `(id, normalized_value)` for every edit in controlled mode.
pub type OnChangeFn = Box<dyn FnMut(&SlotId, &str)>;

/// Called with the composed value when the input becomes complete.
pub type OnCompleteFn = Box<dyn FnMut(&str)>;

/// Result of one [`SlotStateController::handle_edit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    pub id: SlotId,
    /// The upper cased, truncated value.
    pub value: String,
    /// `false` in controlled mode, where the change was only requested.
    pub committed: bool,
    /// `Some` only on the edit that moved the input into the complete state.
    pub maybe_completed_value: Option<String>,
    /// `Some` when the slot reached its max length and focus was asked to advance.
    pub maybe_focus_transfer: Option<FocusTransfer>,
}

/// One renderable piece of the input, in registry order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Editable {
        id: &'a SlotId,
        value: &'a str,
        max_length: usize,
        has_focus: bool,
    },
    Static(&'a str),
}

/// The slot state machine. Owns (uncontrolled) or mirrors (controlled) the value of each
/// editable slot, and drives a [`FocusCoordinator`].
///
/// Each editable slot has an implicit two state lifecycle per keystroke: below capacity,
/// and at capacity. Only the transition into "at capacity" has an effect (focus
/// advances). Focus retreats only on an explicit delete on an empty slot.
///
/// Completion is derived from the values and never stored. The completion callback fires
/// on the edit that takes the input from incomplete to complete, and not again while it
/// stays complete.
///
/// Everything runs synchronously to completion on the caller's thread.
pub struct SlotStateController<H: FocusHandle = ()> {
    registry: SlotRegistry,
    mode: ControllerMode,
    /// Always has an entry for every editable slot.
    internal_values: SlotValueMap,
    /// Partial. Entries here win over `internal_values`.
    controlled_values: SlotValueMap,
    maybe_on_change: Option<OnChangeFn>,
    maybe_on_complete: Option<OnCompleteFn>,
    focus_coordinator: FocusCoordinator<H>,
}

impl<H: FocusHandle> SlotStateController<H> {
    #[must_use]
    pub fn new_uncontrolled(registry: SlotRegistry) -> Self {
        Self::new(registry, ControllerMode::Uncontrolled, None)
    }

    pub fn new_controlled(
        registry: SlotRegistry,
        on_change: impl FnMut(&SlotId, &str) + 'static,
    ) -> Self {
        Self::new(registry, ControllerMode::Controlled, Some(Box::new(on_change)))
    }

    fn new(
        registry: SlotRegistry,
        mode: ControllerMode,
        maybe_on_change: Option<OnChangeFn>,
    ) -> Self {
        Self {
            internal_values: registry.initial_values(),
            controlled_values: SlotValueMap::new(),
            focus_coordinator: FocusCoordinator::new(&registry),
            registry,
            mode,
            maybe_on_change,
            maybe_on_complete: None,
        }
    }

    #[must_use]
    pub fn with_on_complete(mut self, on_complete: impl FnMut(&str) + 'static) -> Self {
        self.maybe_on_complete = Some(Box::new(on_complete));
        self
    }

    #[must_use]
    pub fn registry(&self) -> &SlotRegistry { &self.registry }

    #[must_use]
    pub fn mode(&self) -> ControllerMode { self.mode }
}

// Reads.
impl<H: FocusHandle> SlotStateController<H> {
    /// The controlled value for `id` if one was supplied, else the internal (or default)
    /// value. Never longer than the slot's max length.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn current_value(&self, id: &str) -> SlotInputResult<&str> {
        self.registry.editable_slot(id)?;
        Ok(self
            .controlled_values
            .get(id)
            .or_else(|| self.internal_values.get(id))
            .unwrap_or_default())
    }

    /// Same as [`current_value`](Self::current_value), named for form style callers.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn value_of(&self, id: &str) -> SlotInputResult<&str> { self.current_value(id) }

    /// Snapshot of the effective value of every editable slot, controlled values taking
    /// precedence.
    #[must_use]
    pub fn all_values(&self) -> SlotValueMap {
        let mut it = self.internal_values.clone();
        it.merge(&self.controlled_values);
        it
    }

    /// Concatenation of every editable slot's current value, in registry order.
    #[must_use]
    pub fn composed_value(&self) -> String { self.registry.compose(&self.all_values()) }

    #[must_use]
    pub fn is_complete(&self) -> bool { self.registry.is_complete(&self.all_values()) }

    /// Every slot in registry order, ready to render. Static slots carry their display
    /// text only.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment<'_>> {
        self.registry
            .definitions()
            .iter()
            .map(|definition| match definition {
                SlotDefinition::Editable(slot) => Segment::Editable {
                    id: &slot.id,
                    value: self
                        .controlled_values
                        .get(slot.id.as_str())
                        .or_else(|| self.internal_values.get(slot.id.as_str()))
                        .unwrap_or_default(),
                    max_length: slot.max_length,
                    has_focus: self.focus_coordinator.does_id_have_focus(slot.id.as_str()),
                },
                SlotDefinition::Static(slot) => Segment::Static(&slot.display_text),
            })
            .collect()
    }

    /// The prop bundle a presentation layer attaches to the rendered slot `id`.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn input_props(&self, id: &str) -> SlotInputResult<InputProps> {
        let editable_index = self.registry.index_of(id)?;
        self.input_props_at(editable_index)
    }

    /// Index based view of [`input_props`](Self::input_props), where `editable_index`
    /// counts editable slots only.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if there is no editable slot at that index.
    pub fn input_props_at(&self, editable_index: usize) -> SlotInputResult<InputProps> {
        let Some(slot) = self.registry.editable_slot_at(editable_index) else {
            return Err(SlotInputError::slot_not_found(format!("#{editable_index}")));
        };
        Ok(InputProps {
            id: slot.id.clone(),
            editable_index,
            max_length: slot.max_length,
            value: self.current_value(slot.id.as_str())?.to_string(),
            has_focus: self.focus_coordinator.does_id_have_focus(slot.id.as_str()),
        })
    }

    #[must_use]
    pub fn focus_coordinator(&self) -> &FocusCoordinator<H> { &self.focus_coordinator }
}

// Writes.
impl<H: FocusHandle> SlotStateController<H> {
    /// Apply one edit event for slot `id`, with the raw text the input surface now holds.
    ///
    /// 1. Upper case `raw` and truncate it to the slot's max length.
    /// 2. Controlled: report `(id, value)` through the change callback and leave local
    ///    state alone. Uncontrolled: commit.
    /// 3. Build the prospective value map. Controlled: the current one with this entry
    ///    replaced, which is what the owner is asked to supply. Uncontrolled: the
    ///    effective map after the commit, where a supplied controlled value still wins.
    /// 4. If the previous map was incomplete and the prospective one is complete, call
    ///    the completion callback once with the composed value.
    /// 5. If the value is at max length, advance focus. This is independent of 4, and
    ///    both happen when the last slot completes the input.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn handle_edit(&mut self, id: &str, raw: &str) -> SlotInputResult<EditOutcome> {
        let (slot_id, max_length) = {
            let slot = self.registry.editable_slot(id)?;
            (slot.id.clone(), slot.max_length)
        };

        let value = normalize(raw, max_length);
        let previous = self.all_values();

        let (committed, prospective) = match self.mode {
            ControllerMode::Controlled => {
                if let Some(on_change) = self.maybe_on_change.as_mut() {
                    on_change(&slot_id, value.as_str());
                }
                (false, previous.with_entry(&slot_id, value.as_str()))
            }
            // A controlled value for this slot still wins after the commit, so the
            // prospective map is the effective one.
            ControllerMode::Uncontrolled => {
                self.internal_values.insert(&slot_id, value.as_str());
                (true, self.all_values())
            }
        };

        let was_complete = self.registry.is_complete(&previous);
        let is_complete = self.registry.is_complete(&prospective);
        let maybe_completed_value =
            (!was_complete && is_complete).then(|| self.registry.compose(&prospective));

        if let (Some(completed_value), Some(on_complete)) =
            (&maybe_completed_value, self.maybe_on_complete.as_mut())
        {
            on_complete(completed_value.as_str());
        }

        let maybe_focus_transfer = if grapheme_len(&value) == max_length {
            Some(self.focus_coordinator.advance(slot_id.as_str())?)
        } else {
            None
        };

        DEBUG_SLOT_INPUT.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "⌨️ slot edited",
                mode = %self.mode,
                id = %slot_id,
                value = %value,
                committed = committed,
                maybe_completed_value = ?maybe_completed_value,
            );
        });

        Ok(EditOutcome {
            id: slot_id,
            value,
            committed,
            maybe_completed_value,
            maybe_focus_transfer,
        })
    }

    /// Delete pressed on slot `id`. Only the "already empty" case is handled here (focus
    /// retreats to the previous editable slot). Clearing characters from a non empty slot
    /// goes through [`handle_edit`](Self::handle_edit) like any other edit, so this
    /// returns `None` for those.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn handle_delete(&mut self, id: &str) -> SlotInputResult<Option<FocusTransfer>> {
        if !self.current_value(id)?.is_empty() {
            return Ok(None);
        }
        self.focus_coordinator.retreat(id).map(Some)
    }

    /// Key down on slot `id`. Only [`SlotKey::Backspace`] has an effect.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn handle_key(
        &mut self,
        id: &str,
        key: SlotKey,
    ) -> SlotInputResult<Option<FocusTransfer>> {
        match key {
            SlotKey::Backspace => self.handle_delete(id),
            SlotKey::Other => {
                self.registry.editable_slot(id)?;
                Ok(None)
            }
        }
    }

    /// Replace the internal values with the defaults, then apply `maybe_overrides`. No
    /// completion or focus effects. In controlled mode the external owner must reset its
    /// own source of truth, so this is ignored (and logged).
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if an override names an unknown slot. Nothing is
    /// changed in that case.
    pub fn reset(&mut self, maybe_overrides: Option<&SlotValueMap>) -> SlotInputResult<()> {
        if self.mode == ControllerMode::Controlled {
            tracing::warn!(
                message = "🔄 reset ignored, values are owned by the controlled owner"
            );
            return ok!();
        }

        let mut values = self.registry.initial_values();
        if let Some(overrides) = maybe_overrides {
            values.merge(&self.normalize_all(overrides)?);
        }
        self.internal_values = values;

        DEBUG_SLOT_INPUT.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "🔄 slots reset", values = ?self.internal_values);
        });

        ok!()
    }

    /// Merge `partial` into the values without completion or focus effects. Uncontrolled:
    /// committed. Controlled: each entry is reported through the change callback.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if an entry names an unknown slot. Nothing is
    /// changed or reported in that case.
    pub fn set_values(&mut self, partial: &SlotValueMap) -> SlotInputResult<()> {
        let normalized = self.normalize_all(partial)?;
        match self.mode {
            ControllerMode::Uncontrolled => self.internal_values.merge(&normalized),
            ControllerMode::Controlled => {
                if let Some(on_change) = self.maybe_on_change.as_mut() {
                    for (id, value) in normalized.iter() {
                        on_change(id, value);
                    }
                }
            }
        }
        ok!()
    }

    /// Supply the authoritative values from the external owner. `None` clears them, so
    /// that internal (default) values show through again. Values are normalized on the
    /// way in, so the length cap holds for whatever the owner passes.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if an entry names an unknown slot. The previous
    /// controlled values are kept in that case.
    pub fn set_controlled_values(
        &mut self,
        maybe_values: Option<&SlotValueMap>,
    ) -> SlotInputResult<()> {
        self.controlled_values = match maybe_values {
            Some(values) => self.normalize_all(values)?,
            None => SlotValueMap::new(),
        };
        ok!()
    }

    /// Supply a single authoritative value.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn set_controlled_value(&mut self, id: &str, value: &str) -> SlotInputResult<()> {
        let slot = self.registry.editable_slot(id)?;
        let value = normalize(value, slot.max_length);
        let slot_id = slot.id.clone();
        self.controlled_values.insert(slot_id, value);
        ok!()
    }

    /// For owners that only ever hold values which already went through
    /// [`normalize_all`](Self::normalize_all) or [`handle_edit`](Self::handle_edit).
    pub(crate) fn replace_controlled_values(&mut self, values: SlotValueMap) {
        self.controlled_values = values;
    }

    pub(crate) fn normalize_all(&self, values: &SlotValueMap) -> SlotInputResult<SlotValueMap> {
        values
            .iter()
            .map(|(id, value)| -> SlotInputResult<(SlotId, String)> {
                let slot = self.registry.editable_slot(id.as_str())?;
                Ok((slot.id.clone(), normalize(value, slot.max_length)))
            })
            .collect()
    }
}

// Focus handles.
impl<H: FocusHandle> SlotStateController<H> {
    /// Ref callback style mount (`Some`) / unmount (`None`) of the focus handle for `id`.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn set_focus_handle(
        &mut self,
        id: &str,
        maybe_handle: Option<H>,
    ) -> SlotInputResult<()> {
        self.focus_coordinator.set_handle(id, maybe_handle)
    }

    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn register_focus_handle(&mut self, id: &str, handle: H) -> SlotInputResult<Option<H>> {
        self.focus_coordinator.register(id, handle)
    }

    pub fn unregister_focus_handle(&mut self, id: &str) -> Option<H> {
        self.focus_coordinator.unregister(id)
    }

    /// Give focus to `id` directly, eg: to the first slot when the input is shown.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn focus(&mut self, id: &str) -> SlotInputResult<bool> { self.focus_coordinator.focus(id) }

    /// The presentation layer moved focus to `id` itself, eg: on a click. Keeps
    /// `has_focus` in [`segments`](Self::segments) and
    /// [`input_props`](Self::input_props) in sync.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn notify_focused(&mut self, id: &str) -> SlotInputResult<()> {
        self.focus_coordinator.notify_focused(id)
    }
}

mod debug_helpers {
    use super::*;

    impl<H: FocusHandle> Debug for SlotStateController<H> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SlotStateController")
                .field("mode", &self.mode)
                .field("registry", &self.registry)
                .field("internal_values", &self.internal_values)
                .field("controlled_values", &self.controlled_values)
                .field("has_on_change", &self.maybe_on_change.is_some())
                .field("has_on_complete", &self.maybe_on_complete.is_some())
                .field("focus_coordinator", &self.focus_coordinator)
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{RecordingFocusHandle, completion_recorder, plate_registry,
                               single_slot_registry};

    fn mounted_plate() -> (SlotStateController<RecordingFocusHandle>, RecordingFocusHandle, Rc<RefCell<Vec<String>>>) {
        let (on_complete, completions) = completion_recorder();
        let mut controller =
            SlotStateController::new_uncontrolled(plate_registry()).with_on_complete(on_complete);
        let recorder = RecordingFocusHandle::default();
        for id in ["a", "b"] {
            controller.register_focus_handle(id, recorder.for_slot(id)).unwrap();
        }
        (controller, recorder, completions)
    }

    #[test]
    fn test_edit_truncates_and_folds() {
        let (mut controller, _recorder, _completions) = mounted_plate();
        let outcome = controller.handle_edit("b", "xyzw").unwrap();

        assert_eq!(outcome.value, "XYZ");
        assert!(outcome.committed);
        assert_eq!(controller.current_value("b").unwrap(), "XYZ");
    }

    #[test]
    fn test_edit_below_capacity_keeps_focus() {
        let (mut controller, recorder, _completions) = mounted_plate();
        let outcome = controller.handle_edit("a", "1").unwrap();

        assert_eq!(outcome.maybe_focus_transfer, None);
        assert!(recorder.focused().is_empty());
    }

    #[test]
    fn test_completion_fires_once_per_transition() {
        let (mut controller, _recorder, completions) = mounted_plate();

        controller.handle_edit("a", "12").unwrap();
        assert!(completions.borrow().is_empty());

        let outcome = controller.handle_edit("b", "xyz").unwrap();
        assert_eq!(outcome.maybe_completed_value.as_deref(), Some("12XYZ"));

        // Still complete, different value. No second call.
        let outcome = controller.handle_edit("a", "34").unwrap();
        assert_eq!(outcome.maybe_completed_value, None);
        assert_eq!(*completions.borrow(), vec!["12XYZ".to_string()]);

        // Leave and come back, fires again.
        controller.handle_edit("b", "xy").unwrap();
        controller.handle_edit("b", "xyq").unwrap();
        assert_eq!(
            *completions.borrow(),
            vec!["12XYZ".to_string(), "34XYQ".to_string()]
        );
    }

    #[test]
    fn test_completion_order_is_registry_order() {
        let (mut controller, _recorder, completions) = mounted_plate();

        controller.handle_edit("b", "abc").unwrap();
        controller.handle_edit("a", "99").unwrap();

        assert_eq!(*completions.borrow(), vec!["99ABC".to_string()]);
        assert_eq!(controller.composed_value(), "99ABC");
        assert!(controller.is_complete());
    }

    #[test]
    fn test_no_completion_callback_is_fine() {
        let mut controller = SlotStateController::<()>::new_uncontrolled(single_slot_registry());
        let outcome = controller.handle_edit("x", "abcdef").unwrap();

        assert_eq!(outcome.value, "ABC");
        assert_eq!(outcome.maybe_completed_value.as_deref(), Some("ABC"));
        assert_eq!(outcome.maybe_focus_transfer, Some(FocusTransfer::NoNeighbor));
    }

    #[test]
    fn test_unknown_slot() {
        let (mut controller, _recorder, _completions) = mounted_plate();

        assert_eq!(
            controller.handle_edit("nope", "1"),
            Err(SlotInputError::SlotNotFound { id: "nope".into() })
        );
        assert!(controller.handle_delete("nope").is_err());
        assert!(controller.current_value("nope").is_err());
        assert!(controller.handle_key("nope", SlotKey::Other).is_err());
    }

    #[test]
    fn test_delete_on_non_empty_does_nothing() {
        let (mut controller, recorder, _completions) = mounted_plate();
        controller.handle_edit("b", "x").unwrap();

        assert_eq!(controller.handle_delete("b").unwrap(), None);
        assert!(recorder.focused().is_empty());
    }

    #[test]
    fn test_backspace_key_on_empty_retreats() {
        let (mut controller, recorder, _completions) = mounted_plate();

        let transfer = controller.handle_key("b", SlotKey::Backspace).unwrap();
        assert_eq!(
            transfer,
            Some(FocusTransfer::Moved {
                from: "b".into(),
                to: "a".into()
            })
        );
        assert_eq!(recorder.focused(), vec!["a"]);
        assert_eq!(controller.handle_key("b", SlotKey::Other).unwrap(), None);
    }

    #[test]
    fn test_reset_with_overrides() {
        let (mut controller, _recorder, _completions) = mounted_plate();
        controller.handle_edit("a", "12").unwrap();

        let overrides: SlotValueMap = [("b", "qrstu")].into_iter().collect();
        controller.reset(Some(&overrides)).unwrap();

        assert_eq!(controller.current_value("a").unwrap(), "");
        assert_eq!(controller.current_value("b").unwrap(), "QRS");
    }

    #[test]
    fn test_reset_with_unknown_override_changes_nothing() {
        let (mut controller, _recorder, _completions) = mounted_plate();
        controller.handle_edit("a", "12").unwrap();

        let overrides: SlotValueMap = [("zz", "1")].into_iter().collect();
        assert!(controller.reset(Some(&overrides)).is_err());
        assert_eq!(controller.current_value("a").unwrap(), "12");
    }

    #[test]
    fn test_set_values_has_no_side_effects() {
        let (mut controller, recorder, completions) = mounted_plate();
        let values: SlotValueMap = [("a", "12"), ("b", "xyz")].into_iter().collect();
        controller.set_values(&values).unwrap();

        assert_eq!(controller.composed_value(), "12XYZ");
        assert!(completions.borrow().is_empty());
        assert!(recorder.focused().is_empty());
    }

    #[test]
    fn test_controlled_precedence() {
        let registry = SlotRegistry::try_new([SlotDefinition::editable_with_default(
            "a", 3, "abc",
        )])
        .unwrap();
        let mut controller = SlotStateController::<()>::new_controlled(registry, |_, _| {});
        assert_eq!(controller.current_value("a").unwrap(), "ABC");

        controller.set_controlled_value("a", "zz").unwrap();
        assert_eq!(controller.current_value("a").unwrap(), "ZZ");
        assert_eq!(controller.value_of("a").unwrap(), "ZZ");

        controller.set_controlled_values(None).unwrap();
        assert_eq!(controller.current_value("a").unwrap(), "ABC");
    }

    #[test]
    fn test_controlled_value_in_uncontrolled_mode_gates_completion() {
        let (mut controller, _recorder, completions) = mounted_plate();
        controller.set_controlled_value("a", "1").unwrap();

        for (id, raw) in [("b", "xyz"), ("a", "34"), ("b", "xyq"), ("a", "56")] {
            let outcome = controller.handle_edit(id, raw).unwrap();
            assert!(outcome.committed);
            assert_eq!(outcome.maybe_completed_value, None);
        }

        assert!(completions.borrow().is_empty());
        assert_eq!(controller.current_value("a").unwrap(), "1");
        assert_eq!(controller.composed_value(), "1XYQ");
        assert!(!controller.is_complete());

        // Once the controlled value is gone the internal one shows through, and the next
        // edit that completes the input fires exactly once.
        controller.set_controlled_values(None).unwrap();
        assert!(controller.is_complete());
        controller.handle_edit("b", "xy").unwrap();
        let outcome = controller.handle_edit("b", "xyz").unwrap();
        assert_eq!(outcome.maybe_completed_value.as_deref(), Some("56XYZ"));
        assert_eq!(*completions.borrow(), vec!["56XYZ".to_string()]);
    }

    #[test]
    fn test_controlled_edit_requests_change_only() {
        let changes = Rc::new(RefCell::new(Vec::<(String, String)>::new()));
        let changes_clone = changes.clone();
        let mut controller = SlotStateController::<()>::new_controlled(
            plate_registry(),
            move |id: &SlotId, value: &str| {
                changes_clone
                    .borrow_mut()
                    .push((id.to_string(), value.to_string()));
            },
        );

        let outcome = controller.handle_edit("a", "1234").unwrap();

        assert!(!outcome.committed);
        assert_eq!(*changes.borrow(), vec![("a".to_string(), "12".to_string())]);
        // The owner didn't supply the value back, so nothing changed locally.
        assert_eq!(controller.current_value("a").unwrap(), "");
    }

    #[test]
    fn test_controlled_reset_is_ignored() {
        let mut controller = SlotStateController::<()>::new_controlled(plate_registry(), |_, _| {});
        controller.set_controlled_value("a", "12").unwrap();

        controller.reset(None).unwrap();
        assert_eq!(controller.current_value("a").unwrap(), "12");
    }

    #[test]
    fn test_segments_include_static_text() {
        let (mut controller, _recorder, _completions) = mounted_plate();
        controller.handle_edit("a", "12").unwrap();

        let segments = controller.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], Segment::Static("-"));
        assert!(matches!(
            segments[2],
            Segment::Editable {
                value: "",
                max_length: 3,
                has_focus: true,
                ..
            }
        ));
    }

    #[test]
    fn test_notify_focused_updates_has_focus() {
        let (mut controller, recorder, _completions) = mounted_plate();
        controller.focus("a").unwrap();
        assert!(controller.input_props("a").unwrap().has_focus);

        // Focus moved to "b" without the controller asking.
        controller.notify_focused("b").unwrap();
        assert!(!controller.input_props("a").unwrap().has_focus);
        assert!(controller.input_props("b").unwrap().has_focus);
        assert_eq!(recorder.focused(), vec!["a"]);

        assert!(matches!(
            controller.notify_focused("zz"),
            Err(SlotInputError::SlotNotFound { .. })
        ));
        assert!(controller.input_props("b").unwrap().has_focus);
    }

    #[test]
    fn test_input_props_by_id_and_index_agree() {
        let (mut controller, _recorder, _completions) = mounted_plate();
        controller.handle_edit("b", "q").unwrap();

        let by_id = controller.input_props("b").unwrap();
        let by_index = controller.input_props_at(1).unwrap();

        assert_eq!(by_id, by_index);
        assert_eq!(by_id.value, "Q");
        assert_eq!(by_id.max_length, 3);
        assert!(controller.input_props_at(2).is_err());
    }
}
