// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell,
          fmt::{Debug, Formatter, Result},
          rc::Rc};

use crate::{DEBUG_SLOT_INPUT, EditOutcome, FocusHandle, FocusTransfer, SlotId,
            SlotInputResult, SlotKey, SlotRegistry, SlotStateController, SlotValueMap,
            normalize, ok};

/// Form style owner of the slot values. It wraps a controlled [`SlotStateController`]
/// and is the external source of truth that the controller reports changes to.
///
/// Every write goes into the shared store first, then the store is supplied back to the
/// controller, so [`watch`](Self::watch) and the controller always agree.
pub struct SlotForm<H: FocusHandle = ()> {
    store: Rc<RefCell<SlotValueMap>>,
    controller: SlotStateController<H>,
}

impl<H: FocusHandle> SlotForm<H> {
    #[must_use]
    pub fn new(registry: SlotRegistry) -> Self {
        let store = Rc::new(RefCell::new(registry.initial_values()));
        let store_clone = store.clone();
        let controller =
            SlotStateController::new_controlled(registry, move |id: &SlotId, value: &str| {
                store_clone.borrow_mut().insert(id, value);
            });
        let mut it = Self { store, controller };
        it.sync();
        it
    }

    #[must_use]
    pub fn with_on_complete(mut self, on_complete: impl FnMut(&str) + 'static) -> Self {
        self.controller = self.controller.with_on_complete(on_complete);
        self
    }

    fn sync(&mut self) {
        let values = self.store.borrow().clone();
        self.controller.replace_controlled_values(values);
    }

    #[must_use]
    pub fn controller(&self) -> &SlotStateController<H> { &self.controller }

    /// For focus handle registration and other controller level calls.
    pub fn controller_mut(&mut self) -> &mut SlotStateController<H> { &mut self.controller }
}

// Reads.
impl<H: FocusHandle> SlotForm<H> {
    /// Current value of every editable slot.
    #[must_use]
    pub fn watch(&self) -> SlotValueMap { self.controller.all_values() }

    /// # Errors
    ///
    /// [`crate::SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn watch_slot(&self, id: &str) -> SlotInputResult<String> {
        Ok(self.controller.value_of(id)?.to_string())
    }

    /// Snapshot of the store.
    #[must_use]
    pub fn get_values(&self) -> SlotValueMap { self.store.borrow().clone() }

    /// # Errors
    ///
    /// [`crate::SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn get_value(&self, id: &str) -> SlotInputResult<String> {
        self.controller.registry().editable_slot(id)?;
        Ok(self.store.borrow().get(id).unwrap_or_default().to_string())
    }
}

// Writes.
impl<H: FocusHandle> SlotForm<H> {
    /// Programmatic write. Normalized like an edit, but with no completion or focus
    /// effects.
    ///
    /// # Errors
    ///
    /// [`crate::SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn set_value(&mut self, id: &str, value: &str) -> SlotInputResult<()> {
        let slot = self.controller.registry().editable_slot(id)?;
        let value = normalize(value, slot.max_length);
        self.store.borrow_mut().insert(&slot.id, value);
        self.sync();
        ok!()
    }

    /// Store ← defaults, then `maybe_overrides`.
    ///
    /// # Errors
    ///
    /// [`crate::SlotInputError::SlotNotFound`] if an override names an unknown slot.
    /// Nothing is changed in that case.
    pub fn reset(&mut self, maybe_overrides: Option<&SlotValueMap>) -> SlotInputResult<()> {
        let mut values = self.controller.registry().initial_values();
        if let Some(overrides) = maybe_overrides {
            values.merge(&self.controller.normalize_all(overrides)?);
        }
        *self.store.borrow_mut() = values;
        self.sync();

        DEBUG_SLOT_INPUT.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "🔄 form reset", values = ?self.store.borrow());
        });

        ok!()
    }

    /// # Errors
    ///
    /// See [`SlotStateController::handle_edit`].
    pub fn handle_edit(&mut self, id: &str, raw: &str) -> SlotInputResult<EditOutcome> {
        let outcome = self.controller.handle_edit(id, raw)?;
        self.sync();
        Ok(outcome)
    }

    /// # Errors
    ///
    /// See [`SlotStateController::handle_delete`].
    pub fn handle_delete(&mut self, id: &str) -> SlotInputResult<Option<FocusTransfer>> {
        self.controller.handle_delete(id)
    }

    /// # Errors
    ///
    /// See [`SlotStateController::handle_key`].
    pub fn handle_key(
        &mut self,
        id: &str,
        key: SlotKey,
    ) -> SlotInputResult<Option<FocusTransfer>> {
        self.controller.handle_key(id, key)
    }
}

mod debug_helpers {
    use super::*;

    impl<H: FocusHandle> Debug for SlotForm<H> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.debug_struct("SlotForm")
                .field("store", &self.store.borrow())
                .field("controller", &self.controller)
                .finish()
        }
    }
}
