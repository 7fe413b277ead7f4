// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell, rc::Rc};

use crate::{FocusHandle, SlotDefinition, SlotId, SlotRegistry};

/// Focus handle that appends its slot id to a shared log whenever it's asked to take
/// focus. Clones made with [`RecordingFocusHandle::for_slot`] share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingFocusHandle {
    maybe_slot_id: Option<SlotId>,
    log: Rc<RefCell<Vec<SlotId>>>,
}

impl RecordingFocusHandle {
    pub fn for_slot(&self, id: &str) -> Self {
        Self {
            maybe_slot_id: Some(id.into()),
            log: self.log.clone(),
        }
    }

    pub fn focused(&self) -> Vec<String> {
        self.log.borrow().iter().map(ToString::to_string).collect()
    }
}

impl FocusHandle for RecordingFocusHandle {
    fn request_focus(&mut self) {
        if let Some(id) = &self.maybe_slot_id {
            self.log.borrow_mut().push(id.clone());
        }
    }
}

/// `[Editable("a", 2), Static("-"), Editable("b", 3)]`
pub fn plate_registry() -> SlotRegistry {
    SlotRegistry::try_new([
        SlotDefinition::editable("a", 2),
        SlotDefinition::static_text("-"),
        SlotDefinition::editable("b", 3),
    ])
    .unwrap()
}

/// `[Editable("x", 3)]`
pub fn single_slot_registry() -> SlotRegistry {
    SlotRegistry::try_new([SlotDefinition::editable("x", 3)]).unwrap()
}

/// A completion callback plus the list it records into.
pub fn completion_recorder() -> (impl FnMut(&str) + 'static, Rc<RefCell<Vec<String>>>) {
    let completions = Rc::new(RefCell::new(Vec::new()));
    let completions_clone = completions.clone();
    let on_complete = move |value: &str| {
        completions_clone.borrow_mut().push(value.to_string());
    };
    (on_complete, completions)
}
