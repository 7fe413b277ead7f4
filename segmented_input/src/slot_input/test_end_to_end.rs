// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Full edit sessions, driven the way a presentation layer would drive them.

use pretty_assertions::assert_eq;

use crate::{FocusTransfer, SlotForm, SlotKey, SlotStateController,
            test_fixtures::{RecordingFocusHandle, completion_recorder, plate_registry,
                            single_slot_registry}};

fn mount_all(controller: &mut SlotStateController<RecordingFocusHandle>) -> RecordingFocusHandle {
    let recorder = RecordingFocusHandle::default();
    let ids: Vec<String> = controller
        .registry()
        .editable_slots()
        .map(|it| it.id.to_string())
        .collect();
    for id in ids {
        controller
            .set_focus_handle(&id, Some(recorder.for_slot(&id)))
            .unwrap();
    }
    recorder
}

#[test]
fn test_plate_session() {
    let (on_complete, completions) = completion_recorder();
    let mut controller =
        SlotStateController::new_uncontrolled(plate_registry()).with_on_complete(on_complete);
    let recorder = mount_all(&mut controller);
    controller.focus("a").unwrap();

    // Filling "a" hands focus to "b", skipping the static "-".
    let outcome = controller.handle_edit("a", "12").unwrap();
    assert_eq!(controller.current_value("a").unwrap(), "12");
    assert_eq!(
        outcome.maybe_focus_transfer,
        Some(FocusTransfer::Moved {
            from: "a".into(),
            to: "b".into()
        })
    );
    assert_eq!(recorder.focused(), vec!["a", "b"]);

    // Delete on the still empty "b" goes back to "a".
    controller.handle_key("b", SlotKey::Backspace).unwrap();
    assert_eq!(recorder.focused(), vec!["a", "b", "a"]);
    assert!(controller.focus_coordinator().does_id_have_focus("a"));

    // Filling "b" completes the input.
    let outcome = controller.handle_edit("b", "XYZ").unwrap();
    assert_eq!(controller.current_value("b").unwrap(), "XYZ");
    assert_eq!(outcome.maybe_completed_value.as_deref(), Some("12XYZ"));
    assert_eq!(*completions.borrow(), vec!["12XYZ".to_string()]);

    // "b" is the last editable slot, so there's nowhere to advance to.
    assert_eq!(outcome.maybe_focus_transfer, Some(FocusTransfer::NoNeighbor));

    // Delete on a non empty slot doesn't move focus.
    assert_eq!(controller.handle_delete("b").unwrap(), None);
}

#[test]
fn test_single_slot_session() {
    let (on_complete, completions) = completion_recorder();
    let mut controller =
        SlotStateController::new_uncontrolled(single_slot_registry()).with_on_complete(on_complete);
    let recorder = mount_all(&mut controller);

    controller.handle_edit("x", "abcdef").unwrap();

    assert_eq!(controller.current_value("x").unwrap(), "ABC");
    assert_eq!(*completions.borrow(), vec!["ABC".to_string()]);
    assert!(recorder.focused().is_empty());

    // Delete on the only slot has no previous slot to go to.
    controller.handle_edit("x", "").unwrap();
    assert_eq!(
        controller.handle_delete("x").unwrap(),
        Some(FocusTransfer::NoNeighbor)
    );
}

#[test]
fn test_plate_session_through_form() {
    let (on_complete, completions) = completion_recorder();
    let mut form = SlotForm::<RecordingFocusHandle>::new(plate_registry())
        .with_on_complete(on_complete);
    let recorder = mount_all(form.controller_mut());

    form.handle_edit("a", "12").unwrap();
    form.handle_edit("b", "xyz").unwrap();

    assert_eq!(form.get_value("a").unwrap(), "12");
    assert_eq!(form.get_value("b").unwrap(), "XYZ");
    assert_eq!(*completions.borrow(), vec!["12XYZ".to_string()]);
    assert_eq!(recorder.focused(), vec!["b"]);

    // Clearing and refilling through the form fires completion again.
    form.handle_edit("b", "").unwrap();
    form.handle_edit("b", "abc").unwrap();
    assert_eq!(
        *completions.borrow(),
        vec!["12XYZ".to_string(), "12ABC".to_string()]
    );
}
