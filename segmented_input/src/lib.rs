// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_segmented_input
//!
//! A reusable state machine for "segmented" inputs: a fixed, ordered sequence of short
//! text slots that together compose one logical value. Typical examples are a one time
//! passcode (`123` `456`) or a licence plate (`12` `-` `XYZ`), where some slots are
//! editable and some are fixed decorative text.
//!
//! The crate is rendering agnostic. A presentation layer (a TUI component, a GUI
//! widget, a test harness) forwards edit and key events into a
//! [`SlotStateController`], reads current values back out of it, and registers one
//! [`FocusHandle`] per editable slot so that the controller can move focus around.
//!
//! # Pieces
//!
//! | Type                    | Responsibility                                                  |
//! | :---------------------- | :-------------------------------------------------------------- |
//! | [`SlotRegistry`]        | Immutable ordered list of [`SlotDefinition`]s, lookup by id.    |
//! | [`SlotStateController`] | Normalizes edits, owns or mirrors values, detects completion.   |
//! | [`FocusCoordinator`]    | Moves focus forward on capacity, backward on delete-on-empty.   |
//! | [`SlotForm`]            | Form style owner that drives a controlled controller.           |
//!
//! # Example
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//! use r3bl_segmented_input::{SlotDefinition, SlotRegistry, SlotStateController};
//!
//! let registry = SlotRegistry::try_new([
//!     SlotDefinition::editable("a", 2),
//!     SlotDefinition::static_text("-"),
//!     SlotDefinition::editable("b", 3),
//! ])
//! .unwrap();
//!
//! let completed = Rc::new(RefCell::new(None));
//! let completed_clone = completed.clone();
//!
//! let mut controller = SlotStateController::<()>::new_uncontrolled(registry)
//!     .with_on_complete(move |value: &str| {
//!         *completed_clone.borrow_mut() = Some(value.to_string());
//!     });
//!
//! controller.handle_edit("a", "12").unwrap();
//! controller.handle_edit("b", "xyz").unwrap();
//!
//! assert_eq!(completed.borrow().as_deref(), Some("12XYZ"));
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod replay;
pub mod slot_input;

// Re-export.
pub use core::*;
pub use replay::*;
pub use slot_input::*;
