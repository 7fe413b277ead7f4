// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enables or disables debug logging for edits, resets, and focus transfers. The logs
/// only go somewhere once a subscriber is installed, eg: via
/// [`crate::try_initialize_logging_global`].
pub const DEBUG_SLOT_INPUT: bool = true;

// Attach sources.
pub mod focus_coordinator;
pub mod form_adapter;
pub mod input_props;
pub mod layout_parser;
pub mod slot_input_error;
pub mod slot_registry;
pub mod slot_state_controller;
pub mod slot_value_map;

// Re-export.
pub use focus_coordinator::*;
pub use form_adapter::*;
pub use input_props::*;
pub use layout_parser::*;
pub use slot_input_error::*;
pub use slot_registry::*;
pub use slot_state_controller::*;
pub use slot_value_map::*;

// Test fixtures.
#[cfg(test)]
pub mod test_fixtures;

// Tests.
#[cfg(test)]
mod test_end_to_end;
