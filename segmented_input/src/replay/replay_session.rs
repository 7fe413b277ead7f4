// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell,
          fmt::{Display, Formatter, Result},
          rc::Rc};

use crate::{ControllerMode, FocusHandle, ReplayCommand, Segment, SlotForm, SlotId,
            SlotInputResult, SlotRegistry, SlotStateController, grapheme_len};

pub const EMPTY_CELL_GLYPH: &str = "_";

/// Something observable that happened while applying a [`ReplayCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayEvent {
    Edited { id: SlotId, value: String },
    Focused { id: SlotId },
    Completed { value: String },
    Reset,
    Snapshot { rendered: String, is_complete: bool },
}

impl Display for ReplayEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ReplayEvent::Edited { id, value } => write!(f, "✏️  {id} = {value:?}"),
            ReplayEvent::Focused { id } => write!(f, "🎯 focus → {id}"),
            ReplayEvent::Completed { value } => write!(f, "✅ complete: {value}"),
            ReplayEvent::Reset => write!(f, "🔄 reset"),
            ReplayEvent::Snapshot {
                rendered,
                is_complete,
            } => write!(f, "📋 {rendered} (complete: {is_complete})"),
        }
    }
}

type EventLog = Rc<RefCell<Vec<ReplayEvent>>>;

/// Stands in for a rendered slot. Taking focus is recorded as a
/// [`ReplayEvent::Focused`].
#[derive(Debug)]
pub struct ReplayFocusHandle {
    id: SlotId,
    events: EventLog,
}

impl FocusHandle for ReplayFocusHandle {
    fn request_focus(&mut self) {
        self.events
            .borrow_mut()
            .push(ReplayEvent::Focused { id: self.id.clone() });
    }
}

#[derive(Debug)]
enum SlotDriver {
    Uncontrolled(SlotStateController<ReplayFocusHandle>),
    Controlled(SlotForm<ReplayFocusHandle>),
}

impl SlotDriver {
    fn controller(&self) -> &SlotStateController<ReplayFocusHandle> {
        match self {
            SlotDriver::Uncontrolled(controller) => controller,
            SlotDriver::Controlled(form) => form.controller(),
        }
    }

    fn controller_mut(&mut self) -> &mut SlotStateController<ReplayFocusHandle> {
        match self {
            SlotDriver::Uncontrolled(controller) => controller,
            SlotDriver::Controlled(form) => form.controller_mut(),
        }
    }
}

/// Headless segmented input, with every editable slot "mounted" and the first one
/// focused.
#[derive(Debug)]
pub struct ReplaySession {
    driver: SlotDriver,
    events: EventLog,
}

impl ReplaySession {
    /// The events from focusing the first slot are returned by the first
    /// [`apply`](Self::apply) (or [`drain_events`](Self::drain_events)).
    ///
    /// # Errors
    ///
    /// Only if the registry and the controller disagree about slot ids, which they
    /// don't.
    pub fn try_new(registry: SlotRegistry, mode: ControllerMode) -> SlotInputResult<Self> {
        let events: EventLog = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        let on_complete = move |value: &str| {
            events_clone.borrow_mut().push(ReplayEvent::Completed {
                value: value.to_string(),
            });
        };

        let mut driver = match mode {
            ControllerMode::Uncontrolled => SlotDriver::Uncontrolled(
                SlotStateController::new_uncontrolled(registry).with_on_complete(on_complete),
            ),
            ControllerMode::Controlled => {
                SlotDriver::Controlled(SlotForm::new(registry).with_on_complete(on_complete))
            }
        };

        let controller = driver.controller_mut();
        let ids: Vec<SlotId> = controller
            .registry()
            .editable_slots()
            .map(|it| it.id.clone())
            .collect();
        for id in &ids {
            let handle = ReplayFocusHandle {
                id: id.clone(),
                events: events.clone(),
            };
            controller.register_focus_handle(id.as_str(), handle)?;
        }
        if let Some(first) = ids.first() {
            controller.focus(first.as_str())?;
        }

        Ok(Self { driver, events })
    }

    #[must_use]
    pub fn mode(&self) -> ControllerMode { self.driver.controller().mode() }

    /// # Errors
    ///
    /// [`crate::SlotInputError::SlotNotFound`] if the command names an unknown slot.
    /// Events that happened before the error are kept for the next call.
    pub fn apply(&mut self, command: &ReplayCommand) -> SlotInputResult<Vec<ReplayEvent>> {
        match command {
            ReplayCommand::Edit { id, text } => {
                let start = self.events.borrow().len();
                let outcome = match &mut self.driver {
                    SlotDriver::Uncontrolled(controller) => {
                        controller.handle_edit(id.as_str(), text)?
                    }
                    SlotDriver::Controlled(form) => form.handle_edit(id.as_str(), text)?,
                };
                // Completion and focus events were logged while the edit ran, after the
                // value was known. Show the value first.
                self.events.borrow_mut().insert(start, ReplayEvent::Edited {
                    id: outcome.id,
                    value: outcome.value,
                });
            }
            ReplayCommand::Delete { id } => {
                self.driver.controller_mut().handle_delete(id.as_str())?;
            }
            ReplayCommand::Key { id, key } => {
                self.driver.controller_mut().handle_key(id.as_str(), *key)?;
            }
            ReplayCommand::Reset { overrides } => {
                match &mut self.driver {
                    SlotDriver::Uncontrolled(controller) => controller.reset(Some(overrides))?,
                    SlotDriver::Controlled(form) => form.reset(Some(overrides))?,
                }
                self.events.borrow_mut().push(ReplayEvent::Reset);
            }
            ReplayCommand::Show => {
                let event = ReplayEvent::Snapshot {
                    rendered: self.render(),
                    is_complete: self.driver.controller().is_complete(),
                };
                self.events.borrow_mut().push(event);
            }
        }
        Ok(self.drain_events())
    }

    pub fn drain_events(&mut self) -> Vec<ReplayEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Static text as is, editable slots padded to their max length with
    /// [`EMPTY_CELL_GLYPH`], and the focused slot in brackets. Eg: `12-[X__]`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut acc = String::new();
        for segment in self.driver.controller().segments() {
            match segment {
                Segment::Editable {
                    value,
                    max_length,
                    has_focus,
                    ..
                } => {
                    let padding =
                        EMPTY_CELL_GLYPH.repeat(max_length.saturating_sub(grapheme_len(value)));
                    if has_focus {
                        acc.push('[');
                    }
                    acc.push_str(value);
                    acc.push_str(&padding);
                    if has_focus {
                        acc.push(']');
                    }
                }
                Segment::Static(text) => acc.push_str(text),
            }
        }
        acc
    }
}
