// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{InlineVec, SlotId, SlotInputError, SlotInputResult, SlotValueMap,
            grapheme_len, normalize, unwrap_or_err};

/// A slot that holds a bounded length string which is part of the composed value.
///
/// The serde names match the field shape that form libraries tend to use, eg:
/// `{"type": "input", "name": "otp1", "length": 3, "defaultValue": "12"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableSlot {
    #[serde(rename = "name")]
    pub id: SlotId,
    #[serde(rename = "length")]
    pub max_length: usize,
    #[serde(rename = "defaultValue", default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
}

/// Purely decorative text between editable slots, eg: the `-` in `12-XYZ`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticSlot {
    #[serde(rename = "value")]
    pub display_text: String,
}

/// One position in the ordered sequence that composes the value. Static slots carry no
/// value and never take part in composition or completion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SlotDefinition {
    #[serde(rename = "input")]
    Editable(EditableSlot),
    #[serde(rename = "static")]
    Static(StaticSlot),
}

impl SlotDefinition {
    pub fn editable(id: impl Into<SlotId>, max_length: usize) -> Self {
        Self::Editable(EditableSlot {
            id: id.into(),
            max_length,
            default_value: String::new(),
        })
    }

    pub fn editable_with_default(
        id: impl Into<SlotId>,
        max_length: usize,
        default_value: impl Into<String>,
    ) -> Self {
        Self::Editable(EditableSlot {
            id: id.into(),
            max_length,
            default_value: default_value.into(),
        })
    }

    pub fn static_text(display_text: impl Into<String>) -> Self {
        Self::Static(StaticSlot {
            display_text: display_text.into(),
        })
    }

    #[must_use]
    pub fn as_editable(&self) -> Option<&EditableSlot> {
        match self {
            SlotDefinition::Editable(it) => Some(it),
            SlotDefinition::Static(_) => None,
        }
    }
}

/// The ordered, immutable list of [`SlotDefinition`]s for one segmented input. This is
/// a pure lookup table: once [`SlotRegistry::try_new`] succeeds nothing can be added,
/// removed or reordered.
///
/// Editable slots have two positions: their position in the full sequence, and their
/// position among editable slots only (the "editable index"). Focus moves and the
/// index based [`input_props_at`](crate::SlotStateController::input_props_at) view use
/// the latter, so static slots never shift the numbering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotRegistry {
    definitions: InlineVec<SlotDefinition>,
    /// Positions in `definitions` of each editable slot, in order.
    editable_positions: InlineVec<usize>,
}

impl SlotRegistry {
    /// Validates and freezes the sequence.
    ///
    /// Default values are case folded here, so that seeded values obey the same rules as
    /// typed ones.
    ///
    /// # Errors
    ///
    /// - [`SlotInputError::DuplicateSlotId`] if two editable slots share an id.
    /// - [`SlotInputError::ZeroMaxLength`] if an editable slot can't hold anything.
    /// - [`SlotInputError::DefaultValueTooLong`] if a default exceeds its max length.
    /// - [`SlotInputError::EmptyRegistry`] if there are no editable slots.
    pub fn try_new(
        definitions: impl IntoIterator<Item = SlotDefinition>,
    ) -> SlotInputResult<Self> {
        let mut seen_ids = HashSet::new();
        let mut editable_positions = InlineVec::new();
        let mut acc = InlineVec::new();

        for (position, definition) in definitions.into_iter().enumerate() {
            let definition = match definition {
                SlotDefinition::Editable(slot) => {
                    if slot.max_length == 0 {
                        return Err(SlotInputError::ZeroMaxLength { id: slot.id });
                    }
                    if !seen_ids.insert(slot.id.clone()) {
                        return Err(SlotInputError::DuplicateSlotId { id: slot.id });
                    }
                    let folded_default = slot.default_value.to_uppercase();
                    if grapheme_len(&folded_default) > slot.max_length {
                        return Err(SlotInputError::DefaultValueTooLong {
                            id: slot.id,
                            default_value: slot.default_value,
                            max_length: slot.max_length,
                        });
                    }
                    editable_positions.push(position);
                    SlotDefinition::Editable(EditableSlot {
                        default_value: normalize(&folded_default, slot.max_length),
                        ..slot
                    })
                }
                it @ SlotDefinition::Static(_) => it,
            };
            acc.push(definition);
        }

        if editable_positions.is_empty() {
            return Err(SlotInputError::EmptyRegistry);
        }

        Ok(Self {
            definitions: acc,
            editable_positions,
        })
    }

    /// Every slot, static ones included, in order.
    #[must_use]
    pub fn definitions(&self) -> &[SlotDefinition] { &self.definitions }

    /// The editable slots in order. Static slots are skipped.
    pub fn editable_slots(&self) -> impl Iterator<Item = &EditableSlot> {
        self.definitions.iter().filter_map(SlotDefinition::as_editable)
    }

    #[must_use]
    pub fn editable_count(&self) -> usize { self.editable_positions.len() }

    /// Position of `id` among editable slots only.
    ///
    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn index_of(&self, id: &str) -> SlotInputResult<usize> {
        let index = unwrap_or_err! {
            self.editable_slots().position(|slot| slot.id.as_str() == id),
            or_else: || SlotInputError::slot_not_found(id)
        };
        Ok(index)
    }

    /// # Errors
    ///
    /// [`SlotInputError::SlotNotFound`] if `id` is not an editable slot.
    pub fn editable_slot(&self, id: &str) -> SlotInputResult<&EditableSlot> {
        let slot = unwrap_or_err! {
            self.editable_slots().find(|slot| slot.id.as_str() == id),
            or_else: || SlotInputError::slot_not_found(id)
        };
        Ok(slot)
    }

    #[must_use]
    pub fn editable_slot_at(&self, index: usize) -> Option<&EditableSlot> {
        self.editable_positions
            .get(index)
            .and_then(|position| self.definitions.get(*position))
            .and_then(SlotDefinition::as_editable)
    }

    /// Translates an editable index into a [`SlotId`]. This is what index based
    /// presentation layers use to talk to the id keyed controller.
    #[must_use]
    pub fn editable_id_at(&self, index: usize) -> Option<&SlotId> {
        self.editable_slot_at(index).map(|slot| &slot.id)
    }

    /// A [`SlotValueMap`] seeded from every editable slot's default value (empty if none).
    #[must_use]
    pub fn initial_values(&self) -> SlotValueMap {
        self.editable_slots()
            .map(|slot| (&slot.id, slot.default_value.as_str()))
            .collect()
    }

    /// Concatenation of the values of every editable slot in registry order. Missing
    /// entries contribute nothing, as do static slots.
    #[must_use]
    pub fn compose(&self, values: &SlotValueMap) -> String {
        self.editable_slots()
            .filter_map(|slot| values.get(slot.id.as_str()))
            .collect()
    }

    /// `true` when every editable slot's value is exactly at its max length.
    #[must_use]
    pub fn is_complete(&self, values: &SlotValueMap) -> bool {
        self.editable_slots().all(|slot| {
            values
                .get(slot.id.as_str())
                .is_some_and(|value| grapheme_len(value) == slot.max_length)
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plate_registry() -> SlotRegistry {
        SlotRegistry::try_new([
            SlotDefinition::editable("a", 2),
            SlotDefinition::static_text("-"),
            SlotDefinition::editable_with_default("b", 3, "xy"),
        ])
        .unwrap()
    }

    #[test]
    fn test_editable_slots_skip_static() {
        let registry = plate_registry();
        let ids: Vec<&str> = registry.editable_slots().map(|it| it.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(registry.definitions().len(), 3);
        assert_eq!(registry.editable_count(), 2);
    }

    #[test]
    fn test_index_of_uses_editable_only_ordering() {
        let registry = plate_registry();
        assert_eq!(registry.index_of("a").unwrap(), 0);
        assert_eq!(registry.index_of("b").unwrap(), 1);
        assert_eq!(
            registry.index_of("-"),
            Err(SlotInputError::SlotNotFound { id: "-".into() })
        );
    }

    #[test]
    fn test_editable_id_at() {
        let registry = plate_registry();
        assert_eq!(registry.editable_id_at(1), Some(&SlotId::from("b")));
        assert_eq!(registry.editable_id_at(2), None);
    }

    #[test]
    fn test_initial_values_are_seeded_and_folded() {
        let registry = plate_registry();
        let values = registry.initial_values();
        assert_eq!(values.get("a"), Some(""));
        assert_eq!(values.get("b"), Some("XY"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_compose_and_is_complete() {
        let registry = plate_registry();
        let values: SlotValueMap = [("b", "XYZ"), ("a", "12")].into_iter().collect();
        assert_eq!(registry.compose(&values), "12XYZ");
        assert!(registry.is_complete(&values));
        assert!(!registry.is_complete(&registry.initial_values()));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let result = SlotRegistry::try_new([
            SlotDefinition::editable("a", 2),
            SlotDefinition::editable("a", 3),
        ]);
        assert_eq!(result, Err(SlotInputError::DuplicateSlotId { id: "a".into() }));
    }

    #[test]
    fn test_zero_max_length_is_rejected() {
        let result = SlotRegistry::try_new([SlotDefinition::editable("a", 0)]);
        assert_eq!(result, Err(SlotInputError::ZeroMaxLength { id: "a".into() }));
    }

    #[test]
    fn test_default_too_long_is_rejected() {
        let result =
            SlotRegistry::try_new([SlotDefinition::editable_with_default("a", 2, "abc")]);
        assert!(matches!(
            result,
            Err(SlotInputError::DefaultValueTooLong { max_length: 2, .. })
        ));
    }

    #[test]
    fn test_static_only_registry_is_rejected() {
        let result = SlotRegistry::try_new([SlotDefinition::static_text("-")]);
        assert_eq!(result, Err(SlotInputError::EmptyRegistry));
    }
}
