// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Borrow,
          cmp::Ordering,
          collections::BTreeMap,
          hash::{Hash, Hasher},
          fmt::{Debug, Display, Formatter, Result}};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::InlineString;

/// Identifier of an editable slot, eg: `otp1` or `plate_prefix`. Unique within a
/// [`SlotRegistry`](crate::SlotRegistry).
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub InlineString);

// Comparison and hashing go through `str` so that `&str` lookups via `Borrow<str>` agree
// with `SlotId` keys.
impl PartialEq for SlotId {
    fn eq(&self, other: &Self) -> bool { self.as_str() == other.as_str() }
}

impl Eq for SlotId {}

impl PartialOrd for SlotId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for SlotId {
    fn cmp(&self, other: &Self) -> Ordering { self.as_str().cmp(other.as_str()) }
}

impl Hash for SlotId {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_str().hash(state); }
}

impl SlotId {
    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }
}

impl Borrow<str> for SlotId {
    fn borrow(&self) -> &str { self.as_str() }
}

impl AsRef<str> for SlotId {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl From<&str> for SlotId {
    fn from(it: &str) -> Self { Self(InlineString::from(it)) }
}

impl From<String> for SlotId {
    fn from(it: String) -> Self { Self(InlineString::from(it.as_str())) }
}

impl From<&SlotId> for SlotId {
    fn from(it: &SlotId) -> Self { it.clone() }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.as_str()) }
}

impl Debug for SlotId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{:?}", self.as_str()) }
}

/// Mapping from editable [`SlotId`] to its current value.
///
/// Every value written through the controller is [`normalize`]d, so for each entry the
/// length (in grapheme clusters) is between `0` and the slot's max length and the text
/// is upper case. A [`BTreeMap`] keeps iteration (and therefore `Debug` and JSON
/// output) stable; composition of the final value always follows registry order
/// instead.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotValueMap {
    inner: BTreeMap<SlotId, String>,
}

impl SlotValueMap {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> { self.inner.get(id).map(String::as_str) }

    /// Returns the previous value, if any.
    pub fn insert(&mut self, id: impl Into<SlotId>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(id.into(), value.into())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool { self.inner.contains_key(id) }

    #[must_use]
    pub fn len(&self) -> usize { self.inner.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotId, &str)> {
        self.inner.iter().map(|(id, value)| (id, value.as_str()))
    }

    /// Copy-on-write: a new map that is `self` with the entry for `id` replaced.
    #[must_use]
    pub fn with_entry(&self, id: impl Into<SlotId>, value: impl Into<String>) -> Self {
        let mut it = self.clone();
        it.insert(id, value);
        it
    }

    /// Overlay every entry of `other` on top of `self`.
    pub fn merge(&mut self, other: &SlotValueMap) {
        for (id, value) in other.iter() {
            self.insert(id, value);
        }
    }
}

impl<K: Into<SlotId>, V: Into<String>> FromIterator<(K, V)> for SlotValueMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut it = Self::new();
        for (id, value) in iter {
            it.insert(id, value);
        }
        it
    }
}

impl<'a> IntoIterator for &'a SlotValueMap {
    type Item = (&'a SlotId, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, SlotId, String>;

    fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
}

impl Debug for SlotValueMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

/// Length of `text` as a user sees it, in grapheme clusters.
#[must_use]
pub fn grapheme_len(text: &str) -> usize { text.graphemes(true).count() }

/// Case fold `raw` to upper case, then keep at most `max_length` grapheme clusters.
/// Excess input is dropped silently, which is the length capping policy for pasted or
/// over typed text. Idempotent.
///
/// Upper casing happens first because it can change the length (eg: `ß` becomes `SS`),
/// and the cap must hold on what is stored.
#[must_use]
pub fn normalize(raw: &str, max_length: usize) -> String {
    raw.to_uppercase()
        .graphemes(true)
        .take(max_length)
        .collect()
}
