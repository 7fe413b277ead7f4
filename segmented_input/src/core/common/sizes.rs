// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated storage for the small strings and lists this crate deals with. Slot
//! ids and slot values are a handful of bytes each, and a layout rarely has more than
//! a few slots, so most of these never touch the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Slot ids like `otp1` or `plate_prefix` fit comfortably.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
