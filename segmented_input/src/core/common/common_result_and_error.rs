// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// Used at the outer edges of the crate (the logging setup, the `slot_replay` binary)
/// where any [`miette::Diagnostic`] can be bubbled up with `?`.
///
/// Library operations on slots return the more specific
/// [`SlotInputResult`](crate::SlotInputResult) so callers can match on
/// [`SlotInputError`](crate::SlotInputError) variants.
pub type CommonResult<T> = miette::Result<T>;
