// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Unwrap the `$option`, and if `None` then run the `$next` closure which must return an
/// error. This macro must be called in a block that returns a `Result<_, _>`.
///
/// # Example
///
/// ```
/// use r3bl_segmented_input::{SlotInputError, SlotInputResult, unwrap_or_err};
///
/// fn first_char(it: &str) -> SlotInputResult<char> {
///     let ch = unwrap_or_err! {
///         it.chars().next(),
///         or_else: || SlotInputError::SlotNotFound { id: it.into() }
///     };
///     Ok(ch)
/// }
///
/// assert!(first_char("").is_err());
/// ```
#[macro_export]
macro_rules! unwrap_or_err {
    ($option:expr, or_else: $next:expr) => {
        match $option {
            Some(value) => value,
            None => return Err($next()),
        }
    };
}

/// Shorthand for `Ok(())` and `Ok(value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
