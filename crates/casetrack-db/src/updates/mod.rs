//! Partial-update builders.
//!
//! Outer `Option` marks whether a field is written at all. For nullable
//! columns the inner `Option` is the new value, so `Some(None)` clears it.

pub mod interrogation;
pub mod interview;
