//! Interpolation engine for templar.
//!
//! The engine walks an ordered list of static fragments and an ordered list
//! of values in lock-step, escapes each value according to its declared
//! context, and folds the result into one output string. See
//! [`Templar::interpolate`] for the contract.

mod interpolate;
mod json;
mod types;


// Re-export public API
pub use interpolate::{Templar, html, xml};
pub use types::{DispatchMode, Value};
