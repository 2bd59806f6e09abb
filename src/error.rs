//! Error types for templar.
//!
//! Uses thiserror for derive macros and provides caller-actionable error messages.
//! The taxonomy is deliberately small: escaping policies are total functions and
//! never fail, so errors only arise from caller contract violations and from
//! strict-mode classification of untyped values.

use thiserror::Error;

/// Main error type for template rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplarError {
    /// The fragment and value counts do not line up.
    ///
    /// A template with N values must supply exactly N + 1 static fragments.
    /// Truncating to the shorter list would silently drop trailing markup,
    /// so the mismatch is surfaced before any output is produced.
    #[error("fragment/value mismatch: {fragments} fragments cannot interleave {values} values (need {values} + 1 fragments)")]
    FragmentMismatch {
        /// Number of static fragments supplied.
        fragments: usize,
        /// Number of interpolated values supplied.
        values: usize,
    },

    /// Strict-mode classification found a tagged record with no recognized key.
    #[error("unrecognized value tag '{tag}'")]
    UnrecognizedTag {
        /// The first key of the offending record (empty for an empty record).
        tag: String,
    },

    /// Strict-mode classification found a value with no escaping context.
    ///
    /// Raised for JSON nulls, booleans, and arrays, and for recognized tags
    /// whose payload is not a string.
    #[error("cannot interpolate a JSON {kind} value")]
    UnsupportedValue {
        /// The JSON type name of the offending value.
        kind: &'static str,
    },
}

/// Result type alias for templar operations.
pub type Result<T> = std::result::Result<T, TemplarError>;
