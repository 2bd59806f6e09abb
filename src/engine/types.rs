//! Value and dispatch-mode definitions for the interpolation engine.

use serde::{Deserialize, Serialize};

/// A single interpolated value, paired with its declared escaping context.
///
/// The variant chooses the policy; the exhaustive `match` in the engine
/// replaces the runtime key inspection of dynamically typed callers, so an
/// unhandled context is a compile error rather than silently empty output.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer, inserted via its decimal form, never escaped.
    Int(i64),
    /// A float, inserted via its canonical `Display` form, never escaped.
    Float(f64),
    /// A plain string, escaped with the Default policy (safe everywhere).
    Text(String),
    /// Text inserted between tags; escaped with the Content policy.
    Content(String),
    /// Text inside a double-quoted attribute; escaped with the Attribute policy.
    Attr(String),
    /// A URL query parameter; escaped with the Query-parameter policy.
    Param(String),
    /// A string literal inside a `<script>` element; escaped with the
    /// Script-string policy.
    ScriptString(String),
    /// Trusted, pre-escaped markup inserted as-is.
    ///
    /// This is the sanctioned composition mechanism: the output of one
    /// render may be embedded in an outer render as a `Verbatim` value.
    Verbatim(String),
}

impl Value {
    /// A plain string value (Default policy).
    pub fn text(raw: impl Into<String>) -> Self {
        Value::Text(raw.into())
    }

    /// A between-tags text value (Content policy).
    pub fn content(raw: impl Into<String>) -> Self {
        Value::Content(raw.into())
    }

    /// An attribute value (Attribute policy).
    pub fn attr(raw: impl Into<String>) -> Self {
        Value::Attr(raw.into())
    }

    /// A query-parameter value (Query-parameter policy).
    pub fn param(raw: impl Into<String>) -> Self {
        Value::Param(raw.into())
    }

    /// A script string literal value (Script-string policy).
    pub fn script_string(raw: impl Into<String>) -> Self {
        Value::ScriptString(raw.into())
    }

    /// A trusted markup value, inserted without transformation.
    pub fn verbatim(raw: impl Into<String>) -> Self {
        Value::Verbatim(raw.into())
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::Text(raw.to_string())
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        Value::Text(raw)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

/// How the dynamic layer treats JSON values it cannot classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Compatibility behavior: an unclassifiable value contributes nothing
    /// to the output.
    #[default]
    Lenient,
    /// An unclassifiable value surfaces an error instead of vanishing.
    Strict,
}
