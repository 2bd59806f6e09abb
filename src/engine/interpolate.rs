//! The interpolation engine: lock-step folding of fragments and values.

use crate::error::{Result, TemplarError};
use crate::escape::{
    EscapeConfig, escape_attribute, escape_content, escape_default, escape_param,
    escape_script_string,
};

use super::json;
use super::types::{DispatchMode, Value};

/// A configured template renderer.
///
/// Holds the escaping configuration and the dispatch mode for untyped
/// values. Rendering is a pure function of the inputs: a `Templar` owns no
/// mutable state and may be shared freely across threads or invoked
/// recursively (an outer render embedding an inner render's output as a
/// [`Value::Verbatim`]).
///
/// # Examples
///
/// ```
/// use templar::{Templar, Value};
///
/// let out = Templar::html().interpolate(
///     &["<p>", "</p>"],
///     &[Value::content("This will be <escaped>")],
/// )?;
/// assert_eq!(out, "<p>This will be &lt;escaped&gt;</p>");
/// # Ok::<(), templar::TemplarError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Templar {
    config: EscapeConfig,
    dispatch: DispatchMode,
}

impl Templar {
    /// Create a renderer with the given escaping configuration.
    pub fn new(config: EscapeConfig) -> Self {
        Self {
            config,
            dispatch: DispatchMode::default(),
        }
    }

    /// The HTML configuration (`&#39;` apostrophe entity).
    pub fn html() -> Self {
        Self::new(EscapeConfig::html())
    }

    /// The XML configuration (`&apos;` apostrophe entity).
    pub fn xml() -> Self {
        Self::new(EscapeConfig::xml())
    }

    /// Set the dispatch mode used by [`Templar::interpolate_json`].
    pub fn with_dispatch(mut self, mode: DispatchMode) -> Self {
        self.dispatch = mode;
        self
    }

    /// The escaping configuration this renderer applies.
    pub fn config(&self) -> &EscapeConfig {
        &self.config
    }

    /// Interleave `values` with `fragments`, escaping each value according
    /// to its declared context.
    ///
    /// A template with N values takes exactly N + 1 fragments: the output
    /// is `fragments[0]`, then each escaped value followed by the next
    /// fragment, in order. A count mismatch is a caller bug and fails
    /// before any output is produced.
    pub fn interpolate(&self, fragments: &[&str], values: &[Value]) -> Result<String> {
        if fragments.len() != values.len() + 1 {
            return Err(TemplarError::FragmentMismatch {
                fragments: fragments.len(),
                values: values.len(),
            });
        }

        let mut out = String::with_capacity(fragments.iter().map(|f| f.len()).sum());
        out.push_str(fragments[0]);
        for (value, fragment) in values.iter().zip(&fragments[1..]) {
            self.push_escaped(&mut out, value);
            out.push_str(fragment);
        }
        Ok(out)
    }

    /// Like [`Templar::interpolate`], but classifying untyped JSON values.
    ///
    /// Strings escape with the Default policy, numbers insert their decimal
    /// form, and single-key tagged records dispatch on their first
    /// recognized key. How unclassifiable values behave depends on the
    /// dispatch mode set via [`Templar::with_dispatch`].
    pub fn interpolate_json(
        &self,
        fragments: &[&str],
        values: &[serde_json::Value],
    ) -> Result<String> {
        let mut typed = Vec::with_capacity(values.len());
        for value in values {
            typed.push(json::classify(value, self.dispatch)?);
        }
        self.interpolate(fragments, &typed)
    }

    fn push_escaped(&self, out: &mut String, value: &Value) {
        match value {
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Float(n) => out.push_str(&n.to_string()),
            Value::Text(raw) => out.push_str(&escape_default(raw, &self.config)),
            Value::Content(raw) => out.push_str(&escape_content(raw, &self.config)),
            Value::Attr(raw) => out.push_str(&escape_attribute(raw, &self.config)),
            Value::Param(raw) => out.push_str(&escape_param(raw, &self.config)),
            Value::ScriptString(raw) => out.push_str(&escape_script_string(raw)),
            Value::Verbatim(raw) => out.push_str(raw),
        }
    }
}

/// Render with the HTML configuration.
///
/// # Examples
///
/// ```
/// use templar::{html, Value};
///
/// let name = "Dr. <strange>";
/// let out = html(&["<h1>Hello, ", "!</h1>"], &[Value::text(name)])?;
/// assert_eq!(out, "<h1>Hello, Dr. &lt;strange&gt;!</h1>");
/// # Ok::<(), templar::TemplarError>(())
/// ```
pub fn html(fragments: &[&str], values: &[Value]) -> Result<String> {
    Templar::html().interpolate(fragments, values)
}

/// Render with the XML configuration.
pub fn xml(fragments: &[&str], values: &[Value]) -> Result<String> {
    Templar::xml().interpolate(fragments, values)
}
