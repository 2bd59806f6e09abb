//! Escaping configuration model.
//!
//! Every axis along which the policy set varies is an explicit field here,
//! so callers can store a rendering profile in their own config files
//! instead of being limited to the two built-in presets.

use serde::{Deserialize, Serialize};

/// Entity emitted when escaping an apostrophe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApostropheStyle {
    /// `&#39;` — valid in both HTML and XML (default).
    #[default]
    Numeric,
    /// `&apos;` — valid in XML and HTML5, but not HTML 4.
    Named,
}

impl ApostropheStyle {
    /// The literal entity text for this style.
    pub fn entity(&self) -> &'static str {
        match self {
            ApostropheStyle::Numeric => "&#39;",
            ApostropheStyle::Named => "&apos;",
        }
    }
}

/// Configuration for the escaping policy set.
///
/// The two named presets, [`EscapeConfig::html`] and [`EscapeConfig::xml`],
/// differ only in the apostrophe entity. The remaining fields relax the
/// stricter policies back to their minimal forms; the presets keep all of
/// them enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeConfig {
    /// Entity used for `'` in the Default and full-set Attribute policies.
    pub apostrophe: ApostropheStyle,

    /// Whether the Content policy also escapes `>` (in addition to `&`/`<`).
    pub content_escapes_greater_than: bool,

    /// Whether the Attribute policy applies the full Default-equivalent set,
    /// defending against `'` and `>` breakout in loosely quoted attributes.
    /// When disabled, only `&`, `<`, and `"` are escaped.
    pub attribute_escapes_full_set: bool,

    /// Whether the percent-encoded Query-parameter result is additionally
    /// passed through the Attribute policy before insertion.
    pub param_attribute_safe: bool,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self::html()
    }
}

impl EscapeConfig {
    /// The HTML preset: numeric apostrophe entity (`&#39;`).
    pub fn html() -> Self {
        Self {
            apostrophe: ApostropheStyle::Numeric,
            content_escapes_greater_than: true,
            attribute_escapes_full_set: true,
            param_attribute_safe: true,
        }
    }

    /// The XML preset: named apostrophe entity (`&apos;`).
    ///
    /// Identical to [`EscapeConfig::html`] in every other respect.
    pub fn xml() -> Self {
        Self {
            apostrophe: ApostropheStyle::Named,
            ..Self::html()
        }
    }
}
