//! The escaping policies.
//!
//! Each policy is a total, pure function from a raw string to a string safe
//! for one markup placement context. Policies are written as a single pass
//! over the input, which makes the classic ordering hazard impossible: a
//! literal `&` in the input can never be re-escaped by a later substitution,
//! because every character is inspected exactly once.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::config::EscapeConfig;

/// Characters exempt from percent-encoding: the unreserved URI set
/// (letters, digits, `-`, `_`, `.`, `~`). Everything else becomes `%XX`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape a plain string for insertion anywhere in a document.
///
/// Replaces `&`, `<`, `>`, `'`, and `"`. The apostrophe entity comes from
/// the configuration; it is the only substitution that differs between the
/// HTML and XML presets.
pub fn escape_default(raw: &str, config: &EscapeConfig) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str(config.apostrophe.entity()),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text inserted between tags, where quotes need no escaping.
///
/// Replaces `&` and `<`, plus `>` when
/// [`content_escapes_greater_than`](EscapeConfig::content_escapes_greater_than)
/// is set.
pub fn escape_content(raw: &str, config: &EscapeConfig) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' if config.content_escapes_greater_than => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text inserted inside a double-quoted attribute value.
///
/// Replaces `&`, `<`, and `"`. With
/// [`attribute_escapes_full_set`](EscapeConfig::attribute_escapes_full_set)
/// the full Default set applies instead, so `'` and `>` cannot break out of
/// sloppily quoted attributes either.
pub fn escape_attribute(raw: &str, config: &EscapeConfig) -> String {
    if config.attribute_escapes_full_set {
        return escape_default(raw, config);
    }
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a string literal embedded inside an HTML `<script>` element.
///
/// Defuses closing `</script>` sequences and literal quoting without full
/// HTML-escaping: `\` becomes `\\`, `<` becomes `\x3C`, `"` becomes `\"`.
/// The backslash is replaced first so escapes introduced by the other two
/// substitutions survive intact.
pub fn escape_script_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\x3C"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value destined for a URL query string.
///
/// Percent-encodes every character outside the unreserved URI set. With
/// [`param_attribute_safe`](EscapeConfig::param_attribute_safe) the encoded
/// result is additionally passed through the Attribute policy, since
/// percent-encoding alone does not guarantee attribute safety when the
/// encode set is ever relaxed.
pub fn escape_param(raw: &str, config: &EscapeConfig) -> String {
    let encoded = utf8_percent_encode(raw, QUERY_ENCODE_SET).to_string();
    if config.param_attribute_safe {
        escape_attribute(&encoded, config)
    } else {
        encoded
    }
}
