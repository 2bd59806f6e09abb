//! Classification of untyped JSON values into typed [`Value`]s.
//!
//! Callers holding dynamic data (deserialized requests, config-driven
//! templates) cannot build the [`Value`] enum directly. This layer maps a
//! `serde_json::Value` onto it: strings and numbers classify on their JSON
//! type, and objects act as tagged records, dispatching on the first key
//! drawn from the recognized vocabulary (`content`, `attr`, `param`,
//! `verbatim`, `scriptString`).
//!
//! The crate is built with serde_json's `preserve_order` feature, so "first
//! key" means first in insertion order, matching the key-enumeration order
//! a dynamic caller would observe.

use serde_json::Value as Json;

use crate::error::{Result, TemplarError};

use super::types::{DispatchMode, Value};

/// The escaping context named by a tagged-record key.
enum Tag {
    Content,
    Attr,
    Param,
    Verbatim,
    ScriptString,
}

impl Tag {
    fn from_key(key: &str) -> Option<Tag> {
        match key {
            "content" => Some(Tag::Content),
            "attr" => Some(Tag::Attr),
            "param" => Some(Tag::Param),
            "verbatim" => Some(Tag::Verbatim),
            "scriptString" => Some(Tag::ScriptString),
            _ => None,
        }
    }

    fn apply(&self, raw: &str) -> Value {
        match self {
            Tag::Content => Value::content(raw),
            Tag::Attr => Value::attr(raw),
            Tag::Param => Value::param(raw),
            Tag::Verbatim => Value::verbatim(raw),
            Tag::ScriptString => Value::script_string(raw),
        }
    }
}

impl Value {
    /// Classify an untyped JSON value into a typed [`Value`].
    ///
    /// In [`DispatchMode::Lenient`] an unclassifiable input (null, boolean,
    /// array, a record with no recognized key, or a recognized key holding
    /// a non-string) resolves to an empty [`Value::Verbatim`] and
    /// contributes nothing to the output. [`DispatchMode::Strict`] surfaces
    /// those same inputs as errors.
    pub fn from_json(value: &Json, mode: DispatchMode) -> Result<Value> {
        classify(value, mode)
    }
}

pub(super) fn classify(value: &Json, mode: DispatchMode) -> Result<Value> {
    match value {
        Json::String(raw) => Ok(Value::text(raw.clone())),
        Json::Number(n) => Ok(classify_number(n)),
        Json::Object(record) => classify_record(record, mode),
        Json::Null => unclassifiable("null", mode),
        Json::Bool(_) => unclassifiable("boolean", mode),
        Json::Array(_) => unclassifiable("array", mode),
    }
}

fn classify_number(n: &serde_json::Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        // Floats and out-of-range integers keep their canonical decimal
        // form, which contains nothing needing escape.
        None => Value::Verbatim(n.to_string()),
    }
}

fn classify_record(
    record: &serde_json::Map<String, Json>,
    mode: DispatchMode,
) -> Result<Value> {
    for (key, payload) in record {
        let Some(tag) = Tag::from_key(key) else {
            continue;
        };
        return match payload.as_str() {
            Some(raw) => Ok(tag.apply(raw)),
            None => unclassifiable(json_kind(payload), mode),
        };
    }
    match mode {
        DispatchMode::Lenient => Ok(Value::verbatim("")),
        DispatchMode::Strict => Err(TemplarError::UnrecognizedTag {
            tag: record.keys().next().cloned().unwrap_or_default(),
        }),
    }
}

fn unclassifiable(kind: &'static str, mode: DispatchMode) -> Result<Value> {
    match mode {
        DispatchMode::Lenient => Ok(Value::verbatim("")),
        DispatchMode::Strict => Err(TemplarError::UnsupportedValue { kind }),
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
