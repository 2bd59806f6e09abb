//! Escaping policy set.
//!
//! This module defines the fixed table of transformations that make a raw
//! string safe for one markup placement context: document text, attribute
//! values, script string literals, and URL query parameters. Policies are
//! stateless; the only variability is the [`EscapeConfig`] chosen at
//! renderer construction time.

mod config;
mod policies;


// Re-export public API
pub use config::{ApostropheStyle, EscapeConfig};
pub use policies::{
    escape_attribute, escape_content, escape_default, escape_param, escape_script_string,
};
