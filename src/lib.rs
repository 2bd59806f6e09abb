//! Templar: contextual escaping template engine for HTML and XML.
//!
//! Builds markup documents by interpolating dynamic values into literal
//! templates. Each value declares the placement context it is destined for
//! (document text, attribute value, query parameter, script string literal,
//! or trusted markup), and the engine applies the matching escaping policy
//! before concatenating everything in order.
//!
//! The crate does not parse or validate markup: correctness of *placement*
//! is the caller's responsibility, correctness of *value escaping* is this
//! crate's.
//!
//! # Entry points
//!
//! [`html`] and [`xml`] are the two named configurations, differing only in
//! the apostrophe entity (`&#39;` vs `&apos;`). Custom configurations go
//! through [`Templar`] with an explicit [`EscapeConfig`].
//!
//! ```
//! use templar::{html, Value};
//!
//! let out = html(
//!     &["<p>", "</p>"],
//!     &[Value::content("This will be <escaped>")],
//! )?;
//! assert_eq!(out, "<p>This will be &lt;escaped&gt;</p>");
//! # Ok::<(), templar::TemplarError>(())
//! ```
//!
//! # Composition
//!
//! The output of one render may be embedded in an outer render as a
//! [`Value::Verbatim`] value; that is the sanctioned way to build larger
//! documents from smaller escaped pieces.
//!
//! ```
//! use templar::{html, Value};
//!
//! let row = html(&["<li>", "</li>"], &[Value::text("a & b")])?;
//! let out = html(&["<ul>", "</ul>"], &[Value::verbatim(row)])?;
//! assert_eq!(out, "<ul><li>a &amp; b</li></ul>");
//! # Ok::<(), templar::TemplarError>(())
//! ```

pub mod engine;
pub mod error;
pub mod escape;

pub use engine::{DispatchMode, Templar, Value, html, xml};
pub use error::{Result, TemplarError};
pub use escape::{ApostropheStyle, EscapeConfig};
