//! # sanitize-core
//!
//! Defensive normalization of untrusted input: loose type casting, character
//! allow-list filters for emails and URLs, path normalization, and HTML
//! escaping of strings and arbitrarily nested JSON containers.
//!
//! Every operation is a pure function of its arguments. Only escaping can
//! fail, and only when handed an unsupported encoding label.
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use sanitize_core::{cast, escape, filter_email, normalize_path, CastKind};
//!
//! assert_eq!(cast(&json!("42px"), CastKind::Int), json!(42));
//! assert_eq!(filter_email(" john@example.com<>"), "john@example.com");
//! assert_eq!(normalize_path("/var//www\\html/", true), "var/www/html/");
//!
//! let escaped = escape(&json!({"title": "<script>"}), "UTF-8").unwrap();
//! assert_eq!(escaped, json!({"title": "&lt;script&gt;"}));
//! ```
//!
//! ## Modules
//!
//! - [`mod@cast`] — `cast` and the [`CastKind`] enum
//! - [`value`] — scalar coercion rules (`to_int`, `to_bool`, ...)
//! - [`filter`] — email and URL character filters
//! - [`path`] — path normalization
//! - [`escape`] — HTML escaping of strings and containers
//! - [`encoding`] — encoding labels accepted by the escaper
//! - [`sanitizer`] — [`Sanitizer`], a handle with a configured encoding
//! - [`error`] — Error types

pub mod cast;
pub mod encoding;
pub mod error;
pub mod escape;
pub mod filter;
pub mod path;
pub mod sanitizer;
pub mod value;

pub use cast::{cast, to_array, to_object, CastKind};
pub use encoding::Encoding;
pub use error::SanitizeError;
pub use escape::{escape, escape_in_place, escape_json, escape_str, escape_with};
pub use filter::{filter_email, filter_url};
pub use path::normalize_path;
pub use sanitizer::Sanitizer;
