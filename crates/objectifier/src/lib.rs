//! Wrap an unknown response payload in one uniform, read-only view.
//!
//! ```rust
//! use objectifier::Objectifier;
//!
//! let view = Objectifier::new(r#"{"user": {"name": "ann"}, "tags": ["a", "b"]}"#);
//! assert!(view.contains("user").unwrap());
//! assert_eq!(view.attr("missing"), None);
//!
//! let tags = view.attr("tags").unwrap();
//! assert_eq!(tags.as_view().unwrap().len().unwrap(), 2);
//! ```
//!
//! Text is tried as JSON, then YAML (with the `yaml` feature), then XML.
//! When nothing matches the raw text is kept and the view behaves as an
//! opaque scalar.

mod config;
pub use config::*;

mod detect;
pub use detect::*;

pub mod error;
pub use error::{ParseError, ViewError, ViewResult};

mod view;
pub use view::*;

pub use objectifier_val::{Array, Obj, ValStr, Value, ValueKey};
pub use objectifier_xml::arrayify;
