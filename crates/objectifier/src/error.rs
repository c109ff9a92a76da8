//! Error types for objectifier.
//!
//! Two families live here. [`ParseError`] is produced while guessing the
//! format of a text payload and never leaves the detector. [`ViewError`] is
//! what callers of [`Objectifier`](crate::Objectifier) see when an access
//! cannot be answered.

use crate::Format;
use miette::Diagnostic;
use objectifier_val::Value;
use thiserror::Error;

/// Failure of one step of the detection chain.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("not JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("not YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("not XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The step is switched off, or its engine is not compiled in.
    #[error("{0} detection disabled")]
    Disabled(Format),

    /// The document parsed, but its value is null.
    #[error("{0} document is null")]
    NullDocument(Format),

    /// The document is a single plain string.
    #[error("{0} document is a bare string")]
    BareString(Format),
}

impl ParseError {
    pub fn format(&self) -> Format {
        match self {
            ParseError::Json(_) => Format::Json,
            #[cfg(feature = "yaml")]
            ParseError::Yaml(_) => Format::Yaml,
            ParseError::Xml(_) => Format::Xml,
            ParseError::Disabled(format)
            | ParseError::NullDocument(format)
            | ParseError::BareString(format) => *format,
        }
    }
}

/// Access errors that propagate to the caller.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// The wrapped value does not support the operation at all.
    #[error("'{type_name}' does not support {op}")]
    #[diagnostic(
        code(objectifier::view::unsupported),
        help("only mappings, sequences and text support {op}")
    )]
    Unsupported { op: &'static str, type_name: &'static str },

    /// A hashable key that is absent from a mapping.
    #[error("missing key: {}", .0.repr())]
    #[diagnostic(
        code(objectifier::view::missing_key),
        help("use `attr` for a lookup that yields None on a miss")
    )]
    MissingKey(Value),

    #[error("index {index} out of range for sequence of length {len}")]
    #[diagnostic(code(objectifier::view::index_out_of_range))]
    IndexOutOfRange { index: i64, len: usize },
}

pub type ViewResult<T> = Result<T, ViewError>;
