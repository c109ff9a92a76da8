//! Format detection and construction of views.
//!
//! Text is offered to JSON, then YAML, then XML. The first parser that
//! accepts it wins; a parser that fails only means "not this format".

use crate::error::ParseError;
use crate::view::Objectifier;
use crate::{DetectorConfig, Format, Origin};
use log::debug;
use objectifier_val::{Array, Obj, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run the whole chain over `text`. `None` when no format matched.
    pub fn detect(&self, text: &str) -> Option<(Format, Value)> {
        for format in Format::CHAIN {
            match self.parse(format, text) {
                Ok(value) => {
                    debug!("payload detected as {}", format);
                    return Some((format, value));
                }
                Err(err) => debug!("{}", err),
            }
        }
        None
    }

    /// Run one step of the chain.
    pub fn parse(&self, format: Format, text: &str) -> Result<Value, ParseError> {
        let value = match format {
            Format::Json => parse_json(text)?,
            Format::Yaml if self.config.yaml => parse_yaml(text)?,
            Format::Yaml => return Err(ParseError::Disabled(Format::Yaml)),
            Format::Xml => parse_xml(text)?,
        };
        if value.is_nil() && !self.config.null_is_match {
            return Err(ParseError::NullDocument(format));
        }
        // Almost any line of text is a valid YAML plain scalar. Such a
        // document carries nothing the raw text does not, and accepting it
        // would keep XML from ever being tried.
        if format == Format::Yaml && value.is_str() {
            return Err(ParseError::BareString(format));
        }
        Ok(value)
    }

    /// Build a view over `input`.
    ///
    /// Mappings and sequences are adopted as they are, except that a
    /// sequence made only of pairs becomes a mapping. Text goes through
    /// [`detect`](Self::detect). Anything else, and text no parser
    /// accepts, is kept unchanged.
    pub fn objectify(&self, input: impl Into<Value>) -> Objectifier {
        match input.into() {
            Value::Obj(obj) => self.adopt(Value::Obj(obj)),
            Value::Array(array) if array.is_pair_list() => {
                self.adopt(Value::Obj(pairs_to_obj(array)))
            }
            Value::Array(array) => self.adopt(Value::Array(array)),
            Value::Str(text) => match self.detect(&text) {
                Some((format, value)) => {
                    Objectifier::with_origin(value, Origin::Detected(format), self.config)
                }
                None => {
                    debug!("no format matched, keeping raw text");
                    Objectifier::with_origin(Value::Str(text), Origin::Opaque, self.config)
                }
            },
            other => {
                debug!("{} input kept opaque", other.type_name());
                Objectifier::with_origin(other, Origin::Opaque, self.config)
            }
        }
    }

    /// Like [`objectify`](Self::objectify) for raw bytes. Bytes that are
    /// not UTF-8 are kept opaque, lossily decoded.
    pub fn objectify_bytes(&self, bytes: &[u8]) -> Objectifier {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.objectify(text),
            Err(err) => {
                debug!("payload is not utf-8: {}", err);
                let text = String::from_utf8_lossy(bytes).into_owned();
                Objectifier::with_origin(Value::from(text), Origin::Opaque, self.config)
            }
        }
    }

    fn adopt(&self, value: Value) -> Objectifier {
        Objectifier::with_origin(value, Origin::Adopted, self.config)
    }
}

fn pairs_to_obj(array: Array) -> Obj {
    let mut obj = Obj::new();
    for item in array {
        if let Value::Pair(key, value) = item {
            obj.set(key, *value);
        }
    }
    obj
}

fn parse_json(text: &str) -> Result<Value, ParseError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from_json(json))
}

fn parse_xml(text: &str) -> Result<Value, ParseError> {
    Ok(Value::Obj(objectifier_xml::arrayify(text)?))
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> Result<Value, ParseError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    Ok(yaml::convert(yaml))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str) -> Result<Value, ParseError> {
    Err(ParseError::Disabled(Format::Yaml))
}

#[cfg(feature = "yaml")]
mod yaml {
    use log::debug;
    use objectifier_val::{Obj, Value, ValueKey};
    use serde_yaml::Value as Yaml;

    pub(super) fn convert(yaml: Yaml) -> Value {
        match yaml {
            Yaml::Null => Value::Nil,
            Yaml::Bool(b) => Value::Bool(b),
            Yaml::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Yaml::String(s) => Value::from(s),
            Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(convert).collect()),
            Yaml::Mapping(map) => {
                let mut obj = Obj::new();
                for (k, v) in map {
                    match convert_key(k) {
                        Some(key) => obj.set(key, convert(v)),
                        None => debug!("dropping yaml entry with non-scalar key"),
                    }
                }
                Value::Obj(obj)
            }
            Yaml::Tagged(tagged) => convert(tagged.value),
        }
    }

    fn convert_key(key: Yaml) -> Option<ValueKey> {
        match key {
            Yaml::String(s) => Some(ValueKey::from(s)),
            Yaml::Bool(b) => Some(ValueKey::Bool(b)),
            Yaml::Number(n) => match n.as_i64() {
                Some(i) => Some(ValueKey::Int(i)),
                None => Some(ValueKey::from(n.to_string())),
            },
            Yaml::Tagged(tagged) => convert_key(tagged.value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_first() {
        let (format, value) = Detector::default().detect(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(format, Format::Json);
        assert_eq!(value, Value::from(Obj::new().with("a", vec![1, 2])));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_second() {
        let (format, value) = Detector::default()
            .detect("name: widget\nsizes:\n  - 1\n  - 2\n")
            .unwrap();
        assert_eq!(format, Format::Yaml);
        let expected = Obj::new().with("name", "widget").with("sizes", vec![1, 2]);
        assert_eq!(value, Value::from(expected));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_non_string_keys() {
        let (_, value) = Detector::default().detect("1: one\ntrue: yes\n").unwrap();
        let obj = value.as_obj().unwrap();
        assert_eq!(obj.get(1), Some(&Value::from("one")));
        assert_eq!(obj.get(true), Some(&Value::from("yes")));
    }

    #[test]
    fn test_yaml_bare_string_falls_through_to_xml() {
        let detector = Detector::default();
        assert!(matches!(
            detector.parse(Format::Yaml, "just words"),
            Err(ParseError::BareString(Format::Yaml)) | Err(ParseError::Disabled(Format::Yaml))
        ));
        let (format, _) = detector.detect("<a><b>1</b></a>").unwrap();
        assert_eq!(format, Format::Xml);
    }

    #[test]
    fn test_xml_last() {
        let detector = Detector::default();
        let (format, value) = detector.detect("<a><b>1</b><b>2</b></a>").unwrap();
        assert_eq!(format, Format::Xml);
        let expected = Obj::new().with("a", Obj::new().with("b", vec!["1", "2"]));
        assert_eq!(value, Value::from(expected));
    }

    #[test]
    fn test_yaml_disabled_skips_to_xml() {
        let detector = Detector::new(DetectorConfig::new().with_yaml(false));
        assert!(matches!(
            detector.parse(Format::Yaml, "a: 1"),
            Err(ParseError::Disabled(Format::Yaml))
        ));
        assert_eq!(detector.detect("a: 1"), None);
    }

    #[test]
    fn test_null_document_tries_next() {
        let detector = Detector::new(DetectorConfig::new().with_yaml(false));
        assert!(matches!(
            detector.parse(Format::Json, "null"),
            Err(ParseError::NullDocument(Format::Json))
        ));
        assert_eq!(detector.detect("null"), None);
    }

    #[test]
    fn test_null_document_adopted_when_configured() {
        let detector = Detector::new(DetectorConfig::new().with_null_is_match(true));
        assert_eq!(detector.detect("null"), Some((Format::Json, Value::Nil)));
    }

    #[test]
    fn test_nothing_matches() {
        let detector = Detector::new(DetectorConfig::new().with_yaml(false));
        assert_eq!(detector.detect("not json, not <xml"), None);
    }

    #[test]
    fn test_malformed_yaml_falls_through_to_opaque() {
        let detector = Detector::default();
        for format in Format::CHAIN {
            assert!(detector.parse(format, "a: [1").is_err());
        }
        assert_eq!(detector.detect("a: [1"), None);

        let view = detector.objectify("a: [1");
        assert_eq!(view.origin(), Origin::Opaque);
        assert_eq!(view.value(), &Value::from("a: [1"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_1_1_booleans_stay_strings() {
        let detector = Detector::default();
        assert_eq!(
            detector.detect("a: yes\nb: off"),
            Some((
                Format::Yaml,
                Value::from(Obj::new().with("a", "yes").with("b", "off"))
            ))
        );

        let view = detector.objectify("yes");
        assert_eq!(view.origin(), Origin::Opaque);
        assert_eq!(view.value(), &Value::from("yes"));
    }

    #[test]
    fn test_objectify_pairs() {
        let view = Detector::default().objectify(vec![("x", 1), ("y", 2), ("x", 3)]);
        assert_eq!(view.origin(), Origin::Adopted);
        assert_eq!(view.value(), &Value::from(Obj::new().with("x", 3).with("y", 2)));
    }

    #[test]
    fn test_objectify_scalar_is_opaque() {
        let view = Detector::default().objectify(42);
        assert_eq!(view.origin(), Origin::Opaque);
        assert_eq!(view.value(), &Value::Int(42));
    }

    #[test]
    fn test_objectify_bytes() {
        let detector = Detector::default();
        let view = detector.objectify_bytes(br#"{"a": 1}"#);
        assert_eq!(view.origin(), Origin::Detected(Format::Json));

        let view = detector.objectify_bytes(&[0xff, 0xfe, b'a']);
        assert_eq!(view.origin(), Origin::Opaque);
        assert!(view.value().is_str());
    }
}
