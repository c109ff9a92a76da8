//! The read-only view over a parsed payload.

use crate::config::{DetectorConfig, Origin, WrapMode};
use crate::detect::Detector;
use crate::error::{ViewError, ViewResult};
use objectifier_val::{ObjIter, Value, ValueKey};
use std::fmt::{self, Display, Formatter};

/// Uniform access to a mapping, a sequence or an opaque scalar.
///
/// Built once and never modified. Lookups that land on a nested sequence
/// (or, with [`WrapMode::Containers`], any nested container) hand back a
/// fresh `Objectifier` around a copy of that value.
#[derive(Debug, Clone)]
pub struct Objectifier {
    data: Value,
    origin: Origin,
    config: DetectorConfig,
}

/// A value handed out by a lookup or by iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    View(Objectifier),
    Value(Value),
}

/// One step of iteration: a mapping entry or a sequence element.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Entry(ValueKey, Member),
    Element(Member),
}

impl PartialEq for Objectifier {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Objectifier {
    /// Wrap `input` using the default detector.
    pub fn new(input: impl Into<Value>) -> Self {
        Detector::default().objectify(input)
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Detector::default().objectify_bytes(bytes)
    }

    pub(crate) fn with_origin(data: Value, origin: Origin, config: DetectorConfig) -> Self {
        Self {
            data,
            origin,
            config,
        }
    }

    pub fn value(&self) -> &Value {
        &self.data
    }

    pub fn into_value(self) -> Value {
        self.data
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn is_dict(&self) -> bool {
        self.data.is_obj()
    }

    pub fn is_list(&self) -> bool {
        self.data.is_array()
    }

    pub fn is_opaque(&self) -> bool {
        self.origin == Origin::Opaque
    }
}

// access
impl Objectifier {
    /// Membership test: a key of a mapping, an element of a sequence, or a
    /// substring of opaque text.
    pub fn contains(&self, needle: impl Into<Value>) -> ViewResult<bool> {
        let needle = needle.into();
        match &self.data {
            Value::Obj(obj) if needle.is_hashable() => {
                Ok(needle.to_key().is_some_and(|key| obj.has(key)))
            }
            Value::Obj(_) => Err(ViewError::Unsupported {
                op: "use as a mapping key",
                type_name: needle.type_name(),
            }),
            Value::Array(array) => Ok(array.contains(&needle)),
            Value::Str(text) => match needle.as_str() {
                Some(part) => Ok(text.contains(part)),
                None => Err(self.unsupported("containment")),
            },
            _ => Err(self.unsupported("containment")),
        }
    }

    /// Number of entries, elements or characters.
    pub fn len(&self) -> ViewResult<usize> {
        match &self.data {
            Value::Obj(obj) => Ok(obj.len()),
            Value::Array(array) => Ok(array.len()),
            Value::Str(text) => Ok(text.chars().count()),
            _ => Err(self.unsupported("len")),
        }
    }

    pub fn is_empty(&self) -> ViewResult<bool> {
        self.len().map(|len| len == 0)
    }

    /// Item lookup by key or index.
    ///
    /// A hashable key missing from a mapping and an index outside a
    /// sequence are errors. A container used as a mapping key, a
    /// non-integer sequence index, or any lookup on a scalar gives
    /// `Ok(None)`.
    pub fn get(&self, key: impl Into<Value>) -> ViewResult<Option<Member>> {
        let key = key.into();
        match &self.data {
            Value::Obj(_) if !key.is_hashable() => Ok(None),
            Value::Obj(obj) => match key.to_key().and_then(|k| obj.get(k)) {
                Some(value) => Ok(Some(self.wrap(value))),
                None => Err(ViewError::MissingKey(key)),
            },
            Value::Array(array) => {
                let index = match key {
                    Value::Int(i) => i,
                    Value::Uint(u) => i64::try_from(u).unwrap_or(i64::MAX),
                    _ => return Ok(None),
                };
                match array.resolve_index(index) {
                    Some(at) => Ok(Some(self.wrap(&array[at]))),
                    None => Err(ViewError::IndexOutOfRange {
                        index,
                        len: array.len(),
                    }),
                }
            }
            _ => Ok(None),
        }
    }

    /// Attribute-style lookup: the value under `name` when this view wraps
    /// a mapping that has it, `None` otherwise.
    pub fn attr(&self, name: &str) -> Option<Member> {
        self.data
            .as_obj()
            .and_then(|obj| obj.get(name))
            .map(|value| self.wrap(value))
    }

    /// Follow a dotted path such as `users.user.0.name`. Segments select
    /// mapping keys, or indexes on sequences.
    pub fn path(&self, path: &str) -> Option<Member> {
        let mut current = &self.data;
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Obj(obj) => obj.get(segment).or_else(|| {
                    segment
                        .parse::<i64>()
                        .ok()
                        .and_then(|i| obj.get(ValueKey::Int(i)))
                })?,
                Value::Array(array) => {
                    let at = array.resolve_index(segment.parse::<i64>().ok()?)?;
                    &array[at]
                }
                _ => return None,
            };
        }
        Some(self.wrap(current))
    }

    /// Keys of the wrapped mapping; empty for anything else.
    pub fn keys(&self) -> Vec<ValueKey> {
        match &self.data {
            Value::Obj(obj) => obj.keys(),
            _ => Vec::new(),
        }
    }

    /// Iterate entries of a mapping or elements of a sequence. Scalars
    /// yield nothing.
    pub fn iter(&self) -> Iter<'_> {
        let inner = match &self.data {
            Value::Obj(obj) => IterInner::Obj(obj.iter()),
            Value::Array(array) => IterInner::Array(array.iter()),
            _ => IterInner::Empty,
        };
        Iter { view: self, inner }
    }

    fn wrap(&self, value: &Value) -> Member {
        let wrap = match value {
            Value::Array(_) => true,
            Value::Obj(_) => self.config.wrap == WrapMode::Containers,
            _ => false,
        };
        if wrap {
            Member::View(Self::with_origin(
                value.clone(),
                Origin::Adopted,
                self.config,
            ))
        } else {
            Member::Value(value.clone())
        }
    }

    fn unsupported(&self, op: &'static str) -> ViewError {
        ViewError::Unsupported {
            op,
            type_name: self.data.type_name(),
        }
    }
}

impl Display for Objectifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.data {
            Value::Obj(obj) => {
                let fields: Vec<String> = obj
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v.type_name()))
                    .collect();
                write!(f, "<Objectifier#dict {}>", fields.join(" "))
            }
            Value::Array(array) => write!(f, "<Objectifier#list elements:{}>", array.len()),
            other => write!(f, "{}", other.repr()),
        }
    }
}

pub struct Iter<'a> {
    view: &'a Objectifier,
    inner: IterInner<'a>,
}

enum IterInner<'a> {
    Obj(ObjIter<'a>),
    Array(std::slice::Iter<'a, Value>),
    Empty,
}

impl Iterator for Iter<'_> {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Obj(entries) => entries
                .next()
                .map(|(k, v)| Item::Entry(k.clone(), self.view.wrap(v))),
            IterInner::Array(elements) => elements
                .next()
                .map(|v| Item::Element(self.view.wrap(v))),
            IterInner::Empty => None,
        }
    }
}

impl<'a> IntoIterator for &'a Objectifier {
    type Item = Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Member {
    pub fn as_view(&self) -> Option<&Objectifier> {
        match self {
            Member::View(view) => Some(view),
            Member::Value(_) => None,
        }
    }

    pub fn is_view(&self) -> bool {
        matches!(self, Member::View(_))
    }

    /// The underlying value, wrapped or not.
    pub fn value(&self) -> &Value {
        match self {
            Member::View(view) => view.value(),
            Member::Value(value) => value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Member::View(view) => view.into_value(),
            Member::Value(value) => value,
        }
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Member::View(view) => write!(f, "{}", view),
            Member::Value(value) => write!(f, "{}", value),
        }
    }
}

impl Item {
    pub fn key(&self) -> Option<&ValueKey> {
        match self {
            Item::Entry(key, _) => Some(key),
            Item::Element(_) => None,
        }
    }

    pub fn member(&self) -> &Member {
        match self {
            Item::Entry(_, member) | Item::Element(member) => member,
        }
    }
}
