use crate::Array;
use crate::ValStr;
use crate::Value;
use crate::ValueKey;
use indexmap::IndexMap;
use std::fmt::{self, Display, Formatter};

pub type ObjIter<'a> = indexmap::map::Iter<'a, ValueKey, Value>;

/// Insertion-ordered mapping of [`ValueKey`] to [`Value`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Obj {
    values: IndexMap<ValueKey, Value>,
}

impl IntoIterator for Obj {
    type Item = (ValueKey, Value);
    type IntoIter = indexmap::map::IntoIter<ValueKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Obj {
    type Item = (&'a ValueKey, &'a Value);
    type IntoIter = ObjIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Obj {
    pub fn new() -> Self {
        Obj {
            values: IndexMap::new(),
        }
    }

    pub fn iter(&self) -> ObjIter<'_> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has(&self, key: impl Into<ValueKey>) -> bool {
        self.values.contains_key(&key.into())
    }

    pub fn keys(&self) -> Vec<ValueKey> {
        self.values.keys().cloned().collect()
    }

    pub fn key_names(&self) -> Vec<ValStr> {
        self.values.keys().map(ValueKey::to_valstr).collect()
    }

    pub fn get(&self, key: impl Into<ValueKey>) -> Option<&Value> {
        self.values.get(&key.into())
    }

    pub fn get_or_nil(&self, key: impl Into<ValueKey>) -> Value {
        self.get(key).cloned().unwrap_or(Value::Nil)
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn set(&mut self, key: impl Into<ValueKey>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Copy every entry of `other` into `self`, later entries winning.
    pub fn merge(&mut self, other: Obj) {
        for (key, value) in other {
            self.values.insert(key, value);
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_array(&self, name: &str) -> Option<&Array> {
        match self.get(name) {
            Some(Value::Array(a)) => Some(a),
            _ => None,
        }
    }

    pub fn with(mut self, key: impl Into<ValueKey>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (impl Into<ValueKey>, impl Into<Value>)>,
    ) -> Self {
        let mut obj = Self::new();
        for (key, value) in pairs {
            obj.set(key, value);
        }
        obj
    }
}

impl Display for Obj {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_chain() {
        let obj = Obj::new()
            .with("name", "Alice")
            .with("age", 30)
            .with("city", "Boston");

        assert_eq!(obj.len(), 3);
        assert_eq!(obj.get_str("name"), Some("Alice"));
        assert_eq!(obj.get("age"), Some(&Value::Int(30)));
        assert_eq!(obj.get_or_nil("zip"), Value::Nil);
    }

    #[test]
    fn test_set_keeps_position() {
        let mut obj = Obj::from_pairs([("a", 1), ("b", 2)]);
        obj.set("a", 3);
        assert_eq!(obj.key_names(), vec!["a", "b"]);
        assert_eq!(obj.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_merge_later_wins() {
        let mut obj = Obj::from_pairs([("a", 1), ("b", 2)]);
        obj.merge(Obj::from_pairs([("b", 20), ("c", 30)]));
        assert_eq!(obj.key_names(), vec!["a", "b", "c"]);
        assert_eq!(obj.get("b"), Some(&Value::Int(20)));
    }

    #[test]
    fn test_display() {
        let obj = Obj::new().with("a", 1).with("b", "x");
        assert_eq!(obj.to_string(), "{a: 1, b: \"x\"}");
    }
}
