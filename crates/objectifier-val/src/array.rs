use crate::Value;
use std::fmt::{self, Display, Formatter};
use std::ops::Index;

pub static ARRAY_EMPTY: Array = Array { values: vec![] };

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    pub values: Vec<Value>,
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Array {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Array {
    pub fn new() -> Self {
        Self { values: vec![] }
    }

    pub fn from_vec(values: Vec<impl Into<Value>>) -> Self {
        values.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolve a possibly negative index, counting from the end like a
    /// Python sequence does.
    pub fn resolve_index(&self, index: i64) -> Option<usize> {
        let len = self.values.len() as i64;
        let at = if index < 0 { len + index } else { index };
        if (0..len).contains(&at) {
            Some(at as usize)
        } else {
            None
        }
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Membership by [`Value::eq_loose`], so numbers match by value.
    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|v| v.eq_loose(value))
    }

    /// True when every element is a [`Value::Pair`]. Holds vacuously for an
    /// empty array.
    pub fn is_pair_list(&self) -> bool {
        self.values.iter().all(|v| matches!(v, Value::Pair(_, _)))
    }

    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
