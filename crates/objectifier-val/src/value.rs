use crate::{Array, Obj, ValStr, ValueKey};
use std::fmt::{self, Display, Formatter};

/// A parsed payload: nested mappings, sequences and scalars.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(ValStr),
    /// Two-element tuple.
    Pair(ValueKey, Box<Value>),
    Array(Array),
    Obj(Obj),
}

// constructors
impl Value {
    pub fn str(text: impl Into<ValStr>) -> Self {
        Value::Str(text.into())
    }

    pub fn pair(key: impl Into<ValueKey>, value: impl Into<Value>) -> Self {
        Value::Pair(key.into(), Box::new(value.into()))
    }

}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_obj(&self) -> bool {
        matches!(self, Value::Obj(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_obj(&self) -> Option<&Obj> {
        match self {
            Value::Obj(o) => Some(o),
            _ => None,
        }
    }

    /// Runtime type name, as shown in diagnostic labels.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Pair(_, _) => "pair",
            Value::Array(_) => "array",
            Value::Obj(_) => "obj",
        }
    }

    /// False for containers, and for pairs holding one. Only hashable
    /// values can be looked up in a mapping at all.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::Array(_) | Value::Obj(_) => false,
            Value::Pair(_, value) => value.is_hashable(),
            _ => true,
        }
    }

    /// The mapping key this value can stand for, if any. A float with a
    /// whole value stands for the matching integer key.
    pub fn to_key(&self) -> Option<ValueKey> {
        match self {
            Value::Str(s) => Some(ValueKey::Str(s.clone())),
            Value::Int(i) => Some(ValueKey::Int(*i)),
            Value::Uint(u) => i64::try_from(*u).ok().map(ValueKey::Int),
            Value::Float(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Some(ValueKey::Int(*f as i64))
            }
            Value::Bool(b) => Some(ValueKey::Bool(*b)),
            _ => None,
        }
    }

    /// Equality that compares numbers by value: `Int(1)`, `Uint(1)` and
    /// `Float(1.0)` are all equal. Containers compare element by element.
    pub fn eq_loose(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.eq_loose(y))
            }
            (Value::Obj(a), Value::Obj(b)) => {
                let same = |(k, v): (&ValueKey, &Value)| {
                    b.get(k.clone()).is_some_and(|w| v.eq_loose(w))
                };
                a.len() == b.len() && a.iter().all(same)
            }
            (Value::Pair(k1, v1), Value::Pair(k2, v2)) => k1 == k2 && v1.eq_loose(v2),
            _ => numeric_eq(self, other).unwrap_or_else(|| self == other),
        }
    }

    fn integer(&self) -> Option<i128> {
        match self {
            Value::Int(i) => Some(*i as i128),
            Value::Uint(u) => Some(*u as i128),
            _ => None,
        }
    }

    /// Plain text form: strings without quotes, everything else as displayed.
    pub fn repr(&self) -> ValStr {
        match self {
            Value::Str(s) => s.clone(),
            _ => self.to_string().into(),
        }
    }
}

fn numeric_eq(a: &Value, b: &Value) -> Option<bool> {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => Some(x == y),
        (Value::Float(x), n) | (n, Value::Float(x)) => n.integer().map(|i| i as f64 == *x),
        _ => Some(a.integer()? == b.integer()?),
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Pair(k, v) => write!(f, "({}, {})", k, v),
            Value::Array(a) => write!(f, "{}", a),
            Value::Obj(o) => write!(f, "{}", o),
        }
    }
}

impl From<ValueKey> for Value {
    fn from(key: ValueKey) -> Self {
        match key {
            ValueKey::Str(s) => Value::Str(s),
            ValueKey::Int(i) => Value::Int(i),
            ValueKey::Bool(b) => Value::Bool(b),
        }
    }
}

impl From<Obj> for Value {
    fn from(obj: Obj) -> Self {
        Value::Obj(obj)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<ValStr> for Value {
    fn from(s: ValStr) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().collect())
    }
}

impl<K, V> From<(K, V)> for Value
where
    K: Into<ValueKey>,
    V: Into<Value>,
{
    fn from((k, v): (K, V)) -> Self {
        Value::pair(k, v)
    }
}
