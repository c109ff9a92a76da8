use crate::ValStr;
use std::fmt::{self, Display, Formatter};

/// Key of an [`Obj`](crate::Obj) entry.
///
/// JSON and XML only ever produce `Str` keys; YAML mappings may also carry
/// integer and boolean keys.
#[derive(Debug, Clone, PartialEq, Hash, Ord, Eq, PartialOrd)]
pub enum ValueKey {
    Str(ValStr),
    Int(i64),
    Bool(bool),
}

impl ValueKey {
    pub fn to_valstr(&self) -> ValStr {
        match self {
            ValueKey::Str(s) => s.clone(),
            _ => self.to_string().into(),
        }
    }
}

impl Display for ValueKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValueKey::Str(s) => write!(f, "{}", s),
            ValueKey::Int(i) => write!(f, "{}", i),
            ValueKey::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for ValueKey {
    fn from(i: i64) -> Self {
        ValueKey::Int(i)
    }
}

impl From<i32> for ValueKey {
    fn from(i: i32) -> Self {
        ValueKey::Int(i as i64)
    }
}

impl From<bool> for ValueKey {
    fn from(b: bool) -> Self {
        ValueKey::Bool(b)
    }
}

impl From<String> for ValueKey {
    fn from(s: String) -> Self {
        ValueKey::Str(s.into())
    }
}

impl From<&str> for ValueKey {
    fn from(s: &str) -> Self {
        ValueKey::Str(s.into())
    }
}

impl From<ValStr> for ValueKey {
    fn from(s: ValStr) -> Self {
        ValueKey::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(ValueKey::from("name").to_string(), "name");
        assert_eq!(ValueKey::from(42i64).to_string(), "42");
        assert_eq!(ValueKey::from(true).to_string(), "true");
    }

    #[test]
    fn test_key_to_valstr() {
        assert_eq!(ValueKey::from("name").to_valstr(), "name");
        assert_eq!(ValueKey::from(1).to_valstr(), "1");
    }
}
