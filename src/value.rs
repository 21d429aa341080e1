use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single data value on an argument or value axis.
///
/// Numbers feed continuous domains, categories feed discrete (banded) ones.
/// Serialized untagged, so `1.5` and `"a"` are both valid JSON values.
///
/// Equality and hashing treat every NaN as the same number and `-0.0` as
/// `0.0`, so values can be deduplicated in hashed sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A categorical value.
    Category(String),
}

impl Value {
    /// Returns true for [`Value::Number`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns the numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Category(_) => None,
        }
    }

    /// Returns the categorical payload, if any.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Category(s) => Some(s),
        }
    }
}

/// Hashable identity of a [`Value`].
#[derive(PartialEq, Eq, Hash)]
enum ValueKey<'a> {
    Number(u64),
    Category(&'a str),
}

impl Value {
    fn key(&self) -> ValueKey<'_> {
        match self {
            Value::Number(n) if n.is_nan() => ValueKey::Number(f64::NAN.to_bits()),
            Value::Number(n) if *n == 0.0 => ValueKey::Number(0),
            Value::Number(n) => ValueKey::Number(n.to_bits()),
            Value::Category(s) => ValueKey::Category(s),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Category(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i32, i64, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Category(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Category(s)
    }
}
