//! Field values carried by rows, filters and cursors.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A field value.
///
/// Serializes as plain JSON (`20`, `"2024-01-15"`, `null`), which is also the
/// form stored inside cursor tokens. Dates and timestamps travel as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL `NULL` / JSON `null`.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Unsigned integer above `i64::MAX`. Smaller unsigned values are `Int`.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Text, including dates and timestamps.
    String(String),
    /// Operand list for `In` / `NotIn` filters. Never valid inside a cursor.
    Array(Vec<Value>),
}

impl Value {
    /// Returns `true` for every variant except [`Value::Array`].
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_))
    }

    /// Returns `true` if this is [`Value::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Compare two values the way a SQL engine would.
    ///
    /// Numbers compare numerically across `Int`, `UInt` and `Float`. `Null`
    /// and mismatched kinds are incomparable and yield `None`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            #[allow(clippy::cast_precision_loss)]
            (Self::Float(a), b) => a.partial_cmp(&(b.as_integer()? as f64)),
            #[allow(clippy::cast_precision_loss)]
            (a, Self::Float(b)) => (a.as_integer()? as f64).partial_cmp(b),
            (a, b) => Some(a.as_integer()?.cmp(&b.as_integer()?)),
        }
    }

    /// Integer value widened so `Int` and `UInt` compare exactly.
    fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Int(n) => Some(i128::from(*n)),
            Self::UInt(n) => Some(i128::from(*n)),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

macro_rules! from_small_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::Int(i64::from(v))
            }
        }
    )*};
}

from_small_int!(i8, i16, i32, u8, u16, u32);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Self::UInt(v), Self::Int)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::from(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null | serde_json::Value::Object(_) => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Self::Int(i),
                (None, Some(u)) => Self::UInt(u),
                (None, None) => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Int(7));
        assert_eq!(
            Value::from(vec![1i64, 2]),
            Value::Array(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn test_unsigned_conversions() {
        assert_eq!(Value::from(7u64), Value::Int(7));
        assert_eq!(Value::from(7usize), Value::Int(7));
        assert_eq!(Value::from(-3isize), Value::Int(-3));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));

        let big = serde_json::json!(18_446_744_073_709_551_000u64);
        assert_eq!(Value::from(&big), Value::UInt(18_446_744_073_709_551_000));

        let parsed: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(parsed, Value::UInt(u64::MAX));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "18446744073709551615");
    }

    #[test]
    fn test_unsigned_comparison_is_exact() {
        let a = Value::UInt(u64::MAX - 1);
        let b = Value::UInt(u64::MAX);
        assert_eq!(a.compare(&b), Some(Ordering::Less));
        assert_eq!(Value::Int(i64::MAX).compare(&a), Some(Ordering::Less));
        assert_eq!(b.compare(&Value::Int(-1)), Some(Ordering::Greater));
        assert_eq!(b.compare(&Value::String("1".into())), None);
    }

    #[test]
    fn test_numeric_comparison_across_kinds() {
        assert_eq!(Value::Int(2).compare(&Value::Float(2.5)), Some(Ordering::Less));
        assert_eq!(Value::Float(3.0).compare(&Value::Int(3)), Some(Ordering::Equal));
        assert_eq!(Value::Int(10).compare(&Value::Int(9)), Some(Ordering::Greater));
    }

    #[test]
    fn test_incomparable_values() {
        assert_eq!(Value::Null.compare(&Value::Null), None);
        assert_eq!(Value::Int(1).compare(&Value::String("1".into())), None);
        assert_eq!(Value::Bool(true).compare(&Value::Int(1)), None);
    }

    #[test]
    fn test_json_shape_is_untagged() {
        let json = serde_json::to_string(&vec![
            Value::Int(20),
            Value::String("2024-01-15T10:00:00Z".into()),
            Value::Null,
        ])
        .unwrap();
        assert_eq!(json, r#"[20,"2024-01-15T10:00:00Z",null]"#);

        let parsed: Vec<Value> = serde_json::from_str("[20, 2.5, true]").unwrap();
        assert_eq!(
            parsed,
            vec![Value::Int(20), Value::Float(2.5), Value::Bool(true)]
        );
    }

    #[test]
    fn test_from_json_number() {
        let v = serde_json::json!({"a": 3, "b": 1.5});
        assert_eq!(Value::from(&v["a"]), Value::Int(3));
        assert_eq!(Value::from(&v["b"]), Value::Float(1.5));
    }
}
