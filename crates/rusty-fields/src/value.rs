// File: src/value.rs
// Purpose: Raw (untrusted) field input values

use std::fmt;

/// A raw value as submitted by a form, query string or JSON body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// True for `Value::Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for the empty string (a submitted but blank field)
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    /// Borrow the string payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce to an integer the way HTML form input is usually read back.
    ///
    /// Accepts integers, floats without a fractional part, and strings that
    /// parse as an integer once surrounding whitespace is trimmed.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                // Reject floats outside the i64 range instead of saturating
                if *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            // Arrays and objects are never valid scalar field input; keep
            // their JSON text so validators reject them with a useful code
            other => Value::String(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_integer() {
        assert_eq!(Value::from(7).to_integer(), Some(7));
        assert_eq!(Value::from("42").to_integer(), Some(42));
        assert_eq!(Value::from(" -1 ").to_integer(), Some(-1));
        assert_eq!(Value::from(3.0).to_integer(), Some(3));

        assert_eq!(Value::from(3.5).to_integer(), None);
        assert_eq!(Value::from("abc").to_integer(), None);
        assert_eq!(Value::from("").to_integer(), None);
        assert_eq!(Value::from(true).to_integer(), None);
        assert_eq!(Value::Null.to_integer(), None);
        assert_eq!(Value::from(f64::NAN).to_integer(), None);
        assert_eq!(Value::from(1e300).to_integer(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(5)), Value::Int(5));
        assert_eq!(Value::from(json!(2.5)), Value::Float(2.5));
        assert_eq!(Value::from(json!("a")), Value::from("a"));
        assert_eq!(Value::from(json!([1])), Value::from("[1]"));
    }

    #[test]
    fn test_empty_and_null() {
        assert!(Value::Null.is_null());
        assert!(Value::from("").is_empty_string());
        assert!(!Value::from(" ").is_empty_string());
        assert_eq!(Value::Null.to_string(), "");
    }
}
