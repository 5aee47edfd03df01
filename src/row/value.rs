//! Canonical scalar values

use std::fmt;
use std::hash::{Hash, Hasher};

/// A typed field value after validation
///
/// Bits render as "1"/"0" so written mart files re-validate under the same
/// registry declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bit(bool),
}

// Cast failures become nulls before a Value is ever constructed, so no field
// ever holds a NaN and the bit-pattern equality below is total.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Int(v) => {
                state.write_u8(0);
                v.hash(state);
            }
            Value::Float(v) => {
                state.write_u8(1);
                v.to_bits().hash(state);
            }
            Value::Text(v) => {
                state.write_u8(2);
                v.hash(state);
            }
            Value::Bit(v) => {
                state.write_u8(3);
                v.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::Bit(true) => write!(f, "1"),
            Value::Bit(false) => write!(f, "0"),
        }
    }
}

impl Value {
    /// Render an optional value for a mart file field: null becomes empty
    pub fn render(value: Option<&Value>) -> String {
        match value {
            Some(v) => v.to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(1234).to_string(), "1234");
        assert_eq!(Value::Float(41.881).to_string(), "41.881");
        assert_eq!(Value::Text("PARKED".to_string()).to_string(), "PARKED");
        assert_eq!(Value::Bit(true).to_string(), "1");
        assert_eq!(Value::Bit(false).to_string(), "0");
    }

    #[test]
    fn test_render_null() {
        assert_eq!(Value::render(None), "");
        assert_eq!(Value::render(Some(&Value::Int(7))), "7");
    }

    #[test]
    fn test_float_values_are_hashable() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Value::Float(41.881)));
        assert!(!seen.insert(Value::Float(41.881)));
        assert!(seen.insert(Value::Float(-87.624)));
    }
}
