#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Converts a JSON scalar. Arrays, objects, and non-integral numbers have
    /// no `Value` representation.
    pub fn from_json(src: &serde_json::Value) -> Option<Self> {
        match src {
            serde_json::Value::Null => Some(Self::Null),
            serde_json::Value::Bool(v) => Some(Self::Bool(*v)),
            serde_json::Value::String(v) => Some(Self::String(v.clone())),
            serde_json::Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    return Some(Self::I64(v));
                }

                // Integers past `i64::MAX` cannot be represented
                if n.is_u64() {
                    return None;
                }

                // Integral floats (`42.0`) are still usable as ids. The upper
                // bound is exclusive: `i64::MAX as f64` rounds up to 2^63.
                let v = n.as_f64()?;
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                    Some(Self::I64(v as i64))
                } else {
                    None
                }
            }
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(v) => serde_json::Value::Bool(*v),
            Self::I64(v) => serde_json::Value::from(*v),
            Self::Null => serde_json::Value::Null,
            Self::String(v) => serde_json::Value::String(v.clone()),
        }
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}
