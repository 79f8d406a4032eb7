use super::Value;
use std::fmt;

/// Identifies the user acting in the current session.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ActorId {
    Int(i64),
    Str(String),
}

impl ActorId {
    /// Extracts an actor id from a session value.
    ///
    /// Only "truthy" values identify an actor: `0`, `""`, `"0"`, null, and
    /// booleans are all treated as no actor.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::I64(0) => None,
            Value::I64(v) => Some(Self::Int(v)),
            Value::String(v) if v.is_empty() || v == "0" => None,
            Value::String(v) => Some(Self::Str(v)),
            Value::Bool(_) | Value::Null => None,
        }
    }
}

impl From<ActorId> for Value {
    fn from(src: ActorId) -> Self {
        match src {
            ActorId::Int(v) => Value::I64(v),
            ActorId::Str(v) => Value::String(v),
        }
    }
}

impl From<&ActorId> for Value {
    fn from(src: &ActorId) -> Self {
        src.clone().into()
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(fmt, "ActorId({v})"),
            Self::Str(v) => write!(fmt, "ActorId({v:?})"),
        }
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(fmt, "{v}"),
            Self::Str(v) => fmt.write_str(v),
        }
    }
}
