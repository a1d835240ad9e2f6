use std::fmt;

use serde_json::Value;

/// The closed set of variant tags a JSON value can carry.
///
/// Booleans are split into [`ValueKind::True`] and [`ValueKind::False`], so
/// `true` and `false` already differ at the tag level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    True,
    False,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Tag of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(true) => Self::True,
            Value::Bool(false) => Self::False,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns `true` for tags compared by canonical text.
    pub fn is_primitive(self) -> bool {
        matches!(self, Self::True | Self::False | Self::Number | Self::String)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
