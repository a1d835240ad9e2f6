use std::fmt;

use serde_json::{Map, Number, Value};

use crate::error::EqualError;
use crate::kind::ValueKind;
use crate::stack::ensure_sufficient_stack;

/// Canonical textual form of `value`: its compact JSON serialization.
///
/// Primitive comparison in [`json_equal`] agrees with comparing these texts,
/// so `1` and `1.0` are different values. Nested containers are rendered
/// under the same stack guard as the comparison, so any tree that can be
/// compared can also be printed.
pub fn canonical_text(value: &Value) -> String {
    Canonical(value).to_string()
}

struct Canonical<'a>(&'a Value);

impl fmt::Display for Canonical<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Array(items) => ensure_sufficient_stack(|| {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    fmt::Display::fmt(&Canonical(item), f)?;
                }
                f.write_str("]")
            }),
            Value::Object(entries) => ensure_sufficient_stack(|| {
                f.write_str("{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(&serde_json::to_string(key).map_err(|_| fmt::Error)?)?;
                    f.write_str(":")?;
                    fmt::Display::fmt(&Canonical(item), f)?;
                }
                f.write_str("}")
            }),
            // Leaves do not recurse.
            leaf => fmt::Display::fmt(leaf, f),
        }
    }
}

/// Structural equality of two JSON values.
///
/// Values of different [`ValueKind`] are never equal. Arrays compare
/// element-wise in order, objects compare by key regardless of entry order,
/// and primitives compare by canonical text.
///
/// # Examples
///
/// ```
/// use json_assert_equal::json_equal;
/// use serde_json::json;
///
/// assert!(json_equal(&json!({"k": [1, 2]}), &json!({"k": [1, 2]})));
/// assert!(!json_equal(&json!({"k": 1}), &json!({"k": 1, "k2": 2})));
/// ```
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        // `true` and `false` are distinct tags, so only identical booleans meet here.
        (Value::Bool(x), Value::Bool(y)) if x == y => true,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => ensure_sufficient_stack(|| arrays_equal(x, y)),
        (Value::Object(x), Value::Object(y)) => ensure_sufficient_stack(|| objects_equal(x, y)),
        _ => {
            let (left, right) = (ValueKind::of(a), ValueKind::of(b));
            if left.is_primitive() && right.is_primitive() {
                tracing::trace!(%left, %right, "primitive mismatch");
            } else {
                tracing::trace!(%left, %right, "variant mismatch");
            }
            false
        }
    }
}

/// Equality where either side may be absent.
///
/// An absent value has no variant, so it never equals anything, including
/// another absent value. Object lookups of missing keys go through here.
pub fn json_equal_opt(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => json_equal(a, b),
        _ => false,
    }
}

/// Boundary form of [`json_equal`] for callers holding optional values.
///
/// Fails with [`EqualError::InvalidState`] when `actual` is absent. An
/// absent `expected` is simply unequal.
pub fn try_json_equal(
    actual: Option<&Value>,
    expected: Option<&Value>,
) -> Result<bool, EqualError> {
    let actual = actual.ok_or(EqualError::InvalidState)?;
    Ok(json_equal_opt(Some(actual), expected))
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    // Compared by text: `-0.0` and `0.0` differ here even though f64 `==` holds.
    let equal = a.to_string() == b.to_string();
    if !equal {
        tracing::trace!(left = %a, right = %b, "number mismatch");
    }
    equal
}

fn arrays_equal(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        tracing::trace!(left = a.len(), right = b.len(), "array length mismatch");
        return false;
    }
    a.iter().zip(b).all(|(x, y)| json_equal(x, y))
}

fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    if a.len() != b.len() {
        tracing::trace!(left = a.len(), right = b.len(), "object size mismatch");
        return false;
    }
    a.iter().all(|(key, value)| {
        let other = b.get(key);
        if other.is_none() {
            tracing::trace!(%key, "key missing on right side");
        }
        json_equal_opt(Some(value), other)
    })
}
