//! json-assert-equal - Structural equality comparison for JSON values.
//!
//! Compares two [`serde_json::Value`] trees with strict type checking:
//! arrays are order-sensitive, objects are compared by key regardless of
//! entry order, and primitives are equal when their canonical textual
//! forms match.
//!
//! ```
//! use json_assert_equal::json_equal;
//! use serde_json::json;
//!
//! assert!(json_equal(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1})));
//! assert!(!json_equal(&json!(1), &json!("1")));
//! assert!(!json_equal(&json!([1, 2]), &json!([2, 1])));
//! ```

mod deep_equal;
mod error;
mod kind;
mod stack;

pub use deep_equal::{canonical_text, json_equal, json_equal_opt, try_json_equal};
pub use error::EqualError;
pub use kind::ValueKind;
