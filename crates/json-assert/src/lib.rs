//! json-assert - Fluent test assertions for JSON values.
//!
//! Wraps [`json_assert_equal::json_equal`] in an assertion object that
//! reports failures as [`AssertionError`]s carrying a message with the
//! textual form of both values, plus [`assert_json_eq!`] and
//! [`assert_json_ne!`] for tests that prefer panics.
//!
//! ```
//! use json_assert::assert_that;
//! use serde_json::json;
//!
//! let actual = json!({"a": 1, "b": [true, null]});
//! assert_that(&actual)
//!     .is_equal_to(&json!({"b": [true, null], "a": 1}))?
//!     .is_not_equal_to(&json!({"a": 1}))?;
//! # Ok::<(), json_assert::AssertionError>(())
//! ```

mod assert;
mod config;
mod error;
mod macros;
mod message;

pub use assert::{assert_that, assert_that_opt, JsonValueAssert};
pub use config::{AssertConfig, Locale, UnknownLocale, LOCALE_ENV};
pub use error::AssertionError;
pub use json_assert_equal::{canonical_text, json_equal, ValueKind};
