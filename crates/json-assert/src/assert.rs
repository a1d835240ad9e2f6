use json_assert_equal::{canonical_text, try_json_equal, EqualError};
use serde_json::Value;

use crate::config::AssertConfig;
use crate::error::AssertionError;
use crate::message::{render, Failure};

/// Starts an assertion on `actual`, with options from the environment.
pub fn assert_that(actual: &Value) -> JsonValueAssert<'_> {
    JsonValueAssert::new(Some(actual))
}

/// Starts an assertion on a value that may be absent, such as the result of
/// [`Value::get`]. Every check on an absent value fails with
/// [`AssertionError::ActualMissing`].
pub fn assert_that_opt(actual: Option<&Value>) -> JsonValueAssert<'_> {
    JsonValueAssert::new(actual)
}

/// Assertions about one JSON value.
///
/// Checks return `Ok(&self)` on success so they chain with `?`.
#[derive(Debug, Clone)]
pub struct JsonValueAssert<'a> {
    actual: Option<&'a Value>,
    description: Option<String>,
    config: AssertConfig,
}

impl<'a> JsonValueAssert<'a> {
    pub fn new(actual: Option<&'a Value>) -> Self {
        Self {
            actual,
            description: None,
            config: AssertConfig::from_env(),
        }
    }

    pub fn with_config(mut self, config: AssertConfig) -> Self {
        self.config = config;
        self
    }

    /// Prefixes failure messages with `[description]`.
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Verifies that the actual value is structurally equal to `expected`.
    pub fn is_equal_to(&self, expected: &Value) -> Result<&Self, AssertionError> {
        if self.are_equal(expected)? {
            return Ok(self);
        }
        let message = self.message(Failure::NotEqual, expected);
        tracing::debug!(%message, "json assertion failed");
        Err(AssertionError::NotEqual { message })
    }

    /// Verifies that the actual value differs from `expected`.
    pub fn is_not_equal_to(&self, expected: &Value) -> Result<&Self, AssertionError> {
        if !self.are_equal(expected)? {
            return Ok(self);
        }
        let message = self.message(Failure::UnexpectedlyEqual, expected);
        tracing::debug!(%message, "json assertion failed");
        Err(AssertionError::UnexpectedlyEqual { message })
    }

    /// Verifies that there is a value to test at all.
    pub fn is_not_null(&self) -> Result<&Self, AssertionError> {
        match self.actual {
            Some(_) => Ok(self),
            None => Err(self.actual_missing()),
        }
    }

    fn are_equal(&self, expected: &Value) -> Result<bool, AssertionError> {
        try_json_equal(self.actual, Some(expected)).map_err(|err| match err {
            EqualError::InvalidState => self.actual_missing(),
        })
    }

    fn actual_missing(&self) -> AssertionError {
        let message = render(
            Failure::ActualMissing,
            self.config.locale,
            self.description.as_deref(),
            "",
            "",
        );
        tracing::debug!(%message, "json assertion failed");
        AssertionError::ActualMissing { message }
    }

    fn message(&self, failure: Failure, expected: &Value) -> String {
        let actual = self.actual.map(canonical_text).unwrap_or_default();
        render(
            failure,
            self.config.locale,
            self.description.as_deref(),
            &canonical_text(expected),
            &actual,
        )
    }
}
