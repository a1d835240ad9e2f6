/// Asserts that two JSON values are structurally equal, panicking with the
/// failure message otherwise.
///
/// An optional trailing format string becomes the assertion's description.
///
/// ```
/// use json_assert::assert_json_eq;
/// use serde_json::json;
///
/// assert_json_eq!(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1}));
/// assert_json_eq!(json!([1]), json!([1]), "list of {}", "ids");
/// ```
#[macro_export]
macro_rules! assert_json_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        match $crate::assert_that(&$actual).is_equal_to(&$expected) {
            Ok(_) => {}
            Err(err) => panic!("{}", err),
        }
    };
    ($actual:expr, $expected:expr, $($description:tt)+) => {
        match $crate::assert_that(&$actual)
            .described_as(format!($($description)+))
            .is_equal_to(&$expected)
        {
            Ok(_) => {}
            Err(err) => panic!("{}", err),
        }
    };
}

/// Asserts that two JSON values differ, panicking with the failure message
/// otherwise.
///
/// ```
/// use json_assert::assert_json_ne;
/// use serde_json::json;
///
/// assert_json_ne!(json!([1, 2, 0]), json!([1, 0, 2]));
/// ```
#[macro_export]
macro_rules! assert_json_ne {
    ($actual:expr, $expected:expr $(,)?) => {
        match $crate::assert_that(&$actual).is_not_equal_to(&$expected) {
            Ok(_) => {}
            Err(err) => panic!("{}", err),
        }
    };
    ($actual:expr, $expected:expr, $($description:tt)+) => {
        match $crate::assert_that(&$actual)
            .described_as(format!($($description)+))
            .is_not_equal_to(&$expected)
        {
            Ok(_) => {}
            Err(err) => panic!("{}", err),
        }
    };
}
