//! Failure message templates.

use crate::config::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Failure {
    NotEqual,
    UnexpectedlyEqual,
    ActualMissing,
}

/// Renders a failure message. `expected` and `actual` are already in
/// canonical text form.
pub(crate) fn render(
    failure: Failure,
    locale: Locale,
    description: Option<&str>,
    expected: &str,
    actual: &str,
) -> String {
    let body = match (failure, locale) {
        (Failure::NotEqual, Locale::English) => {
            format!("expected value <{expected}>, got <{actual}>")
        }
        (Failure::NotEqual, Locale::Portuguese) => {
            format!("Esperava-se que o valor fosse <{expected}>, mas foi <{actual}>")
        }
        (Failure::UnexpectedlyEqual, Locale::English) => {
            format!("expected value <{expected}> to differ from <{actual}>")
        }
        (Failure::UnexpectedlyEqual, Locale::Portuguese) => {
            format!("Esperava-se que o valor <{expected}> fosse diferente de <{actual}>")
        }
        (Failure::ActualMissing, Locale::English) => "expecting actual not to be null".to_string(),
        (Failure::ActualMissing, Locale::Portuguese) => {
            "Esperava-se que o valor atual não fosse nulo".to_string()
        }
    };
    match description {
        Some(description) => format!("[{description}] {body}"),
        None => body,
    }
}
