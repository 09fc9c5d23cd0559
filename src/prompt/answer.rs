//! Answer Types Module
//!
//! Target kinds a question can ask for, the tagged answer value, and the
//! coercion from resolved text to a typed answer. Coercion is selected by
//! pattern match on the kind, never by runtime type inspection.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::error::PromptError;

/// Target type of a question's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerKind {
    #[default]
    Text,
    Integer,
    Float,
    Boolean,
    Date,
}

impl AnswerKind {
    pub fn name(&self) -> &'static str {
        match self {
            AnswerKind::Text => "text",
            AnswerKind::Integer => "integer",
            AnswerKind::Float => "float",
            AnswerKind::Boolean => "boolean",
            AnswerKind::Date => "date",
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed answer value.
///
/// Option lookups can produce any variant regardless of the question's
/// kind; free-text input that matches no option stays [`Answer::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDateTime),
}

impl Answer {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Answer::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Answer::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Answer::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Answer::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Truthiness used when a boolean question rewrites its default.
    pub fn is_truthy(&self) -> bool {
        match self {
            Answer::Text(s) => !s.is_empty(),
            Answer::Integer(i) => *i != 0,
            Answer::Float(v) => *v != 0.0,
            Answer::Boolean(b) => *b,
            Answer::Date(_) => true,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(s) => write!(f, "{}", s),
            Answer::Integer(i) => write!(f, "{}", i),
            Answer::Float(v) => write!(f, "{}", v),
            Answer::Boolean(b) => write!(f, "{}", b),
            Answer::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<i32> for Answer {
    fn from(value: i32) -> Self {
        Answer::Integer(value as i64)
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Integer(value)
    }
}

impl From<f64> for Answer {
    fn from(value: f64) -> Self {
        Answer::Float(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Boolean(value)
    }
}

impl From<NaiveDateTime> for Answer {
    fn from(value: NaiveDateTime) -> Self {
        Answer::Date(value)
    }
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Coerce resolved text into the target kind.
///
/// Text and boolean kinds pass through unchanged; boolean values are only
/// produced through the option lookup installed by the normalizer.
pub fn coerce(kind: AnswerKind, value: &str) -> Result<Answer, PromptError> {
    match kind {
        AnswerKind::Integer => value
            .parse::<i64>()
            .map(Answer::Integer)
            .map_err(|_| parse_error(kind, value)),
        AnswerKind::Float => value
            .parse::<f64>()
            .map(Answer::Float)
            .map_err(|_| parse_error(kind, value)),
        AnswerKind::Date => parse_date(value)
            .map(Answer::Date)
            .ok_or_else(|| parse_error(kind, value)),
        AnswerKind::Text | AnswerKind::Boolean => Ok(Answer::Text(value.to_string())),
    }
}

fn parse_error(kind: AnswerKind, value: &str) -> PromptError {
    PromptError::Parse {
        kind,
        value: value.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(
            coerce(AnswerKind::Integer, "42").unwrap(),
            Answer::Integer(42)
        );
        assert_eq!(
            coerce(AnswerKind::Integer, "-7").unwrap(),
            Answer::Integer(-7)
        );
    }

    #[test]
    fn test_integer_coercion_rejects_garbage() {
        let err = coerce(AnswerKind::Integer, "abc").unwrap_err();
        assert!(matches!(err, PromptError::Parse { .. }));
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(
            coerce(AnswerKind::Float, "3.5").unwrap(),
            Answer::Float(3.5)
        );
        assert!(coerce(AnswerKind::Float, "pi").is_err());
    }

    #[test]
    fn test_date_coercion_formats() {
        let day = coerce(AnswerKind::Date, "2024-03-01").unwrap();
        assert_eq!(day.to_string(), "2024-03-01 00:00:00");

        let stamped = coerce(AnswerKind::Date, "2024-03-01 10:30:00").unwrap();
        assert_eq!(stamped.to_string(), "2024-03-01 10:30:00");

        // Day-first is tried before month-first
        let european = coerce(AnswerKind::Date, "01/02/2024").unwrap();
        assert_eq!(european.to_string(), "2024-02-01 00:00:00");
    }

    #[test]
    fn test_date_coercion_rejects_prose() {
        assert!(coerce(AnswerKind::Date, "someday").is_err());
    }

    #[test]
    fn test_text_and_boolean_pass_through() {
        assert_eq!(
            coerce(AnswerKind::Text, "hello").unwrap(),
            Answer::Text("hello".to_string())
        );
        assert_eq!(
            coerce(AnswerKind::Boolean, "maybe").unwrap(),
            Answer::Text("maybe".to_string())
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(Answer::Boolean(true).is_truthy());
        assert!(!Answer::Boolean(false).is_truthy());
        assert!(Answer::Integer(1).is_truthy());
        assert!(!Answer::Integer(0).is_truthy());
        assert!(!Answer::Text(String::new()).is_truthy());
        assert!(Answer::Text("x".to_string()).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Answer::Integer(5).to_string(), "5");
        assert_eq!(Answer::Boolean(true).to_string(), "true");
        assert_eq!(AnswerKind::Date.to_string(), "date");
    }
}
