//! Option Normalizer Module
//!
//! Converts a raw option specification (boolean-implied, ordered list, or
//! label→value mapping) into a canonical ordered list of display labels
//! plus a label→value lookup. List values are translated into labels;
//! mapping keys are treated as already-final labels.

use std::collections::HashMap;

use crate::i18n::Translate;

use super::answer::{Answer, AnswerKind};
use super::error::PromptError;

/// Raw option specification supplied by the caller.
#[derive(Debug, Clone, Default)]
pub enum OptionSource {
    #[default]
    None,
    /// Ordered values; each value's string form becomes its display label.
    List(Vec<Answer>),
    /// Insertion-ordered label→value pairs; labels are used as-is.
    Map(Vec<(String, Answer)>),
}

/// Canonical ordered option labels with their value lookup.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    labels: Vec<String>,
    lookup: HashMap<String, Answer>,
}

impl OptionSet {
    /// Normalize a raw option spec for a question of the given kind.
    ///
    /// Boolean questions synthesize a translated affirmative/negative pair
    /// and rewrite the default to the label matching the supplied default's
    /// truthiness. Returns the set together with the (possibly rewritten)
    /// default.
    pub fn normalize(
        kind: AnswerKind,
        source: OptionSource,
        default: Option<Answer>,
        translator: &dyn Translate,
    ) -> Result<(OptionSet, Option<Answer>), PromptError> {
        let mut set = OptionSet::default();

        if kind == AnswerKind::Boolean {
            let affirmative = translator.translate("y");
            let negative = translator.translate("n");
            let default = default.map(|value| {
                if value.is_truthy() {
                    Answer::Text(affirmative.clone())
                } else {
                    Answer::Text(negative.clone())
                }
            });
            set.insert(affirmative, Answer::Boolean(true))?;
            set.insert(negative, Answer::Boolean(false))?;
            return Ok((set, default));
        }

        match source {
            OptionSource::None => {}
            OptionSource::List(values) => {
                for value in values {
                    let label = translator.translate(&value.to_string());
                    set.insert(label, value)?;
                }
            }
            OptionSource::Map(entries) => {
                for (label, value) in entries {
                    set.insert(label, value)?;
                }
            }
        }

        Ok((set, default))
    }

    /// Display labels in their original order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// The original value behind a display label.
    pub fn resolve(&self, label: &str) -> Option<&Answer> {
        self.lookup.get(label)
    }

    fn insert(&mut self, label: String, value: Answer) -> Result<(), PromptError> {
        if self.lookup.contains_key(&label) {
            return Err(PromptError::DuplicateLabel(label));
        }
        self.labels.push(label.clone());
        self.lookup.insert(label, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::{CatalogTranslator, NullTranslator};

    use super::*;

    #[test]
    fn test_boolean_synthesizes_pair() {
        let (set, default) = OptionSet::normalize(
            AnswerKind::Boolean,
            OptionSource::None,
            Some(Answer::Boolean(true)),
            &NullTranslator,
        )
        .unwrap();

        assert_eq!(set.labels(), ["y".to_string(), "n".to_string()]);
        assert_eq!(set.resolve("y"), Some(&Answer::Boolean(true)));
        assert_eq!(set.resolve("n"), Some(&Answer::Boolean(false)));
        assert_eq!(default, Some(Answer::Text("y".to_string())));
    }

    #[test]
    fn test_boolean_default_follows_truthiness() {
        let (_, default) = OptionSet::normalize(
            AnswerKind::Boolean,
            OptionSource::None,
            Some(Answer::Integer(0)),
            &NullTranslator,
        )
        .unwrap();
        assert_eq!(default, Some(Answer::Text("n".to_string())));
    }

    #[test]
    fn test_boolean_labels_are_translated() {
        let catalog = CatalogTranslator::new()
            .with_phrase("y", "oui")
            .with_phrase("n", "non");
        let (set, default) = OptionSet::normalize(
            AnswerKind::Boolean,
            OptionSource::None,
            Some(Answer::Boolean(false)),
            &catalog,
        )
        .unwrap();
        assert_eq!(set.labels(), ["oui".to_string(), "non".to_string()]);
        assert_eq!(set.resolve("oui"), Some(&Answer::Boolean(true)));
        assert_eq!(default, Some(Answer::Text("non".to_string())));
    }

    #[test]
    fn test_list_preserves_order_and_values() {
        let (set, _) = OptionSet::normalize(
            AnswerKind::Integer,
            OptionSource::List(vec![Answer::Integer(10), Answer::Integer(2)]),
            None,
            &NullTranslator,
        )
        .unwrap();
        assert_eq!(set.labels(), ["10".to_string(), "2".to_string()]);
        assert_eq!(set.resolve("2"), Some(&Answer::Integer(2)));
    }

    #[test]
    fn test_list_labels_are_translated_but_values_kept() {
        let catalog = CatalogTranslator::new().with_phrase("apple", "pomme");
        let (set, _) = OptionSet::normalize(
            AnswerKind::Text,
            OptionSource::List(vec![Answer::from("apple"), Answer::from("banana")]),
            None,
            &catalog,
        )
        .unwrap();
        assert_eq!(set.labels(), ["pomme".to_string(), "banana".to_string()]);
        assert_eq!(set.resolve("pomme"), Some(&Answer::Text("apple".to_string())));
    }

    #[test]
    fn test_map_keys_skip_translation() {
        let catalog = CatalogTranslator::new().with_phrase("small", "petit");
        let (set, _) = OptionSet::normalize(
            AnswerKind::Integer,
            OptionSource::Map(vec![
                ("small".to_string(), Answer::Integer(1)),
                ("large".to_string(), Answer::Integer(3)),
            ]),
            None,
            &catalog,
        )
        .unwrap();
        assert_eq!(set.labels(), ["small".to_string(), "large".to_string()]);
        assert_eq!(set.resolve("small"), Some(&Answer::Integer(1)));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let catalog = CatalogTranslator::new()
            .with_phrase("a", "same")
            .with_phrase("b", "same");
        let err = OptionSet::normalize(
            AnswerKind::Text,
            OptionSource::List(vec![Answer::from("a"), Answer::from("b")]),
            None,
            &catalog,
        )
        .unwrap_err();
        assert!(matches!(err, PromptError::DuplicateLabel(label) if label == "same"));
    }

    #[test]
    fn test_absent_source_is_empty() {
        let (set, default) = OptionSet::normalize(
            AnswerKind::Text,
            OptionSource::None,
            Some(Answer::from("fallback")),
            &NullTranslator,
        )
        .unwrap();
        assert!(set.is_empty());
        assert_eq!(default, Some(Answer::Text("fallback".to_string())));
    }
}
