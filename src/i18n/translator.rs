//! Translator Module
//!
//! Translation implementations for prompt text and option labels.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Maps display text to localized text.
///
/// Implementations must be pure: the same input always produces the same
/// output for the life of the process.
pub trait Translate {
    fn translate(&self, text: &str) -> String;
}

/// Identity translator used when no localization is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translate for NullTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// In-memory phrase catalog; unknown phrases pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    phrases: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a phrase translation.
    pub fn with_phrase(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.phrases.insert(from.into(), to.into());
        self
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Translate for CatalogTranslator {
    fn translate(&self, text: &str) -> String {
        self.phrases
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

// Translations are static per locale, so the cache never needs invalidation.
static TRANSLATION_CACHE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Memoized translation keyed by input string.
///
/// The cache is process-wide and lives for the program run; use it when a
/// single locale is active for the program's lifetime. Falls back to a
/// direct call if the cache lock is poisoned.
pub fn translate_cached<T: Translate + ?Sized>(translator: &T, text: &str) -> String {
    if let Ok(cache) = TRANSLATION_CACHE.lock() {
        if let Some(hit) = cache.get(text) {
            return hit.clone();
        }
    }

    let translated = translator.translate(text);

    if let Ok(mut cache) = TRANSLATION_CACHE.lock() {
        cache.insert(text.to_string(), translated.clone());
    }
    translated
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingTranslator {
        calls: AtomicUsize,
    }

    impl CountingTranslator {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Translate for CountingTranslator {
        fn translate(&self, text: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("<{}>", text)
        }
    }

    #[test]
    fn test_null_translator_is_identity() {
        assert_eq!(NullTranslator.translate("Continue?"), "Continue?");
    }

    #[test]
    fn test_catalog_hit_and_miss() {
        let catalog = CatalogTranslator::new()
            .with_phrase("y", "oui")
            .with_phrase("n", "non");
        assert_eq!(catalog.translate("y"), "oui");
        assert_eq!(catalog.translate("maybe"), "maybe");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_cached_translation_calls_inner_once() {
        // Unique key so other tests sharing the process-wide cache cannot
        // interfere with this one.
        let key = "quest-test-cache-probe";
        let counting = CountingTranslator::new();
        let first = translate_cached(&counting, key);
        let second = translate_cached(&counting, key);
        assert_eq!(first, format!("<{}>", key));
        assert_eq!(first, second);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }
}
