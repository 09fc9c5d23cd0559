//! Question Module
//!
//! The caller-facing surface: a chainable [`Question`] builder whose
//! `build()` normalizes options and derives aliases up front, and the
//! resulting [`Prompt`] whose `ask()` acquires input, substitutes the
//! default, resolves aliases and option values, and coerces the answer.

use tracing::debug;

use crate::i18n::{NullTranslator, Translate};
use crate::terminal::Terminal;

use super::alias::AliasTable;
use super::answer::{coerce, Answer, AnswerKind};
use super::autocomplete;
use super::config::PromptConfig;
use super::error::PromptError;
use super::options::{OptionSet, OptionSource};
use super::render;

/// Builder for an interactive question.
///
/// Configuration problems (impossible alias derivation, duplicate labels)
/// surface from [`Question::build`], not from `ask()`.
pub struct Question {
    text: String,
    kind: AnswerKind,
    default: Option<Answer>,
    source: OptionSource,
    aliases: Vec<(char, String)>,
    auto_complete: bool,
    translator: Box<dyn Translate>,
    config: PromptConfig,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: AnswerKind::Text,
            default: None,
            source: OptionSource::None,
            aliases: Vec::new(),
            auto_complete: false,
            translator: Box::new(NullTranslator),
            config: PromptConfig::default(),
        }
    }

    /// Target type the answer is coerced to.
    pub fn with_kind(mut self, kind: AnswerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Value substituted when the response is empty.
    pub fn with_default(mut self, default: impl Into<Answer>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Ordered option values; each value's string form becomes its label.
    pub fn with_options<I, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Answer>,
    {
        self.source = OptionSource::List(options.into_iter().map(Into::into).collect());
        self
    }

    /// Insertion-ordered label→value pairs; labels are used as-is.
    pub fn with_option_map<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Answer>,
    {
        self.source = OptionSource::Map(
            entries
                .into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Pin an explicit shortcut; derivation fills in the rest around it.
    pub fn with_alias(mut self, alias: char, label: impl Into<String>) -> Self {
        self.aliases.push((alias, label.into()));
        self
    }

    /// Collect the answer through the incremental auto-complete loop.
    pub fn with_auto_complete(mut self, enabled: bool) -> Self {
        self.auto_complete = enabled;
        self
    }

    pub fn with_translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn with_config(mut self, config: PromptConfig) -> Self {
        self.config = config;
        self
    }

    /// Normalize options, rewrite the default, and derive aliases.
    pub fn build(self) -> Result<Prompt, PromptError> {
        let text = self.translator.translate(&self.text);
        let (options, default) = OptionSet::normalize(
            self.kind,
            self.source,
            self.default,
            self.translator.as_ref(),
        )?;

        // Auto-complete keeps explicit aliases but never derives more
        let aliases = if self.auto_complete {
            AliasTable::seeded(options.labels(), &self.aliases)?
        } else {
            AliasTable::derive(options.labels(), &self.aliases)?
        };

        let use_keystroke = !options.is_empty() && !self.auto_complete;

        Ok(Prompt {
            text,
            kind: self.kind,
            default,
            options,
            aliases,
            auto_complete: self.auto_complete,
            use_keystroke,
            config: self.config,
        })
    }
}

/// A built question, immutable and ready to ask.
#[derive(Debug)]
pub struct Prompt {
    text: String,
    kind: AnswerKind,
    default: Option<Answer>,
    options: OptionSet,
    aliases: AliasTable,
    auto_complete: bool,
    use_keystroke: bool,
    config: PromptConfig,
}

impl Prompt {
    /// Render the prompt, acquire input, and resolve the typed answer.
    ///
    /// Returns `Ok(None)` when the response is empty and no default is
    /// configured: "no answer" is a valid outcome, not an error. Parse
    /// failures propagate; there is no built-in retry.
    pub fn ask<T: Terminal + ?Sized>(
        &self,
        terminal: &mut T,
    ) -> Result<Option<Answer>, PromptError> {
        let suffix = render::prompt_suffix(
            &self.options,
            &self.aliases,
            self.default.as_ref(),
            &self.config,
            terminal,
        );
        let prompt = format!("{}{}{}", self.text, suffix, self.config.prompt_separator);
        debug!(
            question = %self.text,
            auto_complete = self.auto_complete,
            keystroke = self.use_keystroke,
            "asking"
        );

        let response = if self.auto_complete {
            let label =
                autocomplete::run_loop(&prompt, self.options.labels(), &self.config, terminal)?;
            Some(Answer::Text(label))
        } else if self.use_keystroke {
            self.ask_keystroke(&prompt, terminal)?
        } else {
            self.ask_line(&prompt, terminal)?
        };

        let value = match response {
            Some(value) => value,
            None => {
                debug!(question = %self.text, "no answer");
                return Ok(None);
            }
        };

        let answer = match value {
            Answer::Text(text) => self.resolve_text(text)?,
            typed => typed,
        };
        debug!(question = %self.text, answer = %answer, "resolved");
        Ok(Some(answer))
    }

    /// Single-keystroke input; the resolved raw input is echoed because
    /// raw capture does not echo on its own.
    fn ask_keystroke<T: Terminal + ?Sized>(
        &self,
        prompt: &str,
        terminal: &mut T,
    ) -> Result<Option<Answer>, PromptError> {
        terminal.print(prompt)?;
        let key = terminal.read_key(false)?;
        let typed = match key.as_char() {
            Some(c) => c.to_string(),
            None => String::new(),
        };

        let response = self.substitute_default(&typed);
        let response = self.apply_exact_alias(response);

        match &response {
            Some(value) => terminal.print_line(&value.to_string())?,
            None => terminal.print_line("")?,
        }
        Ok(response)
    }

    fn ask_line<T: Terminal + ?Sized>(
        &self,
        prompt: &str,
        terminal: &mut T,
    ) -> Result<Option<Answer>, PromptError> {
        terminal.print(prompt)?;
        let line = terminal.read_line()?;
        Ok(self.apply_exact_alias(self.substitute_default(&line)))
    }

    /// Empty trimmed input falls back to the default, which may itself be
    /// absent.
    fn substitute_default(&self, raw: &str) -> Option<Answer> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.default.clone()
        } else {
            Some(Answer::Text(trimmed.to_string()))
        }
    }

    fn apply_exact_alias(&self, response: Option<Answer>) -> Option<Answer> {
        match response {
            Some(Answer::Text(text)) => match self.aliases.resolve(&text) {
                Some(label) => Some(Answer::Text(label.to_string())),
                None => Some(Answer::Text(text)),
            },
            other => other,
        }
    }

    /// Alias fold, option lookup, then coercion to the target kind.
    fn resolve_text(&self, text: String) -> Result<Answer, PromptError> {
        let text = match self.aliases.resolve_fold(&text) {
            Some(label) => label.to_string(),
            None => text,
        };
        let value = match self.options.resolve(&text) {
            Some(value) => value.clone(),
            None => Answer::Text(text),
        };
        match value {
            Answer::Text(text) => coerce(self.kind, &text),
            typed => Ok(typed),
        }
    }
}
