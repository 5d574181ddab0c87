//! Intent parser entry point
//!
//! Normalizes the transcript, strips the wake word, then runs the matcher
//! cascade. Parsing is total: every input, including empty or absent text,
//! produces exactly one [`IntentResult`].

use crate::aliases::DEFAULT_ALIAS_CUTOFF;
use crate::config::Config;
use crate::intent::IntentResult;
use crate::matchers::{self, Category, MatchContext};
use crate::normalize;

/// Tunables for the parser
#[derive(Debug, Clone, PartialEq)]
pub struct ParserOptions {
    /// Similarity cutoff for fuzzy alias lookups
    pub alias_cutoff: f32,
    /// Leading wake word to strip; empty disables stripping
    pub wake_word: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            alias_cutoff: DEFAULT_ALIAS_CUTOFF,
            wake_word: "ultron".to_string(),
        }
    }
}

/// The outcome of a parse, with the category that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Text after normalization and wake-word stripping
    pub normalized: String,
    /// `None` when nothing fired
    pub category: Option<Category>,
    pub result: IntentResult,
}

/// Stateless rule-based parser. Cheap to clone and safe to share.
#[derive(Debug, Clone, Default)]
pub struct IntentParser {
    options: ParserOptions,
}

impl IntentParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Parser tuned by the `[matching]` section of a config
    pub fn from_config(config: &Config) -> Self {
        Self::new(ParserOptions {
            alias_cutoff: config.matching.alias_cutoff,
            wake_word: config.matching.wake_word.clone(),
        })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Classify one utterance
    pub fn parse(&self, text: &str) -> IntentResult {
        self.classify(text).result
    }

    /// Absent text is treated like empty text
    pub fn parse_opt(&self, text: Option<&str>) -> IntentResult {
        self.parse(text.unwrap_or_default())
    }

    /// Classify and report which category fired
    pub fn classify(&self, text: &str) -> Classification {
        let normalized = normalize::normalize(text);
        let normalized = normalize::strip_wake_word(&normalized, &self.options.wake_word);
        tracing::trace!(raw = text, normalized = %normalized, "Normalized utterance");

        if normalized.is_empty() {
            return Classification {
                normalized,
                category: None,
                result: IntentResult::unknown(),
            };
        }

        let ctx = MatchContext {
            alias_cutoff: self.options.alias_cutoff,
        };

        match matchers::run_cascade(&ctx, &normalized) {
            Some((category, result)) => {
                tracing::debug!(
                    category = category.as_str(),
                    intent = %result.intent,
                    entity = ?result.entity,
                    "Matched utterance"
                );
                Classification {
                    normalized,
                    category: Some(category),
                    result,
                }
            }
            None => {
                tracing::debug!(text = %normalized, "No category matched");
                Classification {
                    normalized,
                    category: None,
                    result: IntentResult::unknown(),
                }
            }
        }
    }
}

/// Parse with default options
pub fn parse_intent(text: &str) -> IntentResult {
    IntentParser::default().parse(text)
}
