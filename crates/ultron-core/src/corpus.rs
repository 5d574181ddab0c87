//! Labeled utterance corpus
//!
//! A TOML list of spoken phrasings with the intent, entity and slots the
//! parser must produce for each. Used to tune the fuzzy cutoffs and as a
//! regression suite.
//!
//! ```toml
//! [[case]]
//! text = "what's the weather in Hyderabad tomorrow"
//! intent = "weather.get"
//! slots = { city = "Hyderabad", when = "tomorrow" }
//!
//! [[case]]
//! text = "switch audio to headphones"
//! intent = "audio_switch_output"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::intent::{Intent, IntentResult};
use crate::parser::IntentParser;

const BUILTIN_CORPUS: &str = include_str!("../../../corpus/utterances.toml");

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Failed to read corpus from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse corpus: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Case {index} ({text:?}) names unknown intent {intent:?}")]
    UnknownIntent {
        index: usize,
        text: String,
        intent: String,
    },

    #[error("Corpus has no cases")]
    Empty,
}

/// One labeled utterance
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledCase {
    pub text: String,
    /// Expected intent tag
    pub intent: String,
    /// Expected entity; omitted means the entity must be absent
    #[serde(default)]
    pub entity: Option<String>,
    /// Slots that must be present with these values
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
    /// Slots that must be present but empty
    #[serde(default)]
    pub absent: Vec<String>,
}

/// Why a case failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    Intent,
    Entity,
    Slot,
    AbsentSlot,
}

impl MismatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchKind::Intent => "Wrong intent",
            MismatchKind::Entity => "Wrong entity",
            MismatchKind::Slot => "Wrong slot value",
            MismatchKind::AbsentSlot => "Slot should be empty",
        }
    }
}

/// A case the parser got wrong
#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub text: String,
    pub kind: MismatchKind,
    /// Human-readable expectation, e.g. `city = "Hyderabad"`
    pub expected: String,
    pub actual: IntentResult,
}

impl LabeledCase {
    /// Parse the case text and compare against the labels
    pub fn check(&self, parser: &IntentParser) -> Result<(), CaseFailure> {
        let actual = parser.parse(&self.text);
        let fail = |kind: MismatchKind, expected: String| CaseFailure {
            text: self.text.clone(),
            kind,
            expected,
            actual: actual.clone(),
        };

        if actual.intent.as_str() != self.intent {
            return Err(fail(MismatchKind::Intent, self.intent.clone()));
        }

        if actual.entity != self.entity {
            return Err(fail(MismatchKind::Entity, format!("{:?}", self.entity)));
        }

        for (name, value) in &self.slots {
            if actual.get_slot(name) != Some(value.as_str()) {
                return Err(fail(MismatchKind::Slot, format!("{name} = {value:?}")));
            }
        }

        for name in &self.absent {
            if !matches!(actual.slots.get(name), Some(None)) {
                return Err(fail(MismatchKind::AbsentSlot, format!("{name} = null")));
            }
        }

        Ok(())
    }
}

/// Aggregate outcome of running a corpus
#[derive(Debug, Clone, Default)]
pub struct EvalReport {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

impl EvalReport {
    /// Fraction of cases that passed, 1.0 for an empty run
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }

    pub fn record(&mut self, outcome: Result<(), CaseFailure>) {
        self.total += 1;
        match outcome {
            Ok(()) => self.passed += 1,
            Err(failure) => self.failures.push(failure),
        }
    }

    /// Failure counts per kind, most frequent first
    pub fn failures_by_kind(&self) -> Vec<(MismatchKind, usize)> {
        let mut counts: BTreeMap<&'static str, (MismatchKind, usize)> = BTreeMap::new();
        for failure in &self.failures {
            counts.entry(failure.kind.as_str()).or_insert((failure.kind, 0)).1 += 1;
        }
        let mut sorted: Vec<(MismatchKind, usize)> = counts.into_values().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    #[serde(rename = "case", default)]
    pub cases: Vec<LabeledCase>,
}

impl Corpus {
    /// The corpus compiled into the crate
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::from_toml_str(BUILTIN_CORPUS)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CorpusError> {
        let corpus: Corpus = toml::from_str(contents)?;
        corpus.validate()?;
        Ok(corpus)
    }

    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_toml_str(&contents)?;
        tracing::info!(path = ?path, cases = corpus.cases.len(), "Loaded corpus");
        Ok(corpus)
    }

    /// Every case must name a real intent tag
    fn validate(&self) -> Result<(), CorpusError> {
        if self.cases.is_empty() {
            return Err(CorpusError::Empty);
        }
        for (index, case) in self.cases.iter().enumerate() {
            if Intent::from_tag(&case.intent).is_none() {
                return Err(CorpusError::UnknownIntent {
                    index,
                    text: case.text.clone(),
                    intent: case.intent.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn evaluate(&self, parser: &IntentParser) -> EvalReport {
        let mut report = EvalReport::default();
        for case in &self.cases {
            report.record(case.check(parser));
        }
        report
    }
}
