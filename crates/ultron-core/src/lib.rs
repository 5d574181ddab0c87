//! Ultron Core - rule-based intent parsing for a desktop voice assistant
//!
//! This library provides:
//! - Transcript normalization and wake-word stripping
//! - A fixed-priority cascade of pattern matchers producing one intent
//! - Fuzzy site/app alias resolution
//! - Action planning for a dispatcher, site-search URL building
//! - A labeled corpus evaluator for tuning the matchers

pub mod aliases;
pub mod config;
pub mod corpus;
pub mod devices;
pub mod dispatch;
pub mod intent;
pub mod matchers;
pub mod normalize;
pub mod site_search;
pub mod slots;

mod parser;

pub use config::{env_vars, Browser, Config, ConfigError, Units};
pub use corpus::{Corpus, CorpusError, EvalReport};
pub use dispatch::{plan, Action};
pub use intent::{Intent, IntentResult, Slots};
pub use matchers::Category;
pub use parser::{parse_intent, Classification, IntentParser, ParserOptions};
pub use site_search::{build_site_search_url, ensure_url};
