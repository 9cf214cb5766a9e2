//! Convenience predicates over classification results.

use once_cell::sync::Lazy;

use crate::classifier::Classifier;
use crate::extensions::BOTS;
use crate::types::{BrowserType, Classification};

// The bot tables are static and known-good; compilation cannot fail once
// covered by tests.
static BOT_CLASSIFIER: Lazy<Classifier> =
    Lazy::new(|| Classifier::with_extensions(BOTS).expect("bot extension tables compile"));

/// Browser names of crawlers operated for AI training or retrieval,
/// lowercased for comparison.
const AI_BOT_NAMES: &[&str] = &[
    "ai2bot",
    "amazonbot",
    "anthropic-ai",
    "claude-web",
    "claudebot",
    "applebot",
    "applebot-extended",
    "bytespider",
    "ccbot",
    "dataforseobot",
    "diffbot",
    "googleother",
    "googleother-image",
    "googleother-video",
    "google-extended",
    "imagesiftbot",
    "petalbot",
    "facebookbot",
    "meta-externalagent",
    "gptbot",
    "oai-searchbot",
    "perplexitybot",
    "semrushbot-ocob",
    "timpibot",
    "velenpublicwebcrawler",
    "omgili",
    "omgilibot",
    "webzio-extended",
    "youbot",
    "scrapy",
];

/// True when the classified browser is an automated agent: a CLI tool,
/// crawler, fetcher, or HTTP library.
pub fn is_bot(classification: &Classification) -> bool {
    matches!(
        classification.browser.r#type,
        Some(BrowserType::Cli | BrowserType::Crawler | BrowserType::Fetcher | BrowserType::Library)
    )
}

/// Classify `ua` against the bot extension tables and report whether it is
/// an automated agent.
pub fn is_bot_ua(ua: &str) -> bool {
    is_bot(&BOT_CLASSIFIER.classify(ua))
}

/// True when the classified browser is a known AI crawler.
pub fn is_ai_bot(classification: &Classification) -> bool {
    classification
        .browser
        .name
        .as_deref()
        .is_some_and(|name| AI_BOT_NAMES.contains(&name.to_lowercase().as_str()))
}

/// Classify `ua` against the bot extension tables and report whether it is
/// a known AI crawler.
pub fn is_ai_bot_ua(ua: &str) -> bool {
    is_ai_bot(&BOT_CLASSIFIER.classify(ua))
}
