//! Rule-driven User-Agent classification.
//!
//! `ua-sift` splits a User-Agent string into five facets (browser, CPU,
//! device, engine, OS) by walking ordered regex rule tables, then optionally
//! refines the result with structured Client-Hints data and live
//! environment feature checks.
//!
//! ```
//! use ua_sift::Classifier;
//!
//! let classifier = Classifier::new();
//! let result = classifier.classify(
//!     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
//!      (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36",
//! );
//! assert_eq!(result.browser.name.as_deref(), Some("Chrome"));
//! assert_eq!(result.browser.major.as_deref(), Some("115"));
//! assert_eq!(result.os.name.as_deref(), Some("Windows"));
//! ```
//!
//! Agents outside the regular browser population (crawlers, CLI tools,
//! media players, ...) are covered by opt-in [`extensions`]:
//!
//! ```
//! use ua_sift::{extensions, Classifier};
//!
//! let classifier = Classifier::with_extensions(extensions::BOTS).unwrap();
//! let result = classifier.classify("curl/8.1.2");
//! assert!(result.browser.is("cli"));
//! ```

mod classifier;
mod error;
pub mod extensions;
mod feature;
mod helpers;
mod matcher;
mod reconcile;
mod rules;
mod str_map;
mod types;

pub use classifier::{Classifier, HighEntropySource};
pub use error::{Error, Result};
pub use feature::FeatureProbe;
pub use helpers::{is_ai_bot, is_ai_bot_ua, is_bot, is_bot_ua};
pub use matcher::{Field, FieldSpec, RuleGroup, Transform};
pub use str_map::{MapVal, StrMap};
pub use types::{
    BrandVersion, Browser, BrowserType, Classification, ClientHints, Cpu, Device, DeviceType,
    Engine, Os,
};
