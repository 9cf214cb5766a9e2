use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::error::Result;
use crate::extensions::Extension;
use crate::matcher::{self, majorize, CompiledGroup, RuleGroup};
use crate::reconcile;
use crate::rules;
use crate::types::{
    Browser, BrowserType, Classification, ClientHints, Cpu, Device, DeviceType, Engine, Os,
};

/// Input longer than this is truncated before matching. Real agents never
/// come close; pathological ones can make the backtracking engine crawl.
const MAX_UA_LENGTH: usize = 500;

/// The five facet tables in compiled form, extension groups first.
struct CompiledTables {
    browser: Vec<CompiledGroup>,
    cpu: Vec<CompiledGroup>,
    device: Vec<CompiledGroup>,
    engine: Vec<CompiledGroup>,
    os: Vec<CompiledGroup>,
}

impl CompiledTables {
    fn compile(extensions: &[&Extension]) -> Result<Self> {
        fn facet(
            extensions: &[&Extension],
            pick: fn(&Extension) -> &'static [RuleGroup],
            base: &'static [RuleGroup],
        ) -> Result<Vec<CompiledGroup>> {
            let groups: Vec<&RuleGroup> = extensions
                .iter()
                .flat_map(|e| pick(e).iter())
                .chain(base.iter())
                .collect();
            groups.par_iter().map(|g| CompiledGroup::compile(g)).collect()
        }
        Ok(Self {
            browser: facet(extensions, |e| e.browser, rules::BROWSER)?,
            cpu: facet(extensions, |e| e.cpu, rules::CPU)?,
            device: facet(extensions, |e| e.device, rules::DEVICE)?,
            engine: facet(extensions, |e| e.engine, rules::ENGINE)?,
            os: facet(extensions, |e| e.os, rules::OS)?,
        })
    }
}

// The built-in tables are code, not user input, so compiling them cannot
// fail once they compile in tests.
static DEFAULT_TABLES: Lazy<CompiledTables> =
    Lazy::new(|| CompiledTables::compile(&[]).expect("built-in rule tables compile"));

enum TableSet {
    Default,
    Owned(CompiledTables),
}

/// Asynchronous supplier of high-entropy Client-Hints values, mirroring the
/// promise-returning `getHighEntropyValues()` host API.
#[async_trait]
pub trait HighEntropySource {
    async fn fetch(&self) -> ClientHints;
}

/// Rule-driven User-Agent classifier.
///
/// A classifier owns its compiled tables; [`Classifier::new`] shares a
/// process-wide compilation of the built-in tables, while
/// [`Classifier::with_extensions`] compiles a private, extended set.
pub struct Classifier {
    tables: TableSet,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            tables: TableSet::Default,
        }
    }

    /// Build a classifier whose tables are extended with `extensions`,
    /// consulted in the given order ahead of the built-in rules.
    pub fn with_extensions(extensions: &[&Extension]) -> Result<Self> {
        Ok(Self {
            tables: TableSet::Owned(CompiledTables::compile(extensions)?),
        })
    }

    fn tables(&self) -> &CompiledTables {
        match &self.tables {
            TableSet::Default => &DEFAULT_TABLES,
            TableSet::Owned(tables) => tables,
        }
    }

    /// Classify a raw User-Agent string.
    pub fn classify(&self, ua: &str) -> Classification {
        let ua = truncate_ua(ua);
        let tables = self.tables();

        let browser = matcher::run(ua, &tables.browser);
        let cpu = matcher::run(ua, &tables.cpu);
        let device = matcher::run(ua, &tables.device);
        let engine = matcher::run(ua, &tables.engine);
        let os = matcher::run(ua, &tables.os);

        Classification {
            ua: ua.to_string(),
            browser: Browser {
                major: browser.version.as_deref().and_then(majorize),
                name: browser.name,
                version: browser.version,
                r#type: browser.r#type.as_deref().and_then(BrowserType::from_str),
            },
            cpu: Cpu {
                architecture: cpu.architecture,
            },
            device: Device {
                r#type: device.r#type.as_deref().and_then(DeviceType::from_str),
                model: device.model,
                vendor: device.vendor,
            },
            engine: Engine {
                name: engine.name,
                version: engine.version,
            },
            os: Os {
                name: os.name,
                version: os.version,
            },
        }
    }

    /// Classify a User-Agent string, then fold structured Client-Hints data
    /// over the result. Hinted fields win over UA-derived ones.
    pub fn classify_with_hints(&self, ua: &str, hints: &ClientHints) -> Classification {
        let mut out = self.classify(ua);
        if hints.is_empty() {
            return out;
        }
        debug!("reconciling with client hints");
        let tables = self.tables();
        reconcile::browser(&mut out.browser, hints);
        reconcile::cpu(&mut out.cpu, hints, &tables.cpu);
        reconcile::device(&mut out.device, hints, &tables.device);
        reconcile::engine(&mut out.engine, hints);
        reconcile::os(&mut out.os, hints);
        out
    }

    /// Classify after fetching high-entropy Client-Hints values from an
    /// asynchronous source.
    pub async fn classify_enriched<S>(&self, ua: &str, source: &S) -> Classification
    where
        S: HighEntropySource + Sync + ?Sized,
    {
        let hints = source.fetch().await;
        self.classify_with_hints(ua, &hints)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_ua(ua: &str) -> &str {
    if ua.len() <= MAX_UA_LENGTH {
        return ua;
    }
    let mut end = MAX_UA_LENGTH;
    while !ua.is_char_boundary(end) {
        end -= 1;
    }
    &ua[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        let ua = format!("{}é", "a".repeat(499));
        assert_eq!(truncate_ua(&ua).len(), 499);
        assert_eq!(truncate_ua("short"), "short");
    }

    #[test]
    fn empty_ua_yields_empty_classification() {
        let out = Classifier::new().classify("");
        assert_eq!(out, Classification::default());
    }

    #[test]
    fn every_bundled_table_compiles() {
        use crate::extensions::{
            CLIS, CRAWLERS, EMAILS, EXTRA_DEVICES, FETCHERS, INAPPS, LIBRARIES, MEDIA_PLAYERS,
            VEHICLES,
        };
        let all = [
            &CLIS,
            &CRAWLERS,
            &EMAILS,
            &FETCHERS,
            &INAPPS,
            &LIBRARIES,
            &MEDIA_PLAYERS,
            &VEHICLES,
            &EXTRA_DEVICES,
        ];
        assert!(CompiledTables::compile(&all).is_ok());
    }

    #[test]
    fn default_tables_are_shared() {
        // Two classifiers from new() must agree; this also forces the lazy
        // compilation in the test process.
        let a = Classifier::new();
        let b = Classifier::new();
        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
        assert_eq!(a.classify(ua), b.classify(ua));
    }
}
