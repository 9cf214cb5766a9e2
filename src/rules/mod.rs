//! Built-in rule tables, one ordered decision list per facet. Volume-wise
//! this is mostly declarative data; the matching semantics live in
//! [`crate::matcher`].

mod browser;
mod cpu;
mod device;
mod engine;
mod os;

use crate::matcher::{FieldSpec, RuleGroup};

pub(crate) use browser::{BROWSER, BROWSER_ALIASES};
pub(crate) use cpu::CPU;
pub(crate) use device::DEVICE;
pub(crate) use engine::ENGINE;
pub(crate) use os::OS;

/// Shorthand constructor used by the table modules.
pub(crate) const fn rg(patterns: &'static [&'static str], specs: &'static [FieldSpec]) -> RuleGroup {
    RuleGroup { patterns, specs }
}
