use std::borrow::Cow;

use log::{debug, trace};

use crate::error::Result;
use crate::str_map::StrMap;

// ---------------------------------------------------------------------------
// Static rule model
// ---------------------------------------------------------------------------

/// Output slot a field spec writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Version,
    Type,
    Architecture,
    Model,
    Vendor,
}

/// Post-processing applied to a capture before assignment.
#[derive(Clone, Copy)]
pub enum Transform {
    /// Lowercase the capture.
    Lower,
    /// Trim surrounding whitespace.
    Trim,
    /// Classify the capture through a categorical table.
    Map(&'static StrMap),
    /// Arbitrary function of the capture.
    Apply(fn(&str) -> Option<String>),
}

/// Declarative instruction for turning one capture group into one output
/// field. Specs are consumed positionally: each spec advances the capture
/// cursor by exactly one group, whether or not it uses the captured text.
#[derive(Clone, Copy)]
pub enum FieldSpec {
    /// Assign the capture verbatim.
    Cap(Field),
    /// Ignore the capture; assign a constant.
    Lit(Field, &'static str),
    /// Assign the transformed capture.
    Fun(Field, Transform),
    /// Find-and-replace on the capture (regex pattern, replacement).
    Sub(Field, &'static str, &'static str),
    /// Find-and-replace, then transform.
    SubFun(Field, &'static str, &'static str, Transform),
}

/// An ordered list of patterns sharing one extraction spec. Within a group
/// the first matching pattern wins; across a table the first matching group
/// wins.
pub struct RuleGroup {
    pub patterns: &'static [&'static str],
    pub specs: &'static [FieldSpec],
}

// ---------------------------------------------------------------------------
// Compiled form
// ---------------------------------------------------------------------------

/// A compiled UA pattern. Patterns the `regex` crate accepts take the fast
/// path; lookaround/backreference patterns fall back to `fancy_regex`.
pub(crate) enum Pattern {
    Standard(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Pattern {
    /// Compile `pattern` case-insensitively, picking the engine that accepts
    /// it. Only patterns rejected by both engines are an error.
    pub fn compile(pattern: &str) -> Result<Self> {
        let full = format!("(?i){pattern}");
        match regex::Regex::new(&full) {
            Ok(re) => Ok(Pattern::Standard(re)),
            Err(_) => Ok(Pattern::Fancy(fancy_regex::Regex::new(&full)?)),
        }
    }

    fn captures<'a>(&self, haystack: &'a str) -> Option<Captures<'a>> {
        match self {
            Pattern::Standard(re) => re.captures(haystack).map(Captures::Standard),
            Pattern::Fancy(re) => re
                .captures(haystack)
                .ok()
                .flatten()
                .map(Captures::Fancy),
        }
    }
}

/// Unified capture access over the two regex engines.
pub(crate) enum Captures<'a> {
    Standard(regex::Captures<'a>),
    Fancy(fancy_regex::Captures<'a>),
}

impl<'a> Captures<'a> {
    fn get_str(&self, i: usize) -> Option<&'a str> {
        match self {
            Captures::Standard(c) => c.get(i).map(|m| m.as_str()),
            Captures::Fancy(c) => c.get(i).map(|m| m.as_str()),
        }
    }
}

/// A field spec with its replacement pattern pre-compiled.
pub(crate) enum CompiledSpec {
    Cap(Field),
    Lit(Field, &'static str),
    Fun(Field, Transform),
    Sub(Field, regex::Regex, &'static str),
    SubFun(Field, regex::Regex, &'static str, Transform),
}

impl CompiledSpec {
    fn compile(spec: &FieldSpec) -> Result<Self> {
        Ok(match *spec {
            FieldSpec::Cap(f) => CompiledSpec::Cap(f),
            FieldSpec::Lit(f, v) => CompiledSpec::Lit(f, v),
            FieldSpec::Fun(f, t) => CompiledSpec::Fun(f, t),
            FieldSpec::Sub(f, p, r) => CompiledSpec::Sub(f, regex::Regex::new(p)?, r),
            FieldSpec::SubFun(f, p, r, t) => {
                CompiledSpec::SubFun(f, regex::Regex::new(p)?, r, t)
            }
        })
    }
}

pub(crate) struct CompiledGroup {
    patterns: Vec<Pattern>,
    specs: Vec<CompiledSpec>,
}

impl CompiledGroup {
    pub fn compile(group: &RuleGroup) -> Result<Self> {
        Ok(Self {
            patterns: group
                .patterns
                .iter()
                .map(|p| Pattern::compile(p))
                .collect::<Result<_>>()?,
            specs: group
                .specs
                .iter()
                .map(CompiledSpec::compile)
                .collect::<Result<_>>()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Raw field values produced by one matching pass, before facet typing.
#[derive(Debug, Clone, Default)]
pub(crate) struct Extracted {
    pub name: Option<String>,
    pub version: Option<String>,
    pub r#type: Option<String>,
    pub architecture: Option<String>,
    pub model: Option<String>,
    pub vendor: Option<String>,
}

impl Extracted {
    fn set(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::Name => self.name = value,
            Field::Version => self.version = value,
            Field::Type => self.r#type = value,
            Field::Architecture => self.architecture = value,
            Field::Model => self.model = value,
            Field::Vendor => self.vendor = value,
        }
    }
}

/// Walk `groups` in table order and return the fields extracted by the first
/// matching pattern of the first matching group. No match leaves every field
/// `None`.
pub(crate) fn run(ua: &str, groups: &[CompiledGroup]) -> Extracted {
    let mut out = Extracted::default();
    if ua.is_empty() {
        return out;
    }
    for (gi, group) in groups.iter().enumerate() {
        for pattern in &group.patterns {
            if let Some(caps) = pattern.captures(ua) {
                trace!("rule group {gi} matched");
                apply_specs(&mut out, &group.specs, &caps);
                return out;
            }
        }
    }
    debug!("no rule matched: {ua:?}");
    out
}

fn apply_specs(out: &mut Extracted, specs: &[CompiledSpec], caps: &Captures<'_>) {
    // Capture group 0 is the whole match; specs consume groups from 1 up,
    // one per spec, in declaration order. A capture that matched nothing is
    // treated the same as one that did not participate.
    for (i, spec) in specs.iter().enumerate() {
        let cap = caps.get_str(i + 1).filter(|c| !c.is_empty());
        match spec {
            CompiledSpec::Cap(f) => out.set(*f, cap.map(str::to_string)),
            CompiledSpec::Lit(f, v) => out.set(*f, Some((*v).to_string())),
            CompiledSpec::Fun(f, t) => {
                out.set(*f, cap.and_then(|c| apply_transform(t, c)))
            }
            CompiledSpec::Sub(f, re, repl) => {
                out.set(*f, cap.map(|c| re.replace_all(c, *repl).into_owned()))
            }
            CompiledSpec::SubFun(f, re, repl, t) => out.set(
                *f,
                cap.and_then(|c| apply_transform(t, &re.replace_all(c, *repl))),
            ),
        }
    }
}

fn apply_transform(transform: &Transform, value: &str) -> Option<String> {
    match transform {
        Transform::Lower => Some(value.to_lowercase()),
        Transform::Trim => Some(value.trim().to_string()),
        Transform::Map(map) => map.lookup(value).map(Cow::into_owned),
        Transform::Apply(f) => f(value),
    }
}

/// Integer part of a version string: strip every character that is neither a
/// digit nor a dot, then keep the segment before the first dot.
pub(crate) fn majorize(version: &str) -> Option<String> {
    let digits: String = version.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    let major = digits.split('.').next().unwrap_or("");
    if major.is_empty() {
        None
    } else {
        Some(major.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(groups: &[RuleGroup]) -> Vec<CompiledGroup> {
        groups.iter().map(|g| CompiledGroup::compile(g).unwrap()).collect()
    }

    #[test]
    fn first_group_wins() {
        static GROUPS: &[RuleGroup] = &[
            RuleGroup {
                patterns: &[r"alpha/([\w\.]+)"],
                specs: &[FieldSpec::Cap(Field::Version), FieldSpec::Lit(Field::Name, "Alpha")],
            },
            RuleGroup {
                patterns: &[r"(alpha)/([\w\.]+)"],
                specs: &[FieldSpec::Cap(Field::Name), FieldSpec::Cap(Field::Version)],
            },
        ];
        let compiled = compile(GROUPS);
        let out = run("Alpha/1.2", &compiled);
        assert_eq!(out.name.as_deref(), Some("Alpha"));
        assert_eq!(out.version.as_deref(), Some("1.2"));
    }

    #[test]
    fn first_pattern_within_group_wins() {
        static GROUPS: &[RuleGroup] = &[RuleGroup {
            patterns: &[r"(one)", r"(two)"],
            specs: &[FieldSpec::Cap(Field::Name)],
        }];
        let compiled = compile(GROUPS);
        assert_eq!(run("one two", &compiled).name.as_deref(), Some("one"));
    }

    #[test]
    fn literal_specs_consume_a_capture_slot() {
        static GROUPS: &[RuleGroup] = &[RuleGroup {
            patterns: &[r"thing/([\w\.]+) \((\w+)\)"],
            specs: &[
                FieldSpec::Cap(Field::Version),
                FieldSpec::Lit(Field::Name, "Thing"),
                FieldSpec::Cap(Field::Model),
            ],
        }];
        let compiled = compile(GROUPS);
        let out = run("thing/2.0 (widget) extra", &compiled);
        assert_eq!(out.version.as_deref(), Some("2.0"));
        assert_eq!(out.name.as_deref(), Some("Thing"));
        // The literal consumed group 2, so Model reads group 3 (absent).
        assert_eq!(out.model, None);
    }

    #[test]
    fn replace_spec_rewrites_capture() {
        static GROUPS: &[RuleGroup] = &[RuleGroup {
            patterns: &[r"os ([\w_]+)"],
            specs: &[FieldSpec::Sub(Field::Version, "_", ".")],
        }];
        let compiled = compile(GROUPS);
        assert_eq!(run("os 16_5_1", &compiled).version.as_deref(), Some("16.5.1"));
    }

    #[test]
    fn lookaround_patterns_fall_back_to_fancy() {
        static GROUPS: &[RuleGroup] = &[RuleGroup {
            patterns: &[r"whale(?!.+naver)/([\w\.]+)"],
            specs: &[FieldSpec::Cap(Field::Version), FieldSpec::Lit(Field::Name, "Whale")],
        }];
        let compiled = compile(GROUPS);
        assert_eq!(run("Whale/3.0", &compiled).name.as_deref(), Some("Whale"));
        assert_eq!(run("Whale/3.0 naver", &compiled).name, None);
    }

    #[test]
    fn empty_capture_leaves_the_field_unset() {
        static GROUPS: &[RuleGroup] = &[RuleGroup {
            patterns: &[r"thing/?([\d\.]*)"],
            specs: &[FieldSpec::Cap(Field::Version), FieldSpec::Lit(Field::Name, "Thing")],
        }];
        let compiled = compile(GROUPS);
        let out = run("thing", &compiled);
        assert_eq!(out.name.as_deref(), Some("Thing"));
        assert_eq!(out.version, None);
    }

    #[test]
    fn no_match_leaves_fields_unset() {
        static GROUPS: &[RuleGroup] = &[RuleGroup {
            patterns: &[r"(nothing)"],
            specs: &[FieldSpec::Cap(Field::Name)],
        }];
        let compiled = compile(GROUPS);
        let out = run("Mozilla/5.0", &compiled);
        assert!(out.name.is_none() && out.version.is_none());
    }

    #[test]
    fn majorize_takes_leading_integer() {
        assert_eq!(majorize("115.0.5790.170").as_deref(), Some("115"));
        assert_eq!(majorize("16_5").as_deref(), Some("165"));
        assert_eq!(majorize("1.2b3").as_deref(), Some("1"));
        assert_eq!(majorize("beta"), None);
    }
}
