use std::fmt;

use super::{BrowserType, DeviceType};

/// Strips a trailing " Browser"/"Browser" suffix before equality checks, so
/// `is("Huawei")` matches a browser named "HuaweiBrowser".
fn strip_browser_suffix(s: &str) -> &str {
    strip_suffix_ci(s, "browser")
}

fn strip_os_suffix(s: &str) -> &str {
    strip_suffix_ci(s, "os")
}

fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> &'a str {
    if s.len() < suffix.len() || !s.is_char_boundary(s.len() - suffix.len()) {
        return s;
    }
    let mut end = s.len() - suffix.len();
    if !s[end..].eq_ignore_ascii_case(suffix) {
        return s;
    }
    if s[..end].ends_with(' ') {
        end -= 1;
    }
    &s[..end]
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Browser {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Integer part of `version`.
    pub major: Option<String>,
    pub r#type: Option<BrowserType>,
}

impl Browser {
    /// Case-insensitive equality against the browser name (ignoring a
    /// trailing " Browser" suffix on either side) or type. Version fields
    /// are never consulted.
    pub fn is(&self, what: &str) -> bool {
        let what_stripped = strip_browser_suffix(what);
        self.name
            .as_deref()
            .is_some_and(|n| eq_ci(strip_browser_suffix(n), what_stripped))
            || self.r#type.is_some_and(|t| eq_ci(t.as_str(), what))
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join_fields(f, [self.name.as_deref(), self.version.as_deref()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cpu {
    pub architecture: Option<String>,
}

impl Cpu {
    pub fn is(&self, what: &str) -> bool {
        self.architecture.as_deref().is_some_and(|a| eq_ci(a, what))
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join_fields(f, [self.architecture.as_deref()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Device {
    pub r#type: Option<DeviceType>,
    pub model: Option<String>,
    pub vendor: Option<String>,
}

impl Device {
    pub fn is(&self, what: &str) -> bool {
        self.r#type.is_some_and(|t| eq_ci(t.as_str(), what))
            || self.model.as_deref().is_some_and(|m| eq_ci(m, what))
            || self.vendor.as_deref().is_some_and(|v| eq_ci(v, what))
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join_fields(f, [self.vendor.as_deref(), self.model.as_deref()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl Engine {
    pub fn is(&self, what: &str) -> bool {
        self.name.as_deref().is_some_and(|n| eq_ci(n, what))
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join_fields(f, [self.name.as_deref(), self.version.as_deref()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Os {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl Os {
    /// Case-insensitive equality against the OS name, ignoring a trailing
    /// " OS" suffix on either side. The version field is never consulted.
    pub fn is(&self, what: &str) -> bool {
        let what_stripped = strip_os_suffix(what);
        self.name
            .as_deref()
            .is_some_and(|n| eq_ci(strip_os_suffix(n), what_stripped))
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join_fields(f, [self.name.as_deref(), self.version.as_deref()])
    }
}

/// The aggregate of the five facets for one classification call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// The (possibly truncated) User-Agent string that was classified.
    pub ua: String,
    pub browser: Browser,
    pub cpu: Cpu,
    pub device: Device,
    pub engine: Engine,
    pub os: Os,
}

fn join_fields<const N: usize>(
    f: &mut fmt::Formatter<'_>,
    fields: [Option<&str>; N],
) -> fmt::Result {
    let mut first = true;
    for field in fields.into_iter().flatten() {
        if !first {
            f.write_str(" ")?;
        }
        f.write_str(field)?;
        first = false;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_is_ignores_version_and_suffix() {
        let b = Browser {
            name: Some("HuaweiBrowser".into()),
            version: Some("14.0".into()),
            major: Some("14".into()),
            r#type: None,
        };
        assert!(b.is("Huawei"));
        assert!(b.is("huaweibrowser"));
        assert!(!b.is("14.0"));
    }

    #[test]
    fn os_is_strips_suffix_both_ways() {
        let os = Os {
            name: Some("Chrome OS".into()),
            version: None,
        };
        assert!(os.is("chrome"));
        assert!(os.is("Chrome OS"));
    }

    #[test]
    fn display_joins_present_fields() {
        let b = Browser {
            name: Some("Chrome".into()),
            version: Some("115.0".into()),
            major: Some("115".into()),
            r#type: None,
        };
        assert_eq!(b.to_string(), "Chrome 115.0");
        assert_eq!(Cpu::default().to_string(), "");
    }
}
