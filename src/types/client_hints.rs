use serde::Deserialize;

pub(crate) const CH_UA: &str = "sec-ch-ua";
pub(crate) const CH_FULL_VERSION_LIST: &str = "sec-ch-ua-full-version-list";
pub(crate) const CH_MOBILE: &str = "sec-ch-ua-mobile";
pub(crate) const CH_MODEL: &str = "sec-ch-ua-model";
pub(crate) const CH_PLATFORM: &str = "sec-ch-ua-platform";
pub(crate) const CH_PLATFORM_VERSION: &str = "sec-ch-ua-platform-version";
pub(crate) const CH_ARCH: &str = "sec-ch-ua-arch";
pub(crate) const CH_FORM_FACTORS: &str = "sec-ch-ua-form-factors";
pub(crate) const CH_BITNESS: &str = "sec-ch-ua-bitness";

/// One `{brand, version}` pair from `sec-ch-ua` or the full-version-list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrandVersion {
    pub brand: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Normalized structured Client-Hints data, constructed once per
/// classification call from raw header values or from the host API's
/// high-entropy object (camelCase JSON), and immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientHints {
    pub brands: Option<Vec<BrandVersion>>,
    pub full_version_list: Option<Vec<BrandVersion>>,
    pub mobile: Option<bool>,
    pub model: Option<String>,
    pub platform: Option<String>,
    pub platform_version: Option<String>,
    pub architecture: Option<String>,
    pub form_factors: Option<Vec<String>>,
    pub bitness: Option<String>,
}

impl ClientHints {
    /// Build a hints bundle from `sec-ch-ua*` request headers. Header names
    /// are matched case-insensitively; unrecognized headers are ignored.
    /// Tokenization is best-effort: a segment that does not parse as a
    /// `brand;v=version` item is kept as a literal token.
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut hints = Self::default();
        for (name, value) in headers {
            match name.to_lowercase().as_str() {
                CH_UA => hints.brands = Some(parse_brand_list(value)),
                CH_FULL_VERSION_LIST => {
                    hints.full_version_list = Some(parse_brand_list(value))
                }
                CH_MOBILE => hints.mobile = Some(value.contains("?1")),
                CH_MODEL => hints.model = non_empty(strip_quotes(value)),
                CH_PLATFORM => hints.platform = non_empty(strip_quotes(value)),
                CH_PLATFORM_VERSION => {
                    hints.platform_version = non_empty(strip_quotes(value))
                }
                CH_ARCH => hints.architecture = non_empty(strip_quotes(value)),
                CH_FORM_FACTORS => hints.form_factors = Some(parse_token_list(value)),
                CH_BITNESS => hints.bitness = non_empty(strip_quotes(value)),
                _ => {}
            }
        }
        hints
    }

    /// True when no field carries a value; reconciliation is a no-op then.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Drop structured-header quoting: `"` characters and the backslash that
/// escapes them. Other backslashes are preserved.
fn strip_quotes(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            continue;
        }
        if c == '\\' && chars.peek() == Some(&'"') {
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

fn parse_token_list(value: &str) -> Vec<String> {
    strip_quotes(value)
        .split(',')
        .map(|t| t.trim().to_string())
        .collect()
}

fn parse_brand_list(value: &str) -> Vec<BrandVersion> {
    strip_quotes(value)
        .split(',')
        .map(|token| {
            let token = token.trim();
            match token.split_once(";v=") {
                Some((brand, version)) => BrandVersion {
                    brand: brand.to_string(),
                    version: Some(version.to_string()),
                },
                None => BrandVersion {
                    brand: token.to_string(),
                    version: None,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_brand_headers() {
        let hints = ClientHints::from_headers([
            (
                "sec-ch-ua",
                r#""Not_A Brand";v="8", "Chromium";v="119", "Google Chrome";v="119""#,
            ),
            ("sec-ch-ua-mobile", "?0"),
            ("sec-ch-ua-platform", r#""Windows""#),
        ]);
        let brands = hints.brands.unwrap();
        assert_eq!(brands.len(), 3);
        assert_eq!(brands[1].brand, "Chromium");
        assert_eq!(brands[1].version.as_deref(), Some("119"));
        assert_eq!(hints.mobile, Some(false));
        assert_eq!(hints.platform.as_deref(), Some("Windows"));
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let hints = ClientHints::from_headers([("Sec-CH-UA-Model", r#""Pixel 8""#)]);
        assert_eq!(hints.model.as_deref(), Some("Pixel 8"));
    }

    #[test]
    fn unbalanced_quoting_degrades_to_literal_tokens() {
        let hints = ClientHints::from_headers([("sec-ch-ua", r#""Oops Brand;v="1"#)]);
        let brands = hints.brands.unwrap();
        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].brand, "Oops Brand");
        assert_eq!(brands[0].version.as_deref(), Some("1"));
    }

    #[test]
    fn escaped_quotes_are_stripped() {
        assert_eq!(strip_quotes(r#"\"x86\""#), "x86");
    }

    #[test]
    fn deserializes_high_entropy_shape() {
        let json = r#"{
            "brands": [{"brand": "Chromium", "version": "119"}],
            "fullVersionList": [{"brand": "Chromium", "version": "119.0.6045.0"}],
            "mobile": false,
            "platform": "Windows",
            "platformVersion": "15.0.0",
            "architecture": "x86",
            "bitness": "64",
            "formFactors": ["Desktop"]
        }"#;
        let hints: ClientHints = serde_json::from_str(json).unwrap();
        assert_eq!(hints.platform_version.as_deref(), Some("15.0.0"));
        assert_eq!(
            hints.full_version_list.unwrap()[0].version.as_deref(),
            Some("119.0.6045.0")
        );
        assert_eq!(hints.form_factors.unwrap(), vec!["Desktop"]);
    }
}
