//! Folds structured Client-Hints data over facets already extracted from the
//! User-Agent string. Hints are authoritative where present: a populated hint
//! field overwrites the corresponding UA-derived value.

use std::borrow::Cow;

use log::trace;
use once_cell::sync::Lazy;

use crate::matcher::{self, majorize, CompiledGroup};
use crate::rules::BROWSER_ALIASES;
use crate::str_map::{MapVal, StrMap};
use crate::types::{Browser, ClientHints, Device, DeviceType, Engine, Os};

/// Matches the GREASE placeholder brand in any of its punctuation disguises
/// ("Not A;Brand", "Not_A Brand", "Not.A/Brand", ...).
static NOT_A_BRAND: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new("(?i)not.a.brand").expect("valid literal pattern"));

/// Client-Hints form-factor tokens to device types. The `"?"` entry maps
/// desktop-ish tokens to no type at all; unknown tokens also map to nothing,
/// letting the scan move on to the next token.
static FORM_FACTORS_MAP: StrMap = StrMap {
    entries: &[
        ("embedded", MapVal::One("Automotive")),
        ("mobile", MapVal::One("Mobile")),
        ("tablet", MapVal::Many(&["Tablet", "EInk"])),
        ("smarttv", MapVal::One("TV")),
        ("wearable", MapVal::One("Watch")),
        ("xr", MapVal::Many(&["VR", "XR"])),
        ("?", MapVal::Many(&["Desktop", "Unknown"])),
        ("*", MapVal::None),
    ],
};

/// Walk the brand list (full-version list preferred) and adopt the most
/// specific browser brand. A brand is only allowed to replace an earlier one
/// when the earlier one was Chromium-like and the newcomer is not the bare
/// "Chromium" umbrella brand.
pub(crate) fn browser(browser: &mut Browser, hints: &ClientHints) {
    let Some(brands) = hints.full_version_list.as_ref().or(hints.brands.as_ref()) else {
        return;
    };
    let mut prev: Option<String> = None;
    for item in brands {
        if NOT_A_BRAND.is_match(&item.brand) {
            continue;
        }
        let accept = match &prev {
            None => true,
            Some(p) => p.to_lowercase().contains("chrom") && item.brand != "Chromium",
        };
        if !accept {
            continue;
        }
        let name = BROWSER_ALIASES
            .lookup(&item.brand)
            .map(Cow::into_owned)
            .unwrap_or_else(|| item.brand.clone());
        trace!("client hints brand accepted: {name}");
        browser.name = Some(name.clone());
        browser.version = item.version.clone();
        browser.major = item.version.as_deref().and_then(majorize);
        prev = Some(name);
    }
}

/// A literal "Chromium" brand carries the engine (Blink) version.
pub(crate) fn engine(engine: &mut Engine, hints: &ClientHints) {
    let Some(brands) = hints.full_version_list.as_ref().or(hints.brands.as_ref()) else {
        return;
    };
    for item in brands {
        if item.brand == "Chromium" {
            engine.version = item.version.clone();
        }
    }
}

/// Re-run the CPU table over the hinted architecture token, suffixed with the
/// bitness so "x86" + 64-bit resolves to amd64. The trailing semicolon keeps
/// lookahead-delimited rules like `ia32(?=;)` matchable.
pub(crate) fn cpu(cpu: &mut crate::types::Cpu, hints: &ClientHints, table: &[CompiledGroup]) {
    let Some(arch) = &hints.architecture else {
        return;
    };
    let mut probe = arch.clone();
    if hints.bitness.as_deref() == Some("64") {
        probe.push_str("64");
    }
    probe.push(';');
    let extracted = matcher::run(&probe, table);
    if let Some(architecture) = extracted.architecture {
        cpu.architecture = Some(architecture);
    }
}

/// Apply mobile flag, model, and form factors. A hinted model triggers a
/// synthetic re-parse through the device table so vendor and type can be
/// recovered for models the UA string never mentioned.
pub(crate) fn device(device: &mut Device, hints: &ClientHints, table: &[CompiledGroup]) {
    if hints.mobile == Some(true) {
        device.r#type = Some(DeviceType::Mobile);
    }
    if let Some(model) = &hints.model {
        device.model = Some(model.clone());
        if device.r#type.is_none() || device.vendor.is_none() {
            let extracted = matcher::run(&format!("droid 9; {model})"), table);
            if device.r#type.is_none() {
                device.r#type = extracted.r#type.as_deref().and_then(DeviceType::from_str);
            }
            if device.vendor.is_none() {
                device.vendor = extracted.vendor;
            }
        }
    }
    if let Some(form_factors) = &hints.form_factors {
        let mut mapped = None;
        for token in form_factors {
            mapped = FORM_FACTORS_MAP.lookup(token).map(Cow::into_owned);
            if mapped.is_some() {
                break;
            }
        }
        // Desktop-ish or unrecognized form factors clear the type on purpose.
        device.r#type = mapped.as_deref().and_then(DeviceType::from_str);
    }
}

/// Platform and platform version. Windows platform versions are build-major
/// tokens, not marketing versions: 13 and above mean Windows 11. An Xbox
/// model turns a hinted Windows platform into the console OS.
pub(crate) fn os(os: &mut Os, hints: &ClientHints) {
    if let Some(platform) = &hints.platform {
        let version = if platform == "Windows" {
            let major = hints
                .platform_version
                .as_deref()
                .and_then(majorize)
                .and_then(|m| m.parse::<u32>().ok());
            Some(if major.is_some_and(|m| m >= 13) { "11" } else { "10" }.to_string())
        } else {
            hints.platform_version.clone()
        };
        os.name = Some(platform.clone());
        os.version = version;
    }
    if os.name.as_deref() == Some("Windows") && hints.model.as_deref() == Some("Xbox") {
        os.name = Some("Xbox".to_string());
        os.version = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrandVersion;

    fn brand(name: &str, version: &str) -> BrandVersion {
        BrandVersion {
            brand: name.to_string(),
            version: Some(version.to_string()),
        }
    }

    #[test]
    fn greasy_brand_is_skipped_and_specific_brand_wins() {
        let hints = ClientHints {
            brands: Some(vec![
                brand("Not_A Brand", "8"),
                brand("Chromium", "119"),
                brand("Google Chrome", "119"),
            ]),
            ..Default::default()
        };
        let mut b = Browser::default();
        browser(&mut b, &hints);
        assert_eq!(b.name.as_deref(), Some("Google Chrome"));
        assert_eq!(b.version.as_deref(), Some("119"));
        assert_eq!(b.major.as_deref(), Some("119"));
    }

    #[test]
    fn chromium_brand_does_not_replace_itself() {
        let hints = ClientHints {
            brands: Some(vec![brand("Google Chrome", "119"), brand("Chromium", "119")]),
            ..Default::default()
        };
        let mut b = Browser::default();
        browser(&mut b, &hints);
        assert_eq!(b.name.as_deref(), Some("Google Chrome"));
    }

    #[test]
    fn full_version_list_outranks_brands() {
        let hints = ClientHints {
            brands: Some(vec![brand("Chromium", "119")]),
            full_version_list: Some(vec![brand("Chromium", "119.0.6045.199")]),
            ..Default::default()
        };
        let mut b = Browser::default();
        browser(&mut b, &hints);
        assert_eq!(b.version.as_deref(), Some("119.0.6045.199"));
        assert_eq!(b.major.as_deref(), Some("119"));
    }

    #[test]
    fn chromium_brand_sets_engine_version() {
        let hints = ClientHints {
            brands: Some(vec![brand("Chromium", "119")]),
            ..Default::default()
        };
        let mut e = Engine {
            name: Some("Blink".to_string()),
            version: None,
        };
        engine(&mut e, &hints);
        assert_eq!(e.version.as_deref(), Some("119"));
    }

    #[test]
    fn windows_platform_version_threshold() {
        let mut os_facet = Os::default();
        os(
            &mut os_facet,
            &ClientHints {
                platform: Some("Windows".to_string()),
                platform_version: Some("15.0.0".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(os_facet.version.as_deref(), Some("11"));

        os(
            &mut os_facet,
            &ClientHints {
                platform: Some("Windows".to_string()),
                platform_version: Some("10.0.0".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(os_facet.version.as_deref(), Some("10"));
    }

    #[test]
    fn xbox_model_overrides_windows_platform() {
        let mut os_facet = Os::default();
        os(
            &mut os_facet,
            &ClientHints {
                platform: Some("Windows".to_string()),
                model: Some("Xbox".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(os_facet.name.as_deref(), Some("Xbox"));
        assert_eq!(os_facet.version, None);
    }

    #[test]
    fn form_factors_take_first_recognized_token() {
        assert_eq!(FORM_FACTORS_MAP.lookup("EInk").as_deref(), Some("tablet"));
        assert_eq!(FORM_FACTORS_MAP.lookup("Automotive").as_deref(), Some("embedded"));
        assert_eq!(FORM_FACTORS_MAP.lookup("Desktop"), None);
        assert_eq!(FORM_FACTORS_MAP.lookup("SomethingNew"), None);
    }
}
