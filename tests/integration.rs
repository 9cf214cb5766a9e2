use async_trait::async_trait;
use ua_sift::{
    extensions, is_ai_bot_ua, is_bot_ua, BrowserType, Classifier, ClientHints, DeviceType, Field,
    FieldSpec, FeatureProbe, HighEntropySource, RuleGroup,
};

const CHROME_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.5 Mobile/15E148 Safari/604.1";
const GOOGLEBOT: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn desktop_chrome_on_windows() {
    init();
    let result = Classifier::new().classify(CHROME_WIN);
    assert_eq!(result.browser.name.as_deref(), Some("Chrome"));
    assert_eq!(result.browser.version.as_deref(), Some("115.0.0.0"));
    assert_eq!(result.browser.major.as_deref(), Some("115"));
    assert_eq!(result.browser.r#type, None);
    assert_eq!(result.engine.name.as_deref(), Some("Blink"));
    assert_eq!(result.os.name.as_deref(), Some("Windows"));
    assert_eq!(result.os.version.as_deref(), Some("10"));
    assert_eq!(result.cpu.architecture.as_deref(), Some("amd64"));
}

#[test]
fn mobile_safari_on_ios() {
    init();
    let result = Classifier::new().classify(SAFARI_IPHONE);
    assert_eq!(result.browser.name.as_deref(), Some("Mobile Safari"));
    assert_eq!(result.browser.version.as_deref(), Some("16.5"));
    assert_eq!(result.os.name.as_deref(), Some("iOS"));
    // The underscore version separator is normalized to a dot.
    assert_eq!(result.os.version.as_deref(), Some("16.5"));
    assert_eq!(result.device.r#type, Some(DeviceType::Mobile));
    assert_eq!(result.device.vendor.as_deref(), Some("Apple"));
    assert_eq!(result.device.model.as_deref(), Some("iPhone"));
}

#[test]
fn googlebot_with_crawler_extension() {
    init();
    let classifier = Classifier::with_extensions(&[&extensions::CRAWLERS]).unwrap();
    let result = classifier.classify(GOOGLEBOT);
    assert_eq!(result.browser.name.as_deref(), Some("Googlebot"));
    assert_eq!(result.browser.version.as_deref(), Some("2.1"));
    assert_eq!(result.browser.r#type, Some(BrowserType::Crawler));
}

#[test]
fn client_hints_only_classification() {
    init();
    let hints = ClientHints::from_headers([
        (
            "sec-ch-ua",
            r#""Not_A Brand";v="8", "Chromium";v="119", "Google Chrome";v="119""#,
        ),
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", r#""Windows""#),
        ("sec-ch-ua-platform-version", r#""15.0.0""#),
    ]);
    let result = Classifier::new().classify_with_hints("", &hints);
    assert_eq!(result.browser.name.as_deref(), Some("Google Chrome"));
    assert_eq!(result.browser.version.as_deref(), Some("119"));
    assert_eq!(result.browser.major.as_deref(), Some("119"));
    // Platform version 15 crosses the Windows 11 threshold.
    assert_eq!(result.os.name.as_deref(), Some("Windows"));
    assert_eq!(result.os.version.as_deref(), Some("11"));
}

#[test]
fn empty_ua_yields_all_none() {
    init();
    let result = Classifier::new().classify("");
    assert_eq!(result.browser.name, None);
    assert_eq!(result.cpu.architecture, None);
    assert_eq!(result.device.model, None);
    assert_eq!(result.engine.name, None);
    assert_eq!(result.os.name, None);
}

#[test]
fn classification_is_deterministic() {
    init();
    let classifier = Classifier::new();
    assert_eq!(classifier.classify(CHROME_WIN), classifier.classify(CHROME_WIN));
}

#[test]
fn earlier_rule_group_wins() {
    init();
    // An Edge UA also carries a Chrome token; the Edge group sits earlier in
    // the table and must win.
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36 Edg/115.0.1901.183";
    let result = Classifier::new().classify(ua);
    assert_eq!(result.browser.name.as_deref(), Some("Edge"));
    assert_eq!(result.browser.version.as_deref(), Some("115.0.1901.183"));
}

static REBRAND: extensions::Extension = extensions::Extension {
    browser: &[RuleGroup {
        patterns: &[r"(chrome)/([\w\.]+)"],
        specs: &[
            FieldSpec::Lit(Field::Name, "Corporate Chrome"),
            FieldSpec::Cap(Field::Version),
        ],
    }],
    ..extensions::Extension::EMPTY
};

#[test]
fn extension_rules_outrank_base_rules() {
    init();
    let classifier = Classifier::with_extensions(&[&REBRAND]).unwrap();
    let result = classifier.classify(CHROME_WIN);
    assert_eq!(result.browser.name.as_deref(), Some("Corporate Chrome"));
    // The base table still serves the other facets.
    assert_eq!(result.os.name.as_deref(), Some("Windows"));
}

#[test]
fn client_hints_override_ua_derived_values() {
    init();
    let hints = ClientHints {
        platform: Some("macOS".to_string()),
        platform_version: Some("14.1.0".to_string()),
        ..Default::default()
    };
    let result = Classifier::new().classify_with_hints(CHROME_WIN, &hints);
    assert_eq!(result.os.name.as_deref(), Some("macOS"));
    assert_eq!(result.os.version.as_deref(), Some("14.1.0"));
}

#[test]
fn hinted_model_reparses_vendor_and_type() {
    init();
    let hints = ClientHints {
        model: Some("Pixel 8".to_string()),
        ..Default::default()
    };
    let result = Classifier::new().classify_with_hints("", &hints);
    assert_eq!(result.device.model.as_deref(), Some("Pixel 8"));
    assert_eq!(result.device.vendor.as_deref(), Some("Google"));
    assert_eq!(result.device.r#type, Some(DeviceType::Mobile));
}

#[test]
fn form_factors_can_clear_the_device_type() {
    init();
    let hints = ClientHints {
        mobile: Some(true),
        form_factors: Some(vec!["Desktop".to_string()]),
        ..Default::default()
    };
    let result = Classifier::new().classify_with_hints("", &hints);
    assert_eq!(result.device.r#type, None);
}

#[test]
fn hinted_architecture_with_bitness() {
    init();
    let hints = ClientHints {
        architecture: Some("x86".to_string()),
        bitness: Some("64".to_string()),
        ..Default::default()
    };
    let result = Classifier::new().classify_with_hints("", &hints);
    assert_eq!(result.cpu.architecture.as_deref(), Some("amd64"));
}

struct FixedSource(ClientHints);

#[async_trait]
impl HighEntropySource for FixedSource {
    async fn fetch(&self) -> ClientHints {
        self.0.clone()
    }
}

#[tokio::test]
async fn enriched_classification_fetches_high_entropy_values() {
    init();
    let source = FixedSource(ClientHints {
        full_version_list: Some(vec![ua_sift::BrandVersion {
            brand: "Chromium".to_string(),
            version: Some("119.0.6045.199".to_string()),
        }]),
        platform: Some("Linux".to_string()),
        ..Default::default()
    });
    let result = Classifier::new().classify_enriched(CHROME_WIN, &source).await;
    assert_eq!(result.browser.name.as_deref(), Some("Chromium"));
    assert_eq!(result.browser.version.as_deref(), Some("119.0.6045.199"));
    assert_eq!(result.engine.version.as_deref(), Some("119.0.6045.199"));
    assert_eq!(result.os.name.as_deref(), Some("Linux"));
}

struct IpadProbe {
    ua: String,
}

impl FeatureProbe for IpadProbe {
    fn user_agent(&self) -> &str {
        &self.ua
    }
    fn standalone_defined(&self) -> bool {
        true
    }
    fn max_touch_points(&self) -> u32 {
        5
    }
}

#[test]
fn desktop_mode_ipad_is_detected_by_touch_points() {
    init();
    let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.5 Safari/605.1.15";
    let result = Classifier::new()
        .classify(ua)
        .with_feature_check(&IpadProbe { ua: ua.to_string() });
    assert_eq!(result.device.model.as_deref(), Some("iPad"));
    assert_eq!(result.device.r#type, Some(DeviceType::Tablet));
    assert_eq!(result.os.name.as_deref(), Some("macOS"));
}

#[test]
fn cli_and_library_agents() {
    init();
    let classifier = Classifier::with_extensions(extensions::BOTS).unwrap();

    let curl = classifier.classify("curl/8.1.2");
    assert_eq!(curl.browser.name.as_deref(), Some("curl"));
    assert_eq!(curl.browser.r#type, Some(BrowserType::Cli));

    let axios = classifier.classify("axios/1.6.2");
    assert_eq!(axios.browser.name.as_deref(), Some("axios"));
    assert_eq!(axios.browser.r#type, Some(BrowserType::Library));
}

#[test]
fn whatsapp_fetcher_carries_its_platform() {
    init();
    let classifier = Classifier::with_extensions(&[&extensions::FETCHERS]).unwrap();
    let result = classifier.classify("WhatsApp/2.23.24.78 A");
    assert_eq!(result.browser.name.as_deref(), Some("WhatsApp"));
    assert_eq!(result.browser.r#type, Some(BrowserType::Fetcher));
    assert_eq!(result.os.name.as_deref(), Some("Android"));
}

#[test]
fn media_player_and_email_extensions() {
    init();
    let players = Classifier::with_extensions(&[&extensions::MEDIA_PLAYERS]).unwrap();
    let vlc = players.classify("VLC/3.0.18 LibVLC/3.0.18");
    assert_eq!(vlc.browser.name.as_deref(), Some("VLC"));
    assert_eq!(vlc.browser.version.as_deref(), Some("3.0.18"));
    assert_eq!(vlc.browser.r#type, Some(BrowserType::MediaPlayer));

    let emails = Classifier::with_extensions(&[&extensions::EMAILS]).unwrap();
    let tb = emails.classify(
        "Mozilla/5.0 (X11; Linux x86_64; rv:115.0) Gecko/20100101 Thunderbird/115.4.1",
    );
    assert_eq!(tb.browser.name.as_deref(), Some("Thunderbird"));
    assert_eq!(tb.browser.r#type, Some(BrowserType::Email));
}

#[test]
fn slack_desktop_is_an_in_app_webview() {
    init();
    let classifier = Classifier::with_extensions(&[&extensions::INAPPS]).unwrap();
    let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Slack/4.35.126 Chrome/114.0.5735.289 Electron/25.8.4 Safari/537.36";
    let result = classifier.classify(ua);
    assert_eq!(result.browser.name.as_deref(), Some("Slack"));
    assert_eq!(result.browser.version.as_deref(), Some("4.35.126"));
    assert_eq!(result.browser.r#type, Some(BrowserType::InApp));
}

#[test]
fn vehicle_head_units() {
    init();
    let classifier = Classifier::with_extensions(&[&extensions::VEHICLES]).unwrap();
    let result = classifier
        .classify("Mozilla/5.0 (Linux; Android 10; Rivian R1T) AppleWebKit/537.36 (KHTML, like Gecko)");
    assert_eq!(result.device.vendor.as_deref(), Some("Rivian"));
    assert_eq!(result.device.model.as_deref(), Some("R1T"));
}

#[test]
fn bot_predicates() {
    init();
    assert!(is_bot_ua(GOOGLEBOT));
    assert!(!is_ai_bot_ua(GOOGLEBOT));
    assert!(is_ai_bot_ua(
        "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko); compatible; GPTBot/1.0; +https://openai.com/gptbot"
    ));
    assert!(!is_bot_ua(CHROME_WIN));
}

#[test]
fn is_and_display_helpers() {
    init();
    let result = Classifier::new().classify(CHROME_WIN);
    assert!(result.browser.is("Chrome"));
    assert!(!result.browser.is("Firefox"));
    assert!(result.os.is("Windows"));
    assert!(result.cpu.is("amd64"));
    assert_eq!(result.browser.to_string(), "Chrome 115.0.0.0");
    assert_eq!(result.os.to_string(), "Windows 10");
}

#[test]
fn samsung_tablet_device() {
    init();
    let ua = "Mozilla/5.0 (Linux; Android 13; SM-X906C Build/TP1A.220624.014) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
    let result = Classifier::new().classify(ua);
    assert_eq!(result.device.vendor.as_deref(), Some("Samsung"));
    assert_eq!(result.device.model.as_deref(), Some("SM-X906C"));
    assert_eq!(result.device.r#type, Some(DeviceType::Tablet));
    assert_eq!(result.os.name.as_deref(), Some("Android"));
    assert_eq!(result.os.version.as_deref(), Some("13"));
}

#[test]
fn xiaomi_pad_with_spaced_model_name() {
    init();
    let ua = "Mozilla/5.0 (Linux; Android 12; Redmi Pad Build/SKQ1.211019.001) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
    let result = Classifier::new().classify(ua);
    assert_eq!(result.device.model.as_deref(), Some("Redmi Pad"));
    assert_eq!(result.device.vendor.as_deref(), Some("Xiaomi"));
    assert_eq!(result.device.r#type, Some(DeviceType::Tablet));
}

#[test]
fn unversioned_os_has_no_version_field() {
    init();
    let result = Classifier::new().classify("Mozilla/5.0 (Linux; Android) AppleWebKit/537.36");
    assert_eq!(result.os.name.as_deref(), Some("Android"));
    assert_eq!(result.os.version, None);
    // Display must not carry a separator for the absent version.
    assert_eq!(result.os.to_string(), "Android");
}

#[test]
fn oversized_ua_is_truncated_not_rejected() {
    init();
    let ua = format!("{}{}", "x".repeat(600), CHROME_WIN);
    let result = Classifier::new().classify(&ua);
    // Everything interesting sat past the cut-off.
    assert_eq!(result.browser.name, None);
    assert_eq!(result.ua.len(), 500);
}
