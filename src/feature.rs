//! Host-environment feature checks. A [`FeatureProbe`] stands in for the
//! runtime capability surface a browser would expose (Brave's self-report,
//! `navigator.userAgentData`, touch-point count), letting callers patch a
//! classification with facts only the live environment knows.

use log::trace;

use crate::types::{Classification, DeviceType};

/// Capability answers from the environment the User-Agent came from.
///
/// The defaults describe an environment that reports nothing, so
/// implementors only override what their host actually exposes.
pub trait FeatureProbe {
    /// The User-Agent string of the probed environment. Feature checks apply
    /// only when this matches the classified string exactly; answers from a
    /// different environment would corrupt the result.
    fn user_agent(&self) -> &str;

    /// Whether the environment self-identifies as the Brave browser.
    fn is_brave(&self) -> bool {
        false
    }

    /// The `userAgentData.mobile` flag, if the environment exposes one.
    fn uadata_mobile(&self) -> Option<bool> {
        None
    }

    /// The `userAgentData.platform` value, if the environment exposes one.
    fn uadata_platform(&self) -> Option<String> {
        None
    }

    /// Whether a `standalone` property is defined at all. Only Safari-family
    /// hosts define it, which makes it a platform marker.
    fn standalone_defined(&self) -> bool {
        false
    }

    fn max_touch_points(&self) -> u32 {
        0
    }
}

impl Classification {
    /// Refine this classification with live environment capabilities.
    ///
    /// Touch-capable "Macintosh" devices are reclassified as iPads: desktop
    /// macOS never reports touch points, so a Mac UA plus touch input means
    /// an iPad asked for a desktop site.
    pub fn with_feature_check(mut self, probe: &dyn FeatureProbe) -> Self {
        if probe.user_agent() != self.ua {
            trace!("feature probe UA mismatch, skipping feature checks");
            return self;
        }
        if probe.is_brave() {
            self.browser.name = Some("Brave".to_string());
        }
        if self.device.r#type.is_none() && probe.uadata_mobile() == Some(true) {
            self.device.r#type = Some(DeviceType::Mobile);
        }
        if self.device.model.as_deref() == Some("Macintosh")
            && probe.standalone_defined()
            && probe.max_touch_points() > 2
        {
            self.device.model = Some("iPad".to_string());
            self.device.r#type = Some(DeviceType::Tablet);
        }
        if self.os.name.is_none() {
            if let Some(platform) = probe.uadata_platform() {
                self.os.name = Some(platform);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Device;

    struct Probe {
        ua: String,
        brave: bool,
        touch: u32,
        standalone: bool,
    }

    impl FeatureProbe for Probe {
        fn user_agent(&self) -> &str {
            &self.ua
        }
        fn is_brave(&self) -> bool {
            self.brave
        }
        fn standalone_defined(&self) -> bool {
            self.standalone
        }
        fn max_touch_points(&self) -> u32 {
            self.touch
        }
    }

    fn mac_classification(ua: &str) -> Classification {
        Classification {
            ua: ua.to_string(),
            device: Device {
                model: Some("Macintosh".to_string()),
                vendor: Some("Apple".to_string()),
                r#type: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn touch_capable_macintosh_becomes_ipad() {
        let out = mac_classification("test-ua").with_feature_check(&Probe {
            ua: "test-ua".to_string(),
            brave: false,
            touch: 5,
            standalone: true,
        });
        assert_eq!(out.device.model.as_deref(), Some("iPad"));
        assert_eq!(out.device.r#type, Some(DeviceType::Tablet));
    }

    #[test]
    fn probe_for_a_different_ua_is_ignored() {
        let out = mac_classification("test-ua").with_feature_check(&Probe {
            ua: "other-ua".to_string(),
            brave: true,
            touch: 5,
            standalone: true,
        });
        assert_eq!(out.device.model.as_deref(), Some("Macintosh"));
        assert_eq!(out.browser.name, None);
    }

    #[test]
    fn brave_overrides_browser_name() {
        let out = mac_classification("test-ua").with_feature_check(&Probe {
            ua: "test-ua".to_string(),
            brave: true,
            touch: 0,
            standalone: false,
        });
        assert_eq!(out.browser.name.as_deref(), Some("Brave"));
    }
}
