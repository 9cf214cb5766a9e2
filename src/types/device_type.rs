#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Console,
    Desktop,
    Embedded,
    Mobile,
    SmartTv,
    Tablet,
    Wearable,
    Xr,
}

impl DeviceType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" => Some(Self::Console),
            "desktop" => Some(Self::Desktop),
            "embedded" => Some(Self::Embedded),
            "mobile" => Some(Self::Mobile),
            "smarttv" => Some(Self::SmartTv),
            "tablet" => Some(Self::Tablet),
            "wearable" => Some(Self::Wearable),
            "xr" => Some(Self::Xr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Desktop => "desktop",
            Self::Embedded => "embedded",
            Self::Mobile => "mobile",
            Self::SmartTv => "smarttv",
            Self::Tablet => "tablet",
            Self::Wearable => "wearable",
            Self::Xr => "xr",
        }
    }
}
