/// Non-interactive-agent category a browser facet can carry. Regular
/// interactive browsers have no type at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserType {
    Cli,
    Crawler,
    Email,
    Fetcher,
    InApp,
    MediaPlayer,
    Library,
}

impl BrowserType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cli" => Some(Self::Cli),
            "crawler" => Some(Self::Crawler),
            "email" => Some(Self::Email),
            "fetcher" => Some(Self::Fetcher),
            "inapp" => Some(Self::InApp),
            "mediaplayer" => Some(Self::MediaPlayer),
            "library" => Some(Self::Library),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Crawler => "crawler",
            Self::Email => "email",
            Self::Fetcher => "fetcher",
            Self::InApp => "inapp",
            Self::MediaPlayer => "mediaplayer",
            Self::Library => "library",
        }
    }
}
