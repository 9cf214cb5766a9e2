use super::rg;
use crate::matcher::Field::{Name, Version};
use crate::matcher::FieldSpec::{Cap, Fun, Lit, Sub};
use crate::matcher::{RuleGroup, Transform};
use crate::str_map::{MapVal, StrMap};

/// Windows NT build tokens to marketing names. No wildcard: an unlisted
/// token (e.g. "98") is kept verbatim.
pub(crate) static WINDOWS_VERSION_MAP: StrMap = StrMap {
    entries: &[
        ("ME", MapVal::One("4.90")),
        ("NT 3.11", MapVal::One("NT3.51")),
        ("NT 4.0", MapVal::One("NT4.0")),
        ("2000", MapVal::One("NT 5.0")),
        ("XP", MapVal::Many(&["NT 5.1", "NT 5.2"])),
        ("Vista", MapVal::One("NT 6.0")),
        ("7", MapVal::One("NT 6.1")),
        ("8", MapVal::One("NT 6.2")),
        ("8.1", MapVal::One("NT 6.3")),
        ("10", MapVal::Many(&["NT 6.4", "NT 10.0"])),
        ("RT", MapVal::One("ARM")),
    ],
};

pub(crate) static OS: &[RuleGroup] = &[
    // Windows (iTunes)
    rg(&[r"microsoft (windows) (vista|xp)"], &[Cap(Name), Cap(Version)]),
    // Windows Phone
    rg(
        &[r"(windows (?:phone(?: os)?|mobile|iot))[/ ]?([\d\.\w ]*)"],
        &[Cap(Name), Fun(Version, Transform::Map(&WINDOWS_VERSION_MAP))],
    ),
    rg(
        &[
            // Windows RT
            r"windows nt 6\.2; (arm)",
            r"windows[/ ]([ntce\d\. ]+\w)(?!.+xbox)",
            r"(?:win(?=3|9|n)|win 9x )([nt\d\.]+)",
        ],
        &[Fun(Version, Transform::Map(&WINDOWS_VERSION_MAP)), Lit(Name, "Windows")],
    ),
    // iOS
    rg(
        &[
            r"[adehimnop]{4,7}\b(?:.*os ([\w]+) like mac|; opera)",
            r"(?:ios;fbsv/|iphone.+ios[/ ])([\d\.]+)",
            r"cfnetwork/.+darwin",
        ],
        &[Sub(Version, "_", "."), Lit(Name, "iOS")],
    ),
    // Mac OS
    rg(
        &[r"(mac os x) ?([\w\. ]*)", r"(macintosh|mac_powerpc\b)(?!.+haiku)"],
        &[Lit(Name, "macOS"), Sub(Version, "_", ".")],
    ),
    // Google Chromecast, Android-based
    rg(&[r"android ([\d\.]+).*crkey"], &[Cap(Version), Lit(Name, "Chromecast Android")]),
    // Google Chromecast, Fuchsia-based
    rg(&[r"fuchsia.*crkey/([\d\.]+)"], &[Cap(Version), Lit(Name, "Chromecast Fuchsia")]),
    // Google Chromecast, Linux-based Smart Speaker
    rg(
        &[r"crkey/([\d\.]+).*devicetype/smartspeaker"],
        &[Cap(Version), Lit(Name, "Chromecast SmartSpeaker")],
    ),
    // Google Chromecast, legacy Linux-based
    rg(&[r"linux.*crkey/([\d\.]+)"], &[Cap(Version), Lit(Name, "Chromecast Linux")]),
    // Google Chromecast, unknown
    rg(&[r"crkey/([\d\.]+)"], &[Cap(Version), Lit(Name, "Chromecast")]),
    // Android-x86/HarmonyOS
    rg(&[r"droid ([\w\.]+)\b.+(android[- ]x86|harmonyos)"], &[Cap(Version), Cap(Name)]),
    // Ubuntu Touch
    rg(
        &[r"(ubuntu) ([\w\.]+) like android"],
        &[Sub(Name, "(.+)", "${1} Touch"), Cap(Version)],
    ),
    // Android/Bada/BlackBerry/KaiOS/Maemo/MeeGo/OpenHarmony/QNX/RIM/Sailfish/
    // Series40/Symbian/Tizen/WebOS
    rg(
        &[r"(android|bada|blackberry|kaios|maemo|meego|openharmony|qnx|rim tablet os|sailfish|series40|symbian|tizen|webos)\w*[-/\.; ]?([\d\.]*)"],
        &[Cap(Name), Cap(Version)],
    ),
    // BlackBerry 10
    rg(&[r"\(bb(10);"], &[Cap(Version), Lit(Name, "BlackBerry")]),
    // Symbian
    rg(
        &[r"(?:symbian ?os|symbos|s60(?=;)|series ?60)[-/ ]?([\w\.]*)"],
        &[Cap(Version), Lit(Name, "Symbian")],
    ),
    // Firefox OS
    rg(
        &[r"mozilla/[\d\.]+ \((?:mobile|tablet|tv|mobile; [\w ]+); rv:.+ gecko/([\w\.]+)"],
        &[Cap(Version), Lit(Name, "Firefox OS")],
    ),
    // WebOS
    rg(
        &[r"web0s;.+rt(tv)", r"\b(?:hp)?wos(?:browser)?/([\w\.]+)"],
        &[Cap(Version), Lit(Name, "webOS")],
    ),
    // watchOS
    rg(
        &[r"watch(?: ?os[,/]|\d,\d/)([\d\.]+)"],
        &[Cap(Version), Lit(Name, "watchOS")],
    ),
    // Chromium OS
    rg(&[r"(cros) [\w]+(?:\)| ([\w\.]+)\b)"], &[Lit(Name, "Chrome OS"), Cap(Version)]),
    rg(
        &[
            // Smart TVs
            r"panasonic;(viera)",
            r"(netrange)mmh",
            r"(nettv)/(\d+\.[\w\.]+)",
            // Consoles
            r"(nintendo|playstation) (\w+)",
            r"(xbox); +xbox ([^\);]+)",
            r"(pico) .+os([\w\.]+)",
            // Other
            r"\b(joli|palm)\b ?(?:os)?/?([\w\.]*)",
            r"(mint)[/\(\) ]?(\w*)",
            r"(mageia|vectorlinux)[; ]",
            r"([kxln]?ubuntu|debian|suse|opensuse|gentoo|arch(?= linux)|slackware|fedora|mandriva|centos|pclinuxos|red ?hat|zenwalk|linpus|raspbian|plan 9|minix|risc os|contiki|deepin|manjaro|elementary os|sabayon|linspire)(?: gnu/linux)?(?: enterprise)?(?:[- ]linux)?(?:-gnu)?[-/ ]?(?!chrom|package)([-\w\.]*)",
            r"(hurd|linux)(?: arm\w*| x86\w*| ?)([\w\.]*)",
            r"(gnu) ?([\w\.]*)",
            r"\b([-frentopcghs]{0,5}bsd|dragonfly)[/ ]?(?!amd|[ix346]{1,2}86)([\w\.]*)",
            r"(haiku) (\w+)",
        ],
        &[Cap(Name), Cap(Version)],
    ),
    // Solaris
    rg(&[r"(sunos) ?([\w\.\d]*)"], &[Lit(Name, "Solaris"), Cap(Version)]),
    rg(
        &[
            r"((?:open)?solaris)[-/ ]?([\w\.]*)",
            r"(aix) ((\d)(?=\.|\)| )[\w\.])*",
            r"\b(beos|os/2|amigaos|morphos|openvms|fuchsia|hp-ux|serenityos)",
            r"(unix) ?([\w\.]*)",
        ],
        &[Cap(Name), Cap(Version)],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nt_tokens_map_to_marketing_names() {
        assert_eq!(WINDOWS_VERSION_MAP.lookup("NT 10.0").as_deref(), Some("10"));
        assert_eq!(WINDOWS_VERSION_MAP.lookup("NT 6.1").as_deref(), Some("7"));
        assert_eq!(WINDOWS_VERSION_MAP.lookup("NT 5.2").as_deref(), Some("XP"));
    }

    #[test]
    fn unlisted_tokens_pass_through() {
        assert_eq!(WINDOWS_VERSION_MAP.lookup("98").as_deref(), Some("98"));
    }
}
