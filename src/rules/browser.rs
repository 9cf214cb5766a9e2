use once_cell::sync::Lazy;

use super::rg;
use crate::matcher::Field::{Name, Type, Version};
use crate::matcher::FieldSpec::{Cap, Fun, Lit, Sub};
use crate::matcher::{RuleGroup, Transform};
use crate::str_map::{MapVal, StrMap};

const INAPP: &str = "inapp";

// Cobalt versions read like "23.lts.2.306558"; only the first non-numeric
// segment is dropped, keeping any later tags intact.
static COBALT_JUNK: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"[^\d\.]+.").expect("valid literal pattern"));

fn cobalt_version(version: &str) -> Option<String> {
    Some(COBALT_JUNK.replace(version, "").into_owned())
}

/// Canonical names for Client-Hints browser brands. Keys are the names kept
/// in results; a brand matching no entry passes through unchanged. The two
/// WebView entries sit first because scalar matchers are substring tests and
/// "Chrome" would otherwise swallow them.
pub(crate) static BROWSER_ALIASES: StrMap = StrMap {
    entries: &[
        ("Android WebView", MapVal::One("Chrome WebView")),
        ("HeadlessChrome", MapVal::One("Chrome Headless")),
        ("Google Chrome", MapVal::One("Chrome")),
        ("Microsoft Edge", MapVal::One("Edge")),
        ("HuaweiBrowser", MapVal::One("Huawei Browser")),
        ("Miui Browser", MapVal::One("MIUI Browser")),
        ("OperaMobile", MapVal::One("Opera Mobi")),
        ("YaBrowser", MapVal::One("Yandex")),
    ],
};

pub(crate) static BROWSER: &[RuleGroup] = &[
    // Chrome for Android/iOS
    rg(&[r"\b(?:crmo|crios)/([\w\.]+)"], &[Cap(Version), Lit(Name, "Mobile Chrome")]),
    // Microsoft Edge
    rg(&[r"edg(?:e|ios|a)?/([\w\.]+)"], &[Cap(Version), Lit(Name, "Edge")]),
    // Presto-based Opera
    rg(
        &[
            r"(opera mini)/([-\w\.]+)",
            r"(opera [mobiletab]{3,6})\b.+version/([-\w\.]+)",
            r"(opera)(?:.+version/|[/ ]+)([\w\.]+)",
        ],
        &[Cap(Name), Cap(Version)],
    ),
    // Opera Mini on iOS >= 8.0
    rg(&[r"opios[/ ]+([\w\.]+)"], &[Cap(Version), Lit(Name, "Opera Mini")]),
    // Opera GX
    rg(&[r"\bop(?:rg)?x/([\w\.]+)"], &[Cap(Version), Lit(Name, "Opera GX")]),
    // Opera Webkit
    rg(&[r"\bopr/([\w\.]+)"], &[Cap(Version), Lit(Name, "Opera")]),
    // Baidu
    rg(
        &[r"\bb[ai]*d(?:uhd|[ub]*[aekoprswx]{5,6})[/ ]?([\w\.]+)"],
        &[Cap(Version), Lit(Name, "Baidu")],
    ),
    // Maxthon
    rg(
        &[r"\b(?:mxbrowser|mxios|myie2)/?([-\w\.]*)\b"],
        &[Cap(Version), Lit(Name, "Maxthon")],
    ),
    rg(
        &[
            // Kindle
            r"(kindle)/([\w\.]+)",
            r"(lunascape|maxthon|netfront|jasmine|blazer|sleipnir)[/ ]?([\w\.]*)",
            // Trident based
            r"(avant|iemobile|slim(?:browser|boat|jet))[/ ]?([\d\.]*)",
            r"(?:ms|\()(ie) ([\w\.]+)",
            // Blink/Webkit/KHTML based
            r"(flock|rockmelt|midori|epiphany|silk|skyfire|ovibrowser|bolt|iron|vivaldi|iridium|phantomjs|bowser|qupzilla|falkon|rekonq|puffin|brave|whale(?!.+naver)|qqbrowserlite|duckduckgo|klar|helio|dragon|otter|dooble|(?:lg |qute)browser)/([-\w\.]+)",
            r"(heytap|ovi|115|surf)browser/([\d\.]+)",
            r"(ecosia|weibo)(?:__| \w+@)([\d\.]+)",
        ],
        &[Cap(Name), Cap(Version)],
    ),
    // Quark
    rg(&[r"quark(?:pc)?/([-\w\.]+)"], &[Cap(Version), Lit(Name, "Quark")]),
    // DuckDuckGo
    rg(&[r"\bddg/([\w\.]+)"], &[Cap(Version), Lit(Name, "DuckDuckGo")]),
    // UCBrowser
    rg(
        &[r"(?:\buc? ?browser|(?:juc.+)ucweb)[/ ]?([\w\.]+)"],
        &[Cap(Version), Lit(Name, "UCBrowser")],
    ),
    // WeChat, including the desktop built-in browser
    rg(
        &[
            r"microm.+\bqbcore/([\w\.]+)",
            r"\bqbcore/([\w\.]+).+microm",
            r"micromessenger/([\w\.]+)",
        ],
        &[Cap(Version), Lit(Name, "WeChat")],
    ),
    // Konqueror
    rg(&[r"konqueror/([\w\.]+)"], &[Cap(Version), Lit(Name, "Konqueror")]),
    // IE11
    rg(
        &[r"trident.+rv[: ]([\w\.]{1,9})\b.+like gecko"],
        &[Cap(Version), Lit(Name, "IE")],
    ),
    // Yandex
    rg(&[r"ya(?:search)?browser/([\w\.]+)"], &[Cap(Version), Lit(Name, "Yandex")]),
    // Smart Lenovo Browser
    rg(
        &[r"slbrowser/([\w\.]+)"],
        &[Cap(Version), Lit(Name, "Smart Lenovo Browser")],
    ),
    // Avast/AVG Secure Browser
    rg(
        &[r"(avast|avg)/([\w\.]+)"],
        &[Sub(Name, "(.+)", "${1} Secure Browser"), Cap(Version)],
    ),
    // Firefox Focus
    rg(&[r"\bfocus/([\w\.]+)"], &[Cap(Version), Lit(Name, "Firefox Focus")]),
    // Opera Touch
    rg(&[r"\bopt/([\w\.]+)"], &[Cap(Version), Lit(Name, "Opera Touch")]),
    // Coc Coc
    rg(&[r"coc_coc\w+/([\w\.]+)"], &[Cap(Version), Lit(Name, "Coc Coc")]),
    // Dolphin
    rg(&[r"dolfin/([\w\.]+)"], &[Cap(Version), Lit(Name, "Dolphin")]),
    // Opera Coast
    rg(&[r"coast/([\w\.]+)"], &[Cap(Version), Lit(Name, "Opera Coast")]),
    // MIUI Browser
    rg(&[r"miuibrowser/([\w\.]+)"], &[Cap(Version), Lit(Name, "MIUI Browser")]),
    // Firefox for iOS
    rg(&[r"fxios/([\w\.-]+)"], &[Cap(Version), Lit(Name, "Mobile Firefox")]),
    // 360
    rg(&[r"\bqihoobrowser/?([\w\.]*)"], &[Cap(Version), Lit(Name, "360")]),
    // QQ
    rg(&[r"\b(qq)/([\w\.]+)"], &[Sub(Name, "(.+)", "${1}Browser"), Cap(Version)]),
    // Oculus/Sailfish/Huawei/Vivo/Pico
    rg(
        &[r"(oculus|sailfish|huawei|vivo|pico)browser/([\w\.]+)"],
        &[Sub(Name, "(.+)", "${1} Browser"), Cap(Version)],
    ),
    // Samsung Internet
    rg(
        &[r"samsungbrowser/([\w\.]+)"],
        &[Cap(Version), Lit(Name, "Samsung Internet")],
    ),
    // Sogou Explorer
    rg(&[r"metasr[/ ]?([\d\.]+)"], &[Cap(Version), Lit(Name, "Sogou Explorer")]),
    // Sogou Mobile
    rg(&[r"(sogou)mo\w+/([\d\.]+)"], &[Lit(Name, "Sogou Mobile"), Cap(Version)]),
    rg(
        &[
            // Electron-based app
            r"(electron)/([\w\.]+) safari",
            // Tesla
            r"(tesla)(?: qtcarbrowser|/(20\d\d\.[-\w\.]+))",
            // QQ/2345
            r"m?(qqbrowser|2345(?=browser|chrome|explorer))\w*[/ ]?v?([\w\.]+)",
        ],
        &[Cap(Name), Cap(Version)],
    ),
    // LieBao Browser/Rekonq
    rg(&[r"(lbbrowser|rekonq)"], &[Cap(Name)]),
    // Iron/360 via their Chrome token
    rg(
        &[
            r"ome/([\w\.]+) \w* ?(iron) saf",
            r"ome/([\w\.]+).+qihu (360)[es]e",
        ],
        &[Cap(Version), Cap(Name)],
    ),
    // Facebook in-app webview
    rg(
        &[r"((?:fban/fbios|fb_iab/fb4a)(?!.+fbav)|;fbav/([\w\.]+);)"],
        &[Lit(Name, "Facebook"), Cap(Version), Lit(Type, INAPP)],
    ),
    // Other in-app webviews
    rg(
        &[
            r"(Klarna)/([\w\.]+)",
            r"(kakao(?:talk|story))[/ ]([\w\.]+)",
            r"(naver)\(.*?(\d+\.[\w\.]+).*\)",
            r"(daum)apps[/ ]([\w\.]+)",
            r"safari (line)/([\w\.]+)",
            r"\b(line)/([\w\.]+)/iab",
            r"(alipay)client/([\w\.]+)",
            r"(twitter)(?:and| f.+e/([\w\.]+))",
            r"(instagram|snapchat)[/ ]([-\w\.]+)",
        ],
        &[Cap(Name), Cap(Version), Lit(Type, INAPP)],
    ),
    // Google Search Appliance on iOS
    rg(
        &[r"\bgsa/([\w\.]+) .*safari/"],
        &[Cap(Version), Lit(Name, "GSA"), Lit(Type, INAPP)],
    ),
    // TikTok
    rg(
        &[r"musical_ly(?:.+app_?version/|_)([\w\.]+)"],
        &[Cap(Version), Lit(Name, "TikTok"), Lit(Type, INAPP)],
    ),
    // LinkedIn
    rg(&[r"\[(linkedin)app\]"], &[Cap(Name), Lit(Type, INAPP)]),
    // Chromium
    rg(&[r"(chromium)[/ ]([-\w\.]+)"], &[Cap(Name), Cap(Version)]),
    // Chrome Headless
    rg(
        &[r"headlesschrome(?:/([\w\.]+)| )"],
        &[Cap(Version), Lit(Name, "Chrome Headless")],
    ),
    // Chrome WebView
    rg(&[r" wv\).+(chrome)/([\w\.]+)"], &[Lit(Name, "Chrome WebView"), Cap(Version)]),
    // Android Browser
    rg(
        &[r"droid.+ version/([\w\.]+)\b.+(?:mobile safari|safari)"],
        &[Cap(Version), Lit(Name, "Android Browser")],
    ),
    // Chrome Mobile
    rg(&[r"chrome/([\w\.]+) mobile"], &[Cap(Version), Lit(Name, "Mobile Chrome")]),
    // Chrome/OmniWeb/Arora/Tizen/Nokia
    rg(
        &[r"(chrome|omniweb|arora|[tizenoka]{5} ?browser)/v?([\w\.]+)"],
        &[Cap(Name), Cap(Version)],
    ),
    // Safari Mobile
    rg(
        &[r"version/([\w\.\,]+) .*mobile(?:/\w+ | ?)safari"],
        &[Cap(Version), Lit(Name, "Mobile Safari")],
    ),
    rg(&[r"iphone .*mobile(?:/\w+ | ?)safari"], &[Lit(Name, "Mobile Safari")]),
    // Safari
    rg(&[r"version/([\w\.\,]+) .*(safari)"], &[Cap(Version), Cap(Name)]),
    // Safari < 3.0
    rg(
        &[r"webkit.+?(mobile ?safari|safari)(/[\w\.]+)"],
        &[Cap(Name), Lit(Version, "1")],
    ),
    rg(&[r"(webkit|khtml)/([\w\.]+)"], &[Cap(Name), Cap(Version)]),
    // Firefox Mobile
    rg(
        &[r"(?:mobile|tablet);.*(firefox)/([\w\.-]+)"],
        &[Lit(Name, "Mobile Firefox"), Cap(Version)],
    ),
    // Netscape
    rg(&[r"(navigator|netscape\d?)/([-\w\.]+)"], &[Lit(Name, "Netscape"), Cap(Version)]),
    // Wolvic/LibreWolf
    rg(&[r"(wolvic|librewolf)/([\w\.]+)"], &[Cap(Name), Cap(Version)]),
    // Firefox Reality
    rg(
        &[r"mobile vr; rv:([\w\.]+)\).+firefox"],
        &[Cap(Version), Lit(Name, "Firefox Reality")],
    ),
    // Gecko based and remaining text-mode browsers
    rg(
        &[
            r"ekiohf.+(flow)/([\w\.]+)",
            r"(swiftfox)",
            r"(icedragon|iceweasel|camino|chimera|fennec|maemo browser|minimo|conkeror)[/ ]?([\w\.\+]+)",
            r"(seamonkey|k-meleon|icecat|iceape|firebird|phoenix|palemoon|basilisk|waterfox)/([-\w\.]+)$",
            r"(firefox)/([\w\.]+)",
            r"(mozilla)/([\w\.]+) .+rv\:.+gecko/\d+",
            r"(amaya|dillo|doris|icab|ladybird|lynx|mosaic|netsurf|obigo|polaris|w3m|(?:go|ice|up)[\. ]?browser)[-/ ]?v?([\w\.]+)",
            r"\b(links) \(([\w\.]+)",
        ],
        &[Cap(Name), Sub(Version, "_", ".")],
    ),
    // Cobalt
    rg(
        &[r"(cobalt)/([\w\.]+)"],
        &[Cap(Name), Fun(Version, Transform::Apply(cobalt_version))],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_table_keeps_canonical_names() {
        assert_eq!(BROWSER_ALIASES.lookup("Chrome").as_deref(), Some("Google Chrome"));
        assert_eq!(BROWSER_ALIASES.lookup("Google Chrome").as_deref(), Some("Google Chrome"));
        assert_eq!(BROWSER_ALIASES.lookup("Edge").as_deref(), Some("Microsoft Edge"));
        assert_eq!(BROWSER_ALIASES.lookup("Chrome WebView").as_deref(), Some("Android WebView"));
        // No wildcard entry: unknown brands pass through unchanged.
        assert_eq!(BROWSER_ALIASES.lookup("Brave").as_deref(), Some("Brave"));
    }

    #[test]
    fn cobalt_version_drops_only_the_first_segment() {
        assert_eq!(cobalt_version("23.lts.2.306558").as_deref(), Some("23.2.306558"));
        assert_eq!(
            cobalt_version("23.lts.master.1032").as_deref(),
            Some("23.master.1032")
        );
    }
}
