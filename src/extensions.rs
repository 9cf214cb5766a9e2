//! Opt-in rule tables for agents outside the regular-browser population:
//! command-line tools, crawlers, fetchers, HTTP libraries, mail clients,
//! media players, in-app webviews, vehicle head units, and long-tail devices.
//!
//! Extension groups are consulted before the built-in tables, so an extension
//! can take over a UA the base tables would classify differently.

use crate::matcher::Field::{Model, Name, Type, Vendor, Version};
use crate::matcher::FieldSpec::{Cap, Fun, Lit, Sub};
use crate::matcher::{RuleGroup, Transform};
use crate::rules::rg;

/// A bundle of per-facet rule groups layered ahead of the built-in tables.
pub struct Extension {
    pub browser: &'static [RuleGroup],
    pub cpu: &'static [RuleGroup],
    pub device: &'static [RuleGroup],
    pub engine: &'static [RuleGroup],
    pub os: &'static [RuleGroup],
}

impl Extension {
    pub const EMPTY: Extension = Extension {
        browser: &[],
        cpu: &[],
        device: &[],
        engine: &[],
        os: &[],
    };
}

/// wget / curl / Lynx / ELinks / HTTPie
pub static CLIS: Extension = Extension {
    browser: &[rg(
        &[r"(wget|curl|lynx|elinks|httpie)[/ ]\(?([\w\.-]+)"],
        &[Cap(Name), Cap(Version), Lit(Type, "cli")],
    )],
    ..Extension::EMPTY
};

/// Search-engine and AI training crawlers.
pub static CRAWLERS: Extension = Extension {
    browser: &[
        rg(
            &[
                r"((?:adidx|ahrefs|amazon|bing|cc|dot|duckduck|exa|facebook|gpt|linkedin|mj12|mojeek|oai-search|perplexity|semrush|seznam)bot)/([\w\.-]+)",
                // Applebot
                r"(applebot(?:-extended)?)/?([\w\.]*)",
                // Baiduspider
                r"(baiduspider[-imagevdonwsfcpr]{0,7})/?([\w\.]*)",
                // ClaudeBot (Anthropic)
                r"(claude(?:bot|-web)|anthropic-ai)/?([\w\.]*)",
                // Coc Coc Bot
                r"(coccocbot-(?:image|web))/([\w\.]+)",
                // Facebook / Meta
                r"(facebook(?:externalhit|catalog)|meta-externalagent)/([\w\.]+)",
                // Googlebot
                r"(google(?:bot|other|-inspectiontool)(?:-image|-video|-news)?|storebot-google)/?([\w\.]*)",
                // Internet Archive
                r"(ia_archiver|archive\.org_bot)/?([\w\.]*)",
                // SemrushBot
                r"((?:semrush|splitsignal)bot[-abcfimostw]*)/?([\w\.-]*)",
                // Sogou Spider
                r"(sogou (?:pic|head|web|orion|news) spider)/([\w\.]+)",
                // Yahoo! Japan
                r"(y!?j-(?:asr|br[uw]|dscv|mmp|vsidx|wsc))/([\w\.]+)",
                // Yandex bots
                r"(yandex(?:(?:mobile)?(?:accessibility|additional|renderresources|screenshot|sprav)?bot|image(?:s|resizer)|video(?:parser)?|blogs|adnet|favicons|fordomain|market|media|metrika|news|ontodb(?:api)?|pagechecker|partner|rca|tracker|turbo|vertis|webmaster|antivirus))/([\w\.]+)",
                // Yeti (Naver)
                r"(yeti)/([\w\.]+)",
                // Versioned long-tail crawlers
                r"((?:aihit|diff|timpi|you)bot|omgili(?:bot)?|openai image downloader|(?:magpie-|velenpublicweb)crawler|webzio-extended|(?:screaming frog seo |line|yisou)spider)/?([\w\.]*)",
            ],
            &[Cap(Name), Cap(Version), Lit(Type, "crawler")],
        ),
        rg(
            &[
                // Unversioned Google bots
                r"((?:adsbot|apis|mediapartners)-google(?:-mobile)?|google-?(?:other|cloudvertexbot|extended|safety))",
                // Other unversioned crawlers
                r"\b(360spider-?(?:image|video)?|bytespider|(?:ai2|aspiegel|dataforseo|imagesift|petal|turnitin)bot|teoma|yahoo! slurp)",
            ],
            &[Cap(Name), Lit(Type, "crawler")],
        ),
    ],
    ..Extension::EMPTY
};

/// Desktop and mobile mail clients.
pub static EMAILS: Extension = Extension {
    browser: &[rg(
        &[r"(airmail|bluemail|emclient|evolution|foxmail|kmail2?|kontact|(?:microsoft |mac)?outlook(?:-express)?|navermailapp|(?!chrom.+)sparrow|thunderbird|yahoo)(?:m.+ail; |[/ ])([\w\.]+)"],
        &[Cap(Name), Cap(Version), Lit(Type, "email")],
    )],
    ..Extension::EMPTY
};

/// Link-preview and on-demand fetching agents. Unlike crawlers they fetch
/// single resources at a user's request.
pub static FETCHERS: Extension = Extension {
    browser: &[
        rg(
            &[
                r"(ahrefssiteaudit|(?:bing|microsoft)preview|chatgpt-user|mastodon|(?:discord|duckassist|linkedin|pinterest|reddit|roger|siteaudit|twitter|uptimero)bot|google-site-verification|meta-externalfetcher|y!?j-dlc|yandex(?:calendar|direct(?:dyn)?|searchshop)|yadirectfetcher)/([\w\.]+)",
                // Bluesky
                r"(bluesky) cardyb/([\w\.]+)",
                // Skype
                r"(skypeuripreview) preview/([\w\.]+)",
                // Slackbot
                r"(slack(?:bot)?(?:-imgproxy|-linkexpanding)?) ([\w\.]+)",
                // WhatsApp
                r"(whatsapp)/([\w\.]+)",
            ],
            &[Cap(Name), Cap(Version), Lit(Type, "fetcher")],
        ),
        rg(
            &[r"((?:better uptime |telegram|vercel)bot|cohere-ai|feedfetcher-google|google(?:imageproxy|-read-aloud|-pagerenderer|producer)|snap url preview|yandex(?:sitelinks|userproxy))"],
            &[Cap(Name), Lit(Type, "fetcher")],
        ),
    ],
    os: &[rg(
        &[r"whatsapp/[\d\.]+ (a|i)"],
        &[Fun(Name, Transform::Apply(whatsapp_os))],
    )],
    ..Extension::EMPTY
};

fn whatsapp_os(platform: &str) -> Option<String> {
    Some(if platform == "A" { "Android" } else { "iOS" }.to_string())
}

/// In-app webviews beyond those the built-in table already knows.
pub static INAPPS: Extension = Extension {
    browser: &[
        // Slack
        rg(
            &[r"(?:slack(?=.+electron|.+ios)|chatlyio)/([\d\.]+)"],
            &[Cap(Version), Lit(Name, "Slack"), Lit(Type, "inapp")],
        ),
        // Yahoo! Japan
        rg(
            &[r"jp\.co\.yahoo\.(?:android\.yjtop|ipn\.appli)/([\d\.]+)"],
            &[Cap(Version), Lit(Name, "Yahoo! Japan"), Lit(Type, "inapp")],
        ),
    ],
    ..Extension::EMPTY
};

/// HTTP client libraries.
pub static LIBRARIES: Extension = Extension {
    browser: &[rg(
        &[
            r"^(apache-httpclient|axios|(?:go|java)-http-client|got|guzzlehttp|java|libwww-perl|lua-resty-http|needle|node-(?:fetch|superagent)|okhttp|php-soap|postmanruntime|python-(?:urllib|requests)|scrapy)/([\w\.]+)",
            r"(jsdom|(?<=\()java)/([\w\.]+)",
        ],
        &[Cap(Name), Cap(Version), Lit(Type, "library")],
    )],
    ..Extension::EMPTY
};

/// Standalone audio/video player applications.
pub static MEDIA_PLAYERS: Extension = Extension {
    browser: &[
        rg(
            &[
                r"(apple(?:coremedia|tv))/([\w\._]+)",
                r"(coremedia) v([\w\._]+)",
                r"(ares|clementine|music player daemon|nexplayer|ossproxy) ([\w\.-]+)",
                r"^(aqualung|audacious|audimusicstream|amarok|bass|bsplayer|core|gnomemplayer|gvfs|irapp|lyssna|music on console|nero (?:home|scout)|nokia\d+|nsplayer|psp-internetradioplayer|quicktime|rma|radioapp|radioclientapplication|soundtap|stagefright|streamium|totem|videos|xbmc|xine|xmms)/([\w\.-]+)",
                r"(lg player|nexplayer) ([\d\.]+)",
                r"player/(nexplayer|lg player) ([\w\.-]+)",
                r"(gstreamer) souphttpsrc.+libsoup/([\w\.-]+)",
                r"(htc streaming player) [\w_]+ / ([\d\.]+)",
                r"(lavf)([\d\.]+)",
                r"(mplayer)(?: |/)(?:(?:sherpya-){0,1}svn)(?:-| )(r\d+(?:-\d+[\w\.-]+))",
                r" (songbird)/([\w\.-]+)",
                r"(winamp)(?:3 version|mpeg| ) ([\w\.-]+)",
                r"(vlc)(?:/| media player - version )([\w\.-]+)",
                r"^(foobar2000|itunes|smp)/([\d\.]+)",
                r"com\.(riseupradioalarm)/([\d\.]*)",
                r"(mplayer)(?:\s|/| unknown-)([\w\.\-]+)",
                // Windows Media Server
                r"(windows)/([\w\.-]+) upnp/[\d\.]+ dlnadoc/[\d\.]+ home media server",
            ],
            &[Cap(Name), Cap(Version), Lit(Type, "mediaplayer")],
        ),
        // Flip Player
        rg(
            &[r"(flrp)/([\w\.-]+)"],
            &[Lit(Name, "Flip Player"), Cap(Version), Lit(Type, "mediaplayer")],
        ),
        // Players that never report a version
        rg(
            &[r"(fstream|media player classic|inlight radio|mplayer|nativehost|nero showtime|ocms-bot|queryseekspider|tapinradio|tunein radio|winamp|yourmuze)"],
            &[Cap(Name), Lit(Type, "mediaplayer")],
        ),
        rg(
            &[r"(htc_one_s|windows-media-player|wmplayer)/([\w\.-]+)"],
            &[Sub(Name, "[_-]", " "), Cap(Version), Lit(Type, "mediaplayer")],
        ),
        // Rad.io
        rg(
            &[r"(rad.io|radio.(?:de|at|fr)) ([\d\.]+)"],
            &[Lit(Name, "rad.io"), Cap(Version), Lit(Type, "mediaplayer")],
        ),
    ],
    ..Extension::EMPTY
};

/// Vehicle head units.
pub static VEHICLES: Extension = Extension {
    device: &[
        rg(&[r"aftlbt962e2"], &[Lit(Vendor, "BMW")]),
        rg(&[r"dilink.+(byd) auto"], &[Cap(Vendor)]),
        rg(&[r"aftlft962x3"], &[Lit(Vendor, "Jeep"), Lit(Model, "Wagooner")]),
        rg(&[r"(rivian) (r1t)"], &[Cap(Vendor), Cap(Model)]),
        rg(&[r"vcc.+netfront"], &[Lit(Vendor, "Volvo")]),
    ],
    ..Extension::EMPTY
};

/// Long-tail phones and tablets dropped from the built-in table.
pub static EXTRA_DEVICES: Extension = Extension {
    device: &[
        rg(
            &[
                r"(nook)[\w ]+build/(\w+)",
                r"(dell) (strea[kpr\d ]*[\dko])",
                r"(le[- ]+pan)[- ]+(\w{1,9}) bui",
                r"(trinity)[- ]*(t\d{3}) bui",
                r"(gigaset)[- ]+(q\w{1,9}) bui",
                r"(vodafone) ([\w ]+)(?:\)| bui)",
            ],
            &[Cap(Vendor), Cap(Model), Lit(Type, "tablet")],
        ),
        rg(&[r"(u304aa)"], &[Cap(Model), Lit(Vendor, "AT&T"), Lit(Type, "mobile")]),
        rg(&[r"\bsie-(\w*)"], &[Cap(Model), Lit(Vendor, "Siemens"), Lit(Type, "mobile")]),
        rg(&[r"\b(rct\w+) b"], &[Cap(Model), Lit(Vendor, "RCA"), Lit(Type, "tablet")]),
        rg(&[r"\b(venue[\d ]{2,7}) b"], &[Cap(Model), Lit(Vendor, "Dell"), Lit(Type, "tablet")]),
        rg(&[r"\b(q(?:mv|ta)\w+) b"], &[Cap(Model), Lit(Vendor, "Verizon"), Lit(Type, "tablet")]),
        rg(
            &[r"\b(?:barnes[& ]+noble |bn[rt])([\w\+ ]*) b"],
            &[Cap(Model), Lit(Vendor, "Barnes & Noble"), Lit(Type, "tablet")],
        ),
        rg(&[r"\b(tm\d{3}\w+) b"], &[Cap(Model), Lit(Vendor, "NuVision"), Lit(Type, "tablet")]),
        rg(&[r"\b(k88) b"], &[Cap(Model), Lit(Vendor, "ZTE"), Lit(Type, "tablet")]),
        rg(&[r"\b(nx\d{3}j) b"], &[Cap(Model), Lit(Vendor, "ZTE"), Lit(Type, "mobile")]),
        rg(&[r"\b(gen\d{3}) b.+49h"], &[Cap(Model), Lit(Vendor, "Swiss"), Lit(Type, "mobile")]),
        rg(&[r"\b(zur\d{3}) b"], &[Cap(Model), Lit(Vendor, "Swiss"), Lit(Type, "tablet")]),
        rg(&[r"^((zeki)?tb.*\b) b"], &[Cap(Model), Lit(Vendor, "Zeki"), Lit(Type, "tablet")]),
        rg(
            &[r"\b([yr]\d{2}) b", r"\b(?:dragon[- ]+touch |dt)(\w{5}) b"],
            &[Cap(Model), Lit(Vendor, "Dragon Touch"), Lit(Type, "tablet")],
        ),
        rg(&[r"\b(ns-?\w{0,9}) b"], &[Cap(Model), Lit(Vendor, "Insignia"), Lit(Type, "tablet")]),
        rg(
            &[r"\b((nxa|next)-?\w{0,9}) b"],
            &[Cap(Model), Lit(Vendor, "NextBook"), Lit(Type, "tablet")],
        ),
        rg(
            &[r"\b(xtreme_)?(v(1[045]|2[015]|[3469]0|7[05])) b"],
            &[Lit(Vendor, "Voice"), Cap(Model), Lit(Type, "mobile")],
        ),
        rg(
            &[r"\b(lvtel-)?(v1[12]) b"],
            &[Lit(Vendor, "LvTel"), Cap(Model), Lit(Type, "mobile")],
        ),
        rg(&[r"\b(ph-1) "], &[Cap(Model), Lit(Vendor, "Essential"), Lit(Type, "mobile")]),
        rg(
            &[r"\b(v(100md|700na|7011|917g).*\b) b"],
            &[Cap(Model), Lit(Vendor, "Envizen"), Lit(Type, "tablet")],
        ),
        rg(
            &[r"\b(trio[-\w\. ]+) b"],
            &[Cap(Model), Lit(Vendor, "MachSpeed"), Lit(Type, "tablet")],
        ),
        rg(&[r"\btu_(1491) b"], &[Cap(Model), Lit(Vendor, "Rotor"), Lit(Type, "tablet")]),
    ],
    ..Extension::EMPTY
};

/// Everything that is not a human driving a browser: CLI tools, crawlers,
/// fetchers, and HTTP libraries, layered in that order.
pub static BOTS: &[&Extension] = &[&CLIS, &CRAWLERS, &FETCHERS, &LIBRARIES];
