use super::rg;
use crate::matcher::Field::{Model, Type, Vendor};
use crate::matcher::FieldSpec::{Cap, Fun, Lit, Sub};
use crate::matcher::{RuleGroup, Transform};
use crate::str_map::{MapVal, StrMap};

const MOBILE: &str = "mobile";
const TABLET: &str = "tablet";
const SMARTTV: &str = "smarttv";
const CONSOLE: &str = "console";
const WEARABLE: &str = "wearable";
const XR: &str = "xr";
const EMBEDDED: &str = "embedded";

// A handful of model numbers are shared across vendors or carry their type in
// the model text, so those rules classify through a table instead of a literal.
static OPD2_VENDOR: StrMap = StrMap {
    entries: &[
        ("OnePlus", MapVal::Many(&["304", "403", "203"])),
        ("*", MapVal::One("OPPO")),
    ],
};

static ITEL_TYPE: StrMap = StrMap {
    entries: &[
        ("tablet", MapVal::Many(&["p10001l", "w7001"])),
        ("*", MapVal::One("mobile")),
    ],
};

static GENERIC_DROID_TYPE: StrMap = StrMap {
    entries: &[
        ("mobile", MapVal::One("Mobile")),
        ("xr", MapVal::One("VR")),
        ("*", MapVal::One(TABLET)),
    ],
};

pub(crate) static DEVICE: &[RuleGroup] = &[
    // -- Mobiles & tablets --
    // Samsung
    rg(
        &[r"\b(sch-i[89]0\d|shw-m380s|sm-[ptx]\w{2,4}|gt-[pn]\d{2,4}|sgh-t8[56]9|nexus 10)"],
        &[Cap(Model), Lit(Vendor, "Samsung"), Lit(Type, TABLET)],
    ),
    rg(
        &[
            r"\b((?:s[cgp]h|gt|sm)-(?![lr])\w+|sc[g-]?[\d]+a?|galaxy nexus)",
            r"samsung[- ]((?!sm-[lr])[-\w]+)",
            r"sec-(sgh\w+)",
        ],
        &[Cap(Model), Lit(Vendor, "Samsung"), Lit(Type, MOBILE)],
    ),
    // Apple iPod/iPhone
    rg(
        &[r"(?:/|\()(ip(?:hone|od)[\w, ]*)(?:/|;)"],
        &[Cap(Model), Lit(Vendor, "Apple"), Lit(Type, MOBILE)],
    ),
    // iPad
    rg(
        &[
            r"\((ipad);[-\w\),; ]+apple",
            r"applecoremedia/[\w\.]+ \((ipad)",
            r"\b(ipad)\d\d?,\d\d?[;\]].+ios",
        ],
        &[Cap(Model), Lit(Vendor, "Apple"), Lit(Type, TABLET)],
    ),
    rg(&[r"(macintosh);"], &[Cap(Model), Lit(Vendor, "Apple")]),
    // Sharp
    rg(
        &[r"\b(sh-?[altvz]?\d\d[a-ekm]?)"],
        &[Cap(Model), Lit(Vendor, "Sharp"), Lit(Type, MOBILE)],
    ),
    // Honor
    rg(
        &[r"\b((?:brt|eln|hey2?|gdi|jdn)-a?[lnw]09|(?:ag[rm]3?|jdn2|kob2)-a?[lw]0[09]hn)(?: bui|\)|;)"],
        &[Cap(Model), Lit(Vendor, "Honor"), Lit(Type, TABLET)],
    ),
    rg(
        &[r"honor([-\w ]+)[;\)]"],
        &[Cap(Model), Lit(Vendor, "Honor"), Lit(Type, MOBILE)],
    ),
    // Huawei
    rg(
        &[r"\b((?:ag[rs][2356]?k?|bah[234]?|bg[2o]|bt[kv]|cmr|cpn|db[ry]2?|jdn2|got|kob2?k?|mon|pce|scm|sht?|[tw]gr|vrd)-[ad]?[lw][0125][09]b?|605hw|bg2-u03|(?:gem|fdr|m2|ple|t1)-[7a]0[1-4][lu]|t1-a2[13][lw]|mediapad[\w\. ]*(?= bui|\)))\b(?!.+d/s)"],
        &[Cap(Model), Lit(Vendor, "Huawei"), Lit(Type, TABLET)],
    ),
    rg(
        &[
            r"(?:huawei)([-\w ]+)[;\)]",
            r"\b(nexus 6p|\w{2,4}e?-[atu]?[ln][\dx][012359c][adn]?)\b(?!.+d/s)",
        ],
        &[Cap(Model), Lit(Vendor, "Huawei"), Lit(Type, MOBILE)],
    ),
    // Xiaomi Mi Pad tablets
    rg(
        &[
            r"oid[^\)]+; (2[\dbc]{4}(182|283|rp\w{2})[cgl]|m2105k81a?c)(?: bui|\))",
            r"\b((?:red)?mi[-_ ]?pad[\w -]*)(?: bui|\))",
        ],
        &[Sub(Model, "_", " "), Lit(Vendor, "Xiaomi"), Lit(Type, TABLET)],
    ),
    // Xiaomi phones
    rg(
        &[
            r"\b(poco[\w ]+|m2\d{3}j\d\d[a-z]{2})(?: bui|\))",
            r"\b; (\w+) build/hm\1",
            r"\b(hm[-_ ]?note?[_ ]?(?:\d\w)?) bui",
            r"\b(redmi[\-_ ]?(?:note|k)?[\w_ ]+)(?: bui|\))",
            r"oid[^\)]+; (m?[12][0-389][01]\w{3,6}[c-y])( bui|; wv|\))",
            r"\b(mi[-_ ]?(?:a\d|one|one[_ ]plus|note lte|max|cc)?[_ ]?(?:\d?\w?)[_ ]?(?:plus|se|lite|pro)?)(?: bui|\))",
            r" ([\w ]+) miui/v?\d",
        ],
        &[Sub(Model, "_", " "), Lit(Vendor, "Xiaomi"), Lit(Type, MOBILE)],
    ),
    // OPPO
    rg(
        &[
            r"; (\w+) bui.+ oppo",
            r"\b(cph[12]\d{3}|p(?:af|c[al]|d\w|e[ar])[mt]\d0|x9007|a101op)\b",
        ],
        &[Cap(Model), Lit(Vendor, "OPPO"), Lit(Type, MOBILE)],
    ),
    rg(
        &[r"\b(opd2(\d{3}a?))(?: bui|\))"],
        &[Cap(Model), Fun(Vendor, Transform::Map(&OPD2_VENDOR)), Lit(Type, TABLET)],
    ),
    // BLU Vivo series
    rg(
        &[r"(vivo (5r?|6|8l?|go|one|s|x[il]?[2-4]?)[\w\+ ]*)(?: bui|\))"],
        &[Cap(Model), Lit(Vendor, "BLU"), Lit(Type, MOBILE)],
    ),
    // Vivo
    rg(
        &[r"; vivo (\w+)(?: bui|\))", r"\b(v[12]\d{3}\w?[at])(?: bui|;)"],
        &[Cap(Model), Lit(Vendor, "Vivo"), Lit(Type, MOBILE)],
    ),
    // Realme
    rg(
        &[r"\b(rmx[1-3]\d{3})(?: bui|;|\))"],
        &[Cap(Model), Lit(Vendor, "Realme"), Lit(Type, MOBILE)],
    ),
    // Motorola
    rg(
        &[
            r"\b(milestone|droid(?:[2-4x]| (?:bionic|x2|pro|razr))?:?( 4g)?)\b[\w ]+build/",
            r"\bmot(?:orola)?[- ](\w*)",
            r"((?:moto(?! 360)[\w\(\) ]+|xt\d{3,4}|nexus 6)(?= bui|\)))",
        ],
        &[Cap(Model), Lit(Vendor, "Motorola"), Lit(Type, MOBILE)],
    ),
    rg(
        &[r"\b(mz60\d|xoom[2 ]{0,2}) build/"],
        &[Cap(Model), Lit(Vendor, "Motorola"), Lit(Type, TABLET)],
    ),
    // LG
    rg(
        &[r"([vl]k\-?\d{3}) bui| 3\.[-\w; ]{10}lg?-([06cv9]{3,4})"],
        &[Cap(Model), Lit(Vendor, "LG"), Lit(Type, TABLET)],
    ),
    rg(
        &[
            r"(lm(?:-?f100[nv]?|-[\w\.]+)(?= bui|\))|nexus [45])",
            r"\blg[-e;/ ]+(?!.*(?:browser|netcast|android tv|watch))(\w+)",
            r"\blg-?([\d\w]+) bui",
        ],
        &[Cap(Model), Lit(Vendor, "LG"), Lit(Type, MOBILE)],
    ),
    // Lenovo
    rg(
        &[
            r"(ideatab[-\w ]+|602lv|d-42a|a101lv|a2109a|a3500-hv|s[56]000|pb-6505[my]|tb-?x?\d{3,4}(?:f[cu]|xu|[av])|yt\d?-[jx]?\d+[lfmx])( bui|;|\)|/)",
            r"lenovo ?(b[68]0[08]0-?[hf]?|tab(?:[\w -]+?)|tb[\w-]{6,7})( bui|;|\)|/)",
        ],
        &[Cap(Model), Lit(Vendor, "Lenovo"), Lit(Type, TABLET)],
    ),
    // Nokia
    rg(&[r"(nokia) (t[12][01])"], &[Cap(Vendor), Cap(Model), Lit(Type, TABLET)]),
    rg(
        &[r"(?:maemo|nokia).*(n900|lumia \d+|rm-\d+)", r"nokia[-_ ]?(([-\w\. ]*))"],
        &[Sub(Model, "_", " "), Lit(Type, MOBILE), Lit(Vendor, "Nokia")],
    ),
    // Google Pixel C/Tablet
    rg(
        &[r"(pixel (c|tablet))\b"],
        &[Cap(Model), Lit(Vendor, "Google"), Lit(Type, TABLET)],
    ),
    // Google Pixel
    rg(
        &[r"droid.+; (pixel[\daxl ]{0,6})(?: bui|\))"],
        &[Cap(Model), Lit(Vendor, "Google"), Lit(Type, MOBILE)],
    ),
    // Sony
    rg(
        &[r"droid.+; (a?\d[0-2]{2}so|[c-g]\d{4}|so[-gl]\w+|xq-a\w[4-7][12])(?= bui|\).+chrome/(?![1-6]{0,1}\d\.))"],
        &[Cap(Model), Lit(Vendor, "Sony"), Lit(Type, MOBILE)],
    ),
    rg(
        &[r"sony tablet [ps]", r"\b(?:sony)?sgp\w+(?: bui|\))"],
        &[Lit(Model, "Xperia Tablet"), Lit(Vendor, "Sony"), Lit(Type, TABLET)],
    ),
    // OnePlus
    rg(
        &[
            r" (kb2005|in20[12]5|be20[12][59])\b",
            r"(?:one)?(?:plus)? (a\d0\d\d)(?: b|\))",
        ],
        &[Cap(Model), Lit(Vendor, "OnePlus"), Lit(Type, MOBILE)],
    ),
    // Amazon tablets and Echo Show
    rg(
        &[
            r"(alexa)webm",
            r"(kf[a-z]{2}wi|aeo(?!bc)\w\w)( bui|\))",
            r"(kf[a-z]+)( bui|\)).+silk/",
        ],
        &[Cap(Model), Lit(Vendor, "Amazon"), Lit(Type, TABLET)],
    ),
    // Fire Phone
    rg(
        &[r"((?:sd|kf)[0349hijorstuw]+)( bui|\)).+silk/"],
        &[Sub(Model, "(.+)", "Fire Phone ${1}"), Lit(Vendor, "Amazon"), Lit(Type, MOBILE)],
    ),
    // BlackBerry PlayBook
    rg(
        &[r"(playbook);[-\w\),; ]+(rim)"],
        &[Cap(Model), Cap(Vendor), Lit(Type, TABLET)],
    ),
    // BlackBerry 10
    rg(
        &[r"\b((?:bb[a-f]|st[hv])100-\d)", r"\(bb10; (\w+)"],
        &[Cap(Model), Lit(Vendor, "BlackBerry"), Lit(Type, MOBILE)],
    ),
    // Asus
    rg(
        &[r"(?:\b|asus_)(transfo[prime ]{4,10} \w+|eeepc|slider \w+|nexus 7|padfone|p00[cj])"],
        &[Cap(Model), Lit(Vendor, "ASUS"), Lit(Type, TABLET)],
    ),
    rg(
        &[r" (z[bes]6[027][012][km][ls]|zenfone \d\w?)\b"],
        &[Cap(Model), Lit(Vendor, "ASUS"), Lit(Type, MOBILE)],
    ),
    // HTC Nexus 9
    rg(&[r"(nexus 9)"], &[Cap(Model), Lit(Vendor, "HTC"), Lit(Type, TABLET)]),
    // HTC/ZTE/Alcatel/GeeksPhone/Nexian/Panasonic/Sony
    rg(
        &[
            r"(htc)[-;_ ]{1,2}([\w ]+(?=\)| bui)|\w+)",
            r"(zte)[- ]([\w ]+?)(?: bui|/|\))",
            r"(alcatel|geeksphone|nexian|panasonic(?!(?:;|\.))|sony(?!-bra))[-_ ]?([-\w]*)",
        ],
        &[Cap(Vendor), Sub(Model, "_", " "), Lit(Type, MOBILE)],
    ),
    // TCL
    rg(
        &[
            r"tcl (xess p17aa)",
            r"droid [\w\.]+; ((?:8[14]9[16]|9(?:0(?:48|60|8[01])|1(?:3[27]|66)|2(?:6[69]|9[56])|466))[gqswx])(_\w(\w|\w\w))?(\)| bui)",
        ],
        &[Cap(Model), Lit(Vendor, "TCL"), Lit(Type, TABLET)],
    ),
    rg(
        &[r"droid [\w\.]+; (418(?:7d|8v)|5087z|5102l|61(?:02[dh]|25[adfh]|27[ai]|56[dh]|59k|65[ah])|a509dl|t(?:43(?:0w|1[adepqu])|50(?:6d|7[adju])|6(?:09dl|10k|12b|71[efho]|76[hjk])|7(?:66[ahju]|67[hw]|7[045][bh]|71[hk]|73o|76[ho]|79w|81[hks]?|82h|90[bhsy]|99b)|810[hs]))(_\w(\w|\w\w))?(\)| bui)"],
        &[Cap(Model), Lit(Vendor, "TCL"), Lit(Type, MOBILE)],
    ),
    // itel
    rg(
        &[r"(itel) ((\w+))"],
        &[Fun(Vendor, Transform::Lower), Cap(Model), Fun(Type, Transform::Map(&ITEL_TYPE))],
    ),
    // Acer
    rg(
        &[r"droid.+; ([ab][1-7]-?[0178a]\d\d?)"],
        &[Cap(Model), Lit(Vendor, "Acer"), Lit(Type, TABLET)],
    ),
    // Meizu
    rg(
        &[r"droid.+; (m[1-5] note) bui", r"\bmz-([-\w]{2,})"],
        &[Cap(Model), Lit(Vendor, "Meizu"), Lit(Type, MOBILE)],
    ),
    // Ulefone
    rg(
        &[r"; ((?:power )?armor(?:[\w ]{0,8}))(?: bui|\))"],
        &[Cap(Model), Lit(Vendor, "Ulefone"), Lit(Type, MOBILE)],
    ),
    // Energizer
    rg(
        &[r"; (energy ?\w+)(?: bui|\))", r"; energizer ([\w ]+)(?: bui|\))"],
        &[Cap(Model), Lit(Vendor, "Energizer"), Lit(Type, MOBILE)],
    ),
    // Cat
    rg(
        &[r"; cat (b35);", r"; (b15q?|s22 flip|s48c|s62 pro)(?: bui|\))"],
        &[Cap(Model), Lit(Vendor, "Cat"), Lit(Type, MOBILE)],
    ),
    // Smartfren
    rg(
        &[r"((?:new )?andromax[\w -]+)(?: bui|\))"],
        &[Cap(Model), Lit(Vendor, "Smartfren"), Lit(Type, MOBILE)],
    ),
    // Nothing
    rg(
        &[r"droid.+; (a(?:015|06[35]|142p?))"],
        &[Cap(Model), Lit(Vendor, "Nothing"), Lit(Type, MOBILE)],
    ),
    // Archos
    rg(
        &[
            r"; (x67 5g|tikeasy \w+|ac[1789]\d\w+)( b|\))",
            r"archos ?(5|gamepad2?|([\w ]*[t1789]|hello) ?\d+[\w ]*)( b|\))",
        ],
        &[Cap(Model), Lit(Vendor, "Archos"), Lit(Type, TABLET)],
    ),
    rg(
        &[r"archos ([\w ]+)( b|\))", r"; (ac[3-6]\d\w{2,8})( b|\))"],
        &[Cap(Model), Lit(Vendor, "Archos"), Lit(Type, MOBILE)],
    ),
    // IMO/Infinix tablets
    rg(
        &[r"(imo) (tab \w+)", r"(infinix) (x1101b?)"],
        &[Cap(Vendor), Cap(Model), Lit(Type, TABLET)],
    ),
    // Mixed vendor-first phones
    rg(
        &[
            r"(blackberry|benq|palm(?=\-)|sonyericsson|acer|asus(?! zenw)|dell|jolla|meizu|motorola|polytron|infinix|tecno|micromax|advan)[-_ ]?([-\w]*)",
            r"; (blu|hmd|imo|tcl)[_ ]([\w\+ ]+?)(?: bui|\)|; r)",
            r"(hp) ([\w ]+\w)",
            r"(microsoft); (lumia[\w ]+)",
            r"(lenovo)[-_ ]?([-\w ]+?)(?: bui|\)|/)",
            r"(oppo) ?([\w ]+) bui",
        ],
        &[Cap(Vendor), Cap(Model), Lit(Type, MOBILE)],
    ),
    // Kobo/HP TouchPad/Kindle
    rg(
        &[
            r"(kobo)\s(ereader|touch)",
            r"(hp).+(touchpad(?!.+tablet)|tablet)",
            r"(kindle)/([\w\.]+)",
        ],
        &[Cap(Vendor), Cap(Model), Lit(Type, TABLET)],
    ),
    // Surface Duo
    rg(&[r"(surface duo)"], &[Cap(Model), Lit(Vendor, "Microsoft"), Lit(Type, TABLET)]),
    // Fairphone
    rg(
        &[r"droid [\d\.]+; (fp\du?)(?: b|\))"],
        &[Cap(Model), Lit(Vendor, "Fairphone"), Lit(Type, MOBILE)],
    ),
    // Nvidia tablets
    rg(
        &[r"((?:tegranote|shield t(?!.+d tv))[\w -]*?)(?: b|\))"],
        &[Cap(Model), Lit(Vendor, "Nvidia"), Lit(Type, TABLET)],
    ),
    // Sprint phones
    rg(&[r"(sprint) (\w+)"], &[Cap(Vendor), Cap(Model), Lit(Type, MOBILE)]),
    // Microsoft Kin
    rg(
        &[r"(kin\.[onetw]{3})"],
        &[Sub(Model, r"\.", " "), Lit(Vendor, "Microsoft"), Lit(Type, MOBILE)],
    ),
    // Zebra
    rg(
        &[r"droid.+; ([c6]+|et5[16]|mc[239][23]x?|vc8[03]x?)\)"],
        &[Cap(Model), Lit(Vendor, "Zebra"), Lit(Type, TABLET)],
    ),
    rg(
        &[r"droid.+; (ec30|ps20|tc[2-8]\d[kx])\)"],
        &[Cap(Model), Lit(Vendor, "Zebra"), Lit(Type, MOBILE)],
    ),
    // -- Smart TVs --
    // Samsung
    rg(&[r"smart-tv.+(samsung)"], &[Cap(Vendor), Lit(Type, SMARTTV)]),
    rg(
        &[r"hbbtv.+maple;(\d+)"],
        &[Sub(Model, "^", "SmartTV"), Lit(Vendor, "Samsung"), Lit(Type, SMARTTV)],
    ),
    // LG
    rg(&[r"tcast.+(lg)e?. ([-\w]+)"], &[Cap(Vendor), Cap(Model), Lit(Type, SMARTTV)]),
    rg(
        &[r"(nux; netcast.+smarttv|lg (netcast\.tv-201\d|android tv))"],
        &[Lit(Vendor, "LG"), Lit(Type, SMARTTV)],
    ),
    // Apple TV
    rg(
        &[r"(apple) ?tv"],
        &[Cap(Vendor), Lit(Model, "Apple TV"), Lit(Type, SMARTTV)],
    ),
    // Google Chromecast
    rg(
        &[r"crkey.*devicetype/chromecast"],
        &[Lit(Model, "Chromecast Third Generation"), Lit(Vendor, "Google"), Lit(Type, SMARTTV)],
    ),
    rg(
        &[r"crkey.*devicetype/([^/]*)"],
        &[Sub(Model, "^", "Chromecast "), Lit(Vendor, "Google"), Lit(Type, SMARTTV)],
    ),
    rg(
        &[r"fuchsia.*crkey"],
        &[Lit(Model, "Chromecast Nest Hub"), Lit(Vendor, "Google"), Lit(Type, SMARTTV)],
    ),
    rg(
        &[r"crkey"],
        &[Lit(Model, "Chromecast"), Lit(Vendor, "Google"), Lit(Type, SMARTTV)],
    ),
    // Facebook Portal TV
    rg(&[r"(portaltv)"], &[Cap(Model), Lit(Vendor, "Facebook"), Lit(Type, SMARTTV)]),
    // Fire TV
    rg(
        &[r"droid.+aft(\w+)( bui|\))"],
        &[Cap(Model), Lit(Vendor, "Amazon"), Lit(Type, SMARTTV)],
    ),
    // Nvidia Shield TV
    rg(&[r"(shield \w+ tv)"], &[Cap(Model), Lit(Vendor, "Nvidia"), Lit(Type, SMARTTV)]),
    // Sharp
    rg(
        &[r"\(dtv[\);].+(aquos)", r"(aquos-tv[\w ]+)\)"],
        &[Cap(Model), Lit(Vendor, "Sharp"), Lit(Type, SMARTTV)],
    ),
    // Sony
    rg(
        &[r"(bravia[\w ]+)( bui|\))"],
        &[Cap(Model), Lit(Vendor, "Sony"), Lit(Type, SMARTTV)],
    ),
    // Xiaomi
    rg(
        &[r"(mi(tv|box)-?\w+) bui"],
        &[Cap(Model), Lit(Vendor, "Xiaomi"), Lit(Type, SMARTTV)],
    ),
    // TechniSAT
    rg(
        &[r"Hbbtv.*(technisat) (.*);"],
        &[Cap(Vendor), Cap(Model), Lit(Type, SMARTTV)],
    ),
    // Roku and generic HbbTV devices
    rg(
        &[
            r"\b(roku)[\dx]*[\)/]((?:dvp-)?[\d\.]*)",
            r"hbbtv/\d+\.\d+\.\d+ +\([\w\+ ]*; *([\w\d][^;]*);([^;]*)",
        ],
        &[Fun(Vendor, Transform::Trim), Fun(Model, Transform::Trim), Lit(Type, SMARTTV)],
    ),
    // Smart TVs from unidentified vendors
    rg(
        &[r"droid.+; ([\w -]+) (?:android tv|smart[- ]?tv)"],
        &[Cap(Model), Lit(Type, SMARTTV)],
    ),
    rg(&[r"\b(android tv|smart[- ]?tv|opera tv|tv; rv:)\b"], &[Lit(Type, SMARTTV)]),
    // -- Consoles --
    rg(
        &[r"(ouya)", r"(nintendo) (\w+)"],
        &[Cap(Vendor), Cap(Model), Lit(Type, CONSOLE)],
    ),
    rg(
        &[r"droid.+; (shield)( bui|\))"],
        &[Cap(Model), Lit(Vendor, "Nvidia"), Lit(Type, CONSOLE)],
    ),
    rg(
        &[r"(playstation \w+)"],
        &[Cap(Model), Lit(Vendor, "Sony"), Lit(Type, CONSOLE)],
    ),
    rg(
        &[r"\b(xbox(?: one)?(?!; xbox))[\); ]"],
        &[Cap(Model), Lit(Vendor, "Microsoft"), Lit(Type, CONSOLE)],
    ),
    // -- Wearables --
    // Samsung Galaxy Watch
    rg(
        &[r"\b(sm-[lr]\d\d[0156][fnuw]?s?|gear live)\b"],
        &[Cap(Model), Lit(Vendor, "Samsung"), Lit(Type, WEARABLE)],
    ),
    // Pebble, and vendor-first watches
    rg(
        &[
            r"((pebble))app",
            r"(asus|google|lg|oppo) ((pixel |zen)?watch[\w ]*)( bui|\))",
        ],
        &[Cap(Vendor), Cap(Model), Lit(Type, WEARABLE)],
    ),
    // Oppo Watch
    rg(
        &[r"(ow(?:19|20)?we?[1-3]{1,3})"],
        &[Cap(Model), Lit(Vendor, "OPPO"), Lit(Type, WEARABLE)],
    ),
    // Apple Watch
    rg(
        &[r"(watch)(?: ?os[,/]|\d,\d/)[\d\.]+"],
        &[Cap(Model), Lit(Vendor, "Apple"), Lit(Type, WEARABLE)],
    ),
    // OnePlus Watch
    rg(
        &[r"(opwwe\d{3})"],
        &[Cap(Model), Lit(Vendor, "OnePlus"), Lit(Type, WEARABLE)],
    ),
    // Motorola 360
    rg(&[r"(moto 360)"], &[Cap(Model), Lit(Vendor, "Motorola"), Lit(Type, WEARABLE)]),
    // Sony SmartWatch
    rg(&[r"(smartwatch 3)"], &[Cap(Model), Lit(Vendor, "Sony"), Lit(Type, WEARABLE)]),
    // LG G Watch R
    rg(&[r"(g watch r)"], &[Cap(Model), Lit(Vendor, "LG"), Lit(Type, WEARABLE)]),
    rg(
        &[r"droid.+; (wt63?0{2,3})\)"],
        &[Cap(Model), Lit(Vendor, "Zebra"), Lit(Type, WEARABLE)],
    ),
    // -- XR --
    // Google Glass
    rg(
        &[r"droid.+; (glass) \d"],
        &[Cap(Model), Lit(Vendor, "Google"), Lit(Type, XR)],
    ),
    // Pico
    rg(&[r"(pico) (4|neo3(?: link|pro)?)"], &[Cap(Vendor), Cap(Model), Lit(Type, XR)]),
    // Meta Quest
    rg(
        &[r"(quest( \d| pro)?s?).+vr"],
        &[Cap(Model), Lit(Vendor, "Facebook"), Lit(Type, XR)],
    ),
    // -- Embedded --
    // Tesla
    rg(&[r"(tesla)(?: qtcarbrowser|/[-\w\.]+)"], &[Cap(Vendor), Lit(Type, EMBEDDED)]),
    // Echo Dot
    rg(&[r"(aeobc)\b"], &[Cap(Model), Lit(Vendor, "Amazon"), Lit(Type, EMBEDDED)]),
    // Apple HomePod
    rg(
        &[r"(homepod).+mac os"],
        &[Cap(Model), Lit(Vendor, "Apple"), Lit(Type, EMBEDDED)],
    ),
    rg(&[r"windows iot"], &[Lit(Type, EMBEDDED)]),
    // -- Generic --
    rg(
        &[r"droid .+?; ([^;]+?)(?: bui|; wv\)|\) applew).+?(mobile|vr|\d) safari"],
        &[Cap(Model), Fun(Type, Transform::Map(&GENERIC_DROID_TYPE))],
    ),
    // Unidentifiable tablet
    rg(&[r"\b((tablet|tab)[;/]|focus/\d(?!.+mobile))"], &[Lit(Type, TABLET)]),
    // Unidentifiable mobile
    rg(
        &[r"(phone|mobile(?:[;/]| [ \w/\.]*safari)|pda(?=.+windows ce))"],
        &[Lit(Type, MOBILE)],
    ),
    // Generic Android device
    rg(&[r"droid .+?; ([\w\. -]+)( bui|\))"], &[Cap(Model), Lit(Vendor, "Generic")]),
];
