use super::rg;
use crate::matcher::Field::{Name, Version};
use crate::matcher::FieldSpec::{Cap, Lit};
use crate::matcher::RuleGroup;

pub(crate) static ENGINE: &[RuleGroup] = &[
    // EdgeHTML
    rg(&[r"windows.+ edge/([\w\.]+)"], &[Cap(Version), Lit(Name, "EdgeHTML")]),
    // ArkWeb
    rg(&[r"(arkweb)/([\w\.]+)"], &[Cap(Name), Cap(Version)]),
    // Blink
    rg(
        &[r"webkit/537\.36.+chrome/(?!27)([\w\.]+)"],
        &[Cap(Version), Lit(Name, "Blink")],
    ),
    rg(
        &[
            // Presto
            r"(presto)/([\w\.]+)",
            r"(webkit|trident|netfront|netsurf|amaya|lynx|w3m|goanna|servo)/([\w\.]+)",
            // Flow
            r"ekioh(flow)/([\w\.]+)",
            r"(khtml|tasman|links)[/ ]\(?([\w\.]+)",
            // iCab
            r"(icab)[/ ]([23]\.[\d\.]+)",
            r"\b(libweb)",
        ],
        &[Cap(Name), Cap(Version)],
    ),
    rg(&[r"ladybird/"], &[Lit(Name, "LibWeb")]),
    // Gecko
    rg(&[r"rv\:([\w\.]{1,9})\b.+(gecko)"], &[Cap(Version), Cap(Name)]),
];
