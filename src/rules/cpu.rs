use super::rg;
use crate::matcher::Field::Architecture;
use crate::matcher::FieldSpec::{Fun, Lit, SubFun};
use crate::matcher::{RuleGroup, Transform};

pub(crate) static CPU: &[RuleGroup] = &[
    // AMD64 (x64)
    rg(&[r"\b((amd|x|x86[-_]?|wow|win)64)\b"], &[Lit(Architecture, "amd64")]),
    // IA32 (quicktime and x86)
    rg(
        &[r"(ia32(?=;))", r"\b((i[346]|x)86)(pc)?\b"],
        &[Lit(Architecture, "ia32")],
    ),
    // ARM64
    rg(&[r"\b(aarch64|arm(v?[89]e?l?|_?64))\b"], &[Lit(Architecture, "arm64")]),
    // ARMHF
    rg(&[r"\b(arm(v[67])?ht?n?[fl]p?)\b"], &[Lit(Architecture, "armhf")]),
    // PocketPC mistakenly identified as PowerPC
    rg(&[r"( (ce|mobile); ppc;|/[\w\.]+arm\b)"], &[Lit(Architecture, "arm")]),
    // PowerPC
    rg(
        &[r"((ppc|powerpc)(64)?)( mac|;|\))"],
        &[SubFun(Architecture, "ower", "", Transform::Lower)],
    ),
    // SPARC
    rg(&[r" sun4\w[;\)]"], &[Lit(Architecture, "sparc")]),
    // IA64, 68K, ARM/64, AVR/32, IRIX/64, MIPS/64, SPARC/64, PA-RISC
    rg(
        &[r"\b(avr32|ia64(?=;)|68k(?=\))|\barm(?=v([1-7]|[5-7]1)l?|;|eabi)|(irix|mips|sparc)(64)?\b|pa-risc)"],
        &[Fun(Architecture, Transform::Lower)],
    ),
];
