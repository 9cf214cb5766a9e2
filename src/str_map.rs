use std::borrow::Cow;

/// Sentinel key meaning "recognized but unknown"; a hit on it yields `None`.
pub(crate) const UNKNOWN: &str = "?";
/// Wildcard key consulted when no other entry matches.
pub(crate) const WILDCARD: &str = "*";

/// One entry value in a [`StrMap`].
///
/// Scalars and list members alike are tested as case-insensitive substrings
/// of the input. `None` is only meaningful as a wildcard value ("fall back
/// to nothing").
#[derive(Debug, Clone, Copy)]
pub enum MapVal {
    One(&'static str),
    Many(&'static [&'static str]),
    None,
}

/// Ordered string-to-label lookup table with alias lists and a wildcard
/// default. Entries are tried in declaration order; the first hit wins.
#[derive(Debug)]
pub struct StrMap {
    pub entries: &'static [(&'static str, MapVal)],
}

impl StrMap {
    /// Classify `input` against the table.
    ///
    /// Returns the matching entry's key, or the wildcard value when nothing
    /// matches, or the input itself when the table has no wildcard. A hit on
    /// the `"?"` key yields `None` rather than the sentinel string.
    pub fn lookup<'a>(&self, input: &'a str) -> Option<Cow<'a, str>> {
        let lowered = input.to_lowercase();
        for (key, val) in self.entries {
            if *key == WILDCARD {
                continue;
            }
            let hit = match val {
                MapVal::One(s) => lowered.contains(&s.to_lowercase()),
                MapVal::Many(list) => list.iter().any(|m| lowered.contains(&m.to_lowercase())),
                MapVal::None => false,
            };
            if hit {
                return if *key == UNKNOWN {
                    None
                } else {
                    Some(Cow::Borrowed(*key))
                };
            }
        }
        match self.entries.iter().find(|(k, _)| *k == WILDCARD) {
            Some((_, MapVal::One(s))) => Some(Cow::Borrowed(*s)),
            Some((_, MapVal::Many(list))) => list.first().map(|s| Cow::Borrowed(*s)),
            Some((_, MapVal::None)) => None,
            None => Some(Cow::Borrowed(input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLORS: StrMap = StrMap {
        entries: &[
            ("warm", MapVal::Many(&["red", "orange"])),
            ("cool", MapVal::One("blu")),
            ("?", MapVal::Many(&["mystery"])),
            ("*", MapVal::One("other")),
        ],
    };

    static NO_WILDCARD: StrMap = StrMap {
        entries: &[("warm", MapVal::Many(&["red"]))],
    };

    #[test]
    fn list_members_are_substring_tests() {
        assert_eq!(COLORS.lookup("Red").as_deref(), Some("warm"));
        assert_eq!(COLORS.lookup("reddish").as_deref(), Some("warm"));
        assert_eq!(COLORS.lookup("pink").as_deref(), Some("other"));
    }

    #[test]
    fn scalar_is_substring_test() {
        assert_eq!(COLORS.lookup("light blue").as_deref(), Some("cool"));
    }

    #[test]
    fn unknown_sentinel_yields_none() {
        assert_eq!(COLORS.lookup("Mystery"), None);
    }

    #[test]
    fn missing_wildcard_returns_input() {
        assert_eq!(NO_WILDCARD.lookup("green").as_deref(), Some("green"));
    }

    #[test]
    fn lookup_is_idempotent() {
        assert_eq!(COLORS.lookup("orange"), COLORS.lookup("orange"));
    }
}
