//! Fixed catalog of recurring annual holidays.

use serde::Serialize;

/// A holiday that falls on the same month/day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub key: &'static str,
    pub label: &'static str,
    pub month: u32,
    pub day: u32,
}

/// Every holiday the generator knows about, in display order.
pub const HOLIDAYS: &[Holiday] = &[
    Holiday {
        key: "valentine",
        label: "발렌타인데이",
        month: 2,
        day: 14,
    },
    Holiday {
        key: "white",
        label: "화이트데이",
        month: 3,
        day: 14,
    },
    Holiday {
        key: "pepero",
        label: "빼빼로데이",
        month: 11,
        day: 11,
    },
    Holiday {
        key: "christmas",
        label: "크리스마스",
        month: 12,
        day: 25,
    },
];

impl Holiday {
    /// Look up a catalog entry by key.
    pub fn lookup(key: &str) -> Option<&'static Holiday> {
        HOLIDAYS.iter().find(|h| h.key == key)
    }

    /// All catalog keys, in display order.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        HOLIDAYS.iter().map(|h| h.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown_keys() {
        let christmas = Holiday::lookup("christmas").unwrap();
        assert_eq!((christmas.month, christmas.day), (12, 25));
        assert_eq!(christmas.label, "크리스마스");

        assert!(Holiday::lookup("halloween").is_none());
        assert!(Holiday::lookup("").is_none());
    }

    #[test]
    fn catalog_keys_are_unique() {
        let mut keys: Vec<_> = Holiday::keys().collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
