use std::fmt;

/// Lookup identity of a user-facing country selection.
///
/// Always trimmed and lowercased. Two selections are equivalent iff their keys
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trim surrounding whitespace and lowercase. Total and idempotent.
pub fn normalize(selection: impl AsRef<str>) -> CanonicalKey {
    CanonicalKey(selection.as_ref().trim().to_lowercase())
}

/// Absent selections normalize to the empty key.
pub fn normalize_optional(selection: Option<&str>) -> CanonicalKey {
    normalize(selection.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Countries offered by the dashboard; `value` is already canonical.
pub const COUNTRY_OPTIONS: &[CountryOption] = &[
    CountryOption {
        value: "spain",
        label: "Spain",
    },
    CountryOption {
        value: "united states",
        label: "United States",
    },
    CountryOption {
        value: "south korea",
        label: "South Korea",
    },
    CountryOption {
        value: "mexico",
        label: "Mexico",
    },
];

pub const DEFAULT_PRIMARY: &str = "spain";
pub const DEFAULT_COMPARISON: &str = "united states";

/// Display label for a raw selection: the matching option label, else the raw text.
pub fn label_for(selection: &str) -> String {
    let key = normalize(selection);
    COUNTRY_OPTIONS
        .iter()
        .find(|option| option.value == key.as_str())
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| selection.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  South Korea\t").as_str(), "south korea");
        assert_eq!(normalize("").as_str(), "");
        assert_eq!(normalize_optional(None).as_str(), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "Spain",
            "  UNITED States  ",
            "\n\tMéxico ",
            "ÆØÅ",
            "   ",
            "already canonical",
        ];
        for sample in samples {
            let once = normalize(sample);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "sample {sample:?}");
            assert_eq!(once.as_str(), once.as_str().trim());
            assert_eq!(once.as_str(), once.as_str().to_lowercase());
        }
    }

    #[test]
    fn option_values_are_canonical() {
        for option in COUNTRY_OPTIONS {
            assert_eq!(normalize(option.value).as_str(), option.value);
        }
    }

    #[test]
    fn label_falls_back_to_raw_selection() {
        assert_eq!(label_for(" SPAIN "), "Spain");
        assert_eq!(label_for("Atlantis"), "Atlantis");
    }
}
