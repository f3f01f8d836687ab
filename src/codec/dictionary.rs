//! Domain selection and merged substitution dictionaries.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::tables::{
    BUSINESS_DOMAIN, CODE_DOMAIN, COMMON_PHRASES, COMMON_WORDS, LEGAL_DOMAIN, MEDICAL_DOMAIN,
};
use crate::tokenizer::is_unprofitable;

/// Subject-matter classification selecting a dictionary overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Common word and phrase tables only
    #[default]
    Common,
    /// Source code and software engineering
    Code,
    /// Clinical text
    Medical,
    /// Contracts and court documents
    Legal,
    /// Corporate and project management
    Business,
    /// JSON/XML-like structured data (no overlay)
    Structural,
}

impl Domain {
    /// Resolve a domain name.
    ///
    /// Lenient: `"auto"`, empty and unknown names all map to [`Domain::Common`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "code" => Domain::Code,
            "medical" => Domain::Medical,
            "legal" => Domain::Legal,
            "business" => Domain::Business,
            "structural" => Domain::Structural,
            _ => Domain::Common,
        }
    }

    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Common => "common",
            Domain::Code => "code",
            Domain::Medical => "medical",
            Domain::Legal => "legal",
            Domain::Business => "business",
            Domain::Structural => "structural",
        }
    }

    /// Overlay table merged on top of the common tables
    fn overlay(&self) -> Option<&'static phf::Map<&'static str, &'static str>> {
        match self {
            Domain::Code => Some(&CODE_DOMAIN),
            Domain::Medical => Some(&MEDICAL_DOMAIN),
            Domain::Legal => Some(&LEGAL_DOMAIN),
            Domain::Business => Some(&BUSINESS_DOMAIN),
            Domain::Common | Domain::Structural => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merged `original -> replacement` table for one domain.
///
/// Entries flagged as token-neutral or token-negative are dropped at build
/// time even if they are still present in a source table.
#[derive(Debug, Clone)]
pub struct Dictionary {
    domain: Domain,
    entries: HashMap<&'static str, &'static str>,
}

impl Dictionary {
    /// Common tables plus the domain overlay (overlay wins key conflicts)
    pub fn for_domain(domain: Domain) -> Self {
        let mut entries = HashMap::new();
        let tables = [Some(&COMMON_WORDS), Some(&COMMON_PHRASES), domain.overlay()];
        for table in tables.into_iter().flatten() {
            for (original, replacement) in table.entries() {
                if is_unprofitable(original) {
                    continue;
                }
                entries.insert(*original, *replacement);
            }
        }
        Self { domain, entries }
    }

    /// Domain this dictionary was built for
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Replacement for an original, if present
    pub fn get(&self, original: &str) -> Option<&'static str> {
        self.entries.get(original.to_lowercase().as_str()).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Multi-word entries, longest key first
    pub fn phrases(&self) -> Vec<(&'static str, &'static str)> {
        self.sorted(|key| key.contains(' '))
    }

    /// Single-word entries, longest key first, identity mappings skipped
    pub fn words(&self) -> Vec<(&'static str, &'static str)> {
        self.sorted(|key| !key.contains(' '))
            .into_iter()
            .filter(|(original, replacement)| original != replacement)
            .collect()
    }

    /// Ordered copy of every entry
    pub fn to_map(&self) -> BTreeMap<&'static str, &'static str> {
        self.entries.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn sorted(&self, keep: impl Fn(&str) -> bool) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .filter(|(key, _)| keep(key))
            .map(|(k, v)| (*k, *v))
            .collect();
        // Longest match first; alphabetical among equal lengths keeps output stable
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Merged dictionary for a domain name.
///
/// Unknown names silently fall back to the common tables.
///
/// # Example
/// ```
/// use tokenshrink::codec::get_dictionary;
///
/// let medical = get_dictionary("medical");
/// assert_eq!(medical.get("diagnosis"), Some(&"dx"));
/// assert_eq!(get_dictionary("klingon"), get_dictionary("auto"));
/// ```
pub fn get_dictionary(domain: &str) -> BTreeMap<&'static str, &'static str> {
    Dictionary::for_domain(Domain::from_name(domain)).to_map()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_from_name_is_lenient() {
        assert_eq!(Domain::from_name("auto"), Domain::Common);
        assert_eq!(Domain::from_name(""), Domain::Common);
        assert_eq!(Domain::from_name("astrology"), Domain::Common);
        assert_eq!(Domain::from_name(" Medical "), Domain::Medical);
        assert_eq!(Domain::from_name("code"), Domain::Code);
    }

    #[test]
    fn test_common_dictionary_has_words_and_phrases() {
        let dict = Dictionary::for_domain(Domain::Common);
        assert_eq!(dict.get("consequently"), Some("so"));
        assert_eq!(dict.get("in order to"), Some("to"));
        assert_eq!(dict.get("diagnosis"), None);
    }

    #[test]
    fn test_overlay_is_merged() {
        let common = Dictionary::for_domain(Domain::Common);
        let legal = Dictionary::for_domain(Domain::Legal);
        assert_eq!(legal.get("plaintiff"), Some("pl"));
        assert_eq!(legal.get("pursuant to"), Some("under"));
        assert_eq!(legal.len(), common.len() + LEGAL_DOMAIN.len());
    }

    #[test]
    fn test_structural_uses_common_tables() {
        let structural = Dictionary::for_domain(Domain::Structural);
        assert_eq!(structural.to_map(), Dictionary::for_domain(Domain::Common).to_map());
    }

    #[test]
    fn test_phrases_longest_first() {
        let dict = Dictionary::for_domain(Domain::Common);
        let phrases = dict.phrases();
        assert!(phrases.iter().all(|(k, _)| k.contains(' ')));
        assert!(phrases.windows(2).all(|w| w[0].0.len() >= w[1].0.len()));

        let pos = |key: &str| phrases.iter().position(|(k, _)| *k == key).unwrap();
        assert!(pos("it is important to note that") < pos("it is important to"));
    }

    #[test]
    fn test_words_single_token_keys() {
        let dict = Dictionary::for_domain(Domain::Code);
        let words = dict.words();
        assert!(words.iter().all(|(k, v)| !k.contains(' ') && k != v));
        assert!(words.iter().any(|(k, _)| *k == "polymorphism"));
    }

    #[test]
    fn test_no_unprofitable_entries() {
        for domain in [Domain::Common, Domain::Code, Domain::Medical, Domain::Legal, Domain::Business] {
            for original in Dictionary::for_domain(domain).to_map().keys() {
                assert!(!is_unprofitable(original), "{original} should be filtered");
            }
        }
    }

    #[test]
    fn test_get_dictionary_unknown_falls_back() {
        assert_eq!(get_dictionary("nonsense"), get_dictionary("auto"));
        assert!(get_dictionary("business").contains_key("stakeholder"));
    }
}
