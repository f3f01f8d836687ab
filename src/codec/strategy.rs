//! Strategy detection by keyword scoring.
//!
//! Each domain owns a signal list. A signal scores one point per
//! case-insensitive whole-word occurrence (plural `s`/`es` allowed). Text
//! dense in JSON punctuation earns the structural pseudo-domain a flat bonus.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::dictionary::Domain;
use super::matcher::{boundary_pattern, is_word_char};
use crate::error::ShrinkError;

/// Code signals (keywords keep their trailing space so prose "type" or
/// "class" mid-sentence still needs the following separator)
pub const CODE_SIGNALS: &[&str] = &[
    "function", "const ", "let ", "var ", "import ", "export ", "class ", "return ", "async ",
    "await ", "=>", "===", "!==", "console.log", "interface ", "type ", "enum ", "struct ",
    "def ", "self.", "public ", "private ", "protected ", "static ",
];

/// Clinical signals
pub const MEDICAL_SIGNALS: &[&str] = &[
    "patient", "diagnosis", "treatment", "symptoms", "clinical", "medical", "prescription",
    "dosage", "mg", "pathology", "chronic", "acute", "prognosis", "therapy",
];

/// Legal signals
pub const LEGAL_SIGNALS: &[&str] = &[
    "hereby", "whereas", "notwithstanding", "pursuant", "hereinafter", "plaintiff", "defendant",
    "jurisdiction", "statute", "liability", "indemnify", "arbitration", "covenant", "therein",
    "thereof",
];

/// Business signals
pub const BUSINESS_SIGNALS: &[&str] = &[
    "stakeholder", "deliverable", "quarterly", "revenue", "ROI", "KPI", "synergy", "leverage",
    "scalable", "pipeline", "roadmap", "sprint", "agile", "milestone",
];

/// Winning score below this falls back to generic abbreviation
pub const MIN_DOMAIN_SCORE: usize = 3;

/// Share of `{}[]":,` characters above which text counts as structured
pub const STRUCTURAL_RATIO: f64 = 0.10;

/// Flat score awarded to structured text
pub const STRUCTURAL_SCORE: usize = 50;

/// Confidence reported when no domain signal is strong enough
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

fn compile_signals(signals: &[&str]) -> Vec<Regex> {
    signals
        .iter()
        .filter_map(|signal| {
            let plural = if signal.chars().last().is_some_and(is_word_char) {
                "(?:s|es)?"
            } else {
                ""
            };
            Regex::new(&boundary_pattern(signal, plural, true)).ok()
        })
        .collect()
}

lazy_static! {
    static ref CODE_REGEX: Vec<Regex> = compile_signals(CODE_SIGNALS);
    static ref MEDICAL_REGEX: Vec<Regex> = compile_signals(MEDICAL_SIGNALS);
    static ref LEGAL_REGEX: Vec<Regex> = compile_signals(LEGAL_SIGNALS);
    static ref BUSINESS_REGEX: Vec<Regex> = compile_signals(BUSINESS_SIGNALS);
}

/// Compression strategy label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Nothing applied (early exit or below threshold)
    None,
    /// Generic abbreviation with the common dictionary
    #[default]
    Abbreviation,
    /// Domain overlay dictionary
    Domain,
    /// Structured data
    Structural,
}

impl Strategy {
    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::None => "none",
            Strategy::Abbreviation => "abbreviation",
            Strategy::Domain => "domain",
            Strategy::Structural => "structural",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ShrinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Strategy::None),
            "abbreviation" => Ok(Strategy::Abbreviation),
            "domain" => Ok(Strategy::Domain),
            "structural" => Ok(Strategy::Structural),
            other => Err(ShrinkError::InvalidStrategy(other.to_string())),
        }
    }
}

/// Outcome of strategy detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Strategy label
    pub strategy: Strategy,
    /// Winning domain
    pub domain: Domain,
    /// 0.0 - 1.0
    pub confidence: f64,
}

impl Detection {
    /// Generic fallback used when no signal is strong enough
    pub fn fallback() -> Self {
        Self {
            strategy: Strategy::Abbreviation,
            domain: Domain::Common,
            confidence: FALLBACK_CONFIDENCE,
        }
    }
}

fn score(text: &str, signals: &[Regex]) -> usize {
    signals.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Ratio of JSON-ish punctuation to total characters
fn structural_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let punct = text
        .chars()
        .filter(|c| matches!(c, '{' | '}' | '[' | ']' | '"' | ':' | ','))
        .count();
    punct as f64 / total as f64
}

/// Per-domain scores in tie-break order
pub fn domain_scores(text: &str) -> Vec<(Domain, usize)> {
    let mut scores = vec![
        (Domain::Code, score(text, &CODE_REGEX)),
        (Domain::Medical, score(text, &MEDICAL_REGEX)),
        (Domain::Legal, score(text, &LEGAL_REGEX)),
        (Domain::Business, score(text, &BUSINESS_REGEX)),
    ];
    if structural_ratio(text) > STRUCTURAL_RATIO {
        scores.push((Domain::Structural, STRUCTURAL_SCORE));
    }
    scores
}

/// Classify text into a domain.
///
/// # Example
/// ```
/// use tokenshrink::codec::{detect_strategy, Domain, Strategy};
///
/// let d = detect_strategy("The patient reports chronic symptoms; treatment and therapy follow.");
/// assert_eq!(d.domain, Domain::Medical);
/// assert_eq!(d.strategy, Strategy::Domain);
/// ```
pub fn detect_strategy(text: &str) -> Detection {
    let scores = domain_scores(text);

    // Strictly greater keeps the earliest domain on ties
    let (domain, top) = scores
        .iter()
        .copied()
        .fold((Domain::Code, 0), |best, cur| if cur.1 > best.1 { cur } else { best });

    if top < MIN_DOMAIN_SCORE {
        return Detection::fallback();
    }

    let strategy = if domain == Domain::Structural {
        Strategy::Structural
    } else {
        Strategy::Domain
    };

    Detection {
        strategy,
        domain,
        confidence: (top as f64 / 10.0).min(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_code() {
        let d = detect_strategy(
            "Write a function that handles API endpoints with middleware. Debug the controller and fix the repository pattern implementation. Use async await for database queries.",
        );
        assert_eq!(d.domain, Domain::Code);
        assert_eq!(d.strategy, Strategy::Domain);
        assert!((d.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_detect_medical() {
        let d = detect_strategy(
            "The patient presents with symptoms including elevated temperature. The diagnosis indicates the need for prescription medication. Schedule a laboratory examination and review the treatment plan.",
        );
        assert_eq!(d.domain, Domain::Medical);
    }

    #[test]
    fn test_detect_legal() {
        let d = detect_strategy(
            "The plaintiff filed a complaint in the jurisdiction of the court. The defendant contests the agreement pursuant to the subsection noted hereinafter. Notwithstanding the aforementioned terms, the contract is void.",
        );
        assert_eq!(d.domain, Domain::Legal);
    }

    #[test]
    fn test_detect_business_with_plurals() {
        let d = detect_strategy(
            "The stakeholder meeting reviewed the quarterly deliverables. The organization management department approved the infrastructure requirements.",
        );
        assert_eq!(d.domain, Domain::Business);
    }

    #[test]
    fn test_generic_text_falls_back() {
        let d = detect_strategy(
            "The weather today is sunny and warm. I went for a walk in the park and saw some birds.",
        );
        assert_eq!(d, Detection::fallback());
        assert_eq!(detect_strategy(""), Detection::fallback());
    }

    #[test]
    fn test_signals_need_word_boundaries() {
        // "mg" inside words and "patient" inside "impatient" do not count
        let text = "An impatient programmer's imgur image, an impatient amygdala, an impatient smug grin.";
        let scores = domain_scores(text);
        assert_eq!(scores[1], (Domain::Medical, 0));
    }

    #[test]
    fn test_structural_bonus() {
        let d = detect_strategy(r#"{"a":[1,2,3],"b":{"c":"d"},"e":[{"f":"g"}]}"#);
        assert_eq!(d.domain, Domain::Structural);
        assert_eq!(d.strategy, Strategy::Structural);
        assert!((d.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ties_prefer_earlier_domain() {
        // three code signals, three medical signals
        let d = detect_strategy("function function function patient patient patient");
        assert_eq!(d.domain, Domain::Code);
    }

    #[test]
    fn test_confidence_capped() {
        let text = "patient ".repeat(25);
        let d = detect_strategy(&text);
        assert!((d.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("Domain".parse::<Strategy>().unwrap(), Strategy::Domain);
        assert_eq!("structural".parse::<Strategy>().unwrap(), Strategy::Structural);
        assert!(matches!(
            "telepathy".parse::<Strategy>(),
            Err(ShrinkError::InvalidStrategy(_))
        ));
        assert_eq!(serde_json::to_string(&Strategy::None).unwrap(), "\"none\"");
    }
}
