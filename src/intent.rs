//! Intent Classification
//!
//! Turns a transcribed utterance into a tagged intent before any state
//! logic runs. Matching is lower-cased substring search plus a tolerant
//! per-word fuzzy match for the reservation keyword, so the policy can be
//! swapped for a trained classifier without touching the state machine.

use strsim::normalized_levenshtein;

/// The reservation keyword wins over everything else, wherever it appears
const RESERVE_KEYWORDS: &[&str] = &["reservar", "reserva"];

const MENU_KEYWORDS: &[&str] = &["menu", "cardápio", "cardapio", "ementa"];

const WINE_KEYWORDS: &[&str] = &["vinho", "vinhos"];

const DESSERT_KEYWORDS: &[&str] = &["sobremesa", "sobremesas", "doce", "doces"];

const GOODBYE_KEYWORDS: &[&str] = &["adeus", "até logo", "ate logo", "até à próxima", "desligar"];

/// Transcriptions that are background noise, not speech
const NOISE_PATTERNS: &[&str] = &[".", "...", "hmm", "ah", "uh", "um", "eh", "oh"];

/// Cutoff for fuzzy-matching a word against "reservar"
const FUZZY_CUTOFF: f64 = 0.85;

/// Intent extracted from an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Read the menu
    ShowMenu,
    /// Read the wine list
    WineList,
    /// Read the desserts
    DessertList,
    /// Start a table reservation
    Reserve,
    /// End the conversation
    Goodbye,
    /// Nothing matched
    Unknown,
}

/// Pluggable classification policy
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Intent;
}

/// Keyword classifier used in production
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn matches_reserve(text: &str) -> bool {
        if RESERVE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            return true;
        }

        // Tolerate mis-transcriptions like "rezervar"
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .any(|w| !w.is_empty() && normalized_levenshtein(w, "reservar") >= FUZZY_CUTOFF)
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Intent {
        let text = text.to_lowercase();

        if Self::matches_reserve(&text) {
            return Intent::Reserve;
        }
        if GOODBYE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            return Intent::Goodbye;
        }
        if DESSERT_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            return Intent::DessertList;
        }
        if WINE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            return Intent::WineList;
        }
        if MENU_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            return Intent::ShowMenu;
        }

        Intent::Unknown
    }
}

/// Check whether a transcription is background noise rather than speech.
/// Noise is dropped before classification and produces no response.
pub fn is_noise(text: &str) -> bool {
    let cleaned = text.trim();
    if cleaned.chars().count() < 2 {
        return true;
    }
    NOISE_PATTERNS.contains(&cleaned.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_anywhere_in_utterance() {
        let classifier = KeywordClassifier::new();
        assert_eq!(
            classifier.classify("eu quero reservar uma mesa"),
            Intent::Reserve
        );
        assert_eq!(classifier.classify("RESERVAR"), Intent::Reserve);
        assert_eq!(classifier.classify("uma reserva para dois"), Intent::Reserve);
    }

    #[test]
    fn test_reserve_fuzzy_match() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("queria rezervar"), Intent::Reserve);
    }

    #[test]
    fn test_menu_keywords() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("pode ler o menu?"), Intent::ShowMenu);
        assert_eq!(classifier.classify("qual é a ementa"), Intent::ShowMenu);
    }

    #[test]
    fn test_wine_and_dessert() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("que vinhos têm?"), Intent::WineList);
        assert_eq!(classifier.classify("há sobremesas?"), Intent::DessertList);
        // Dessert wins when both appear
        assert_eq!(
            classifier.classify("menu de sobremesas"),
            Intent::DessertList
        );
    }

    #[test]
    fn test_goodbye() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("adeus"), Intent::Goodbye);
        assert_eq!(classifier.classify("obrigado, até logo"), Intent::Goodbye);
    }

    #[test]
    fn test_unknown() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("está a chover"), Intent::Unknown);
    }

    #[test]
    fn test_noise_detection() {
        assert!(is_noise(""));
        assert!(is_noise("  "));
        assert!(is_noise("..."));
        assert!(is_noise("hmm"));
        assert!(is_noise("é"));
        assert!(!is_noise("olá"));
        assert!(!is_noise("quero reservar"));
    }
}
