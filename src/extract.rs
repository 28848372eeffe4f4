//! Reservation Field Extraction
//!
//! Best-effort parsing of dates, times and party sizes out of free-form
//! Portuguese speech. There is no validated grammar: anything that does
//! not match returns `None` and the caller re-asks the same question.

use lazy_static::lazy_static;
use regex::Regex;

/// Weekday forms, long forms first so "sexta-feira" wins over "sexta"
const WEEKDAYS: &[&str] = &[
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "sabado",
    "domingo",
    "segunda",
    "terça",
    "terca",
    "quarta",
    "quinta",
    "sexta",
];

/// Relative day expressions, longest first
const RELATIVE_DAYS: &[&str] = &[
    "depois de amanhã",
    "depois de amanha",
    "amanhã",
    "amanha",
    "hoje",
];

/// Portuguese number words accepted as a party size
const NUMBER_WORDS: &[(&str, u32)] = &[
    ("uma", 1),
    ("um", 1),
    ("duas", 2),
    ("dois", 2),
    ("três", 3),
    ("tres", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
    ("dez", 10),
    ("onze", 11),
    ("doze", 12),
    ("quinze", 15),
    ("vinte", 20),
];

/// Largest party size accepted from a bare number
const MAX_PARTY_SIZE: u32 = 50;

lazy_static! {
    static ref DATE_DIA_RE: Regex =
        Regex::new(r"\bdia\s+\d{1,2}(?:\s+de\s+\p{L}+)?").unwrap();
    static ref DATE_SLASH_RE: Regex = Regex::new(r"\b\d{1,2}\s*/\s*\d{1,2}\b").unwrap();
    static ref TIME_HM_RE: Regex = Regex::new(r"\b(\d{1,2})\s*[h:]\s*(\d{2})\b").unwrap();
    static ref TIME_H_RE: Regex = Regex::new(r"\b(\d{1,2})\s*h\b").unwrap();
    static ref TIME_HORAS_RE: Regex = Regex::new(r"\b(\d{1,2})\s*horas?\b").unwrap();
    static ref TIME_AT_RE: Regex = Regex::new(r"(?:às|as|para as|pelas)\s+(\d{1,2})\b").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"\b(\d{1,2})\b").unwrap();
}

/// Extract a date-like expression, returning the matched text.
pub fn date(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    for day in RELATIVE_DAYS.iter().chain(WEEKDAYS.iter()) {
        if lower.contains(day) {
            return Some((*day).to_string());
        }
    }

    if let Some(m) = DATE_DIA_RE.find(&lower) {
        return Some(m.as_str().to_string());
    }
    if let Some(m) = DATE_SLASH_RE.find(&lower) {
        return Some(m.as_str().to_string());
    }

    None
}

/// Extract a time of day, normalized to "20h" / "20h30" form.
pub fn time(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    if let Some(caps) = TIME_HM_RE.captures(&lower) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        if hour <= 23 && minute <= 59 {
            return Some(format!("{}h{:02}", hour, minute));
        }
        return None;
    }

    for re in [&*TIME_H_RE, &*TIME_HORAS_RE, &*TIME_AT_RE] {
        if let Some(caps) = re.captures(&lower) {
            let hour: u32 = caps[1].parse().ok()?;
            if hour <= 23 {
                return Some(format!("{}h", hour));
            }
            return None;
        }
    }

    // Bare number as an answer to "para que horas?"
    if let Some(caps) = NUMBER_RE.captures(&lower) {
        let hour: u32 = caps[1].parse().ok()?;
        if hour <= 23 {
            return Some(format!("{}h", hour));
        }
    }

    None
}

/// Extract a positive party size from digits or number words.
pub fn party_size(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();

    if let Some(caps) = NUMBER_RE.captures(&lower) {
        if let Ok(n) = caps[1].parse::<u32>() {
            if (1..=MAX_PARTY_SIZE).contains(&n) {
                return Some(n);
            }
        }
        return None;
    }

    // Number words. A word followed by "pessoas"/"lugares" wins outright;
    // otherwise the last number word is kept, so the article in "uma mesa
    // para duas" does not shadow the actual count.
    let words: Vec<&str> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();
    let mut best = None;
    for (i, word) in words.iter().enumerate() {
        for (name, value) in NUMBER_WORDS {
            if word == name {
                let qualified = words
                    .get(i + 1)
                    .map(|next| next.starts_with("pessoa") || next.starts_with("lugar"))
                    .unwrap_or(false);
                if qualified {
                    return Some(*value);
                }
                best = Some(*value);
            }
        }
    }

    best
}
