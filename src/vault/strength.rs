//! Rough password strength hint shown when adding an entry.
//!
//! Purely informational: weak passwords are still accepted.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => f.write_str("Weak"),
            Strength::Medium => f.write_str("Medium"),
            Strength::Strong => f.write_str("Strong"),
        }
    }
}

/// Character-class checks, one point each.
fn patterns() -> &'static [Regex; 4] {
    static PATTERNS: OnceLock<[Regex; 4]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"[a-z]").expect("valid regex"),
            Regex::new(r"[A-Z]").expect("valid regex"),
            Regex::new(r"\d").expect("valid regex"),
            Regex::new(r"[^a-zA-Z0-9]").expect("valid regex"),
        ]
    })
}

/// Score a password out of 6: two length thresholds plus four
/// character classes.
pub fn score(password: &str) -> u8 {
    let len = password.chars().count();
    let mut score = u8::from(len >= 8) + u8::from(len >= 12);
    for re in patterns() {
        score += u8::from(re.is_match(password));
    }
    score
}

/// Classify a password, or `None` for an empty one.
pub fn assess(password: &str) -> Option<Strength> {
    if password.is_empty() {
        return None;
    }
    Some(match score(password) {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        _ => Strength::Strong,
    })
}
