//! Advisory password strength heuristic.
//!
//! This is not an entropy estimate.  It rewards length and the presence
//! of each of four character classes, and exists to give a quick
//! weak/medium/strong hint next to a password:
//!
//! ```text
//! length_score  = chars / 8
//! variety_score = (classes present) / 4
//! score         = length_score + variety_score
//! score > 1.5 → strong, score > 1.0 → medium, otherwise weak
//! ```

use std::fmt;

/// Symbols recognised when scoring.  Wider than the generator's set.
pub const STRENGTH_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};:'\",<>./?";

const STRONG_THRESHOLD: f64 = 1.5;
const MEDIUM_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        })
    }
}

/// Result of `evaluate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength {
    pub label: StrengthLabel,
    pub score: f64,
}

/// Score `password` and classify it.
pub fn evaluate(password: &str) -> Strength {
    let length_score = password.chars().count() as f64 / 8.0;

    let classes = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| STRENGTH_SYMBOLS.contains(c)),
    ];
    let variety_score = classes.iter().filter(|&&present| present).count() as f64 / 4.0;

    let score = length_score + variety_score;
    let label = if score > STRONG_THRESHOLD {
        StrengthLabel::Strong
    } else if score > MEDIUM_THRESHOLD {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Weak
    };

    Strength { label, score }
}
