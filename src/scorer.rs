//  ____  ____     __        __ __        ___                  _
// |  _ \|  _ \ __ \ \      / /__\ \      / (_)______ _ _ __ __| |
// | |_) | |_) / _` \ \ /\ / / _ \\ \ /\ / /| |_  / _` | '__/ _` |
// |  _ <|  __/ (_| |\ V  V / (_) |\ V  V / | |/ / (_| | | | (_| |
// |_| \_\_|   \__,_| \_/\_/ \___/  \_/\_/  |_/___\__,_|_|  \__,_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-25
// Version : 0.1.0
// License : Mulan PSL v2
//
// Strength scorer

use serde::Serialize;

/// Display bucket derived from the numeric score, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => StrengthTier::VeryStrong,
            60..=79 => StrengthTier::Strong,
            40..=59 => StrengthTier::Medium,
            _ => StrengthTier::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very strong",
        }
    }

    /// Segments lit in the four-segment strength bar.
    pub fn filled_segments(&self) -> usize {
        match self {
            StrengthTier::Weak => 1,
            StrengthTier::Medium => 2,
            StrengthTier::Strong => 3,
            StrengthTier::VeryStrong => 4,
        }
    }
}

/// Additive strength heuristic in 0..=100. Each condition contributes
/// independently; the sum is capped at 100. Accepts any text, including
/// the empty string (score 0).
pub fn score(password: &str) -> u8 {
    let mut score = 0u32;

    let length = password.chars().count();
    if length >= 8 {
        score += 20;
    }
    if length >= 12 {
        score += 10;
    }
    if length >= 16 {
        score += 10;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    // anything outside [A-Za-z0-9] counts as the symbol class
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 15;
    }

    score.min(100) as u8
}

pub fn tier(password: &str) -> StrengthTier {
    StrengthTier::from_score(score(password))
}
