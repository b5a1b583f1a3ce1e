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
// Password builder

use chrono::{Datelike, Local};
use clap::ValueEnum;
use unicode_segmentation::UnicodeSegmentation;

use crate::randgen;

/// Password-construction mode selected once per wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Simple,
    Moderate,
    Robust,
    Randomized,
}

/// Builds a password from the ordered answers for the chosen strategy.
///
/// An empty result means the answers were insufficient for the strategy;
/// callers must check for it, no error is raised.
pub fn build(strategy: Strategy, answers: &[String]) -> String {
    build_with_year(strategy, answers, Local::now().year())
}

/// Same as [`build`] but with the calendar year supplied by the caller, so
/// the `Moderate` suffix can be pinned in tests.
pub fn build_with_year(strategy: Strategy, answers: &[String], year: i32) -> String {
    match strategy {
        Strategy::Simple => build_simple(answers),
        Strategy::Moderate => build_moderate(answers, year),
        Strategy::Robust => build_robust(answers),
        Strategy::Randomized => randgen::generate(),
    }
}

// first 2 of the birth date + last 4 of the phone + first 4 of the memory
fn build_simple(answers: &[String]) -> String {
    if answers.len() < 3 {
        return String::new();
    }
    let birth = first_graphemes(&answers[0], 2);
    let phone = last_graphemes(&answers[1], 4);
    let memory = first_graphemes(&answers[2], 4);
    format!("{birth}{phone}{memory}")
}

// name + number + '@' + last two digits of the current year
fn build_moderate(answers: &[String], year: i32) -> String {
    if answers.len() < 2 {
        return String::new();
    }
    format!("{}{}@{:02}", answers[0], answers[1], year.rem_euclid(100))
}

// Fixed template over six answers; '@2024' is a literal, not the clock.
// Case folding covers the whole answer and is ASCII-only.
fn build_robust(answers: &[String]) -> String {
    let [eng_name, special_num, initials, char1, digits, char2, ..] = answers else {
        return String::new();
    };
    format!(
        "{eng_name}.{special_num}{initials}*#{}{}{digits}{}{}@2024",
        char1.to_ascii_uppercase(),
        char1.to_ascii_lowercase(),
        char2.to_ascii_uppercase(),
        char2.to_ascii_lowercase(),
    )
}

// Slices count user-perceived characters, so answers in any script cut
// cleanly. Short answers yield what they have, never padded.
fn first_graphemes(text: &str, count: usize) -> String {
    text.graphemes(true).take(count).collect()
}

fn last_graphemes(text: &str, count: usize) -> String {
    let clusters: Vec<&str> = text.graphemes(true).collect();
    let start = clusters.len().saturating_sub(count);
    clusters[start..].concat()
}
