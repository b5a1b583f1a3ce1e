use serde::Serialize;

use crate::builder::{self, Strategy};
use crate::commands::testpass;
use crate::scorer::{self, StrengthTier};

#[derive(Debug, Serialize)]
struct PasswordReport<'a> {
    password: &'a str,
    score: u8,
    tier: StrengthTier,
}

pub fn build_password(strategy: Strategy, answers: Vec<String>, json: bool) -> Result<(), String> {
    let password = builder::build(strategy, &answers);
    // the builder signals insufficient input with an empty string
    if password.is_empty() {
        return Err(format!(
            "Insufficient answers for the {:?} strategy (got {})",
            strategy,
            answers.len()
        ));
    }

    if json {
        let score = scorer::score(&password);
        let report = PasswordReport {
            password: &password,
            score,
            tier: StrengthTier::from_score(score),
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to render JSON report: {}", e))?;
        println!("{}", rendered);
    } else {
        println!("Generated password: {}", password);
        testpass::show_strength(&password);
    }
    Ok(())
}
