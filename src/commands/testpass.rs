use crate::scorer::{self, StrengthTier};

pub fn test_password(password: &str) -> Result<(), String> {
    show_strength(password);
    Ok(())
}

/// Prints the score, tier label and a four-segment bar.
pub fn show_strength(password: &str) {
    let score = scorer::score(password);
    let tier = StrengthTier::from_score(score);
    let filled = tier.filled_segments();
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(4 - filled));
    println!("Strength: {}/100 ({}) [{}]", score, tier.label(), bar);
}
