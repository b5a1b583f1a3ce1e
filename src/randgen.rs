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
// Random password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const PASSWORD_LENGTH: usize = 16;

/// Generates a 16-character password containing at least one lowercase
/// letter, one uppercase letter, one digit and one special character.
pub fn generate() -> String {
    let required_sets: [Vec<char>; 4] = [
        LOWERCASE.chars().collect(),
        UPPERCASE.chars().collect(),
        NUMBERS.chars().collect(),
        SPECIAL.chars().collect(),
    ];
    let all_chars: Vec<char> = required_sets.iter().flatten().copied().collect();

    let mut rng = OsRng;
    let mut password_chars = Vec::with_capacity(PASSWORD_LENGTH);

    // One character from each set guarantees class coverage
    for chars in &required_sets {
        password_chars.push(*chars.choose(&mut rng).unwrap());
    }

    // Fill the rest from the combined pool
    for _ in 0..(PASSWORD_LENGTH - required_sets.len()) {
        password_chars.push(*all_chars.choose(&mut rng).unwrap());
    }

    // Shuffle so the guaranteed characters are not pinned to the front
    password_chars.shuffle(&mut rng);

    password_chars.into_iter().collect()
}
