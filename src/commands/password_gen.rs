use crate::commands::testpass;
use crate::randgen;

pub fn generate_random() -> Result<(), String> {
    let password = randgen::generate();
    println!("Generated random password: {}", password);
    testpass::show_strength(&password);
    Ok(())
}
