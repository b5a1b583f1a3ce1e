use std::fs;
use std::io::{self, Write};

use chrono::Local;

use crate::builder::Strategy;
use crate::commands::testpass;
use crate::setclip;
use crate::wizard::{Step, Wizard};

/// Drives one interactive wizard session end to end, including restarts.
pub fn run() -> Result<(), String> {
    let mut wizard = Wizard::new();

    println!("Welcome to rpawowizard!");
    println!("Answer a few questions and get a password you can actually remember.");

    loop {
        match wizard.step() {
            Step::Intro => wizard.begin()?,
            Step::Selection => select_strategy(&mut wizard)?,
            Step::Questions => ask_questions(&mut wizard)?,
            Step::Random => {
                let password = wizard.generate_random()?;
                println!("\nGenerated random password: {}", password);
            }
            Step::Result => {
                if !result_menu(&mut wizard)? {
                    return Ok(());
                }
            }
        }
    }
}

fn select_strategy(wizard: &mut Wizard) -> Result<(), String> {
    println!("\nChoose your password strength:");
    println!("1. Simple      - short and easy to remember");
    println!("2. Moderate    - a name and a number with a yearly twist");
    println!("3. Robust      - a longer mixed-case pattern");
    println!("4. Randomized  - 16 random characters, all four classes");

    let choice = prompt("Enter choice [1-4]: ")?;
    let strategy = match choice.trim() {
        "1" => Strategy::Simple,
        "2" => Strategy::Moderate,
        "3" => Strategy::Robust,
        "4" => Strategy::Randomized,
        other => {
            println!("Unrecognized choice '{}'", other);
            return Ok(());
        }
    };
    wizard.select_strategy(strategy)?;
    Ok(())
}

fn ask_questions(wizard: &mut Wizard) -> Result<(), String> {
    while let Some(question) = wizard.current_question() {
        println!("\n{} ({})", question.label, question.placeholder);
        let answer = prompt("> ")?;
        if let Err(reason) = wizard.submit_answer(&answer) {
            println!("{}", reason);
        }
    }
    Ok(())
}

// Returns false once the user is done with the session.
fn result_menu(wizard: &mut Wizard) -> Result<bool, String> {
    println!("\nYour password: {}", wizard.password());
    testpass::show_strength(wizard.password());

    loop {
        let action = prompt("\n[c]opy  [s]ave to file  [r]estart  [q]uit: ")?;
        match action.trim().to_lowercase().as_str() {
            "c" => match setclip::copy_to_clipboard(wizard.password()) {
                Ok(()) => println!("Password copied to clipboard"),
                Err(e) => println!("{}", e),
            },
            "s" => match save_to_file(wizard.password()) {
                Ok(path) => println!("Password saved to {}", path),
                Err(e) => println!("{}", e),
            },
            "r" => {
                wizard.restart()?;
                return Ok(true);
            }
            "q" => return Ok(false),
            other => println!("Unrecognized action '{}'", other),
        }
    }
}

fn save_to_file(password: &str) -> Result<String, String> {
    let filename = format!("password-{}.txt", Local::now().format("%Y%m%d-%H%M%S"));
    fs::write(&filename, format!("{}\n", password))
        .map_err(|e| format!("Failed to save password file: {}", e))?;
    Ok(filename)
}

fn prompt(message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;
    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
        return Err("Input stream closed".to_string());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
