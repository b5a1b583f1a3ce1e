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
// A question-driven password wizard written in Rust.

use clap::Parser;
use rpawowizard::builder::Strategy;
use rpawowizard::commands;

#[derive(Debug, Parser)]
#[command(name = "rpawowizard")]
#[command(about = "Turn a few personal memories into a password", long_about = None)]
enum Cli {
    /// Run the interactive password wizard
    Wizard,

    /// Build a password from answers given on the command line
    Build(BuildArgs),

    /// Generate a random 16-character password
    Gen,

    /// Score a password and show its strength tier
    Score(ScoreArgs),
}

#[derive(Debug, Parser)]
struct BuildArgs {
    /// Password-construction strategy
    #[arg(short, long, value_enum)]
    strategy: Strategy,

    /// Answers, in question order for the chosen strategy
    answers: Vec<String>,

    /// Print the result as JSON (password, score, tier)
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Parser)]
struct ScoreArgs {
    /// Password to score
    password: String,
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    match cli {
        Cli::Wizard => commands::wizard::run(),
        Cli::Build(args) => {
            commands::buildpass::build_password(args.strategy, args.answers, args.json)
        }
        Cli::Gen => commands::password_gen::generate_random(),
        Cli::Score(args) => commands::testpass::test_password(&args.password),
    }
}
