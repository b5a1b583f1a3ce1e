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
// Wizard state machine

use crate::builder::{self, Strategy};
use crate::questions::{self, Question};
use crate::randgen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Selection,
    Questions,
    Random,
    Result,
}

/// One interactive session: Intro -> Selection -> {Questions | Random} ->
/// Result, with Result -> Selection on restart. Transitions called in the
/// wrong step are rejected, never panic.
#[derive(Debug)]
pub struct Wizard {
    step: Step,
    strategy: Option<Strategy>,
    answers: Vec<String>,
    password: String,
}

impl Wizard {
    pub fn new() -> Self {
        Wizard {
            step: Step::Intro,
            strategy: None,
            answers: Vec::new(),
            password: String::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Intro -> Selection.
    pub fn begin(&mut self) -> Result<(), String> {
        if self.step != Step::Intro {
            return Err(format!("cannot begin from {:?}", self.step));
        }
        self.step = Step::Selection;
        Ok(())
    }

    /// Selection -> Questions, or Selection -> Random for `Randomized`.
    pub fn select_strategy(&mut self, strategy: Strategy) -> Result<Step, String> {
        if self.step != Step::Selection {
            return Err(format!("cannot select a strategy from {:?}", self.step));
        }
        self.strategy = Some(strategy);
        self.step = if strategy == Strategy::Randomized {
            Step::Random
        } else {
            Step::Questions
        };
        Ok(self.step)
    }

    /// The question currently awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.step != Step::Questions {
            return None;
        }
        let strategy = self.strategy?;
        questions::for_strategy(strategy).get(self.answers.len())
    }

    /// Records one answer. Intermediate answers may be empty; the final one
    /// must not be. Once the final answer is accepted the password is built
    /// and the wizard moves to Result.
    pub fn submit_answer(&mut self, answer: &str) -> Result<Step, String> {
        if self.step != Step::Questions {
            return Err(format!("no question is pending in {:?}", self.step));
        }
        let strategy = self
            .strategy
            .ok_or_else(|| "no strategy selected".to_string())?;
        let total = questions::for_strategy(strategy).len();
        if self.answers.len() + 1 == total && answer.is_empty() {
            return Err("the last answer cannot be empty".to_string());
        }
        self.answers.push(answer.to_string());
        if self.answers.len() == total {
            self.password = builder::build(strategy, &self.answers);
            self.step = Step::Result;
        }
        Ok(self.step)
    }

    /// Random -> Result with a freshly generated password.
    pub fn generate_random(&mut self) -> Result<&str, String> {
        if self.step != Step::Random {
            return Err(format!("cannot generate from {:?}", self.step));
        }
        self.password = randgen::generate();
        self.step = Step::Result;
        Ok(&self.password)
    }

    /// Result -> Selection, dropping this session's answers and password.
    pub fn restart(&mut self) -> Result<(), String> {
        if self.step != Step::Result {
            return Err(format!("cannot restart from {:?}", self.step));
        }
        self.strategy = None;
        self.answers.clear();
        self.password.clear();
        self.step = Step::Selection;
        Ok(())
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
