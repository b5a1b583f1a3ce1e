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
// Question sets

use crate::builder::Strategy;

/// One personal-memory prompt. Answer order matters: the position of a
/// question in its set decides the role the answer plays in the transform.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

pub static SIMPLE_QUESTIONS: [Question; 3] = [
    Question {
        id: "birth",
        label: "What is your date of birth?",
        placeholder: "e.g. 15/05/1990",
    },
    Question {
        id: "phone",
        label: "What is your phone number?",
        placeholder: "e.g. 0123456789",
    },
    Question {
        id: "memory",
        label: "What is the date of a happy memory?",
        placeholder: "e.g. 10/12/2020",
    },
];

pub static MODERATE_QUESTIONS: [Question; 2] = [
    Question {
        id: "name",
        label: "Pick a name (yours, or someone close to you):",
        placeholder: "e.g. Ahmed",
    },
    Question {
        id: "number",
        label: "A number or date that matters to you:",
        placeholder: "e.g. 2023",
    },
];

pub static ROBUST_QUESTIONS: [Question; 6] = [
    Question {
        id: "engName",
        label: "Write a name in English:",
        placeholder: "e.g. Ahmed",
    },
    Question {
        id: "specialNumber",
        label: "A very special number:",
        placeholder: "e.g. 1234",
    },
    Question {
        id: "initials",
        label: "The first two letters of your name in English:",
        placeholder: "e.g. AH",
    },
    Question {
        id: "char1",
        label: "Write a favourite letter:",
        placeholder: "e.g. A",
    },
    Question {
        id: "digits",
        label: "Write two favourite digits:",
        placeholder: "e.g. 99",
    },
    Question {
        id: "char2",
        label: "Another favourite letter:",
        placeholder: "e.g. Z",
    },
];

/// The fixed question list for a strategy. `Randomized` asks nothing.
pub fn for_strategy(strategy: Strategy) -> &'static [Question] {
    match strategy {
        Strategy::Simple => &SIMPLE_QUESTIONS,
        Strategy::Moderate => &MODERATE_QUESTIONS,
        Strategy::Robust => &ROBUST_QUESTIONS,
        Strategy::Randomized => &[],
    }
}
