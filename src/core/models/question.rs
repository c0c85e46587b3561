//! Trivia question model

use crate::core::store::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of a trivia question
pub type QuestionId = u32;

/// One of the four answer labels of a multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// First choice
    A,
    /// Second choice
    B,
    /// Third choice
    C,
    /// Fourth choice
    D,
}

impl Choice {
    /// All labels in display order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// The label as a single-letter string
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(format!("Unknown choice: '{}' (expected A, B, C or D)", s.trim())),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A multiple-choice trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrivialQuestion {
    /// Identifier assigned by the question bank
    pub id: QuestionId,
    /// Question text
    pub question_name: String,
    /// Text of choice A
    pub choice_a: String,
    /// Text of choice B
    pub choice_b: String,
    /// Text of choice C
    pub choice_c: String,
    /// Text of choice D
    pub choice_d: String,
    /// Label of the correct choice
    pub correct_answer: Choice,
}

impl TrivialQuestion {
    /// Create a question with id 0; the bank assigns the real id on insert.
    #[must_use]
    pub fn new(
        question_name: &str,
        choices: [&str; 4],
        correct_answer: Choice,
    ) -> Self {
        let [a, b, c, d] = choices;
        Self {
            id: 0,
            question_name: question_name.to_string(),
            choice_a: a.to_string(),
            choice_b: b.to_string(),
            choice_c: c.to_string(),
            choice_d: d.to_string(),
            correct_answer,
        }
    }

    /// Text shown for `choice`
    #[must_use]
    pub fn choice_text(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.choice_a,
            Choice::B => &self.choice_b,
            Choice::C => &self.choice_c,
            Choice::D => &self.choice_d,
        }
    }

    /// Whether `answer` is the correct label
    #[must_use]
    pub fn is_correct(&self, answer: Choice) -> bool {
        self.correct_answer == answer
    }
}

impl Record for TrivialQuestion {
    fn id(&self) -> u32 {
        self.id
    }
}
