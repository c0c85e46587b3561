//! Quiz drawing and scoring

use crate::core::models::{Choice, QuestionId, TrivialQuestion};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Quiz failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Requested more questions than exist, or zero.
    #[error("cannot draw {requested} questions from a bank of {available}")]
    InvalidCount {
        /// Number asked for
        requested: usize,
        /// Number in the bank
        available: usize,
    },

    /// Tried to grade before every question had an answer.
    #[error("only {answered} of {total} questions answered")]
    Incomplete {
        /// Questions with an answer
        answered: usize,
        /// Questions in the quiz
        total: usize,
    },

    /// Answered a question that is not part of this quiz.
    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(QuestionId),
}

/// Result of grading a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    /// Correct answers
    pub correct: usize,
    /// Questions asked
    pub total: usize,
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// A set of drawn questions and the answers given so far
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<TrivialQuestion>,
    answers: HashMap<QuestionId, Choice>,
}

impl Quiz {
    /// Draw `count` distinct questions in random order
    ///
    /// # Errors
    /// Returns `InvalidCount` unless `1 <= count <= questions.len()`.
    pub fn draw<R: Rng + ?Sized>(
        questions: &[TrivialQuestion],
        count: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if count == 0 || count > questions.len() {
            return Err(QuizError::InvalidCount {
                requested: count,
                available: questions.len(),
            });
        }
        let mut drawn = questions.to_vec();
        drawn.shuffle(rng);
        drawn.truncate(count);
        Ok(Self::new(drawn))
    }

    /// Quiz over exactly `questions`, in the given order
    #[must_use]
    pub fn new(questions: Vec<TrivialQuestion>) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
        }
    }

    /// Questions in the order they are asked
    #[must_use]
    pub fn questions(&self) -> &[TrivialQuestion] {
        &self.questions
    }

    /// Record `choice` for `question_id`, replacing an earlier answer
    ///
    /// # Errors
    /// Returns `UnknownQuestion` if the question was not drawn.
    pub fn answer(&mut self, question_id: QuestionId, choice: Choice) -> Result<(), QuizError> {
        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(QuizError::UnknownQuestion(question_id));
        }
        self.answers.insert(question_id, choice);
        Ok(())
    }

    /// Answer given for `question_id`, if any
    #[must_use]
    pub fn answer_for(&self, question_id: QuestionId) -> Option<Choice> {
        self.answers.get(&question_id).copied()
    }

    /// Whether every question has an answer
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.answers.len() == self.questions.len()
    }

    /// Count correct answers
    ///
    /// # Errors
    /// Returns `Incomplete` until every question is answered.
    pub fn grade(&self) -> Result<QuizScore, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::Incomplete {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }
        let correct = self
            .questions
            .iter()
            .filter(|q| self.answer_for(q.id).is_some_and(|a| q.is_correct(a)))
            .count();
        Ok(QuizScore {
            correct,
            total: self.questions.len(),
        })
    }
}
