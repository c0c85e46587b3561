//! Multiple-choice trivia quiz
//!
//! Independent of the course records apart from sharing the storage engines.

pub mod bank;
pub mod quiz;

pub use bank::QuestionBank;
pub use quiz::{Quiz, QuizError, QuizScore};

use crate::core::models::{Choice, TrivialQuestion};

/// The built-in question set loaded by [`QuestionBank::load_defaults`]
#[must_use]
pub fn default_questions() -> Vec<TrivialQuestion> {
    vec![
        TrivialQuestion::new(
            "What percentage of grads finds success?",
            ["98%", "96%", "90%", "92%"],
            Choice::B,
        ),
        TrivialQuestion::new(
            "What year was Roger Williams University founded?",
            ["1956", "1947", "2000", "1981"],
            Choice::A,
        ),
        TrivialQuestion::new(
            "Where is Roger Williams University located?",
            ["Rhode Island", "New York", "Florida", "New Hampshire"],
            Choice::A,
        ),
        TrivialQuestion::new(
            "How much is awarded annually in financial aid to students?",
            ["78 million", "68 million", "500 thousand", "5 million"],
            Choice::A,
        ),
        TrivialQuestion::new(
            "What field is Roger Williams University best known for?",
            ["Engineering", "Arts", "Law", "Medicine"],
            Choice::C,
        ),
        TrivialQuestion::new(
            "What is Roger Williams University mascot?",
            [
                "Ace the Pacer",
                "Swoop the Hawk",
                "Arnie the Aardvark",
                "Mack the Warrior",
            ],
            Choice::B,
        ),
        TrivialQuestion::new(
            "What are Roger Williams University colors?",
            [
                "Red, White, Blue",
                "Navy blue, Gold, Silver",
                "Navy blue, Red, Silver",
                "Navy blue, Gold, Light blue",
            ],
            Choice::D,
        ),
        TrivialQuestion::new(
            "What is the tuition cost annually?",
            ["$50,000", "$43,587", "$45,648", "$47,294"],
            Choice::C,
        ),
        TrivialQuestion::new(
            "How many students attend the school?",
            ["4,000-4,500", "5,000-5,500", "10,000-10,500", "7,000-8,000"],
            Choice::A,
        ),
        TrivialQuestion::new(
            "What is the percentage of students to be first to attend college?",
            ["40%", "27.6%", "20.3%", "15.7%"],
            Choice::B,
        ),
    ]
}
