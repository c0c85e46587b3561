//! Trivia command handler

use super::{exit_on_storage_error, open_storage, DynStorage};
use crate::args::TriviaSubcommand;
use course_gpa::config::Config;
use course_gpa::core::models::{Choice, TrivialQuestion};
use course_gpa::core::trivia::{QuestionBank, Quiz, QuizScore};
use logger::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};

/// Question bank over the configured engine
pub type Questions = QuestionBank<DynStorage<TrivialQuestion>>;

fn open_bank(config: &Config) -> Questions {
    let path = config.questions_path();
    open_storage::<TrivialQuestion>(config, &path)
        .and_then(QuestionBank::open)
        .unwrap_or_else(|e| exit_on_storage_error("Failed to open question bank", &e))
}

/// Dispatch trivia subcommands
pub fn run(subcommand: TriviaSubcommand, config: &Config) {
    let mut bank = open_bank(config);
    match subcommand {
        TriviaSubcommand::Load => match bank.load_defaults() {
            Ok(count) => println!("✓ Loaded {count} questions"),
            Err(e) => exit_on_storage_error("Failed to load questions", &e),
        },
        TriviaSubcommand::List => handle_list(&bank),
        TriviaSubcommand::Clear => match bank.delete_all() {
            Ok(removed) => println!("✓ Removed {removed} questions"),
            Err(e) => exit_on_storage_error("Failed to clear questions", &e),
        },
        TriviaSubcommand::Quiz { count, seed } => handle_quiz(&bank, count, seed),
    }
}

fn handle_list(bank: &Questions) {
    if bank.is_empty() {
        println!("No questions stored. Run `coursegpa trivia load` first.");
        return;
    }
    for question in bank.questions() {
        println!("{}. {}", question.id, question.question_name);
    }
}

fn handle_quiz(bank: &Questions, count: usize, seed: Option<u64>) {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut quiz = match Quiz::draw(bank.questions(), count, &mut rng) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_quiz(&mut quiz, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(score) => {
            println!("Your score: {score}");
            info!("Quiz graded: {score}");
        }
        Err(e) => {
            error!("Quiz aborted: {e}");
            eprintln!("✗ Quiz aborted: {e}");
            std::process::exit(1);
        }
    }
}

/// Ask every question on `output`, read answers from `input`, then grade
///
/// Invalid answers are asked again.
///
/// # Errors
/// Returns an error if input ends early or cannot be read or written
pub fn run_quiz<R: BufRead, W: Write>(
    quiz: &mut Quiz,
    input: &mut R,
    output: &mut W,
) -> io::Result<QuizScore> {
    let questions = quiz.questions().to_vec();
    for (index, question) in questions.iter().enumerate() {
        writeln!(output, "\n{}. {}", index + 1, question.question_name)?;
        for choice in Choice::ALL {
            writeln!(output, "   {choice}. {}", question.choice_text(choice))?;
        }
        let choice = read_choice(input, output)?;
        quiz.answer(question.id, choice)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    }
    quiz.grade()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn read_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Choice> {
    loop {
        write!(output, "Answer (A-D): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before every question was answered",
            ));
        }
        match line.parse::<Choice>() {
            Ok(choice) => return Ok(choice),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
