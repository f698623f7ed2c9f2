use std::cell::RefCell;
use std::io::{self, BufRead};
use std::rc::Rc;

use colored::Colorize;

use qz_core::{
    AnswerMatch, QuestionArgs, QuestionFactory, QuestionKind, QuizConfig, QuizError, QuizSession,
    ScoreLog,
};

use crate::console::{Console, ConsolePresenter, ConsoleResultObserver, JsonResultObserver};
use crate::menu::{CreationAction, MenuAction};

pub fn run(ignore_case: bool, json: bool) -> Result<(), String> {
    let matching = if ignore_case {
        AnswerMatch::Normalized
    } else {
        AnswerMatch::Exact
    };
    let mut session = QuizSession::new(QuizConfig::default().with_matching(matching));
    session.add_observer(ConsoleResultObserver);
    if json {
        session.add_observer(JsonResultObserver);
    }

    let history = Rc::new(RefCell::new(ScoreLog::new()));
    let log = Rc::clone(&history);
    session.add_observer(move |score: u32| log.borrow_mut().record(score));

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock());

    println!("  {} Quizbox", "Welcome to".bold());
    println!("  Answer matching: {matching}");

    loop {
        println!("{}", MenuAction::render());
        let Some(input) = console.prompt(MenuAction::PROMPT).map_err(|e| e.to_string())? else {
            break; // EOF
        };

        match MenuAction::parse(&input) {
            Some(MenuAction::CreateQuiz) => create_quiz(&mut session, &mut console)?,
            Some(MenuAction::TakeQuiz) => take_quiz(&mut session, &mut console, json)?,
            Some(MenuAction::Exit) => {
                println!("Exiting the application. Goodbye!");
                break;
            }
            None => println!("{}", "Invalid choice. Please try again.".yellow()),
        }
    }

    if let Some(best) = history.borrow().best() {
        println!("Best score this session: {best}%");
    }
    Ok(())
}

fn create_quiz<R: BufRead>(
    session: &mut QuizSession,
    console: &mut Console<R>,
) -> Result<(), String> {
    println!("\nCreating a new quiz...");

    loop {
        println!("{}", CreationAction::render());
        let Some(input) = console
            .prompt(&CreationAction::prompt())
            .map_err(|e| e.to_string())?
        else {
            break;
        };

        match CreationAction::parse(&input) {
            Some(CreationAction::Add(kind)) => {
                let Some((text, args)) = read_question(kind, console)? else {
                    break;
                };
                session.add_question(QuestionFactory::create_question(kind, &text, args));
                println!("Question added ({} total).", session.len());
            }
            Some(CreationAction::Finish) => {
                session.finish_creation();
                println!("Quiz creation completed.");
                return Ok(());
            }
            None => println!("{}", "Invalid choice. Please try again.".yellow()),
        }
    }

    // Input ended mid-creation: keep what was entered.
    session.finish_creation();
    Ok(())
}

/// Prompt for the text and parameters of one question.
fn read_question<R: BufRead>(
    kind: QuestionKind,
    console: &mut Console<R>,
) -> Result<Option<(String, QuestionArgs)>, String> {
    let ask = |console: &mut Console<R>, label: &str| {
        console.prompt(label).map_err(|e| e.to_string())
    };

    let (text_label, answer_label) = match kind {
        QuestionKind::MultipleChoice => (
            "Enter the multiple-choice question text: ",
            "Enter the correct answer (one of the choices): ",
        ),
        QuestionKind::TrueFalse => (
            "Enter the True/False question text: ",
            "Enter the correct answer (True or False): ",
        ),
    };

    let Some(text) = ask(console, text_label)? else {
        return Ok(None);
    };
    let choices = match kind {
        QuestionKind::MultipleChoice => {
            let Some(line) = ask(console, "Enter the choices (comma-separated): ")? else {
                return Ok(None);
            };
            split_choices(&line)
        }
        QuestionKind::TrueFalse => Vec::new(),
    };
    let Some(answer) = ask(console, answer_label)? else {
        return Ok(None);
    };

    Ok(Some((text, QuestionArgs::new(answer).with_choices(choices))))
}

fn take_quiz<R: BufRead>(
    session: &mut QuizSession,
    console: &mut Console<R>,
    json: bool,
) -> Result<(), String> {
    if !session.is_empty() {
        println!("\nTaking the quiz...");
    }

    match session.take_quiz(console, &mut ConsolePresenter) {
        Ok(attempt) => {
            if !attempt.is_complete() {
                println!(
                    "{}",
                    format!(
                        "Input ended after {} of {} questions.",
                        attempt.answers.len(),
                        attempt.questions
                    )
                    .yellow()
                );
            }
            if json {
                let line = serde_json::to_string(&attempt).map_err(|e| e.to_string())?;
                println!("{line}");
            }
            Ok(())
        }
        Err(e @ QuizError::NoQuizAvailable) => {
            println!("{}", e.to_string().yellow());
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Split a comma-separated choice list, trimming each entry.
fn split_choices(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_trimmed() {
        assert_eq!(split_choices("3, 4 ,5"), vec!["3", "4", "5"]);
        assert_eq!(split_choices("Paris"), vec!["Paris"]);
        assert!(split_choices("").is_empty());
        assert_eq!(split_choices("a,,b"), vec!["a", "b"]);
    }

    #[test]
    fn reads_multiple_choice_question() {
        let mut console = Console::new("2+2?\n3, 4, 5\n4\n".as_bytes());
        let (text, args) = read_question(QuestionKind::MultipleChoice, &mut console)
            .unwrap()
            .unwrap();
        assert_eq!(text, "2+2?");
        assert_eq!(args.choices, vec!["3", "4", "5"]);
        assert_eq!(args.correct_answer, "4");
    }

    #[test]
    fn reads_true_false_question() {
        let mut console = Console::new("Sky is blue\nTrue\n".as_bytes());
        let (text, args) = read_question(QuestionKind::TrueFalse, &mut console)
            .unwrap()
            .unwrap();
        assert_eq!(text, "Sky is blue");
        assert!(args.choices.is_empty());
        assert_eq!(args.correct_answer, "True");
    }

    #[test]
    fn truncated_question_is_dropped() {
        let mut console = Console::new("2+2?\n3,4,5\n".as_bytes());
        assert!(
            read_question(QuestionKind::MultipleChoice, &mut console)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn creation_from_script() {
        let mut session = QuizSession::default();
        let script = "1\n2+2?\n3,4,5\n4\n2\nSky is blue\nTrue\n3\n";
        let mut console = Console::new(script.as_bytes());
        create_quiz(&mut session, &mut console).unwrap();

        assert_eq!(session.len(), 2);
        assert_eq!(session.answer_key(), vec!["4", "True"]);
        assert_eq!(session.state(), qz_core::SessionState::Ready);
    }
}
