//! Terminal adapters for the quiz engine.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use qz_core::{
    AnswerSource, Question, QuestionPresenter, QuizError, QuizResult, ResultObserver,
};

/// Line-oriented console input.
pub struct Console<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> Console<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Print `label` and read one line. Returns `None` at end of input.
    ///
    /// Only the line terminator is stripped; other whitespace is kept.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        print!("{label}");
        io::stdout().flush()?;

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        let text = self
            .line
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(&self.line);
        Ok(Some(text.to_string()))
    }
}

impl<R: BufRead> AnswerSource for Console<R> {
    fn read_answer(&mut self) -> QuizResult<Option<String>> {
        self.prompt("Your answer: ").map_err(QuizError::from)
    }
}

/// Prints each question, and its choices when it has any.
pub struct ConsolePresenter;

impl QuestionPresenter for ConsolePresenter {
    fn present(&mut self, position: usize, total: usize, question: &Question) {
        println!("\nQuestion {position}/{total}: {}", question.text());
        if let Some(choices) = question.choices() {
            println!("Choices: {}", choices.join(", "));
        }
    }
}

/// Prints the final score.
pub struct ConsoleResultObserver;

impl ResultObserver for ConsoleResultObserver {
    fn update(&mut self, score: u32) {
        println!("\n{} Your score: {score}%\n", "Quiz completed.".bold());
    }
}

/// Prints each score as a one-line JSON object.
pub struct JsonResultObserver;

impl JsonResultObserver {
    fn line(score: u32) -> String {
        serde_json::json!({ "score": score }).to_string()
    }
}

impl ResultObserver for JsonResultObserver {
    fn update(&mut self, score: u32) {
        println!("{}", Self::line(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_strips_only_line_ending() {
        let mut console = Console::new(" True \r\nnext\nlast".as_bytes());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some(" True "));
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("next"));
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("last"));
        assert_eq!(console.prompt("").unwrap(), None);
    }

    #[test]
    fn console_is_an_answer_source() {
        let mut console = Console::new("4\n".as_bytes());
        assert_eq!(console.read_answer().unwrap().as_deref(), Some("4"));
        assert_eq!(console.read_answer().unwrap(), None);
    }

    #[test]
    fn json_observer_line() {
        assert_eq!(JsonResultObserver::line(50), r#"{"score":50}"#);
        assert_eq!(JsonResultObserver::line(0), r#"{"score":0}"#);
    }
}
