//! Menu choices for the interactive shell.

use qz_core::QuestionKind;

/// Top-level menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateQuiz,
    TakeQuiz,
    Exit,
}

impl MenuAction {
    pub const PROMPT: &str = "Select an option (1-3): ";

    /// Parse a menu selection. Accepts the number or the command name.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "create" => Some(Self::CreateQuiz),
            "2" | "take" => Some(Self::TakeQuiz),
            "3" | "exit" | "quit" | "q" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn render() -> String {
        "\n1. Create Quiz\n2. Take Quiz\n3. Exit".to_string()
    }
}

/// Actions while a quiz is being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationAction {
    Add(QuestionKind),
    Finish,
}

impl CreationAction {
    /// Number of the "finish" entry, after one entry per question kind.
    const FINISH: usize = QuestionKind::ALL.len() + 1;

    pub fn prompt() -> String {
        format!("Select an option (1-{}): ", Self::FINISH)
    }

    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        if n == Self::FINISH {
            return Some(Self::Finish);
        }
        QuestionKind::ALL
            .get(n.checked_sub(1)?)
            .map(|kind| Self::Add(*kind))
    }

    pub fn render() -> String {
        let mut out = String::new();
        for (i, kind) in QuestionKind::ALL.iter().enumerate() {
            out.push_str(&format!("\n{}. Add {kind} Question", i + 1));
        }
        out.push_str(&format!("\n{}. Finish creating quiz", Self::FINISH));
        out
    }
}
