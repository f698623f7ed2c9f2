use colored::Colorize;

use qz_core::QuestionKind;

pub fn run() -> Result<(), String> {
    println!("  {}", "Question kinds".bold());
    for kind in QuestionKind::ALL {
        let (short, needs) = match kind {
            QuestionKind::MultipleChoice => ("mc", "text, choices, correct answer"),
            QuestionKind::TrueFalse => ("tf", "text, correct answer"),
        };
        let label = kind.to_string();
        println!("  {:<16} {short:<4} {label:<16} {needs}", kind.tag());
    }
    Ok(())
}
