//! RL-013: Yes/no confirmation capability.
//!
//! Core code only sees [`Confirm`]; reading the terminal is an adapter.

use std::io::{BufRead, Write};

/// Ask the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// `y` / `yes` (any case, surrounding whitespace ignored) is a yes.
pub fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Line-based prompt on stdin/stdout. EOF or a read error counts as "no".
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} (y/n) ", prompt);
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => parse_answer(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rl013_parse_answer() {
        assert!(parse_answer("y"));
        assert!(parse_answer(" YES \n"));
        assert!(!parse_answer("n"));
        assert!(!parse_answer(""));
        assert!(!parse_answer("yep"));
    }

    #[test]
    fn test_rl013_closure_confirm() {
        let mut asked = Vec::new();
        let mut c = |p: &str| {
            asked.push(p.to_string());
            true
        };
        assert!(c.confirm("Continue?"));
        assert_eq!(asked, vec!["Continue?"]);
    }
}
