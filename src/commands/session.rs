//! Interactive hint session
//!
//! Shows one hint phase at a time and asks before revealing the next, so
//! the player gives away only as much of the puzzle as they want.

use crate::core::WordList;
use crate::hints::HintSequencer;
use crate::output::{print_hint_report, print_session_banner, print_session_outro};
use std::io::{self, Write};

/// Run the interactive hint session
///
/// The gate between hints never appears after the last one; the session
/// always ends once the pipeline is exhausted.
///
/// # Errors
///
/// Returns an error if reading user input or writing the prompt fails.
pub fn run_session(found: &WordList, answers: &WordList) -> Result<(), String> {
    print_session_banner(found.len(), answers.len());

    let mut sequencer = HintSequencer::new(found, answers);

    while let Some(report) = sequencer.next_hint() {
        print_hint_report(&report);

        if !sequencer.has_more() {
            break;
        }

        if !ask_continue()? {
            println!("\nStopping here. Good luck with the rest!\n");
            return Ok(());
        }
    }

    print_session_outro();
    Ok(())
}

fn ask_continue() -> Result<bool, String> {
    loop {
        let input = get_user_input("\nNext hint? [Y/n]")?;
        match parse_gate(&input) {
            Some(answer) => return Ok(answer),
            None => println!("Please answer y or n."),
        }
    }
}

/// Interpret one line of gate input; `None` means ask again
fn parse_gate(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" | "q" | "quit" => Some(false),
        _ => None,
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_accepts_yes_and_empty() {
        assert_eq!(parse_gate(""), Some(true));
        assert_eq!(parse_gate("y"), Some(true));
        assert_eq!(parse_gate("YES"), Some(true));
        assert_eq!(parse_gate("  y  "), Some(true));
    }

    #[test]
    fn gate_accepts_no_and_quit() {
        assert_eq!(parse_gate("n"), Some(false));
        assert_eq!(parse_gate("No"), Some(false));
        assert_eq!(parse_gate("q"), Some(false));
        assert_eq!(parse_gate("quit"), Some(false));
    }

    #[test]
    fn gate_rejects_anything_else() {
        assert_eq!(parse_gate("maybe"), None);
        assert_eq!(parse_gate("yeah nah"), None);
    }
}
