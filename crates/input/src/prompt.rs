//! Line-oriented prompts that keep asking until the answer is valid.
//!
//! Every prompt reads whole lines from a `BufRead` and writes to a `Write`, so
//! the same code drives the terminal and the tests. End of input surfaces as
//! `io::ErrorKind::UnexpectedEof` instead of looping forever.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::controls::{ControlScheme, KeyPool, USABLE_KEYS};
use crate::core::WagerSource;
use crate::types::Direction;

/// Parse an integer written as an optional `-` followed by digits only
pub fn parse_int(input: &str) -> Option<i64> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Validated prompts over an input/output pair
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write text and flush it
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Ask for an integer in the inclusive range `[low, high]`
    pub fn ask_int(&mut self, prompt: &str, low: i64, high: i64) -> io::Result<i64> {
        self.say(prompt)?;
        loop {
            let line = self.read_line()?;
            match parse_int(line.trim()) {
                Some(value) if (low..=high).contains(&value) => return Ok(value),
                _ => {
                    warn!(input = %line, low, high, "rejected integer answer");
                    self.say(&format!(
                        "Response must be an integer between {low} and {high} inclusive\nEnter: "
                    ))?;
                }
            }
        }
    }

    /// Ask until the answer exactly matches one of `choices`
    pub fn ask_choice<'a>(
        &mut self,
        prompt: &str,
        choices: &[&'a str],
        retry: &str,
    ) -> io::Result<&'a str> {
        self.say(prompt)?;
        loop {
            let line = self.read_line()?;
            if let Some(choice) = choices.iter().copied().find(|&c| c == line.trim()) {
                return Ok(choice);
            }
            warn!(input = %line, "rejected choice");
            self.say(retry)?;
        }
    }

    /// Ask a `y`/`n` question
    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.ask_choice(prompt, &["y", "n"], "Please respond with 'y' or 'n'. Enter: ")?;
        Ok(answer == "y")
    }

    /// Wait for the player to press Enter
    pub fn wait_for_enter(&mut self, prompt: &str) -> io::Result<()> {
        self.say(prompt)?;
        self.read_line().map(|_| ())
    }

    /// Ask for the next move using the player's controls
    pub fn ask_direction(&mut self, controls: &ControlScheme) -> io::Result<Direction> {
        self.say("Enter your move: ")?;
        loop {
            let line = self.read_line()?;
            if let Some(direction) = controls.direction_for(&line) {
                return Ok(direction);
            }
            warn!(input = %line, "rejected move");
            self.say("Invalid move. Enter: ")?;
        }
    }

    /// Walk the player through choosing a key for every direction
    pub fn remap_controls(&mut self) -> io::Result<ControlScheme> {
        self.say(&format!(
            "Each control must be a single character. You may use any character from the following list:\n{USABLE_KEYS}\n\n"
        ))?;

        let mut pool = KeyPool::new();
        let mut keys = ['\0'; 8];
        for (slot, direction) in keys.iter_mut().zip(Direction::ALL) {
            self.say(&format!("What key would you like to use to move {direction}? "))?;
            *slot = loop {
                let line = self.read_line()?;
                if let Some(key) = pool.take(&line) {
                    break key;
                }
                warn!(input = %line, "rejected control key");
                self.say("That is either an invalid control key, or it has already been used. Enter: ")?;
            };
        }

        ControlScheme::custom(keys).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: BufRead, W: Write> WagerSource for Prompter<R, W> {
    type Error = io::Error;

    fn wager(&mut self, max_power: u32) -> Result<u32, Self::Error> {
        let prompt = format!(
            "You've found one of the bandits! Prepare for battle!\n\n\
             The bandit has a maximum attack of {max_power}\n\
             How many strength points would you like to wager? (1 to {max_power}) "
        );
        let wager = self.ask_int(&prompt, 1, max_power as i64)?;
        Ok(wager as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn written(p: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("4.2"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("+3"), None);
        assert_eq!(parse_int("12a"), None);
    }

    #[test]
    fn test_ask_int_retries_until_in_range() {
        let mut p = prompter("abc\n11\n0\n6\n");
        assert_eq!(p.ask_int("Wager: ", 1, 10).unwrap(), 6);
        let out = written(p);
        assert!(out.starts_with("Wager: "));
        assert_eq!(out.matches("between 1 and 10 inclusive").count(), 3);
    }

    #[test]
    fn test_ask_yes_no() {
        let mut p = prompter("maybe\nY\nn\n");
        assert!(!p.ask_yes_no("Again? ").unwrap());
        assert_eq!(written(p).matches("Please respond").count(), 2);

        let mut p = prompter("y\r\n");
        assert!(p.ask_yes_no("Again? ").unwrap());
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut p = prompter("nope\n");
        let err = p.ask_yes_no("Again? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_ask_direction_uses_controls() {
        let mut p = prompter("5\nq\n7\n");
        let dir = p.ask_direction(&ControlScheme::numpad()).unwrap();
        assert_eq!(dir, Direction::NorthWest);
        assert_eq!(written(p).matches("Invalid move").count(), 2);
    }

    #[test]
    fn test_remap_controls_skips_used_and_unusable_keys() {
        let mut p = prompter("z\nz\nx\nC\nc\na\nd\nq\nw\ne\n");
        let controls = p.remap_controls().unwrap();
        assert_eq!(
            controls,
            ControlScheme::custom(['z', 'x', 'c', 'a', 'd', 'q', 'w', 'e']).unwrap()
        );
        assert_eq!(written(p).matches("already been used").count(), 2);
    }

    #[test]
    fn test_wager_prompt_is_bounded_by_max_power() {
        let mut p = prompter("9\n4\n");
        assert_eq!(p.wager(8).unwrap(), 4);
        let out = written(p);
        assert!(out.contains("maximum attack of 8"));
        assert!(out.contains("between 1 and 8 inclusive"));
    }
}
