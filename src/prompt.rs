//! Line-oriented prompts over any reader/writer pair.
//!
//! Every `ask*` method returns `Ok(None)` once input is exhausted.

use std::io::{self, BufRead, Write};

const NEGATIVE_INPUT: &str = "Error: Please enter a positive number.";
const NOT_A_NUMBER: &str = "Error: Invalid input. Please enter a number.";
const NOT_WHOLE: &str = "Error: Please enter a whole number.";

/// Parses a finite, non-negative number
pub fn parse_non_negative(input: &str) -> Result<f64, &'static str> {
    let value: f64 = input.trim().parse().map_err(|_| NOT_A_NUMBER)?;
    if !value.is_finite() {
        return Err(NOT_A_NUMBER);
    }
    if value < 0.0 {
        return Err(NEGATIVE_INPUT);
    }
    Ok(value)
}

/// Parses a whole, non-negative quantity
pub fn parse_quantity(input: &str) -> Result<u32, &'static str> {
    let trimmed = input.trim();
    if let Ok(quantity) = trimmed.parse::<u32>() {
        return Ok(quantity);
    }
    // Distinguish "-3" and "2.5" from plain garbage for a better message
    match parse_non_negative(trimmed) {
        Ok(_) => Err(NOT_WHOLE),
        Err(msg) => Err(msg),
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a full line
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Writes text as-is, without a trailing newline
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    /// Shows `prompt` and reads one line without its line ending
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Re-prompts until the answer is a non-negative number
    pub fn ask_non_negative(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.ask_until(prompt, parse_non_negative)
    }

    /// Re-prompts until the answer is a whole non-negative number
    pub fn ask_quantity(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        self.ask_until(prompt, parse_quantity)
    }

    fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, &'static str>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(msg) => self.say(msg)?,
            }
        }
    }
}
