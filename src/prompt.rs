//! Standalone interactive-prompt utility: ask a question until the
//! respondent supplies an acceptable answer, then return it typed. Not used
//! by the generation pipeline; kept generic over its input/output streams so
//! callers (and tests) can drive it without a terminal.

use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Asks until the response parses as an integer and, if `accepted` is
/// non-empty, matches one of its entries.
pub fn ask_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    accepted: &[i64],
) -> Result<i64> {
    ask(input, output, question, "an integer", accepted)
}

/// Asks until the response parses as a number.
pub fn ask_float<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    accepted: &[f64],
) -> Result<f64> {
    ask(input, output, question, "a number", accepted)
}

/// Asks until the response (any text) matches the allow-list, or returns the
/// first response when the allow-list is empty.
pub fn ask_string<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    accepted: &[String],
) -> Result<String> {
    ask(input, output, question, "text", accepted)
}

fn ask<T, R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    kind: &str,
    accepted: &[T],
) -> Result<T>
where
    T: FromStr + PartialEq + Display,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{}", question)?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // No loop forever on a closed stream.
            anyhow::bail!("input ended before an acceptable answer was given");
        }

        let parsed = match line.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                writeln!(output, "You did not answer with {}. Please do so.", kind)?;
                continue;
            }
        };

        if accepted.is_empty() || accepted.contains(&parsed) {
            return Ok(parsed);
        }

        writeln!(output, "You did not answer correctly. Please try again.")?;
        writeln!(
            output,
            "Possible answers include: {}",
            enumerate_answers(accepted)
        )?;
    }
}

/// Renders the allow-list the way a person would say it: "x", "x and y",
/// "x, y, and z".
fn enumerate_answers<T: Display>(accepted: &[T]) -> String {
    match accepted {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        _ => {
            let mut line = String::new();
            for (i, answer) in accepted.iter().enumerate() {
                if i + 1 == accepted.len() {
                    line.push_str(&format!("and {}", answer));
                } else {
                    line.push_str(&format!("{}, ", answer));
                }
            }
            line
        }
    }
}
