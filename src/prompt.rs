//! Interactive collection of a [`LogoSpec`]
//!
//! Questions are written to any [`Write`] sink and answers read line by line
//! from any [`BufRead`] source, so the sequence runs the same against a
//! terminal or an in-memory buffer.

use std::io::{self, BufRead, Write};

use crate::error::InputError;
use crate::logo::{validate_text, LogoSpec, Shape};

const TEXT_QUESTION: &str = "Enter up to three characters for the logo:";
const TEXT_COLOR_QUESTION: &str = "Enter text color (keyword or hexadecimal):";
const SHAPE_QUESTION: &str = "Select a shape:";
const SHAPE_COLOR_QUESTION: &str = "Enter shape color (keyword or hexadecimal):";

const TEXT_RETRY: &str = "Please enter up to three characters.";
const SHAPE_RETRY: &str = "Please choose one of the listed shapes.";

/// Asks the four logo questions in order
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the full question sequence
    ///
    /// Invalid text or shape answers are asked again; running out of input
    /// is an [`io::ErrorKind::UnexpectedEof`] error.
    pub fn collect(&mut self) -> Result<LogoSpec, InputError> {
        let text = self.ask_text()?;
        let text_color = self.ask(TEXT_COLOR_QUESTION)?.trim().to_string();
        let shape = self.ask_shape()?;
        let shape_color = self.ask(SHAPE_COLOR_QUESTION)?.trim().to_string();

        LogoSpec::new(text, text_color, shape, shape_color)
    }

    fn ask_text(&mut self) -> Result<String, InputError> {
        loop {
            let answer = self.ask(TEXT_QUESTION)?;
            match validate_text(&answer) {
                Ok(()) => return Ok(answer),
                Err(e) => {
                    log::debug!("rejected logo text {:?}: {}", answer, e);
                    writeln!(self.output, ">> {}", TEXT_RETRY)?;
                }
            }
        }
    }

    fn ask_shape(&mut self) -> Result<Shape, InputError> {
        writeln!(self.output, "? {}", SHAPE_QUESTION)?;
        for (i, shape) in Shape::CHOICES.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, shape)?;
        }
        loop {
            let answer = self.ask("Answer:")?;
            if let Some(shape) = parse_choice(&answer) {
                return Ok(shape);
            }
            writeln!(self.output, ">> {}", SHAPE_RETRY)?;
        }
    }

    /// Write one question and read one answer line, without its line ending
    fn ask(&mut self, message: &str) -> Result<String, InputError> {
        write!(self.output, "? {} ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all questions were answered",
            )
            .into());
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

/// Interpret a shape answer given as a list number or a shape name
fn parse_choice(answer: &str) -> Option<Shape> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Shape::CHOICES.get(i).cloned());
    }
    match Shape::from(answer) {
        Shape::Other(_) => None,
        shape => Some(shape),
    }
}

/// Run the question sequence on the process's terminal
pub fn collect_from_terminal() -> Result<LogoSpec, InputError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Prompter::new(stdin.lock(), stdout.lock()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<LogoSpec, InputError>, String) {
        let mut output = Vec::new();
        let result = Prompter::new(Cursor::new(input.as_bytes()), &mut output).collect();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_collects_all_answers() {
        let (result, _) = run("AI\nred\n1\nblue\n");
        let spec = result.unwrap();
        assert_eq!(spec.text(), "AI");
        assert_eq!(spec.text_color(), "red");
        assert_eq!(spec.shape(), &Shape::Circle);
        assert_eq!(spec.shape_color(), "blue");
    }

    #[test]
    fn test_reprompts_long_text() {
        let (result, output) = run("LOGO\nABC\n#fff\ntriangle\n#000\n");
        assert_eq!(result.unwrap().text(), "ABC");
        assert_eq!(output.matches(TEXT_QUESTION).count(), 2);
        assert!(output.contains(TEXT_RETRY));
    }

    #[test]
    fn test_accepts_empty_text() {
        let (result, _) = run("\nred\nsquare\nblue\n");
        assert_eq!(result.unwrap().text(), "");
    }

    #[test]
    fn test_reprompts_unknown_shape() {
        let (result, output) = run("AI\nred\nhexagon\n4\n2\nblue\n");
        assert_eq!(result.unwrap().shape(), &Shape::Square);
        assert_eq!(output.matches(SHAPE_RETRY).count(), 2);
    }

    #[test]
    fn test_lists_shape_choices() {
        let (_, output) = run("AI\nred\n3\nblue\n");
        assert!(output.contains("  1) circle\n  2) square\n  3) triangle\n"));
    }

    #[test]
    fn test_handles_crlf() {
        let (result, _) = run("AI\r\nred\r\n1\r\nblue\r\n");
        let spec = result.unwrap();
        assert_eq!(spec.text(), "AI");
        assert_eq!(spec.shape_color(), "blue");
    }

    #[test]
    fn test_eof_is_an_error() {
        let (result, _) = run("AI\nred\n");
        match result {
            Err(InputError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("Expected EOF error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(Shape::Circle));
        assert_eq!(parse_choice(" Triangle "), Some(Shape::Triangle));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("hexagon"), None);
    }
}
