use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use colored::Colorize;

use crate::interpreter::value::types::DeclaredType;

/// Receives everything a script prints.
pub trait Output {
    /// Writes one line of program output.
    fn write(&mut self, text: &str);
}

/// Receives every diagnostic raised while running a script.
///
/// How diagnostics are presented is entirely up to the implementation.
pub trait Diagnostics {
    /// Reports one diagnostic, with the source line it refers to if known.
    fn report(&mut self, message: &str, line: Option<usize>);
}

/// Supplies values for `input(...)`.
pub trait Input {
    /// Reads a value conforming to `expected`.
    ///
    /// Non-conforming entries are reported to `diagnostics` and asked for
    /// again. The returned text is never non-conforming.
    ///
    /// # Returns
    /// `None` when no more input is available.
    fn read(&mut self,
            prompt: &str,
            expected: DeclaredType,
            diagnostics: &mut dyn Diagnostics)
            -> Option<String>;
}

/// The collaborators a script run talks to.
pub struct Host<'h> {
    /// Where prints go.
    pub output:      &'h mut dyn Output,
    /// Where diagnostics go.
    pub diagnostics: &'h mut dyn Diagnostics,
    /// Where `input(...)` reads from.
    pub input:       &'h mut dyn Input,
}

impl Output for Vec<String> {
    fn write(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl Diagnostics for Vec<String> {
    fn report(&mut self, message: &str, _line: Option<usize>) {
        self.push(message.to_string());
    }
}

/// Prints program output to standard output.
#[derive(Debug, Default)]
pub struct Stdout;

impl Output for Stdout {
    fn write(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Prints diagnostics to standard error, in red.
#[derive(Debug, Default)]
pub struct Terminal;

impl Diagnostics for Terminal {
    fn report(&mut self, message: &str, _line: Option<usize>) {
        eprintln!("{}", message.red());
    }
}

/// Reads input line by line, writing prompts to `writer`.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use iorn::interpreter::{
///     io::{Input, LineInput},
///     value::types::DeclaredType,
/// };
///
/// let mut prompts: Vec<u8> = Vec::new();
/// let mut diagnostics: Vec<String> = Vec::new();
/// let mut input = LineInput::new(Cursor::new("abc\n4.5\n42\n"), &mut prompts);
///
/// let value = input.read("n? ", DeclaredType::Numeric, &mut diagnostics);
/// assert_eq!(value.as_deref(), Some("42"));
/// assert_eq!(diagnostics.len(), 2);
/// drop(input);
/// assert_eq!(String::from_utf8(prompts).unwrap(), "n? n? n? ");
/// ```
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Creates an input provider over any reader and prompt writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LineInput<StdinLock<'static>, StdoutLock<'static>> {
    /// Creates an input provider over the process's standard streams.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Input for LineInput<R, W> {
    fn read(&mut self,
            prompt: &str,
            expected: DeclaredType,
            diagnostics: &mut dyn Diagnostics)
            -> Option<String> {
        loop {
            // A prompt that cannot be shown does not stop the read.
            let _ = write!(self.writer, "{prompt}").and_then(|()| self.writer.flush());

            let mut entry = String::new();
            match self.reader.read_line(&mut entry) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {},
            }
            let entry = entry.trim_end_matches(['\r', '\n']);

            match expected.normalize_input(entry) {
                Some(value) => return Some(value),
                None => diagnostics.report(expected.input_hint(), None),
            }
        }
    }
}
