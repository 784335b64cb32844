use std::fmt::Display;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        io::Host,
        lexer::{Lexeme, Token, split_lines},
        parser::{
            conditional::{closes_conditional, opens_conditional},
            statement::{parse_statement, unknown_call},
        },
        store::VariableStore,
        value::types::DeclaredType,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one script run: the variable
/// store, and the host collaborators that output, diagnostics and input go
/// through.
///
/// ## Usage
///
/// A `Context` is created once per run and handed the script's lexemes with
/// [`Context::run`]. Failures inside a statement are reported to the host's
/// diagnostics and never stop the walk.
pub struct Context<'a, 'h> {
    /// Every variable declared so far.
    pub variables: VariableStore,
    host:          &'a mut Host<'h>,
}

impl<'a, 'h> Context<'a, 'h> {
    /// Creates a new evaluation context with an empty variable store.
    #[must_use]
    pub fn new(host: &'a mut Host<'h>) -> Self {
        Self { variables: VariableStore::new(),
               host }
    }

    /// Executes a script, top to bottom.
    ///
    /// Lines containing `import` are skipped. A line starting with `if`, or
    /// holding an `if (` and no other statement, opens a conditional that
    /// takes every line up to and including the first `endif;`; calls to
    /// unknown functions inside it are reported after it ran. Every other
    /// line is parsed and executed on its own.
    ///
    /// # Parameters
    /// - `lexemes`: The tokens of the whole, already checked, script.
    pub fn run(&mut self, lexemes: &[Lexeme]) {
        let lines: Vec<&[Lexeme]> =
            split_lines(lexemes).into_iter()
                                .filter(|line| !line.iter().any(|lexeme| lexeme.token == Token::Import))
                                .collect();

        let mut index = 0;
        while index < lines.len() {
            let line = lines[index];
            let starts_conditional = line.first().is_some_and(|lexeme| lexeme.token == Token::If);
            let statement = if starts_conditional { Ok(None) } else { parse_statement(line) };

            match statement {
                Ok(Some(statement)) => {
                    if let Err(e) = self.execute(&statement) {
                        self.report(&e, Some(e.line()));
                    }
                },
                Ok(None) if starts_conditional || opens_conditional(line) => {
                    let end = lines[index..].iter()
                                            .position(|line| closes_conditional(line))
                                            .map_or(lines.len(), |offset| index + offset + 1);
                    let construct = lines[index..end].concat();
                    self.execute_conditional(&construct, line[0].line);
                    for e in lines[index..end].iter().filter_map(|line| unknown_call(line)) {
                        self.report(&e, e.line());
                    }
                    index = end;
                    continue;
                },
                Ok(None) => {},
                Err(e) => self.report(&e, e.line()),
            }
            index += 1;
        }
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Returns the validation or evaluation error that rejected the
    /// statement. A rejected statement leaves the variable store unchanged.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Declaration { name,
                                     ty,
                                     value,
                                     line, } => self.declare(name, *ty, value, *line),
            Statement::NullDeclaration { name, .. } => {
                self.variables.declare_null(name);
                Ok(())
            },
            Statement::Rename { name,
                                ty,
                                value,
                                line, } => self.rename(name, *ty, value, *line),
            Statement::Print(literal) => {
                self.print(literal);
                Ok(())
            },
        }
    }

    /// Sends a diagnostic to the host.
    pub(crate) fn report(&mut self, message: &dyn Display, line: Option<usize>) {
        self.host.diagnostics.report(&message.to_string(), line);
    }

    /// Writes a line of program output.
    pub(crate) fn write(&mut self, text: &str) {
        self.host.output.write(text);
    }

    /// Reads a line of console input conforming to `expected`.
    pub(crate) fn read(&mut self,
                       prompt: &str,
                       expected: DeclaredType)
                       -> Option<String> {
        self.host
            .input
            .read(prompt, expected, &mut *self.host.diagnostics)
    }
}
