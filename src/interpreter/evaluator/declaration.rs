use crate::{
    ast::Initializer,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Lexeme, Token, source_text},
        parser::core::parse_complete_expression,
        value::{core::Value, types::DeclaredType},
    },
    util::num::f64_to_i64_truncated,
};

impl Context<'_, '_> {
    /// Declares a variable.
    ///
    /// The value is read from the console for `input(...)` initializers.
    /// Otherwise `numeric` and `floating` initializers containing an
    /// arithmetic operator are evaluated first (a `numeric` result is
    /// truncated toward zero), and every other initializer must follow the
    /// literal grammar of its declared type.
    ///
    /// # Errors
    /// - `InvalidVariableName` or `AlreadyDeclared` for an unusable name.
    /// - `InvalidExpression` if an arithmetic initializer does not parse.
    /// - `InvalidLiteral` if a literal does not match the declared type.
    /// - `InputClosed` if input ends before a value is entered.
    /// - Any error raised while evaluating the arithmetic.
    ///
    /// The variable is only created if nothing failed.
    pub fn declare(&mut self,
                   name: &str,
                   ty: DeclaredType,
                   initializer: &Initializer,
                   line: usize)
                   -> EvalResult<()> {
        self.variables.check_declarable(name, line)?;

        let value = match initializer {
            Initializer::Input { prompt } => self.read_value(prompt, ty, line)?,
            Initializer::Literal(tokens) => self.literal_value(ty, tokens, line)?,
        };

        self.variables.declare(name, ty, value, line)
    }

    /// Replaces the value of an existing variable.
    ///
    /// The new value is not validated: a single string literal is stored
    /// unquoted, and anything else is parsed under the written type when it
    /// conforms and kept as text when it does not.
    ///
    /// # Errors
    /// - `UnknownVariable` if the variable does not exist.
    /// - `InputClosed` if input ends before a value is entered.
    pub fn rename(&mut self,
                  name: &str,
                  ty: DeclaredType,
                  initializer: &Initializer,
                  line: usize)
                  -> EvalResult<()> {
        if !self.variables.contains(name) {
            return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                       line });
        }

        let value = match initializer {
            Initializer::Input { prompt } => self.read_value(prompt, ty, line)?,
            Initializer::Literal(tokens) => match tokens.as_slice() {
                [Lexeme { token: Token::Str(text),
                          .. }] => Value::String(text.clone()),
                _ => Value::from_text(ty, &source_text(tokens)),
            },
        };

        self.variables.rename(name, value, line)
    }

    fn read_value(&mut self, prompt: &str, ty: DeclaredType, line: usize) -> EvalResult<Value> {
        let entry = self.read(prompt, ty)
                        .ok_or(RuntimeError::InputClosed { line })?;
        Ok(Value::from_text(ty, &entry))
    }

    fn literal_value(&self, ty: DeclaredType, tokens: &[Lexeme], line: usize) -> EvalResult<Value> {
        let is_number = matches!(ty, DeclaredType::Numeric | DeclaredType::Floating);
        if is_number && tokens.iter().any(|lexeme| lexeme.token.is_arithmetic_operator()) {
            let expr = parse_complete_expression(tokens).map_err(|_| {
                                                            RuntimeError::InvalidExpression { line }
                                                        })?;
            let result = self.eval_arithmetic(&expr)?;

            return match ty {
                DeclaredType::Numeric => Ok(Value::Integer(f64_to_i64_truncated(result, line)?)),
                _ if result.is_finite() => Ok(Value::Float(result)),
                _ => Err(RuntimeError::Overflow { line }),
            };
        }

        let invalid = || RuntimeError::InvalidLiteral { ty,
                                                        value: source_text(tokens),
                                                        line };
        match (ty, tokens) {
            (DeclaredType::String,
             [Lexeme { token: Token::Str(text),
                       .. }]) => Ok(Value::String(text.clone())),
            (DeclaredType::String, _) => Err(invalid()),
            _ => Value::parse_as(ty, &source_text(tokens)).ok_or_else(invalid),
        }
    }
}
