use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_, '_> {
    /// Evaluates an arithmetic expression to a number.
    ///
    /// Variables are read from the store; a variable holding anything but a
    /// number is an error. Division and modulo by zero yield `0` instead of
    /// failing, and modulo keeps the sign of the dividend.
    ///
    /// # Errors
    /// - `UnknownVariable` if a referenced variable was never declared.
    /// - `ExpectedNumber` if a referenced variable is not numeric.
    pub fn eval_arithmetic(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr,
                            .. } => Ok(-self.eval_arithmetic(expr)?),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval_arithmetic(left)?;
                let right = self.eval_arithmetic(right)?;
                Ok(apply_binary(*op, left, right))
            },
        }
    }

    /// Looks up a variable and converts its value to a number.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.variables
            .lookup(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })?
            .as_number(name, line)
    }
}

/// Applies a binary arithmetic operator.
///
/// # Example
/// ```
/// use iorn::{ast::BinaryOperator, interpreter::evaluator::arithmetic::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Div, 5.0, 0.0), 0.0);
/// assert_eq!(apply_binary(BinaryOperator::Mod, -7.0, 3.0), -1.0);
/// assert_eq!(apply_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
/// ```
#[must_use]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div | BinaryOperator::Mod if right == 0.0 => 0.0,
        BinaryOperator::Div => left / right,
        BinaryOperator::Mod => left % right,
        BinaryOperator::Pow => left.powf(right),
    }
}
