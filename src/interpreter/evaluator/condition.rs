use crate::{
    ast::{ComparisonOperator, Condition, Operand},
    interpreter::{evaluator::core::Context, value::types::is_numeric_literal},
};

impl Context<'_, '_> {
    /// Evaluates a condition.
    ///
    /// Every declared variable named on a side is replaced by its text first.
    /// A comparison is textual when either side is a string literal or a
    /// replacement happened; textual sides are compared as numbers when both
    /// look like numeric literals, and as strings otherwise. So with `x` set
    /// to `5`, `x + 1 == 6` compares the texts `5+1` and `6`. All other
    /// comparisons evaluate both sides as arithmetic, falling back to
    /// comparing the written text when that fails.
    ///
    /// A flag holds when the named variable's text is `TRUE`.
    #[must_use]
    pub fn eval_condition(&self, condition: &Condition) -> bool {
        match condition {
            Condition::Comparison { left, op, right, .. } => {
                let left_text = self.substitute(left.text());
                let right_text = self.substitute(right.text());

                let literal = matches!(left, Operand::Text(_)) || matches!(right, Operand::Text(_));
                let substituted = left_text != left.text() || right_text != right.text();
                if literal || substituted {
                    compare_texts(*op, &left_text, &right_text)
                } else {
                    self.compare_arithmetic(*op, left, right)
                }
            },
            Condition::Flag { name, .. } => {
                self.variables
                    .lookup(name)
                    .is_some_and(|value| value.to_string() == "TRUE")
            },
        }
    }

    /// Replaces every identifier-bounded occurrence of a declared variable in
    /// `text` with the variable's text.
    fn substitute(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(is_word_char) {
            result.push_str(&rest[..start]);
            let word = &rest[start..];
            let end = word.find(|c| !is_word_char(c)).unwrap_or(word.len());
            let (word, after) = word.split_at(end);

            match self.variables.lookup(word) {
                Some(value) => result.push_str(&value.to_string()),
                None => result.push_str(word),
            }
            rest = after;
        }

        result.push_str(rest);
        result
    }

    fn compare_arithmetic(&self, op: ComparisonOperator, left: &Operand, right: &Operand) -> bool {
        if let (Operand::Expr { expr: left, .. }, Operand::Expr { expr: right, .. }) = (left, right)
           && let (Ok(left), Ok(right)) = (self.eval_arithmetic(left), self.eval_arithmetic(right))
        {
            return op.compare(&left, &right);
        }
        op.compare(left.text(), right.text())
    }
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Compares two texts, numerically when both are numeric literals.
///
/// # Example
/// ```
/// use iorn::{ast::ComparisonOperator, interpreter::evaluator::condition::compare_texts};
///
/// assert!(compare_texts(ComparisonOperator::Equal, "5", "5.0"));
/// assert!(compare_texts(ComparisonOperator::Less, "9", "10"));
/// assert!(!compare_texts(ComparisonOperator::Less, "b", "abc"));
/// ```
#[must_use]
pub fn compare_texts(op: ComparisonOperator, left: &str, right: &str) -> bool {
    if is_numeric_literal(left)
       && is_numeric_literal(right)
       && let (Ok(left), Ok(right)) = (left.parse::<f64>(), right.parse::<f64>())
    {
        return op.compare(&left, &right);
    }
    op.compare(left, right)
}
