use crate::{
    ast::{Block, Conditional},
    interpreter::{
        evaluator::core::Context,
        lexer::Lexeme,
        parser::{condition::parse_condition, conditional::parse_conditional},
    },
};

impl Context<'_, '_> {
    /// Parses and runs a conditional construct.
    ///
    /// Structural errors are reported and nothing in the construct runs.
    ///
    /// # Parameters
    /// - `tokens`: The lexemes from the `if` line through the `endif;` line.
    /// - `line`: Line where the construct starts.
    pub(crate) fn execute_conditional(&mut self, tokens: &[Lexeme], line: usize) {
        match parse_conditional(tokens, line) {
            Ok(conditional) => self.run_conditional(&conditional),
            Err(e) => self.report(&e, e.line()),
        }
    }

    /// Runs the first arm whose condition holds, or the default block.
    ///
    /// Arms are tried top to bottom and each condition is parsed only when
    /// its arm is reached, so nothing after the arm that runs is looked at.
    /// A condition that cannot be parsed is reported and ends the construct.
    pub fn run_conditional(&mut self, conditional: &Conditional) {
        for arm in std::iter::once(&conditional.primary).chain(&conditional.arms) {
            let condition = match parse_condition(&arm.condition, arm.line) {
                Ok(condition) => condition,
                Err(e) => {
                    self.report(&e, e.line());
                    return;
                },
            };
            if self.eval_condition(&condition) {
                self.run_block(&arm.block);
                return;
            }
        }

        if let Some(block) = &conditional.default {
            self.run_block(block);
        }
    }

    fn run_block(&mut self, block: &Block) {
        for print in &block.prints {
            self.print(print);
        }
    }
}
