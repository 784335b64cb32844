use crate::{ast::PrintLiteral, interpreter::evaluator::core::Context};

impl Context<'_, '_> {
    /// Replaces every `$[name]` placeholder naming a declared variable with
    /// the variable's text.
    ///
    /// Placeholders naming unknown variables, or holding anything but word
    /// characters, are left as written. Substituted text is not scanned
    /// again.
    #[must_use]
    pub fn interpolate(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("$[") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let placeholder = after.find(']').map(|end| (&after[..end], end));

            if let Some((name, end)) = placeholder
               && is_word(name)
               && let Some(value) = self.variables.lookup(name)
            {
                result.push_str(&value.to_string());
                rest = &after[end + 1..];
            } else {
                result.push_str("$[");
                rest = after;
            }
        }

        result.push_str(rest);
        result
    }

    /// Executes a print: interpolates `f"..."` literals and writes the line.
    pub(crate) fn print(&mut self, literal: &PrintLiteral) {
        let text = if literal.interpolated {
            self.interpolate(&literal.text)
        } else {
            literal.text.clone()
        };
        self.write(&text);
    }
}

fn is_word(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
