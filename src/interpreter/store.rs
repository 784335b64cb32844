use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, types::DeclaredType},
    },
};

/// A declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The variable's name.
    pub name:  String,
    /// The type it was declared with.
    pub ty:    DeclaredType,
    /// Its current value.
    pub value: Value,
}

/// The single, flat namespace of a script run.
///
/// Variables live in an arena in declaration order; a name table maps each
/// name to its slot. Nothing is ever removed before the store is dropped.
#[derive(Debug, Default)]
pub struct VariableStore {
    arena: Vec<Variable>,
    index: HashMap<String, usize>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `name` may be declared.
    ///
    /// # Errors
    /// - `InvalidVariableName` if the name does not start with a letter.
    /// - `AlreadyDeclared` if the name is taken.
    pub fn check_declarable(&self, name: &str, line: usize) -> EvalResult<()> {
        if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(RuntimeError::InvalidVariableName { name: name.to_string(),
                                                           line });
        }
        if self.contains(name) {
            return Err(RuntimeError::AlreadyDeclared { name: name.to_string(),
                                                       line });
        }
        Ok(())
    }

    /// Declares a new variable.
    ///
    /// # Errors
    /// Same as [`Self::check_declarable`]; the store is unchanged on error.
    ///
    /// # Example
    /// ```
    /// use iorn::{
    ///     error::RuntimeError,
    ///     interpreter::{
    ///         store::VariableStore,
    ///         value::{core::Value, types::DeclaredType},
    ///     },
    /// };
    ///
    /// let mut store = VariableStore::new();
    /// store.declare("x", DeclaredType::Numeric, Value::Integer(5), 1).unwrap();
    ///
    /// let err = store.declare("x", DeclaredType::Numeric, Value::Integer(6), 2).unwrap_err();
    /// assert!(matches!(err, RuntimeError::AlreadyDeclared { line: 2, .. }));
    /// assert_eq!(store.lookup("x"), Some(&Value::Integer(5)));
    /// ```
    pub fn declare(&mut self,
                   name: &str,
                   ty: DeclaredType,
                   value: Value,
                   line: usize)
                   -> EvalResult<()> {
        self.check_declarable(name, line)?;
        self.insert(Variable { name: name.to_string(),
                               ty,
                               value });
        Ok(())
    }

    /// Binds `name` to `Null`, replacing any existing variable of that name.
    ///
    /// Neither the name's shape nor its uniqueness is checked.
    pub fn declare_null(&mut self, name: &str) {
        let variable = Variable { name:  name.to_string(),
                                  ty:    DeclaredType::Null,
                                  value: Value::Null, };
        match self.index.get(name) {
            Some(&slot) => self.arena[slot] = variable,
            None => self.insert(variable),
        }
    }

    /// Replaces the value of an existing variable.
    ///
    /// The declared type is left as it was.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if `name` was never declared.
    pub fn rename(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let slot = *self.index
                        .get(name)
                        .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                       line })?;
        self.arena[slot].value = value;
        Ok(())
    }

    /// Returns the current value of `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name).map(|variable| &variable.value)
    }

    /// Returns the whole record of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.index.get(name).map(|&slot| &self.arena[slot])
    }

    /// Returns `true` if `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if nothing was declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterates over variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.arena.iter()
    }

    fn insert(&mut self, variable: Variable) {
        self.index.insert(variable.name.clone(), self.arena.len());
        self.arena.push(variable);
    }
}
