//! Variables and labels collected during the parse.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use teeny_common::Span;
use teeny_syntax::Ident;

/// Declared variables, declared labels and GOTO targets.
///
/// Variables are declared by their first `LET` or `INPUT`. Labels live in one
/// flat namespace for the whole program.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: BTreeSet<String>,
    /// Label name -> span of its declaration
    labels: BTreeMap<String, Span>,
    /// Every GOTO target, in source order
    gotos: Vec<Ident>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable. Returns false if it already existed.
    pub fn declare_variable(&mut self, name: &str) -> bool {
        if self.variables.contains(name) {
            return false;
        }
        self.variables.insert(name.to_owned())
    }

    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    /// Declare a label. On a duplicate, returns the span of the first
    /// declaration.
    pub fn declare_label(&mut self, label: &Ident) -> Result<(), Span> {
        if let Some(&previous) = self.labels.get(&label.name) {
            return Err(previous);
        }
        self.labels.insert(label.name.clone(), label.span);
        Ok(())
    }

    pub fn is_label(&self, name: &str) -> bool {
        self.labels.contains_key(name)
    }

    /// Record a GOTO target. Existence is checked once the whole program
    /// has been seen.
    pub fn reference_label(&mut self, target: Ident) {
        self.gotos.push(target);
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(String::as_str)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    pub fn referenced_labels(&self) -> BTreeSet<&str> {
        self.gotos.iter().map(|g| g.name.as_str()).collect()
    }

    /// GOTO targets with no matching LABEL, first occurrence of each name,
    /// in source order.
    pub fn undeclared_labels(&self) -> impl Iterator<Item = &Ident> + '_ {
        let mut seen = HashSet::new();
        self.gotos
            .iter()
            .filter(move |g| !self.labels.contains_key(&g.name) && seen.insert(g.name.clone()))
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}
