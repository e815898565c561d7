//! Session symbol table. Names are folded to lower case on the way in and out.
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::token::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning whatever it was bound to before.
    pub fn bind(&mut self, name: &str, value: Value) -> Option<Value> {
        self.symbols.insert(fold(name), value)
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.symbols.get(&fold(name))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
