//! String interning for functor and variable names.
//!
//! Every name that appears in a program is interned once; the rest of the
//! system passes around cheap integer handles (`Symbol`). Comparing two
//! symbols is O(1), which is what makes functor-identity checks during
//! unification cheap.

use std::collections::HashMap;

/// A lightweight handle to an interned name.
///
/// Symbols are ordered by insertion order, not lexicographically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    /// Raw index, for debugging output.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Name interner. Deduplicates strings and hands out `Symbol`s.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    /// Map from name to symbol for deduplication.
    map: HashMap<String, Symbol>,
    /// Storage for interned names, indexed by Symbol.
    names: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning its Symbol.
    /// If the name was already interned, returns the existing Symbol.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.map.get(name) {
            return sym;
        }

        let sym = Symbol(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.map.insert(name.to_owned(), sym);
        sym
    }

    /// Resolve a Symbol back to its name.
    ///
    /// # Panics
    /// Panics if the symbol was not created by this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.names[sym.0 as usize]
    }

    /// Number of interned names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all interned names with their symbols.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (Symbol(i as u32), s.as_str()))
    }
}
