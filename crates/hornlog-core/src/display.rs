//! Printing terms through the store.
//!
//! The printer dereferences bound variables as it walks, so a term is
//! always shown with the bindings currently in force. Output uses full
//! parentheses and re-parses to a structurally equal term.

use std::fmt;

use crate::interner::Interner;
use crate::store::Store;
use crate::term::Term;

/// Depth cutoff for printing. There is no occurs check, so a binding can
/// be cyclic (`X = f(X)` succeeds); past this depth the printer emits
/// `...` instead of recursing further.
pub const MAX_PRINT_DEPTH: usize = 512;

/// Adapter that prints a term with the bindings of a store.
pub struct TermDisplay<'a> {
    store: &'a Store,
    interner: &'a Interner,
    term: &'a Term,
}

impl<'a> TermDisplay<'a> {
    pub fn new(store: &'a Store, interner: &'a Interner, term: &'a Term) -> Self {
        Self {
            store,
            interner,
            term,
        }
    }
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_term(f, self.store, self.interner, self.term, 0)
    }
}

fn write_term(
    f: &mut fmt::Formatter<'_>,
    store: &Store,
    interner: &Interner,
    term: &Term,
    depth: usize,
) -> fmt::Result {
    if depth > MAX_PRINT_DEPTH {
        return f.write_str("...");
    }
    match store.deref(term) {
        Term::Var { name, .. } => f.write_str(interner.resolve(*name)),
        Term::App { functor, args } => {
            f.write_str(interner.resolve(*functor))?;
            if !args.is_empty() {
                f.write_str("(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_term(f, store, interner, arg, depth + 1)?;
                }
                f.write_str(")")?;
            }
            Ok(())
        }
    }
}
