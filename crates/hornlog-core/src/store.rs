//! The term store: scopes, bindings, and the undo trail.
//!
//! Scopes live in an append-only arena. "Freeing" query state is a
//! watermark truncation (`mark`/`release`), the same pattern the search
//! uses for backtracking: every mutation is either appended (a binding,
//! recorded on the trail) or unwound in exact reverse order.
//!
//! Misuse of the primitives (dereferencing a variable whose scope handle
//! was never allocated here, binding a chain that already ends in a
//! compound, unbinding a name that is not bound) is a programming error
//! in the caller and aborts with a diagnostic.

use indexmap::IndexMap;

use crate::interner::Symbol;
use crate::term::{ScopeId, Term};

/// Binding map of one rule instance. A name absent from the map is
/// unbound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    bindings: IndexMap<Symbol, Term>,
}

impl Scope {
    pub fn get(&self, name: Symbol) -> Option<&Term> {
        self.bindings.get(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Term)> {
        self.bindings.iter().map(|(name, term)| (*name, term))
    }
}

/// One binding made during unification, identified by scope and name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailEntry {
    pub scope: ScopeId,
    pub name: Symbol,
}

/// Ordered record of bindings. Unwinding removes entries in strict LIFO
/// order; undoing a whole trail restores the store to the state it had
/// before the bindings were made.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TrailEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailEntry> {
        self.entries.iter()
    }

    fn pop(&mut self) -> Option<TrailEntry> {
        self.entries.pop()
    }
}

/// Watermark into the scope arena. Scopes allocated after a mark can be
/// released together once nothing references them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeMark(usize);

/// Arena of scopes. All variable state lives here; term nodes are
/// immutable values that name slots in these maps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    scopes: Vec<Scope>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh, empty scope.
    pub fn alloc_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope::default());
        id
    }

    /// Scope for a handle.
    ///
    /// # Panics
    /// Panics if the handle was not allocated by this store: such a
    /// variable is still being assembled and must not be dereferenced or
    /// bound.
    pub fn scope(&self, id: ScopeId) -> &Scope {
        self.scopes
            .get(id.0 as usize)
            .unwrap_or_else(|| panic!("scope {} is not attached to this store", id.0))
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        self.scopes
            .get_mut(id.0 as usize)
            .unwrap_or_else(|| panic!("scope {} is not attached to this store", id.0))
    }

    /// Follow the binding chain from `term`.
    ///
    /// An unbound variable or a compound returns itself; a bound variable
    /// resolves through intermediate variables until an unbound variable
    /// or a compound is reached. Chains cannot loop because a binding is
    /// only ever placed on the deepest unbound variable of its chain.
    pub fn deref<'a>(&'a self, term: &'a Term) -> &'a Term {
        let mut current = term;
        loop {
            match current {
                Term::App { .. } => return current,
                Term::Var { name, scope } => match self.scope(*scope).get(*name) {
                    Some(next) => current = next,
                    None => return current,
                },
            }
        }
    }

    /// Bind the chain starting at `var` to `value`.
    ///
    /// The binding is placed on the deepest unbound variable of the
    /// chain, never on an intermediate link. That keeps chains acyclic
    /// and makes undoing the returned entry restore the exact pre-call
    /// state.
    ///
    /// # Panics
    /// Panics if the chain already ends in a compound.
    pub fn bind(&mut self, var: &Term, value: Term) -> TrailEntry {
        let (scope, name) = match self.deref(var) {
            Term::Var { name, scope } => (*scope, *name),
            Term::App { .. } => panic!("bind on a chain that already ends in a compound"),
        };
        let displaced = self.scope_mut(scope).bindings.insert(name, value);
        debug_assert!(displaced.is_none(), "bind displaced an existing binding");
        TrailEntry { scope, name }
    }

    /// Remove one binding.
    ///
    /// # Panics
    /// Panics if the binding is absent: the trail and the store have
    /// diverged.
    pub fn unbind(&mut self, entry: TrailEntry) {
        let removed = self.scope_mut(entry.scope).bindings.shift_remove(&entry.name);
        if removed.is_none() {
            panic!(
                "unbind of an absent binding (scope {}, name {})",
                entry.scope.0,
                entry.name.as_u32()
            );
        }
    }

    /// Unwind a whole trail, newest binding first.
    pub fn undo(&mut self, mut trail: Trail) {
        while let Some(entry) = trail.pop() {
            self.unbind(entry);
        }
    }

    /// Unwind the entries made after `mark`, newest first, leaving the
    /// earlier part of the trail in place.
    pub fn undo_to(&mut self, trail: &mut Trail, mark: usize) {
        while trail.len() > mark {
            let entry = trail.pop().expect("trail shorter than its own mark");
            self.unbind(entry);
        }
    }

    /// Current high-water mark of the scope arena.
    pub fn mark(&self) -> ScopeMark {
        ScopeMark(self.scopes.len())
    }

    /// Drop every scope allocated after `mark`. Callers guarantee that no
    /// live term still points at the released scopes.
    pub fn release(&mut self, mark: ScopeMark) {
        debug_assert!(mark.0 <= self.scopes.len(), "release past the arena end");
        self.scopes.truncate(mark.0);
    }
}
