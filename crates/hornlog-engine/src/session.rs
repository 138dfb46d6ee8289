//! A loaded program plus the mutable state queries run against.

use hornlog_core::{Interner, Rule, ScopeMark, Store, Symbol};

use crate::database::Database;
use crate::solve::{Solve, StepLimits};
use crate::trace::Tracer;

/// Owns the interner, the store, and the clause database for one loaded
/// program. The database is read-only for the session's lifetime; all
/// per-query state lives in scopes allocated above the post-load
/// watermark and is reclaimed when the query's [`Solve`] drops.
pub struct Session {
    interner: Interner,
    store: Store,
    db: Database,
    /// Store watermark right after loading; queries allocate above it.
    base: ScopeMark,
}

impl Session {
    pub fn new(interner: Interner, store: Store, db: Database) -> Self {
        let base = store.mark();
        Self {
            interner,
            store,
            db,
            base,
        }
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Interner and store together, for lowering a query against this
    /// session before solving it.
    pub fn lowering(&mut self) -> (&mut Interner, &mut Store) {
        (&mut self.interner, &mut self.store)
    }

    /// Start a search for a lowered query rule. `vars` are the query's
    /// variable names in the order answers should report them.
    pub fn solve<T: Tracer>(
        &mut self,
        query: Rule,
        vars: Vec<Symbol>,
        limits: StepLimits,
        tracer: T,
    ) -> Solve<'_, T> {
        Solve::new(
            &self.db,
            &mut self.store,
            &self.interner,
            query,
            vars,
            self.base,
            limits,
            tracer,
        )
    }
}
