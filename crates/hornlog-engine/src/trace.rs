//! Tracing hooks for the resolver.
//!
//! The tracer is a zero-cost abstraction: [`NoopTracer`]'s methods are
//! `#[inline(always)]` empty functions, so an untraced search carries no
//! instrumentation at all. [`PrintTracer`] writes one line per event to
//! stderr, indented by frame depth, resolving terms through the store and
//! interner it is handed at each call.

use hornlog_core::{Interner, Store, Term, TermDisplay};

/// Instrumentation points of the search. All methods receive raw data the
/// resolver already has; formatting happens in the tracer.
pub trait Tracer {
    /// The resolver selected `goal` as the next thing to prove.
    fn trace_goal(&mut self, store: &Store, interner: &Interner, depth: u32, goal: &Term);

    /// A candidate head unified; a frame was entered with clause `index`.
    fn trace_enter(&mut self, store: &Store, interner: &Interner, depth: u32, index: usize, head: &Term);

    /// No (more) clauses match the current goal.
    fn trace_exhausted(&mut self, depth: u32);

    /// A frame was popped and its bindings unwound.
    fn trace_backtrack(&mut self, depth: u32);

    /// The goal list emptied: one answer.
    fn trace_answer(&mut self, depth: u32);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_goal(&mut self, _store: &Store, _interner: &Interner, _depth: u32, _goal: &Term) {}

    #[inline(always)]
    fn trace_enter(
        &mut self,
        _store: &Store,
        _interner: &Interner,
        _depth: u32,
        _index: usize,
        _head: &Term,
    ) {
    }

    #[inline(always)]
    fn trace_exhausted(&mut self, _depth: u32) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _depth: u32) {}

    #[inline(always)]
    fn trace_answer(&mut self, _depth: u32) {}
}

/// Tracer that prints the search to stderr, one line per event.
#[derive(Default)]
pub struct PrintTracer;

impl PrintTracer {
    pub fn new() -> Self {
        Self
    }

    fn indent(depth: u32) -> String {
        "  ".repeat(depth as usize)
    }
}

impl Tracer for PrintTracer {
    fn trace_goal(&mut self, store: &Store, interner: &Interner, depth: u32, goal: &Term) {
        eprintln!(
            "{}goal {}",
            Self::indent(depth),
            TermDisplay::new(store, interner, goal)
        );
    }

    fn trace_enter(
        &mut self,
        store: &Store,
        interner: &Interner,
        depth: u32,
        index: usize,
        head: &Term,
    ) {
        eprintln!(
            "{}enter clause #{} {}",
            Self::indent(depth),
            index,
            TermDisplay::new(store, interner, head)
        );
    }

    fn trace_exhausted(&mut self, depth: u32) {
        eprintln!("{}no more clauses", Self::indent(depth));
    }

    fn trace_backtrack(&mut self, depth: u32) {
        eprintln!("{}backtrack", Self::indent(depth));
    }

    fn trace_answer(&mut self, depth: u32) {
        eprintln!("{}answer", Self::indent(depth));
    }
}
