//! Core data structures for hornlog.
//!
//! Two layers:
//! - **Immutable trees**: interned [`Symbol`]s and [`Term`] values. A term
//!   never changes after construction; a variable is just a `(name, scope)`
//!   pair.
//! - **Mutable state**: the [`Store`], an arena of per-rule-instance
//!   [`Scope`]s holding every binding, together with the [`Trail`] that
//!   records bindings so backtracking can undo them in reverse order.

pub mod display;
pub mod interner;
pub mod store;
pub mod term;

pub use display::TermDisplay;
pub use interner::{Interner, Symbol};
pub use store::{Scope, ScopeMark, Store, Trail, TrailEntry};
pub use term::{Rule, ScopeId, Term};

#[cfg(test)]
mod store_tests;
#[cfg(test)]
mod term_tests;
