//! The hornlog execution engine.
//!
//! Three moving parts: the [`Database`] holds program rules in order and
//! hands out candidates from a [`Bookmark`]; [`unify`] matches terms
//! destructively, recording every binding on a trail; and [`Solve`] drives
//! the depth-first search, composing fresh rule instances into a frame
//! stack and rewinding it on failure. A [`Session`] ties the pieces to the
//! store the bindings live in.

pub mod database;
pub mod error;
pub mod session;
pub mod solve;
pub mod trace;
pub mod unify;

pub use database::{Bookmark, Database};
pub use error::RuntimeError;
pub use session::Session;
pub use solve::{Answer, Solve, StepLimits};
pub use trace::{NoopTracer, PrintTracer, Tracer};
pub use unify::unify;

#[cfg(test)]
mod database_tests;
