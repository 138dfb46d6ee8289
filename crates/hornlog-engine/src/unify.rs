//! Syntactic unification with an undo trail.

use hornlog_core::{Store, Term, Trail};

/// Unify two terms against the store.
///
/// On success the returned trail lists every binding made, in order;
/// undoing it through the store restores the exact pre-call state. On
/// failure the store is left untouched and no trail comes back;
/// unification failure is the resolver's normal "try the next clause"
/// signal, not an error.
///
/// There is no occurs check: unifying `X` with `f(X)` succeeds and builds
/// a cyclic structure. The printers carry a depth cutoff for that reason;
/// avoiding such queries is up to the program.
pub fn unify(store: &mut Store, a: &Term, b: &Term) -> Option<Trail> {
    let mut trail = Trail::new();
    if unify_terms(store, a, b, &mut trail) {
        Some(trail)
    } else {
        debug_assert!(trail.is_empty(), "failed unification left bindings behind");
        None
    }
}

/// Recursive worker. Failure unwinds exactly the entries this call added.
fn unify_terms(store: &mut Store, a: &Term, b: &Term, trail: &mut Trail) -> bool {
    // Both sides are resolved up front; the clones are snapshots of
    // immutable trees, so binding through either view is equivalent to
    // binding the original.
    let a = store.deref(a).clone();
    let b = store.deref(b).clone();

    match (a, b) {
        (Term::Var { name, scope }, b) => {
            // A variable meeting itself is already solved; a binding here
            // would be the one-step cycle the chain invariant forbids.
            if matches!(&b, Term::Var { name: bn, scope: bs } if *bn == name && *bs == scope) {
                return true;
            }
            trail.push(store.bind(&Term::Var { name, scope }, b));
            true
        }
        (a, Term::Var { name, scope }) => {
            trail.push(store.bind(&Term::Var { name, scope }, a));
            true
        }
        (
            Term::App {
                functor: fa,
                args: args_a,
            },
            Term::App {
                functor: fb,
                args: args_b,
            },
        ) => {
            if fa != fb || args_a.len() != args_b.len() {
                return false;
            }
            let mark = trail.len();
            for (x, y) in args_a.iter().zip(args_b.iter()) {
                if !unify_terms(store, x, y, trail) {
                    store.undo_to(trail, mark);
                    return false;
                }
            }
            true
        }
    }
}
