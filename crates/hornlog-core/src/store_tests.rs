use crate::{Interner, ScopeId, Store, Term, Trail};

fn setup() -> (Interner, Store) {
    (Interner::new(), Store::new())
}

#[test]
fn unbound_variable_derefs_to_itself() {
    let (mut interner, mut store) = setup();
    let scope = store.alloc_scope();
    let x = Term::var(interner.intern("X"), scope);

    assert_eq!(store.deref(&x), &x);
}

#[test]
fn bind_then_deref_resolves() {
    let (mut interner, mut store) = setup();
    let scope = store.alloc_scope();
    let x = Term::var(interner.intern("X"), scope);
    let a = Term::atom(interner.intern("a"));

    store.bind(&x, a.clone());
    assert_eq!(store.deref(&x), &a);
}

#[test]
fn bind_lands_on_the_deepest_unbound_variable() {
    let (mut interner, mut store) = setup();
    let s1 = store.alloc_scope();
    let s2 = store.alloc_scope();
    let x = Term::var(interner.intern("X"), s1);
    let y = Term::var(interner.intern("Y"), s2);
    let a = Term::atom(interner.intern("a"));

    // X -> Y, then binding through X must land on Y.
    store.bind(&x, y.clone());
    let entry = store.bind(&x, a.clone());

    assert_eq!(entry.scope, s2);
    assert_eq!(store.deref(&x), &a);
    assert_eq!(store.deref(&y), &a);

    // Undoing the deep binding leaves the X -> Y link intact.
    store.unbind(entry);
    assert_eq!(store.deref(&x), &y);
    assert_eq!(store.deref(&y), &y);
}

#[test]
fn both_aliases_see_a_binding_made_through_either() {
    let (mut interner, mut store) = setup();
    let scope = store.alloc_scope();
    let x = Term::var(interner.intern("X"), scope);
    let y = Term::var(interner.intern("Y"), scope);
    let a = Term::atom(interner.intern("a"));

    store.bind(&x, y.clone());
    store.bind(&y, a.clone());

    assert_eq!(store.deref(&x), &a);
    assert_eq!(store.deref(&y), &a);
}

#[test]
fn undo_restores_the_exact_previous_state() {
    let (mut interner, mut store) = setup();
    let scope = store.alloc_scope();
    let x = Term::var(interner.intern("X"), scope);
    let y = Term::var(interner.intern("Y"), scope);
    let a = Term::atom(interner.intern("a"));

    let before = store.clone();

    let mut trail = Trail::new();
    trail.push(store.bind(&x, y.clone()));
    trail.push(store.bind(&y, a));
    assert_ne!(store, before);

    store.undo(trail);
    assert_eq!(store, before);
}

#[test]
fn undo_to_unwinds_only_past_the_mark() {
    let (mut interner, mut store) = setup();
    let scope = store.alloc_scope();
    let x = Term::var(interner.intern("X"), scope);
    let y = Term::var(interner.intern("Y"), scope);
    let a = Term::atom(interner.intern("a"));
    let b = Term::atom(interner.intern("b"));

    let mut trail = Trail::new();
    trail.push(store.bind(&x, a.clone()));
    let mark = trail.len();
    trail.push(store.bind(&y, b));

    store.undo_to(&mut trail, mark);
    assert_eq!(trail.len(), mark);
    assert_eq!(store.deref(&x), &a);
    assert_eq!(store.deref(&y), &y);
}

#[test]
fn release_reclaims_scopes_allocated_after_the_mark() {
    let (_, mut store) = setup();
    let keep = store.alloc_scope();
    let mark = store.mark();
    store.alloc_scope();
    store.alloc_scope();

    store.release(mark);
    assert_eq!(store.mark(), mark);

    // The surviving scope is still addressable.
    assert!(store.scope(keep).is_empty());
}

#[test]
fn scope_iteration_is_in_binding_order() {
    let (mut interner, mut store) = setup();
    let scope = store.alloc_scope();
    let x = interner.intern("X");
    let y = interner.intern("Y");
    let a = Term::atom(interner.intern("a"));
    let b = Term::atom(interner.intern("b"));

    store.bind(&Term::var(y, scope), b);
    store.bind(&Term::var(x, scope), a);

    let names: Vec<_> = store.scope(scope).iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec![y, x]);
}

#[test]
#[should_panic(expected = "not attached to this store")]
fn deref_of_an_unattached_scope_panics() {
    let (mut interner, store) = setup();
    let ghost = Term::var(interner.intern("X"), ScopeId(7));
    store.deref(&ghost);
}

#[test]
#[should_panic(expected = "already ends in a compound")]
fn bind_on_a_bound_chain_panics() {
    let (mut interner, mut store) = setup();
    let scope = store.alloc_scope();
    let x = Term::var(interner.intern("X"), scope);
    let a = Term::atom(interner.intern("a"));
    let b = Term::atom(interner.intern("b"));

    store.bind(&x, a);
    store.bind(&x, b);
}

#[test]
#[should_panic(expected = "unbind of an absent binding")]
fn unbind_of_an_absent_binding_panics() {
    let (mut interner, mut store) = setup();
    let scope = store.alloc_scope();
    let x = Term::var(interner.intern("X"), scope);
    let a = Term::atom(interner.intern("a"));

    let entry = store.bind(&x, a);
    store.unbind(entry);
    store.unbind(entry);
}
