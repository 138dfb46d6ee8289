use crate::{Interner, Rule, Store, Term};

/// `app(cons(H, T), L, cons(H, R)) :- app(T, L, R).` built by hand.
fn append_step(interner: &mut Interner, store: &mut Store) -> Rule {
    let scope = store.alloc_scope();
    let app = interner.intern("app");
    let cons = interner.intern("cons");
    let h = Term::var(interner.intern("H"), scope);
    let t = Term::var(interner.intern("T"), scope);
    let l = Term::var(interner.intern("L"), scope);
    let r = Term::var(interner.intern("R"), scope);

    Rule {
        head: Term::app(
            app,
            vec![
                Term::app(cons, vec![h.clone(), t.clone()]),
                l.clone(),
                Term::app(cons, vec![h, r.clone()]),
            ],
        ),
        body: vec![Term::app(app, vec![t, l, r])],
        scope,
    }
}

#[test]
fn atom_is_a_zero_arity_compound() {
    let mut interner = Interner::new();
    let nil = Term::atom(interner.intern("nil"));

    assert_eq!(nil.functor_arity(), Some((interner.intern("nil"), 0)));
    assert!(!nil.is_var());
}

#[test]
fn repeated_names_are_one_logical_variable() {
    let mut interner = Interner::new();
    let mut store = Store::new();
    let rule = append_step(&mut interner, &mut store);

    // H appears in the first and third head argument; both occurrences are
    // the same (name, scope) value.
    let Term::App { args, .. } = &rule.head else {
        panic!("head is a compound");
    };
    let Term::App { args: first, .. } = &args[0] else {
        panic!("first argument is a compound");
    };
    let Term::App { args: third, .. } = &args[2] else {
        panic!("third argument is a compound");
    };
    assert_eq!(first[0], third[0]);
}

#[test]
fn rename_allocates_a_fresh_scope() {
    let mut interner = Interner::new();
    let mut store = Store::new();
    let rule = append_step(&mut interner, &mut store);

    let copy = rule.rename(&mut store);
    assert_ne!(copy.scope, rule.scope);

    // Same shape, different attachment.
    let Term::App { args, .. } = &copy.body[0] else {
        panic!("body goal is a compound");
    };
    assert_eq!(args[0], Term::var(interner.intern("T"), copy.scope));
}

#[test]
fn copies_are_pairwise_fresh() {
    let mut interner = Interner::new();
    let mut store = Store::new();
    let rule = append_step(&mut interner, &mut store);

    let first = rule.rename(&mut store);
    let second = rule.rename(&mut store);

    assert_ne!(first.scope, second.scope);
    assert_ne!(first.scope, rule.scope);
    assert_ne!(second.scope, rule.scope);
}

#[test]
fn binding_a_copy_leaves_the_template_untouched() {
    let mut interner = Interner::new();
    let mut store = Store::new();
    let rule = append_step(&mut interner, &mut store);

    let copy = rule.rename(&mut store);
    let t = Term::var(interner.intern("T"), copy.scope);
    store.bind(&t, Term::atom(interner.intern("nil")));

    assert!(store.scope(rule.scope).is_empty());
    assert_eq!(store.scope(copy.scope).len(), 1);
}
