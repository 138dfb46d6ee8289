use hornlog_core::{Interner, Store};
use hornlog_syntax::{lower_program, parse_program};

use crate::database::{Bookmark, Database};

fn database(program: &str) -> (Database, Interner, Store) {
    let parse = parse_program(program);
    assert!(parse.is_clean(), "test program parses: {:?}", parse.errors);
    let mut interner = Interner::new();
    let mut store = Store::new();
    let rules = lower_program(&parse.program, &mut interner, &mut store);
    (Database::new(rules), interner, store)
}

#[test]
fn rules_come_back_in_program_order() {
    let (db, mut interner, _) = database("p(a). p(b). q(c).");

    let mut bookmark = Bookmark::START;
    let mut heads = Vec::new();
    loop {
        let (rule, after) = db.next(bookmark);
        let Some(rule) = rule else { break };
        heads.push(rule.head.functor_arity().expect("heads are compounds"));
        bookmark = after;
    }

    let p = interner.intern("p");
    let q = interner.intern("q");
    assert_eq!(heads, vec![(p, 1), (p, 1), (q, 1)]);
}

#[test]
fn iteration_past_the_end_stays_put() {
    let (db, _, _) = database("p(a).");

    let (_, after_first) = db.next(Bookmark::START);
    let (none, stuck) = db.next(after_first);
    assert!(none.is_none());
    assert_eq!(stuck, after_first);

    // Asking again changes nothing.
    let (none, still) = db.next(stuck);
    assert!(none.is_none());
    assert_eq!(still, stuck);
}

#[test]
fn a_stored_bookmark_resumes_past_the_returned_rule() {
    let (db, _, _) = database("p(a). p(b). p(c).");

    let (first, resume) = db.next(Bookmark::START);
    assert!(first.is_some());
    assert_eq!(resume.index(), 1);

    // Resuming from the stored bookmark never revisits the first rule.
    let (second, resume) = db.next(resume);
    assert!(second.is_some());
    assert_eq!(resume.index(), 2);
}

#[test]
fn an_empty_database_has_no_candidates() {
    let (db, _, _) = database("");
    assert!(db.is_empty());

    let (rule, bookmark) = db.next(Bookmark::START);
    assert!(rule.is_none());
    assert_eq!(bookmark, Bookmark::START);
}
