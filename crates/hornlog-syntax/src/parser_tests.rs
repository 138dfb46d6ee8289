use indoc::indoc;

use crate::ast::TermAst;
use crate::parser::{parse_program, parse_query};

/// Canonical text for a parsed term; mirrors the engine-side printer, so
/// these tests double as the parse → print → parse round trip.
fn render(term: &TermAst) -> String {
    match term {
        TermAst::Var { name, .. } => name.clone(),
        TermAst::App { functor, args, .. } => {
            if args.is_empty() {
                functor.clone()
            } else {
                let args: Vec<_> = args.iter().map(render).collect();
                format!("{}({})", functor, args.join(", "))
            }
        }
    }
}

fn render_rule(rule: &crate::ast::RuleAst) -> String {
    if rule.body.is_empty() {
        format!("{}.", render(&rule.head))
    } else {
        let body: Vec<_> = rule.body.iter().map(render).collect();
        format!("{} :- {}.", render(&rule.head), body.join(", "))
    }
}

#[test]
fn facts_parse() {
    let parse = parse_program("parent(tom, bob).");
    assert!(parse.is_clean());
    assert_eq!(parse.program.rules.len(), 1);
    assert_eq!(render_rule(&parse.program.rules[0]), "parent(tom, bob).");
}

#[test]
fn atoms_are_zero_arity() {
    let parse = parse_program("true.");
    assert!(parse.is_clean());
    assert_eq!(render_rule(&parse.program.rules[0]), "true.");
}

#[test]
fn rules_with_bodies_parse() {
    let parse = parse_program("ancestor(X, Z) :- parent(X, Y), ancestor(Y, Z).");
    assert!(parse.is_clean());
    assert_eq!(
        render_rule(&parse.program.rules[0]),
        "ancestor(X, Z) :- parent(X, Y), ancestor(Y, Z)."
    );
}

#[test]
fn nested_compounds_parse() {
    let parse = parse_program("app(cons(H,T),L,cons(H,R)) :- app(T,L,R).");
    assert!(parse.is_clean());
    assert_eq!(
        render_rule(&parse.program.rules[0]),
        "app(cons(H, T), L, cons(H, R)) :- app(T, L, R)."
    );
}

#[test]
fn equality_is_an_ordinary_rule() {
    let parse = parse_program("=(X, X).");
    assert!(parse.is_clean());
    assert_eq!(render_rule(&parse.program.rules[0]), "=(X, X).");
}

#[test]
fn whitespace_and_comments_are_insignificant() {
    let parse = parse_program(indoc! {"
        % facts
        bar(a).
        bar(b).

        foo(X)
            :- bar(X).   % split across lines
    "});
    assert!(parse.is_clean());
    assert_eq!(parse.program.rules.len(), 3);
    assert_eq!(render_rule(&parse.program.rules[2]), "foo(X) :- bar(X).");
}

#[test]
fn printed_terms_reparse_structurally_equal() {
    let parse = parse_program("app(cons(H,T), L, cons(H,R)) :- app(T,L,R).");
    let printed: Vec<_> = parse.program.rules.iter().map(render_rule).collect();
    let reparse = parse_program(&printed.join("\n"));
    assert!(reparse.is_clean());
    assert_eq!(parse.program, reparse.program);
}

#[test]
fn missing_dot_is_reported() {
    let parse = parse_program("foo(a)");
    assert_eq!(parse.errors.len(), 1);
    assert!(parse.errors[0].message.contains("expected `.`"));
}

#[test]
fn unclosed_argument_list_is_reported() {
    let parse = parse_program("foo(a, b.");
    assert_eq!(parse.errors.len(), 1);
    assert!(parse.errors[0].message.contains("expected `)`"));
}

#[test]
fn empty_argument_list_is_rejected() {
    let parse = parse_program("foo().");
    assert!(!parse.is_clean());
    assert!(parse.errors[0].message.contains("expected a term"));
}

#[test]
fn parser_recovers_at_the_next_dot() {
    let parse = parse_program("good(a). broken :- . fine(b).");
    assert_eq!(parse.errors.len(), 1);
    // Both well-formed rules survive the bad one.
    assert_eq!(parse.program.rules.len(), 2);
    assert_eq!(render_rule(&parse.program.rules[0]), "good(a).");
    assert_eq!(render_rule(&parse.program.rules[1]), "fine(b).");
}

#[test]
fn queries_parse_to_goal_lists() {
    let goals = parse_query("p(X), q(X).").expect("query parses");
    assert_eq!(goals.len(), 2);
    assert_eq!(render(&goals[0]), "p(X)");
    assert_eq!(render(&goals[1]), "q(X)");
}

#[test]
fn empty_queries_are_rejected() {
    let errors = parse_query(".").unwrap_err();
    assert!(errors[0].message.contains("expected a goal"));
}

#[test]
fn queries_require_a_terminating_dot() {
    let errors = parse_query("p(X)").unwrap_err();
    assert!(errors[0].message.contains("expected `.`"));
}

#[test]
fn trailing_input_after_a_query_is_rejected() {
    let errors = parse_query("p(X). q(X).").unwrap_err();
    assert!(errors[0].message.contains("end of input"));
}
