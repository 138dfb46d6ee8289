//! Lowering parsed rules into core terms.
//!
//! Lowering interns every name and attaches each rule's variables to one
//! freshly allocated scope. Repeated textual names within a rule become
//! the same `(name, scope)` value, which is all the sharing the engine
//! needs.

use hornlog_core::{Interner, Rule, ScopeId, Store, Symbol, Term};

use crate::ast::{ProgramAst, RuleAst, TermAst};

/// Head functor of the synthetic rule a query is lowered into.
const QUERY_HEAD: &str = "goal";

/// Intern and scope every rule of a program, in program order.
pub fn lower_program(program: &ProgramAst, interner: &mut Interner, store: &mut Store) -> Vec<Rule> {
    program
        .rules
        .iter()
        .map(|rule| lower_rule(rule, interner, store))
        .collect()
}

/// Lower one rule, allocating its scope.
pub fn lower_rule(rule: &RuleAst, interner: &mut Interner, store: &mut Store) -> Rule {
    let scope = store.alloc_scope();
    Rule {
        head: lower_term(&rule.head, scope, interner),
        body: rule
            .body
            .iter()
            .map(|goal| lower_term(goal, scope, interner))
            .collect(),
        scope,
    }
}

/// Lower a query into the body of a synthetic rule `goal :- <query>.`.
///
/// The synthetic rule's scope is where the answer bindings accumulate.
/// Also returns the query's variable names in first-occurrence order,
/// which is the order answers are reported in.
pub fn lower_query(
    goals: &[TermAst],
    interner: &mut Interner,
    store: &mut Store,
) -> (Rule, Vec<Symbol>) {
    let scope = store.alloc_scope();
    let body: Vec<Term> = goals
        .iter()
        .map(|goal| lower_term(goal, scope, interner))
        .collect();

    let mut vars = Vec::new();
    for goal in goals {
        collect_vars(goal, interner, &mut vars);
    }

    let rule = Rule {
        head: Term::atom(interner.intern(QUERY_HEAD)),
        body,
        scope,
    };
    (rule, vars)
}

fn lower_term(ast: &TermAst, scope: ScopeId, interner: &mut Interner) -> Term {
    match ast {
        TermAst::Var { name, .. } => Term::var(interner.intern(name), scope),
        TermAst::App { functor, args, .. } => Term::app(
            interner.intern(functor),
            args.iter()
                .map(|arg| lower_term(arg, scope, interner))
                .collect(),
        ),
    }
}

fn collect_vars(ast: &TermAst, interner: &mut Interner, vars: &mut Vec<Symbol>) {
    match ast {
        TermAst::Var { name, .. } => {
            let sym = interner.intern(name);
            if !vars.contains(&sym) {
                vars.push(sym);
            }
        }
        TermAst::App { args, .. } => {
            for arg in args {
                collect_vars(arg, interner, vars);
            }
        }
    }
}
