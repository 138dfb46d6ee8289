//! Parsed surface syntax, before names are interned and variables are
//! attached to scopes.

use crate::error::Span;

/// A parsed term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermAst {
    /// Uppercase-initial identifier.
    Var { name: String, span: Span },
    /// Functor with ordered arguments; no arguments is an atom.
    App {
        functor: String,
        args: Vec<TermAst>,
        span: Span,
    },
}

impl TermAst {
    pub fn span(&self) -> Span {
        match self {
            TermAst::Var { span, .. } => *span,
            TermAst::App { span, .. } => *span,
        }
    }
}

/// `HEAD.` or `HEAD :- BODY.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleAst {
    pub head: TermAst,
    pub body: Vec<TermAst>,
}

/// A sequence of rules in program order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgramAst {
    pub rules: Vec<RuleAst>,
}
