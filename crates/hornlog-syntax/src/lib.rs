//! Surface syntax for hornlog.
//!
//! Text goes through three stages: the logos [`lexer`] produces spanned
//! tokens, the recursive-descent [`parser`] builds an AST with collected
//! syntax errors, and [`lower`] interns names and attaches variables to
//! scopes, producing the core [`Rule`](hornlog_core::Rule)s the engine
//! executes.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod lower;
pub mod parser;

pub use ast::{ProgramAst, RuleAst, TermAst};
pub use error::{Span, SyntaxError, render_errors};
pub use lower::{lower_program, lower_query, lower_rule};
pub use parser::{Parse, parse_program, parse_query};

#[cfg(test)]
mod parser_tests;
