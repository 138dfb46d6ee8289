//! Token definitions and the lexing entry point.
//!
//! `:-` and `.` are hard delimiter tokens, scanned ahead of identifiers,
//! so an identifier can never swallow them. Identifiers may contain
//! `=`, `-`, `+`, `?`, `*` in addition to alphanumerics and `_`; a
//! symbol-initial identifier (like the bare `=`) is a functor.

use logos::Logos;

use crate::error::{Span, SyntaxError};

#[derive(Logos)]
#[cfg_attr(test, derive(serde::Serialize))]
#[derive(Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip(r"%[^\n]*", allow_greedy = true))]
pub enum Token<'src> {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(":-")]
    Neck,

    #[token(".")]
    Dot,

    /// Uppercase-initial identifier: a variable.
    #[regex(r"[A-Z][A-Za-z0-9_+\-=?*]*")]
    Variable(&'src str),

    /// Lowercase- or symbol-initial identifier: a functor (an atom when
    /// it has no argument list).
    #[regex(r"[a-z][A-Za-z0-9_+\-=?*]*")]
    #[regex(r"[=+?*-][A-Za-z0-9_+\-=?*]*")]
    Functor(&'src str),
}

impl Token<'_> {
    /// Short description for "expected X, found Y" messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::LParen => "`(`",
            Token::RParen => "`)`",
            Token::Comma => "`,`",
            Token::Neck => "`:-`",
            Token::Dot => "`.`",
            Token::Variable(_) => "a variable",
            Token::Functor(_) => "a functor",
        }
    }
}

/// Lex a source string into spanned tokens.
///
/// Runs of characters no token matches are reported as one error per run;
/// lexing continues after them so the parser still sees the rest of the
/// input.
pub fn lex(source: &str) -> (Vec<(Token<'_>, Span)>, Vec<SyntaxError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut error_span: Option<Span> = None;

    let mut lexer = Token::lexer(source);
    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(token) => {
                if let Some(bad) = error_span.take() {
                    errors.push(unexpected(source, bad));
                }
                tokens.push((token, span));
            }
            Err(()) => match &mut error_span {
                None => error_span = Some(span),
                Some(existing) => existing.end = span.end,
            },
        }
    }
    if let Some(bad) = error_span.take() {
        errors.push(unexpected(source, bad));
    }

    (tokens, errors)
}

fn unexpected(source: &str, span: Span) -> SyntaxError {
    SyntaxError::new(
        span,
        format!("unexpected characters `{}`", &source[span.start..span.end]),
    )
}
