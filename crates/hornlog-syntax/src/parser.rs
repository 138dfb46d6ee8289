//! Recursive-descent parser for programs and queries.
//!
//! The token stream is processed left-to-right with single-token
//! lookahead. Errors are collected rather than thrown; after a bad rule
//! the parser synchronizes to the next `.` so one mistake does not hide
//! the rest of the program.

use crate::ast::{ProgramAst, RuleAst, TermAst};
use crate::error::{Span, SyntaxError};
use crate::lexer::{Token, lex};

/// Parse result: the rules that did parse, plus any errors.
#[derive(Debug, Clone)]
pub struct Parse {
    pub program: ProgramAst,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a program: a sequence of `HEAD.` / `HEAD :- BODY.` rules.
pub fn parse_program(source: &str) -> Parse {
    let (tokens, lex_errors) = lex(source);
    let mut parser = Parser::new(source, tokens);

    let mut rules = Vec::new();
    while !parser.eof() {
        match parser.rule() {
            Some(rule) => rules.push(rule),
            None => parser.synchronize(),
        }
    }

    let mut errors = lex_errors;
    errors.extend(parser.errors);
    Parse {
        program: ProgramAst { rules },
        errors,
    }
}

/// Parse a query: a non-empty comma-separated goal list terminated by `.`.
pub fn parse_query(source: &str) -> Result<Vec<TermAst>, Vec<SyntaxError>> {
    let (tokens, lex_errors) = lex(source);
    let mut parser = Parser::new(source, tokens);

    let goals = parser.goal_list();

    let mut errors = lex_errors;
    errors.extend(parser.errors);
    match goals {
        Some(goals) if errors.is_empty() => Ok(goals),
        _ => Err(errors),
    }
}

struct Parser<'src> {
    tokens: Vec<(Token<'src>, Span)>,
    /// Current position in `tokens`. Monotonically increases.
    pos: usize,
    errors: Vec<SyntaxError>,
    /// Source length, for errors at end of input.
    eof_at: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &str, tokens: Vec<(Token<'src>, Span)>) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            eof_at: source.len(),
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn current(&self) -> Option<(Token<'src>, Span)> {
        self.tokens.get(self.pos).cloned()
    }

    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or_else(|| Span::point(self.eof_at), |(_, span)| *span)
    }

    fn bump(&mut self) -> Option<(Token<'src>, Span)> {
        let pair = self.current();
        if pair.is_some() {
            self.pos += 1;
        }
        pair
    }

    fn at(&self, wanted: impl Fn(&Token<'src>) -> bool) -> bool {
        self.tokens.get(self.pos).is_some_and(|(token, _)| wanted(token))
    }

    fn eat(&mut self, wanted: impl Fn(&Token<'src>) -> bool) -> bool {
        if self.at(wanted) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Record "expected X, found Y" at the current token, without
    /// consuming it (the caller decides how to recover).
    fn error_expected(&mut self, what: &str) {
        let message = match self.current() {
            Some((token, _)) => format!("expected {}, found {}", what, token.describe()),
            None => format!("expected {}", what),
        };
        self.errors.push(SyntaxError::new(self.current_span(), message));
    }

    /// Skip to just past the next `.` so the following rule can parse.
    fn synchronize(&mut self) {
        while let Some((token, _)) = self.bump() {
            if matches!(token, Token::Dot) {
                break;
            }
        }
    }

    fn term(&mut self) -> Option<TermAst> {
        let Some((token, span)) = self.current() else {
            self.error_expected("a term");
            return None;
        };
        match token {
            Token::Variable(name) => {
                self.pos += 1;
                Some(TermAst::Var {
                    name: name.to_owned(),
                    span,
                })
            }
            Token::Functor(name) => {
                self.pos += 1;
                if !self.eat(|t| matches!(t, Token::LParen)) {
                    return Some(TermAst::App {
                        functor: name.to_owned(),
                        args: Vec::new(),
                        span,
                    });
                }
                let mut args = vec![self.term()?];
                while self.eat(|t| matches!(t, Token::Comma)) {
                    args.push(self.term()?);
                }
                match self.current() {
                    Some((Token::RParen, close)) => {
                        self.pos += 1;
                        Some(TermAst::App {
                            functor: name.to_owned(),
                            args,
                            span: Span::new(span.start, close.end),
                        })
                    }
                    _ => {
                        self.error_expected("`)` or `,` in the argument list");
                        None
                    }
                }
            }
            _ => {
                self.error_expected("a term");
                None
            }
        }
    }

    fn rule(&mut self) -> Option<RuleAst> {
        let head = self.term()?;
        let mut body = Vec::new();
        if self.eat(|t| matches!(t, Token::Neck)) {
            body.push(self.term()?);
            while self.eat(|t| matches!(t, Token::Comma)) {
                body.push(self.term()?);
            }
        }
        if self.eat(|t| matches!(t, Token::Dot)) {
            Some(RuleAst { head, body })
        } else {
            self.error_expected("`.` at the end of the rule");
            None
        }
    }

    fn goal_list(&mut self) -> Option<Vec<TermAst>> {
        if self.eof() || self.at(|t| matches!(t, Token::Dot)) {
            self.error_expected("a goal");
            return None;
        }
        let mut goals = vec![self.term()?];
        while self.eat(|t| matches!(t, Token::Comma)) {
            goals.push(self.term()?);
        }
        if !self.eat(|t| matches!(t, Token::Dot)) {
            self.error_expected("`.` at the end of the query");
            return None;
        }
        if !self.eof() {
            self.error_expected("end of input after the query");
            return None;
        }
        Some(goals)
    }
}
