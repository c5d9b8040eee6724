//! Lexer for complex-number strings
//!
//! Wraps the logos-generated lexer with spans, source text and one token of
//! lookahead. Unlexable input is surfaced as [`Token::Error`] so the reader
//! can report it against the form it was dispatched to.

use std::fmt;

use logos::Logos;

use crate::span::Span;
use crate::token::Token;

/// A token with its span
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpannedToken<'a> {
    pub token: Token,
    pub span: Span,
    pub text: &'a str,
}

impl<'a> SpannedToken<'a> {
    pub fn new(token: Token, span: Span, text: &'a str) -> Self {
        Self { token, span, text }
    }
}

/// Complex-form lexer
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, Token>,
    /// Peeked token (for lookahead)
    peeked: Option<Option<SpannedToken<'a>>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            peeked: None,
        }
    }

    /// Get the source string
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Peek at the next token without consuming it
    pub fn peek(&mut self) -> Option<&SpannedToken<'a>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.next_token_internal());
        }
        self.peeked.as_ref().and_then(|t| t.as_ref())
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Option<SpannedToken<'a>> {
        if let Some(peeked) = self.peeked.take() {
            return peeked;
        }
        self.next_token_internal()
    }

    /// Zero-width span at the end of the source
    pub fn eof_span(&self) -> Span {
        Span::at(self.source.len())
    }

    fn next_token_internal(&mut self) -> Option<SpannedToken<'a>> {
        let result = self.inner.next()?;
        let range = self.inner.span();
        let text = &self.source[range.clone()];
        let token = result.unwrap_or(Token::Error);
        Some(SpannedToken::new(token, range.into(), text))
    }
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("source", &self.source)
            .field("position", &self.inner.span().end)
            .finish()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = SpannedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize a complex-number string
pub fn tokenize(source: &str) -> Vec<SpannedToken<'_>> {
    Lexer::new(source).collect()
}
