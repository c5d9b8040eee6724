//! Readers for the Cartesian and polar textual forms
//!
//! A form is recognised by character presence rather than by a grammar:
//! a `,` anywhere selects the Cartesian reader, otherwise a `>` selects the
//! polar reader. Both readers then accept the same token shape
//!
//! ```text
//! [open] <number> <separator> <number> [close]
//! ```
//!
//! where `open`, `separator` and `close` are single delimiter tokens whose
//! exact character is not checked.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, SpannedToken};
use crate::span::Span;

/// Numeric parts read from a string, before conversion to a complex value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum Form {
    /// `(<real>, <imag>)`
    Cartesian { real: f64, imag: f64 },
    /// `(<magnitude> > <degrees>)`
    Polar { magnitude: f64, degrees: f64 },
}

/// Which textual form a reader is working on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Cartesian,
    Polar,
}

impl FormKind {
    /// Pick a form by character presence, `,` taking precedence over `>`
    pub fn detect(source: &str) -> Option<FormKind> {
        if source.contains(',') {
            Some(FormKind::Cartesian)
        } else if source.contains('>') {
            Some(FormKind::Polar)
        } else {
            None
        }
    }

    fn component_names(&self) -> (&'static str, &'static str) {
        match self {
            FormKind::Cartesian => ("real part", "imaginary part"),
            FormKind::Polar => ("magnitude", "angle"),
        }
    }

    fn malformed(&self, detail: String, span: Span) -> ParseError {
        match self {
            FormKind::Cartesian => ParseError::malformed_cartesian(detail, span),
            FormKind::Polar => ParseError::malformed_polar(detail, span),
        }
    }
}

/// Read a string in either form
///
/// # Example
///
/// ```
/// use complex_number_parser::{read_form, Form};
///
/// let form = read_form("(3,4)").unwrap();
/// assert_eq!(form, Form::Cartesian { real: 3.0, imag: 4.0 });
/// ```
pub fn read_form(source: &str) -> ParseResult<Form> {
    if source.is_empty() {
        return Err(ParseError::Empty);
    }

    let kind = FormKind::detect(source).ok_or(ParseError::UnrecognizedFormat)?;
    trace!(?kind, source, "dispatching complex form");

    match kind {
        FormKind::Cartesian => read_cartesian(source),
        FormKind::Polar => read_polar(source),
    }
}

/// Read `(<real>, <imag>)`
pub fn read_cartesian(source: &str) -> ParseResult<Form> {
    let (real, imag) = PairReader::new(source, FormKind::Cartesian).read()?;
    Ok(Form::Cartesian { real, imag })
}

/// Read `(<magnitude> > <degrees>)`
pub fn read_polar(source: &str) -> ParseResult<Form> {
    let (magnitude, degrees) = PairReader::new(source, FormKind::Polar).read()?;
    Ok(Form::Polar { magnitude, degrees })
}

struct PairReader<'a> {
    lexer: Lexer<'a>,
    kind: FormKind,
}

impl<'a> PairReader<'a> {
    fn new(source: &'a str, kind: FormKind) -> Self {
        Self {
            lexer: Lexer::new(source),
            kind,
        }
    }

    fn read(mut self) -> ParseResult<(f64, f64)> {
        let (first_name, second_name) = self.kind.component_names();

        self.skip_delimiter();
        let first = self.expect_number(first_name)?;
        self.expect_delimiter("separator")?;
        let second = self.expect_number(second_name)?;
        self.skip_delimiter();
        self.expect_end()?;

        Ok((first, second))
    }

    /// Consume the next token if it is a delimiter
    fn skip_delimiter(&mut self) {
        if self.lexer.peek().is_some_and(|t| t.token.is_delimiter()) {
            self.lexer.next_token();
        }
    }

    fn expect_number(&mut self, name: &str) -> ParseResult<f64> {
        match self.lexer.next_token() {
            Some(tok) if tok.token.is_number() => tok.text.parse::<f64>().map_err(|e| {
                self.reject(
                    format!("invalid number literal '{}' for {}: {}", tok.text, name, e),
                    tok.span,
                )
            }),
            Some(tok) => Err(self.unexpected(name, &tok)),
            None => Err(self.reject(
                format!("expected {}, found end of input", name),
                self.lexer.eof_span(),
            )),
        }
    }

    fn expect_delimiter(&mut self, name: &str) -> ParseResult<()> {
        match self.lexer.next_token() {
            Some(tok) if tok.token.is_delimiter() => Ok(()),
            Some(tok) => Err(self.unexpected(name, &tok)),
            None => Err(self.reject(
                format!("expected {}, found end of input", name),
                self.lexer.eof_span(),
            )),
        }
    }

    fn expect_end(&mut self) -> ParseResult<()> {
        let Some(first) = self.lexer.next_token() else {
            return Ok(());
        };
        let span = self
            .lexer
            .by_ref()
            .fold(first.span, |acc, tok| acc.merge(&tok.span));
        let trailing = &self.lexer.source()[span.start..span.end];
        Err(self.reject(format!("unexpected trailing input '{}'", trailing), span))
    }

    fn unexpected(&self, expected: &str, found: &SpannedToken<'_>) -> ParseError {
        self.reject(
            format!(
                "expected {}, found {} '{}'",
                expected,
                found.token.describe(),
                found.text
            ),
            found.span,
        )
    }

    fn reject(&self, detail: String, span: Span) -> ParseError {
        debug!(kind = ?self.kind, %detail, ?span, "rejecting complex form");
        self.kind.malformed(detail, span)
    }
}
