//! Parse error types

use crate::span::Span;
use thiserror::Error;

/// Parse error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input string has zero length
    #[error("empty string")]
    Empty,

    /// Input contains neither ',' nor '>'
    #[error("invalid string format: expected '(real, imag)' or '(magnitude > angle)'")]
    UnrecognizedFormat,

    /// Cartesian marker present but the numeric tokens are missing or unparsable
    #[error("malformed cartesian form at column {}: {detail}", .span.column())]
    MalformedCartesian { detail: String, span: Span },

    /// Polar marker present but the numeric tokens are missing or unparsable
    #[error("malformed polar form at column {}: {detail}", .span.column())]
    MalformedPolar { detail: String, span: Span },
}

impl ParseError {
    /// Get the span of the error
    pub fn span(&self) -> Option<&Span> {
        match self {
            ParseError::Empty | ParseError::UnrecognizedFormat => None,
            ParseError::MalformedCartesian { span, .. } => Some(span),
            ParseError::MalformedPolar { span, .. } => Some(span),
        }
    }

    /// Create a malformed Cartesian error
    pub fn malformed_cartesian(detail: impl Into<String>, span: Span) -> Self {
        ParseError::MalformedCartesian {
            detail: detail.into(),
            span,
        }
    }

    /// Create a malformed polar error
    pub fn malformed_polar(detail: impl Into<String>, span: Span) -> Self {
        ParseError::MalformedPolar {
            detail: detail.into(),
            span,
        }
    }

    /// Format error with source context
    ///
    /// Returns the source line holding the error with a `^` marker under the
    /// offending span, or an empty string for errors without a span.
    pub fn format_with_context(&self, source: &str) -> String {
        let Some(span) = self.span() else {
            return String::new();
        };

        let start = span.start.min(source.len());
        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[start..]
            .find('\n')
            .map_or(source.len(), |i| start + i);
        let line = &source[line_start..line_end];
        let line_no = source[..line_start].matches('\n').count() + 1;

        // Caret position and width count characters, not bytes
        let col = source[line_start..start].chars().count();
        let end = span.end.clamp(start, line_end);
        let len = source[start..end].chars().count().max(1);

        format!(
            "  {} | {}\n  {} | {}{}",
            line_no,
            line,
            " ".repeat(line_no.to_string().len()),
            " ".repeat(col),
            "^".repeat(len)
        )
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
