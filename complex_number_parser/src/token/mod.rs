//! Token definitions for the complex-number lexer
//!
//! The textual forms are `(<real>, <imag>)` and `(<magnitude> > <degrees>)`.
//! Only numbers carry meaning; every punctuation character is a delimiter
//! whose exact identity the reader does not check.


use logos::Logos;

/// Complex-form tokens
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // ==================== Brackets ====================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // ==================== Separators ====================
    #[token(",")]
    Comma,
    #[token(">")]
    Greater,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,

    // Any other single punctuation character (`<`, `|`, `/`, ...)
    #[regex(r"[^ \t\r\n\fA-Za-z0-9_.+\-()\[\]{},>;:]")]
    Punct,

    // ==================== Numbers ====================
    // A leading sign belongs to the number: `(-2, -2)`.
    #[regex(r"[+-]?[0-9]+")]
    IntegerLiteral,
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    FloatLiteral,
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?")]
    FloatLeadingDot,
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    FloatExponent,

    // ==================== Words ====================
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    // ==================== Error ====================
    /// Input the lexer could not classify (a lone `+`, `.`, ...)
    Error,
}

impl Token {
    /// Check if this token is a numeric literal
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Token::IntegerLiteral
                | Token::FloatLiteral
                | Token::FloatLeadingDot
                | Token::FloatExponent
        )
    }

    /// Check if this token may stand in a delimiter position
    ///
    /// Brackets, separators and other punctuation are interchangeable here.
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            Token::LParen
                | Token::RParen
                | Token::LBracket
                | Token::RBracket
                | Token::LBrace
                | Token::RBrace
                | Token::Comma
                | Token::Greater
                | Token::Semicolon
                | Token::Colon
                | Token::Punct
        )
    }

    /// Short human-readable category for error messages
    pub fn describe(&self) -> &'static str {
        match self {
            t if t.is_number() => "number",
            t if t.is_delimiter() => "delimiter",
            Token::Word => "word",
            _ => "unrecognized input",
        }
    }
}
