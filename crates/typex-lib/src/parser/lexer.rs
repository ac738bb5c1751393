//! Lexer for type text.
//!
//! Produces span-based tokens without storing text; text is sliced from the
//! source only when needed.
//!
//! Consecutive characters that match no token are coalesced into a single
//! `Garbage` token rather than producing one error per character.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("<")]
    AngleOpen,

    #[token(">")]
    AngleClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("?")]
    Question,

    #[token("&")]
    Ampersand,

    #[token("extends")]
    KwExtends,

    #[token("super")]
    KwSuper,

    /// Java-style identifier; `$` separates nested classes in binary names.
    #[regex(r"[\p{L}_$][\p{L}\p{N}_$]*")]
    Ident,

    /// Coalesced run of unrecognized characters.
    Garbage,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        self == Self::Whitespace
    }

    /// Human-readable description for syntax errors.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::AngleOpen => "`<`",
            Self::AngleClose => "`>`",
            Self::BracketOpen => "`[`",
            Self::BracketClose => "`]`",
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::Question => "`?`",
            Self::Ampersand => "`&`",
            Self::KwExtends => "`extends`",
            Self::KwSuper => "`super`",
            Self::Ident => "identifier",
            Self::Garbage => "unexpected characters",
        }
    }
}

/// Zero-copy token: kind + byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes type text into span-based tokens, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut garbage_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = garbage_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, start..end));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if garbage_start.is_none() {
                    garbage_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = garbage_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.clone()]
}
