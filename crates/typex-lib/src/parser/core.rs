//! Parser state and low-level token operations.

use typex_core::{Error, Result, TypeCatalog};

use super::lexer::{Token, TokenKind, token_text};
use super::names::Names;

pub(super) struct Parser<'src, 'a, C: ?Sized> {
    pub(super) source: &'src str,
    tokens: Vec<Token>,
    /// Index of the next unconsumed token. Monotonically increases.
    pos: usize,
    depth: u32,
    max_depth: u32,
    pub(super) names: Names<'a, C>,
}

impl<'src, 'a, C: TypeCatalog + ?Sized> Parser<'src, 'a, C> {
    pub(super) fn new(
        source: &'src str,
        tokens: Vec<Token>,
        names: Names<'a, C>,
        max_depth: u32,
    ) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
            names,
        }
    }

    fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|token| token.kind.is_trivia())
        {
            self.pos += 1;
        }
    }

    /// Next non-trivia token kind, `None` at end of input.
    pub(super) fn peek(&mut self) -> Option<TokenKind> {
        self.skip_trivia();
        self.tokens.get(self.pos).map(|token| token.kind)
    }

    pub(super) fn at(&mut self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Byte offset of the next non-trivia token, or the end of input.
    pub(super) fn offset(&mut self) -> usize {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or(self.source.len(), |token| token.span.start)
    }

    /// Consume the next non-trivia token and return its text.
    pub(super) fn bump(&mut self) -> &'src str {
        self.skip_trivia();
        let source = self.source;
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token_text(source, token)
            }
            None => "",
        }
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: TokenKind) -> Result<&'src str> {
        if self.at(kind) {
            return Ok(self.bump());
        }
        Err(self.unexpected(kind.describe()))
    }

    /// Syntax error at the current position: "expected X, found Y".
    pub(super) fn unexpected(&mut self, expected: &str) -> Error {
        let offset = self.offset();
        let found = match self.tokens.get(self.pos) {
            Some(token) if token.kind == TokenKind::Garbage => {
                format!("`{}`", token_text(self.source, token))
            }
            Some(token) => token.kind.describe().to_owned(),
            None => "end of input".to_owned(),
        };
        Error::syntax(offset, format!("expected {expected}, found {found}"))
    }

    pub(super) fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit(&mut self) {
        self.depth -= 1;
    }
}
