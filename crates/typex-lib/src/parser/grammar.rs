//! Grammar productions.

use typex_core::{ClassName, Error, ParameterizedType, Result, Ty, TypeCatalog, WildcardType};

use super::core::Parser;
use super::lexer::TokenKind;

impl<'src, C: TypeCatalog + ?Sized> Parser<'src, '_, C> {
    /// `root = type EOF`
    pub(super) fn parse_root(&mut self) -> Result<Ty> {
        if self.peek().is_none() {
            return Err(self.unexpected("a type"));
        }
        let ty = self.parse_type()?;
        if self.peek().is_some() {
            return Err(self.unexpected("end of input"));
        }
        Ok(ty)
    }

    /// `type = qualified_name array_suffix* generic_args? array_suffix* | wildcard`
    fn parse_type(&mut self) -> Result<Ty> {
        self.enter()?;
        let ty = if self.at(TokenKind::Question) {
            self.parse_wildcard()
        } else {
            self.parse_named_type()
        };
        self.exit();
        ty
    }

    fn parse_named_type(&mut self) -> Result<Ty> {
        let start = self.offset();
        let segments = self.parse_qualified_name()?;
        let mut dims = self.parse_array_suffixes()?;
        let base = self.names.resolve(&segments)?;

        let ty = if self.at(TokenKind::AngleOpen) {
            let args = self.parse_generic_args()?;
            let raw = match base {
                Ty::Class(class) => class,
                Ty::Variable(v) => {
                    return Err(Error::invalid(format!(
                        "type variable {} cannot have type arguments",
                        v.name()
                    )));
                }
                other => {
                    return Err(Error::syntax(
                        start,
                        format!("{other} cannot have type arguments"),
                    ));
                }
            };
            ParameterizedType::new(self.names.catalog(), None, raw, args)?.into()
        } else {
            base
        };

        dims += self.parse_array_suffixes()?;
        if dims > usize::from(ClassName::MAX_DIMS) {
            return Err(Error::too_many_dimensions());
        }
        Ok((0..dims).fold(ty, |ty, _| Ty::array_of(ty)))
    }

    /// `qualified_name = IDENT ("." IDENT)*`
    fn parse_qualified_name(&mut self) -> Result<Vec<&'src str>> {
        let mut segments = vec![self.expect(TokenKind::Ident)?];
        while self.eat(TokenKind::Dot) {
            segments.push(self.expect(TokenKind::Ident)?);
        }
        Ok(segments)
    }

    /// `array_suffix = "[" "]"`
    fn parse_array_suffixes(&mut self) -> Result<usize> {
        let mut dims = 0;
        while self.eat(TokenKind::BracketOpen) {
            self.expect(TokenKind::BracketClose)?;
            dims += 1;
        }
        Ok(dims)
    }

    /// `generic_args = "<" type ("," type)* ">"`
    fn parse_generic_args(&mut self) -> Result<Vec<Ty>> {
        self.expect(TokenKind::AngleOpen)?;
        let mut args = vec![self.parse_type()?];
        while self.eat(TokenKind::Comma) {
            args.push(self.parse_type()?);
        }
        self.expect(TokenKind::AngleClose)?;
        Ok(args)
    }

    /// `wildcard = "?" ("extends" bounds)? ("super" bounds)?`
    fn parse_wildcard(&mut self) -> Result<Ty> {
        self.expect(TokenKind::Question)?;
        let upper = if self.eat(TokenKind::KwExtends) {
            self.parse_bounds()?
        } else {
            Vec::new()
        };
        let lower = if self.eat(TokenKind::KwSuper) {
            self.parse_bounds()?
        } else {
            Vec::new()
        };
        Ok(Ty::Wildcard(WildcardType::new(upper, lower)))
    }

    fn parse_bounds(&mut self) -> Result<Vec<Ty>> {
        let mut bounds = vec![self.parse_bound()?];
        while self.eat(TokenKind::Ampersand) {
            bounds.push(self.parse_bound()?);
        }
        Ok(bounds)
    }

    fn parse_bound(&mut self) -> Result<Ty> {
        if self.at(TokenKind::Question) {
            return Err(Error::invalid("wildcard bound cannot be a wildcard"));
        }
        self.enter()?;
        let bound = self.parse_named_type();
        self.exit();
        bound
    }
}
