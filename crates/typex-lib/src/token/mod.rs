//! Generic type tokens.
//!
//! A [`TypeToken`] is a validated, immutable handle on a concrete type
//! expression: a class, an array or a parameterized type, never a bare type
//! variable or wildcard. Tokens compare by the expression they hold.

mod cache;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use typex_core::{ClassName, Error, ImportContext, ParameterizedType, Result, Ty, TypeCatalog};

use crate::analyze::erase;
use crate::parser::{TypeParser, parse_type};

pub use cache::TokenCache;

#[derive(Clone)]
pub struct TypeToken {
    inner: Arc<TokenInner>,
}

#[derive(Debug)]
struct TokenInner {
    ty: Ty,
    raw: ClassName,
}

impl TypeToken {
    /// Validate `ty` and wrap it, bypassing the canonical cache.
    pub fn new(ty: Ty) -> Result<Self> {
        match &ty {
            Ty::Variable(_) => {
                return Err(Error::invalid(format!(
                    "type token cannot be a type variable: {ty}"
                )));
            }
            Ty::Wildcard(_) => {
                return Err(Error::invalid(format!(
                    "type token cannot be a wildcard type: {ty}"
                )));
            }
            _ => {}
        }
        let raw = erase(&ty)?;
        Ok(Self {
            inner: Arc::new(TokenInner { ty, raw }),
        })
    }

    /// Token for a class; needs no validation.
    pub(crate) fn class_token(class: ClassName) -> Self {
        Self {
            inner: Arc::new(TokenInner {
                ty: Ty::Class(class.clone()),
                raw: class,
            }),
        }
    }

    /// Canonical token for `ty` from the process-wide cache.
    pub fn get(ty: Ty) -> Result<Self> {
        TokenCache::global().get(&ty)
    }

    /// Canonical token for a class.
    pub fn of(class: impl Into<ClassName>) -> Self {
        TokenCache::global().class(class.into())
    }

    /// Canonical token for `raw<args...>`; no arguments means `raw` itself.
    pub fn parameterized<C: TypeCatalog + ?Sized>(
        catalog: &C,
        raw: impl Into<ClassName>,
        args: Vec<Ty>,
    ) -> Result<Self> {
        let raw = raw.into();
        if args.is_empty() {
            return Ok(Self::of(raw));
        }
        let ty = ParameterizedType::new(catalog, None, raw, args)?;
        Self::get(ty.into())
    }

    /// Canonical token for fully-qualified type text.
    pub fn value_of<C: TypeCatalog + ?Sized>(catalog: &C, text: &str) -> Result<Self> {
        Self::get(parse_type(catalog, text)?)
    }

    /// Canonical token for type text, resolving simple names against `imports`.
    pub fn value_of_with_imports<C: TypeCatalog + ?Sized>(
        catalog: &C,
        text: &str,
        imports: &ImportContext,
    ) -> Result<Self> {
        Self::get(TypeParser::new(catalog).imports(imports).parse(text)?)
    }

    pub fn ty(&self) -> &Ty {
        &self.inner.ty
    }

    /// Erasure of the wrapped type.
    pub fn raw_type(&self) -> &ClassName {
        &self.inner.raw
    }

    pub fn to_unqualified_string(&self) -> String {
        self.inner.ty.to_unqualified_string()
    }

    /// Whether both handles share one allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.inner.ty == other.inner.ty
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.ty.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeToken").field(&self.inner.ty).finish()
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.ty, f)
    }
}

impl TryFrom<Ty> for TypeToken {
    type Error = Error;

    fn try_from(ty: Ty) -> Result<Self> {
        Self::get(ty)
    }
}
