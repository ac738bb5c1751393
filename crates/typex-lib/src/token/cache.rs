//! Canonical token cache.
//!
//! Lookups go through a sharded concurrent map, so readers never block each
//! other. Two callers missing on the same key at once may both build a token;
//! only the first insertion is kept and both receive equal tokens.

use std::sync::LazyLock;

use dashmap::DashMap;
use typex_core::well_known::{OBJECT, STRING};
use typex_core::{ClassName, Primitive, Result, Ty};

use super::TypeToken;

static GLOBAL: LazyLock<TokenCache> = LazyLock::new(TokenCache::new);

/// Memoizes one [`TypeToken`] per distinct type expression.
///
/// Entries are only ever added.
pub struct TokenCache {
    tokens: DashMap<Ty, TypeToken>,
}

impl TokenCache {
    /// A cache seeded with `java.lang.Object`, the boxed primitive wrappers
    /// and `java.lang.String`.
    pub fn new() -> Self {
        let cache = Self {
            tokens: DashMap::new(),
        };
        let boxed = Primitive::ALL
            .into_iter()
            .filter(|p| *p != Primitive::Void)
            .map(Primitive::boxed);
        for name in std::iter::once(OBJECT).chain(boxed).chain([STRING]) {
            let class = ClassName::new(name);
            cache.insert(TypeToken::class_token(class));
        }
        cache
    }

    /// The process-wide cache.
    pub fn global() -> &'static TokenCache {
        &GLOBAL
    }

    /// Token for `ty`, validating and inserting it on first request.
    pub fn get(&self, ty: &Ty) -> Result<TypeToken> {
        if let Some(token) = self.lookup(ty) {
            return Ok(token);
        }
        Ok(self.insert(TypeToken::new(ty.clone())?))
    }

    /// Token for a class. Classes always validate.
    pub fn class(&self, class: ClassName) -> TypeToken {
        let token = TypeToken::class_token(class);
        self.lookup(token.ty()).unwrap_or_else(|| self.insert(token))
    }

    pub fn contains(&self, ty: &Ty) -> bool {
        self.tokens.contains_key(ty)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn lookup(&self, ty: &Ty) -> Option<TypeToken> {
        self.tokens.get(ty).map(|entry| entry.value().clone())
    }

    /// Keeps an existing entry if another caller won the race.
    fn insert(&self, token: TypeToken) -> TypeToken {
        tracing::trace!(ty = %token, "caching type token");
        self.tokens
            .entry(token.ty().clone())
            .or_insert(token)
            .value()
            .clone()
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
