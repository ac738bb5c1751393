//! Canonical tokens for common collection types.
//!
//! The plain forms use unbounded wildcards (`list` is `java.util.List<?>`); the
//! `_of` forms take explicit arguments. All of them go through the
//! process-wide [`TokenCache`](crate::token::TokenCache).

use typex_core::well_known::{
    COLLECTION, COMPARATOR, ENUMERATION, ITERATOR, LIST, LIST_ITERATOR, MAP, QUEUE, SET,
    SORTED_MAP, SORTED_SET,
};
use typex_core::{ClassName, ParameterizedType, Result, Ty, TypeCatalog};

use crate::token::TypeToken;

fn unbounded<C: TypeCatalog + ?Sized>(catalog: &C, raw: &str) -> Result<TypeToken> {
    let ty = ParameterizedType::unbounded(catalog, ClassName::new(raw))?;
    TypeToken::get(ty.into())
}

fn applied<C: TypeCatalog + ?Sized>(catalog: &C, raw: &str, args: Vec<Ty>) -> Result<TypeToken> {
    let ty = ParameterizedType::new(catalog, None, ClassName::new(raw), args)?;
    TypeToken::get(ty.into())
}

macro_rules! unary {
    ($($name:ident, $name_of:ident => $raw:expr;)*) => {$(
        #[doc = concat!("`", stringify!($name), "<?>`")]
        pub fn $name<C: TypeCatalog + ?Sized>(catalog: &C) -> Result<TypeToken> {
            unbounded(catalog, $raw)
        }

        #[doc = concat!("`", stringify!($name), "<element>`")]
        pub fn $name_of<C: TypeCatalog + ?Sized>(catalog: &C, element: Ty) -> Result<TypeToken> {
            applied(catalog, $raw, vec![element])
        }
    )*};
}

unary! {
    comparator, comparator_of => COMPARATOR;
    enumeration, enumeration_of => ENUMERATION;
    iterator, iterator_of => ITERATOR;
    list_iterator, list_iterator_of => LIST_ITERATOR;
    collection, collection_of => COLLECTION;
    set, set_of => SET;
    sorted_set, sorted_set_of => SORTED_SET;
    list, list_of => LIST;
    queue, queue_of => QUEUE;
}

/// `java.util.Map<?, ?>`
pub fn map<C: TypeCatalog + ?Sized>(catalog: &C) -> Result<TypeToken> {
    unbounded(catalog, MAP)
}

pub fn map_of<C: TypeCatalog + ?Sized>(catalog: &C, key: Ty, value: Ty) -> Result<TypeToken> {
    applied(catalog, MAP, vec![key, value])
}

/// `java.util.SortedMap<?, ?>`
pub fn sorted_map<C: TypeCatalog + ?Sized>(catalog: &C) -> Result<TypeToken> {
    unbounded(catalog, SORTED_MAP)
}

pub fn sorted_map_of<C: TypeCatalog + ?Sized>(
    catalog: &C,
    key: Ty,
    value: Ty,
) -> Result<TypeToken> {
    applied(catalog, SORTED_MAP, vec![key, value])
}

#[cfg(test)]
#[path = "generics_tests.rs"]
mod generics_tests;
