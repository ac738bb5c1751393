//! Resolving how a descendant class parameterizes one of its ancestors.
//!
//! The walk is depth-first from the descendant: superclass first, then
//! interfaces in declaration order. Each edge is the supertype as declared by
//! the current class, with the current bindings substituted in; the first edge
//! whose erasure is the ancestor is the answer.
//!
//! Type variables of the starting class are never bound, so an ancestor that
//! depends on them comes back in terms of those variables: resolving
//! `Container` from `class Box<T> implements Container<T>` yields
//! `Container<T>` with `Box`'s own `T`.
//!
//! A raw edge to a generic class (`class RawBox extends Box`) is followed as
//! if it were `Box<?>`: the class's parameters are bound to unbounded
//! wildcards further up the chain. The raw edge itself is returned unchanged
//! when it is the match.

use typex_core::{ClassName, Error, Result, Ty, TypeCatalog, WildcardType};

use super::erasure::erase;
use super::substitution::Substitution;

/// The parameterization of `ancestor` inherited by `descendant`, or `None`
/// when `ancestor` is not an ancestor.
///
/// A class is its own ancestor: `resolve_supertype(C, C)` is `C`.
pub fn resolve_supertype<C: TypeCatalog + ?Sized>(
    catalog: &C,
    descendant: &ClassName,
    ancestor: &ClassName,
) -> Option<Ty> {
    if descendant == ancestor {
        return Some(Ty::Class(descendant.clone()));
    }
    Resolver { catalog, ancestor }.search(descendant, &Substitution::new())
}

/// Like [`resolve_supertype`], starting from a class or parameterized type.
///
/// The arguments of a parameterized descendant are carried up the chain:
/// `ArrayList<String>` resolves `Collection` to `Collection<String>`.
pub fn resolve_supertype_of<C: TypeCatalog + ?Sized>(
    catalog: &C,
    descendant: &Ty,
    ancestor: &ClassName,
) -> Result<Option<Ty>> {
    match descendant {
        Ty::Class(class) => Ok(resolve_supertype(catalog, class, ancestor)),
        Ty::Parameterized(p) if p.raw() == ancestor => Ok(Some(descendant.clone())),
        Ty::Parameterized(p) => {
            let bindings = Substitution::for_class(catalog, p.raw(), p.arguments());
            Ok(Resolver { catalog, ancestor }.search(p.raw(), &bindings))
        }
        _ => Err(Error::precondition(format!(
            "cannot resolve supertypes of {descendant}"
        ))),
    }
}

struct Resolver<'a, C: ?Sized> {
    catalog: &'a C,
    ancestor: &'a ClassName,
}

impl<C: TypeCatalog + ?Sized> Resolver<'_, C> {
    fn search(&self, class: &ClassName, bindings: &Substitution) -> Option<Ty> {
        let edges = self
            .catalog
            .superclass(class)
            .into_iter()
            .chain(self.catalog.interfaces(class));

        for declared in edges {
            let edge = bindings.apply(&declared);
            tracing::debug!(from = %class, edge = %edge, "following supertype edge");

            let Ok(raw) = erase(&edge) else {
                continue;
            };
            if &raw == self.ancestor {
                return Some(edge);
            }
            if let Some(found) = self.search(&raw, &self.bindings_for(&edge, &raw)) {
                return Some(found);
            }
        }

        None
    }

    fn bindings_for(&self, edge: &Ty, raw: &ClassName) -> Substitution {
        match edge {
            Ty::Parameterized(p) => Substitution::for_class(self.catalog, raw, p.arguments()),
            _ => self
                .catalog
                .type_parameters(raw)
                .iter()
                .map(|param| (param.clone(), Ty::Wildcard(WildcardType::unbounded())))
                .collect(),
        }
    }
}
