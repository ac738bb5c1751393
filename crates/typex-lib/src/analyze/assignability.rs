//! Assignability between type expressions.
//!
//! Decision procedure, first matching rule wins:
//!
//! 1. equal types are assignable
//! 2. class from class: primitive widening, or declared ancestry
//! 3. class from `raw<args>`: class from `raw`
//! 4. `raw<args>` from `raw'<args'>`: `raw` from `raw'`, then per argument
//!    either equality or wildcard containment (no other variance)
//! 5. wildcard from anything: within all of its bounds
//! 6. anything from a class: from one of the class's generic supertypes,
//!    superclass first
//! 7. otherwise not assignable

use std::collections::HashSet;

use typex_core::well_known;
use typex_core::{ClassName, ParameterizedType, Ty, TypeCatalog, WildcardType};

use super::erasure::erase;

/// Whether a value of type `subtype` can be assigned to `supertype`.
pub fn is_assignable<C: TypeCatalog + ?Sized>(catalog: &C, supertype: &Ty, subtype: &Ty) -> bool {
    if supertype == subtype {
        return true;
    }

    match (supertype, subtype) {
        (Ty::Class(sup), Ty::Class(sub)) => is_class_assignable(catalog, sup, sub),
        (Ty::Class(sup), Ty::Parameterized(sub)) => is_class_assignable(catalog, sup, sub.raw()),
        (Ty::Parameterized(sup), Ty::Parameterized(sub)) => {
            is_parameterized_assignable(catalog, sup, sub)
        }
        (Ty::Wildcard(sup), _) => is_wildcard_assignable(catalog, sup, subtype),
        (_, Ty::Class(sub)) => is_assignable_from_supertypes(catalog, supertype, sub),
        _ => false,
    }
}

/// Assignability between nominal types.
///
/// Primitives follow the widening lattice and never mix with references.
/// `java.lang.Object` accepts every reference type; arrays are covariant in
/// reference components; everything else is declared ancestry in the catalog.
pub fn is_class_assignable<C: TypeCatalog + ?Sized>(
    catalog: &C,
    supertype: &ClassName,
    subtype: &ClassName,
) -> bool {
    if supertype == subtype {
        return true;
    }

    match (supertype.as_primitive(), subtype.as_primitive()) {
        (Some(sup), Some(sub)) => return sup.widens_from(sub),
        (Some(_), None) | (None, Some(_)) => return false,
        (None, None) => {}
    }

    if well_known::is_object(supertype) {
        return true;
    }

    if let (Some(sup), Some(sub)) = (supertype.component(), subtype.component()) {
        if sup.is_primitive() || sub.is_primitive() {
            return false;
        }
        return is_class_assignable(catalog, &sup, &sub);
    }

    is_declared_ancestor(catalog, supertype, subtype)
}

/// Depth-first search through erased declared supertypes.
fn is_declared_ancestor<C: TypeCatalog + ?Sized>(
    catalog: &C,
    ancestor: &ClassName,
    class: &ClassName,
) -> bool {
    let mut visited = HashSet::new();
    let mut stack = vec![class.clone()];

    while let Some(current) = stack.pop() {
        if &current == ancestor {
            return true;
        }
        if !visited.insert(current.clone()) {
            continue;
        }
        let supertypes = catalog
            .superclass(&current)
            .into_iter()
            .chain(catalog.interfaces(&current));
        stack.extend(supertypes.filter_map(|ty| erase(&ty).ok()));
    }

    false
}

fn is_parameterized_assignable<C: TypeCatalog + ?Sized>(
    catalog: &C,
    supertype: &ParameterizedType,
    subtype: &ParameterizedType,
) -> bool {
    if !is_class_assignable(catalog, supertype.raw(), subtype.raw()) {
        return false;
    }

    let (sup_args, sub_args) = (supertype.arguments(), subtype.arguments());
    if sup_args.len() != sub_args.len() {
        return false;
    }

    sup_args
        .iter()
        .zip(sub_args)
        .all(|(sup_arg, sub_arg)| match sup_arg {
            Ty::Wildcard(wildcard) => is_wildcard_assignable(catalog, wildcard, sub_arg),
            _ => sup_arg == sub_arg,
        })
}

/// Whether `ty` lies within the bounds of `wildcard`.
fn is_wildcard_assignable<C: TypeCatalog + ?Sized>(
    catalog: &C,
    wildcard: &WildcardType,
    ty: &Ty,
) -> bool {
    wildcard
        .upper_bounds()
        .iter()
        .all(|upper| is_assignable(catalog, upper, ty))
        && wildcard
            .lower_bounds()
            .iter()
            .all(|lower| is_assignable(catalog, ty, lower))
}

fn is_assignable_from_supertypes<C: TypeCatalog + ?Sized>(
    catalog: &C,
    supertype: &Ty,
    class: &ClassName,
) -> bool {
    if let Some(superclass) = catalog.superclass(class)
        && is_assignable(catalog, supertype, &superclass)
    {
        return true;
    }

    catalog
        .interfaces(class)
        .iter()
        .any(|interface| is_assignable(catalog, supertype, interface))
}
