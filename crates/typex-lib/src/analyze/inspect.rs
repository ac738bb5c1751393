//! Structural queries over type expressions.

use typex_core::{ClassName, Error, Result, Ty, TypeCatalog};

use super::assignability::is_class_assignable;

/// The class a value of type `ty` is an instance of.
///
/// Unlike [`erase`](super::erase), type variables and wildcards are rejected:
/// they do not name a single class.
pub fn raw_type(ty: &Ty) -> Result<ClassName> {
    match ty {
        Ty::Class(class) => Ok(class.clone()),
        Ty::Array(component) => raw_type(component)?
            .array_of()
            .ok_or_else(Error::too_many_dimensions),
        Ty::Parameterized(p) => Ok(p.raw().clone()),
        Ty::Variable(_) | Ty::Wildcard(_) => Err(Error::precondition(format!(
            "cannot obtain raw type from {ty}"
        ))),
    }
}

pub fn is_array(ty: &Ty) -> bool {
    match ty {
        Ty::Class(class) => class.is_array(),
        Ty::Array(_) => true,
        _ => false,
    }
}

/// Component type of an array type, `None` for anything else.
pub fn component_type(ty: &Ty) -> Option<Ty> {
    match ty {
        Ty::Class(class) => class.component().map(Ty::Class),
        Ty::Array(component) => Some((**component).clone()),
        _ => None,
    }
}

pub fn array_type(component: Ty) -> Ty {
    Ty::array_of(component)
}

/// Whether `ty` is a parameterized subclass of `raw` with exactly one argument,
/// e.g. `ArrayList<String>` for `java.util.Collection`.
pub fn is_simple_parameterized_type<C: TypeCatalog + ?Sized>(
    catalog: &C,
    ty: &Ty,
    raw: &ClassName,
) -> bool {
    let Ty::Parameterized(p) = ty else {
        return false;
    };
    is_class_assignable(catalog, raw, p.raw()) && p.arguments().len() == 1
}

/// The single type argument of a parameterized type.
pub fn actual_type_argument(ty: &Ty) -> Result<&Ty> {
    match ty {
        Ty::Parameterized(p) if p.arguments().len() == 1 => Ok(&p.arguments()[0]),
        _ => Err(Error::precondition(format!(
            "type must be a parameterized type with one actual type argument: {ty}"
        ))),
    }
}
