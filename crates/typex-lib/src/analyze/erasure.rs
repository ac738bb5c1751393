//! Type erasure.

use typex_core::{ClassName, Error, Result, Ty};

/// The class obtained by discarding all generic information from `ty`.
///
/// - `raw<args>` erases to `raw`
/// - `C[]` erases to `|C|[]`
/// - a type variable erases to the erasure of its leftmost bound
///
/// Wildcards have no single erasure and are rejected.
pub fn erase(ty: &Ty) -> Result<ClassName> {
    match ty {
        Ty::Class(class) => Ok(class.clone()),
        Ty::Array(component) => erase(component)?
            .array_of()
            .ok_or_else(Error::too_many_dimensions),
        Ty::Parameterized(p) => Ok(p.raw().clone()),
        Ty::Variable(v) => erase(&v.bounds()[0]),
        Ty::Wildcard(_) => Err(Error::invalid(format!(
            "cannot erase wildcard type: {ty}"
        ))),
    }
}

/// [`erase`] as a type expression.
pub fn erased_type(ty: &Ty) -> Result<Ty> {
    erase(ty).map(Ty::Class)
}
