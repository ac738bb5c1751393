//! Type variable substitution.

use std::collections::HashMap;

use typex_core::{ClassName, Ty, TypeCatalog, TypeVariable};

/// Mapping from type variables to the types that replace them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: HashMap<TypeVariable, Ty>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the declared type parameters of `class` to `args`, position by
    /// position. Extra parameters or arguments are ignored.
    pub fn for_class<C: TypeCatalog + ?Sized>(catalog: &C, class: &ClassName, args: &[Ty]) -> Self {
        catalog
            .type_parameters(class)
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect()
    }

    pub fn insert(&mut self, variable: TypeVariable, ty: Ty) -> Option<Ty> {
        self.bindings.insert(variable, ty)
    }

    pub fn get(&self, variable: &TypeVariable) -> Option<&Ty> {
        self.bindings.get(variable)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Replace every bound variable in `ty`.
    ///
    /// Unbound variables are left as they are, and so are the bounds of
    /// variables.
    pub fn apply(&self, ty: &Ty) -> Ty {
        if self.is_empty() {
            return ty.clone();
        }
        match ty {
            Ty::Class(_) => ty.clone(),
            Ty::Array(component) => Ty::array_of(self.apply(component)),
            Ty::Parameterized(p) => Ty::Parameterized(p.map_types(|t| self.apply(t))),
            Ty::Variable(v) => self.get(v).cloned().unwrap_or_else(|| ty.clone()),
            Ty::Wildcard(w) => Ty::Wildcard(w.map_bounds(|t| self.apply(t))),
        }
    }
}

impl FromIterator<(TypeVariable, Ty)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (TypeVariable, Ty)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}
