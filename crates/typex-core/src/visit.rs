//! Type expression visitor.
//!
//! # Usage
//!
//! Implement `TypeVisitor` and override `visit_*` methods. Call the matching
//! `walk_*` function within an override to continue recursion, or omit it to
//! stop.
//!
//! ```
//! use typex_core::visit::{TypeVisitor, walk_parameterized};
//! use typex_core::{ParameterizedType, Ty};
//!
//! struct Depth { current: usize, max: usize }
//!
//! impl TypeVisitor for Depth {
//!     fn visit_parameterized(&mut self, p: &ParameterizedType) {
//!         self.current += 1;
//!         self.max = self.max.max(self.current);
//!         walk_parameterized(self, p);
//!         self.current -= 1;
//!     }
//! }
//! # let _ = Depth { current: 0, max: 0 };
//! ```

use crate::{ClassName, ParameterizedType, Ty, TypeVariable, WildcardType};

pub trait TypeVisitor: Sized {
    fn visit_ty(&mut self, ty: &Ty) {
        walk_ty(self, ty);
    }

    fn visit_class(&mut self, _class: &ClassName) {
        // Leaf
    }

    fn visit_array(&mut self, component: &Ty) {
        walk_array(self, component);
    }

    fn visit_parameterized(&mut self, p: &ParameterizedType) {
        walk_parameterized(self, p);
    }

    /// Leaf by default; bounds are reached only through [`walk_variable`].
    fn visit_variable(&mut self, _v: &TypeVariable) {}

    fn visit_wildcard(&mut self, w: &WildcardType) {
        walk_wildcard(self, w);
    }
}

pub fn walk_ty<V: TypeVisitor>(visitor: &mut V, ty: &Ty) {
    match ty {
        Ty::Class(class) => visitor.visit_class(class),
        Ty::Array(component) => visitor.visit_array(component),
        Ty::Parameterized(p) => visitor.visit_parameterized(p),
        Ty::Variable(v) => visitor.visit_variable(v),
        Ty::Wildcard(w) => visitor.visit_wildcard(w),
    }
}

pub fn walk_array<V: TypeVisitor>(visitor: &mut V, component: &Ty) {
    visitor.visit_ty(component);
}

pub fn walk_parameterized<V: TypeVisitor>(visitor: &mut V, p: &ParameterizedType) {
    if let Some(owner) = p.owner() {
        visitor.visit_ty(owner);
    }
    visitor.visit_class(p.raw());
    for arg in p.arguments() {
        visitor.visit_ty(arg);
    }
}

pub fn walk_variable<V: TypeVisitor>(visitor: &mut V, v: &TypeVariable) {
    for bound in v.bounds() {
        visitor.visit_ty(bound);
    }
}

pub fn walk_wildcard<V: TypeVisitor>(visitor: &mut V, w: &WildcardType) {
    for bound in w.upper_bounds().iter().chain(w.lower_bounds()) {
        visitor.visit_ty(bound);
    }
}

#[derive(Default)]
struct CollectVariables {
    found: Vec<TypeVariable>,
}

impl TypeVisitor for CollectVariables {
    fn visit_variable(&mut self, v: &TypeVariable) {
        if !self.found.contains(v) {
            self.found.push(v.clone());
        }
    }
}

impl Ty {
    /// Distinct type variables occurring in this expression, in order of first
    /// occurrence. Variable bounds are not searched.
    pub fn type_variables(&self) -> Vec<TypeVariable> {
        let mut collect = CollectVariables::default();
        collect.visit_ty(self);
        collect.found
    }
}
