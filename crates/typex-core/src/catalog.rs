//! The type catalog contract.
//!
//! The algebra never inspects live types. Everything it needs to know about a
//! nominal type (arity, declared supertypes, interface-ness) comes through
//! [`TypeCatalog`].

use crate::{ClassName, Ty, TypeVariable};

/// Source of truth for declared facts about nominal types.
///
/// Lookups for classes the catalog does not contain return empty answers
/// (`None`, no parameters, no interfaces). Supertypes are generic: they may
/// reference the class's own type variables, e.g. `Box<T>` listing
/// `Container<T>` among its interfaces.
///
/// The forward (sub → super) graph must be finite and acyclic.
pub trait TypeCatalog {
    fn contains(&self, class: &ClassName) -> bool;

    /// Declared type parameters, in declaration order.
    fn type_parameters(&self, class: &ClassName) -> &[TypeVariable];

    fn is_interface(&self, class: &ClassName) -> bool;

    /// Direct generic superclass. `None` for interfaces, primitives and the top type.
    fn superclass(&self, class: &ClassName) -> Option<Ty>;

    /// Direct generic superinterfaces, in declaration order.
    fn interfaces(&self, class: &ClassName) -> Vec<Ty>;

    fn arity(&self, class: &ClassName) -> usize {
        self.type_parameters(class).len()
    }

    fn is_primitive(&self, class: &ClassName) -> bool {
        class.is_primitive()
    }

    fn is_array(&self, class: &ClassName) -> bool {
        class.is_array()
    }

    fn array_component(&self, class: &ClassName) -> Option<Ty> {
        class.component().map(Ty::Class)
    }

    /// Lexically enclosing class, used as the default owner of parameterized types.
    fn enclosing_class(&self, class: &ClassName) -> Option<ClassName> {
        class.enclosing().filter(|enclosing| self.contains(enclosing))
    }
}

impl<T: TypeCatalog + ?Sized> TypeCatalog for &T {
    fn contains(&self, class: &ClassName) -> bool {
        (*self).contains(class)
    }
    fn type_parameters(&self, class: &ClassName) -> &[TypeVariable] {
        (*self).type_parameters(class)
    }
    fn is_interface(&self, class: &ClassName) -> bool {
        (*self).is_interface(class)
    }
    fn superclass(&self, class: &ClassName) -> Option<Ty> {
        (*self).superclass(class)
    }
    fn interfaces(&self, class: &ClassName) -> Vec<Ty> {
        (*self).interfaces(class)
    }
    fn arity(&self, class: &ClassName) -> usize {
        (*self).arity(class)
    }
    fn is_primitive(&self, class: &ClassName) -> bool {
        (*self).is_primitive(class)
    }
    fn is_array(&self, class: &ClassName) -> bool {
        (*self).is_array(class)
    }
    fn array_component(&self, class: &ClassName) -> Option<Ty> {
        (*self).array_component(class)
    }
    fn enclosing_class(&self, class: &ClassName) -> Option<ClassName> {
        (*self).enclosing_class(class)
    }
}
