//! Minimal hand-built catalog for model tests.

use std::collections::HashMap;

use crate::{ClassName, GenericDeclaration, Ty, TypeCatalog, TypeVariable};

#[derive(Default)]
struct Entry {
    params: Vec<TypeVariable>,
    interface: bool,
}

#[derive(Default)]
pub struct TestCatalog {
    entries: HashMap<ClassName, Entry>,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::default()
            .class("java.lang.Object", &[])
            .class("java.lang.Number", &[])
            .class("java.lang.Integer", &[])
            .class("java.lang.String", &[])
            .interface("java.lang.Comparable", &["T"])
            .interface("java.io.Serializable", &[])
            .interface("java.util.List", &["E"])
            .interface("java.util.Map", &["K", "V"])
            .interface("java.util.Map$Entry", &["K", "V"])
            .class("test.Outer", &["T"])
            .class("test.Outer$Inner", &["U"])
    }

    fn class(self, name: &str, params: &[&str]) -> Self {
        self.declare(name, params, false)
    }

    fn interface(self, name: &str, params: &[&str]) -> Self {
        self.declare(name, params, true)
    }

    fn declare(mut self, name: &str, params: &[&str], interface: bool) -> Self {
        let class = ClassName::new(name);
        let params = params
            .iter()
            .map(|p| TypeVariable::unbounded(GenericDeclaration::Class(class.clone()), *p))
            .collect();
        self.entries.insert(class, Entry { params, interface });
        self
    }

    pub fn param(&self, class: &str, index: usize) -> TypeVariable {
        self.type_parameters(&ClassName::new(class))[index].clone()
    }
}

impl TypeCatalog for TestCatalog {
    fn contains(&self, class: &ClassName) -> bool {
        class.is_primitive() || self.entries.contains_key(&class.element())
    }

    fn type_parameters(&self, class: &ClassName) -> &[TypeVariable] {
        match self.entries.get(class) {
            Some(entry) => &entry.params,
            None => &[],
        }
    }

    fn is_interface(&self, class: &ClassName) -> bool {
        self.entries.get(class).is_some_and(|entry| entry.interface)
    }

    fn superclass(&self, _class: &ClassName) -> Option<Ty> {
        None
    }

    fn interfaces(&self, _class: &ClassName) -> Vec<Ty> {
        Vec::new()
    }
}
