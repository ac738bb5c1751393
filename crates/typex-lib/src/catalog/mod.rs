//! In-memory type catalog.
//!
//! Class hierarchies are described in JSON (see [`json`]) and held in an
//! insertion-ordered map. [`InMemoryCatalog::java_base`] bundles the
//! `java.lang` basics and the `java.util` collection framework.

mod invariants;
pub mod json;

use indexmap::IndexMap;
use typex_core::well_known::{CLONEABLE, SERIALIZABLE};
use typex_core::{ClassName, Ty, TypeCatalog, TypeVariable};

pub use json::CatalogError;

const JAVA_BASE_JSON: &str = include_str!("../../data/java_base.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
}

/// Declared facts about one class.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    kind: ClassKind,
    type_parameters: Vec<TypeVariable>,
    superclass: Option<Ty>,
    interfaces: Vec<Ty>,
}

impl ClassInfo {
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn type_parameters(&self) -> &[TypeVariable] {
        &self.type_parameters
    }

    pub fn superclass(&self) -> Option<&Ty> {
        self.superclass.as_ref()
    }

    pub fn interfaces(&self) -> &[Ty] {
        &self.interfaces
    }
}

/// [`TypeCatalog`] backed by declarations held in memory.
///
/// Primitives are always known. Array classes are known when their element
/// class is; they extend `java.lang.Object` and implement `Cloneable` and
/// `Serializable` when those are declared.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    classes: IndexMap<ClassName, ClassInfo>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled `java.lang` / `java.util` catalog.
    pub fn java_base() -> Self {
        invariants::ensure_bundled(Self::from_json(JAVA_BASE_JSON))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, class: &ClassName) -> Option<&ClassInfo> {
        self.classes.get(class)
    }

    /// Declared class names, in declaration order.
    pub fn class_names(&self) -> impl Iterator<Item = &ClassName> {
        self.classes.keys()
    }

    fn array_supertype(&self, name: &str) -> Option<Ty> {
        let class = ClassName::new(name);
        self.classes.contains_key(&class).then_some(Ty::Class(class))
    }
}

impl TypeCatalog for InMemoryCatalog {
    fn contains(&self, class: &ClassName) -> bool {
        let element = class.element();
        element.is_primitive() || self.classes.contains_key(&element)
    }

    fn type_parameters(&self, class: &ClassName) -> &[TypeVariable] {
        self.classes
            .get(class)
            .map_or(&[], |info| info.type_parameters.as_slice())
    }

    fn is_interface(&self, class: &ClassName) -> bool {
        self.classes
            .get(class)
            .is_some_and(|info| info.kind == ClassKind::Interface)
    }

    fn superclass(&self, class: &ClassName) -> Option<Ty> {
        if class.is_array() {
            return self.contains(class).then(Ty::object);
        }
        self.classes.get(class)?.superclass.clone()
    }

    fn interfaces(&self, class: &ClassName) -> Vec<Ty> {
        if class.is_array() {
            if !self.contains(class) {
                return Vec::new();
            }
            return [CLONEABLE, SERIALIZABLE]
                .into_iter()
                .filter_map(|name| self.array_supertype(name))
                .collect();
        }
        self.classes
            .get(class)
            .map(|info| info.interfaces.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod json_tests;
