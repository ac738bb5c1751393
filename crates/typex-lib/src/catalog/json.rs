//! JSON class declarations.
//!
//! ```json
//! {
//!   "classes": [
//!     { "name": "java.util.List", "kind": "interface",
//!       "type_parameters": ["E"], "interfaces": ["Collection<E>"] },
//!     { "name": "test.Sorted", "type_parameters": [
//!         { "name": "T", "bounds": ["java.lang.Number", "java.io.Serializable"] } ] }
//!   ]
//! }
//! ```
//!
//! Supertypes and bounds are written in the type grammar. Every class known to
//! the catalog (including ones declared in the same document) can be named by
//! its simple name when that name is unambiguous. A class's own type
//! parameters are in scope for its supertypes; a bound sees only the
//! parameters declared before it.
//!
//! Classes without a `superclass` extend `java.lang.Object`.

use serde::Deserialize;
use typex_core::well_known::OBJECT;
use typex_core::{
    ClassName, Error, GenericDeclaration, ImportContext, Ty, TypeCatalog, TypeVariable,
};

use super::{ClassInfo, ClassKind, InMemoryCatalog};
use crate::parser::TypeParser;

/// Error while loading class declarations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate class declaration: {0}")]
    DuplicateClass(String),

    #[error("invalid declaration of {class}: {source}")]
    Class {
        class: String,
        #[source]
        source: Error,
    },
}

impl CatalogError {
    fn class(class: &ClassName) -> impl FnOnce(Error) -> Self + '_ {
        move |source| Self::Class {
            class: class.to_string(),
            source,
        }
    }
}

impl InMemoryCatalog {
    /// Build a catalog from JSON class declarations.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.extend_from_json(json)?;
        Ok(catalog)
    }

    /// Add JSON class declarations. On error the catalog is left unchanged.
    pub fn extend_from_json(&mut self, json: &str) -> Result<(), CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let mut next = self.clone();
        next.declare(&raw)?;
        next.bound_type_parameters(&raw)?;
        next.link_supertypes(&raw)?;

        tracing::debug!(
            declared = raw.classes.len(),
            total = next.len(),
            "loaded type catalog"
        );
        *self = next;
        Ok(())
    }

    /// Register names, kinds and unbounded type parameters.
    fn declare(&mut self, raw: &RawCatalog) -> Result<(), CatalogError> {
        for class in &raw.classes {
            let name = ClassName::new(class.name.as_str());
            if self.classes.contains_key(&name) {
                return Err(CatalogError::DuplicateClass(class.name.clone()));
            }
            let type_parameters = class
                .type_parameters
                .iter()
                .map(|param| {
                    TypeVariable::unbounded(GenericDeclaration::Class(name.clone()), param.name())
                })
                .collect();
            let info = ClassInfo {
                kind: class.kind.into(),
                type_parameters,
                superclass: None,
                interfaces: Vec::new(),
            };
            self.classes.insert(name, info);
        }
        Ok(())
    }

    fn bound_type_parameters(&mut self, raw: &RawCatalog) -> Result<(), CatalogError> {
        let imports = self.imports();
        for class in &raw.classes {
            if class.type_parameters.iter().all(|p| p.bounds().is_empty()) {
                continue;
            }
            let name = ClassName::new(class.name.as_str());
            let mut params = self.type_parameters(&name).to_vec();
            for (i, param) in class.type_parameters.iter().enumerate() {
                let parser = TypeParser::new(&*self)
                    .imports(&imports)
                    .variables(&params[..i]);
                let bounds = param
                    .bounds()
                    .iter()
                    .map(|text| parser.parse(text))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(CatalogError::class(&name))?;
                let declaration = GenericDeclaration::Class(name.clone());
                params[i] = TypeVariable::new(&*self, declaration, param.name(), bounds)
                    .map_err(CatalogError::class(&name))?;
            }
            if let Some(info) = self.classes.get_mut(&name) {
                info.type_parameters = params;
            }
        }
        Ok(())
    }

    fn link_supertypes(&mut self, raw: &RawCatalog) -> Result<(), CatalogError> {
        let imports = self.imports();
        for class in &raw.classes {
            let name = ClassName::new(class.name.as_str());
            let (superclass, interfaces) = self
                .parse_supertypes(&name, class, &imports)
                .map_err(CatalogError::class(&name))?;
            if let Some(info) = self.classes.get_mut(&name) {
                info.superclass = superclass;
                info.interfaces = interfaces;
            }
        }
        Ok(())
    }

    fn parse_supertypes(
        &self,
        name: &ClassName,
        class: &RawClass,
        imports: &ImportContext,
    ) -> typex_core::Result<(Option<Ty>, Vec<Ty>)> {
        let parser = TypeParser::new(self)
            .imports(imports)
            .variables(self.type_parameters(name));

        let superclass = match (class.kind, &class.superclass) {
            (RawKind::Interface, Some(_)) => {
                return Err(Error::invalid("an interface cannot declare a superclass"));
            }
            (RawKind::Interface, None) => None,
            (RawKind::Class, Some(text)) => {
                let ty = parser.parse(text)?;
                self.ensure_supertype(&ty, ClassKind::Class)?;
                Some(ty)
            }
            (RawKind::Class, None) if name.name() == OBJECT => None,
            (RawKind::Class, None) => Some(Ty::object()),
        };

        let interfaces = class
            .interfaces
            .iter()
            .map(|text| {
                let ty = parser.parse(text)?;
                self.ensure_supertype(&ty, ClassKind::Interface)?;
                Ok(ty)
            })
            .collect::<typex_core::Result<Vec<_>>>()?;

        Ok((superclass, interfaces))
    }

    /// Supertypes are non-array classes or parameterized types of the expected kind.
    fn ensure_supertype(&self, ty: &Ty, kind: ClassKind) -> typex_core::Result<()> {
        let raw = match ty {
            Ty::Class(class) if !class.is_array() && !class.is_primitive() => class,
            Ty::Parameterized(p) => p.raw(),
            _ => return Err(Error::invalid(format!("`{ty}` cannot be a supertype"))),
        };
        let actual = self.classes.get(raw).map(ClassInfo::kind);
        if actual != Some(kind) {
            let expected = match kind {
                ClassKind::Class => "a class",
                ClassKind::Interface => "an interface",
            };
            return Err(Error::invalid(format!("`{ty}` is not {expected}")));
        }
        Ok(())
    }

    /// Every declared class, importable by simple name.
    fn imports(&self) -> ImportContext {
        self.classes.keys().map(|class| class.name()).collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    name: String,
    #[serde(default)]
    kind: RawKind,
    #[serde(default)]
    type_parameters: Vec<RawTypeParameter>,
    #[serde(default)]
    superclass: Option<String>,
    #[serde(default)]
    interfaces: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    #[default]
    Class,
    Interface,
}

impl From<RawKind> for ClassKind {
    fn from(kind: RawKind) -> Self {
        match kind {
            RawKind::Class => Self::Class,
            RawKind::Interface => Self::Interface,
        }
    }
}

/// `"T"` or `{ "name": "T", "bounds": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTypeParameter {
    Name(String),
    Bounded {
        name: String,
        #[serde(default)]
        bounds: Vec<String>,
    },
}

impl RawTypeParameter {
    fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Bounded { name, .. } => name,
        }
    }

    fn bounds(&self) -> &[String] {
        match self {
            Self::Name(_) => &[],
            Self::Bounded { bounds, .. } => bounds,
        }
    }
}
