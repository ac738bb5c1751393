//! Name resolution for identifiers in type text.
//!
//! A simple name resolves, in order, to a primitive keyword, an in-scope type
//! variable, a unique import, or a class in the default package. A dotted name
//! is tried as a literal binary name first, then with trailing dots read as
//! nesting separators (`java.util.Map.Entry`), then with its first segment
//! resolved through the imports (`Map.Entry`).

use typex_core::{ClassName, Error, ImportContext, Primitive, Result, Ty, TypeCatalog, TypeVariable};

pub(super) struct Names<'a, C: ?Sized> {
    catalog: &'a C,
    imports: Option<&'a ImportContext>,
    variables: &'a [TypeVariable],
}

impl<'a, C: TypeCatalog + ?Sized> Names<'a, C> {
    pub(super) fn new(
        catalog: &'a C,
        imports: Option<&'a ImportContext>,
        variables: &'a [TypeVariable],
    ) -> Self {
        Self {
            catalog,
            imports,
            variables,
        }
    }

    pub(super) fn catalog(&self) -> &'a C {
        self.catalog
    }

    /// Resolve a name given as its `.`-separated segments.
    pub(super) fn resolve(&self, segments: &[&str]) -> Result<Ty> {
        let resolved = match segments {
            [simple] => self.resolve_simple(simple)?,
            _ => self.resolve_dotted(segments)?,
        };
        tracing::trace!(name = %segments.join("."), resolved = %resolved, "resolved type name");
        Ok(resolved)
    }

    fn resolve_simple(&self, name: &str) -> Result<Ty> {
        if let Some(primitive) = Primitive::from_keyword(name) {
            return Ok(Ty::primitive(primitive));
        }

        if let Some(variable) = self.variables.iter().find(|v| v.name() == name) {
            return Ok(Ty::Variable(variable.clone()));
        }

        if let Some(imports) = self.imports {
            match imports.resolve(name) {
                Ok(qualified) => return self.known(qualified),
                Err(Error::ClassNotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }

        self.known(name)
    }

    fn resolve_dotted(&self, segments: &[&str]) -> Result<Ty> {
        // Literal binary name, then trailing dots promoted to `$` one at a time
        for nested in 0..segments.len() {
            let package = &segments[..segments.len() - nested];
            let members = &segments[segments.len() - nested..];
            let mut name = package.join(".");
            for member in members {
                name.push('$');
                name.push_str(member);
            }
            let class = ClassName::new(name);
            if self.catalog.contains(&class) {
                return Ok(Ty::Class(class));
            }
        }

        if let Some(imports) = self.imports
            && let Ok(outer) = imports.resolve(segments[0])
        {
            let name = std::iter::once(outer)
                .chain(segments[1..].iter().copied())
                .collect::<Vec<_>>()
                .join("$");
            let class = ClassName::new(name);
            if self.catalog.contains(&class) {
                return Ok(Ty::Class(class));
            }
        }

        Err(Error::ClassNotFound(segments.join(".")))
    }

    fn known(&self, name: &str) -> Result<Ty> {
        let class = ClassName::new(name);
        if self.catalog.contains(&class) {
            Ok(Ty::Class(class))
        } else {
            Err(Error::ClassNotFound(name.to_owned()))
        }
    }
}
