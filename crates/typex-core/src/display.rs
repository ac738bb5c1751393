//! Printing type expressions back to type text.
//!
//! The printer is the structural inverse of the type grammar. How class names
//! are rendered is pluggable through [`NameStrategy`]; everything else (array
//! suffixes, argument lists, bounds) is fixed.

use std::fmt::{self, Write};

use crate::{ClassName, ImportContext, Ty, TypeVariable, WildcardType};

/// Renders the name of a non-array, non-primitive class.
pub trait NameStrategy {
    fn class_name(&self, class: &ClassName) -> String;
}

/// Binary names: `java.util.Map$Entry`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Qualified;

/// Trailing segment only: `Entry`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unqualified;

/// Simple name when the import context resolves it back to the same class,
/// binary name otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Simple<'a> {
    imports: &'a ImportContext,
}

impl<'a> Simple<'a> {
    pub fn new(imports: &'a ImportContext) -> Self {
        Self { imports }
    }
}

impl NameStrategy for Qualified {
    fn class_name(&self, class: &ClassName) -> String {
        class.name().to_owned()
    }
}

impl NameStrategy for Unqualified {
    fn class_name(&self, class: &ClassName) -> String {
        class.simple_name().to_owned()
    }
}

impl NameStrategy for Simple<'_> {
    fn class_name(&self, class: &ClassName) -> String {
        if self.imports.is_unambiguous(class) {
            class.simple_name().to_owned()
        } else {
            class.name().to_owned()
        }
    }
}

impl<F: Fn(&ClassName) -> String> NameStrategy for F {
    fn class_name(&self, class: &ClassName) -> String {
        self(class)
    }
}

struct Printer<'s> {
    strategy: &'s dyn NameStrategy,
}

impl Printer<'_> {
    fn ty(&self, ty: &Ty, nested: bool, out: &mut impl Write) -> fmt::Result {
        match ty {
            Ty::Class(class) => self.class(class, out),
            Ty::Array(component) => {
                self.ty(component, true, out)?;
                out.write_str("[]")
            }
            Ty::Parameterized(p) => {
                match p.owner() {
                    Some(owner @ Ty::Parameterized(_)) => {
                        self.ty(owner, true, out)?;
                        write!(out, ".{}", p.raw().simple_name())?;
                    }
                    _ => self.class(p.raw(), out)?,
                }
                out.write_char('<')?;
                self.list(p.arguments(), ", ", out)?;
                out.write_char('>')
            }
            Ty::Variable(v) => self.variable(v, nested, out),
            Ty::Wildcard(w) => self.wildcard(w, out),
        }
    }

    fn class(&self, class: &ClassName, out: &mut impl Write) -> fmt::Result {
        let element = class.element();
        match element.as_primitive() {
            Some(primitive) => out.write_str(primitive.keyword())?,
            None => out.write_str(&self.strategy.class_name(&element))?,
        }
        for _ in 0..class.dims() {
            out.write_str("[]")?;
        }
        Ok(())
    }

    fn variable(&self, v: &TypeVariable, nested: bool, out: &mut impl Write) -> fmt::Result {
        out.write_str(v.name())?;
        if nested || v.has_default_bounds() {
            return Ok(());
        }
        out.write_str(" extends ")?;
        self.list(v.bounds(), " & ", out)
    }

    fn wildcard(&self, w: &WildcardType, out: &mut impl Write) -> fmt::Result {
        out.write_char('?')?;
        if !w.has_default_upper_bound() {
            out.write_str(" extends ")?;
            self.list(w.upper_bounds(), " & ", out)?;
        }
        if !w.lower_bounds().is_empty() {
            out.write_str(" super ")?;
            self.list(w.lower_bounds(), " & ", out)?;
        }
        Ok(())
    }

    fn list(&self, types: &[Ty], separator: &str, out: &mut impl Write) -> fmt::Result {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                out.write_str(separator)?;
            }
            self.ty(ty, true, out)?;
        }
        Ok(())
    }
}

impl Ty {
    /// Render with a custom class naming strategy.
    pub fn to_string_with(&self, strategy: &dyn NameStrategy) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = Printer { strategy }.ty(self, false, &mut out);
        out
    }

    /// Render with simple names only, e.g. `Map<String, Entry<K, V>>`.
    pub fn to_unqualified_string(&self) -> String {
        self.to_string_with(&Unqualified)
    }

    /// Render with simple names wherever `imports` makes them unambiguous.
    pub fn to_simple_string(&self, imports: &ImportContext) -> String {
        self.to_string_with(&Simple::new(imports))
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer {
            strategy: &Qualified,
        }
        .ty(self, false, f)
    }
}
