//! The type expression model.
//!
//! A [`Ty`] describes a type, not a value. Equality and hashing are structural:
//! two expressions built independently from the same description compare equal.
//!
//! Constructors that need declared facts (arity, interface-ness) take a
//! [`TypeCatalog`] and validate eagerly, so every `Ty` reachable through the
//! public API is well formed.

use crate::well_known;
use crate::{ClassName, Error, Primitive, Result, TypeCatalog};

/// A type expression.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Ty {
    /// Primitive or named class, including array classes such as `Integer[]`.
    Class(ClassName),
    /// Array whose component is not nominal, e.g. `List<String>[]`.
    Array(Box<Ty>),
    /// `raw<args...>`.
    Parameterized(ParameterizedType),
    /// Declared type parameter, e.g. `T`.
    Variable(TypeVariable),
    /// `?`, `? extends X` or `? super X`.
    Wildcard(WildcardType),
}

impl Ty {
    pub fn class(name: impl Into<ClassName>) -> Self {
        Self::Class(name.into())
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::Class(ClassName::primitive(primitive))
    }

    pub fn object() -> Self {
        Self::Class(well_known::object())
    }

    /// Array of `component`.
    ///
    /// Arrays of nominal types are nominal (`Integer[]` is a class) up to
    /// [`ClassName::MAX_DIMS`] dimensions. Generic components and deeper
    /// arrays produce [`Ty::Array`].
    pub fn array_of(component: Ty) -> Self {
        match component {
            Ty::Class(class) => match class.array_of() {
                Some(array) => Ty::Class(array),
                None => Ty::Array(Box::new(Ty::Class(class))),
            },
            other => Ty::Array(Box::new(other)),
        }
    }

    pub fn as_class(&self) -> Option<&ClassName> {
        match self {
            Ty::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_parameterized(&self) -> Option<&ParameterizedType> {
        match self {
            Ty::Parameterized(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Ty::Variable(_))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Ty::Wildcard(_))
    }

    pub fn is_unbounded_wildcard(&self) -> bool {
        matches!(self, Ty::Wildcard(w) if w.is_unbounded())
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Ty::Class(class) if well_known::is_object(class))
    }
}

impl From<ClassName> for Ty {
    fn from(class: ClassName) -> Self {
        Ty::Class(class)
    }
}

impl From<Primitive> for Ty {
    fn from(primitive: Primitive) -> Self {
        Ty::primitive(primitive)
    }
}

impl From<ParameterizedType> for Ty {
    fn from(p: ParameterizedType) -> Self {
        Ty::Parameterized(p)
    }
}

impl From<TypeVariable> for Ty {
    fn from(v: TypeVariable) -> Self {
        Ty::Variable(v)
    }
}

impl From<WildcardType> for Ty {
    fn from(w: WildcardType) -> Self {
        Ty::Wildcard(w)
    }
}

// ============================================================================
// Parameterized types
// ============================================================================

/// A generic class applied to type arguments.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ParameterizedType {
    owner: Option<Box<Ty>>,
    raw: ClassName,
    args: Vec<Ty>,
}

impl ParameterizedType {
    /// Validate and build `raw<args...>`.
    ///
    /// `owner` defaults to the enclosing class of `raw`, if any.
    pub fn new<C: TypeCatalog + ?Sized>(
        catalog: &C,
        owner: Option<Ty>,
        raw: ClassName,
        args: Vec<Ty>,
    ) -> Result<Self> {
        if !catalog.contains(&raw) {
            return Err(Error::ClassNotFound(raw.to_string()));
        }

        let arity = catalog.arity(&raw);
        if arity == 0 || arity != args.len() {
            return Err(Error::MalformedType {
                raw,
                arity,
                found: args.len(),
            });
        }

        let owner = owner.or_else(|| catalog.enclosing_class(&raw).map(Ty::Class));
        Ok(Self {
            owner: owner.map(Box::new),
            raw,
            args,
        })
    }

    /// `raw<?, ..., ?>` with one unbounded wildcard per declared parameter.
    pub fn unbounded<C: TypeCatalog + ?Sized>(catalog: &C, raw: ClassName) -> Result<Self> {
        let args = vec![Ty::Wildcard(WildcardType::unbounded()); catalog.arity(&raw)];
        Self::new(catalog, None, raw, args)
    }

    pub fn owner(&self) -> Option<&Ty> {
        self.owner.as_deref()
    }

    pub fn raw(&self) -> &ClassName {
        &self.raw
    }

    pub fn arguments(&self) -> &[Ty] {
        &self.args
    }

    /// Rebuild with `f` applied to the owner and every argument.
    ///
    /// The arity is unchanged, so no catalog is needed.
    pub fn map_types(&self, mut f: impl FnMut(&Ty) -> Ty) -> Self {
        Self {
            owner: self.owner.as_deref().map(|owner| Box::new(f(owner))),
            raw: self.raw.clone(),
            args: self.args.iter().map(f).collect(),
        }
    }
}

// ============================================================================
// Type variables
// ============================================================================

/// Declaration site of a type variable.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum GenericDeclaration {
    Class(ClassName),
    Method { owner: ClassName, name: String },
    Constructor { owner: ClassName },
}

impl std::fmt::Display for GenericDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class(class) => write!(f, "class {class}"),
            Self::Method { owner, name } => write!(f, "method {owner}.{name}"),
            Self::Constructor { owner } => write!(f, "constructor {owner}"),
        }
    }
}

/// A declared type parameter with its upper bounds.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeVariable {
    declaration: GenericDeclaration,
    name: String,
    bounds: Vec<Ty>,
}

impl TypeVariable {
    /// Validate and build a type variable.
    ///
    /// Empty `bounds` means the single implicit bound `java.lang.Object`.
    /// The first bound may be a class, interface, parameterized type or another
    /// variable, but not an array or wildcard. Later bounds must be interfaces.
    pub fn new<C: TypeCatalog + ?Sized>(
        catalog: &C,
        declaration: GenericDeclaration,
        name: impl Into<String>,
        bounds: Vec<Ty>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::precondition("type variable name cannot be empty"));
        }

        let bounds = if bounds.is_empty() {
            vec![Ty::object()]
        } else {
            bounds
        };
        validate_bounds(catalog, &bounds)?;

        Ok(Self {
            declaration,
            name,
            bounds,
        })
    }

    /// Type variable bounded only by `java.lang.Object`.
    pub fn unbounded(declaration: GenericDeclaration, name: impl Into<String>) -> Self {
        Self {
            declaration,
            name: name.into(),
            bounds: vec![Ty::object()],
        }
    }

    pub fn declaration(&self) -> &GenericDeclaration {
        &self.declaration
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Never empty.
    pub fn bounds(&self) -> &[Ty] {
        &self.bounds
    }

    /// Whether the only bound is the implicit `java.lang.Object`.
    pub fn has_default_bounds(&self) -> bool {
        matches!(self.bounds.as_slice(), [only] if only.is_object())
    }
}

fn validate_bounds<C: TypeCatalog + ?Sized>(catalog: &C, bounds: &[Ty]) -> Result<()> {
    let Some((first, rest)) = bounds.split_first() else {
        return Ok(());
    };

    match first {
        Ty::Class(class) if class.is_array() => {
            return Err(Error::invalid(format!(
                "type variable bound cannot be an array type: {first}"
            )));
        }
        Ty::Array(_) => {
            return Err(Error::invalid(format!(
                "type variable bound cannot be an array type: {first}"
            )));
        }
        Ty::Wildcard(_) => {
            return Err(Error::invalid(format!(
                "type variable bound cannot be a wildcard type: {first}"
            )));
        }
        _ => {}
    }

    for bound in rest {
        let is_interface = match bound {
            Ty::Class(class) => !class.is_array() && catalog.is_interface(class),
            Ty::Parameterized(p) => catalog.is_interface(p.raw()),
            _ => false,
        };
        if !is_interface {
            return Err(Error::invalid(format!(
                "additional type variable bound must be an interface: {bound}"
            )));
        }
    }

    Ok(())
}

// ============================================================================
// Wildcards
// ============================================================================

/// A wildcard type argument.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct WildcardType {
    upper: Vec<Ty>,
    lower: Vec<Ty>,
}

impl WildcardType {
    /// Build a wildcard; empty `upper` means `java.lang.Object`.
    pub fn new(upper: Vec<Ty>, lower: Vec<Ty>) -> Self {
        let upper = if upper.is_empty() {
            vec![Ty::object()]
        } else {
            upper
        };
        Self { upper, lower }
    }

    /// `?`
    pub fn unbounded() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// `? extends bound`
    pub fn extends(bound: Ty) -> Self {
        Self::new(vec![bound], Vec::new())
    }

    /// `? super bound`
    pub fn super_(bound: Ty) -> Self {
        Self::new(Vec::new(), vec![bound])
    }

    /// Never empty.
    pub fn upper_bounds(&self) -> &[Ty] {
        &self.upper
    }

    pub fn lower_bounds(&self) -> &[Ty] {
        &self.lower
    }

    pub fn has_default_upper_bound(&self) -> bool {
        matches!(self.upper.as_slice(), [only] if only.is_object())
    }

    pub fn is_unbounded(&self) -> bool {
        self.has_default_upper_bound() && self.lower.is_empty()
    }

    pub fn map_bounds(&self, mut f: impl FnMut(&Ty) -> Ty) -> Self {
        Self {
            upper: self.upper.iter().map(&mut f).collect(),
            lower: self.lower.iter().map(&mut f).collect(),
        }
    }
}
