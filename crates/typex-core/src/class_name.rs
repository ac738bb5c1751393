//! Nominal type identifiers.
//!
//! A `ClassName` is a binary name (`java.util.Map$Entry`, `int`) plus a number
//! of array dimensions. Packages are separated by `.`, nested types by `$`.
//! Array classes are nominal too: `java.lang.Integer[]` is the class whose
//! component is `java.lang.Integer`.

use std::sync::Arc;

use crate::Primitive;

/// Identifier of a nominal (possibly array) type.
///
/// Cheap to clone: the base name is shared.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ClassName {
    name: Arc<str>,
    dims: u8,
}

impl ClassName {
    /// Most array dimensions a class name can carry.
    pub const MAX_DIMS: u8 = u8::MAX;

    /// Non-array class with the given binary name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            dims: 0,
        }
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::new(primitive.keyword())
    }

    /// Binary name of the element class (without array dimensions).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dims(&self) -> u8 {
        self.dims
    }

    pub fn is_array(&self) -> bool {
        self.dims > 0
    }

    /// The array class whose component is `self`, `None` past [`Self::MAX_DIMS`].
    pub fn array_of(&self) -> Option<Self> {
        Some(Self {
            name: Arc::clone(&self.name),
            dims: self.dims.checked_add(1)?,
        })
    }

    /// Component class, `None` for non-array classes.
    pub fn component(&self) -> Option<Self> {
        if self.dims == 0 {
            return None;
        }
        Some(Self {
            name: Arc::clone(&self.name),
            dims: self.dims - 1,
        })
    }

    /// Innermost non-array class.
    pub fn element(&self) -> Self {
        Self::new(Arc::clone(&self.name))
    }

    /// The primitive this class denotes, if it is a non-array primitive.
    pub fn as_primitive(&self) -> Option<Primitive> {
        if self.dims > 0 {
            return None;
        }
        Primitive::from_keyword(&self.name)
    }

    pub fn is_primitive(&self) -> bool {
        self.as_primitive().is_some()
    }

    /// Trailing segment of the element name, split on both `.` and `$`.
    ///
    /// # Examples
    /// ```
    /// use typex_core::ClassName;
    /// assert_eq!(ClassName::new("a.b.C$D$E").simple_name(), "E");
    /// assert_eq!(ClassName::new("A").simple_name(), "A");
    /// ```
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.name)
    }

    /// Package prefix of the element name, empty for the default package.
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    /// Lexically enclosing class derived from the last `$` separator.
    pub fn enclosing(&self) -> Option<Self> {
        if self.dims > 0 {
            return None;
        }
        let idx = self.name.rfind('$')?;
        // `$` in the package part is not a nesting separator
        if idx < self.package().len() {
            return None;
        }
        Some(Self::new(&self.name[..idx]))
    }
}

/// Trailing segment of a binary name, split on `.` and `$`.
pub fn simple_name_of(name: &str) -> &str {
    match name.rfind(['.', '$']) {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        for _ in 0..self.dims {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Primitive> for ClassName {
    fn from(primitive: Primitive) -> Self {
        Self::primitive(primitive)
    }
}
