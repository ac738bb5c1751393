//! Primitive type definitions and the widening lattice.
//!
//! Primitives are nominal types with no supertypes. Assignability between two
//! primitives follows the widening lattice instead of the catalog:
//!
//! ```text
//! short  <- byte
//! int    <- char, short
//! long   <- int
//! float  <- long
//! double <- float
//! ```
//!
//! `void`, `boolean`, `byte` and `char` widen from nothing but themselves.

/// Primitive type kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Primitive {
    Void = 0,
    Boolean = 1,
    Byte = 2,
    Char = 3,
    Short = 4,
    Int = 5,
    Long = 6,
    Float = 7,
    Double = 8,
}

impl Primitive {
    pub const ALL: [Primitive; 9] = [
        Self::Void,
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// Source keyword, as written in type text.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Binary name of the wrapper class.
    pub fn boxed(self) -> &'static str {
        match self {
            Self::Void => "java.lang.Void",
            Self::Boolean => "java.lang.Boolean",
            Self::Byte => "java.lang.Byte",
            Self::Char => "java.lang.Character",
            Self::Short => "java.lang.Short",
            Self::Int => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Float => "java.lang.Float",
            Self::Double => "java.lang.Double",
        }
    }

    /// Direct predecessors in the widening lattice.
    fn widens_directly_from(self) -> &'static [Primitive] {
        match self {
            Self::Void | Self::Boolean | Self::Byte | Self::Char => &[],
            Self::Short => &[Self::Byte],
            Self::Int => &[Self::Char, Self::Short],
            Self::Long => &[Self::Int],
            Self::Float => &[Self::Long],
            Self::Double => &[Self::Float],
        }
    }

    /// Whether a value of `other` widens to `self`.
    ///
    /// Reflexive and transitive: `long` widens from `byte` through `short` and `int`.
    pub fn widens_from(self, other: Primitive) -> bool {
        if self == other {
            return true;
        }
        self.widens_directly_from()
            .iter()
            .any(|direct| direct.widens_from(other))
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
