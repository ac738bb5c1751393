//! Errors raised while building, parsing or validating type expressions.

use crate::ClassName;

/// Errors that can occur when constructing or parsing type expressions.
///
/// All errors are local to the failing call; no structure is left partially built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Parameterized type whose argument count disagrees with the raw type's arity.
    #[error(
        "malformed parameterized type `{raw}`: declares {arity} type parameters, found {found} arguments"
    )]
    MalformedType {
        raw: ClassName,
        arity: usize,
        found: usize,
    },

    /// Type expression not allowed in this position (bare variable token, bad bound, ...).
    #[error("{0}")]
    InvalidType(String),

    /// No class with the given name is known.
    #[error("Class not found: {0}")]
    ClassNotFound(String),

    /// A simple name matched more than one import.
    #[error("Duplicate imports: {0} and {1}")]
    DuplicateImports(String, String),

    /// A required argument was missing or empty.
    #[error("{0}")]
    Precondition(String),

    /// Type text does not follow the grammar.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// Type text nested too deeply.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidType(message.into())
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    pub fn too_many_dimensions() -> Self {
        Self::InvalidType(format!(
            "array type cannot have more than {} dimensions",
            ClassName::MAX_DIMS
        ))
    }

    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }
}

/// Result type for type expression operations.
pub type Result<T> = std::result::Result<T, Error>;
