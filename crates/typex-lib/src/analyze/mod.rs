//! Algorithms over type expressions: erasure, assignability and supertype
//! resolution.

mod assignability;
mod erasure;
mod inspect;
mod substitution;
mod supertype;

pub use assignability::{is_assignable, is_class_assignable};
pub use erasure::{erase, erased_type};
pub use inspect::{
    actual_type_argument, array_type, component_type, is_array, is_simple_parameterized_type,
    raw_type,
};
pub use substitution::Substitution;
pub use supertype::{resolve_supertype, resolve_supertype_of};

#[cfg(test)]
mod inspect_tests;
#[cfg(test)]
mod supertype_tests;
