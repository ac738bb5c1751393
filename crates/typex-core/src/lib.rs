#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for typex: a model of generic nominal type expressions.
//!
//! - [`Ty`]: the closed set of type expressions (classes, arrays, parameterized
//!   types, type variables, wildcards) with structural equality.
//! - [`TypeCatalog`]: the contract through which declared facts about classes
//!   (arity, supertypes) are looked up.
//! - [`ImportContext`] and the printer strategies in [`display`]: the textual
//!   side of the model.
//!
//! Algorithms over the model (erasure, assignability, parsing, supertype
//! resolution) live in `typex-lib`.

mod catalog;
mod class_name;
pub mod display;
mod error;
mod imports;
mod primitive;
mod ty;
pub mod visit;
pub mod well_known;

pub use catalog::TypeCatalog;
pub use class_name::{ClassName, simple_name_of};
pub use display::{NameStrategy, Qualified, Simple, Unqualified};
pub use error::{Error, Result};
pub use imports::ImportContext;
pub use primitive::Primitive;
pub use ty::{GenericDeclaration, ParameterizedType, Ty, TypeVariable, WildcardType};
pub use visit::TypeVisitor;

#[cfg(test)]
mod class_name_tests;
#[cfg(test)]
mod test_catalog;
