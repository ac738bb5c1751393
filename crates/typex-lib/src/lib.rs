//! typex: generic type expressions as values.
//!
//! Parse, print, compare and resolve generic nominal types described by a
//! [`TypeCatalog`](typex_core::TypeCatalog).
//!
//! # Example
//!
//! ```
//! use typex_core::ImportContext;
//! use typex_lib::analyze::{is_assignable, resolve_supertype_of};
//! use typex_lib::catalog::InMemoryCatalog;
//! use typex_lib::parser::parse_type_with_imports;
//!
//! let catalog = InMemoryCatalog::java_base();
//! let imports: ImportContext = ["java.util.ArrayList", "java.util.Collection", "java.util.List",
//!     "java.lang.Number", "java.lang.Integer"].into_iter().collect();
//! let parse = |text| parse_type_with_imports(&catalog, text, &imports).unwrap();
//!
//! assert!(is_assignable(&catalog, &parse("List<? extends Number>"), &parse("List<Integer>")));
//! assert!(!is_assignable(&catalog, &parse("List<Number>"), &parse("List<Integer>")));
//!
//! let collection = resolve_supertype_of(&catalog, &parse("ArrayList<Integer>"), &"java.util.Collection".into());
//! assert_eq!(collection.unwrap().unwrap().to_unqualified_string(), "Collection<Integer>");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod catalog;
pub mod generics;
pub mod parser;
pub mod token;

pub use catalog::{CatalogError, InMemoryCatalog};
pub use parser::{TypeParser, parse_type, parse_type_with_imports};
pub use token::{TokenCache, TypeToken};
pub use typex_core::{Error, Result};

#[cfg(test)]
mod test_utils;
