//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CatalogError, InMemoryCatalog};

pub(super) fn ensure_bundled(catalog: Result<InMemoryCatalog, CatalogError>) -> InMemoryCatalog {
    catalog.unwrap_or_else(|err| panic!("bundled catalog data/java_base.json is invalid: {err}"))
}
