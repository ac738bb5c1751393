//! Import contexts for resolving simple class names.

use indexmap::IndexSet;

use crate::class_name::simple_name_of;
use crate::{ClassName, Error, Result};

/// Set of fully-qualified binary names that simple names resolve against.
///
/// Insertion order is preserved; ambiguity errors name candidates in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportContext {
    names: IndexSet<String>,
}

impl ImportContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Resolve a simple name to the unique import whose trailing segment matches.
    ///
    /// Segments split on both `.` and `$`, so `Entry` matches `java.util.Map$Entry`.
    pub fn resolve(&self, simple_name: &str) -> Result<&str> {
        let mut matches = self
            .names
            .iter()
            .filter(|name| simple_name_of(name.as_str()) == simple_name);

        let Some(first) = matches.next() else {
            return Err(Error::ClassNotFound(simple_name.to_owned()));
        };
        if let Some(second) = matches.next() {
            return Err(Error::DuplicateImports(first.clone(), second.clone()));
        }
        Ok(first.as_str())
    }

    /// Whether `class` can be written by its simple name in this context.
    pub fn is_unambiguous(&self, class: &ClassName) -> bool {
        self.resolve(class.simple_name())
            .is_ok_and(|name| name == class.name())
    }
}

impl<S: Into<String>> FromIterator<S> for ImportContext {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
