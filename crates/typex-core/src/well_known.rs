//! Binary names of classes the algorithms treat specially.

use crate::ClassName;

/// Universal top type: every reference type is assignable to it.
pub const OBJECT: &str = "java.lang.Object";
/// Text type.
pub const STRING: &str = "java.lang.String";
pub const NUMBER: &str = "java.lang.Number";
pub const COMPARABLE: &str = "java.lang.Comparable";
/// Interfaces implemented by every array class.
pub const CLONEABLE: &str = "java.lang.Cloneable";
pub const SERIALIZABLE: &str = "java.io.Serializable";

pub const COMPARATOR: &str = "java.util.Comparator";
pub const ENUMERATION: &str = "java.util.Enumeration";
pub const ITERATOR: &str = "java.util.Iterator";
pub const LIST_ITERATOR: &str = "java.util.ListIterator";
pub const COLLECTION: &str = "java.util.Collection";
pub const SET: &str = "java.util.Set";
pub const SORTED_SET: &str = "java.util.SortedSet";
pub const LIST: &str = "java.util.List";
pub const MAP: &str = "java.util.Map";
pub const SORTED_MAP: &str = "java.util.SortedMap";
pub const QUEUE: &str = "java.util.Queue";

pub fn object() -> ClassName {
    ClassName::new(OBJECT)
}

pub fn is_object(class: &ClassName) -> bool {
    class.dims() == 0 && class.name() == OBJECT
}
