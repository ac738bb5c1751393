use crate::{ClassName, Primitive};

#[test]
fn simple_name_plain() {
    assert_eq!(ClassName::new("A").simple_name(), "A");
    assert_eq!(ClassName::new("a.B").simple_name(), "B");
    assert_eq!(ClassName::new("a.b.C").simple_name(), "C");
}

#[test]
fn simple_name_member_classes() {
    assert_eq!(ClassName::new("A$B").simple_name(), "B");
    assert_eq!(ClassName::new("a.B$C").simple_name(), "C");
    assert_eq!(ClassName::new("a.b.C$D").simple_name(), "D");
    assert_eq!(ClassName::new("A$B$C").simple_name(), "C");
    assert_eq!(ClassName::new("a.B$C$D").simple_name(), "D");
    assert_eq!(ClassName::new("a.b.C$D$E").simple_name(), "E");
}

#[test]
fn package_prefix() {
    assert_eq!(ClassName::new("java.util.Map$Entry").package(), "java.util");
    assert_eq!(ClassName::new("Top").package(), "");
}

#[test]
fn enclosing_class() {
    let entry = ClassName::new("java.util.Map$Entry");
    assert_eq!(entry.enclosing(), Some(ClassName::new("java.util.Map")));
    assert_eq!(ClassName::new("java.util.Map").enclosing(), None);
    assert_eq!(ClassName::new("a.B$C$D").enclosing(), Some(ClassName::new("a.B$C")));
    assert_eq!(ClassName::new("we$ird.pkg.Top").enclosing(), None);
}

#[test]
fn array_dimensions() {
    let integer = ClassName::new("java.lang.Integer");
    let matrix = integer.array_of().unwrap().array_of().unwrap();

    assert!(matrix.is_array());
    assert_eq!(matrix.dims(), 2);
    assert_eq!(matrix.to_string(), "java.lang.Integer[][]");
    assert_eq!(matrix.component(), Some(integer.array_of().unwrap()));
    assert_eq!(matrix.element(), integer);
    assert_eq!(integer.component(), None);
    assert_eq!(matrix.simple_name(), "Integer");
    assert_eq!(matrix.enclosing(), None);
}

#[test]
fn primitives() {
    let int = ClassName::primitive(Primitive::Int);
    assert_eq!(int.as_primitive(), Some(Primitive::Int));
    assert!(int.is_primitive());
    assert!(!int.array_of().unwrap().is_primitive());
    assert_eq!(ClassName::new("java.lang.Integer").as_primitive(), None);
}

#[test]
fn array_dimensions_stop_at_limit() {
    let mut class = ClassName::new("int");
    while let Some(array) = class.array_of() {
        class = array;
    }

    assert_eq!(class.dims(), ClassName::MAX_DIMS);
    assert_eq!(class.component().map(|c| c.dims()), Some(ClassName::MAX_DIMS - 1));
}
