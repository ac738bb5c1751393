use typex_core::{ClassName, Error, ParameterizedType, Ty};

use super::{resolve_supertype, resolve_supertype_of};
use crate::test_utils::{catalog, param, ty};

fn resolve(descendant: &str, ancestor: &str) -> Option<Ty> {
    resolve_supertype(
        catalog(),
        &ClassName::new(descendant),
        &ClassName::new(ancestor),
    )
}

fn generic(raw: &str, args: Vec<Ty>) -> Ty {
    ParameterizedType::new(catalog(), None, raw.into(), args)
        .unwrap()
        .into()
}

#[test]
fn class_implementation() {
    assert_eq!(resolve("test.Fake", "test.IFake"), Some(ty("IFake<DummyClass>")));
}

#[test]
fn parameterized_type_implementation() {
    assert_eq!(
        resolve("test.ParameterizedTypeFake", "test.IFake"),
        Some(ty("IFake<IFake<?>>"))
    );
}

#[test]
fn type_variable_implementation() {
    let t = param("test.TypeVariableFake", 0);

    assert_eq!(
        resolve("test.TypeVariableFake", "test.IFake"),
        Some(generic("test.IFake", vec![Ty::Variable(t)]))
    );
}

#[test]
fn superclass_implementation() {
    assert_eq!(resolve("test.SubFake", "test.IFake"), Some(ty("IFake<DummyClass>")));
}

#[test]
fn superinterface_implementation() {
    assert_eq!(resolve("test.Fake2", "test.IFake"), Some(ty("IFake<DummyClass>")));
}

#[test]
fn unresolved_parameters_stay_free() {
    let t = param("test.Box", 0);
    let resolved = resolve("test.Box", "test.Container").unwrap();

    assert_eq!(resolved, generic("test.Container", vec![Ty::Variable(t.clone())]));
    assert_eq!(resolved.type_variables(), vec![t]);
}

#[test]
fn arguments_are_carried_through_superclasses() {
    assert_eq!(
        resolve("test.StringBox", "test.Container"),
        Some(ty("Container<String>"))
    );
    assert_eq!(
        resolve("java.lang.Integer", "java.lang.Comparable"),
        Some(ty("Comparable<Integer>"))
    );
}

#[test]
fn parameters_are_substituted_by_position() {
    let x = Ty::Variable(param("test.Swap", 0));
    let y = Ty::Variable(param("test.Swap", 1));

    assert_eq!(resolve("test.Swap", "test.Pair"), Some(generic("test.Pair", vec![y, x])));
}

#[test]
fn raw_edge_is_kept_when_it_matches() {
    assert_eq!(resolve("test.RawBox", "test.Box"), Some(ty("Box")));
}

#[test]
fn raw_edge_promotes_to_wildcards() {
    assert_eq!(
        resolve("test.RawBox", "test.Container"),
        Some(ty("Container<?>"))
    );
}

#[test]
fn class_is_its_own_ancestor() {
    assert_eq!(resolve("test.Box", "test.Box"), Some(ty("Box")));
}

#[test]
fn unrelated_classes() {
    assert_eq!(resolve("java.lang.String", "java.util.List"), None);
    assert_eq!(resolve("test.Fake", "test.IFake2"), None);
    assert_eq!(resolve("test.Unknown", "java.lang.Object"), None);
}

#[test]
fn object_is_reached_as_a_class() {
    assert_eq!(resolve("test.Fake", "java.lang.Object"), Some(ty("Object")));
}

#[test]
fn parameterized_descendant_seeds_bindings() {
    let collection = ClassName::new("java.util.Collection");

    assert_eq!(
        resolve_supertype_of(catalog(), &ty("ArrayList<String>"), &collection),
        Ok(Some(ty("Collection<String>")))
    );
    assert_eq!(
        resolve_supertype_of(catalog(), &ty("Numbers<Long>"), &collection),
        Ok(Some(ty("Collection<Long[]>")))
    );
    assert_eq!(
        resolve_supertype_of(
            catalog(),
            &ty("Swap<String, Integer>"),
            &ClassName::new("test.Pair")
        ),
        Ok(Some(ty("Pair<Integer, String>")))
    );
}

#[test]
fn parameterized_descendant_matching_ancestor() {
    let list = ty("List<? extends Number>");

    assert_eq!(
        resolve_supertype_of(catalog(), &list, &ClassName::new("java.util.List")),
        Ok(Some(list))
    );
}

#[test]
fn only_classes_and_parameterized_types_have_supertypes() {
    let err = resolve_supertype_of(catalog(), &ty("?"), &ClassName::new("java.lang.Object"))
        .unwrap_err();

    assert!(matches!(err, Error::Precondition(_)));
}
