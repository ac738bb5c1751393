use typex_core::{ClassName, Error, Ty};

use super::{
    actual_type_argument, array_type, component_type, is_array, is_simple_parameterized_type,
    raw_type,
};
use crate::test_utils::{catalog, param, ty};

#[test]
fn raw_type_of_concrete_types() {
    assert_eq!(raw_type(&ty("String")), Ok(ClassName::new("java.lang.String")));
    assert_eq!(raw_type(&ty("List<String>")), Ok(ClassName::new("java.util.List")));
    assert_eq!(
        raw_type(&ty("List<String>[]")),
        Ok(ClassName::new("java.util.List").array_of().unwrap())
    );
}

#[test]
fn raw_type_rejects_variables_and_wildcards() {
    let t = Ty::Variable(param("test.Box", 0));

    insta::assert_snapshot!(raw_type(&t).unwrap_err(), @"cannot obtain raw type from T");
    assert!(matches!(raw_type(&ty("?")), Err(Error::Precondition(_))));
}

#[test]
fn arrays_and_components() {
    assert!(is_array(&ty("int[]")));
    assert!(is_array(&ty("List<String>[]")));
    assert!(!is_array(&ty("List<String>")));
    assert!(!is_array(&Ty::Variable(param("test.Box", 0))));

    assert_eq!(component_type(&ty("int[][]")), Some(ty("int[]")));
    assert_eq!(component_type(&ty("List<String>[]")), Some(ty("List<String>")));
    assert_eq!(component_type(&ty("String")), None);
    assert_eq!(component_type(&ty("?")), None);
}

#[test]
fn array_type_is_inverse_of_component_type() {
    for text in ["int", "String[]", "List<String>", "Map<String, Integer>[]"] {
        let component = ty(text);
        let array = array_type(component.clone());
        assert!(is_array(&array));
        assert_eq!(component_type(&array), Some(component), "{text}");
    }
}

#[test]
fn simple_parameterized_type() {
    let collection = ClassName::new("java.util.Collection");

    assert!(is_simple_parameterized_type(catalog(), &ty("ArrayList<String>"), &collection));
    assert!(is_simple_parameterized_type(catalog(), &ty("Collection<?>"), &collection));
    assert!(!is_simple_parameterized_type(catalog(), &ty("ArrayList"), &collection));
    assert!(!is_simple_parameterized_type(catalog(), &ty("Map<String, String>"), &collection));
    assert!(!is_simple_parameterized_type(
        catalog(),
        &ty("Comparator<String>"),
        &collection
    ));
}

#[test]
fn single_type_argument() {
    assert_eq!(actual_type_argument(&ty("List<String>")), Ok(&ty("String")));
    insta::assert_snapshot!(
        actual_type_argument(&ty("Map<String, Long>")).unwrap_err(),
        @"type must be a parameterized type with one actual type argument: java.util.Map<java.lang.String, java.lang.Long>"
    );
    assert!(actual_type_argument(&ty("String")).is_err());
}

#[test]
fn raw_type_rejects_arrays_past_the_dimension_limit() {
    let deepest = (0..ClassName::MAX_DIMS).fold(ty("String"), |ty, _| array_type(ty));

    assert_eq!(
        raw_type(&array_type(deepest)),
        Err(Error::too_many_dimensions())
    );
}
