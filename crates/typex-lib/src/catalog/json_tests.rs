use indoc::indoc;
use typex_core::{ClassName, Error, Ty, TypeCatalog};

use super::{CatalogError, InMemoryCatalog};
use crate::test_utils::catalog;

fn name(text: &str) -> ClassName {
    ClassName::new(text)
}

fn extend(json: &str) -> Result<InMemoryCatalog, CatalogError> {
    let mut catalog = InMemoryCatalog::java_base();
    catalog.extend_from_json(json)?;
    Ok(catalog)
}

#[test]
fn standalone_catalog() {
    let catalog = InMemoryCatalog::from_json(indoc! {r#"
        {
          "classes": [
            { "name": "Top" },
            { "name": "pkg.Shape", "kind": "interface" },
            { "name": "pkg.Circle", "superclass": "Top", "interfaces": ["Shape"] }
          ]
        }
    "#})
    .unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(catalog.is_interface(&name("pkg.Shape")));
    assert_eq!(catalog.superclass(&name("pkg.Circle")), Some(Ty::class("Top")));
    assert_eq!(catalog.superclass(&name("Top")), Some(Ty::object()));
    assert_eq!(catalog.interfaces(&name("pkg.Circle")), vec![Ty::class("pkg.Shape")]);
}

#[test]
fn forward_references_within_one_document() {
    let catalog = extend(indoc! {r#"
        {
          "classes": [
            { "name": "test.Early", "superclass": "Late<String>" },
            { "name": "test.Late", "type_parameters": ["T"] }
          ]
        }
    "#})
    .unwrap();

    assert_eq!(
        catalog.superclass(&name("test.Early")).map(|t| t.to_string()),
        Some("test.Late<java.lang.String>".to_owned())
    );
}

#[test]
fn bounded_type_parameters() {
    let bounded = catalog().type_parameters(&name("test.Bounded"));

    insta::assert_snapshot!(
        Ty::Variable(bounded[0].clone()),
        @"N extends java.lang.Number & java.io.Serializable"
    );
    assert_eq!(bounded[1].bounds(), &[Ty::Variable(bounded[0].clone())]);
}

#[test]
fn bound_cannot_reference_its_own_parameter() {
    let err = extend(indoc! {r#"
        {
          "classes": [
            {
              "name": "test.Selfish",
              "type_parameters": [{ "name": "T", "bounds": ["Comparable<T>"] }]
            }
          ]
        }
    "#})
    .unwrap_err();

    insta::assert_snapshot!(err, @"invalid declaration of test.Selfish: Class not found: T");
}

#[test]
fn additional_bounds_must_be_interfaces() {
    let err = extend(indoc! {r#"
        {
          "classes": [
            {
              "name": "test.Twice",
              "type_parameters": [{ "name": "T", "bounds": ["Number", "Integer"] }]
            }
          ]
        }
    "#})
    .unwrap_err();

    assert!(matches!(
        err,
        CatalogError::Class { source: Error::InvalidType(_), .. }
    ));
}

#[test]
fn duplicate_class() {
    let err = extend(r#"{ "classes": [{ "name": "java.lang.String" }] }"#).unwrap_err();

    insta::assert_snapshot!(err, @"duplicate class declaration: java.lang.String");
}

#[test]
fn failed_extension_leaves_catalog_unchanged() {
    let mut catalog = InMemoryCatalog::java_base();
    let before = catalog.len();
    let result = catalog.extend_from_json(indoc! {r#"
        {
          "classes": [
            { "name": "test.Fine" },
            { "name": "test.Broken", "superclass": "Nowhere" }
          ]
        }
    "#});

    assert!(result.is_err());
    assert_eq!(catalog.len(), before);
    assert!(!catalog.contains(&name("test.Fine")));
}

#[test]
fn supertype_kinds_are_checked() {
    let cases = [
        (
            r#"{ "classes": [{ "name": "test.A", "superclass": "List<String>" }] }"#,
            "invalid declaration of test.A: `java.util.List<java.lang.String>` is not a class",
        ),
        (
            r#"{ "classes": [{ "name": "test.B", "interfaces": ["Number"] }] }"#,
            "invalid declaration of test.B: `java.lang.Number` is not an interface",
        ),
        (
            r#"{ "classes": [{ "name": "test.C", "kind": "interface", "superclass": "Object" }] }"#,
            "invalid declaration of test.C: an interface cannot declare a superclass",
        ),
        (
            r#"{ "classes": [{ "name": "test.D", "superclass": "Number[]" }] }"#,
            "invalid declaration of test.D: `java.lang.Number[]` cannot be a supertype",
        ),
    ];
    for (json, expected) in cases {
        assert_eq!(extend(json).unwrap_err().to_string(), expected);
    }
}

#[test]
fn supertype_arity_is_checked() {
    let err = extend(r#"{ "classes": [{ "name": "test.E", "interfaces": ["Map<String>"] }] }"#)
        .unwrap_err();

    assert!(matches!(
        err,
        CatalogError::Class { source: Error::MalformedType { arity: 2, found: 1, .. }, .. }
    ));
}

#[test]
fn malformed_json() {
    let err = InMemoryCatalog::from_json(r#"{ "classes": [ { "kind": "class" } ] }"#).unwrap_err();

    assert!(matches!(err, CatalogError::Json(_)));
}
