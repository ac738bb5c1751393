//! Fixture catalog and helpers shared by unit tests.

use std::sync::LazyLock;

use indoc::indoc;
use typex_core::{ClassName, ImportContext, Ty, TypeCatalog, TypeVariable};

use crate::catalog::InMemoryCatalog;
use crate::parser::TypeParser;

/// Small hierarchies layered over the bundled base catalog.
pub const FIXTURES: &str = indoc! {r#"
    {
      "classes": [
        { "name": "test.DummyClass" },
        { "name": "test.IFake", "kind": "interface", "type_parameters": ["T"] },
        { "name": "test.Fake", "interfaces": ["IFake<DummyClass>"] },
        { "name": "test.ParameterizedTypeFake", "interfaces": ["IFake<IFake<?>>"] },
        { "name": "test.TypeVariableFake", "type_parameters": ["T"], "interfaces": ["IFake<T>"] },
        { "name": "test.SubFake", "superclass": "Fake" },
        { "name": "test.IFake2", "kind": "interface", "type_parameters": ["T"], "interfaces": ["IFake<T>"] },
        { "name": "test.Fake2", "interfaces": ["IFake2<DummyClass>"] },

        { "name": "test.Container", "kind": "interface", "type_parameters": ["T"] },
        { "name": "test.Box", "type_parameters": ["T"], "interfaces": ["Container<T>"] },
        { "name": "test.StringBox", "superclass": "Box<String>" },
        { "name": "test.RawBox", "superclass": "Box" },
        { "name": "test.Pair", "type_parameters": ["A", "B"] },
        { "name": "test.Swap", "type_parameters": ["X", "Y"], "superclass": "Pair<Y, X>" },
        { "name": "test.Numbers", "type_parameters": ["E"], "superclass": "ArrayList<E[]>" },
        {
          "name": "test.Bounded",
          "type_parameters": [
            { "name": "N", "bounds": ["Number", "Serializable"] },
            { "name": "M", "bounds": ["N"] }
          ]
        },
        { "name": "test.Outer", "type_parameters": ["T"] },
        { "name": "test.Outer$Inner", "type_parameters": ["U"] },

        { "name": "another.Integer" }
      ]
    }
"#};

static CATALOG: LazyLock<InMemoryCatalog> = LazyLock::new(|| {
    let mut catalog = InMemoryCatalog::java_base();
    if let Err(err) = catalog.extend_from_json(FIXTURES) {
        panic!("fixture catalog is invalid: {err}");
    }
    catalog
});

static IMPORTS: LazyLock<ImportContext> = LazyLock::new(|| {
    CATALOG
        .class_names()
        .map(ClassName::name)
        .filter(|name| *name != "another.Integer")
        .collect()
});

/// Base catalog plus [`FIXTURES`].
pub fn catalog() -> &'static InMemoryCatalog {
    &CATALOG
}

/// Every fixture class plus the base classes, minus `another.Integer`.
pub fn imports() -> &'static ImportContext {
    &IMPORTS
}

/// Parse with [`imports`] against [`catalog`], panicking on errors.
pub fn ty(text: &str) -> Ty {
    match TypeParser::new(catalog()).imports(imports()).parse(text) {
        Ok(ty) => ty,
        Err(err) => panic!("cannot parse `{text}`: {err}"),
    }
}

/// Declared type parameter `index` of `class`.
pub fn param(class: &str, index: usize) -> TypeVariable {
    catalog().type_parameters(&ClassName::new(class))[index].clone()
}
