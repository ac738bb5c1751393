//! Recursive-descent parser for type text.
//!
//! # Grammar
//!
//! ```text
//! type          = qualified_name array_suffix* generic_args? array_suffix*
//!               | wildcard
//! qualified_name= IDENT ("." IDENT)*
//! generic_args  = "<" type ("," type)* ">"
//! wildcard      = "?" ("extends" bounds)? ("super" bounds)?
//! bounds        = type ("&" type)*
//! array_suffix  = "[" "]"
//! ```
//!
//! Whitespace between tokens is insignificant. Array suffixes on either side
//! of the argument list apply to the parameterized type as a whole, up to
//! `ClassName::MAX_DIMS` of them.
//!
//! The parser fails fast: the first error aborts the parse. Argument counts
//! are checked against the catalog when each parameterized type is built.

mod core;
mod grammar;
pub mod lexer;
mod names;

use typex_core::{ImportContext, Result, Ty, TypeCatalog, TypeVariable};

use self::core::Parser;
use self::names::Names;

/// Default nesting limit for type arguments and bounds.
pub const MAX_DEPTH: u32 = 256;

/// Configurable parser for type text.
///
/// ```
/// use typex_core::ImportContext;
/// use typex_lib::catalog::InMemoryCatalog;
/// use typex_lib::parser::TypeParser;
///
/// let catalog = InMemoryCatalog::java_base();
/// let imports = ImportContext::new().with("java.util.List").with("java.lang.String");
/// let ty = TypeParser::new(&catalog).imports(&imports).parse("List<String>").unwrap();
/// assert_eq!(ty.to_string(), "java.util.List<java.lang.String>");
/// ```
pub struct TypeParser<'a, C: ?Sized> {
    catalog: &'a C,
    imports: Option<&'a ImportContext>,
    variables: &'a [TypeVariable],
    max_depth: u32,
}

impl<'a, C: TypeCatalog + ?Sized> TypeParser<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            imports: None,
            variables: &[],
            max_depth: MAX_DEPTH,
        }
    }

    /// Import context that simple class names resolve against.
    pub fn imports(mut self, imports: &'a ImportContext) -> Self {
        self.imports = Some(imports);
        self
    }

    /// Type variables in scope; they shadow imported classes of the same name.
    pub fn variables(mut self, variables: &'a [TypeVariable]) -> Self {
        self.variables = variables;
        self
    }

    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn parse(&self, text: &str) -> Result<Ty> {
        let names = Names::new(self.catalog, self.imports, self.variables);
        Parser::new(text, lexer::lex(text), names, self.max_depth).parse_root()
    }
}

/// Parse type text using fully-qualified names only.
pub fn parse_type<C: TypeCatalog + ?Sized>(catalog: &C, text: &str) -> Result<Ty> {
    TypeParser::new(catalog).parse(text)
}

/// Parse type text, resolving simple names against `imports`.
pub fn parse_type_with_imports<C: TypeCatalog + ?Sized>(
    catalog: &C,
    text: &str,
    imports: &ImportContext,
) -> Result<Ty> {
    TypeParser::new(catalog).imports(imports).parse(text)
}
