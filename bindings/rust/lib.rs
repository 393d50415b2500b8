//! Rust bindings for the `tree-sitter-heyvl` grammar.
//!
//! HeyVL is the intermediate verification language of the Caesar verifier.
//! This crate links the generated parser and hands out a
//! `tree_sitter::Language` for it:
//!
//! ```
//! let code = r#"
//! proc inc(x: UInt) -> (y: UInt)
//!     post [y == x + 1]
//! {
//!     y = x + 1
//! }
//! "#;
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_heyvl::LANGUAGE.into())
//!     .expect(tree_sitter_heyvl::LOAD_ERROR_MESSAGE);
//! let tree = parser.parse(code, None).unwrap();
//! assert!(!tree.root_node().has_error());
//! ```

use tree_sitter::Language;
use tree_sitter_language::LanguageFn;

mod loader;

use loader::load;
pub use loader::{LoadError, LOAD_ERROR_MESSAGE};

extern "C" {
    fn tree_sitter_heyvl() -> *const ();
}

/// The tree-sitter [`LanguageFn`] for this grammar.
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_heyvl) };

/// Returns the Tree-sitter [`Language`] for this grammar.
pub fn language() -> Language {
    LANGUAGE.into()
}

/// Returns the HeyVL [`Language`] after checking that a parser accepts it.
///
/// This is the checked counterpart of [`language()`]; failures carry the
/// [`LOAD_ERROR_MESSAGE`] diagnostic.
pub fn try_language() -> Result<Language, LoadError> {
    load(LANGUAGE)
}

/// The syntax highlighting query for this grammar.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");
