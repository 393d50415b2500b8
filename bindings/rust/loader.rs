//! Checked construction of a [`Language`] from a raw grammar descriptor.

use tree_sitter::{Language, LanguageError, Parser};
use tree_sitter_language::LanguageFn;

/// Diagnostic reported when the HeyVL grammar cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading HeyVL grammar";

/// Failure to turn a grammar descriptor into a usable [`Language`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The descriptor accessor returned a null pointer.
    #[error("Error loading HeyVL grammar")]
    NullDescriptor,
    /// The descriptor was rejected by the runtime, e.g. an unsupported ABI
    /// version or a zeroed table.
    #[error("Error loading HeyVL grammar")]
    Incompatible(#[from] LanguageError),
}

/// Wraps the descriptor returned by `language_fn` and checks that a parser
/// accepts it.
///
/// The accessor is invoked once to inspect the raw pointer; a null pointer is
/// rejected before [`Language::new`] ever sees it.
pub(crate) fn load(language_fn: LanguageFn) -> Result<Language, LoadError> {
    let descriptor = unsafe { (language_fn.into_raw())() };
    if descriptor.is_null() {
        log::error!("{LOAD_ERROR_MESSAGE}: grammar accessor returned null");
        return Err(LoadError::NullDescriptor);
    }

    let language = Language::new(language_fn);
    Parser::new().set_language(&language).inspect_err(|err| {
        log::error!("{LOAD_ERROR_MESSAGE}: {err}");
    })?;

    log::debug!(
        "loaded HeyVL grammar (abi {}, {} node kinds)",
        language.version(),
        language.node_kind_count()
    );
    Ok(language)
}
