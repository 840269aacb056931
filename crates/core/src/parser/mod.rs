use crate::error::{GotolintError, Result};
use tree_sitter::{Language, Parser, Tree};

pub mod utils;

/// Thin wrapper around the tree-sitter C grammar. Parsing is the job of
/// tree-sitter; the analysis passes only ever see the finished tree.
pub struct CParser {
    language: Language,
}

impl CParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_c::LANGUAGE.into(),
        }
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| GotolintError::Parsing(format!("Failed to load C grammar: {e}")))?;
        parser
            .parse(source, None)
            .ok_or_else(|| GotolintError::Parsing("Parser produced no tree".to_string()))
    }
}

impl Default for CParser {
    fn default() -> Self {
        Self::new()
    }
}
