use crate::error::{GotolintError, Result};
use crate::model::Range;
use tree_sitter::{Language, Node, Query};

/// Converts a tree-sitter range to our internal Range model.
pub fn range_from_ts(range: tree_sitter::Range) -> Range {
    Range {
        start_line: range.start_point.row,
        start_col: range.start_point.column,
        end_line: range.end_point.row,
        end_col: range.end_point.column,
    }
}

/// Loads a tree-sitter query from an SCM string.
pub fn load_query(language: &Language, scm: &str) -> Result<Query> {
    Query::new(language, scm)
        .map_err(|e| GotolintError::Parsing(format!("Invalid query: {:?}", e)))
}

/// Gets the index of a capture name in a query.
pub fn get_capture_index(query: &Query, name: &str) -> Result<u32> {
    query
        .capture_index_for_name(name)
        .ok_or_else(|| GotolintError::Parsing(format!("Capture name '{}' not found in SCM", name)))
}

/// Children of `node` with trivia filtered out. Comments are extras in the
/// C grammar and may appear between any two tokens.
pub fn significant_children<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}
