use std::collections::HashMap;

use crate::error::Result;
use crate::parser::utils::{get_capture_index, load_query};
use tree_sitter::{Language, Node, Query, QueryCursor, StreamingIterator};

use super::scope::enclosing_block_id;

/// Separator that terminates a label definition. Target keys carry it too,
/// so lookups compare against the label's exact text.
pub(crate) const LABEL_SEPARATOR: char = ':';

const LABELS_SCM: &str = "(labeled_statement label: (statement_identifier) @name) @label";

/// Lookup table from label key (identifier text plus trailing `:`) to the
/// enclosing block of every definition with that name, in scan order.
/// Duplicate names are legal (labels have function scope in C) and all
/// occurrences are retained. Rebuilt fresh for each source unit.
#[derive(Debug, Default)]
pub struct LabelTable {
    entries: HashMap<String, Vec<usize>>,
}

impl LabelTable {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn blocks(&self, key: &str) -> Option<&[usize]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    fn insert(&mut self, key: String, block_id: usize) {
        self.entries.entry(key).or_default().push(block_id);
    }
}

/// The single indexing pass: enumerates every label definition in a tree.
pub(crate) struct LabelIndexer {
    query: Query,
    name_idx: u32,
    label_idx: u32,
}

impl LabelIndexer {
    pub(crate) fn new(language: &Language) -> Result<Self> {
        let query = load_query(language, LABELS_SCM)?;
        let name_idx = get_capture_index(&query, "name")?;
        let label_idx = get_capture_index(&query, "label")?;
        Ok(Self {
            query,
            name_idx,
            label_idx,
        })
    }

    /// Collects every label definition under `root` into a fresh table,
    /// keyed by exact text and mapped to the nearest enclosing block.
    pub(crate) fn index(&self, root: Node, source: &str) -> LabelTable {
        let mut table = LabelTable::default();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, root, source.as_bytes());
        while let Some(mat) = matches.next() {
            let name = mat.captures.iter().find(|c| c.index == self.name_idx);
            let label = mat.captures.iter().find(|c| c.index == self.label_idx);
            let (Some(name), Some(label)) = (name, label) else {
                continue;
            };
            let Ok(text) = name.node.utf8_text(source.as_bytes()) else {
                continue;
            };
            let key = format!("{text}{LABEL_SEPARATOR}");
            table.insert(key, enclosing_block_id(label.node, root));
        }
        table
    }
}
