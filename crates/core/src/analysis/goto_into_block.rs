use crate::error::Result;
use crate::model::{Finding, Severity};
use crate::parser::utils::{load_query, range_from_ts, significant_children};
use tree_sitter::{Language, Node, Query, QueryCursor, StreamingIterator};

use super::Rule;
use super::labels::{LABEL_SEPARATOR, LabelIndexer, LabelTable};
use super::scope::block_chain_ids;

const GOTOS_SCM: &str = "(goto_statement) @goto";

const DESCRIPTION: &str = "Do not enter a block via a goto.";
const EXPLANATION: &str = "A goto that enters a block from outside bypasses the \
    initialization of objects declared inside it, so the program's behavior at \
    run time is undefined.";

/// Flags `goto LABEL` statements whose target label lives inside a block
/// that does not lexically enclose the goto itself.
///
/// Conservative by design: a missing, non-identifier, or undefined target is
/// never a finding. The rule does not model statement positions inside the
/// entered block, so an entry point that precedes every declaration (well
/// defined in C) is still flagged.
pub struct GotoIntoBlock {
    indexer: LabelIndexer,
    goto_query: Query,
}

impl GotoIntoBlock {
    pub fn new(language: &Language) -> Result<Self> {
        Ok(Self {
            indexer: LabelIndexer::new(language)?,
            goto_query: load_query(language, GOTOS_SCM)?,
        })
    }

    fn check_jump(
        &self,
        jump: Node,
        root: Node,
        source: &str,
        table: &LabelTable,
    ) -> Option<Finding> {
        let children = significant_children(&jump);

        // Only the `goto LABEL` shape is a candidate; error-recovered trees
        // and computed gotos fall out here.
        let keyword = children.first()?;
        if keyword.kind() != "goto" {
            return None;
        }
        let target = children.get(1)?;
        if target.kind() != "statement_identifier" {
            return None;
        }

        let text = target.utf8_text(source.as_bytes()).ok()?;
        let key = format!("{text}{LABEL_SEPARATOR}");
        let blocks = table.blocks(&key)?;

        // The jump is legal if any block recorded for the label encloses the
        // jump itself. Checking every recorded occurrence keeps reused label
        // names (one per function) from producing spurious findings.
        let chain = block_chain_ids(jump, root);
        if blocks.iter().any(|block| chain.contains(block)) {
            return None;
        }

        Some(Finding {
            path: None,
            range: range_from_ts(jump.range()),
            rule: self.name(),
            severity: self.severity(),
            themes: self.themes(),
            description: DESCRIPTION,
            explanation: EXPLANATION,
        })
    }
}

impl Rule for GotoIntoBlock {
    fn name(&self) -> &'static str {
        "goto-into-block"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn themes(&self) -> &'static [&'static str] {
        &["bugs", "control-flow"]
    }

    fn check(&self, root: Node, source: &str) -> Vec<Finding> {
        let table = self.indexer.index(root, source);
        if table.is_empty() {
            // No labels anywhere: no goto can enter a block.
            return Vec::new();
        }

        let mut findings = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.goto_query, root, source.as_bytes());
        while let Some(mat) = matches.next() {
            for capture in mat.captures {
                if let Some(finding) = self.check_jump(capture.node, root, source, &table) {
                    findings.push(finding);
                }
            }
        }
        findings
    }
}
