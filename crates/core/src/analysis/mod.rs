mod goto_into_block;
mod labels;
mod scope;

pub use goto_into_block::GotoIntoBlock;

use crate::error::Result;
use crate::model::{Finding, Severity};
use crate::parser::CParser;
use std::path::Path;
use tracing::{debug, warn};
use tree_sitter::Node;
use walkdir::WalkDir;

/// A single static-analysis rule, run once per parsed source unit.
///
/// Rules are pure functions over the tree: malformed or ambiguous shapes
/// degrade to "no finding" rather than erroring, and checking one statement
/// never aborts the rest of the unit.
pub trait Rule {
    fn name(&self) -> &'static str;
    fn severity(&self) -> Severity;
    fn themes(&self) -> &'static [&'static str];
    fn check(&self, root: Node, source: &str) -> Vec<Finding>;
}

/// Owns the grammar and the rule set; drives both over source units.
pub struct Analyzer {
    parser: CParser,
    rules: Vec<Box<dyn Rule>>,
}

impl Analyzer {
    pub fn new() -> Result<Self> {
        let parser = CParser::new();
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(GotoIntoBlock::new(parser.language())?)];
        Ok(Self { parser, rules })
    }

    /// Parses one source unit and runs every registered rule on it.
    /// Each unit gets a fresh analysis; no state survives between calls.
    pub fn analyze_source(&self, path: Option<&Path>, source: &str) -> Result<Vec<Finding>> {
        let tree = self.parser.parse(source)?;
        let mut findings = Vec::new();
        for rule in &self.rules {
            findings.extend(rule.check(tree.root_node(), source));
        }
        if let Some(path) = path {
            for finding in &mut findings {
                finding.path = Some(path.to_path_buf());
            }
        }
        Ok(findings)
    }

    pub fn analyze_file(&self, path: &Path) -> Result<Vec<Finding>> {
        let source = std::fs::read_to_string(path)?;
        self.analyze_source(Some(path), &source)
    }

    /// Walks a directory and analyzes every `.c`/`.h` file found. Units are
    /// independent, so an outer scheduler could fan these out; the walk
    /// itself stays sequential.
    pub fn analyze_path(&self, path: &Path) -> Result<Vec<Finding>> {
        if path.is_file() {
            return self.analyze_file(path);
        }
        let mut findings = Vec::new();
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            match entry.path().extension().and_then(|ext| ext.to_str()) {
                Some("c") | Some("h") => {}
                _ => continue,
            }
            debug!("analyzing {}", entry.path().display());
            // Units are independent; one unreadable file must not abort the
            // walk or discard findings already collected.
            match self.analyze_file(entry.path()) {
                Ok(file_findings) => findings.extend(file_findings),
                Err(err) => warn!("skipping {}: {}", entry.path().display(), err),
            }
        }
        Ok(findings)
    }
}
