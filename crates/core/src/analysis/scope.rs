use tree_sitter::Node;

/// Node kind of a brace-delimited lexical scope in the C grammar: function
/// bodies, loop and conditional bodies, and bare blocks all parse to it.
pub(crate) const BLOCK_KIND: &str = "compound_statement";

/// Nearest enclosing block of `node`, or the tree root when the node sits
/// outside any block. Block identity is the node id, never structural
/// equality: two textually identical blocks at different positions are
/// distinct scopes.
pub(crate) fn enclosing_block_id(node: Node, root: Node) -> usize {
    let mut current = node;
    while let Some(parent) = current.parent() {
        if parent.kind() == BLOCK_KIND {
            return parent.id();
        }
        current = parent;
    }
    root.id()
}

/// Every block enclosing `node`, innermost first, with the tree root
/// appended as the sentinel outermost scope.
pub(crate) fn block_chain_ids(node: Node, root: Node) -> Vec<usize> {
    let mut chain = Vec::new();
    let mut current = node;
    while let Some(parent) = current.parent() {
        if parent.kind() == BLOCK_KIND {
            chain.push(parent.id());
        }
        current = parent;
    }
    chain.push(root.id());
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CParser;

    #[test]
    fn chain_lists_scopes_innermost_first() {
        let source = "void f(void) { { goto FOO; } }";
        let parser = CParser::new();
        let tree = parser.parse(source).unwrap();
        let root = tree.root_node();

        let goto_node = root
            .descendant_for_byte_range(source.find("goto").unwrap(), source.find(";").unwrap())
            .unwrap();

        let chain = block_chain_ids(goto_node, root);
        // Inner block, function body, root sentinel.
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.last(), Some(&root.id()));
        assert_eq!(chain[0], enclosing_block_id(goto_node, root));
    }
}
