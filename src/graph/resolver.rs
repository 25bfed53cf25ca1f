//! Qualified-name resolution over the lowered AST.
//!
//! Names are rebuilt on every call by walking semantic-parent links up to
//! the translation-unit root. No caching: the arena is immutable once the
//! parse pass finishes and the walk is cheap relative to printing.
use crate::ast::{Ast, NodeId, NodeKind};

/// Scope-chain name using plain spellings, joined by `::`.
///
/// Empty for the translation-unit root. A top-level symbol yields its bare
/// spelling with no leading separator.
#[must_use]
pub fn fully_qualified(ast: &Ast, id: NodeId) -> String {
    let node = ast.node(id);
    if node.kind == NodeKind::TranslationUnit {
        return String::new();
    }
    let prefix = node.parent.map(|p| fully_qualified(ast, p)).unwrap_or_default();
    join_scope(prefix, &node.spelling)
}

/// Scope-chain name where the innermost component is the node's display
/// name (carries the overload signature), still prefixed by the plain
/// spellings of its ancestors.
#[must_use]
pub fn fully_qualified_pretty(ast: &Ast, id: NodeId) -> String {
    let node = ast.node(id);
    if node.kind == NodeKind::TranslationUnit {
        return String::new();
    }
    let prefix = node.parent.map(|p| fully_qualified(ast, p)).unwrap_or_default();
    join_scope(prefix, &node.display_name)
}

fn join_scope(prefix: String, component: &str) -> String {
    if prefix.is_empty() {
        component.to_string()
    } else {
        format!("{prefix}::{component}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;

    fn scope_chain(names: &[(&str, &str)]) -> (Ast, NodeId) {
        let mut ast = Ast::new();
        let mut cur = ast.push(Node::new(NodeKind::TranslationUnit));
        for (spelling, display) in names {
            cur = ast.add_child(cur, Node::named(NodeKind::Other, spelling, display));
        }
        (ast, cur)
    }

    #[test]
    fn test_translation_unit_root_is_empty() {
        let mut ast = Ast::new();
        let tu = ast.push(Node::new(NodeKind::TranslationUnit));
        assert_eq!(fully_qualified(&ast, tu), "");
        assert_eq!(fully_qualified_pretty(&ast, tu), "");
    }

    #[test]
    fn test_top_level_symbol_has_no_separator() {
        let (ast, leaf) = scope_chain(&[("main", "main()")]);
        assert_eq!(fully_qualified(&ast, leaf), "main");
        assert_eq!(fully_qualified_pretty(&ast, leaf), "main()");
    }

    #[test]
    fn test_nested_scopes_join_with_double_colon() {
        let (ast, leaf) =
            scope_chain(&[("ns", "ns"), ("Widget", "Widget"), ("resize", "resize(int, int)")]);
        assert_eq!(fully_qualified(&ast, leaf), "ns::Widget::resize");
        assert_eq!(fully_qualified_pretty(&ast, leaf), "ns::Widget::resize(int, int)");
    }

    #[test]
    fn test_pretty_prefix_uses_plain_spellings() {
        // Only the innermost component contributes its display name.
        let (ast, leaf) = scope_chain(&[("Outer", "Outer<T>"), ("f", "f(T)")]);
        assert_eq!(fully_qualified_pretty(&ast, leaf), "Outer::f(T)");
    }

    #[test]
    fn test_orphan_node_resolves_to_own_name() {
        let mut ast = Ast::new();
        let orphan = ast.push(Node::named(NodeKind::FunctionDecl, "free", "free()"));
        assert_eq!(fully_qualified(&ast, orphan), "free");
    }
}
