//! Exclusion rules applied while the visitor records graph entries.
use crate::ast::{Ast, NodeId};
use crate::graph::resolver;

/// Prefix-based exclusion of nodes from the call graph.
///
/// A node is excluded when its source file path starts with any of
/// `path_prefixes`, or its fully-qualified display name starts with any of
/// `name_prefixes`. The two predicates are independent and combined with
/// OR. Nodes with no associated source file are never excluded.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    pub path_prefixes: Vec<String>,
    pub name_prefixes: Vec<String>,
}

impl ExclusionFilter {
    #[must_use]
    pub fn new(path_prefixes: Vec<String>, name_prefixes: Vec<String>) -> Self {
        Self { path_prefixes, name_prefixes }
    }

    #[must_use]
    pub fn is_excluded(&self, ast: &Ast, id: NodeId) -> bool {
        let Some(loc) = &ast.node(id).location else {
            return false;
        };

        let path = loc.file.to_string_lossy();
        if self.path_prefixes.iter().any(|p| path.starts_with(p.as_str())) {
            return true;
        }

        let fqp = resolver::fully_qualified_pretty(ast, id);
        self.name_prefixes.iter().any(|p| fqp.starts_with(p.as_str()))
    }
}
