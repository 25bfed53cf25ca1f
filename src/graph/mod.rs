//! Call-graph store and the AST walk that populates it.
//!
//! The walk runs once per translation unit after lowering; the resulting
//! [`CallGraph`] is read-only for the rest of the process (queries and
//! printing never mutate it).
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::ast::{Ast, NodeId};

pub mod filter;
pub mod resolver;

use filter::ExclusionFilter;

/// Accumulated call edges and name-lookup entries for one run.
///
/// `calls` maps a caller's fully-qualified display name to the callee nodes
/// discovered in its body, in discovery order with repeats kept (one entry
/// per call site). `full_names` maps a plain fully-qualified name to every
/// display-name variant seen for it, which backs the REPL's prefix search.
#[derive(Debug, Default)]
pub struct CallGraph {
    pub calls: HashMap<String, Vec<NodeId>>,
    pub full_names: BTreeMap<String, BTreeSet<String>>,
}

impl CallGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function-like declaration under its plain qualified name.
    /// Duplicate (name, variant) pairs collapse.
    pub fn record_function(&mut self, qualified: String, display_variant: String) {
        self.full_names.entry(qualified).or_default().insert(display_variant);
    }

    /// Append a call edge under the caller key. The empty key collects calls
    /// seen before any enclosing function; it is never queryable from the
    /// REPL (an empty input line exits) so those edges stay inert.
    pub fn record_call(&mut self, caller_key: String, callee: NodeId) {
        self.calls.entry(caller_key).or_default().push(callee);
    }

    /// All display-name variants whose plain qualified name starts with
    /// `prefix`, in lexicographic order.
    #[must_use]
    pub fn matching(&self, prefix: &str) -> Vec<&str> {
        self.full_names
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .flat_map(|(_, variants)| variants.iter().map(String::as_str))
            .collect()
    }
}

/// Pre-order walk of one subtree, threading the enclosing-function context.
///
/// A non-excluded function-like node becomes the context for its subtree
/// and lands in the full-name index. A call-like node with a resolved,
/// non-excluded target appends an edge under the current context's pretty
/// name. Exclusion suppresses recording only; the walk always recurses into
/// every child. An excluded function does not take over the context, so
/// calls inside it attribute to the nearest non-excluded enclosing function.
pub fn visit(
    ast: &Ast,
    id: NodeId,
    filter: &ExclusionFilter,
    graph: &mut CallGraph,
    mut current: Option<NodeId>,
) {
    let node = ast.node(id);

    if node.kind.is_function_like() && !filter.is_excluded(ast, id) {
        current = Some(id);
        graph.record_function(
            resolver::fully_qualified(ast, id),
            resolver::fully_qualified_pretty(ast, id),
        );
    }

    if node.kind.is_call_like() {
        if let Some(target) = node.referenced {
            if !filter.is_excluded(ast, target) {
                let key =
                    current.map(|c| resolver::fully_qualified_pretty(ast, c)).unwrap_or_default();
                graph.record_call(key, target);
            }
        }
    }

    for &child in &node.children {
        visit(ast, child, filter, graph, current);
    }
}
