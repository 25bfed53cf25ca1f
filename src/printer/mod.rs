//! Depth-first call-tree rendering.
//!
//! The printer walks the [`CallGraph`] starting from a caller key and
//! writes an indented line per callee. Two separate guards shape the
//! output: `displayed` suppresses repeating the same signature anywhere in
//! one query's tree, and `visited` stops recursion on cycles while still
//! allowing a node to be printed once.
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use colored::Colorize;

use crate::ast::{Ast, NodeId, NodeKind};
use crate::graph::{resolver, CallGraph};

/// Capability for jumping an external editor to a call site.
///
/// Injected into the printer so the traversal logic stays free of process
/// spawning and can be exercised with a mock in tests.
pub trait CodeJumper {
    /// Open `file` at `line`; returns false when the jump failed.
    fn open_at(&self, file: &Path, line: u32) -> bool;
}

/// Launches a terminal editor as `editor +<line> <file>` and waits for it.
#[derive(Debug, Clone)]
pub struct EditorJumper {
    command: String,
}

impl EditorJumper {
    #[must_use]
    pub fn new(command: String) -> Self {
        Self { command }
    }

    /// Editor from `$EDITOR`, falling back to `vim`.
    #[must_use]
    pub fn from_env() -> Self {
        let command = std::env::var("EDITOR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "vim".to_string());
        Self { command }
    }
}

impl CodeJumper for EditorJumper {
    fn open_at(&self, file: &Path, line: u32) -> bool {
        Command::new(&self.command)
            .arg(format!("+{line}"))
            .arg(file)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

/// Human-readable line label for a callee: qualified display name, a
/// ` = 0` / ` virtual` marker for pure-virtual / virtual methods, then any
/// attribute annotations joined by spaces.
#[must_use]
pub fn pretty_label(ast: &Ast, id: NodeId) -> String {
    let node = ast.node(id);
    let mut label = resolver::fully_qualified_pretty(ast, id);
    if node.is_pure_virtual {
        label.push_str(" = 0");
    } else if node.is_virtual {
        label.push_str(" virtual");
    }
    let annotations: Vec<&str> = ast.annotations(id).collect();
    if !annotations.is_empty() {
        label.push(' ');
        label.push_str(&annotations.join(" "));
    }
    label
}

/// One query's worth of printing state over an immutable graph.
pub struct CallTreePrinter<'a> {
    ast: &'a Ast,
    graph: &'a CallGraph,
    jumper: &'a dyn CodeJumper,
    attributes: &'a [String],
    edit: bool,
    displayed: Vec<String>,
}

impl<'a> CallTreePrinter<'a> {
    #[must_use]
    pub fn new(
        ast: &'a Ast,
        graph: &'a CallGraph,
        jumper: &'a dyn CodeJumper,
        attributes: &'a [String],
        edit: bool,
    ) -> Self {
        Self { ast, graph, jumper, attributes, edit, displayed: Vec::new() }
    }

    /// Print the full indented tree under `root_key`. Resets the
    /// displayed-label state, so each call renders a fresh tree.
    pub fn print_tree<W: Write>(&mut self, out: &mut W, root_key: &str) -> io::Result<()> {
        self.displayed.clear();
        let mut visited: Vec<NodeId> = Vec::new();
        self.print_calls(out, root_key, &mut visited, 0)
    }

    fn print_calls<W: Write>(
        &mut self,
        out: &mut W,
        key: &str,
        visited: &mut Vec<NodeId>,
        depth: usize,
    ) -> io::Result<()> {
        let ast = self.ast;
        let graph = self.graph;
        let Some(callees) = graph.calls.get(key) else {
            return Ok(());
        };

        for &callee in callees {
            let node = ast.node(callee);
            let label = pretty_label(ast, callee);

            // Constructors and pure-virtual methods appear structurally via
            // their callers but are never listed as call targets.
            let printable = !self.displayed.contains(&label)
                && node.kind != NodeKind::Constructor
                && !node.is_pure_virtual;

            if printable {
                self.displayed.push(label.clone());
                let indent = "  ".repeat(depth + 1);
                let site = match &node.location {
                    Some(loc) => format!("{}:{}", loc.file.display(), loc.line),
                    None => "<unknown>".to_string(),
                };
                if self.attributes.iter().any(|a| label.contains(a.as_str())) {
                    writeln!(out, "{} {site}", format!("{indent}{label}").green())?;
                } else {
                    writeln!(out, "{indent}{label} {site}")?;
                }
                if self.edit {
                    if let Some(loc) = &node.location {
                        if !self.jumper.open_at(&loc.file, loc.line) {
                            // One failed jump stops further jumps, not the walk.
                            self.edit = false;
                        }
                    }
                }
            }

            if visited.contains(&callee) {
                continue;
            }
            visited.push(callee);

            // The callee's body may have been recorded under a different
            // display variant; fall back to the plain qualified name.
            let pretty = resolver::fully_qualified_pretty(ast, callee);
            let next_key = if graph.calls.contains_key(&pretty) {
                pretty
            } else {
                resolver::fully_qualified(ast, callee)
            };
            self.print_calls(out, &next_key, visited, depth + 1)?;
        }
        Ok(())
    }
}
