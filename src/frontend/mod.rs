//! libclang front-end: parses translation units and lowers their cursor
//! trees into the crate-local [`Ast`] arena.
//!
//! The `clang` crate is loaded at runtime (dlopen), so constructing the
//! [`Frontend`] is the point where a missing libclang surfaces as an error
//! instead of a link failure.
use std::collections::HashMap;
use std::path::Path;

use clang::diagnostic::Severity;
use clang::{Clang, Entity, EntityKind, Index};

use crate::ast::{Ast, Node, NodeId, NodeKind, SourceLoc};
use crate::errors::FrontendError;

pub mod compile_commands;

pub struct Frontend {
    clang: Clang,
}

impl Frontend {
    /// # Errors
    /// Returns `FrontendError::Unavailable` when libclang cannot be loaded.
    pub fn new() -> Result<Self, FrontendError> {
        Clang::new().map(|clang| Self { clang }).map_err(FrontendError::Unavailable)
    }

    /// Parse one source file and lower its whole tree into `ast`, returning
    /// the id of the new translation-unit root.
    ///
    /// # Errors
    /// `Parse` when the translation unit cannot be created at all;
    /// `Diagnostics` when it parses but carries error/fatal diagnostics
    /// (the run must abort, per the fail-fast policy — no partial graph from
    /// a broken file).
    pub fn parse_file(
        &self,
        ast: &mut Ast,
        file: &Path,
        clang_args: &[String],
    ) -> Result<NodeId, FrontendError> {
        let index = Index::new(&self.clang, false, false);
        let tu = index.parser(file).arguments(clang_args).parse().map_err(|e| {
            FrontendError::Parse { file: file.to_path_buf(), reason: e.to_string() }
        })?;

        let diagnostics = tu.get_diagnostics();
        if diagnostics
            .iter()
            .any(|d| matches!(d.get_severity(), Severity::Error | Severity::Fatal))
        {
            let rendered = diagnostics.iter().map(render_diagnostic).collect();
            return Err(FrontendError::Diagnostics { file: file.to_path_buf(), rendered });
        }

        let mut lowering = Lowering {
            ast,
            entities: HashMap::new(),
            pending_parents: Vec::new(),
            pending_refs: Vec::new(),
        };
        Ok(lowering.lower_unit(tu.get_entity()))
    }
}

fn render_diagnostic(diag: &clang::diagnostic::Diagnostic) -> String {
    let loc = diag.get_location().get_file_location();
    let file = loc
        .file
        .map(|f| f.get_path().display().to_string())
        .unwrap_or_else(|| "<no file>".to_string());
    format!("{:?}: {}:{}:{}: {}", diag.get_severity(), file, loc.line, loc.column, diag.get_text())
}

/// Per-file lowering state. Semantic parents and call references may point
/// at entities not yet (or never) reached by the lexical walk, so both are
/// resolved in a second pass, interning missing scope chains on demand.
struct Lowering<'a, 'tu> {
    ast: &'a mut Ast,
    entities: HashMap<Entity<'tu>, NodeId>,
    pending_parents: Vec<(NodeId, Entity<'tu>)>,
    pending_refs: Vec<(NodeId, Entity<'tu>)>,
}

impl<'tu> Lowering<'_, 'tu> {
    fn lower_unit(&mut self, root: Entity<'tu>) -> NodeId {
        let root_id = self.ast.push(Node::new(NodeKind::TranslationUnit));
        self.entities.insert(root, root_id);
        for child in root.get_children() {
            let cid = self.lower(child);
            self.ast.node_mut(root_id).children.push(cid);
        }
        self.resolve_pending();
        root_id
    }

    fn lower(&mut self, entity: Entity<'tu>) -> NodeId {
        let node = lower_node(entity);
        let kind = node.kind;
        let id = self.ast.push(node);
        self.entities.insert(entity, id);

        if let Some(parent) = entity.get_semantic_parent() {
            match self.entities.get(&parent) {
                Some(&pid) => self.ast.node_mut(id).parent = Some(pid),
                None => self.pending_parents.push((id, parent)),
            }
        }
        if kind.is_call_like() {
            if let Some(target) = entity.get_reference() {
                self.pending_refs.push((id, target));
            }
        }
        for child in entity.get_children() {
            let cid = self.lower(child);
            self.ast.node_mut(id).children.push(cid);
        }
        id
    }

    /// Map an entity met outside the lexical walk (a referenced declaration
    /// or an out-of-line semantic parent), resolving its scope chain.
    fn intern(&mut self, entity: Entity<'tu>) -> NodeId {
        if let Some(&id) = self.entities.get(&entity) {
            return id;
        }
        let node = lower_node(entity);
        let id = self.ast.push(node);
        self.entities.insert(entity, id);
        if let Some(parent) = entity.get_semantic_parent() {
            let pid = self.intern(parent);
            self.ast.node_mut(id).parent = Some(pid);
        }
        id
    }

    fn resolve_pending(&mut self) {
        for (id, parent) in std::mem::take(&mut self.pending_parents) {
            let pid = self.intern(parent);
            self.ast.node_mut(id).parent = Some(pid);
        }
        for (id, target) in std::mem::take(&mut self.pending_refs) {
            let tid = self.intern(target);
            self.ast.node_mut(id).referenced = Some(tid);
        }
    }
}

fn lower_node(entity: Entity<'_>) -> Node {
    let mut node = Node::new(lower_kind(entity.get_kind()));
    node.spelling = entity.get_name().unwrap_or_default();
    node.display_name = entity.get_display_name().unwrap_or_default();
    node.location = entity.get_location().and_then(|loc| {
        let fl = loc.get_file_location();
        fl.file.map(|f| SourceLoc::new(f.get_path(), fl.line))
    });
    node.is_virtual = entity.is_virtual_method();
    node.is_pure_virtual = entity.is_pure_virtual_method();
    node
}

fn lower_kind(kind: EntityKind) -> NodeKind {
    match kind {
        EntityKind::FunctionDecl => NodeKind::FunctionDecl,
        EntityKind::Method => NodeKind::Method,
        EntityKind::Constructor => NodeKind::Constructor,
        EntityKind::Destructor => NodeKind::Destructor,
        EntityKind::FunctionTemplate => NodeKind::FunctionTemplate,
        EntityKind::CallExpr => NodeKind::CallExpr,
        EntityKind::AnnotateAttr => NodeKind::AnnotateAttr,
        _ => NodeKind::Other,
    }
}
