//! cpp-call-explorer — Interactive C/C++ Call-Graph Explorer
//!
//! Parse C/C++ translation units through libclang and explore who calls
//! what, interactively.
//!
//! # Features
//! - Single-file or `compile_commands.json` input (duplicate entries skipped)
//! - Exclusion of system headers and namespaces by path/name prefix
//! - Indented, deduplicated call trees with cycle protection
//! - Attribute-based line highlighting and `--edit` editor jumps
//!
//! # Quickstart (Library)
//! ```no_run
//! use cpp_call_explorer::ast::Ast;
//! use cpp_call_explorer::frontend::Frontend;
//! use cpp_call_explorer::graph::{filter::ExclusionFilter, visit, CallGraph};
//!
//! let frontend = Frontend::new().expect("libclang");
//! let mut ast = Ast::new();
//! let mut graph = CallGraph::new();
//! let root = frontend
//!     .parse_file(&mut ast, std::path::Path::new("main.cpp"), &[])
//!     .expect("parse");
//! let filter = ExclusionFilter::new(vec!["/usr".into()], vec![]);
//! visit(&ast, root, &filter, &mut graph, None);
//! println!("callers: {}", graph.calls.len());
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! cpp-call-explorer compile_commands.json -x 'std::' --attribute Deprecated
//! > my_namespace::entry_point()
//! ```
pub mod app;
pub mod ast;
pub mod cli;
pub mod errors;
pub mod frontend;
pub mod graph;
pub mod printer;
pub mod utils;
