use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::ast::Ast;
use crate::cli::Cli;
use crate::errors::{ExplorerError, FrontendError};
use crate::frontend::{compile_commands, Frontend};
use crate::graph::filter::ExclusionFilter;
use crate::graph::{visit, CallGraph};
use crate::printer::{CallTreePrinter, CodeJumper, EditorJumper};
use crate::utils::config;

/// Effective settings after merging CLI flags over the optional TOML
/// config. Explicit flags always win; the config only fills gaps.
struct Settings {
    filter: ExclusionFilter,
    attributes: Vec<String>,
    jumper: EditorJumper,
    edit: bool,
    clang_args: Vec<String>,
}

fn resolve_settings(cli: &Cli) -> Settings {
    let cfg = cli
        .config
        .as_deref()
        .and_then(config::load_config_at)
        .or_else(|| config::load_config_near(Path::new(".")))
        .unwrap_or_default();
    let exclude = cfg.exclude.unwrap_or_default();

    let paths = cli
        .exclude_paths
        .clone()
        .or(exclude.paths)
        .unwrap_or_else(|| vec!["/usr".to_string()]);
    let names = if cli.exclude_names.is_empty() {
        exclude.names.unwrap_or_default()
    } else {
        cli.exclude_names.clone()
    };
    let attributes = if cli.attributes.is_empty() {
        cfg.print.and_then(|p| p.attributes).unwrap_or_default()
    } else {
        cli.attributes.clone()
    };
    let jumper = match cfg.editor.and_then(|e| e.command) {
        Some(command) => EditorJumper::new(command),
        None => EditorJumper::from_env(),
    };

    let mut clang_args = cfg.parser.and_then(|p| p.args).unwrap_or_default();
    clang_args.extend(cli.clang_args.iter().cloned());

    Settings {
        filter: ExclusionFilter::new(paths, names),
        attributes,
        jumper,
        edit: cli.edit,
        clang_args,
    }
}

/// Run the CLI logic in-process. Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

fn run(cli: Cli) -> Result<i32, ExplorerError> {
    let settings = resolve_settings(&cli);
    let files = compile_commands::load(&cli.input)?;
    let frontend = Frontend::new()?;

    let mut ast = Ast::new();
    let mut graph = CallGraph::new();

    println!("reading source files...");
    for file in files {
        println!("{}", file.display());
        match frontend.parse_file(&mut ast, &file, &settings.clang_args) {
            Ok(root) => visit(&ast, root, &settings.filter, &mut graph, None),
            Err(FrontendError::Diagnostics { file, rendered }) => {
                // Show the exact parser invocation plus every diagnostic,
                // then abort the whole run; no partial graph from a broken
                // translation unit.
                println!("{}", settings.clang_args.join(" "));
                for line in &rendered {
                    println!("{line}");
                }
                eprintln!("aborting: {} has error diagnostics", file.display());
                return Ok(1);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl(
        &ast,
        &graph,
        &settings.jumper,
        &settings.attributes,
        settings.edit,
        &mut stdin.lock(),
        &mut stdout,
    )?;
    Ok(0)
}

/// Interactive query loop: prompt `"> "`, empty line or EOF exits. A known
/// caller key prints its name and the indented call tree; anything else
/// degrades to a prefix search over the plain qualified names.
pub fn repl<R: BufRead, W: Write>(
    ast: &Ast,
    graph: &CallGraph,
    jumper: &dyn CodeJumper,
    attributes: &[String],
    edit: bool,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let fun = line.trim();
        if fun.is_empty() {
            break;
        }

        if graph.calls.contains_key(fun) {
            writeln!(out, "{fun}")?;
            let mut printer = CallTreePrinter::new(ast, graph, jumper, attributes, edit);
            printer.print_tree(out, fun)?;
        } else {
            writeln!(out, "matching:")?;
            for variant in graph.matching(fun) {
                writeln!(out, "{variant}")?;
            }
        }
    }
    Ok(())
}
