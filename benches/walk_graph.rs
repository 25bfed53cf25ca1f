use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::Path;

use cpp_call_explorer::ast::{Ast, Node, NodeId, NodeKind};
use cpp_call_explorer::graph::filter::ExclusionFilter;
use cpp_call_explorer::graph::{visit, CallGraph};
use cpp_call_explorer::printer::{CallTreePrinter, CodeJumper};

struct NoJumper;
impl CodeJumper for NoJumper {
    fn open_at(&self, _file: &Path, _line: u32) -> bool {
        true
    }
}

// Synthetic unit: `width` top-level functions, each calling the next one,
// giving one deep chain plus fan-out from the first function.
fn synthetic_unit(width: usize) -> (Ast, NodeId) {
    let mut ast = Ast::new();
    let tu = ast.push(Node::new(NodeKind::TranslationUnit));
    let mut fns = Vec::with_capacity(width);
    for i in 0..width {
        let name = format!("f{i}");
        let display = format!("f{i}()");
        fns.push(ast.add_child(
            tu,
            Node::named(NodeKind::FunctionDecl, &name, &display).at("/bench/unit.cpp", i as u32 + 1),
        ));
    }
    for i in 0..width.saturating_sub(1) {
        let call = ast.add_child(fns[i], Node::named(NodeKind::CallExpr, "", "").at("/bench/unit.cpp", i as u32 + 1));
        ast.node_mut(call).referenced = Some(fns[i + 1]);
    }
    (ast, tu)
}

fn bench_walk_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_graph");
    let filter = ExclusionFilter::new(vec!["/usr".to_string()], vec![]);

    for width in [100usize, 1000] {
        let (ast, tu) = synthetic_unit(width);
        group.bench_function(BenchmarkId::new("visit", width), |b| {
            b.iter(|| {
                let mut graph = CallGraph::new();
                visit(black_box(&ast), tu, &filter, &mut graph, None);
                black_box(graph.calls.len())
            })
        });

        let mut graph = CallGraph::new();
        visit(&ast, tu, &filter, &mut graph, None);
        group.bench_function(BenchmarkId::new("print_tree", width), |b| {
            b.iter(|| {
                let mut out = Vec::new();
                let mut printer = CallTreePrinter::new(&ast, &graph, &NoJumper, &[], false);
                printer.print_tree(&mut out, black_box("f0()")).expect("print");
                black_box(out.len())
            })
        });
    }

    group.finish();
}

criterion_group!(name = benches; config = Criterion::default(); targets = bench_walk_graph);
criterion_main!(benches);
