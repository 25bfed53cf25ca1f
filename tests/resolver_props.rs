use proptest::prelude::*;

use cpp_call_explorer::ast::{Ast, Node, NodeKind};
use cpp_call_explorer::graph::filter::ExclusionFilter;
use cpp_call_explorer::graph::resolver::{fully_qualified, fully_qualified_pretty};

fn ident() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,8}"
}

// Bottom-up property-based tests over synthetic scope chains
proptest! {
    // fully_qualified is exactly the :: join of the spelling chain
    #[test]
    fn qualified_name_is_join_of_spellings(names in prop::collection::vec(ident(), 1..6)) {
        let mut ast = Ast::new();
        let mut cur = ast.push(Node::new(NodeKind::TranslationUnit));
        for n in &names {
            cur = ast.add_child(cur, Node::named(NodeKind::Other, n, n));
        }
        prop_assert_eq!(fully_qualified(&ast, cur), names.join("::"));
    }

    // the pretty name differs from the plain name only in the last component
    #[test]
    fn pretty_name_swaps_only_the_leaf(
        names in prop::collection::vec(ident(), 1..6),
        display in "[A-Za-z_][A-Za-z0-9_]{0,8}\\([a-z, ]{0,12}\\)",
    ) {
        let mut ast = Ast::new();
        let mut cur = ast.push(Node::new(NodeKind::TranslationUnit));
        for (i, n) in names.iter().enumerate() {
            let d = if i + 1 == names.len() { display.as_str() } else { n.as_str() };
            cur = ast.add_child(cur, Node::named(NodeKind::Other, n, d));
        }
        let mut expected: Vec<&str> = names[..names.len() - 1].iter().map(String::as_str).collect();
        expected.push(display.as_str());
        prop_assert_eq!(fully_qualified_pretty(&ast, cur), expected.join("::"));
    }

    // exclusion decisions never panic and are monotone: adding prefixes can
    // only exclude more, never less
    #[test]
    fn exclusion_is_monotone_in_prefixes(
        file in "/[a-z]{1,8}/[a-z]{1,8}\\.cpp",
        name in ident(),
        prefix in "[A-Za-z/_]{0,6}",
        extra in "[A-Za-z/_]{0,6}",
    ) {
        let mut ast = Ast::new();
        let tu = ast.push(Node::new(NodeKind::TranslationUnit));
        let node = ast.add_child(
            tu,
            Node::named(NodeKind::FunctionDecl, &name, &name).at(file.as_str(), 1),
        );

        let small = ExclusionFilter::new(vec![prefix.clone()], vec![]);
        let large = ExclusionFilter::new(vec![prefix, extra], vec![]);
        if small.is_excluded(&ast, node) {
            prop_assert!(large.is_excluded(&ast, node));
        }
    }
}
