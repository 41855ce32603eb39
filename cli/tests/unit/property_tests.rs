//! Property-based tests for execution ordering.
//!
//! Uses `proptest` to verify ordering invariants across many random graphs.

#![allow(clippy::expect_used)]

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use proptest::sample::Index;

use terracotta_cli::domain::{ExecutionGraph, GraphError, ModuleDecl};

/// Random DAG: module `m{i}` may only depend on `m{j}` with `j < i`, so the
/// graph is acyclic. Declarations are rotated so dependencies are not always
/// declared first.
fn arb_dag() -> impl Strategy<Value = Vec<ModuleDecl>> {
    (
        prop::collection::vec(prop::collection::vec(any::<Index>(), 0..4), 1..30),
        any::<Index>(),
    )
        .prop_map(|(edges, rotation)| {
            let mut decls: Vec<ModuleDecl> = edges
                .iter()
                .enumerate()
                .map(|(i, picks)| {
                    let mut deps: Vec<String> = Vec::new();
                    if i > 0 {
                        for pick in picks {
                            let dep = format!("m{}", pick.index(i));
                            if !deps.contains(&dep) {
                                deps.push(dep);
                            }
                        }
                    }
                    ModuleDecl {
                        path: format!("m{i}"),
                        depends_on: deps,
                    }
                })
                .collect();
            let len = decls.len();
            decls.rotate_left(rotation.index(len));
            decls
        })
}

fn sorted_paths(decls: &[ModuleDecl]) -> Vec<String> {
    ExecutionGraph::build(decls)
        .topo_sorted()
        .expect("acyclic graph")
        .into_iter()
        .map(|m| m.path.clone())
        .collect()
}

proptest! {
    /// The order is a permutation of the declared modules.
    #[test]
    fn prop_order_is_permutation(decls in arb_dag()) {
        let order = sorted_paths(&decls);
        prop_assert_eq!(order.len(), decls.len());
        let unique: HashSet<&String> = order.iter().collect();
        prop_assert_eq!(unique.len(), order.len(), "duplicate in {:?}", order);
        for decl in &decls {
            prop_assert!(order.contains(&decl.path), "{} missing", decl.path);
        }
    }

    /// Every dependency, direct or transitive, precedes its dependent.
    #[test]
    fn prop_dependencies_precede_dependents(decls in arb_dag()) {
        let order = sorted_paths(&decls);
        let position: HashMap<&str, usize> =
            order.iter().enumerate().map(|(i, p)| (p.as_str(), i)).collect();
        // Direct edges are enough: precedence is transitive along each edge.
        for decl in &decls {
            for dep in &decl.depends_on {
                prop_assert!(
                    position[dep.as_str()] < position[decl.path.as_str()],
                    "{} must precede {} in {:?}", dep, decl.path, order
                );
            }
        }
    }

    /// Fresh graphs from the same input produce the same order.
    #[test]
    fn prop_order_is_deterministic(decls in arb_dag()) {
        prop_assert_eq!(sorted_paths(&decls), sorted_paths(&decls));
    }

    /// Closing a chain back on itself is always reported as a cycle.
    #[test]
    fn prop_chain_with_back_edge_is_cycle(len in 1usize..50) {
        let decls: Vec<ModuleDecl> = (0..len)
            .map(|i| ModuleDecl {
                path: format!("m{i}"),
                depends_on: vec![format!("m{}", (i + 1) % len)],
            })
            .collect();
        let err = ExecutionGraph::build(&decls).topo_sorted().expect_err("cycle");
        prop_assert!(matches!(err, GraphError::CyclicDependency { .. }), "got {:?}", err);
    }

    /// A dangling reference anywhere in a DAG is reported with both names.
    #[test]
    fn prop_dangling_dependency_is_reported(mut decls in arb_dag(), victim in any::<Index>()) {
        let i = victim.index(decls.len());
        decls[i].depends_on.push("undeclared".to_string());
        let module = decls[i].path.clone();
        let err = ExecutionGraph::build(&decls).topo_sorted().expect_err("unknown dependency");
        prop_assert_eq!(
            err,
            GraphError::UnknownDependency { dependency: "undeclared".to_string(), module }
        );
    }
}

#[test]
fn test_diamond_with_tail_follows_declaration_order() {
    let decls = vec![
        ModuleDecl::new("A", &[]),
        ModuleDecl::new("B", &["A"]),
        ModuleDecl::new("C", &["A"]),
        ModuleDecl::new("D", &["B", "C"]),
        ModuleDecl::new("E", &["D"]),
    ];
    assert_eq!(sorted_paths(&decls), vec!["A", "B", "C", "D", "E"]);
}
