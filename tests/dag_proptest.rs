use dagpath::{is_topological_order, kahn_sort, shortest_paths, DirectedGraph, WeightedDigraph};
use petgraph::algo::{bellman_ford, is_cyclic_directed};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

type EdgeList = Vec<(usize, usize, f64)>;

/// A random DAG: edges go forward in a hidden random permutation, so the
/// identity order is not automatically topological. Integer weights keep sums
/// exact for comparison against the oracle.
fn arb_dag() -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..24).prop_flat_map(|n| {
        let perm = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        let edges = proptest::collection::vec((0..n, 0..n, -20i32..20), 0..n * 3);
        (Just(n), perm, edges).prop_map(|(n, perm, raw)| {
            let edges: EdgeList = raw
                .into_iter()
                .filter(|&(a, b, _)| a != b)
                .map(|(a, b, w)| {
                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    (perm[lo], perm[hi], f64::from(w))
                })
                .collect();
            (n, edges)
        })
    })
}

/// Any directed graph without self-loops; cycles allowed.
fn arb_digraph() -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..16).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n, -5i32..5), 0..n * 3);
        (Just(n), edges).prop_map(|(n, raw)| {
            let edges: EdgeList = raw
                .into_iter()
                .filter(|&(a, b, _)| a != b)
                .map(|(a, b, w)| (a, b, f64::from(w)))
                .collect();
            (n, edges)
        })
    })
}

fn to_petgraph(n: usize, edges: &EdgeList) -> DiGraph<(), f64> {
    let mut g = DiGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v, w) in edges {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }
    g
}

proptest! {
    #[test]
    fn distances_match_bellman_ford((n, edges) in arb_dag(), source_seed in any::<usize>()) {
        let source = source_seed % n;
        let g = DirectedGraph::with_edges(n, edges.iter().copied()).unwrap();
        let r = shortest_paths(&g, source).unwrap().outcome.into_paths().unwrap();

        let oracle = bellman_ford(&to_petgraph(n, &edges), NodeIndex::new(source))
            .expect("a DAG has no negative cycle");
        prop_assert_eq!(r.distances(), oracle.distances.as_slice());
    }

    #[test]
    fn paths_follow_real_edges((n, edges) in arb_dag(), source_seed in any::<usize>()) {
        let source = source_seed % n;
        let g = DirectedGraph::with_edges(n, edges.iter().copied()).unwrap();
        let r = shortest_paths(&g, source).unwrap().outcome.into_paths().unwrap();

        prop_assert_eq!(r.distances()[source], 0.0);
        prop_assert_eq!(r.parents()[source], None);

        for v in 0..n {
            match r.path(v).unwrap() {
                None => {
                    prop_assert!(r.distances()[v].is_infinite());
                    prop_assert_eq!(r.parents()[v], None);
                }
                Some(path) => {
                    prop_assert_eq!(path.first().copied(), Some(source));
                    prop_assert_eq!(path.last().copied(), Some(v));
                    let mut total = 0.0;
                    for pair in path.windows(2) {
                        let w = g
                            .adjacent(pair[0])
                            .iter()
                            .filter(|e| e.to == pair[1])
                            .map(|e| e.weight)
                            .fold(f64::INFINITY, f64::min);
                        prop_assert!(w.is_finite(), "no edge {}->{}", pair[0], pair[1]);
                        total += w;
                    }
                    prop_assert_eq!(total, r.distances()[v]);
                }
            }
        }
    }

    #[test]
    fn kahn_order_respects_every_edge((n, edges) in arb_dag()) {
        let g = DirectedGraph::with_edges(n, edges.iter().copied()).unwrap();
        let topo = kahn_sort(&g);
        prop_assert!(topo.is_acyclic());

        let order = topo.order().unwrap();
        prop_assert!(is_topological_order(&g, order));
        for u in 0..n {
            let pu = order.iter().position(|&x| x == u).unwrap();
            for e in g.out_edges(u) {
                let pv = order.iter().position(|&x| x == e.to).unwrap();
                prop_assert!(pu < pv);
            }
        }
    }

    #[test]
    fn cycles_are_always_reported((n, edges) in arb_digraph()) {
        let g = DirectedGraph::with_edges(n, edges.iter().copied()).unwrap();
        let cyclic = is_cyclic_directed(&to_petgraph(n, &edges));

        let topo = kahn_sort(&g);
        prop_assert_eq!(topo.is_acyclic(), !cyclic);

        let run = shortest_paths(&g, 0).unwrap();
        prop_assert_eq!(run.outcome.is_dag(), !cyclic);
        if cyclic {
            prop_assert!(!run.outcome.cycle().unwrap().unordered.is_empty());
        }
    }

    #[test]
    fn runs_are_idempotent((n, edges) in arb_dag()) {
        let g = DirectedGraph::with_edges(n, edges.iter().copied()).unwrap();
        let a = shortest_paths(&g, 0).unwrap();
        let b = shortest_paths(&g, 0).unwrap();
        prop_assert_eq!(a.outcome, b.outcome);
        prop_assert_eq!(a.metrics, b.metrics);
    }
}
