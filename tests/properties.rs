use proptest::prelude::*;
use proptest::sample::Index;

use u_postman::circuit::{eulerian_circuit, map_to_original_indices};
use u_postman::eulerize::{augmentation_weight, eulerize};
use u_postman::evaluation::TourEvaluator;
use u_postman::models::{Graph, PostmanProblem};
use u_postman::solver::PostmanSolver;

type Edges = Vec<(usize, usize, f64)>;

/// Random spanning tree plus extra links (self-loops and parallels allowed).
fn connected_undirected() -> impl Strategy<Value = (usize, Edges)> {
    (2usize..8)
        .prop_flat_map(|n| {
            let tree = proptest::collection::vec((any::<Index>(), 1u32..10), n - 1);
            let extra = proptest::collection::vec((0..n, 0..n, 1u32..10), 0..8);
            (Just(n), tree, extra)
        })
        .prop_map(|(n, tree, extra)| {
            let mut edges: Edges = tree
                .into_iter()
                .enumerate()
                .map(|(i, (parent, w))| (parent.index(i + 1), i + 1, f64::from(w)))
                .collect();
            edges.extend(extra.into_iter().map(|(u, v, w)| (u, v, f64::from(w))));
            (n, edges)
        })
}

/// Random directed ring plus extra arcs, hence strongly connected.
fn strongly_connected_directed() -> impl Strategy<Value = (usize, Edges)> {
    (2usize..8)
        .prop_flat_map(|n| {
            let ring = proptest::collection::vec(1u32..10, n);
            let extra = proptest::collection::vec((0..n, 0..n, 1u32..10), 0..10);
            (Just(n), ring, extra)
        })
        .prop_map(|(n, ring, extra)| {
            let mut edges: Edges = ring
                .into_iter()
                .enumerate()
                .map(|(v, w)| (v, (v + 1) % n, f64::from(w)))
                .collect();
            edges.extend(extra.into_iter().map(|(u, v, w)| (u, v, f64::from(w))));
            (n, edges)
        })
}

fn all_pairs_undirected(n: usize, edges: &[(usize, usize, f64)]) -> Vec<Vec<f64>> {
    let mut d = vec![vec![f64::INFINITY; n]; n];
    for (v, row) in d.iter_mut().enumerate() {
        row[v] = 0.0;
    }
    for &(u, v, w) in edges {
        d[u][v] = d[u][v].min(w);
        d[v][u] = d[v][u].min(w);
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if d[i][k] + d[k][j] < d[i][j] {
                    d[i][j] = d[i][k] + d[k][j];
                }
            }
        }
    }
    d
}

fn min_pairing(odd: &[usize], d: &[Vec<f64>]) -> f64 {
    let Some((&first, rest)) = odd.split_first() else {
        return 0.0;
    };
    let mut best = f64::INFINITY;
    for k in 0..rest.len() {
        let mut remaining = rest.to_vec();
        let partner = remaining.remove(k);
        best = best.min(d[first][partner] + min_pairing(&remaining, d));
    }
    best
}

fn assert_tour(directed: bool, n: usize, edges: &[(usize, usize, f64)]) -> Result<(), TestCaseError> {
    let problem = PostmanProblem::from_tuples(directed, n, edges);
    let tour = PostmanSolver::default()
        .solve(&problem)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;

    prop_assert!(tour.len() >= edges.len());
    for i in 0..edges.len() {
        prop_assert!(tour.edge_indices().contains(&i), "edge {} missing", i);
    }
    prop_assert!(tour.is_closed());

    let (cost, violations) = TourEvaluator::new(&problem).evaluate(tour.edge_indices());
    prop_assert!(violations.is_empty(), "{:?}", violations);
    prop_assert!((cost.total - tour.total_cost()).abs() < 1e-9);
    prop_assert!((cost.deadhead - tour.deadhead_cost()).abs() < 1e-9);
    Ok(())
}

proptest! {
    #[test]
    fn test_undirected_tour_covers_and_closes((n, edges) in connected_undirected()) {
        assert_tour(false, n, &edges)?;
    }

    #[test]
    fn test_directed_tour_covers_and_closes((n, edges) in strongly_connected_directed()) {
        assert_tour(true, n, &edges)?;
    }

    #[test]
    fn test_directed_eulerize_balances((n, edges) in strongly_connected_directed()) {
        let mut graph = Graph::from_edges(true, n, &edges).expect("valid");
        let aug = eulerize(&mut graph).expect("strongly connected");
        for v in 0..n {
            prop_assert_eq!(graph.in_degree(v), graph.out_degree(v));
        }
        prop_assert_eq!(graph.num_edges(), edges.len() + aug.added_edges);
        prop_assert!((graph.duplicate_weight() - aug.added_cost).abs() < 1e-9);
    }

    #[test]
    fn test_undirected_augmentation_is_optimal((n, edges) in connected_undirected()) {
        let mut graph = Graph::from_edges(false, n, &edges).expect("valid");
        let odd = graph.odd_vertices();
        let expected = min_pairing(&odd, &all_pairs_undirected(n, &edges));
        let aug = eulerize(&mut graph).expect("connected");
        prop_assert!(graph.odd_vertices().is_empty());
        prop_assert!(
            (aug.added_cost - expected).abs() < 1e-9,
            "added {} expected {}",
            aug.added_cost,
            expected
        );
    }

    #[test]
    fn test_indices_reproduce_traversal(
        directed in any::<bool>(),
        (n, undirected_edges) in connected_undirected(),
        (m, directed_edges) in strongly_connected_directed(),
    ) {
        let (n, edges) = if directed { (m, directed_edges) } else { (n, undirected_edges) };
        let mut graph = Graph::from_edges(directed, n, &edges).expect("valid");
        eulerize(&mut graph).expect("connected");
        let circuit = eulerian_circuit(&graph, None).expect("eulerian");

        let endpoints: Vec<(usize, usize)> = edges.iter().map(|&(u, v, _)| (u, v)).collect();
        let indices = map_to_original_indices(&circuit, &endpoints, directed).expect("mapped");
        prop_assert_eq!(indices.len(), circuit.len());
        for (step, &i) in circuit.steps().iter().zip(&indices) {
            let (u, v) = endpoints[i];
            let forward = (u, v) == (step.from, step.to);
            let backward = !directed && (v, u) == (step.from, step.to);
            prop_assert!(forward || backward);
        }
    }

    #[test]
    fn test_augmentation_weight_decreasing(a in 0.0f64..1e6, delta in 1e-3f64..1e6) {
        prop_assert!(augmentation_weight(a) > augmentation_weight(a + delta));
        prop_assert!(augmentation_weight(a) > 0.0);
    }
}
