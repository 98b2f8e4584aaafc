use tracing_subscriber::EnvFilter;

use u_postman::models::PostmanProblem;
use u_postman::solver::{PostmanSolver, SolverConfig, WalkKind};
use u_postman::{solve, PostmanError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sorted(mut walk: Vec<usize>) -> Vec<usize> {
    walk.sort_unstable();
    walk
}

#[test]
fn test_triangle_is_already_eulerian() {
    init_tracing();
    let walk = solve(false, 3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]).expect("eulerian");
    assert_eq!(sorted(walk), vec![0, 1, 2]);
}

#[test]
fn test_path_is_walked_twice() {
    init_tracing();
    let problem = PostmanProblem::from_tuples(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    let tour = PostmanSolver::default().solve(&problem).expect("connected");
    assert_eq!(sorted(tour.edge_indices().to_vec()), vec![0, 0, 1, 1]);
    assert!(tour.is_closed());
    assert!((tour.total_cost() - 4.0).abs() < 1e-10);
}

#[test]
fn test_one_way_links_without_return() {
    init_tracing();
    let err = solve(true, 2, &[(0, 1, 1.0), (0, 1, 1.0)]).unwrap_err();
    assert!(matches!(err, PostmanError::DisconnectedGraph { .. }));
}

#[test]
fn test_one_way_links_with_return() {
    init_tracing();
    let problem = PostmanProblem::from_tuples(true, 2, &[(0, 1, 1.0), (0, 1, 1.0), (1, 0, 5.0)]);
    let tour = PostmanSolver::default().solve(&problem).expect("strongly connected");
    assert_eq!(sorted(tour.edge_indices().to_vec()), vec![0, 1, 2, 2]);
    assert!(tour.is_closed());
    assert_eq!(tour.duplicated_edges(), 1);
    assert!((tour.deadhead_cost() - 5.0).abs() < 1e-10);
}

#[test]
fn test_city_block() {
    init_tracing();
    // 3x3 grid of intersections, unit streets plus one long diagonal.
    let mut edges = Vec::new();
    for r in 0..3 {
        for c in 0..3 {
            let v = r * 3 + c;
            if c < 2 {
                edges.push((v, v + 1, 1.0));
            }
            if r < 2 {
                edges.push((v, v + 3, 1.0));
            }
        }
    }
    edges.push((0, 8, 5.0));
    let problem = PostmanProblem::from_tuples(false, 9, &edges);
    let tour = PostmanSolver::new(SolverConfig::default().with_start_vertex(4))
        .solve(&problem)
        .expect("connected");
    assert_eq!(tour.vertices().first(), Some(&4));
    assert!(tour.is_closed());
    // Odd vertices 0, 1, 3, 5, 7, 8: two unit pairs at the diagonal's ends
    // and one pair across a corner.
    assert!((tour.deadhead_cost() - 4.0).abs() < 1e-10);
    assert!((tour.total_cost() - 21.0).abs() < 1e-10);
}

#[test]
fn test_open_trail_when_allowed() {
    init_tracing();
    let problem =
        PostmanProblem::from_tuples(true, 3, &[(0, 1, 2.0), (1, 2, 2.0), (2, 1, 1.0), (1, 2, 1.0)]);
    let tour = PostmanSolver::new(SolverConfig::default().with_walk(WalkKind::Path))
        .solve(&problem)
        .expect("trail exists");
    assert_eq!(tour.len(), 4);
    assert_eq!(tour.vertices().first(), Some(&0));
    assert_eq!(tour.vertices().last(), Some(&2));
    assert_eq!(tour.duplicated_edges(), 0);
}
