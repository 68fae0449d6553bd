//! Integration tests for the graph algorithms on shared fixtures.

use isagraph::{prelude::*, Result};

/// Builds 1->2, 1->3, 1->4, 2->4, 3->4.
fn create_acyclic_graph() -> Result<(Graph, Vec<VertexId>)> {
    let mut graph = Graph::new();
    let v: Vec<_> = (1..=4)
        .map(|i| graph.create_labeled_vertex(format!("Node {i}")))
        .collect();
    graph.connect_labeled(v[0], v[1], "N1->N2")?;
    graph.connect_labeled(v[0], v[2], "N1->N3")?;
    graph.connect_labeled(v[0], v[3], "N1->N4")?;
    graph.connect_labeled(v[1], v[3], "N2->N4")?;
    graph.connect_labeled(v[2], v[3], "N3->N4")?;
    Ok((graph, v))
}

#[test]
fn test_acyclicity_and_adjacency() -> Result<()> {
    let (mut graph, v) = create_acyclic_graph()?;

    let mut check = IsAcyclic::new(&graph);
    check.execute();
    assert!(check.is_acyclic());

    graph.connect_labeled(v[3], v[3], "N4->N4")?;
    graph.connect_labeled(v[3], v[0], "N4->N1")?;

    let mut check = IsAcyclic::new(&graph);
    check.execute();
    assert!(!check.is_acyclic());

    let cycle = find_cycle(&graph).unwrap();
    assert_eq!(cycle.first(), cycle.last());

    assert_eq!(
        AdjacencyMatrix::from_graph(&graph).as_rows(),
        vec![
            vec![0, 1, 1, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![1, 0, 0, 1],
        ]
    );
    Ok(())
}

#[test]
fn test_shortest_path_tree_reconstructs_distances() -> Result<()> {
    // Grid-like graph with detours of varying cost.
    let mut graph = Graph::new();
    let v: Vec<_> = (0..6)
        .map(|i| graph.create_labeled_vertex(format!("v{i}")))
        .collect();
    graph.connect_weighted(v[0], v[1], "", 2.0)?;
    graph.connect_weighted(v[0], v[2], "", 7.0)?;
    graph.connect_weighted(v[1], v[2], "", 3.0)?;
    graph.connect_weighted(v[1], v[3], "", 9.0)?;
    graph.connect_weighted(v[2], v[3], "", 1.0)?;
    graph.connect_weighted(v[3], v[4], "", 2.0)?;
    graph.connect_weighted(v[2], v[4], "", 6.0)?;
    graph.connect_weighted(v[4], v[0], "", 1.0)?;

    let mut sp = ShortestPath::new(&graph);
    sp.set_start(v[0]);
    sp.execute()?;

    let expected = [0.0, 2.0, 5.0, 6.0, 8.0];
    for (i, &distance) in expected.iter().enumerate() {
        assert_eq!(sp.distance(v[i]), Some(distance));
    }
    assert_eq!(sp.distance(v[5]), Some(f64::INFINITY));

    for &vertex in &v[..5] {
        let path = sp.path_to(vertex).unwrap();
        assert_eq!(path.first(), Some(&v[0]));
        let total: f64 = path
            .windows(2)
            .map(|pair| {
                let edge = graph.cheapest_edge(pair[0], pair[1]).unwrap();
                graph.edge(edge).unwrap().weight()
            })
            .sum();
        assert_eq!(Some(total), sp.distance(vertex));
    }

    let tree = sp.shortest_paths_tree();
    assert_eq!(tree.order(), 5);
    assert_eq!(tree.size(), 4);
    assert!(tree.find_vertex("v5").is_none());
    assert!(isagraph::graph::algorithms::is_acyclic(&tree));
    Ok(())
}

#[test]
fn test_depth_search_on_cycle() -> Result<()> {
    let mut graph = Graph::new();
    let a = graph.create_labeled_vertex("A");
    let b = graph.create_labeled_vertex("B");
    let c = graph.create_labeled_vertex("C");
    graph.connect(a, b)?;
    graph.connect(b, c)?;
    graph.connect(c, a)?;

    let mut search = DepthSearch::new(&graph);
    search.set_label("A");
    // The root is not marked visited, so the cycle leads back into it and the
    // inner visit matches first.
    assert_eq!(search.execute(), Some(a));
    assert_eq!(search.path(), &[a, b, c, a]);
    Ok(())
}
