use beluga::{Error, Graph, Minimizer, SpringOptions, arrange, normalize};

/// Four nodes, two linked pairs, a stock parameter set: after a full run the
/// linked squared distances must have moved toward the target and
/// normalization must bound the layout.
#[test]
fn arranging_pulls_linked_pairs_toward_the_target_distance() {
    let mut g = Graph::new();
    g.add(1.654, 1.0, "0");
    g.add(0.654, 25.0, "1");
    g.add(2.0, 1.0, "2");
    g.add(2.0, 2.0, "3");
    g.link(3, 0);
    g.link(1, 2);

    let opts = SpringOptions {
        l2: 0.001,
        dist_target: 0.3,
        dist_target_w: 1.0,
        dist_min: 0.3,
        dist_min_w: 1.0,
        cumulative_w: 5.0,
        repulsion_w: 1.0,
        annealing_w: 0.0,
        lambda: 1e-5,
        iterations: 500,
        random_seed: 0,
    };

    let target = opts.dist_target;
    let before_03 = (g.dist2(0, 3) - target).abs();
    let before_12 = (g.dist2(1, 2) - target).abs();

    Minimizer::new(opts.clone()).run(&mut g);

    let after_03 = (g.dist2(0, 3) - target).abs();
    let after_12 = (g.dist2(1, 2) - target).abs();
    assert!(
        after_03 < before_03,
        "pair 0-3 did not approach the target: {before_03} -> {after_03}"
    );
    assert!(
        after_12 < before_12,
        "pair 1-2 did not approach the target: {before_12} -> {after_12}"
    );

    normalize(&mut g);
    for n in 0..g.size() {
        let (x, y) = g.coord(n);
        assert!((-1.0..=1.0).contains(&x), "x[{n}] = {x}");
        assert!((-1.0..=1.0).contains(&y), "y[{n}] = {y}");
    }
}

#[test]
fn arrange_normalizes_the_final_layout() {
    let mut g = Graph::new();
    g.add(10.0, -3.0, "a");
    g.add(-5.0, 8.0, "b");
    g.add(2.0, 2.0, "c");
    g.link(0, 1);
    g.link(1, 2);

    let opts = SpringOptions {
        dist_target: 0.3,
        lambda: 1e-5,
        iterations: 50,
        ..SpringOptions::default()
    };
    arrange(&mut g, &opts).unwrap();

    for n in 0..g.size() {
        let (x, y) = g.coord(n);
        assert!((-1.0..=1.0).contains(&x));
        assert!((-1.0..=1.0).contains(&y));
    }
}

#[test]
fn arrange_rejects_edges_with_missing_endpoints() {
    let mut g = Graph::new();
    g.add(0.0, 0.0, "a");
    g.add(1.0, 0.0, "b");
    g.link(0, 5);

    let err = arrange(&mut g, &SpringOptions::default()).unwrap_err();
    match err {
        Error::MissingEndpoint { i, j, nodes } => {
            assert_eq!((i, j, nodes), (0, 5, 2));
        }
    }
}
