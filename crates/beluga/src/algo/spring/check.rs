//! Finite-difference verification of the analytic gradient.
//!
//! A call costs `O(n)` graph clones and `O(n^2)` loss evaluations per clone:
//! strictly a correctness harness for small graphs, never part of the
//! optimization path.

use beluga_graphlib::GraphEdit;
use nalgebra::DVector;

use super::{Gradient, gradient, loss};
use crate::algo::SpringOptions;

/// Forward-difference estimate of the loss gradient.
///
/// Each coordinate of a cloned graph is perturbed by `eps` in turn and the
/// loss re-evaluated; the original graph is never touched. `eps` around
/// `1e-6` keeps the estimate within `100 * eps` of the analytic gradient on
/// graphs whose nodes are not nearly coincident.
pub fn numeric_gradient<G: GraphEdit + Clone>(g: &G, opts: &SpringOptions, eps: f64) -> Gradient {
    let base = loss(g, opts);
    let n = g.size();

    let dx = DVector::from_fn(n, |i, _| {
        let mut perturbed = g.clone();
        let (x, y) = perturbed.coord(i);
        perturbed.move_to(i, x + eps, y);
        (loss(&perturbed, opts) - base) / eps
    });
    let dy = DVector::from_fn(n, |i, _| {
        let mut perturbed = g.clone();
        let (x, y) = perturbed.coord(i);
        perturbed.move_to(i, x, y + eps);
        (loss(&perturbed, opts) - base) / eps
    });

    Gradient { dx, dy }
}

/// Largest absolute difference between the analytic gradient and its
/// finite-difference estimate, over every coordinate.
pub fn max_deviation<G: GraphEdit + Clone>(g: &G, opts: &SpringOptions, eps: f64) -> f64 {
    let analytic = gradient(g, opts);
    let estimate = numeric_gradient(g, opts, eps);

    let mut worst = 0.0f64;
    for i in 0..g.size() {
        worst = worst.max((analytic.dx[i] - estimate.dx[i]).abs());
        worst = worst.max((analytic.dy[i] - estimate.dy[i]).abs());
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::numeric_gradient;
    use crate::algo::SpringOptions;
    use beluga_graphlib::Graph;

    #[test]
    fn estimating_the_gradient_leaves_the_graph_untouched() {
        let mut g = Graph::new();
        g.add(0.3, 0.4, "a");
        g.add(-0.8, 0.9, "b");
        g.link(0, 1);
        let before: Vec<_> = (0..g.size()).map(|n| g.coord(n)).collect();

        let _ = numeric_gradient(&g, &SpringOptions::default(), 1e-6);

        for (n, &c) in before.iter().enumerate() {
            assert_eq!(g.coord(n), c);
        }
        assert!(g.linked(0, 1));
    }
}
