//! The combined spring energy: loss, analytic gradient, annealed descent.

use beluga_graphlib::{GraphEdit, GraphView};
use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algo::SpringOptions;

mod check;

pub use check::{max_deviation, numeric_gradient};

/// Partial derivatives of the combined loss with respect to every node
/// coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub dx: DVector<f64>,
    pub dy: DVector<f64>,
}

/// Unordered node pairs `(i, j)`, `i < j`.
fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Total energy of the layout under `opts`.
///
/// Per node: `l2 * (x^2 + y^2)`. Per unordered pair, with `d` the squared
/// distance: `repulsion_w / d` always; for linked pairs
/// `dist_target_w * (d - dist_target)^2` plus `cumulative_w * sqrt(d)`; for
/// non-linked pairs the hinge `dist_min_w * (dist_min - d)` when
/// `d < dist_min`.
///
/// Coincident nodes make the repulsion and length terms singular; the next
/// descent step pushes them apart, so no epsilon guard is applied here.
pub fn loss<G: GraphView + ?Sized>(g: &G, opts: &SpringOptions) -> f64 {
    let n = g.size();

    let mut reg = 0.0;
    for i in 0..n {
        let (x, y) = g.coord(i);
        reg += x * x + y * y;
    }

    pairs(n).fold(opts.l2 * reg, |mut acc, (i, j)| {
        let d = g.dist2(i, j);
        acc += opts.repulsion_w / d;
        if g.linked(i, j) {
            acc += opts.dist_target_w * (d - opts.dist_target) * (d - opts.dist_target);
            acc += opts.cumulative_w * d.sqrt();
        } else if d < opts.dist_min {
            acc += opts.dist_min_w * (opts.dist_min - d);
        }
        acc
    })
}

/// Analytic gradient of [`loss`].
///
/// Every term is differentiated in its pairwise-relative form, so each pair
/// contributes equal and opposite components to its two endpoints (the L2
/// term is the only per-node one). [`numeric_gradient`] estimates the same
/// derivatives by finite differences; the two must agree to within
/// `100 * eps`.
pub fn gradient<G: GraphView + ?Sized>(g: &G, opts: &SpringOptions) -> Gradient {
    let n = g.size();

    let dx = DVector::from_fn(n, |i, _| 2.0 * opts.l2 * g.coord(i).0);
    let dy = DVector::from_fn(n, |i, _| 2.0 * opts.l2 * g.coord(i).1);

    let (dx, dy) = pairs(n).fold((dx, dy), |(mut dx, mut dy), (i, j)| {
        let (xi, yi) = g.coord(i);
        let (xj, yj) = g.coord(j);
        let ux = xi - xj;
        let uy = yi - yj;
        let d = ux * ux + uy * uy;

        // d/dx_i of repulsion_w / d  =  -2 * repulsion_w * (x_i - x_j) / d^2
        let rep = -2.0 * opts.repulsion_w / (d * d);
        dx[i] += rep * ux;
        dx[j] -= rep * ux;
        dy[i] += rep * uy;
        dy[j] -= rep * uy;

        if g.linked(i, j) {
            // d/dx_i of w * (d - t)^2  =  4 * w * (d - t) * (x_i - x_j)
            let tgt = 4.0 * opts.dist_target_w * (d - opts.dist_target);
            dx[i] += tgt * ux;
            dx[j] -= tgt * ux;
            dy[i] += tgt * uy;
            dy[j] -= tgt * uy;

            // d/dx_i of clw * sqrt(d)  =  clw * (x_i - x_j) / sqrt(d)
            let cl = opts.cumulative_w / d.sqrt();
            dx[i] += cl * ux;
            dx[j] -= cl * ux;
            dy[i] += cl * uy;
            dy[j] -= cl * uy;
        } else if d < opts.dist_min {
            // d/dx_i of w * (dist_min - d)  =  -2 * w * (x_i - x_j)
            let hinge = -2.0 * opts.dist_min_w;
            dx[i] += hinge * ux;
            dx[j] -= hinge * ux;
            dy[i] += hinge * uy;
            dy[j] -= hinge * uy;
        }

        (dx, dy)
    });

    Gradient { dx, dy }
}

/// Fixed-budget annealed gradient descent over a graph's coordinates.
///
/// A run is `iterations` steps, no early stopping: the annealing schedule
/// assumes the full budget. Each step subtracts
/// `lambda * (gradient + ann * noise)` from every coordinate, where
/// `ann = annealing_w * iterations / step` decays across the run and the
/// noise is uniform in `[0, 1)` from a seeded generator, so whole runs are
/// reproducible.
///
/// Coordinates are not renormalized along the way; callers rescale with
/// [`normalize`](crate::transform::normalize) once the run is done.
#[derive(Debug)]
pub struct Minimizer {
    opts: SpringOptions,
    rng: StdRng,
    iteration: usize,
}

impl Minimizer {
    pub fn new(opts: SpringOptions) -> Self {
        let rng = StdRng::seed_from_u64(opts.random_seed);
        Self {
            opts,
            rng,
            iteration: 0,
        }
    }

    /// Steps taken so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// True once the fixed budget is exhausted.
    pub fn terminated(&self) -> bool {
        self.iteration >= self.opts.iterations
    }

    /// Runs one descent step, mutating the graph in place.
    ///
    /// Returns `false`, leaving the graph untouched, once the budget is
    /// exhausted.
    pub fn step<G: GraphEdit + ?Sized>(&mut self, g: &mut G) -> bool {
        if self.terminated() {
            return false;
        }
        self.iteration += 1;

        let grad = gradient(g, &self.opts);
        let ann = self.opts.annealing_w * self.opts.iterations as f64 / self.iteration as f64;

        for n in 0..g.size() {
            let (x, y) = g.coord(n);
            let nx = x - self.opts.lambda * (grad.dx[n] + ann * self.rng.random::<f64>());
            let ny = y - self.opts.lambda * (grad.dy[n] + ann * self.rng.random::<f64>());
            g.move_to(n, nx, ny);
        }
        true
    }

    /// Drains the remaining budget, reporting the loss as it falls.
    pub fn run<G: GraphEdit + ?Sized>(&mut self, g: &mut G) {
        // Ten reports per run; short runs report every step.
        let report_every = (self.opts.iterations / 10).max(1);
        while self.step(g) {
            let it = self.iteration;
            if it % report_every == 0 || it < 5 {
                tracing::debug!(iteration = it, loss = loss(g, &self.opts), "descent step");
            }
        }
    }
}
