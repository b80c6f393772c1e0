#![forbid(unsafe_code)]

//! Headless annealed force-directed 2D graph layout.
//!
//! `beluga` arranges a graph by minimizing a combined energy over its node
//! coordinates: linked nodes are pulled toward a target separation, every
//! pair repels at short range, non-linked pairs keep a minimum distance, and
//! an L2 term keeps the layout near the origin. Minimization is plain
//! gradient descent with a decaying injected-noise (annealing) schedule; the
//! analytic gradient is hand-derived per term and checked against a
//! finite-difference estimate (see [`numeric_gradient`]).
//!
//! The engine is runtime-agnostic and does no I/O; rendering the result is a
//! caller concern, fed through the read-only [`GraphView`] surface.

pub mod algo;
pub mod error;
pub mod transform;

pub use algo::SpringOptions;
pub use algo::spring::{Gradient, Minimizer, gradient, loss, max_deviation, numeric_gradient};
pub use beluga_graphlib::{Graph, GraphEdit, GraphView};
pub use error::{Error, Result};
pub use transform::{normalize, shuffle};

/// Headless layout entry point: validate the graph, run an annealed descent
/// with a fresh [`Minimizer`], then rescale into `[-1, 1]`.
///
/// Callers that want to reseed positions between attempts compose
/// [`shuffle`] and [`Minimizer`] directly.
pub fn arrange(graph: &mut Graph, opts: &SpringOptions) -> Result<()> {
    validate(graph)?;
    Minimizer::new(opts.clone()).run(graph);
    transform::normalize(graph);
    Ok(())
}

fn validate(graph: &Graph) -> Result<()> {
    for (i, j) in graph.edges() {
        if i >= graph.size() || j >= graph.size() {
            return Err(Error::MissingEndpoint {
                i,
                j,
                nodes: graph.size(),
            });
        }
    }
    Ok(())
}
