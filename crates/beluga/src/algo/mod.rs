pub mod distance;
pub mod spring;

use serde::{Deserialize, Serialize};

/// Parameters of the combined spring energy and its annealed descent.
///
/// All fields are independent scalars and none are validated: a negative
/// weight simply inverts the corresponding force, which is well-defined if
/// rarely useful. Distances are compared as *squared* Euclidean distances
/// throughout, so `dist_target` and `dist_min` are squared-distance values.
///
/// Defaults are a unit-scale starting point: unit target distance and unit
/// attraction/repulsion weights, no regularization, no minimum-distance
/// hinge, no annealing, and a single iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringOptions {
    /// L2 regularization weight pulling every node toward the origin.
    /// Without it, repulsion alone drives nodes to infinity.
    pub l2: f64,
    /// Target squared distance for linked pairs.
    pub dist_target: f64,
    /// Weight of the target-distance penalty.
    pub dist_target_w: f64,
    /// Minimum squared distance to keep between non-linked pairs.
    pub dist_min: f64,
    /// Weight of the minimum-distance hinge.
    pub dist_min_w: f64,
    /// Weight of the cumulative edge-length penalty (linear in edge length).
    pub cumulative_w: f64,
    /// Weight of the all-pairs short-range repulsion.
    pub repulsion_w: f64,
    /// Annealing weight: scales the injected noise, which starts at
    /// `annealing_w * iterations` and decays to `annealing_w` over the run.
    pub annealing_w: f64,
    /// Gradient-descent step size.
    pub lambda: f64,
    /// Fixed iteration budget. The minimizer always runs the full budget;
    /// there is no early-stopping condition.
    pub iterations: usize,
    /// Seed for the reproducible annealing-noise source.
    pub random_seed: u64,
}

impl Default for SpringOptions {
    fn default() -> Self {
        Self {
            l2: 0.0,
            dist_target: 1.0,
            dist_target_w: 1.0,
            dist_min: 1.0,
            dist_min_w: 0.0,
            cumulative_w: 1.0,
            repulsion_w: 1.0,
            annealing_w: 0.0,
            lambda: 1e-5,
            iterations: 1,
            random_seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SpringOptions;

    #[test]
    fn options_deserialize_with_partial_config() {
        let opts: SpringOptions =
            serde_json::from_str(r#"{"lambda": 1e-4, "iterations": 100, "annealing_w": 2.5}"#)
                .unwrap();

        assert_eq!(opts.lambda, 1e-4);
        assert_eq!(opts.iterations, 100);
        assert_eq!(opts.annealing_w, 2.5);
        // Everything else falls back to the defaults.
        assert_eq!(opts.dist_target, 1.0);
        assert_eq!(opts.repulsion_w, 1.0);
        assert_eq!(opts.random_seed, 0);
    }
}
