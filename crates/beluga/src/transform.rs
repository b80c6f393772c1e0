//! In-place coordinate transforms applied before and after optimization.

use beluga_graphlib::GraphEdit;
use rand::Rng;

/// Rescales all coordinates into `[-1, 1]`, per axis.
///
/// Empty graphs are left untouched. An axis with zero width (a single node,
/// or all nodes coincident on that axis) collapses to `0.0` on that axis
/// instead of dividing by zero.
pub fn normalize(g: &mut impl GraphEdit) {
    if g.size() == 0 {
        return;
    }

    let (mut min_x, mut min_y) = g.coord(0);
    let (mut max_x, mut max_y) = (min_x, min_y);
    for n in 1..g.size() {
        let (x, y) = g.coord(n);
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let sx = max_x - min_x;
    let sy = max_y - min_y;

    for n in 0..g.size() {
        let (x, y) = g.coord(n);
        let xx = if sx > 0.0 {
            2.0 * (x - min_x) / sx - 1.0
        } else {
            0.0
        };
        let yy = if sy > 0.0 {
            2.0 * (y - min_y) / sy - 1.0
        } else {
            0.0
        };
        g.move_to(n, xx, yy);
    }
}

/// Redraws every coordinate independently, uniform in `[-1, 1]`.
///
/// Edges and legends are untouched. Used to restart the optimization from a
/// fresh layout when a run settled into a local minimum the caller does not
/// like.
pub fn shuffle(g: &mut impl GraphEdit, rng: &mut impl Rng) {
    for n in 0..g.size() {
        let x = rng.random_range(-1.0..1.0);
        let y = rng.random_range(-1.0..1.0);
        g.move_to(n, x, y);
    }
}
