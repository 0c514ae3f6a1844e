use std::collections::BTreeSet;

use log::debug;
use nalgebra::Vector2;

use crate::lattice::lattice2d::Lattice;

/// √3 as produced by `3.0_f64.sqrt()`
pub const SQRT_3: f64 = 1.7320508075688772;

const HALF_SQRT_3: f64 = 0.5 * SQRT_3;

/// Bond vectors of a honeycomb site: up-right, down-right, left.
pub const GRAPHENE_DELTA: [[f64; 2]; 3] = [[0.5, HALF_SQRT_3], [0.5, -HALF_SQRT_3], [-1.0, 0.0]];

/// Steps walked inside one unit cell: up-right, right, down-right.
pub const UNIT_CELL_SEQUENCE: [[f64; 2]; 3] = [
    GRAPHENE_DELTA[0],
    [-GRAPHENE_DELTA[2][0], -GRAPHENE_DELTA[2][1]],
    GRAPHENE_DELTA[1],
];

/// Number of sites contributed by each unit cell.
pub const SITES_PER_CELL: usize = 4;

/// Create an `nx × ny` honeycomb tile without vacancies.
pub fn honeycomb_lattice(nx: usize, ny: usize) -> Lattice {
    honeycomb_lattice_with_vacancies(nx, ny, &BTreeSet::new())
}

/// Create an `nx × ny` honeycomb tile, leaving out the sites in `removed`.
///
/// Row `j` starts at `(0, j·√3)`. Every cell walks the three steps of
/// [`UNIT_CELL_SEQUENCE`] and then the horizontal bond that links it to the
/// next cell; the last cell of a row skips that link site. Candidates are
/// numbered `4·i + 4·nx·j + k` in walk order, and that number is what
/// `removed` refers to. The number is never compacted, so removing a site
/// does not shift the numbers of the others.
///
/// Coordinates are rounded and sorted, so the result is canonical and
/// reproducible for fixed inputs.
pub fn honeycomb_lattice_with_vacancies(nx: usize, ny: usize, removed: &BTreeSet<usize>) -> Lattice {
    if nx == 0 || ny == 0 {
        return Lattice::default();
    }

    let mut sites = Vec::with_capacity(SITES_PER_CELL * nx * ny);
    let mut push_valid = |index: usize, site: Vector2<f64>| {
        if !removed.contains(&index) {
            sites.push(site);
        }
    };

    let steps = UNIT_CELL_SEQUENCE.map(|[x, y]| Vector2::new(x, y));
    let link = Vector2::new(GRAPHENE_DELTA[2][0], GRAPHENE_DELTA[2][1]);

    for j in 0..ny {
        let mut x0 = Vector2::new(0.0, j as f64 * SQRT_3);
        push_valid(SITES_PER_CELL * nx * j, x0);

        for i in 0..nx {
            let cell_index = SITES_PER_CELL * i + SITES_PER_CELL * nx * j;

            for (k, step) in steps.iter().enumerate() {
                x0 += step;
                push_valid(cell_index + k + 1, x0);
            }

            if i + 1 < nx {
                push_valid(cell_index + SITES_PER_CELL, x0 - link);
            }
            x0 -= link;
        }
    }

    debug!(
        "Generated {}x{} honeycomb tile with {} sites ({} removed)",
        nx,
        ny,
        sites.len(),
        removed.len()
    );

    Lattice::canonical(sites)
}
