use log::{debug, trace};
use nalgebra::Vector2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::AXIS_SEARCH_SAMPLES;
use crate::geometries::boundary::Boundary;
use crate::geometries::point_transform::PointTransform;
use crate::lattice::lattice2d::Lattice;
use crate::symmetries::symmetry_predicates::is_invariant;

/// Sweep direction of an axis search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Axes parallel to y, sampled along x
    Vertical,
    /// Axes parallel to x, sampled along y
    Horizontal,
}

impl AxisOrientation {
    fn direction(&self) -> Vector2<f64> {
        match self {
            AxisOrientation::Vertical => Vector2::new(0.0, 1.0),
            AxisOrientation::Horizontal => Vector2::new(1.0, 0.0),
        }
    }

    /// Point the `j`-th candidate axis passes through
    fn sample(&self, boundary: &Boundary, j: usize, samples: usize) -> Vector2<f64> {
        match self {
            AxisOrientation::Vertical => {
                let dx = boundary.width() / samples as f64;
                Vector2::new(boundary.xmin() + j as f64 * dx, 0.0)
            }
            AxisOrientation::Horizontal => {
                let dy = boundary.height() / samples as f64;
                Vector2::new(0.0, boundary.ymin() + j as f64 * dy)
            }
        }
    }
}

/// Find every vertical mirror axis `x = x*` of a lattice inside `boundary`.
///
/// Returns the points `(x*, 0)` through which the axes pass, in increasing
/// order. An empty result means no axis was found.
pub fn vertical_reflection_axis(lattice: &Lattice, boundary: &Boundary) -> Vec<Vector2<f64>> {
    reflection_axes(lattice, boundary, AxisOrientation::Vertical, AXIS_SEARCH_SAMPLES)
}

/// Find every horizontal mirror axis `y = y*` of a lattice inside `boundary`.
///
/// Returns the points `(0, y*)` through which the axes pass, in increasing
/// order. An empty result means no axis was found.
pub fn horizontal_reflection_axis(lattice: &Lattice, boundary: &Boundary) -> Vec<Vector2<f64>> {
    reflection_axes(lattice, boundary, AxisOrientation::Horizontal, AXIS_SEARCH_SAMPLES)
}

/// Brute-force sweep over `samples + 1` evenly spaced candidates, both box edges included.
///
/// An axis lying between two candidates is missed; the resolution is part of
/// the observable result.
pub fn reflection_axes(
    lattice: &Lattice,
    boundary: &Boundary,
    orientation: AxisOrientation,
    samples: usize,
) -> Vec<Vector2<f64>> {
    assert!(samples > 0, "Axis search needs at least one interval");

    let canonical = lattice.canonicalize();
    let direction = orientation.direction();

    let check = |j: usize| -> Option<Vector2<f64>> {
        let r_star = orientation.sample(boundary, j, samples);
        let reflection = PointTransform::reflection(direction, r_star, *boundary);
        if is_invariant(&canonical, &reflection) {
            trace!("{:?} axis through ({}, {})", orientation, r_star.x, r_star.y);
            Some(r_star)
        } else {
            None
        }
    };

    #[cfg(feature = "parallel")]
    let axes: Vec<Vector2<f64>> = (0..=samples).into_par_iter().filter_map(check).collect();

    #[cfg(not(feature = "parallel"))]
    let axes: Vec<Vector2<f64>> = (0..=samples).filter_map(check).collect();

    debug!(
        "{:?} sweep over {} candidates found {} axes for {} sites",
        orientation,
        samples + 1,
        axes.len(),
        lattice.len()
    );

    axes
}
