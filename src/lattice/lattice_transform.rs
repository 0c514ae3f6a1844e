use nalgebra::Vector2;

use crate::geometries::boundary::Boundary;
use crate::geometries::point_transform::{
    perform_glide, reflect_horizontal, reflect_tilted, reflect_vertical, translate, PointTransform,
};
use crate::lattice::lattice2d::Lattice;

// Lattice transforms: site `k` of the output is the image of site `k` of the input.
// Nothing here rounds or reorders; canonicalization belongs to the symmetry predicates.

/// Map any point function over the sites of a lattice
pub fn transform_lattice<F>(lattice: &Lattice, transform: F) -> Lattice
where
    F: Fn(Vector2<f64>) -> Vector2<f64>,
{
    lattice.iter().map(|site| transform(*site)).collect()
}

/// Apply a [`PointTransform`] to every site
pub fn apply_transform(lattice: &Lattice, transform: &PointTransform) -> Lattice {
    transform_lattice(lattice, |site| transform.apply_to_point(site))
}

/// Mirror a lattice across `x = x_star`
pub fn reflect_lattice_by_vertical_axis(lattice: &Lattice, x_star: f64) -> Lattice {
    transform_lattice(lattice, |site| reflect_vertical(site, x_star))
}

/// Mirror a lattice across `y = y_star`
pub fn reflect_lattice_by_horizontal_axis(lattice: &Lattice, y_star: f64) -> Lattice {
    transform_lattice(lattice, |site| reflect_horizontal(site, y_star))
}

/// Mirror a lattice across the line through `r_star` along `v`
pub fn reflect_lattice_by_axis(
    lattice: &Lattice,
    v: Vector2<f64>,
    r_star: Vector2<f64>,
    boundary: &Boundary,
) -> Lattice {
    transform_lattice(lattice, |site| reflect_tilted(site, v, r_star, boundary))
}

/// Shift a lattice by `amount * v`
pub fn translate_lattice(
    lattice: &Lattice,
    v: Vector2<f64>,
    amount: f64,
    boundary: &Boundary,
) -> Lattice {
    transform_lattice(lattice, |site| translate(site, v, amount, boundary))
}

/// Reflect a lattice across the tilted axis, then shift it along `v`
pub fn glide_lattice(
    lattice: &Lattice,
    v: Vector2<f64>,
    r_star: Vector2<f64>,
    amount: f64,
    boundary: &Boundary,
) -> Lattice {
    transform_lattice(lattice, |site| perform_glide(site, v, r_star, amount, boundary))
}
