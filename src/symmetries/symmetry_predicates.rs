use nalgebra::Vector2;

use crate::geometries::boundary::Boundary;
use crate::geometries::point_transform::PointTransform;
use crate::lattice::lattice2d::Lattice;
use crate::lattice::lattice_transform::{apply_transform, reflect_lattice_by_axis, translate_lattice};

/// Check whether a lattice maps onto itself as a set under a reflection.
///
/// The sites are reflected across the line through `r_star` along `v`,
/// wrapped by `boundary`, then rounded and sorted. The result is compared
/// element-wise with the canonical form of `lattice`. Sites may trade places;
/// only the resulting set of positions matters.
///
/// Two distinct sites that round to the same key could mask a broken
/// symmetry. At nine decimals this does not happen for generated tiles.
pub fn is_symmetric(
    lattice: &Lattice,
    v: Vector2<f64>,
    r_star: Vector2<f64>,
    boundary: &Boundary,
) -> bool {
    let reflected = reflect_lattice_by_axis(lattice, v, r_star, boundary);
    reflected.canonicalize().approx_eq(&lattice.canonicalize())
}

/// Check whether a lattice maps onto itself as a set under `amount * v`.
pub fn is_symmetric_by_translation(
    lattice: &Lattice,
    v: Vector2<f64>,
    amount: f64,
    boundary: &Boundary,
) -> bool {
    let translated = translate_lattice(lattice, v, amount, boundary);
    translated.canonicalize().approx_eq(&lattice.canonicalize())
}

/// Set invariance under any point transform.
///
/// There is no glide predicate: a glide is checked by composing a reflection
/// and a translation into [`PointTransform::Glide`] and passing it here.
pub fn is_symmetric_under(lattice: &Lattice, transform: &PointTransform) -> bool {
    is_invariant(&lattice.canonicalize(), transform)
}

/// Set invariance against a reference that is already canonical.
///
/// Sweeps call this to avoid re-sorting the reference at every sample.
pub(crate) fn is_invariant(canonical: &Lattice, transform: &PointTransform) -> bool {
    debug_assert!(canonical.is_canonical());
    apply_transform(canonical, transform)
        .canonicalize()
        .approx_eq(canonical)
}
