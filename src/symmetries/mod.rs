// Symmetries module: Contains set-invariance predicates and brute-force mirror axis searches
// This module decides which reflections, translations and glides map a lattice onto itself

// ======================== MODULE DECLARATIONS ========================
pub mod axis_search;
pub mod symmetry_predicates;


// ======================== SYMMETRY PREDICATES ========================
pub use symmetry_predicates::{
    is_symmetric,                // fn(lattice: &Lattice, v, r_star, boundary: &Boundary) -> bool - invariance under tilted reflection
    is_symmetric_by_translation, // fn(lattice: &Lattice, v, amount, boundary: &Boundary) -> bool - invariance under translation
    is_symmetric_under,          // fn(lattice: &Lattice, transform: &PointTransform) -> bool - invariance under any transform (glides)
};

// ======================== AXIS SEARCH ========================
pub use axis_search::{
    AxisOrientation,            // enum - Vertical (sampled along x) or Horizontal (sampled along y)
    horizontal_reflection_axis, // fn(lattice: &Lattice, boundary: &Boundary) -> Vec<Vector2<f64>> - all y = y* mirror axes
    reflection_axes,            // fn(lattice, boundary, orientation, samples) -> Vec<Vector2<f64>> - sweep with custom resolution
    vertical_reflection_axis,   // fn(lattice: &Lattice, boundary: &Boundary) -> Vec<Vector2<f64>> - all x = x* mirror axes
};
