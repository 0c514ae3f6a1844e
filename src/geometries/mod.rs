// Geometries module: Contains the periodic domain and the point-level symmetry transforms
// This module provides the geometric primitives every lattice operation is built from

// ======================== MODULE DECLARATIONS ========================
pub mod boundary;
pub mod point_transform;


// ======================== PERIODIC DOMAIN ========================
pub use boundary::{
    Boundary,              // struct - half-open periodic rectangle with single-step wrap
    boundary_from_lattice, // fn(lattice: &Lattice, offset_x: f64, offset_y: f64) -> Boundary - padded box around a lattice
};
// Boundary impl methods:
//   new(xmin, xmax, ymin, ymax) -> Self                       - creates boundary, panics on inverted bounds
//   try_new(xmin, xmax, ymin, ymax) -> anyhow::Result<Self>   - same validation, returned as error
//   unbounded() -> Self                                       - ±1e16 box (also Default)
//   periodic_x(xmin, xmax) / periodic_y(ymin, ymax) -> Self   - periodic along one axis only
//   xmin/xmax/ymin/ymax(&self) -> f64                         - bounds
//   width/height(&self) -> f64, size(&self) -> Vector2<f64>   - periods
//   contains(&self, point: Vector2<f64>) -> bool              - half-open containment
//   apply(&self, point: Vector2<f64>) -> Vector2<f64>         - wraps point by at most one period per axis

// ======================== POINT TRANSFORMS ========================
pub use point_transform::{
    PointTransform,     // enum - transform as a value (vertical/horizontal/tilted reflection, translation, glide)
    perform_glide,      // fn(point, v, r_star, amount, boundary) -> Vector2<f64> - reflect then translate along v
    reflect_horizontal, // fn(point, y_star) -> Vector2<f64> - mirror across y = y_star
    reflect_tilted,     // fn(point, v, r_star, boundary) -> Vector2<f64> - mirror across arbitrary line, wrapped
    reflect_vertical,   // fn(point, x_star) -> Vector2<f64> - mirror across x = x_star
    translate,          // fn(point, v, amount, boundary) -> Vector2<f64> - shift by amount * v, wrapped
};
// PointTransform impl methods:
//   reflection(direction, r_star, boundary) -> Self           - tilted reflection
//   translation(direction, amount, boundary) -> Self          - translation
//   glide(direction, r_star, amount, boundary) -> Self        - glide
//   apply_to_point(&self, point: Vector2<f64>) -> Vector2<f64> - applies the transform
