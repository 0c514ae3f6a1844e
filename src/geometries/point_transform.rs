// Point transform module: Contains reflections, translations and glides of single points
// All transforms are pure: they take a point by value and return a new one

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::geometries::boundary::Boundary;

/// Mirror a point across the vertical line `x = x_star`
pub fn reflect_vertical(point: Vector2<f64>, x_star: f64) -> Vector2<f64> {
    Vector2::new(2.0 * x_star - point.x, point.y)
}

/// Mirror a point across the horizontal line `y = y_star`
pub fn reflect_horizontal(point: Vector2<f64>, y_star: f64) -> Vector2<f64> {
    Vector2::new(point.x, 2.0 * y_star - point.y)
}

/// Mirror a point across an arbitrary line, then wrap it into `boundary`
///
/// The line passes through `r_star` with direction `v` (any length). The
/// point is moved into a frame where the axis is vertical, mirrored there and
/// moved back:
///
/// 1. `α` = angle between `v̂` and the y axis, signed by `v̂.x`
/// 2. rotate `point - r_star` by `+α`
/// 3. negate the x component
/// 4. rotate back by `-α`, add `r_star`, apply the boundary
///
/// Results carry round-off of order 1e-15 even for axis-aligned directions.
///
/// # Panics
/// Panics if `v` is the zero vector.
pub fn reflect_tilted(
    point: Vector2<f64>,
    v: Vector2<f64>,
    r_star: Vector2<f64>,
    boundary: &Boundary,
) -> Vector2<f64> {
    let rotation = Rotation2::new(angle_to_y_axis(v));

    let rotated = rotation * (point - r_star);
    let mirrored = Vector2::new(-rotated.x, rotated.y);

    boundary.apply(r_star + rotation.inverse() * mirrored)
}

/// Shift a point by `amount * v`, then wrap it into `boundary`
pub fn translate(
    point: Vector2<f64>,
    v: Vector2<f64>,
    amount: f64,
    boundary: &Boundary,
) -> Vector2<f64> {
    boundary.apply(point + amount * v)
}

/// Glide: reflect across the tilted axis, then translate along the same direction
pub fn perform_glide(
    point: Vector2<f64>,
    v: Vector2<f64>,
    r_star: Vector2<f64>,
    amount: f64,
    boundary: &Boundary,
) -> Vector2<f64> {
    let reflected = reflect_tilted(point, v, r_star, boundary);
    translate(reflected, v, amount, boundary)
}

/// Signed angle between the normalized direction and ŷ
///
/// `arccos(ŷ·v̂)` alone cannot tell `(1, 1)` from `(-1, 1)`, so the sign of
/// `v̂.x` picks the rotation sense.
fn angle_to_y_axis(v: Vector2<f64>) -> f64 {
    let norm = v.norm();
    assert!(norm > 0.0, "Axis direction must be a non-zero vector");

    let unit = v / norm;
    let alpha = unit.y.clamp(-1.0, 1.0).acos();
    if unit.x < 0.0 {
        -alpha
    } else {
        alpha
    }
}

/// A point transform as a value
///
/// Lets callers pass any of the transforms above to the lattice-level
/// machinery (lattice transforms, the symmetry predicate) without closures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointTransform {
    /// Mirror across `x = x_star`
    ReflectVertical { x_star: f64 },
    /// Mirror across `y = y_star`
    ReflectHorizontal { y_star: f64 },
    /// Mirror across the line through `r_star` along `direction`
    ReflectTilted {
        direction: Vector2<f64>,
        r_star: Vector2<f64>,
        boundary: Boundary,
    },
    /// Shift by `amount * direction`
    Translate {
        direction: Vector2<f64>,
        amount: f64,
        boundary: Boundary,
    },
    /// Tilted reflection followed by a shift along the same direction
    Glide {
        direction: Vector2<f64>,
        r_star: Vector2<f64>,
        amount: f64,
        boundary: Boundary,
    },
}

impl PointTransform {
    /// Mirror across the line through `r_star` along `direction`
    pub fn reflection(direction: Vector2<f64>, r_star: Vector2<f64>, boundary: Boundary) -> Self {
        PointTransform::ReflectTilted {
            direction,
            r_star,
            boundary,
        }
    }

    /// Shift by `amount * direction`
    pub fn translation(direction: Vector2<f64>, amount: f64, boundary: Boundary) -> Self {
        PointTransform::Translate {
            direction,
            amount,
            boundary,
        }
    }

    /// Reflection followed by a shift along the axis
    pub fn glide(
        direction: Vector2<f64>,
        r_star: Vector2<f64>,
        amount: f64,
        boundary: Boundary,
    ) -> Self {
        PointTransform::Glide {
            direction,
            r_star,
            amount,
            boundary,
        }
    }

    /// Apply the transform to a point
    pub fn apply_to_point(&self, point: Vector2<f64>) -> Vector2<f64> {
        match *self {
            PointTransform::ReflectVertical { x_star } => reflect_vertical(point, x_star),
            PointTransform::ReflectHorizontal { y_star } => reflect_horizontal(point, y_star),
            PointTransform::ReflectTilted {
                direction,
                r_star,
                ref boundary,
            } => reflect_tilted(point, direction, r_star, boundary),
            PointTransform::Translate {
                direction,
                amount,
                ref boundary,
            } => translate(point, direction, amount, boundary),
            PointTransform::Glide {
                direction,
                r_star,
                amount,
                ref boundary,
            } => perform_glide(point, direction, r_star, amount, boundary),
        }
    }
}
