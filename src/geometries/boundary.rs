// Periodic boundary module: Contains the rectangular wrap-around domain
// This module provides single-step periodic wrapping for points produced by lattice transforms

use std::fmt;

use anyhow::Error;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::{BOUNDARY_EPSILON, UNBOUNDED_EXTENT};
use crate::lattice::Lattice;

/// Periodic rectangular domain `[xmin, xmax) × [ymin, ymax)`
///
/// Points leaving the box on one side re-enter on the opposite side. Wrapping
/// is a single step per axis: a point displaced by more than one period is
/// not brought back inside.
///
/// An axis with `min == max == 0.0` is degenerate and never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    min: Vector2<f64>,
    max: Vector2<f64>,
}

impl Boundary {
    /// Create a new periodic boundary
    ///
    /// # Panics
    /// Panics if `xmax <= xmin` or `ymax <= ymin`, unless that axis is the
    /// degenerate all-zero case.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        assert!(
            is_valid_extent(xmin, xmax),
            "Boundary requires xmax > xmin (got xmin = {}, xmax = {})",
            xmin,
            xmax
        );
        assert!(
            is_valid_extent(ymin, ymax),
            "Boundary requires ymax > ymin (got ymin = {}, ymax = {})",
            ymin,
            ymax
        );
        Self {
            min: Vector2::new(xmin, ymin),
            max: Vector2::new(xmax, ymax),
        }
    }

    /// Fallible counterpart of [`Boundary::new`] for bounds coming from user input
    pub fn try_new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, Error> {
        if !is_valid_extent(xmin, xmax) {
            return Err(Error::msg(format!(
                "Invalid boundary: xmax ({}) must be greater than xmin ({}).",
                xmax, xmin
            )));
        }
        if !is_valid_extent(ymin, ymax) {
            return Err(Error::msg(format!(
                "Invalid boundary: ymax ({}) must be greater than ymin ({}).",
                ymax, ymin
            )));
        }
        Ok(Self {
            min: Vector2::new(xmin, ymin),
            max: Vector2::new(xmax, ymax),
        })
    }

    /// Boundary so large that no lattice ever touches it
    pub fn unbounded() -> Self {
        Self::new(
            -UNBOUNDED_EXTENT,
            UNBOUNDED_EXTENT,
            -UNBOUNDED_EXTENT,
            UNBOUNDED_EXTENT,
        )
    }

    /// Periodic along x only
    pub fn periodic_x(xmin: f64, xmax: f64) -> Self {
        Self::new(xmin, xmax, -UNBOUNDED_EXTENT, UNBOUNDED_EXTENT)
    }

    /// Periodic along y only
    pub fn periodic_y(ymin: f64, ymax: f64) -> Self {
        Self::new(-UNBOUNDED_EXTENT, UNBOUNDED_EXTENT, ymin, ymax)
    }

    pub fn xmin(&self) -> f64 {
        self.min.x
    }

    pub fn xmax(&self) -> f64 {
        self.max.x
    }

    pub fn ymin(&self) -> f64 {
        self.min.y
    }

    pub fn ymax(&self) -> f64 {
        self.max.y
    }

    /// Get the period along x
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the period along y
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the size (width, height) of the box
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }

    /// Check if a point lies inside the half-open box
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Map a point back into the box
    ///
    /// Each axis is handled independently: a coordinate at or beyond the
    /// upper bound loses one period, a coordinate below the lower bound gains
    /// one period, anything else is left alone.
    pub fn apply(&self, point: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            wrap_once(point.x, self.min.x, self.max.x),
            wrap_once(point.y, self.min.y, self.max.y),
        )
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "xmin = {}, xmax = {}, ymin = {}, ymax = {}",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}

/// Derive a periodic boundary from the extent of a lattice
///
/// The min/max reduction is seeded at `0.0`, so the derived box always
/// contains the origin. Every side is then pushed outwards by
/// `offset + BOUNDARY_EPSILON` so that sites sitting exactly on the extreme
/// coordinates stay inside after rounding.
///
/// # Arguments
/// * `lattice` - Sites to enclose
/// * `offset_x` - Extra padding left and right
/// * `offset_y` - Extra padding below and above
pub fn boundary_from_lattice(lattice: &Lattice, offset_x: f64, offset_y: f64) -> Boundary {
    // Seeded at the origin: lattices away from (0, 0) get an enlarged box
    let mut min = Vector2::zeros();
    let mut max = Vector2::zeros();

    for site in lattice.iter() {
        min.x = f64::min(min.x, site.x);
        min.y = f64::min(min.y, site.y);
        max.x = f64::max(max.x, site.x);
        max.y = f64::max(max.y, site.y);
    }

    let pad_x = offset_x + BOUNDARY_EPSILON;
    let pad_y = offset_y + BOUNDARY_EPSILON;

    Boundary::new(min.x - pad_x, max.x + pad_x, min.y - pad_y, max.y + pad_y)
}

fn is_valid_extent(min: f64, max: f64) -> bool {
    max > min || (min == 0.0 && max == 0.0)
}

fn wrap_once(value: f64, min: f64, max: f64) -> f64 {
    if value >= max {
        value - (max - min)
    } else if value < min {
        value + (max - min)
    } else {
        value
    }
}
