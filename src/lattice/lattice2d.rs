use std::cmp::Ordering;
use std::ops::Index;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::{LATTICE_ABS_TOLERANCE, LATTICE_REL_TOLERANCE, ROUNDING_DECIMALS};

/// An ordered collection of 2D sites.
///
/// The logical identity of a lattice is the *set* of its sites. Order only
/// matters for reproducibility: generated lattices come out canonical
/// (rounded to [`ROUNDING_DECIMALS`] and sorted by x, then y), while
/// transformed lattices keep the order of their input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    sites: Vec<Vector2<f64>>,
}

impl Lattice {
    /// Wrap sites as given, without reordering.
    pub fn new(sites: Vec<Vector2<f64>>) -> Self {
        Self { sites }
    }

    /// Build a canonical lattice from raw sites.
    pub fn canonical(sites: Vec<Vector2<f64>>) -> Self {
        let mut sites: Vec<Vector2<f64>> = sites.into_iter().map(round_point).collect();
        sites.sort_by(compare_points);
        Self { sites }
    }

    /// Round and sort a copy of this lattice.
    pub fn canonicalize(&self) -> Self {
        Self::canonical(self.sites.clone())
    }

    /// Check whether the sites are already rounded and sorted.
    pub fn is_canonical(&self) -> bool {
        self.sites.iter().all(|site| round_point(*site) == *site)
            && self
                .sites
                .windows(2)
                .all(|pair| compare_points(&pair[0], &pair[1]) != Ordering::Greater)
    }

    pub fn sites(&self) -> &[Vector2<f64>] {
        &self.sites
    }

    pub fn into_sites(self) -> Vec<Vector2<f64>> {
        self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<f64>> {
        self.sites.iter()
    }

    /// Element-wise comparison with the default tolerances.
    ///
    /// Two sites match when every component satisfies
    /// `|a - b| <= abs_tol + rel_tol * |b|`.
    pub fn approx_eq(&self, other: &Lattice) -> bool {
        self.approx_eq_with(other, LATTICE_ABS_TOLERANCE, LATTICE_REL_TOLERANCE)
    }

    pub fn approx_eq_with(&self, other: &Lattice, abs_tol: f64, rel_tol: f64) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| {
                approx_equal(a.x, b.x, abs_tol, rel_tol) && approx_equal(a.y, b.y, abs_tol, rel_tol)
            })
    }
}

impl From<Vec<Vector2<f64>>> for Lattice {
    fn from(sites: Vec<Vector2<f64>>) -> Self {
        Self::new(sites)
    }
}

impl FromIterator<Vector2<f64>> for Lattice {
    fn from_iter<I: IntoIterator<Item = Vector2<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Lattice {
    type Item = &'a Vector2<f64>;
    type IntoIter = std::slice::Iter<'a, Vector2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}

impl Index<usize> for Lattice {
    type Output = Vector2<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sites[index]
    }
}

/// Round to a fixed number of decimals, ties to even.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    // adding +0.0 turns -0.0 into 0.0 so sort keys agree
    (value * scale).round_ties_even() / scale + 0.0
}

/// Round both coordinates to [`ROUNDING_DECIMALS`].
pub fn round_point(point: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(
        round_to_decimals(point.x, ROUNDING_DECIMALS),
        round_to_decimals(point.y, ROUNDING_DECIMALS),
    )
}

/// Ascending by x, ties broken by y.
pub fn compare_points(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Absolute-plus-relative float comparison.
pub fn approx_equal(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= abs_tol + rel_tol * b.abs()
}
