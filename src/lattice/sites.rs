use std::collections::BTreeSet;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::lattice::honeycomb::SQRT_3;

/// The four sites of a honeycomb unit cell in grid (column, row) numbering.
///
/// Each kind carries a fixed table: the grid offsets of its three nearest
/// neighbors, the signed label of each bond, and the Rashba coupling of each
/// bond in units of the Rashba strength.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SiteKind {
    A,
    B,
    C,
    D,
}

impl SiteKind {
    pub const ALL: [SiteKind; 4] = [SiteKind::A, SiteKind::B, SiteKind::C, SiteKind::D];

    /// Kind of the `k`-th site of a cell (taken modulo 4)
    pub fn from_position(k: usize) -> Self {
        Self::ALL[k % 4]
    }

    /// Grid offsets (column, row) of the three nearest neighbors
    pub fn neighbor_offsets(&self) -> [[i64; 2]; 3] {
        match self {
            SiteKind::A => [[0, 1], [-1, 1], [0, -1]],
            SiteKind::B => [[0, -1], [1, -1], [0, 1]],
            SiteKind::C => [[1, 1], [0, 1], [0, -1]],
            SiteKind::D => [[-1, -1], [0, -1], [0, 1]],
        }
    }

    /// Bond labels: positive on the A/C sublattice, negative on B/D
    pub fn bond_directions(&self) -> [i8; 3] {
        match self {
            SiteKind::A | SiteKind::C => [1, 2, 3],
            SiteKind::B | SiteKind::D => [-1, -2, -3],
        }
    }

    /// Rashba coupling of each bond for the given spin, in units of the coupling strength
    pub fn rashba_coefficients(&self, spin_up: bool) -> [Complex64; 3] {
        let spin = if spin_up { 1.0 } else { -1.0 };
        let a_type = [
            Complex64::new(-0.5 * spin, 0.5 * SQRT_3),
            Complex64::new(-0.5 * spin, -0.5 * SQRT_3),
            Complex64::new(-spin, 0.0),
        ];
        match self {
            SiteKind::A | SiteKind::C => a_type,
            SiteKind::B | SiteKind::D => a_type.map(|c| -c),
        }
    }
}

/// A nearest-neighbor bond between two 1-based orbital indices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bond {
    /// Signed bond label from [`SiteKind::bond_directions`]
    pub direction: i8,
    /// 1-based orbital index of the origin
    pub from: usize,
    /// 1-based orbital index of the neighbor
    pub to: usize,
    /// Whether either end has been removed
    pub removed: bool,
    /// Coupling in units of the model strength (1 for plain hopping)
    pub coupling: Complex64,
}

/// Integer grid of honeycomb sites with periodic wrap and sequential numbering.
///
/// The grid has `nx` columns and `orbitals * ny` rows. Sequential indices run
/// row-fastest and are independent of which sites are removed; removal only
/// flags bonds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteGrid {
    pub nx: usize,
    pub ny: usize,
    pub orbitals: usize,
}

impl SiteGrid {
    /// # Panics
    /// Panics if a dimension or the orbital count is zero.
    pub fn new(nx: usize, ny: usize, orbitals: usize) -> Self {
        assert!(nx > 0 && ny > 0, "Grid dimensions must be positive");
        assert!(orbitals > 0, "At least one orbital per site is required");
        Self { nx, ny, orbitals }
    }

    /// Number of rows once orbitals are interleaved
    pub fn rows(&self) -> usize {
        self.orbitals * self.ny
    }

    /// Number of orbitals in the grid
    pub fn len(&self) -> usize {
        self.nx * self.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Step from `start` by a neighbor offset, wrapping on both axes
    pub fn periodic(&self, start: [usize; 2], delta: [i64; 2]) -> [usize; 2] {
        let column = (start[0] as i64 + delta[0]).rem_euclid(self.nx as i64);
        let row = (start[1] as i64 + self.orbitals as i64 * delta[1]).rem_euclid(self.rows() as i64);
        [column as usize, row as usize]
    }

    /// 0-based sequential index of a grid position
    pub fn sequential_index(&self, coordinate: [usize; 2]) -> usize {
        coordinate[0] * self.rows() + coordinate[1]
    }

    /// Kind of the site that owns a 0-based sequential index
    pub fn site_kind(&self, index: usize) -> SiteKind {
        SiteKind::from_position(index / self.orbitals)
    }

    /// Expand 1-based site numbers into 1-based orbital indices
    pub fn orbital_indices(&self, sites: &[usize]) -> BTreeSet<usize> {
        orbital_indices(sites, self.orbitals)
    }

    /// All grid positions in sequential order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        (0..self.nx).flat_map(move |column| (0..self.rows()).map(move |row| [column, row]))
    }

    /// Plain nearest-neighbor bonds of every orbital
    ///
    /// `removed` holds 1-based orbital indices, e.g. from [`SiteGrid::orbital_indices`].
    pub fn hopping_bonds(&self, removed: &BTreeSet<usize>) -> Vec<Bond> {
        let mut bonds = Vec::with_capacity(3 * self.len());
        for position in self.positions() {
            let index = self.sequential_index(position);
            let kind = self.site_kind(index);
            for (delta, direction) in kind.neighbor_offsets().into_iter().zip(kind.bond_directions()) {
                let neighbor = self.sequential_index(self.periodic(position, delta));
                bonds.push(make_bond(direction, index + 1, neighbor + 1, Complex64::new(1.0, 0.0), removed));
            }
        }
        bonds
    }

    /// Bonds of the grid with the given 1-based sites removed
    ///
    /// Sites are numbered column by column (`column·ny + row + 1`); every
    /// orbital of a removed site is flagged.
    pub fn bond_table(&self, removed_sites: &[usize], rashba: bool) -> Vec<Bond> {
        let removed = self.orbital_indices(removed_sites);
        if rashba {
            self.rashba_bonds(&removed)
        } else {
            self.hopping_bonds(&removed)
        }
    }

    /// Spin-flipping Rashba bonds of every orbital
    ///
    /// Even 0-based indices are spin up and couple to the spin-down partner of
    /// the neighbor (`neighbor + 2` in 1-based numbering); odd indices couple to
    /// the spin-up partner (`neighbor`).
    pub fn rashba_bonds(&self, removed: &BTreeSet<usize>) -> Vec<Bond> {
        let mut bonds = Vec::with_capacity(3 * self.len());
        for position in self.positions() {
            let index = self.sequential_index(position);
            let kind = self.site_kind(index);
            let spin_up = index % 2 == 0;

            let bond_table = kind
                .neighbor_offsets()
                .into_iter()
                .zip(kind.bond_directions())
                .zip(kind.rashba_coefficients(spin_up));

            for ((delta, direction), coupling) in bond_table {
                let neighbor = self.sequential_index(self.periodic(position, delta));
                let to = if spin_up { neighbor + 2 } else { neighbor };
                bonds.push(make_bond(direction, index + 1, to, coupling, removed));
            }
        }
        bonds
    }
}

/// Expand 1-based site numbers into 1-based orbital indices
///
/// Site `s` owns orbitals `orbitals·(s−1)+1 ..= orbitals·s`.
pub fn orbital_indices(sites: &[usize], orbitals: usize) -> BTreeSet<usize> {
    sites
        .iter()
        .filter(|&&site| site > 0)
        .flat_map(|&site| (0..orbitals).map(move |orbital| orbitals * (site - 1) + 1 + orbital))
        .collect()
}

fn make_bond(
    direction: i8,
    from: usize,
    to: usize,
    coupling: Complex64,
    removed: &BTreeSet<usize>,
) -> Bond {
    Bond {
        direction,
        from,
        to,
        removed: removed.contains(&from) || removed.contains(&to),
        coupling,
    }
}
