//! Lattice module: honeycomb tiles with vacancies, lattice-wide transforms and site indexing.
//!
//! Quick reference
//! - Types: [`Lattice`], [`SiteKind`], [`SiteGrid`], [`Bond`]
//! - Generation: [`honeycomb_lattice`], [`honeycomb_lattice_with_vacancies`]
//! - Transforms: [`transform_lattice`], [`apply_transform`], [`reflect_lattice_by_vertical_axis`],
//!   [`reflect_lattice_by_horizontal_axis`], [`reflect_lattice_by_axis`], [`translate_lattice`], [`glide_lattice`]
//! - Canonical form: [`round_point`], [`compare_points`], [`approx_equal`]
//!
//! See submodules for full details: [`lattice2d`], [`honeycomb`], [`lattice_transform`], [`sites`].

// ======================== MODULE DECLARATIONS ========================
pub mod honeycomb;
pub mod lattice2d;
pub mod lattice_transform;
pub mod sites;

mod _tests_sites;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
#[doc(inline)]
pub use lattice2d::Lattice;

pub use lattice2d::{approx_equal, compare_points, round_point, round_to_decimals};

pub use honeycomb::{
    GRAPHENE_DELTA, SITES_PER_CELL, SQRT_3, UNIT_CELL_SEQUENCE, honeycomb_lattice,
    honeycomb_lattice_with_vacancies,
};

pub use lattice_transform::{
    apply_transform, glide_lattice, reflect_lattice_by_axis, reflect_lattice_by_horizontal_axis,
    reflect_lattice_by_vertical_axis, transform_lattice, translate_lattice,
};

pub use sites::{Bond, SiteGrid, SiteKind, orbital_indices};

/// A convenience prelude for importing common lattice items.
pub mod prelude {
    #[doc(no_inline)]
    pub use super::{Lattice, honeycomb_lattice, honeycomb_lattice_with_vacancies};
}
