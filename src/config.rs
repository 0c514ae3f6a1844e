// Constants

// Tolerances
pub const ROUNDING_DECIMALS: i32 = 9; // Canonical precision of generated and compared coordinates
pub const LATTICE_ABS_TOLERANCE: f64 = 1e-8; // Absolute part of set comparisons
pub const LATTICE_REL_TOLERANCE: f64 = 1e-8; // Relative part of set comparisons
pub const BOUNDARY_EPSILON: f64 = 1e-15; // Outward padding added to derived boundaries

// Domains
pub const UNBOUNDED_EXTENT: f64 = 1e16; // Half-width of the "no boundary" box

// Axis search
pub const AXIS_SEARCH_SAMPLES: usize = 800; // Sweep resolution across the boundary
