use std::collections::BTreeSet;

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use nalgebra::Vector2;
use serde::Serialize;

use honeycomb_symmetry::Result;
use honeycomb_symmetry::geometries::{Boundary, boundary_from_lattice};
use honeycomb_symmetry::lattice::{Bond, Lattice, SQRT_3, SiteGrid, honeycomb_lattice_with_vacancies};
use honeycomb_symmetry::symmetries::{
    horizontal_reflection_axis, is_symmetric, vertical_reflection_axis,
};

#[derive(Parser)]
#[command(name = "honeycomb-symmetry")]
#[command(about = "Honeycomb lattice generation and mirror symmetry analysis")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Args)]
struct TileArgs {
    /// Unit cells along x
    #[arg(long)]
    nx: usize,

    /// Unit cells along y
    #[arg(long)]
    ny: usize,

    /// Vacancies as 0-based site numbers in generation order: row by row, four per cell
    #[arg(long, num_args = 0..)]
    remove_sites: Vec<usize>,
}

impl TileArgs {
    fn build(&self) -> Lattice {
        let removed: BTreeSet<usize> = self.remove_sites.iter().copied().collect();
        honeycomb_lattice_with_vacancies(self.nx, self.ny, &removed)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical coordinates of a honeycomb tile
    Generate {
        #[command(flatten)]
        tile: TileArgs,
    },
    /// Search vertical and horizontal mirror axes under periodic boundaries
    Axes {
        #[command(flatten)]
        tile: TileArgs,

        /// Boundary padding along x
        #[arg(long, default_value_t = 0.25)]
        offset_x: f64,

        /// Boundary padding along y (default: √3/4)
        #[arg(long)]
        offset_y: Option<f64>,
    },
    /// Check a single tilted reflection
    Reflect {
        #[command(flatten)]
        tile: TileArgs,

        /// Axis direction
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        vx: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        vy: f64,

        /// Point the axis passes through
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rx: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        ry: f64,

        /// Periodic box as xmin xmax ymin ymax (default: unbounded)
        #[arg(long, num_args = 4, allow_negative_numbers = true)]
        boundary: Option<Vec<f64>>,
    },
    /// List nearest-neighbor bonds of the periodic site grid
    Bonds {
        /// Grid columns
        #[arg(long)]
        dx: usize,

        /// Grid rows (sites per column)
        #[arg(long)]
        dy: usize,

        /// Vacancies as 1-based grid site numbers, column by column
        #[arg(long, num_args = 0..)]
        remove_sites: Vec<usize>,

        /// Orbitals per site (2 for spinful models)
        #[arg(long, default_value_t = 1)]
        orbitals: usize,

        /// Emit spin-flipping Rashba bonds instead of plain hopping
        #[arg(long)]
        rashba: bool,
    },
}

#[derive(Serialize)]
struct AxesReport {
    boundary: Boundary,
    vertical: Vec<Vector2<f64>>,
    horizontal: Vec<Vector2<f64>>,
}

#[derive(Serialize)]
struct ReflectReport {
    direction: Vector2<f64>,
    r_star: Vector2<f64>,
    boundary: Boundary,
    symmetric: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(|e| format!("Failed to set thread pool size: {}", e))?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    info!("Starting honeycomb-symmetry v{}", honeycomb_symmetry::VERSION);

    match cli.command {
        Commands::Generate { tile } => {
            info!("Generating {}x{} honeycomb tile", tile.nx, tile.ny);
            generate(&tile, cli.json)
        }
        Commands::Axes {
            tile,
            offset_x,
            offset_y,
        } => {
            info!("Searching mirror axes of {}x{} honeycomb tile", tile.nx, tile.ny);
            axes(&tile, offset_x, offset_y.unwrap_or(0.25 * SQRT_3), cli.json)
        }
        Commands::Reflect {
            tile,
            vx,
            vy,
            rx,
            ry,
            boundary,
        } => {
            let boundary = match boundary.as_deref() {
                Some(&[xmin, xmax, ymin, ymax]) => Boundary::try_new(xmin, xmax, ymin, ymax)?,
                Some(other) => {
                    return Err(format!("Expected 4 boundary values, got {}", other.len()).into());
                }
                None => Boundary::unbounded(),
            };
            reflect(&tile, Vector2::new(vx, vy), Vector2::new(rx, ry), boundary, cli.json)
        }
        Commands::Bonds {
            dx,
            dy,
            remove_sites,
            orbitals,
            rashba,
        } => {
            if dx == 0 || dy == 0 || orbitals == 0 {
                return Err("Grid dimensions and orbital count must be positive".into());
            }
            info!("Listing bonds of {}x{} grid with {} orbitals", dx, dy, orbitals);
            bonds(SiteGrid::new(dx, dy, orbitals), &remove_sites, rashba, cli.json)
        }
    }
}

fn generate(tile: &TileArgs, json: bool) -> Result<()> {
    let lattice = tile.build();
    if json {
        println!("{}", serde_json::to_string_pretty(&lattice)?);
    } else {
        for site in lattice.iter() {
            println!("{:.9} {:.9}", site.x, site.y);
        }
    }
    Ok(())
}

fn axes(tile: &TileArgs, offset_x: f64, offset_y: f64, json: bool) -> Result<()> {
    let lattice = tile.build();
    let boundary = boundary_from_lattice(&lattice, offset_x, offset_y);
    info!("Boundary: {}", boundary);

    let report = AxesReport {
        boundary,
        vertical: vertical_reflection_axis(&lattice, &boundary),
        horizontal: horizontal_reflection_axis(&lattice, &boundary),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if report.vertical.is_empty() && report.horizontal.is_empty() {
            warn!("No mirror axis found");
        }
        for axis in &report.vertical {
            println!("vertical   x = {:.9}", axis.x);
        }
        for axis in &report.horizontal {
            println!("horizontal y = {:.9}", axis.y);
        }
    }
    Ok(())
}

fn reflect(
    tile: &TileArgs,
    direction: Vector2<f64>,
    r_star: Vector2<f64>,
    boundary: Boundary,
    json: bool,
) -> Result<()> {
    if direction.norm() == 0.0 {
        return Err("Axis direction must be a non-zero vector".into());
    }

    let lattice = tile.build();
    let report = ReflectReport {
        direction,
        r_star,
        boundary,
        symmetric: is_symmetric(&lattice, direction, r_star, &boundary),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.symmetric);
    }
    Ok(())
}

fn bonds(grid: SiteGrid, removed_sites: &[usize], rashba: bool, json: bool) -> Result<()> {
    if let Some(site) = removed_sites.iter().find(|&&site| site == 0 || site > grid.nx * grid.ny) {
        return Err(format!("Site {} is outside the 1-based range 1..={}", site, grid.nx * grid.ny).into());
    }

    let bonds: Vec<Bond> = grid.bond_table(removed_sites, rashba);

    if json {
        println!("{}", serde_json::to_string_pretty(&bonds)?);
    } else {
        for bond in bonds.iter().filter(|bond| !bond.removed) {
            println!(
                "{:>3} {:>6} {:>6} {:+.9} {:+.9}",
                bond.direction, bond.from, bond.to, bond.coupling.re, bond.coupling.im
            );
        }
    }
    Ok(())
}
