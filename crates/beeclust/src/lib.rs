//! BeeClust: a discrete-time, grid-based swarming-bee simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the `beeclust-core` and `beeclust-sim` sub-crates. For most users,
//! adding `beeclust` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use beeclust::prelude::*;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![0, 0, 0, 0, 6],
//!     vec![1, 0, 0, 0, 0],
//! ]).unwrap();
//! let mut sim = Simulation::new(grid, Params::default()).unwrap();
//! let mut rng = DefaultRng::seeded(42);
//! let moved = sim.tick(&mut rng);
//! assert!(moved <= 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `beeclust-core` | Cell encoding, grid storage, error types, RNG abstraction |
//! | [`sim`] | `beeclust-sim` | Distance/heat fields, the tick kernel, swarms, the `Simulation` facade |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell encoding, grid storage, error types, and RNG abstraction
/// (`beeclust-core`).
pub use beeclust_core as types;

/// Distance/heat field computation, the tick kernel, swarm decomposition,
/// and the [`Simulation`](sim::Simulation) facade (`beeclust-sim`).
pub use beeclust_sim as sim;

/// Common imports for typical BeeClust usage.
///
/// ```rust
/// use beeclust::prelude::*;
/// ```
pub mod prelude {
    pub use beeclust_core::{Cell, ConfigError, DefaultRng, Direction, Grid, RngSource, SimError};
    pub use beeclust_sim::{DistanceField, HeatField, Params, Simulation};
}
