//! Heat field, tick kernel, swarms, and the [`Simulation`] facade.
//!
//! This is the sub-crate with the bulk of the simulation logic: the
//! per-cell tick state machine, the 8-connected BFS distance transforms
//! that feed the heat field, and the 4-connected swarm decomposition.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance;
pub mod heat;
pub mod params;
pub mod simulation;
pub mod swarms;
pub mod tick;

pub use distance::DistanceField;
pub use heat::HeatField;
pub use params::Params;
pub use simulation::Simulation;
pub use swarms::swarms;
pub use tick::tick;
