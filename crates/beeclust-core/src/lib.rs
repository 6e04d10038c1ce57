//! Core types for the BeeClust simulation.
//!
//! This is the leaf crate with zero internal BeeClust dependencies. It
//! defines the cell encoding, the grid storage type, the error taxonomy,
//! and the injectable RNG abstraction used throughout the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod rng;

pub use cell::{Cell, Direction};
pub use error::{ConfigError, SimError};
pub use grid::Grid;
pub use rng::{DefaultRng, RngSource};
