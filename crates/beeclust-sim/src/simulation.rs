//! The `Simulation` facade: owns the grid and cached heat field, validates
//! parameters at construction, and exposes the per-tick operations.

use crate::heat::HeatField;
use crate::params::Params;
use crate::swarms::swarms;
use crate::tick::tick;
use beeclust_core::error::{ConfigError, SimError};
use beeclust_core::rng::RngSource;
use beeclust_core::Grid;

/// A BeeClust simulation: a grid, its validated parameters, and a cached
/// [`HeatField`] recomputed whenever the source layout can have changed.
pub struct Simulation {
    grid: Grid,
    params: Params,
    heat: HeatField,
}

impl Simulation {
    /// Validate `params` and build a simulation over `grid`.
    ///
    /// Grid dimensionality is enforced by [`Grid::from_rows`] before this
    /// is ever reached; what's validated here is `params`.
    pub fn new(grid: Grid, params: Params) -> Result<Simulation, ConfigError> {
        params.validate()?;
        let heat = Self::compute_heat(&grid, &params);
        Ok(Simulation { grid, params, heat })
    }

    fn compute_heat(grid: &Grid, params: &Params) -> HeatField {
        HeatField::compute(
            grid,
            params.t_heater,
            params.t_cooler,
            params.t_env,
            params.k_temp,
        )
    }

    /// The grid's current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The simulation's validated parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The cached heat field as of the last [`Simulation::recalculate_heat`].
    pub fn heat(&self) -> &HeatField {
        &self.heat
    }

    /// Run one tick, returning the number of bees that moved.
    pub fn tick(&mut self, rng: &mut dyn RngSource) -> u32 {
        tick(&mut self.grid, &self.heat, &self.params, rng)
    }

    /// Recompute the heat field from the grid's current source layout.
    ///
    /// The heat field is cached rather than recomputed every tick because
    /// sources (walls, heaters, coolers) never move; callers only need
    /// this after directly editing the grid's terrain.
    pub fn recalculate_heat(&mut self) {
        self.heat = Self::compute_heat(&self.grid, &self.params);
    }

    /// All bee coordinates, row-major.
    pub fn bees(&self) -> Vec<(usize, usize)> {
        self.grid.bees()
    }

    /// The grid's bee cells partitioned into maximal 4-connected swarms.
    pub fn swarms(&self) -> Vec<Vec<(usize, usize)>> {
        swarms(&self.grid)
    }

    /// The arithmetic mean temperature over every bee's cell.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NoBees`] if no bee is present.
    pub fn score(&self) -> Result<f64, SimError> {
        let bees = self.bees();
        if bees.is_empty() {
            return Err(SimError::NoBees);
        }
        let sum: f64 = bees.iter().map(|&(r, c)| self.heat.get(r, c)).sum();
        Ok(sum / bees.len() as f64)
    }

    /// Set every bee cell to [`beeclust_core::Cell::FORGOTTEN`], preserving
    /// population and position but erasing direction and wait-countdown.
    pub fn forget(&mut self) {
        self.grid.forget();
    }
}
