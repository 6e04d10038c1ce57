//! The per-cell temperature field, combining heater/cooler distance
//! transforms.

use crate::distance::DistanceField;
use beeclust_core::cell::Terrain;
use beeclust_core::Grid;

/// A grid of per-cell temperatures, with a `NaN` sentinel for walls.
#[derive(Clone, Debug)]
pub struct HeatField {
    rows: usize,
    cols: usize,
    temps: Vec<f64>,
}

impl HeatField {
    /// Recompute the heat field from scratch.
    ///
    /// `t_heater`/`t_cooler`/`t_env` are the configured source and
    /// environment temperatures; `k_temp` scales the combined gradient.
    pub fn compute(
        grid: &Grid,
        t_heater: f64,
        t_cooler: f64,
        t_env: f64,
        k_temp: f64,
    ) -> HeatField {
        let (rows, cols) = grid.shape();
        let dh = DistanceField::compute(grid, Terrain::Heater);
        let dc = DistanceField::compute(grid, Terrain::Cooler);

        let heater_gap = (t_heater - t_env).abs();
        let cooler_gap = (t_cooler - t_env).abs();

        let mut temps = vec![t_env; rows * cols];
        for (r, c) in grid.coords() {
            let idx = r * cols + c;
            if grid.is_wall(r, c) {
                temps[idx] = f64::NAN;
                continue;
            }
            let hd = dh.get(r, c);
            let cd = dc.get(r, c);
            // Heater-at-zero and cooler-at-zero take precedence over the
            // formula; heater wins a simultaneous tie.
            if hd == 0 {
                temps[idx] = t_heater;
            } else if cd == 0 {
                temps[idx] = t_cooler;
            } else {
                let heating = if hd > 0 { heater_gap / hd as f64 } else { 0.0 };
                let cooling = if cd > 0 { cooler_gap / cd as f64 } else { 0.0 };
                let delta = heating.max(0.0) - cooling.max(0.0);
                temps[idx] = t_env + k_temp * delta;
            }
        }

        HeatField { rows, cols, temps }
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The temperature at `(r, c)`. `NaN` for wall cells.
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.temps[r * self.cols + c]
    }
}
