//! Construction parameters and their validation.

use beeclust_core::error::ConfigError;

/// Immutable simulation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Probability of a directed bee changing direction before moving.
    pub p_changedir: f64,
    /// Probability a bee waits after hitting a wall/heater/cooler/edge.
    pub p_wall: f64,
    /// Probability a bee waits after meeting another bee.
    pub p_meet: f64,
    /// Thermal coefficient scaling the heat gradient.
    pub k_temp: f64,
    /// Coefficient governing how long bees stay stopped.
    pub k_stay: f64,
    /// The bees' ideal temperature.
    pub t_ideal: f64,
    /// Heater source temperature.
    pub t_heater: f64,
    /// Cooler source temperature.
    pub t_cooler: f64,
    /// Ambient environment temperature.
    pub t_env: f64,
    /// Minimum number of ticks a bee waits once stopped.
    pub min_wait: u32,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            p_changedir: 0.2,
            p_wall: 0.8,
            p_meet: 0.8,
            k_temp: 0.9,
            k_stay: 50.0,
            t_ideal: 35.0,
            t_heater: 40.0,
            t_cooler: 5.0,
            t_env: 22.0,
            min_wait: 2,
        }
    }
}

impl Params {
    /// Validate every probability, sign, and ordering constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability(self.p_changedir, "p_changedir")?;
        check_probability(self.p_wall, "p_wall")?;
        check_probability(self.p_meet, "p_meet")?;
        check_non_negative(self.k_temp, "k_temp")?;
        check_non_negative(self.k_stay, "k_stay")?;

        if !(self.t_cooler <= self.t_env && self.t_env <= self.t_heater) {
            return Err(ConfigError::TemperatureOrdering {
                t_cooler: self.t_cooler,
                t_env: self.t_env,
                t_heater: self.t_heater,
            });
        }

        Ok(())
    }
}

fn check_non_negative(value: f64, parameter: &'static str) -> Result<(), ConfigError> {
    if value < 0.0 {
        return Err(ConfigError::Negative { parameter });
    }
    Ok(())
}

fn check_probability(value: f64, parameter: &'static str) -> Result<(), ConfigError> {
    check_non_negative(value, parameter)?;
    if value > 1.0 {
        return Err(ConfigError::ProbabilityAboveOne { parameter });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Params::default().validate().is_ok());
    }

    #[test]
    fn probability_above_one_rejected() {
        let p = Params {
            p_wall: 1.5,
            ..Params::default()
        };
        assert_eq!(
            p.validate(),
            Err(ConfigError::ProbabilityAboveOne { parameter: "p_wall" })
        );
    }

    #[test]
    fn negative_k_stay_rejected() {
        let p = Params {
            k_stay: -1.0,
            ..Params::default()
        };
        assert_eq!(p.validate(), Err(ConfigError::Negative { parameter: "k_stay" }));
    }

    #[test]
    fn temperature_ordering_enforced() {
        let p = Params {
            t_cooler: 30.0,
            t_env: 22.0,
            t_heater: 40.0,
            ..Params::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::TemperatureOrdering { .. })
        ));
    }

    #[test]
    fn negative_temperatures_allowed() {
        let p = Params {
            t_cooler: -40.0,
            t_env: -10.0,
            t_heater: 0.0,
            ..Params::default()
        };
        assert!(p.validate().is_ok());
    }
}
