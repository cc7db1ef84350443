//! Simulation configuration and startup validation.
//!
//! [`SimConfig`] bundles the full knob surface. [`validate()`](SimConfig::validate)
//! fails fast on configurations whose runtime behavior would otherwise
//! be undefined (zero arrival rate, degenerate decay curves, base
//! values outside the unit interval).

use std::error::Error;
use std::fmt;

use steward_core::{ClientConfig, DependencyConfig, ServerConfig};

// ── ConfigError ──────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `rate` is zero; arrivals would be undefined.
    ZeroArrivalRate,
    /// `key_space` is zero; there would be no keys to sample.
    ZeroKeySpace,
    /// A decay parameter is non-finite or non-positive.
    NonPositiveDecay {
        /// Which knob failed.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A base QoS value is outside `[0, 1]`.
    BaseValueOutOfRange {
        /// Which response type's base value failed.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Dependency availability is outside `[0, 1]`.
    AvailabilityOutOfRange {
        /// The offending value.
        value: f64,
    },
    /// A dependency latency parameter is non-finite or negative.
    InvalidLatencyParam {
        /// Which knob failed.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroArrivalRate => write!(f, "client rate must be at least 1 tick per arrival"),
            Self::ZeroKeySpace => write!(f, "key_space must be at least 1"),
            Self::NonPositiveDecay { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::BaseValueOutOfRange { name, value } => {
                write!(f, "base value {name} must be in [0, 1], got {value}")
            }
            Self::AvailabilityOutOfRange { value } => {
                write!(f, "availability must be in [0, 1], got {value}")
            }
            Self::InvalidLatencyParam { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Server capacities and caching knobs.
    pub server: ServerConfig,
    /// Client load shape and QoS valuation.
    pub client: ClientConfig,
    /// Parameters for the default dependency model.
    pub dependency: DependencyConfig,
    /// RNG seed for the default stochastic policies.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            dependency: DependencyConfig::default(),
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let client = &self.client;
        if client.rate == 0 {
            return Err(ConfigError::ZeroArrivalRate);
        }
        if client.key_space == 0 {
            return Err(ConfigError::ZeroKeySpace);
        }
        for (name, value) in [
            ("decay_max", client.decay_max),
            ("decay_k", client.decay_k),
            ("cache_age_max", client.cache_age_max),
            ("cache_age_k", client.cache_age_k),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveDecay { name, value });
            }
        }
        for (name, value) in [
            ("live", client.live),
            ("fallback", client.fallback),
            ("rejected", client.rejected),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::BaseValueOutOfRange { name, value });
            }
        }

        let dep = &self.dependency;
        if !dep.availability.is_finite() || !(0.0..=1.0).contains(&dep.availability) {
            return Err(ConfigError::AvailabilityOutOfRange {
                value: dep.availability,
            });
        }
        for (name, value) in [
            ("mean", dep.mean),
            ("std", dep.std),
            ("timeout", dep.timeout),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidLatencyParam { name, value });
            }
        }

        // Queue and pool capacities of 0 are legal: they model hard
        // load shedding (reject every arrival / never admit).
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_rate_fails() {
        let mut cfg = SimConfig::default();
        cfg.client.rate = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroArrivalRate));
    }

    #[test]
    fn zero_key_space_fails() {
        let mut cfg = SimConfig::default();
        cfg.client.key_space = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroKeySpace));
    }

    #[test]
    fn nan_decay_fails() {
        let mut cfg = SimConfig::default();
        cfg.client.decay_max = f64::NAN;
        match cfg.validate() {
            Err(ConfigError::NonPositiveDecay {
                name: "decay_max", ..
            }) => {}
            other => panic!("expected NonPositiveDecay, got {other:?}"),
        }
    }

    #[test]
    fn zero_decay_k_fails() {
        let mut cfg = SimConfig::default();
        cfg.client.decay_k = 0.0;
        match cfg.validate() {
            Err(ConfigError::NonPositiveDecay { name: "decay_k", .. }) => {}
            other => panic!("expected NonPositiveDecay, got {other:?}"),
        }
    }

    #[test]
    fn base_value_above_one_fails() {
        let mut cfg = SimConfig::default();
        cfg.client.fallback = 1.5;
        match cfg.validate() {
            Err(ConfigError::BaseValueOutOfRange { name: "fallback", .. }) => {}
            other => panic!("expected BaseValueOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn availability_out_of_range_fails() {
        let mut cfg = SimConfig::default();
        cfg.dependency.availability = 1.1;
        match cfg.validate() {
            Err(ConfigError::AvailabilityOutOfRange { .. }) => {}
            other => panic!("expected AvailabilityOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn negative_mean_fails() {
        let mut cfg = SimConfig::default();
        cfg.dependency.mean = -1.0;
        match cfg.validate() {
            Err(ConfigError::InvalidLatencyParam { name: "mean", .. }) => {}
            other => panic!("expected InvalidLatencyParam, got {other:?}"),
        }
    }

    #[test]
    fn zero_capacities_are_legal() {
        let mut cfg = SimConfig::default();
        cfg.server.q1_max = 0;
        cfg.server.q2_max = 0;
        cfg.server.p1_max = 0;
        cfg.server.p2_max = 0;
        assert!(cfg.validate().is_ok());
    }
}
