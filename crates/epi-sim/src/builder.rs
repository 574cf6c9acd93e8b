//! Fluent builder for constructing a [`Sim`].

use epi_agent::Population;
use epi_core::{SimConfig, SimRng, Tick};
use epi_disease::{HospitalPolicy, ModelVariant};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step count, transition cadence, seed
/// - [`Population`] — from [`epi_agent::PopulationBuilder`]
/// - [`SimRng`] — the run's randomness stream, conventionally
///   `SimRng::new(config.seed)` and already used to build the population,
///   so factory draws and run draws share one deterministic stream
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default               |
/// |-----------------|-----------------------|
/// | `.variant(v)`   | `ModelVariant::Sir`   |
/// | `.hospital(p)`  | No capacity feedback  |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::new(2000, 42);
/// let mut rng = SimRng::new(config.seed);
/// let population = PopulationBuilder::new(800.0, 600.0, 15.0, rates)
///     .susceptible(95)
///     .infectious(5)
///     .build(&mut rng)?;
/// let mut sim = SimBuilder::new(config, population, rng)
///     .variant(ModelVariant::Sirqd)
///     .hospital(HospitalPolicy::new(20, 2.0)?)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    population: Population,
    rng:        SimRng,
    variant:    ModelVariant,
    hospital:   Option<HospitalPolicy>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, population: Population, rng: SimRng) -> Self {
        Self {
            config,
            population,
            rng,
            variant:  ModelVariant::default(),
            hospital: None,
        }
    }

    /// Select which transitions are active.
    pub fn variant(mut self, variant: ModelVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Enable capacity-modulated mortality.
    pub fn hospital(mut self, policy: HospitalPolicy) -> Self {
        self.hospital = Some(policy);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.population.is_empty() {
            return Err(SimError::EmptyPopulation);
        }
        if self.config.transition_period == 0 {
            return Err(SimError::Config(
                "transition_period must be at least 1".into(),
            ));
        }
        if let Some(policy) = &self.hospital {
            policy.validate()?;
        }

        Ok(Sim {
            config:       self.config,
            population:   self.population,
            variant:      self.variant,
            hospital:     self.hospital,
            rng:          self.rng,
            current_tick: Tick::ZERO,
            last_counts:  Default::default(),
        })
    }
}
