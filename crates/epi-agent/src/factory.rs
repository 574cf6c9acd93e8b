//! Fluent builder for constructing and seeding a `Population`.
//!
//! # Usage
//!
//! ```rust
//! use epi_agent::{DiseaseRates, PopulationBuilder};
//! use epi_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let pop = PopulationBuilder::new(800.0, 600.0, 15.0, DiseaseRates::sir(0.05, 0.015))
//!     .susceptible(95)
//!     .infectious(5)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(pop.len(), 100);
//! assert_eq!(pop.counts().infectious, 5);
//! ```
//!
//! Placement: every free-roaming agent gets a uniformly random position in
//! `[radius, dim - radius]` per axis and a uniformly random velocity in
//! `[-1, 1]` per axis.  Home-confined agents are instead clustered around
//! their home center with a per-axis offset of up to half the home radius.

use epi_core::{CohortId, EpiError, EpiResult, SimRng, Vec2};

use crate::{Agent, DiseaseRates, HealthState, Home, Population};

// ── Layout inputs ─────────────────────────────────────────────────────────────

/// A batch of agents sharing an age-profile death rate.
#[derive(Copy, Clone, Debug)]
pub struct CohortSpec {
    pub count: usize,
    /// Death rate for this cohort, overriding the builder's base `mu`.
    pub mu: f64,
}

/// Grid of circular homes, each populated with the same number of agents.
///
/// Centers are spread evenly over `columns` columns and `homes / columns`
/// rows (rounded up), inset by `margin + home_radius` from every domain edge
/// so the full home circle stays inside the domain.  Neighboring homes may
/// overlap; overlap is how adjacent households share contact surface.
#[derive(Copy, Clone, Debug)]
pub struct HomeLayout {
    pub homes: usize,
    pub columns: usize,
    pub home_radius: f64,
    /// Gap between the domain edge and the first column/row of homes.
    pub margin: f64,
    pub people_per_home: usize,
}

impl HomeLayout {
    fn validate(&self, width: f64, height: f64, agent_radius: f64) -> EpiResult<()> {
        if self.homes == 0 {
            return Err(EpiError::NonPositiveCount { what: "home count", got: 0 });
        }
        if self.columns == 0 || self.columns > self.homes {
            return Err(EpiError::Config(format!(
                "home layout needs 1..={} columns, got {}",
                self.homes, self.columns
            )));
        }
        if self.people_per_home == 0 {
            return Err(EpiError::NonPositiveCount { what: "people per home", got: 0 });
        }
        if self.margin < 0.0 {
            return Err(EpiError::Config(format!(
                "home margin must be non-negative, got {}",
                self.margin
            )));
        }
        if self.home_radius <= agent_radius {
            return Err(EpiError::Config(format!(
                "home radius {} cannot hold an agent of radius {}",
                self.home_radius, agent_radius
            )));
        }
        let inset = 2.0 * (self.margin + self.home_radius);
        if inset > width || inset > height {
            return Err(EpiError::Config(format!(
                "home of radius {} with margin {} does not fit in {}x{}",
                self.home_radius, self.margin, width, height
            )));
        }
        Ok(())
    }

    /// Centers of all homes in grid order.
    fn centers(&self, width: f64, height: f64) -> Vec<Vec2> {
        let rows = self.homes.div_ceil(self.columns);
        let inset = self.margin + self.home_radius;
        let spacing = |count: usize, dim: f64| {
            if count > 1 { (dim - 2.0 * inset) / (count - 1) as f64 } else { 0.0 }
        };
        let dx = spacing(self.columns, width);
        let dy = spacing(rows, height);

        let mut centers = Vec::with_capacity(self.homes);
        'grid: for col in 0..self.columns {
            for row in 0..rows {
                if centers.len() == self.homes {
                    break 'grid;
                }
                centers.push(Vec2::new(
                    inset + col as f64 * dx,
                    inset + row as f64 * dy,
                ));
            }
        }
        centers
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

/// Fluent factory for a [`Population`].
///
/// Composes any mix of free-roaming agents (explicit Susceptible/Infectious
/// counts), age-profile cohorts, and home-confined agents, then optionally
/// seeds infections into the assembled population.  All configuration is
/// validated in [`build`](Self::build) before the first agent is created.
pub struct PopulationBuilder {
    width:        f64,
    height:       f64,
    agent_radius: f64,
    rates:        DiseaseRates,
    susceptible:  usize,
    infectious:   usize,
    cohorts:      Vec<CohortSpec>,
    homes:        Option<HomeLayout>,
    seed_count:   usize,
}

impl PopulationBuilder {
    /// Create a builder for the given domain, agent size, and base rates.
    pub fn new(width: f64, height: f64, agent_radius: f64, rates: DiseaseRates) -> Self {
        Self {
            width,
            height,
            agent_radius,
            rates,
            susceptible: 0,
            infectious:  0,
            cohorts:     Vec::new(),
            homes:       None,
            seed_count:  0,
        }
    }

    /// Add `n` free-roaming agents starting Susceptible.
    pub fn susceptible(mut self, n: usize) -> Self {
        self.susceptible += n;
        self
    }

    /// Add `n` free-roaming agents starting Infectious.
    pub fn infectious(mut self, n: usize) -> Self {
        self.infectious += n;
        self
    }

    /// Add a Susceptible cohort with its own death rate.
    ///
    /// Cohorts are tagged `CohortId(0)`, `CohortId(1)`, … in call order, so
    /// collaborators can attribute deaths per age band.
    pub fn cohort(mut self, count: usize, mu: f64) -> Self {
        self.cohorts.push(CohortSpec { count, mu });
        self
    }

    /// Add a grid of homes, each holding `people_per_home` confined
    /// Susceptible agents.
    pub fn homes(mut self, layout: HomeLayout) -> Self {
        self.homes = Some(layout);
        self
    }

    /// After assembly, shuffle the population and flip the first `n` agents
    /// to Infectious.
    ///
    /// Sampling is without replacement: `n` distinct agents are flipped
    /// (fewer only if the population is smaller).  A pick landing on an
    /// agent that already starts Infectious is a no-op flip.
    pub fn seed_infections(mut self, n: usize) -> Self {
        self.seed_count = n;
        self
    }

    /// Validate the configuration and construct the population.
    ///
    /// # Errors
    ///
    /// Fails fast on any rate outside `[0, 1]`, an empty population, a
    /// domain too small for the agent radius, or a home grid that does not
    /// fit the domain.
    pub fn build(self, rng: &mut SimRng) -> EpiResult<Population> {
        self.rates.validate()?;
        for c in &self.cohorts {
            self.rates.with_mu(c.mu).validate()?;
        }
        if self.agent_radius <= 0.0 {
            return Err(EpiError::Config(format!(
                "agent radius must be positive, got {}",
                self.agent_radius
            )));
        }
        if self.width < 2.0 * self.agent_radius || self.height < 2.0 * self.agent_radius {
            return Err(EpiError::DomainTooSmall {
                width:  self.width,
                height: self.height,
                radius: self.agent_radius,
            });
        }

        let home_count = self
            .homes
            .map(|l| l.homes * l.people_per_home)
            .unwrap_or(0);
        let cohort_count: usize = self.cohorts.iter().map(|c| c.count).sum();
        let total = self.susceptible + self.infectious + cohort_count + home_count;
        if total == 0 {
            return Err(EpiError::NonPositiveCount { what: "population size", got: 0 });
        }

        let mut agents = Vec::with_capacity(total);

        // Home-confined agents first, mirroring the reference assembly order
        // (homes, then free-roamers).  Order stops mattering once seeding
        // shuffles the population.
        if let Some(layout) = self.homes {
            layout.validate(self.width, self.height, self.agent_radius)?;
            for center in layout.centers(self.width, self.height) {
                let home = Home { center, radius: layout.home_radius };
                for _ in 0..layout.people_per_home {
                    let offset = Vec2::new(
                        (rng.random::<f64>() - 0.5) * layout.home_radius,
                        (rng.random::<f64>() - 0.5) * layout.home_radius,
                    );
                    agents.push(
                        Agent::new(
                            center + offset,
                            random_velocity(rng),
                            self.agent_radius,
                            self.rates,
                            HealthState::Susceptible,
                        )
                        .with_home(home),
                    );
                }
            }
        }

        for _ in 0..self.susceptible {
            agents.push(self.free_agent(rng, self.rates, HealthState::Susceptible));
        }
        for _ in 0..self.infectious {
            agents.push(self.free_agent(rng, self.rates, HealthState::Infectious));
        }
        for (tag, c) in self.cohorts.iter().enumerate() {
            let rates = self.rates.with_mu(c.mu);
            for _ in 0..c.count {
                agents.push(
                    self.free_agent(rng, rates, HealthState::Susceptible)
                        .with_cohort(CohortId(tag as u16)),
                );
            }
        }

        if self.seed_count > 0 {
            rng.shuffle(&mut agents);
            let n = self.seed_count.min(agents.len());
            for agent in &mut agents[..n] {
                agent.state = HealthState::Infectious;
            }
        }

        log::debug!(
            "built population: {} agents in {}x{} ({} initial infectious)",
            agents.len(),
            self.width,
            self.height,
            agents.iter().filter(|a| a.state == HealthState::Infectious).count()
        );

        Ok(Population::new(agents, self.width, self.height))
    }

    fn free_agent(&self, rng: &mut SimRng, rates: DiseaseRates, state: HealthState) -> Agent {
        let position = Vec2::new(
            self.agent_radius + rng.random::<f64>() * (self.width - 2.0 * self.agent_radius),
            self.agent_radius + rng.random::<f64>() * (self.height - 2.0 * self.agent_radius),
        );
        Agent::new(position, random_velocity(rng), self.agent_radius, rates, state)
    }
}

/// Velocity uniform in `[-1, 1]` per axis.
fn random_velocity(rng: &mut SimRng) -> Vec2 {
    Vec2::new(
        (rng.random::<f64>() - 0.5) * 2.0,
        (rng.random::<f64>() - 0.5) * 2.0,
    )
}
