//! `epi-output` — the persistence collaborator for the `rust_epi` framework.
//!
//! Consumes only the read-only observer seam of `epi-sim`: per-step aggregate
//! counts and periodic population snapshots.  The core never depends on this
//! crate.
//!
//! # Files created
//!
//! | File                  | Row contents                                             |
//! |-----------------------|----------------------------------------------------------|
//! | `state_counts.csv`    | `run, step, susceptible, infectious, recovered, dead, quarantined` |
//! | `agent_snapshots.csv` | `run, step, agent_id, x, y, state`                       |
//!
//! Counts rows accumulate across repeated runs of an ensemble (tag each run
//! via [`SimOutputObserver::set_run`]), giving the long-format table the
//! plotting scripts expect.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, StateCountsRow};
pub use writer::OutputWriter;
