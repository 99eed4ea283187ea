//! Greedy day scheduler and slot scoring.
//!
//! # Algorithm
//!
//! [`ScheduleEngine`] is a greedy, priority-driven placement heuristic:
//! fixed and high-priority activities claim slots first, preferred
//! times are honored when free, and remaining activities land in the
//! best-scoring 15-minute slot of the working window. It is not
//! optimal and never backtracks, but runs in one pass and is fully
//! deterministic.
//!
//! # Scoring
//!
//! [`slot_score`] rates candidate starts: mornings for high-energy
//! activities, afternoons for medium, a penalty late at night, and a
//! bonus for clustering next to same-type entries.

mod engine;
mod score;

pub use engine::{ScheduleEngine, ScheduleRequest};
pub use score::slot_score;
