//! Solution evaluation.
//!
//! Validates candidate permutations, rebuilds the car sequence they
//! describe, and scores it with three components:
//!
//! - **color**: paint color changes between adjacent cars, starting at the
//!   last fixed position.
//! - **high**: option window capacity excess over high-priority options.
//! - **low**: the same over low-priority options.
//!
//! The components are combined into one `f64` according to the instance's
//! [`ObjectiveOrder`](crate::instance::ObjectiveOrder). Invalid candidates
//! receive a fixed penalty rather than an error, so a search procedure can
//! treat them as very bad solutions.

mod config;
mod evaluator;
mod objectives;
mod random;

pub use config::{ScoreConfig, DEFAULT_INVALID_PENALTY, DEFAULT_SCALE};
pub use evaluator::{evaluate, Evaluator};
pub use objectives::Objectives;
pub use random::random_candidate;
