//! Car sequencing with paint batches and option windows.
//!
//! A production plan of car classes must be reordered so that paint color
//! changes and option capacity violations are minimized. Each class has a
//! color and a set of required options; each option allows at most a given
//! number of cars in any window of consecutive positions. A prefix of the
//! plan is already fixed and cannot be reordered.
//!
//! This crate provides:
//!
//! - **Instance**: the immutable problem data, built and validated from an
//!   [`InstanceData`] parameter set.
//! - **Evaluation**: a deterministic fitness signal for candidate
//!   permutations, combining color changes and high/low priority window
//!   violations in a configurable lexicographic order.
//! - **Random candidates**: permutations that keep the fixed prefix, for
//!   seeding or restarting a search.
//!
//! # Architecture
//!
//! The crate contains no search algorithm. Any metaheuristic (local search,
//! simulated annealing, genetic search, ...) drives it through
//! [`evaluate`] and [`random_candidate`]. Evaluation never mutates the
//! instance, so many threads can score candidates against the same
//! instance without locks.
//!
//! # Examples
//!
//! ```
//! use u_carseq::{evaluate, InstanceData};
//!
//! let instance = InstanceData::new()
//!     .with_position_count(3)
//!     .with_paint_batch_limit(3)
//!     .with_objective_order(4)
//!     .with_start_position(0)
//!     .with_option(1, 2, true)
//!     .with_class(1, vec![true])
//!     .with_class_counts(vec![3])
//!     .build()
//!     .unwrap();
//!
//! // two overlapping windows each hold one car too many
//! assert_eq!(evaluate(&instance, &[0, 1, 2]), 2.0 * 10_000.0);
//! assert_eq!(evaluate(&instance, &[0, 1, 1]), u_carseq::eval::DEFAULT_INVALID_PENALTY);
//! ```

pub mod error;
pub mod eval;
pub mod instance;

pub use error::{CandidateError, ConfigurationError};
pub use eval::{evaluate, random_candidate};
pub use instance::{Instance, InstanceData};
