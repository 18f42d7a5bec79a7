//! Error types.
//!
//! Two tiers: [`ConfigurationError`] is fatal and raised while building an
//! [`Instance`](crate::instance::Instance); [`CandidateError`] describes why a
//! candidate permutation was rejected and is turned into a penalty score by
//! the evaluator.

use thiserror::Error;

/// Error raised while constructing an instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A required field was not provided.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// An array does not have the length implied by a count field.
    #[error("`{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A class requirement vector does not cover every option.
    #[error("class {class} lists {actual} option requirements, expected {expected}")]
    RequirementLength {
        class: usize,
        expected: usize,
        actual: usize,
    },

    /// The baseline sequence refers to a class that does not exist.
    #[error("baseline position {position} refers to class {class}, but only {class_count} classes exist")]
    UnknownClass {
        position: usize,
        class: usize,
        class_count: usize,
    },

    /// Cars per class do not add up to the number of positions.
    #[error("class counts sum to {sum}, expected {position_count}")]
    CountMismatch { sum: usize, position_count: usize },

    /// Baseline sequence and class counts were both given and disagree.
    #[error("baseline_sequence does not match the sequence derived from class_counts")]
    ConflictingBaseline,

    /// The fixed prefix extends past the end of the sequence.
    #[error("start_position {start_position} exceeds position_count {position_count}")]
    StartPosition {
        start_position: usize,
        position_count: usize,
    },

    /// Any other invalid value.
    #[error("invalid value: {0}")]
    Invalid(String),
}

/// Reason a candidate permutation was rejected by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CandidateError {
    #[error("candidate has length {actual}, expected {expected}")]
    Length { expected: usize, actual: usize },

    #[error("candidate value {value} at index {index} is outside 0..{bound}")]
    OutOfRange {
        index: usize,
        value: usize,
        bound: usize,
    },

    #[error("candidate value {value} appears more than once")]
    Duplicate { value: usize },

    /// A position inside the fixed prefix was moved.
    #[error("fixed position {position} holds {value}")]
    FixedPrefix { position: usize, value: usize },
}
