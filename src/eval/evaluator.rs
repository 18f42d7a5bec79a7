//! Candidate validation and scoring.

use super::config::ScoreConfig;
use super::objectives::Objectives;
use crate::error::CandidateError;
use crate::instance::Instance;
use tracing::trace;

/// Scores candidate permutations against an instance.
///
/// A candidate is a permutation of `0..position_count` indexing into the
/// baseline plan: position `p` receives the car at baseline index
/// `candidate[p]`. The evaluator borrows the instance and holds no mutable
/// state, so one evaluator can be shared across threads.
///
/// # Examples
///
/// ```
/// use u_carseq::eval::Evaluator;
/// use u_carseq::instance::InstanceData;
///
/// let instance = InstanceData::new()
///     .with_position_count(5)
///     .with_paint_batch_limit(5)
///     .with_objective_order(-1)
///     .with_start_position(0)
///     .with_class(1, vec![])
///     .with_class(2, vec![])
///     .with_baseline_sequence(vec![0, 1, 0, 1, 0])
///     .build()
///     .unwrap();
///
/// let evaluator = Evaluator::new(&instance);
/// assert_eq!(evaluator.evaluate(&[0, 1, 2, 3, 4]), 4.0);
/// // grouping the colors leaves a single change
/// assert_eq!(evaluator.evaluate(&[0, 2, 4, 1, 3]), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    instance: &'a Instance,
    config: ScoreConfig,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with the default [`ScoreConfig`].
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            config: ScoreConfig::default(),
        }
    }

    /// Creates an evaluator with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn with_config(instance: &'a Instance, config: ScoreConfig) -> Self {
        config.validate().expect("invalid ScoreConfig");
        Self { instance, config }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Scalar score of a candidate. Lower is better.
    ///
    /// Never fails: a candidate rejected by [`check`](Self::check) scores
    /// [`ScoreConfig::invalid_penalty`].
    pub fn evaluate(&self, candidate: &[usize]) -> f64 {
        match self.objectives(candidate) {
            Ok(objectives) => {
                objectives.combine(self.instance.objective_order(), self.config.scale)
            }
            Err(err) => {
                trace!(error = %err, "candidate rejected");
                self.config.invalid_penalty
            }
        }
    }

    /// Scores many candidates, in parallel with the `parallel` feature.
    pub fn evaluate_batch(&self, candidates: &[Vec<usize>]) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            candidates.par_iter().map(|c| self.evaluate(c)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            candidates.iter().map(|c| self.evaluate(c)).collect()
        }
    }

    /// The three objective components of a valid candidate.
    pub fn objectives(&self, candidate: &[usize]) -> Result<Objectives, CandidateError> {
        let sequence = self.sequence(candidate)?;
        let (high, low) = self.window_violations(&sequence);
        Ok(Objectives {
            color: self.color_changes(&sequence),
            high,
            low,
        })
    }

    /// Class occupying each position under the candidate ordering.
    pub fn sequence(&self, candidate: &[usize]) -> Result<Vec<usize>, CandidateError> {
        self.check(candidate)?;
        let baseline = self.instance.baseline_sequence();
        Ok(candidate.iter().map(|&i| baseline[i]).collect())
    }

    /// Validates a candidate.
    ///
    /// Checks, in order: the length, that the candidate is a permutation of
    /// `0..position_count`, and that every fixed position holds its own
    /// index.
    pub fn check(&self, candidate: &[usize]) -> Result<(), CandidateError> {
        let n = self.instance.position_count();
        if candidate.len() != n {
            return Err(CandidateError::Length {
                expected: n,
                actual: candidate.len(),
            });
        }

        let mut seen = vec![false; n];
        for (index, &value) in candidate.iter().enumerate() {
            if value >= n {
                return Err(CandidateError::OutOfRange {
                    index,
                    value,
                    bound: n,
                });
            }
            if seen[value] {
                return Err(CandidateError::Duplicate { value });
            }
            seen[value] = true;
        }

        let start = self.instance.start_position();
        if let Some((position, &value)) = candidate[..start]
            .iter()
            .enumerate()
            .find(|&(p, &v)| p != v)
        {
            return Err(CandidateError::FixedPrefix { position, value });
        }
        Ok(())
    }

    /// Number of color changes between adjacent positions.
    ///
    /// The scan starts at the last fixed position so that a change across
    /// the fixed/free boundary is counted.
    fn color_changes(&self, sequence: &[usize]) -> u64 {
        let from = self.instance.start_position().saturating_sub(1);
        let color = |class: usize| self.instance.class(class).color;
        sequence[from..]
            .windows(2)
            .filter(|pair| color(pair[0]) != color(pair[1]))
            .count() as u64
    }

    /// Window capacity excess as `(high_priority, low_priority)`.
    fn window_violations(&self, sequence: &[usize]) -> (u64, u64) {
        let mut high = 0;
        let mut low = 0;
        for (o, option) in self.instance.options().iter().enumerate() {
            let excess =
                self.option_excess(sequence, o, option.window_size, option.max_per_window);
            if option.high_priority {
                high += excess;
            } else {
                low += excess;
            }
        }
        (high, low)
    }

    /// Excess over `cap` summed over every window of length `w` that can
    /// contain a free position.
    ///
    /// Window starts range over `max(0, start - w + 1) ..= n - w`.
    fn option_excess(&self, sequence: &[usize], option: usize, w: usize, cap: usize) -> u64 {
        let n = sequence.len();
        if w > n {
            return 0;
        }
        let first = (self.instance.start_position() + 1).saturating_sub(w);
        let last = n - w;
        if first > last {
            return 0;
        }

        let requires = |p: usize| self.instance.class(sequence[p]).requires(option);
        let mut count = (first..first + w).filter(|&p| requires(p)).count();
        let mut excess = count.saturating_sub(cap) as u64;
        for j in first + 1..=last {
            if requires(j - 1) {
                count -= 1;
            }
            if requires(j + w - 1) {
                count += 1;
            }
            excess += count.saturating_sub(cap) as u64;
        }
        excess
    }
}

/// Scores `candidate` against `instance` with the default configuration.
///
/// Shorthand for `Evaluator::new(instance).evaluate(candidate)`.
pub fn evaluate(instance: &Instance, candidate: &[usize]) -> f64 {
    Evaluator::new(instance).evaluate(candidate)
}
