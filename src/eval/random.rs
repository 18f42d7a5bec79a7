//! Random candidates that respect the fixed prefix.

use crate::instance::Instance;
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a random candidate for `instance`.
///
/// Positions before `start_position` hold their own index; the remaining
/// positions are a uniform shuffle of `start_position..position_count`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_carseq::eval::random_candidate;
/// use u_carseq::instance::InstanceData;
///
/// let instance = InstanceData::new()
///     .with_position_count(6)
///     .with_paint_batch_limit(2)
///     .with_objective_order(0)
///     .with_start_position(2)
///     .with_class(1, vec![])
///     .with_class_counts(vec![6])
///     .build()
///     .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let candidate = random_candidate(&instance, &mut rng);
/// assert_eq!(&candidate[..2], &[0, 1]);
/// ```
pub fn random_candidate<R: Rng + ?Sized>(instance: &Instance, rng: &mut R) -> Vec<usize> {
    let mut candidate: Vec<usize> = (0..instance.position_count()).collect();
    candidate[instance.start_position()..].shuffle(rng);
    candidate
}
