//! The validated, immutable instance.

use super::types::{CarClass, CarOption, ObjectiveOrder};

/// A car sequencing instance.
///
/// Built once through [`InstanceData::build`](super::InstanceData::build)
/// and read-only afterwards, so a single instance can be shared by any
/// number of threads evaluating candidates.
///
/// # Examples
///
/// ```
/// use u_carseq::instance::{InstanceData, ObjectiveOrder};
///
/// let instance = InstanceData::new()
///     .with_position_count(4)
///     .with_paint_batch_limit(10)
///     .with_objective_order(0)
///     .with_start_position(0)
///     .with_option(1, 2, false)
///     .with_class(1, vec![true])
///     .with_class(2, vec![false])
///     .with_class_counts(vec![2, 2])
///     .build()
///     .unwrap();
///
/// assert_eq!(instance.baseline_sequence(), &[0, 0, 1, 1]);
/// assert_eq!(instance.objective_order(), ObjectiveOrder::ColorHighLow);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub(super) position_count: usize,
    pub(super) paint_batch_limit: usize,
    pub(super) objective_order: ObjectiveOrder,
    pub(super) start_position: usize,
    pub(super) options: Vec<CarOption>,
    pub(super) classes: Vec<CarClass>,
    pub(super) baseline_sequence: Vec<usize>,
    pub(super) has_low_priority_options: bool,
}

impl Instance {
    /// Number of slots in the production sequence.
    #[inline]
    pub fn position_count(&self) -> usize {
        self.position_count
    }

    #[inline]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Maximum consecutive cars without a paint change.
    ///
    /// Carried as instance metadata only: no score component depends on it.
    #[inline]
    pub fn paint_batch_limit(&self) -> usize {
        self.paint_batch_limit
    }

    /// Objective order after normalization.
    #[inline]
    pub fn objective_order(&self) -> ObjectiveOrder {
        self.objective_order
    }

    /// Positions before this index are fixed.
    #[inline]
    pub fn start_position(&self) -> usize {
        self.start_position
    }

    #[inline]
    pub fn options(&self) -> &[CarOption] {
        &self.options
    }

    #[inline]
    pub fn option(&self, index: usize) -> &CarOption {
        &self.options[index]
    }

    #[inline]
    pub fn classes(&self) -> &[CarClass] {
        &self.classes
    }

    #[inline]
    pub fn class(&self, index: usize) -> &CarClass {
        &self.classes[index]
    }

    /// The production plan that candidates reorder, as class indices.
    #[inline]
    pub fn baseline_sequence(&self) -> &[usize] {
        &self.baseline_sequence
    }

    /// True if at least one option is low priority.
    #[inline]
    pub fn has_low_priority_options(&self) -> bool {
        self.has_low_priority_options
    }

    /// Number of cars of each class in the baseline plan.
    pub fn class_multiplicities(&self) -> Vec<usize> {
        let mut counts = vec![0; self.classes.len()];
        for &class in &self.baseline_sequence {
            counts[class] += 1;
        }
        counts
    }

    /// Color of the car at baseline index `index`.
    #[inline]
    pub fn baseline_color(&self, index: usize) -> u32 {
        self.classes[self.baseline_sequence[index]].color
    }
}

#[cfg(test)]
mod tests {
    use crate::instance::InstanceData;

    #[test]
    fn test_class_multiplicities() {
        let instance = InstanceData::new()
            .with_position_count(5)
            .with_paint_batch_limit(3)
            .with_objective_order(0)
            .with_start_position(1)
            .with_class(7, vec![])
            .with_class(8, vec![])
            .with_class(9, vec![])
            .with_baseline_sequence(vec![2, 0, 2, 1, 2])
            .build()
            .unwrap();

        assert_eq!(instance.class_multiplicities(), vec![1, 1, 3]);
        assert_eq!(instance.class_count(), 3);
        assert_eq!(instance.option_count(), 0);
        assert_eq!(instance.baseline_color(0), 9);
        assert_eq!(instance.baseline_color(3), 8);
    }
}
