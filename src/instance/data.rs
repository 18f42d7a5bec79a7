//! Structured instance data and its validation.

use super::model::Instance;
use super::types::{CarClass, CarOption, ObjectiveOrder};
use crate::error::ConfigurationError;
use tracing::debug;

/// Raw parameter set from which an [`Instance`] is built.
///
/// Every field is optional so that incomplete data is reported as a
/// [`ConfigurationError`] instead of failing to construct. Per-option data
/// is given as parallel arrays, per-class data as colors plus requirement
/// vectors. The production plan is either given directly as
/// `baseline_sequence` or derived from `class_counts` by repeating each
/// class index by its count.
///
/// `option_count` may be omitted, in which case it is the length of
/// `max_per_window` (zero when no option arrays are present).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InstanceData {
    pub position_count: Option<usize>,
    pub option_count: Option<usize>,
    pub paint_batch_limit: Option<usize>,
    /// Numeric order code, see [`ObjectiveOrder::from_code`].
    pub objective_order: Option<i64>,
    pub start_position: Option<usize>,
    pub max_per_window: Option<Vec<usize>>,
    pub window_size: Option<Vec<usize>>,
    pub is_high_priority: Option<Vec<bool>>,
    pub class_colors: Option<Vec<u32>>,
    pub class_requirements: Option<Vec<Vec<bool>>>,
    pub class_counts: Option<Vec<usize>>,
    pub baseline_sequence: Option<Vec<usize>>,
}

impl InstanceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position_count(mut self, n: usize) -> Self {
        self.position_count = Some(n);
        self
    }

    pub fn with_option_count(mut self, n: usize) -> Self {
        self.option_count = Some(n);
        self
    }

    pub fn with_paint_batch_limit(mut self, limit: usize) -> Self {
        self.paint_batch_limit = Some(limit);
        self
    }

    pub fn with_objective_order(mut self, code: i64) -> Self {
        self.objective_order = Some(code);
        self
    }

    pub fn with_start_position(mut self, position: usize) -> Self {
        self.start_position = Some(position);
        self
    }

    /// Appends one option to the per-option arrays.
    pub fn with_option(mut self, max_per_window: usize, window_size: usize, high: bool) -> Self {
        self.max_per_window
            .get_or_insert_with(Vec::new)
            .push(max_per_window);
        self.window_size.get_or_insert_with(Vec::new).push(window_size);
        self.is_high_priority.get_or_insert_with(Vec::new).push(high);
        self
    }

    /// Appends one class.
    pub fn with_class(mut self, color: u32, requirements: Vec<bool>) -> Self {
        self.class_colors.get_or_insert_with(Vec::new).push(color);
        self.class_requirements
            .get_or_insert_with(Vec::new)
            .push(requirements);
        self
    }

    pub fn with_class_counts(mut self, counts: Vec<usize>) -> Self {
        self.class_counts = Some(counts);
        self
    }

    pub fn with_baseline_sequence(mut self, sequence: Vec<usize>) -> Self {
        self.baseline_sequence = Some(sequence);
        self
    }

    /// Validates the data and builds the instance.
    ///
    /// When no option is low priority, three-term objective orders are
    /// replaced by their two-term equivalent
    /// (see [`ObjectiveOrder::without_low_priority`]).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] for missing fields, array lengths
    /// inconsistent with `position_count`/`option_count`, unknown class ids,
    /// class counts not summing to `position_count`, a `start_position`
    /// past the end, or a zero window size.
    pub fn build(self) -> Result<Instance, ConfigurationError> {
        let position_count = self
            .position_count
            .ok_or(ConfigurationError::MissingField("position_count"))?;
        if position_count == 0 {
            return Err(ConfigurationError::Invalid(
                "position_count must be positive".into(),
            ));
        }
        let paint_batch_limit = self
            .paint_batch_limit
            .ok_or(ConfigurationError::MissingField("paint_batch_limit"))?;
        let declared_order = self
            .objective_order
            .map(ObjectiveOrder::from_code)
            .ok_or(ConfigurationError::MissingField("objective_order"))?;
        let start_position = self
            .start_position
            .ok_or(ConfigurationError::MissingField("start_position"))?;
        if start_position > position_count {
            return Err(ConfigurationError::StartPosition {
                start_position,
                position_count,
            });
        }

        let option_count = self
            .option_count
            .unwrap_or_else(|| self.max_per_window.as_ref().map_or(0, Vec::len));
        let max_per_window =
            option_array(self.max_per_window, "max_per_window", option_count)?;
        let window_size = option_array(self.window_size, "window_size", option_count)?;
        let is_high_priority =
            option_array(self.is_high_priority, "is_high_priority", option_count)?;

        let options = max_per_window
            .into_iter()
            .zip(window_size)
            .zip(is_high_priority)
            .enumerate()
            .map(|(o, ((max_per_window, window_size), high_priority))| {
                if window_size == 0 {
                    return Err(ConfigurationError::Invalid(format!(
                        "window_size of option {o} must be positive"
                    )));
                }
                Ok(CarOption {
                    max_per_window,
                    window_size,
                    high_priority,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let colors = self
            .class_colors
            .ok_or(ConfigurationError::MissingField("class_colors"))?;
        let requirements = match self.class_requirements {
            Some(requirements) => requirements,
            None if option_count == 0 => vec![Vec::new(); colors.len()],
            None => return Err(ConfigurationError::MissingField("class_requirements")),
        };
        if requirements.len() != colors.len() {
            return Err(ConfigurationError::LengthMismatch {
                field: "class_requirements",
                expected: colors.len(),
                actual: requirements.len(),
            });
        }
        let classes = colors
            .into_iter()
            .zip(requirements)
            .enumerate()
            .map(|(class, (color, requirements))| {
                if requirements.len() != option_count {
                    return Err(ConfigurationError::RequirementLength {
                        class,
                        expected: option_count,
                        actual: requirements.len(),
                    });
                }
                Ok(CarClass {
                    color,
                    requirements,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let derived = self
            .class_counts
            .map(|counts| derive_baseline(&counts, classes.len(), position_count))
            .transpose()?;
        let baseline_sequence = match (self.baseline_sequence, derived) {
            (Some(given), Some(derived)) => {
                if given != derived {
                    return Err(ConfigurationError::ConflictingBaseline);
                }
                given
            }
            (Some(given), None) => given,
            (None, Some(derived)) => derived,
            (None, None) => return Err(ConfigurationError::MissingField("baseline_sequence")),
        };
        if baseline_sequence.len() != position_count {
            return Err(ConfigurationError::LengthMismatch {
                field: "baseline_sequence",
                expected: position_count,
                actual: baseline_sequence.len(),
            });
        }
        if let Some((position, &class)) = baseline_sequence
            .iter()
            .enumerate()
            .find(|&(_, &class)| class >= classes.len())
        {
            return Err(ConfigurationError::UnknownClass {
                position,
                class,
                class_count: classes.len(),
            });
        }

        let has_low_priority_options = options.iter().any(|o| !o.high_priority);
        let objective_order = if has_low_priority_options {
            declared_order
        } else {
            declared_order.without_low_priority()
        };
        if objective_order != declared_order {
            debug!(
                declared = %declared_order,
                normalized = %objective_order,
                "no low-priority options, objective order normalized"
            );
        }

        debug!(
            positions = position_count,
            options = options.len(),
            classes = classes.len(),
            start_position,
            order = %objective_order,
            "instance built"
        );

        Ok(Instance {
            position_count,
            paint_batch_limit,
            objective_order,
            start_position,
            options,
            classes,
            baseline_sequence,
            has_low_priority_options,
        })
    }
}

impl Instance {
    /// Builds an instance from structured data. Same as [`InstanceData::build`].
    pub fn from_data(data: InstanceData) -> Result<Self, ConfigurationError> {
        data.build()
    }
}

/// Resolves one per-option array, allowing it to be absent when there are
/// no options.
fn option_array<T>(
    values: Option<Vec<T>>,
    field: &'static str,
    option_count: usize,
) -> Result<Vec<T>, ConfigurationError> {
    let values = match values {
        Some(values) => values,
        None if option_count == 0 => Vec::new(),
        None => return Err(ConfigurationError::MissingField(field)),
    };
    if values.len() != option_count {
        return Err(ConfigurationError::LengthMismatch {
            field,
            expected: option_count,
            actual: values.len(),
        });
    }
    Ok(values)
}

/// Repeats each class index by its count, in class order.
fn derive_baseline(
    counts: &[usize],
    class_count: usize,
    position_count: usize,
) -> Result<Vec<usize>, ConfigurationError> {
    if counts.len() != class_count {
        return Err(ConfigurationError::LengthMismatch {
            field: "class_counts",
            expected: class_count,
            actual: counts.len(),
        });
    }
    let sum: usize = counts.iter().sum();
    if sum != position_count {
        return Err(ConfigurationError::CountMismatch {
            sum,
            position_count,
        });
    }
    Ok(counts
        .iter()
        .enumerate()
        .flat_map(|(class, &count)| std::iter::repeat_n(class, count))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> InstanceData {
        InstanceData::new()
            .with_position_count(6)
            .with_paint_batch_limit(3)
            .with_objective_order(0)
            .with_start_position(2)
            .with_option(1, 2, true)
            .with_option(2, 3, false)
            .with_class(1, vec![true, false])
            .with_class(2, vec![false, true])
            .with_class(3, vec![true, true])
            .with_class_counts(vec![3, 2, 1])
    }

    #[test]
    fn test_build_from_counts() {
        let instance = base().build().unwrap();
        assert_eq!(instance.position_count(), 6);
        assert_eq!(instance.option_count(), 2);
        assert_eq!(instance.class_count(), 3);
        assert_eq!(instance.start_position(), 2);
        assert_eq!(instance.paint_batch_limit(), 3);
        assert_eq!(instance.baseline_sequence(), &[0, 0, 0, 1, 1, 2]);
        assert!(instance.has_low_priority_options());
        assert_eq!(instance.objective_order(), ObjectiveOrder::ColorHighLow);
        assert_eq!(instance.option(1).window_size, 3);
        assert!(instance.class(2).requires(1));
    }

    #[test]
    fn test_build_with_matching_baseline_and_counts() {
        let instance = base()
            .with_baseline_sequence(vec![0, 0, 0, 1, 1, 2])
            .build()
            .unwrap();
        assert_eq!(instance.class_multiplicities(), vec![3, 2, 1]);
    }

    #[test]
    fn test_conflicting_baseline() {
        let err = base()
            .with_baseline_sequence(vec![2, 0, 0, 1, 1, 0])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigurationError::ConflictingBaseline);
    }

    #[test]
    fn test_count_sum_mismatch() {
        let err = base().with_class_counts(vec![3, 2, 2]).build().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::CountMismatch {
                sum: 7,
                position_count: 6
            }
        );
    }

    #[test]
    fn test_missing_fields() {
        let mut data = base();
        data.paint_batch_limit = None;
        assert_eq!(
            data.build().unwrap_err(),
            ConfigurationError::MissingField("paint_batch_limit")
        );

        let mut data = base();
        data.class_counts = None;
        assert_eq!(
            data.build().unwrap_err(),
            ConfigurationError::MissingField("baseline_sequence")
        );

        let mut data = base();
        data.window_size = None;
        assert_eq!(
            data.build().unwrap_err(),
            ConfigurationError::MissingField("window_size")
        );
    }

    #[test]
    fn test_option_array_length_mismatch() {
        let mut data = base().with_option_count(2);
        if let Some(sizes) = data.window_size.as_mut() {
            sizes.pop();
        }
        assert_eq!(
            data.build().unwrap_err(),
            ConfigurationError::LengthMismatch {
                field: "window_size",
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_requirement_length_mismatch() {
        let err = base().with_class(4, vec![true]).build().unwrap_err();
        // class_counts still lists three classes, but requirements are checked first
        assert_eq!(
            err,
            ConfigurationError::RequirementLength {
                class: 3,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_unknown_class_in_baseline() {
        let mut data = base();
        data.class_counts = None;
        let err = data
            .with_baseline_sequence(vec![0, 1, 2, 3, 0, 0])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownClass {
                position: 3,
                class: 3,
                class_count: 3
            }
        );
    }

    #[test]
    fn test_baseline_length_mismatch() {
        let mut data = base();
        data.class_counts = None;
        let err = data
            .with_baseline_sequence(vec![0, 1, 2])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::LengthMismatch {
                field: "baseline_sequence",
                expected: 6,
                actual: 3
            }
        );
    }

    #[test]
    fn test_start_position_past_end() {
        let err = base().with_start_position(7).build().unwrap_err();
        assert!(matches!(err, ConfigurationError::StartPosition { .. }));
        assert!(base().with_start_position(6).build().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut data = base();
        if let Some(sizes) = data.window_size.as_mut() {
            sizes[0] = 0;
        }
        assert!(matches!(
            data.build().unwrap_err(),
            ConfigurationError::Invalid(_)
        ));
    }

    #[test]
    fn test_zero_positions_rejected() {
        assert!(matches!(
            base().with_position_count(0).build().unwrap_err(),
            ConfigurationError::Invalid(_)
        ));
    }

    #[test]
    fn test_order_normalized_without_low_priority() {
        for (code, expected) in [
            (0, ObjectiveOrder::ColorHigh),
            (1, ObjectiveOrder::HighColor),
            (2, ObjectiveOrder::HighColor),
            (3, ObjectiveOrder::ColorHigh),
            (4, ObjectiveOrder::HighColor),
            (9, ObjectiveOrder::Unweighted),
        ] {
            let instance = InstanceData::new()
                .with_position_count(2)
                .with_paint_batch_limit(1)
                .with_objective_order(code)
                .with_start_position(0)
                .with_option(1, 2, true)
                .with_class(0, vec![true])
                .with_class_counts(vec![2])
                .build()
                .unwrap();
            assert!(!instance.has_low_priority_options());
            assert_eq!(instance.objective_order(), expected, "code {code}");
        }
    }

    #[test]
    fn test_order_kept_with_low_priority() {
        let instance = base().with_objective_order(1).build().unwrap();
        assert_eq!(instance.objective_order(), ObjectiveOrder::HighLowColor);
    }

    #[test]
    fn test_no_options_needs_no_requirements() {
        let mut data = InstanceData::new()
            .with_position_count(3)
            .with_paint_batch_limit(1)
            .with_objective_order(0)
            .with_start_position(0)
            .with_baseline_sequence(vec![0, 1, 0]);
        data.class_colors = Some(vec![5, 6]);
        let instance = Instance::from_data(data).unwrap();
        assert_eq!(instance.option_count(), 0);
        assert_eq!(instance.class(1).requirements, Vec::<bool>::new());
        // no options at all counts as "no low-priority options"
        assert_eq!(instance.objective_order(), ObjectiveOrder::ColorHigh);
    }
}
