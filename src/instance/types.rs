//! Building blocks of an instance: options, classes and the objective order.

/// Lexicographic order in which the three objective components are combined.
///
/// The first five variants correspond to the numeric codes `0..=4` used by
/// instance data. Any other code selects [`ObjectiveOrder::Unweighted`],
/// which simply adds the three components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveOrder {
    /// Color changes, then high-priority, then low-priority violations.
    ColorHighLow,
    /// High-priority, then low-priority violations, then color changes.
    HighLowColor,
    /// High-priority violations, then color changes, then low-priority.
    HighColorLow,
    /// Color changes, then high-priority violations.
    ColorHigh,
    /// High-priority violations, then color changes.
    HighColor,
    /// Plain sum of all three components.
    Unweighted,
}

impl ObjectiveOrder {
    /// Maps a numeric order code to its variant.
    ///
    /// ```
    /// use u_carseq::instance::ObjectiveOrder;
    ///
    /// assert_eq!(ObjectiveOrder::from_code(3), ObjectiveOrder::ColorHigh);
    /// assert_eq!(ObjectiveOrder::from_code(17), ObjectiveOrder::Unweighted);
    /// ```
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::ColorHighLow,
            1 => Self::HighLowColor,
            2 => Self::HighColorLow,
            3 => Self::ColorHigh,
            4 => Self::HighColor,
            _ => Self::Unweighted,
        }
    }

    /// Numeric code of this order, `None` for [`ObjectiveOrder::Unweighted`].
    pub fn code(self) -> Option<i64> {
        match self {
            Self::ColorHighLow => Some(0),
            Self::HighLowColor => Some(1),
            Self::HighColorLow => Some(2),
            Self::ColorHigh => Some(3),
            Self::HighColor => Some(4),
            Self::Unweighted => None,
        }
    }

    /// Whether the order ranks the low-priority component at all.
    pub fn uses_low_priority(self) -> bool {
        matches!(
            self,
            Self::ColorHighLow | Self::HighLowColor | Self::HighColorLow | Self::Unweighted
        )
    }

    /// Equivalent order for an instance without low-priority options.
    ///
    /// Three-term orders drop their low-priority term; two-term orders and
    /// the unweighted sum are returned unchanged.
    pub fn without_low_priority(self) -> Self {
        match self {
            Self::ColorHighLow => Self::ColorHigh,
            Self::HighColorLow | Self::HighLowColor => Self::HighColor,
            other => other,
        }
    }
}

impl std::fmt::Display for ObjectiveOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColorHighLow => write!(f, "color-high-low"),
            Self::HighLowColor => write!(f, "high-low-color"),
            Self::HighColorLow => write!(f, "high-color-low"),
            Self::ColorHigh => write!(f, "color-high"),
            Self::HighColor => write!(f, "high-color"),
            Self::Unweighted => write!(f, "unweighted"),
        }
    }
}

/// Capacity rule for one option: at most `max_per_window` cars requiring
/// the option in any `window_size` consecutive positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarOption {
    pub max_per_window: usize,
    pub window_size: usize,
    /// High-priority violations are scored separately from low-priority ones.
    pub high_priority: bool,
}

/// A class of cars sharing a paint color and option requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarClass {
    pub color: u32,
    /// `requirements[o]` is true if cars of this class need option `o`.
    pub requirements: Vec<bool>,
}

impl CarClass {
    #[inline]
    pub fn requires(&self, option: usize) -> bool {
        self.requirements[option]
    }
}
