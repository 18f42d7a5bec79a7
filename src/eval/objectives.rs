//! Objective components and their lexicographic combination.

use crate::instance::ObjectiveOrder;

/// The three objective components of a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objectives {
    /// Number of adjacent pairs with different colors.
    pub color: u64,
    /// Window capacity excess summed over high-priority options.
    pub high: u64,
    /// Window capacity excess summed over low-priority options.
    pub low: u64,
}

impl Objectives {
    pub fn new(color: u64, high: u64, low: u64) -> Self {
        Self { color, high, low }
    }

    /// Components ordered from most to least significant.
    ///
    /// Two-term orders put a zero in the last slot; the unweighted order
    /// yields the sum followed by two zeros. Comparing keys as arrays is an
    /// exact lexicographic comparison, without the tier overflow that the
    /// scalar encoding of [`combine`](Self::combine) suffers from once a
    /// component reaches the scale.
    pub fn lexicographic_key(&self, order: ObjectiveOrder) -> [u64; 3] {
        let Self { color, high, low } = *self;
        match order {
            ObjectiveOrder::ColorHighLow => [color, high, low],
            ObjectiveOrder::HighLowColor => [high, low, color],
            ObjectiveOrder::HighColorLow => [high, color, low],
            ObjectiveOrder::ColorHigh => [color, high, 0],
            ObjectiveOrder::HighColor => [high, color, 0],
            ObjectiveOrder::Unweighted => [color + high + low, 0, 0],
        }
    }

    /// Encodes the components into one scalar, `scale` apart per tier.
    ///
    /// | order | score |
    /// |---|---|
    /// | color, high, low | `color*M^2 + high*M + low` |
    /// | high, low, color | `high*M^2 + low*M + color` |
    /// | high, color, low | `high*M^2 + color*M + low` |
    /// | color, high | `color*M + high` |
    /// | high, color | `high*M + color` |
    /// | unweighted | `color + high + low` |
    pub fn combine(&self, order: ObjectiveOrder, scale: f64) -> f64 {
        let color = self.color as f64;
        let high = self.high as f64;
        let low = self.low as f64;
        let m2 = scale * scale;
        match order {
            ObjectiveOrder::ColorHighLow => color * m2 + high * scale + low,
            ObjectiveOrder::HighLowColor => high * m2 + low * scale + color,
            ObjectiveOrder::HighColorLow => high * m2 + color * scale + low,
            ObjectiveOrder::ColorHigh => color * scale + high,
            ObjectiveOrder::HighColor => high * scale + color,
            ObjectiveOrder::Unweighted => color + high + low,
        }
    }

    /// True when there are no color changes and no window violations.
    pub fn is_zero(&self) -> bool {
        self.color == 0 && self.high == 0 && self.low == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ObjectiveOrder::*;

    const M: f64 = 10_000.0;

    #[test]
    fn test_combine_formulas() {
        let o = Objectives::new(2, 3, 5);
        assert_eq!(o.combine(ColorHighLow, M), 2.0 * M * M + 3.0 * M + 5.0);
        assert_eq!(o.combine(HighLowColor, M), 3.0 * M * M + 5.0 * M + 2.0);
        assert_eq!(o.combine(HighColorLow, M), 3.0 * M * M + 2.0 * M + 5.0);
        assert_eq!(o.combine(ColorHigh, M), 2.0 * M + 3.0);
        assert_eq!(o.combine(HighColor, M), 3.0 * M + 2.0);
        assert_eq!(o.combine(Unweighted, M), 10.0);
    }

    #[test]
    fn test_combine_respects_tiers() {
        // one high-priority violation outweighs many color changes
        let few_high = Objectives::new(9_999, 1, 0);
        let more_high = Objectives::new(0, 2, 0);
        assert!(few_high.combine(HighColorLow, M) < more_high.combine(HighColorLow, M));
        assert!(few_high.combine(ColorHighLow, M) > more_high.combine(ColorHighLow, M));
    }

    #[test]
    fn test_lexicographic_key_matches_scalar_below_scale() {
        let a = Objectives::new(4, 0, 7);
        let b = Objectives::new(3, 1, 0);
        for order in [ColorHighLow, HighLowColor, HighColorLow, ColorHigh, HighColor] {
            let by_key = a.lexicographic_key(order).cmp(&b.lexicographic_key(order));
            let by_scalar = a
                .combine(order, M)
                .partial_cmp(&b.combine(order, M))
                .unwrap();
            assert_eq!(by_key, by_scalar, "order {order}");
        }
    }

    #[test]
    fn test_lexicographic_key_survives_tier_overflow() {
        // the scalar encoding lets a huge secondary term beat the primary one
        let a = Objectives::new(0, 20_000, 0);
        let b = Objectives::new(1, 0, 0);
        assert!(a.combine(ColorHigh, M) > b.combine(ColorHigh, M));
        assert!(a.lexicographic_key(ColorHigh) < b.lexicographic_key(ColorHigh));
    }

    #[test]
    fn test_is_zero() {
        assert!(Objectives::default().is_zero());
        assert!(!Objectives::new(0, 0, 1).is_zero());
    }
}
