//! Score configuration.

/// Default scale constant separating the tiers of a lexicographic score.
pub const DEFAULT_SCALE: f64 = 10_000.0;

/// Default score returned for rejected candidates.
///
/// Any combined score whose components stay below [`DEFAULT_SCALE`] is at
/// most about `1e12`, far below this value.
pub const DEFAULT_INVALID_PENALTY: f64 = 1e18;

/// Configuration of the scalar score.
///
/// # Examples
///
/// ```
/// use u_carseq::eval::ScoreConfig;
///
/// let config = ScoreConfig::default()
///     .with_scale(1_000.0)
///     .with_invalid_penalty(1e15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreConfig {
    /// Multiplier between consecutive tiers (`M`).
    ///
    /// Each component must stay below this value for the scalar score to
    /// respect the lexicographic order.
    pub scale: f64,

    /// Score returned for candidates that fail validation.
    pub invalid_penalty: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            invalid_penalty: DEFAULT_INVALID_PENALTY,
        }
    }
}

impl ScoreConfig {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_invalid_penalty(mut self, penalty: f64) -> Self {
        self.invalid_penalty = penalty;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.scale.is_finite() || self.scale <= 1.0 {
            return Err(format!("scale must be finite and > 1, got {}", self.scale));
        }
        if self.invalid_penalty.is_nan() || self.invalid_penalty <= 0.0 {
            return Err(format!(
                "invalid_penalty must be positive, got {}",
                self.invalid_penalty
            ));
        }
        if self.invalid_penalty <= self.scale.powi(3) {
            return Err(format!(
                "invalid_penalty ({}) must exceed scale^3 ({})",
                self.invalid_penalty,
                self.scale.powi(3)
            ));
        }
        Ok(())
    }
}
