//! Bounded slider inputs
//!
//! Values live on a fixed grid and are stored as integer step counts, so
//! nudging back and forth always lands on the same float.

/// Range, resolution and default of a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSpec {
    pub label: &'static str,
    /// Lowest position, in steps
    pub min_steps: i64,
    /// Highest position, in steps
    pub max_steps: i64,
    /// Starting position, in steps
    pub default_steps: i64,
    /// Steps per whole unit (10 gives a resolution of 0.1)
    pub steps_per_unit: i64,
}

/// Stop-loss percentage: 0.5 to 10, step 0.1, default 1.0
pub const STOP_PCT: SliderSpec = SliderSpec {
    label: "Stop-Loss %",
    min_steps: 5,
    max_steps: 100,
    default_steps: 10,
    steps_per_unit: 10,
};

/// Risk per trade percentage: 0.5 to 10, step 0.1, default 1.0
pub const RISK_PCT: SliderSpec = SliderSpec {
    label: "Risk per Trade %",
    min_steps: 5,
    max_steps: 100,
    default_steps: 10,
    steps_per_unit: 10,
};

/// Target reward multiple of the risk: 0 to 10, step 0.1, default 2.0
pub const TARGET_RATIO: SliderSpec = SliderSpec {
    label: "Target P&L Ratio",
    min_steps: 0,
    max_steps: 100,
    default_steps: 20,
    steps_per_unit: 10,
};

impl SliderSpec {
    fn to_value(&self, steps: i64) -> f64 {
        steps as f64 / self.steps_per_unit as f64
    }

    pub fn min(&self) -> f64 {
        self.to_value(self.min_steps)
    }

    pub fn max(&self) -> f64 {
        self.to_value(self.max_steps)
    }

    pub fn default_value(&self) -> f64 {
        self.to_value(self.default_steps)
    }

    /// Nearest grid position for `value`, clamped into range.
    /// Non-finite values fall back to the default.
    pub fn snap(&self, value: f64) -> i64 {
        if !value.is_finite() {
            return self.default_steps;
        }
        let steps = (value * self.steps_per_unit as f64).round();
        (steps as i64).clamp(self.min_steps, self.max_steps)
    }
}

/// A slider position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    spec: SliderSpec,
    steps: i64,
}

impl Slider {
    pub fn new(spec: SliderSpec) -> Self {
        Self {
            spec,
            steps: spec.default_steps,
        }
    }

    pub fn with_value(spec: SliderSpec, value: f64) -> Self {
        Self {
            spec,
            steps: spec.snap(value),
        }
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn value(&self) -> f64 {
        self.spec.to_value(self.steps)
    }

    pub fn set(&mut self, value: f64) {
        self.steps = self.spec.snap(value);
    }

    /// Move by `delta` steps, stopping at the bounds
    pub fn nudge(&mut self, delta: i64) {
        self.steps = self
            .steps
            .saturating_add(delta)
            .clamp(self.spec.min_steps, self.spec.max_steps);
    }

    pub fn to_min(&mut self) {
        self.steps = self.spec.min_steps;
    }

    pub fn to_max(&mut self) {
        self.steps = self.spec.max_steps;
    }

    pub fn reset(&mut self) {
        self.steps = self.spec.default_steps;
    }

    /// Position within the range, 0.0 at min and 1.0 at max
    pub fn fraction(&self) -> f64 {
        let span = self.spec.max_steps - self.spec.min_steps;
        if span <= 0 {
            return 0.0;
        }
        (self.steps - self.spec.min_steps) as f64 / span as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_ranges() {
        assert_eq!(STOP_PCT.min(), 0.5);
        assert_eq!(STOP_PCT.max(), 10.0);
        assert_eq!(STOP_PCT.default_value(), 1.0);
        assert_eq!(RISK_PCT.default_value(), 1.0);
        assert_eq!(TARGET_RATIO.min(), 0.0);
        assert_eq!(TARGET_RATIO.default_value(), 2.0);
        assert_eq!(TARGET_RATIO.max(), 10.0);
    }

    #[test]
    fn test_snap_and_clamp() {
        let s = Slider::with_value(STOP_PCT, 2.34);
        assert_eq!(s.value(), 2.3);
        assert_eq!(Slider::with_value(STOP_PCT, 0.0).value(), 0.5);
        assert_eq!(Slider::with_value(STOP_PCT, 25.0).value(), 10.0);
        assert_eq!(Slider::with_value(RISK_PCT, f64::NAN).value(), 1.0);
    }

    #[test]
    fn test_nudge_does_not_drift() {
        let mut s = Slider::new(TARGET_RATIO);
        for _ in 0..37 {
            s.nudge(1);
        }
        for _ in 0..37 {
            s.nudge(-1);
        }
        assert_eq!(s.value(), 2.0);

        s.nudge(1);
        assert_eq!(s.value(), 2.1);
    }

    #[test]
    fn test_nudge_stops_at_bounds() {
        let mut s = Slider::new(RISK_PCT);
        s.nudge(-1000);
        assert_eq!(s.value(), 0.5);
        assert_eq!(s.fraction(), 0.0);
        s.nudge(i64::MAX);
        assert_eq!(s.value(), 10.0);
        assert_eq!(s.fraction(), 1.0);
        s.reset();
        assert_eq!(s.value(), 1.0);
    }
}
