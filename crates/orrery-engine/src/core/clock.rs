/// Monotonic simulated clock driving every orbit.
///
/// The host feeds it the wall-clock delta of each frame; tests feed it
/// fixed steps. Nothing reads real time directly.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    /// Seconds since the clock was created (f64: long sessions stay precise).
    elapsed: f64,
    /// Delta consumed by the most recent tick.
    delta: f32,
    /// Number of ticks consumed.
    ticks: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame's delta. Negative or non-finite deltas count
    /// as zero so elapsed time never runs backwards. Returns the delta used.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let dt = if frame_dt.is_finite() && frame_dt > 0.0 { frame_dt } else { 0.0 };
        self.elapsed += dt as f64;
        self.delta = dt;
        self.ticks += 1;
        dt
    }

    /// Seconds since creation.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Delta of the most recent tick.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = Clock::new();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.delta(), 0.0);
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn accumulates_deltas() {
        let mut clock = Clock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.elapsed() - 0.75).abs() < 1e-9);
        assert_eq!(clock.delta(), 0.25);
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn never_runs_backwards() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        assert_eq!(clock.advance(-0.5), 0.0);
        assert_eq!(clock.advance(f32::NAN), 0.0);
        assert_eq!(clock.advance(f32::INFINITY), 0.0);
        assert!((clock.elapsed() - 1.0).abs() < 1e-9);
    }
}
