//! Simulation clock: wall-clock time since start, scaled to simulated days.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct SimulationClock {
    start: Instant,
    /// Simulated days per real second
    day_scale: f64,
}

impl SimulationClock {
    pub fn new(day_scale: f64) -> Self {
        Self::starting_at(Instant::now(), day_scale)
    }

    pub fn starting_at(start: Instant, day_scale: f64) -> Self {
        Self { start, day_scale }
    }

    /// Simulated days elapsed at `now`. Instants before the start clamp to 0.
    pub fn elapsed_days_at(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.start).as_secs_f64() * self.day_scale
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn thirty_days_per_second() {
        let start = Instant::now();
        let clock = SimulationClock::starting_at(start, 30.0);
        assert_eq!(clock.elapsed_days_at(start), 0.0);
        let later = start + Duration::from_millis(2500);
        assert!((clock.elapsed_days_at(later) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn monotonic() {
        let start = Instant::now();
        let clock = SimulationClock::starting_at(start, 30.0);
        let mut last = 0.0;
        for ms in (0..1000).step_by(16) {
            let d = clock.elapsed_days_at(start + Duration::from_millis(ms));
            assert!(d >= last);
            last = d;
        }
    }
}
