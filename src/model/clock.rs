use crate::consts::{DEFAULT_TIME_SPEED, TIME_SPEED_FACTOR};

/// Global multiplier on how far every body moves per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    time_speed: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        SimulationClock {
            time_speed: DEFAULT_TIME_SPEED,
        }
    }

    pub fn time_speed(&self) -> f64 {
        self.time_speed
    }

    pub fn speed_up(&mut self) {
        self.time_speed *= TIME_SPEED_FACTOR;
    }

    pub fn slow_down(&mut self) {
        self.time_speed /= TIME_SPEED_FACTOR;
    }

    pub fn reset(&mut self) {
        self.time_speed = DEFAULT_TIME_SPEED;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_speed_up_compounds() {
        let mut clock = SimulationClock::new();
        for k in 1..=5 {
            clock.speed_up();
            assert_relative_eq!(clock.time_speed(), 1.5f64.powi(k));
        }
    }

    #[test]
    fn test_speed_up_then_slow_down() {
        let mut clock = SimulationClock::new();
        clock.slow_down();
        clock.slow_down();
        let before = clock.time_speed();

        clock.speed_up();
        clock.slow_down();
        assert_relative_eq!(clock.time_speed(), before);

        // Never reaches zero or goes negative
        for _ in 0..100 {
            clock.slow_down();
        }
        assert!(clock.time_speed() > 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = SimulationClock::new();
        clock.speed_up();
        clock.speed_up();
        clock.slow_down();
        clock.reset();
        assert_eq!(clock.time_speed(), 1.0);
    }
}
