use std::time::{Duration, Instant};

/// One clock reading.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped seconds since the previous tick.
    pub dt: f32,

    /// Seconds accumulated from clamped deltas since the clock started.
    pub elapsed: f64,

    /// Monotonic timestamp of this tick.
    pub now: Instant,

    /// Zero-based tick counter.
    pub frame_index: u64,
}

/// Produces clamped per-tick deltas.
///
/// Deltas are clamped on both ends: tight loops never see a zero step and a
/// long stall (debugger, minimized window, slow first frame) advances the
/// simulation by at most `dt_max`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(100))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Ticks with an explicit timestamp. Timestamps older than the previous
    /// tick count as the minimum step.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = self.last.max(now);
        self.elapsed += dt.as_secs_f64();

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> (FrameClock, Instant) {
        let clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(50));
        let base = clock.last;
        (clock, base)
    }

    #[test]
    fn regular_step_passes_through() {
        let (mut clock, base) = clock();
        let ft = clock.tick_at(base + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn stall_is_clamped_to_max() {
        let (mut clock, base) = clock();
        let ft = clock.tick_at(base + Duration::from_secs(5));
        assert!((ft.dt - 0.050).abs() < 1e-6);
    }

    #[test]
    fn backwards_timestamp_counts_as_min_step() {
        let (mut clock, base) = clock();
        clock.tick_at(base + Duration::from_millis(20));
        let ft = clock.tick_at(base + Duration::from_millis(10));
        assert!((ft.dt - 0.001).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn elapsed_accumulates_clamped_deltas() {
        let (mut clock, base) = clock();
        clock.tick_at(base + Duration::from_millis(10));
        let ft = clock.tick_at(base + Duration::from_secs(3));
        assert!((ft.elapsed - 0.060).abs() < 1e-9);
    }
}
