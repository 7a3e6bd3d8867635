//! Fixed-interval scheduling and the simulation clock
//!
//! Physics runs on a fixed timestep (10 ms by default) decoupled from the
//! render rate: [`FixedTick`] converts irregular frame times into a whole
//! number of fixed-size ticks, and [`SimClock`] accumulates elapsed
//! simulation time for time-varying scenes.

/// Default physics tick interval in seconds (10 ms)
pub const DEFAULT_TICK_INTERVAL: f32 = 0.010;

/// Ticks a single `advance` may emit before dropping the backlog
///
/// Keeps a long stall (debugger pause, window drag) from scheduling an
/// unbounded catch-up burst.
const MAX_TICKS_PER_ADVANCE: u32 = 25;

/// Accumulator turning variable frame times into fixed physics ticks
#[derive(Debug, Clone)]
pub struct FixedTick {
    interval: f32,
    accumulator: f32,
}

impl FixedTick {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// The fixed timestep handed to every physics tick, in seconds
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Feed in wall-clock time and get back the number of ticks to run
    ///
    /// Each returned tick represents exactly `interval` seconds. The backlog
    /// is capped; beyond the cap the remainder is discarded.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < MAX_TICKS_PER_ADVANCE {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_ADVANCE {
            self.accumulator = 0.0;
        }
        ticks
    }
}

impl Default for FixedTick {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

/// Monotonic simulation time, advanced once per physics tick
#[derive(Debug, Clone, Copy, Default)]
pub struct SimClock {
    elapsed: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Seconds of simulation time since startup
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
