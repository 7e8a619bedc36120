//! Clocked test harness.
//!
//! Mirrors the bring-up sequence used on the RTL: one edge with reset low,
//! one edge with reset high, then a single edge presenting the input with
//! `in_valid` high, followed by a fixed wait before sampling the outputs.

use cordic_sim::{Config, CordicEngine, CordicInputs, CordicOutput, CordicSample};

/// Edges waited after the input edge before the outputs are checked.
pub const WAIT_CYCLES: usize = 20;

pub struct TestHarness {
    pub engine: CordicEngine,
    pub cycle: u64,
}

impl TestHarness {
    pub fn new(config: &Config) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            engine: CordicEngine::new(config),
            cycle: 0,
        }
    }

    /// Default configuration, reset sequence already applied.
    pub fn boot_default() -> Self {
        let mut h = Self::new(&Config::default());
        h.reset_sequence();
        h
    }

    pub fn reset_sequence(&mut self) {
        self.clock(&CordicInputs::idle());
        self.clock(&CordicInputs::reset());
    }

    pub fn clock(&mut self, io: &CordicInputs) {
        self.engine.tick(io);
        self.cycle += 1;
    }

    /// `n` edges with every input low.
    pub fn clock_cycles(&mut self, n: usize) {
        for _ in 0..n {
            self.clock(&CordicInputs::idle());
        }
    }

    /// One edge presenting `sample` with `in_valid` high.
    pub fn drive(&mut self, sample: CordicSample) {
        self.clock(&CordicInputs::offer(sample));
    }

    /// Drives `sample`, waits [`WAIT_CYCLES`], and returns the output port.
    pub fn transact(&mut self, sample: CordicSample) -> CordicOutput {
        self.drive(sample);
        self.clock_cycles(WAIT_CYCLES);
        assert!(
            self.engine.out_valid(),
            "out_valid should be 1 {} cycles after the input edge",
            WAIT_CYCLES
        );
        self.engine.out_bits()
    }

    /// Consumes a pending result with one `out_ready` edge.
    pub fn consume(&mut self) {
        self.clock(&CordicInputs::idle().with_ready(true));
    }
}
