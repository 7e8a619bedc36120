//! Simulation statistics.

use serde::Serialize;

/// Counters accumulated by a clocked unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Clock edges seen, including reset edges.
    pub cycles: u64,
    /// Input handshakes (`in_valid && in_ready` on an edge).
    pub accepted: u64,
    /// Results latched into the output register.
    pub completed: u64,
    /// Output handshakes (`out_valid && out_ready` on an edge).
    pub consumed: u64,
    /// Edges spent holding a finished result for a consumer that was not ready.
    pub backpressure_cycles: u64,
    /// Edges with `reset` asserted.
    pub resets: u64,
}

impl SimStats {
    /// Samples accepted but not yet latched as results.
    pub fn in_flight(&self) -> u64 {
        self.accepted.saturating_sub(self.completed)
    }

    pub fn print(&self) {
        println!("\n==========================================================");
        println!("CORDIC SIMULATION STATISTICS");
        println!("==========================================================");
        println!("cycles                   {}", self.cycles);
        println!("resets                   {}", self.resets);
        println!("samples accepted         {}", self.accepted);
        println!("results completed        {}", self.completed);
        println!("results consumed         {}", self.consumed);
        println!("backpressure cycles      {}", self.backpressure_cycles);
        if self.completed > 0 {
            println!(
                "cycles / result          {:.2}",
                self.cycles as f64 / self.completed as f64
            );
        }
        println!("==========================================================");
    }
}
