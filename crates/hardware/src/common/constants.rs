//! Hardware constants.
//!
//! Every width and depth here is fixed at compile time. The numeric
//! behavior of the model (where values wrap, which bits a shift drops)
//! follows directly from these numbers.

/// Width in bits of every data port (`x`, `y`, `z`, `A`, `B`, `S`).
pub const WIDTH: u32 = 16;

/// Fractional bits of the port format (Q4.12): `1.0 == 1 << 12`.
pub const FRAC_BITS: u32 = 12;

/// Hidden guard bits carried below the port LSB inside the CORDIC registers.
pub const GUARD_BITS: u32 = 4;

/// Width in bits of the CORDIC x/y/z registers.
pub const DATAPATH_WIDTH: u32 = WIDTH + GUARD_BITS;

/// Fractional bits of the CORDIC registers and the angle ROM.
pub const DATAPATH_FRAC_BITS: u32 = FRAC_BITS + GUARD_BITS;

/// Number of micro-rotations performed per sample.
pub const ITERATIONS: usize = 16;

/// Clock edges from the accepting edge until `out_valid` is asserted.
pub const LATENCY: usize = ITERATIONS;

/// First shift amount of the hyperbolic schedule (`atanh(1)` is unbounded).
pub const HYPERBOLIC_FIRST_SHIFT: u32 = 1;

/// First hyperbolic shift amount that is executed twice. Later repeats
/// follow `k -> 3k + 1` (4, 13, 40, ...).
pub const HYPERBOLIC_FIRST_REPEAT: u32 = 4;
