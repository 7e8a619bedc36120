//! Ideal CORDIC results computed in `f64`.
//!
//! The reference includes the CORDIC gain, so it predicts exactly what a
//! perfect engine would emit for the given (possibly pre-scaled) inputs.
//! Nothing in the clocked model calls into this module.

use serde::Serialize;

use crate::common::Fixed;
use crate::common::constants::FRAC_BITS;
use crate::core::units::cordic::{CordicOutput, CordicSample, Mode, RotationType};

/// Expected output in real units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ReferenceResult {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Per-coordinate distance between an engine result and the reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct UlpError {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl UlpError {
    pub fn max(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }
}

/// Computes the result the engine converges to for `sample`.
///
/// - circular rotation: `K * R(z) * (x, y)`, `z -> 0`
/// - hyperbolic rotation: `K_h * H(z) * (x, y)`, `z -> 0`
/// - circular vectoring: `x -> K * |(x, y)|`, `y -> 0`, `z -> z + atan(y/x)`
/// - hyperbolic vectoring: `x -> K_h * sqrt(x^2 - y^2)`, `y -> 0`,
///   `z -> z + atanh(y/x)`
pub fn expected(sample: &CordicSample) -> ReferenceResult {
    let x = sample.x.to_f64();
    let y = sample.y.to_f64();
    let z = sample.z.to_f64();
    let k = sample.rot_type.gain();

    match (sample.mode, sample.rot_type) {
        (Mode::Rotation, RotationType::Circular) => {
            let (s, c) = z.sin_cos();
            ReferenceResult {
                x: k * (x * c - y * s),
                y: k * (y * c + x * s),
                z: 0.0,
            }
        }
        (Mode::Rotation, RotationType::Hyperbolic) => {
            let (s, c) = (z.sinh(), z.cosh());
            ReferenceResult {
                x: k * (x * c + y * s),
                y: k * (y * c + x * s),
                z: 0.0,
            }
        }
        (Mode::Vectoring, RotationType::Circular) => ReferenceResult {
            x: k * x.hypot(y),
            y: 0.0,
            z: z + (y / x).atan(),
        },
        (Mode::Vectoring, RotationType::Hyperbolic) => ReferenceResult {
            x: k * (x * x - y * y).sqrt(),
            y: 0.0,
            z: z + (y / x).atanh(),
        },
    }
}

/// Whether `sample` lies inside the region the fixed schedule can reach.
///
/// Outside it the engine still produces a result, just not an accurate
/// one.
pub fn in_convergence_domain(sample: &CordicSample) -> bool {
    let limit = sample.rot_type.table().convergence_limit();
    let x = sample.x.to_f64();
    let y = sample.y.to_f64();
    let z = sample.z.to_f64();

    match (sample.mode, sample.rot_type) {
        (Mode::Rotation, _) => z.abs() <= limit,
        (Mode::Vectoring, RotationType::Circular) => x > 0.0,
        (Mode::Vectoring, RotationType::Hyperbolic) => x > 0.0 && (y / x).abs() < limit.tanh(),
    }
}

fn ulps(actual: Fixed, expected: f64) -> f64 {
    (actual.to_f64() - expected).abs() * (1u32 << FRAC_BITS) as f64
}

/// Distance of `actual` from `reference` in port ULPs.
pub fn ulp_error(actual: &CordicOutput, reference: &ReferenceResult) -> UlpError {
    UlpError {
        x: ulps(actual.x, reference.x),
        y: ulps(actual.y, reference.y),
        z: ulps(actual.z, reference.z),
    }
}
