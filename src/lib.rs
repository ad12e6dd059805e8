#![no_std]

use defmt::Format;

#[cfg(feature = "std")]
extern crate std;

pub mod ead;
pub mod label;
pub mod mix;
pub mod pressure;
pub mod table;

/// Nitrogen fraction of atmospheric air, the narcosis baseline for EAD math.
pub const AIR_FN2: f64 = 0.79;
/// Oxygen fraction of atmospheric air.
pub const AIR_FO2: f64 = 0.21;

#[derive(Debug, Format, Copy, Clone)]
pub struct BlendParameters {
    pub meters_per_atm: f64,   // m of seawater per atmosphere
    pub surface_pressure: f64, // bar
}

impl BlendParameters {
    pub fn new(meters_per_atm: f64, surface_pressure: f64) -> Self {
        BlendParameters {
            meters_per_atm,
            surface_pressure,
        }
    }
}

impl Default for BlendParameters {
    // 10 m/atm is the classic rule of thumb; seawater is closer to 10.06.
    // Callers that want the physical value set meters_per_atm themselves.
    fn default() -> Self {
        BlendParameters {
            meters_per_atm: 10.0,
            surface_pressure: 1.0,
        }
    }
}

#[derive(Debug, Format, Copy, Clone, PartialEq, Eq)]
pub enum MixError {
    InvalidDepth,
    InvalidCeiling,
    InvalidEad,
    InvalidFraction,
    InvalidStep,
}

impl core::fmt::Display for MixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDepth => write!(f, "depth must be a finite, non-negative number"),
            Self::InvalidCeiling => write!(f, "ppO2 ceiling must be a finite, positive number"),
            Self::InvalidEad => write!(f, "target EAD must be a finite, non-negative number"),
            Self::InvalidFraction => write!(f, "gas fraction must be between 0.0 and 1.0"),
            Self::InvalidStep => write!(f, "depth step must be positive and start <= end"),
        }
    }
}

#[test]
fn test_default_parameters() {
    let params = BlendParameters::default();
    assert_eq!(params.meters_per_atm, 10.0);
    assert_eq!(params.surface_pressure, 1.0);
}
