#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use defmt::{Format, Formatter};

use crate::label::MixLabel;
use crate::pressure::ambient_pressure;
use crate::{AIR_FN2, BlendParameters, MixError};

#[derive(Debug, Format, Copy, Clone)]
pub struct MixRequest {
    pub depth: f64,       // m
    pub po2_ceiling: f64, // bar
    pub target_ead: Option<f64>, // m, helium blending kicks in when set
}

impl MixRequest {
    pub fn nitrox(depth: f64, po2_ceiling: f64) -> Self {
        MixRequest {
            depth,
            po2_ceiling,
            target_ead: None,
        }
    }

    pub fn trimix(depth: f64, po2_ceiling: f64, target_ead: f64) -> Self {
        MixRequest {
            depth,
            po2_ceiling,
            target_ead: Some(target_ead),
        }
    }

    /// Screens values coming straight off user controls before they reach the
    /// solver. The solver assumes a validated request apart from the ceiling
    /// re-check in [`best_mix`].
    pub fn validate(&self) -> Result<(), MixError> {
        if !self.depth.is_finite() || self.depth < 0.0 {
            return Err(MixError::InvalidDepth);
        }
        if !self.po2_ceiling.is_finite() || self.po2_ceiling <= 0.0 {
            return Err(MixError::InvalidCeiling);
        }
        if let Some(ead) = self.target_ead {
            if !ead.is_finite() || ead < 0.0 {
                return Err(MixError::InvalidEad);
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Default, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GasMix {
    pub fo2: f64,
    pub fhe: f64,
    pub fn2: f64,
}

#[cfg(not(feature = "serde"))]
#[derive(Default, Clone, Copy, Debug)]
pub struct GasMix {
    pub fo2: f64,
    pub fhe: f64,
    pub fn2: f64,
}

impl Format for GasMix {
    fn format(&self, f: Formatter) {
        defmt::write!(
            f,
            "GasMix {{ fo2: {:?}, fhe: {:?}, fn2: {:?} }}",
            self.fo2,
            self.fhe,
            self.fn2
        );
    }
}

impl GasMix {
    pub fn label(&self) -> MixLabel {
        MixLabel::for_mix(*self)
    }
}

/// Richest mix breathable at the requested depth without the ppO2 passing the
/// ceiling, with helium displacing nitrogen down to the narcosis level of air
/// at the target EAD when one is given.
///
/// Expects a request already screened by [`MixRequest::validate`]; only the
/// ceiling is re-checked here, since dividing by it with a zero or negative
/// value would produce an artifact instead of a mix.
pub fn best_mix(params: BlendParameters, request: MixRequest) -> Result<GasMix, MixError> {
    if !(request.po2_ceiling > 0.0) {
        return Err(MixError::InvalidCeiling);
    }

    let ata = ambient_pressure(params, request.depth);

    // oxygen as rich as the ceiling allows, capped at pure O2
    let mut fo2 = request.po2_ceiling / ata;
    if fo2 > 1.0 {
        fo2 = 1.0;
    }

    let mut fhe = 0.0;
    if let Some(target_ead) = request.target_ead {
        // nitrogen partial pressure a diver breathing air would carry at the
        // narcosis-equivalent depth
        let ata_ead = ambient_pressure(params, target_ead);
        let max_ppn2 = AIR_FN2 * ata_ead;
        // the same ceiling expressed as a fraction at the actual, deeper depth
        let max_fn2 = max_ppn2 / ata;
        let available_inert = 1.0 - fo2;
        if max_fn2 < available_inert {
            fhe = available_inert - max_fn2;
        }
    }

    // remainder can dip a hair below zero in floating point
    let fn2 = (1.0 - fo2 - fhe).max(0.0);

    defmt::debug!("best mix at {:?}m: o2 {:?} he {:?} n2 {:?}", request.depth, fo2, fhe, fn2);

    Ok(GasMix { fo2, fhe, fn2 })
}

#[test]
fn test_best_mix_ean35() {
    let mix = best_mix(BlendParameters::default(), MixRequest::nitrox(30.0, 1.4)).unwrap();
    assert_eq!(mix.fo2, 0.35);
    assert_eq!(mix.fhe, 0.0);
    assert_eq!(mix.fn2, 0.65);
}

#[test]
fn test_best_mix_clamps_to_pure_oxygen() {
    let mix = best_mix(BlendParameters::default(), MixRequest::nitrox(0.0, 1.4)).unwrap();
    assert_eq!(mix.fo2, 1.0);
    assert_eq!(mix.fhe, 0.0);
    assert_eq!(mix.fn2, 0.0);
}

#[test]
fn test_best_mix_trimix() {
    let mix = best_mix(BlendParameters::default(), MixRequest::trimix(50.0, 1.4, 30.0)).unwrap();
    assert!((mix.fo2 - 1.4 / 6.0).abs() < 1e-12);
    assert_eq!(mix.fhe, 0.24);
    assert!((mix.fo2 + mix.fhe + mix.fn2 - 1.0).abs() < 1e-9);
}

#[test]
fn test_trimix_with_loose_ead_adds_no_helium() {
    // target EAD at or below the narcosis of the dive itself needs no helium
    let mix = best_mix(BlendParameters::default(), MixRequest::trimix(50.0, 1.4, 60.0)).unwrap();
    assert_eq!(mix.fhe, 0.0);
}

#[test]
fn test_validate_rejects_bad_input() {
    assert_eq!(
        MixRequest::nitrox(-1.0, 1.4).validate(),
        Err(MixError::InvalidDepth)
    );
    assert_eq!(
        MixRequest::nitrox(30.0, 0.0).validate(),
        Err(MixError::InvalidCeiling)
    );
    assert_eq!(
        MixRequest::nitrox(f64::NAN, 1.4).validate(),
        Err(MixError::InvalidDepth)
    );
    assert_eq!(
        MixRequest::trimix(30.0, 1.4, -5.0).validate(),
        Err(MixError::InvalidEad)
    );
}

#[test]
fn test_solver_rejects_bypassed_ceiling() {
    let request = MixRequest {
        depth: 30.0,
        po2_ceiling: -1.4,
        target_ead: None,
    };
    let result = best_mix(BlendParameters::default(), request);
    assert_eq!(result.unwrap_err(), MixError::InvalidCeiling);
}
