use crate::mix::GasMix;
use crate::pressure::{ambient_pressure, depth_at_pressure};
use crate::{AIR_FN2, AIR_FO2, BlendParameters, MixError};

/// Depth at which breathing air carries the same nitrogen partial pressure as
/// the given mix at the given depth. A mix leaner in nitrogen than surface air
/// reads as 0.
pub fn equivalent_air_depth(params: BlendParameters, mix: GasMix, depth: f64) -> f64 {
    let ata = ambient_pressure(params, depth);
    let ppn2 = mix.fn2 * ata;
    let ead = depth_at_pressure(params, ppn2 / AIR_FN2);
    ead.max(0.0)
}

/// Deepest depth at which the mix keeps its oxygen partial pressure at or
/// below the ceiling.
pub fn max_operating_depth(
    params: BlendParameters,
    fo2: f64,
    po2_ceiling: f64,
) -> Result<f64, MixError> {
    if !fo2.is_finite() || fo2 <= 0.0 || fo2 > 1.0 {
        return Err(MixError::InvalidFraction);
    }
    if !po2_ceiling.is_finite() || po2_ceiling <= 0.0 {
        return Err(MixError::InvalidCeiling);
    }
    Ok(depth_at_pressure(params, po2_ceiling / fo2))
}

/// Oxygen partial pressure of a mix at depth, in bar.
pub fn ppo2_at_depth(params: BlendParameters, fo2: f64, depth: f64) -> f64 {
    fo2 * ambient_pressure(params, depth)
}

#[test]
fn test_ead_of_air_is_the_depth() {
    let params = BlendParameters::default();
    let air = GasMix {
        fo2: AIR_FO2,
        fhe: 0.0,
        fn2: AIR_FN2,
    };
    let ead = equivalent_air_depth(params, air, 30.0);
    assert!((ead - 30.0).abs() < 1e-9);
}

#[test]
fn test_ead_of_nitrox_is_shallower() {
    let params = BlendParameters::default();
    let ean32 = GasMix {
        fo2: 0.32,
        fhe: 0.0,
        fn2: 0.68,
    };
    let ead = equivalent_air_depth(params, ean32, 30.0);
    assert!(ead < 30.0);
    assert!((ead - 24.430379746835442).abs() < 1e-6);
}

#[test]
fn test_ead_clamps_at_surface() {
    let params = BlendParameters::default();
    let oxygen = GasMix {
        fo2: 1.0,
        fhe: 0.0,
        fn2: 0.0,
    };
    assert_eq!(equivalent_air_depth(params, oxygen, 6.0), 0.0);
}

#[test]
fn test_mod_for_ean32() {
    let params = BlendParameters::default();
    let result = max_operating_depth(params, 0.32, 1.4).unwrap();
    assert!((result - 33.75).abs() < 1e-9);
}

#[test]
fn test_mod_rejects_bad_fraction() {
    let params = BlendParameters::default();
    assert_eq!(
        max_operating_depth(params, 0.0, 1.4),
        Err(MixError::InvalidFraction)
    );
    assert_eq!(
        max_operating_depth(params, 1.2, 1.4),
        Err(MixError::InvalidFraction)
    );
    assert_eq!(
        max_operating_depth(params, 0.32, 0.0),
        Err(MixError::InvalidCeiling)
    );
}

#[test]
fn test_ppo2_round_trips_through_mod() {
    let params = BlendParameters::default();
    let fo2 = 0.28;
    let mod_depth = max_operating_depth(params, fo2, 1.4).unwrap();
    let ppo2 = ppo2_at_depth(params, fo2, mod_depth);
    assert!((ppo2 - 1.4).abs() < 1e-9);
}
