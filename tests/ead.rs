use dive_gas_blend::BlendParameters;
use dive_gas_blend::ead::{equivalent_air_depth, max_operating_depth, ppo2_at_depth};
use dive_gas_blend::mix::{GasMix, MixRequest, best_mix};

#[test]
fn test_trimix_solution_hits_its_target_ead() {
    use rand::Rng;

    // whenever the solver adds helium, the resulting mix narks exactly like
    // air at the requested equivalent depth
    let params = BlendParameters::default();
    for _ in 0..100 {
        let depth = rand::rng().random_range(30.0..100.0);
        let po2 = rand::rng().random_range(1.0..1.6);
        let target_ead = rand::rng().random_range(10.0..depth / 2.0);
        let mix = best_mix(params, MixRequest::trimix(depth, po2, target_ead)).unwrap();
        if mix.fhe > 0.0 {
            let ead = equivalent_air_depth(params, mix, depth);
            assert!(
                (ead - target_ead).abs() < 1e-6,
                "mix at {}m came out with EAD {} instead of {}",
                depth,
                ead,
                target_ead
            );
        }
    }
}

#[test]
fn test_best_mix_sits_at_its_own_mod() {
    use rand::Rng;

    // below the pure-O2 clamp, the solved fraction puts the ceiling exactly at
    // the requested depth
    let params = BlendParameters::default();
    for _ in 0..100 {
        let depth = rand::rng().random_range(10.0..100.0);
        let po2 = rand::rng().random_range(1.0..1.6);
        let mix = best_mix(params, MixRequest::nitrox(depth, po2)).unwrap();
        if mix.fo2 < 1.0 {
            let mod_depth = max_operating_depth(params, mix.fo2, po2).unwrap();
            assert!(
                (mod_depth - depth).abs() < 1e-6,
                "MOD {} for mix solved at {}",
                mod_depth,
                depth
            );
        }
    }
}

#[test]
fn test_ead_of_ean32() {
    let params = BlendParameters::default();
    let ean32 = GasMix {
        fo2: 0.32,
        fhe: 0.0,
        fn2: 0.68,
    };
    let ead = equivalent_air_depth(params, ean32, 30.0);
    assert!((ead - 24.430379746835445).abs() < 1e-9);
}

#[test]
fn test_mod_table_values() {
    let params = BlendParameters::default();
    // the usual recreational MOD figures
    assert!((max_operating_depth(params, 0.32, 1.4).unwrap() - 33.75).abs() < 1e-9);
    assert!((max_operating_depth(params, 0.36, 1.4).unwrap() - 28.888888888888886).abs() < 1e-6);
    assert!((max_operating_depth(params, 1.0, 1.6).unwrap() - 6.0).abs() < 1e-9);
}

#[test]
fn test_ppo2_at_depth() {
    let params = BlendParameters::default();
    assert!((ppo2_at_depth(params, 0.21, 30.0) - 0.84).abs() < 1e-9);
    assert!((ppo2_at_depth(params, 1.0, 6.0) - 1.6).abs() < 1e-9);
}
