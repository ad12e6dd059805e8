use crate::BlendParameters;

/// Ambient pressure in bar at a depth in meters of seawater.
pub fn ambient_pressure(params: BlendParameters, depth: f64) -> f64 {
    depth / params.meters_per_atm + params.surface_pressure
}

/// Depth in meters at which the water column reaches the given ambient pressure.
pub fn depth_at_pressure(params: BlendParameters, pressure: f64) -> f64 {
    (pressure - params.surface_pressure) * params.meters_per_atm
}

#[test]
fn test_surface_pressure() {
    let params = BlendParameters::default();
    assert_eq!(ambient_pressure(params, 0.0), 1.0);
}

#[test]
fn test_pressure_at_depth() {
    let params = BlendParameters::default();
    assert_eq!(ambient_pressure(params, 30.0), 4.0);
    assert_eq!(ambient_pressure(params, 50.0), 6.0);
}

#[test]
fn test_pressure_round_trip() {
    let params = BlendParameters::default();
    let depth = 42.0;
    let pressure = ambient_pressure(params, depth);
    assert!((depth_at_pressure(params, pressure) - depth).abs() < 1e-9);
}

#[test]
fn test_seawater_constant() {
    // with the physical seawater constant 30m sits a touch under 4 bar
    let params = BlendParameters::new(10.06, 1.0);
    let pressure = ambient_pressure(params, 30.0);
    assert!(pressure < 4.0);
    assert!(pressure > 3.9);
}
