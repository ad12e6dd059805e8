#[cfg(feature = "std")]
use std::println;
#[cfg(feature = "serde")]
use std::vec::Vec;

#[cfg(not(feature = "serde"))]
use defmt::Format;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::mix::GasMix;
use crate::mix::{MixRequest, best_mix};
#[cfg(feature = "serde")]
use crate::pressure::ambient_pressure;
use crate::{BlendParameters, MixError};

#[cfg(feature = "serde")]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MixTable {
    pub depths: Vec<f64>,
    pub pressures: Vec<f64>,
    pub mixes: Vec<GasMix>,
}

#[cfg(not(feature = "serde"))]
#[derive(Debug, Format, Clone, Copy)]
pub struct MixTable {}

#[cfg(feature = "serde")]
impl MixTable {
    pub fn new() -> Self {
        Self {
            depths: Vec::new(),
            pressures: Vec::new(),
            mixes: Vec::new(),
        }
    }
}

#[cfg(not(feature = "serde"))]
impl MixTable {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(feature = "serde")]
impl Default for MixTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Solve the best mix for every depth from `start_depth` to `end_depth`
/// inclusive, stepping by `step` meters. The same ceiling and target EAD apply
/// to every row.
pub fn mix_table(
    params: BlendParameters,
    po2_ceiling: f64,
    target_ead: Option<f64>,
    start_depth: f64,
    end_depth: f64,
    step: f64,
) -> Result<MixTable, MixError> {
    if !(step > 0.0) || start_depth > end_depth {
        return Err(MixError::InvalidStep);
    }

    let mut table = MixTable::new();
    let mut depth = start_depth;
    loop {
        if depth > end_depth {
            break;
        }
        let request = MixRequest {
            depth,
            po2_ceiling,
            target_ead,
        };
        request.validate()?;
        let mix = best_mix(params, request)?;
        #[cfg(feature = "serde")]
        {
            table.depths.push(depth);
            table.pressures.push(ambient_pressure(params, depth));
            table.mixes.push(mix);
        }
        #[cfg(not(feature = "serde"))]
        let _ = mix;
        depth += step;
    }

    #[cfg(feature = "std")]
    println!(
        "tabulated best mixes from {}m to {}m in {}m steps",
        start_depth, end_depth, step
    );

    Ok(table)
}

#[cfg(feature = "serde")]
#[test]
fn test_mix_table_rows() {
    let table = mix_table(BlendParameters::default(), 1.4, None, 10.0, 40.0, 10.0).unwrap();
    assert_eq!(table.depths.len(), 4);
    assert_eq!(table.pressures.len(), 4);
    assert_eq!(table.mixes.len(), 4);
    // 30m row is the EAN35 scenario
    assert_eq!(table.depths[2], 30.0);
    assert_eq!(table.mixes[2].fo2, 0.35);
}

#[test]
fn test_mix_table_rejects_bad_step() {
    let result = mix_table(BlendParameters::default(), 1.4, None, 10.0, 40.0, 0.0);
    assert!(matches!(result, Err(MixError::InvalidStep)));

    let result = mix_table(BlendParameters::default(), 1.4, None, 40.0, 10.0, 5.0);
    assert!(matches!(result, Err(MixError::InvalidStep)));
}

#[test]
fn test_mix_table_rejects_bad_ceiling() {
    let result = mix_table(BlendParameters::default(), 0.0, None, 10.0, 40.0, 10.0);
    assert!(matches!(result, Err(MixError::InvalidCeiling)));
}

#[cfg(feature = "serde")]
#[test]
fn test_mix_table_serializes() {
    use std::string::String;

    let table = mix_table(BlendParameters::default(), 1.4, Some(30.0), 30.0, 60.0, 15.0).unwrap();
    let json: String = serde_json::to_string(&table).unwrap();
    assert!(json.contains("\"depths\""));
    assert!(json.contains("\"mixes\""));
    let back: MixTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back.depths.len(), table.depths.len());
}
