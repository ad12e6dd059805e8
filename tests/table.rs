use dive_gas_blend::table::mix_table;
use dive_gas_blend::{BlendParameters, MixError};

#[cfg(feature = "serde")]
#[test]
fn test_table_oxygen_leans_with_depth() {
    let params = BlendParameters::default();
    let table = mix_table(params, 1.4, None, 10.0, 60.0, 5.0).unwrap();
    for pair in table.mixes.windows(2) {
        assert!(
            pair[1].fo2 <= pair[0].fo2,
            "oxygen fraction rose with depth: {} -> {}",
            pair[0].fo2,
            pair[1].fo2
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_table_includes_end_depth() {
    let params = BlendParameters::default();
    let table = mix_table(params, 1.4, None, 0.0, 30.0, 10.0).unwrap();
    assert_eq!(table.depths.first(), Some(&0.0));
    assert_eq!(table.depths.last(), Some(&30.0));
    assert_eq!(table.pressures.last(), Some(&4.0));
}

#[test]
fn test_table_step_validation() {
    let params = BlendParameters::default();
    assert!(matches!(
        mix_table(params, 1.4, None, 0.0, 30.0, -1.0),
        Err(MixError::InvalidStep)
    ));
    assert!(matches!(
        mix_table(params, 1.4, None, 30.0, 0.0, 5.0),
        Err(MixError::InvalidStep)
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_write_mix_table_csv() {
    use csv::Writer;

    let params = BlendParameters::default();
    let table = mix_table(params, 1.4, Some(30.0), 30.0, 75.0, 3.0).unwrap();

    let mut wtr = Writer::from_path("mix_table.csv").unwrap();
    let _ = wtr.write_record(&["depth_m", "ata", "o2", "he", "n2", "label"]);
    for i in 0..table.depths.len() {
        let mix = table.mixes[i];
        let _ = wtr.write_field(table.depths[i].to_string());
        let _ = wtr.write_field(table.pressures[i].to_string());
        let _ = wtr.write_field(mix.fo2.to_string());
        let _ = wtr.write_field(mix.fhe.to_string());
        let _ = wtr.write_field(mix.fn2.to_string());
        let _ = wtr.write_field(mix.label().to_string());
        let _ = wtr.write_record(None::<&[u8]>);
    }
    let _ = wtr.flush();

    assert_eq!(table.depths.len(), 16);
}
