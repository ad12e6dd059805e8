use defmt::Format;
use libm::floor;

use crate::mix::GasMix;

/// Helium percentage above which a mix is labeled as trimix.
pub const TRIMIX_HE_THRESHOLD: f64 = 0.1;
/// Width of the oxygen-percentage window around 21 labeled as plain air.
pub const AIR_O2_WINDOW: f64 = 0.5;

/// Conventional diver-facing name of a mix. Percentages are truncated, never
/// rounded up, so neighbouring mixes are not conflated into the richer label.
#[derive(Debug, Format, Copy, Clone, PartialEq, Eq)]
pub enum MixLabel {
    Air,
    Nitrox(u8),
    Trimix(u8, u8),
}

impl MixLabel {
    pub fn for_mix(mix: GasMix) -> MixLabel {
        let o2_pct = mix.fo2 * 100.0;
        let he_pct = mix.fhe * 100.0;

        if he_pct > TRIMIX_HE_THRESHOLD {
            return MixLabel::Trimix(floor(o2_pct) as u8, floor(he_pct) as u8);
        }
        // half-open window, 20.5 reads as air but 21.5 reads as EAN21
        let lo = 21.0 - AIR_O2_WINDOW;
        let hi = 21.0 + AIR_O2_WINDOW;
        if (lo..hi).contains(&o2_pct) {
            return MixLabel::Air;
        }
        MixLabel::Nitrox(floor(o2_pct) as u8)
    }
}

impl core::fmt::Display for MixLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MixLabel::Air => write!(f, "Air"),
            MixLabel::Nitrox(o2) => write!(f, "EAN{}", o2),
            MixLabel::Trimix(o2, he) => write!(f, "Tx {}/{}", o2, he),
        }
    }
}

#[test]
fn test_air_window() {
    let air = GasMix {
        fo2: 0.21,
        fhe: 0.0,
        fn2: 0.79,
    };
    assert_eq!(MixLabel::for_mix(air), MixLabel::Air);

    let lean_edge = GasMix {
        fo2: 0.205,
        fhe: 0.0,
        fn2: 0.795,
    };
    assert_eq!(MixLabel::for_mix(lean_edge), MixLabel::Air);

    let rich_edge = GasMix {
        fo2: 0.215,
        fhe: 0.0,
        fn2: 0.785,
    };
    assert_eq!(MixLabel::for_mix(rich_edge), MixLabel::Nitrox(21));
}

#[test]
fn test_nitrox_label_truncates() {
    let mix = GasMix {
        fo2: 0.329,
        fhe: 0.0,
        fn2: 0.671,
    };
    assert_eq!(MixLabel::for_mix(mix), MixLabel::Nitrox(32));
}

#[test]
fn test_trimix_label_beats_air_window() {
    // 21% O2 with real helium in it is trimix, not air
    let mix = GasMix {
        fo2: 0.21,
        fhe: 0.35,
        fn2: 0.44,
    };
    assert_eq!(MixLabel::for_mix(mix), MixLabel::Trimix(21, 35));
}

#[test]
fn test_trace_helium_stays_nitrox() {
    let mix = GasMix {
        fo2: 0.32,
        fhe: 0.0005,
        fn2: 0.6795,
    };
    assert_eq!(MixLabel::for_mix(mix), MixLabel::Nitrox(32));
}
