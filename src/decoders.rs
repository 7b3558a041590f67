//! Built-in speaker-feed decoder tables.
//!
//! Seven FuMa-normalized `ChannelMap` tables (Mono/Stereo/Quad/X51-side/X51-rear/X61/
//! X71) plus the 8-point cube used for HRTF virtualization, reproduced verbatim from
//! `Alc/panning.c` — they originate from the Ambisonic Decoder Toolbox and are part of
//! the renderer's acoustic identity. Each row is a partial `ChannelConfig`: entries
//! omitted here are implicitly zero, matching the source's aggregate-initializer
//! style.

use crate::channel::ChannelLabel;
use crate::constants::MAX_AMBI_COEFFS;

/// One entry in a built-in or decoder-file-derived channel map: a speaker label paired
/// with its (partial) FuMa-normalized coefficient row.
#[derive(Debug, Clone, Copy)]
pub struct ChannelMapEntry {
    pub label: ChannelLabel,
    pub coeffs: [f32; MAX_AMBI_COEFFS],
}

const fn row(values: &[f32]) -> [f32; MAX_AMBI_COEFFS] {
    let mut out = [0.0f32; MAX_AMBI_COEFFS];
    let mut i = 0;
    while i < values.len() {
        out[i] = values[i];
        i += 1;
    }
    out
}

/// Mono: a single, centered, omnidirectional channel.
pub const MONO_CFG: [ChannelMapEntry; 1] = [ChannelMapEntry {
    label: ChannelLabel::FrontCenter,
    coeffs: row(&[1.414_213_6]),
}];

/// Stereo: equal-power front left/right.
pub const STEREO_CFG: [ChannelMapEntry; 2] = [
    ChannelMapEntry {
        label: ChannelLabel::FrontLeft,
        coeffs: row(&[0.707_106_8, 0.0, 0.5, 0.0]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontRight,
        coeffs: row(&[0.707_106_8, 0.0, -0.5, 0.0]),
    },
];

/// Quad: front left/right, back left/right.
pub const QUAD_CFG: [ChannelMapEntry; 4] = [
    ChannelMapEntry {
        label: ChannelLabel::FrontLeft,
        coeffs: row(&[0.353_553, 0.306_184, 0.306_184, 0.0, 0.0, 0.0, 0.0, 0.0, 0.117_186]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontRight,
        coeffs: row(&[0.353_553, 0.306_184, -0.306_184, 0.0, 0.0, 0.0, 0.0, 0.0, -0.117_186]),
    },
    ChannelMapEntry {
        label: ChannelLabel::BackLeft,
        coeffs: row(&[0.353_553, -0.306_184, 0.306_184, 0.0, 0.0, 0.0, 0.0, 0.0, -0.117_186]),
    },
    ChannelMapEntry {
        label: ChannelLabel::BackRight,
        coeffs: row(&[0.353_553, -0.306_184, -0.306_184, 0.0, 0.0, 0.0, 0.0, 0.0, 0.117_186]),
    },
];

/// 5.1, side-surround variant (`LS`/`RS`).
pub const X51_SIDE_CFG: [ChannelMapEntry; 5] = [
    ChannelMapEntry {
        label: ChannelLabel::FrontLeft,
        coeffs: row(&[
            0.208_954, 0.199_518, 0.223_424, 0.0, 0.0, 0.0, 0.0, -0.012_543, 0.144_260,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontRight,
        coeffs: row(&[
            0.208_950, 0.199_514, -0.223_425, 0.0, 0.0, 0.0, 0.0, -0.012_544, -0.144_258,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontCenter,
        coeffs: row(&[
            0.109_403, 0.168_250, -0.000_002, 0.0, 0.0, 0.0, 0.0, 0.100_431, -0.000_001,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::SideLeft,
        coeffs: row(&[
            0.470_934, -0.346_484, 0.327_504, 0.0, 0.0, 0.0, 0.0, -0.022_188, -0.041_113,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::SideRight,
        coeffs: row(&[
            0.470_936, -0.346_480, -0.327_507, 0.0, 0.0, 0.0, 0.0, -0.022_186, 0.041_114,
        ]),
    },
];

/// 5.1, rear-surround variant (`LB`/`RB`).
pub const X51_REAR_CFG: [ChannelMapEntry; 5] = [
    ChannelMapEntry {
        label: ChannelLabel::FrontLeft,
        coeffs: row(&[
            0.208_954, 0.199_518, 0.223_424, 0.0, 0.0, 0.0, 0.0, -0.012_543, 0.144_260,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontRight,
        coeffs: row(&[
            0.208_950, 0.199_514, -0.223_425, 0.0, 0.0, 0.0, 0.0, -0.012_544, -0.144_258,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontCenter,
        coeffs: row(&[
            0.109_403, 0.168_250, -0.000_002, 0.0, 0.0, 0.0, 0.0, 0.100_431, -0.000_001,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::BackLeft,
        coeffs: row(&[
            0.470_934, -0.346_484, 0.327_504, 0.0, 0.0, 0.0, 0.0, -0.022_188, -0.041_113,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::BackRight,
        coeffs: row(&[
            0.470_936, -0.346_480, -0.327_507, 0.0, 0.0, 0.0, 0.0, -0.022_186, 0.041_114,
        ]),
    },
];

/// 6.1: third-order periphonic decoder.
pub const X61_CFG: [ChannelMapEntry; 6] = [
    ChannelMapEntry {
        label: ChannelLabel::FrontLeft,
        coeffs: row(&[
            0.167_065, 0.200_583, 0.172_695, 0.0, 0.0, 0.0, 0.0, 0.029_855, 0.186_407, 0.0, 0.0, 0.0, 0.0, 0.0,
            -0.039_241, 0.068_910,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontRight,
        coeffs: row(&[
            0.167_065, 0.200_583, -0.172_695, 0.0, 0.0, 0.0, 0.0, 0.029_855, -0.186_407, 0.0, 0.0, 0.0, 0.0, 0.0,
            -0.039_241, -0.068_910,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontCenter,
        coeffs: row(&[
            0.109_403, 0.179_490, 0.0, 0.0, 0.0, 0.0, 0.0, 0.142_031, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.072_024, 0.0,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::BackCenter,
        coeffs: row(&[
            0.353_556, -0.461_940, 0.0, 0.0, 0.0, 0.0, 0.0, 0.165_723, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::SideLeft,
        coeffs: row(&[
            0.289_151, -0.081_301, 0.401_292, 0.0, 0.0, 0.0, 0.0, -0.188_208, -0.071_420, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.010_099, -0.032_897,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::SideRight,
        coeffs: row(&[
            0.289_151, -0.081_301, -0.401_292, 0.0, 0.0, 0.0, 0.0, -0.188_208, 0.071_420, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.010_099, 0.032_897,
        ]),
    },
];

/// 7.1: third-order periphonic decoder.
pub const X71_CFG: [ChannelMapEntry; 7] = [
    ChannelMapEntry {
        label: ChannelLabel::FrontLeft,
        coeffs: row(&[
            0.167_065, 0.200_583, 0.172_695, 0.0, 0.0, 0.0, 0.0, 0.029_855, 0.186_407, 0.0, 0.0, 0.0, 0.0, 0.0,
            -0.039_241, 0.068_910,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontRight,
        coeffs: row(&[
            0.167_065, 0.200_583, -0.172_695, 0.0, 0.0, 0.0, 0.0, 0.029_855, -0.186_407, 0.0, 0.0, 0.0, 0.0, 0.0,
            -0.039_241, -0.068_910,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::FrontCenter,
        coeffs: row(&[
            0.109_403, 0.179_490, 0.0, 0.0, 0.0, 0.0, 0.0, 0.142_031, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.072_024, 0.0,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::BackLeft,
        coeffs: row(&[
            0.224_752, -0.295_009, 0.170_325, 0.0, 0.0, 0.0, 0.0, 0.105_349, -0.182_473, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.065_799,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::BackRight,
        coeffs: row(&[
            0.224_752, -0.295_009, -0.170_325, 0.0, 0.0, 0.0, 0.0, 0.105_349, 0.182_473, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            -0.065_799,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::SideLeft,
        coeffs: row(&[
            0.224_739, 0.0, 0.340_644, 0.0, 0.0, 0.0, 0.0, -0.210_697, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.065_795,
        ]),
    },
    ChannelMapEntry {
        label: ChannelLabel::SideRight,
        coeffs: row(&[
            0.224_739, 0.0, -0.340_644, 0.0, 0.0, 0.0, 0.0, -0.210_697, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.065_795,
        ]),
    },
];

/// The 8 cube-corner positions used by HRTF virtualization: azimuth/elevation in
/// radians, both ±45°.
pub const CUBE_POSITIONS: [(ChannelLabel, f32, f32); 8] = {
    const DEG45: f32 = 45.0 * core::f32::consts::PI / 180.0;
    const DEG135: f32 = 135.0 * core::f32::consts::PI / 180.0;
    [
        (ChannelLabel::UpperFrontLeft, -DEG45, DEG45),
        (ChannelLabel::UpperFrontRight, DEG45, DEG45),
        (ChannelLabel::UpperBackLeft, -DEG135, DEG45),
        (ChannelLabel::UpperBackRight, DEG135, DEG45),
        (ChannelLabel::LowerFrontLeft, -DEG45, -DEG45),
        (ChannelLabel::LowerFrontRight, DEG45, -DEG45),
        (ChannelLabel::LowerBackLeft, -DEG135, -DEG45),
        (ChannelLabel::LowerBackRight, DEG135, -DEG45),
    ]
};

/// First-order-only FuMa decoder feeding the 8 cube corners, used by
/// [`crate::init::init_hrtf_panning`].
pub const CUBE8_CFG: [ChannelMapEntry; 8] = [
    ChannelMapEntry {
        label: ChannelLabel::UpperFrontLeft,
        coeffs: row(&[0.176_776_7, 0.072_168_78, 0.072_168_78, 0.072_168_78]),
    },
    ChannelMapEntry {
        label: ChannelLabel::UpperFrontRight,
        coeffs: row(&[0.176_776_7, 0.072_168_78, -0.072_168_78, 0.072_168_78]),
    },
    ChannelMapEntry {
        label: ChannelLabel::UpperBackLeft,
        coeffs: row(&[0.176_776_7, -0.072_168_78, 0.072_168_78, 0.072_168_78]),
    },
    ChannelMapEntry {
        label: ChannelLabel::UpperBackRight,
        coeffs: row(&[0.176_776_7, -0.072_168_78, -0.072_168_78, 0.072_168_78]),
    },
    ChannelMapEntry {
        label: ChannelLabel::LowerFrontLeft,
        coeffs: row(&[0.176_776_7, 0.072_168_78, 0.072_168_78, -0.072_168_78]),
    },
    ChannelMapEntry {
        label: ChannelLabel::LowerFrontRight,
        coeffs: row(&[0.176_776_7, 0.072_168_78, -0.072_168_78, -0.072_168_78]),
    },
    ChannelMapEntry {
        label: ChannelLabel::LowerBackLeft,
        coeffs: row(&[0.176_776_7, -0.072_168_78, 0.072_168_78, -0.072_168_78]),
    },
    ChannelMapEntry {
        label: ChannelLabel::LowerBackRight,
        coeffs: row(&[0.176_776_7, -0.072_168_78, -0.072_168_78, -0.072_168_78]),
    },
];

/// Per-layout metadata: decoder coefficient count and the first-order-out attenuation
/// to apply when deriving FOAOut from this layout's Dry bus.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInfo {
    pub coeff_count: usize,
    pub ambiscale: f32,
}

use crate::channel::FmtChans;
use crate::constants::{FIRST_ORDER_SCALE, SECOND_ORDER_SCALE, THIRD_ORDER_SCALE, ZERO_ORDER_SCALE};

/// Return the built-in channel map and layout metadata for a non-stereo, non-BFormat
/// `FmtChans`. Returns `None` for `Mono`/`Stereo`/`BFormat3D`, which either use a
/// single-entry table handled inline or don't use a built-in `ChannelMap` at all.
pub fn builtin_layout(fmt: FmtChans) -> Option<(&'static [ChannelMapEntry], LayoutInfo)> {
    match fmt {
        FmtChans::Mono => Some((
            &MONO_CFG,
            LayoutInfo {
                coeff_count: 1,
                ambiscale: ZERO_ORDER_SCALE,
            },
        )),
        FmtChans::Stereo => Some((
            &STEREO_CFG,
            LayoutInfo {
                coeff_count: 4,
                ambiscale: FIRST_ORDER_SCALE,
            },
        )),
        FmtChans::Quad => Some((
            &QUAD_CFG,
            LayoutInfo {
                coeff_count: 9,
                ambiscale: SECOND_ORDER_SCALE,
            },
        )),
        FmtChans::X51 => Some((
            &X51_SIDE_CFG,
            LayoutInfo {
                coeff_count: 9,
                ambiscale: SECOND_ORDER_SCALE,
            },
        )),
        FmtChans::X51Rear => Some((
            &X51_REAR_CFG,
            LayoutInfo {
                coeff_count: 9,
                ambiscale: SECOND_ORDER_SCALE,
            },
        )),
        FmtChans::X61 => Some((
            &X61_CFG,
            LayoutInfo {
                coeff_count: 16,
                ambiscale: THIRD_ORDER_SCALE,
            },
        )),
        FmtChans::X71 => Some((
            &X71_CFG,
            LayoutInfo {
                coeff_count: 16,
                ambiscale: THIRD_ORDER_SCALE,
            },
        )),
        FmtChans::BFormat3D => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stereo_cfg_has_left_and_right() {
        assert_eq!(STEREO_CFG[0].label, ChannelLabel::FrontLeft);
        assert_eq!(STEREO_CFG[1].label, ChannelLabel::FrontRight);
        assert!((STEREO_CFG[0].coeffs[0] - 0.707_106_8).abs() < 1e-5);
    }

    #[test]
    fn cube8_labels_match_cube_positions() {
        for (entry, &(label, _, _)) in CUBE8_CFG.iter().zip(CUBE_POSITIONS.iter()) {
            assert_eq!(entry.label, label);
        }
    }

    #[test]
    fn builtin_layout_returns_none_for_stereo_and_bformat_variants() {
        // Stereo *does* have a builtin layout (used by InitPanning fallback), but
        // BFormat3D never does: it takes the dedicated B-format branch instead.
        assert!(builtin_layout(FmtChans::BFormat3D).is_none());
        assert!(builtin_layout(FmtChans::Stereo).is_some());
    }

    #[test]
    fn x71_layout_reports_third_order_coeff_count() {
        let (_, info) = builtin_layout(FmtChans::X71).unwrap();
        assert_eq!(info.coeff_count, 16);
        assert!((info.ambiscale - THIRD_ORDER_SCALE).abs() < 1e-6);
    }
}
