//! Normalization, ordering, and sizing constants.
//!
//! These values are part of the renderer's public acoustic contract: the normalization
//! table values are compiled-in constants, documented at their definition site, and
//! must match the source text to at least 6 significant digits. They originate from
//! `Alc/panning.c` in the OpenAL Soft source this core's behavior is grounded on.

/// Ambisonic coefficient count through third order: `(3+1)^2`.
pub const MAX_AMBI_COEFFS: usize = 16;

/// Maximum number of physical output channels a device can have.
pub const MAX_OUTPUT_CHANNELS: usize = 16;

/// Attenuation applied when deriving the first-order-out bus from a 0th-order decoder.
pub const ZERO_ORDER_SCALE: f32 = 0.0;
/// Attenuation applied when deriving the first-order-out bus from a 1st-order decoder.
pub const FIRST_ORDER_SCALE: f32 = 1.0;
/// Attenuation applied when deriving the first-order-out bus from a 2nd-order decoder.
pub const SECOND_ORDER_SCALE: f32 = 1.0 / 1.22474;
/// Attenuation applied when deriving the first-order-out bus from a 3rd-order decoder.
pub const THIRD_ORDER_SCALE: f32 = 1.0 / 1.30657;

/// Bitmask selecting the purely-horizontal ACN subset `{0, 1, 3, 4, 8, 9, 15}`.
///
/// Used by [`crate::init::init_hq_panning`] to decide whether a decoder config needs a
/// full periphonic (elevated) ACN mapping or can use the sparse horizontal-only index
/// table.
pub const HORIZONTAL_ACN_MASK: u32 = 0x831b;

/// Permutation from FuMa channel order to ACN index.
///
/// FuMa orders its first 16 channels as W, X, Y, Z, R, S, T, U, V, K, L, M, N, O, P, Q;
/// `FUMA_TO_ACN[i]` gives the ACN index that FuMa channel `i` corresponds to.
pub const FUMA_TO_ACN: [usize; MAX_AMBI_COEFFS] = [
    0,  // W
    3,  // X
    1,  // Y
    2,  // Z
    6,  // R
    7,  // S
    5,  // T
    8,  // U
    4,  // V
    12, // K
    13, // L
    11, // M
    14, // N
    10, // O
    15, // P
    9,  // Q
];

/// Identity scale table, used when a decoder file declares its coefficients in N3D
/// directly (no conversion needed).
pub const UNIT_SCALE: [f32; MAX_AMBI_COEFFS] = [1.0; MAX_AMBI_COEFFS];

/// Per-ACN-index scale factor converting SN3D-normalized coefficients to N3D:
/// `sqrt(2*l + 1)` for the order `l` that ACN index belongs to.
pub const SN3D_TO_N3D_SCALE: [f32; MAX_AMBI_COEFFS] = [
    1.000_000_0, // ACN  0 (W), sqrt(1)
    1.732_050_8, // ACN  1 (Y), sqrt(3)
    1.732_050_8, // ACN  2 (Z), sqrt(3)
    1.732_050_8, // ACN  3 (X), sqrt(3)
    2.236_068_0, // ACN  4 (V), sqrt(5)
    2.236_068_0, // ACN  5 (T), sqrt(5)
    2.236_068_0, // ACN  6 (R), sqrt(5)
    2.236_068_0, // ACN  7 (S), sqrt(5)
    2.236_068_0, // ACN  8 (U), sqrt(5)
    2.645_751_3, // ACN  9 (Q), sqrt(7)
    2.645_751_3, // ACN 10 (O), sqrt(7)
    2.645_751_3, // ACN 11 (M), sqrt(7)
    2.645_751_3, // ACN 12 (K), sqrt(7)
    2.645_751_3, // ACN 13 (L), sqrt(7)
    2.645_751_3, // ACN 14 (N), sqrt(7)
    2.645_751_3, // ACN 15 (P), sqrt(7)
];

/// Per-ACN-index scale factor converting FuMa-normalized coefficients to N3D.
///
/// Decoder coefficients produced in FuMa convention should be divided by this table to
/// get proper N3D scalings.
pub const FUMA_TO_N3D_SCALE: [f32; MAX_AMBI_COEFFS] = [
    1.414_213_6, // ACN  0 (W), sqrt(2)
    1.732_050_8, // ACN  1 (Y), sqrt(3)
    1.732_050_8, // ACN  2 (Z), sqrt(3)
    1.732_050_8, // ACN  3 (X), sqrt(3)
    1.936_491_7, // ACN  4 (V), sqrt(15)/2
    1.936_491_7, // ACN  5 (T), sqrt(15)/2
    2.236_068_0, // ACN  6 (R), sqrt(5)
    1.936_491_7, // ACN  7 (S), sqrt(15)/2
    1.936_491_7, // ACN  8 (U), sqrt(15)/2
    2.091_650_1, // ACN  9 (Q), sqrt(35/8)
    1.972_026_6, // ACN 10 (O), sqrt(35)/3
    2.231_093_4, // ACN 11 (M), sqrt(224/45)
    2.645_751_3, // ACN 12 (K), sqrt(7)
    2.231_093_4, // ACN 13 (L), sqrt(224/45)
    1.972_026_6, // ACN 14 (N), sqrt(35)/3
    2.091_650_1, // ACN 15 (P), sqrt(35/8)
];

/// Sparse index table used by the horizontal-only branch of
/// [`crate::init::init_hq_panning`]: ACN indices for orders 0..3 restricted to the
/// horizontal plane.
pub const HORIZONTAL_ACN_INDICES: [usize; 7] = [0, 1, 3, 4, 8, 9, 15];
