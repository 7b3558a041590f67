//! Per-output-channel gain evaluators.
//!
//! Given a source's ambisonic coefficients (or ambient, or a first-order matrix) and a
//! device's decoder tables, these compute linear per-output-channel gains. There are
//! two representations per call (`_mc` for a dense coefficient-style bus, `_bf` for a
//! sparse index-style bus) so a caller can use the same decoder slot regardless of
//! whether the device bus is speaker-feed or internally ambisonic.
//!
//! Every evaluator writes exactly [`MAX_OUTPUT_CHANNELS`] floats; indices at or beyond
//! the bus's channel count are zeroed. These are pure functions with no hidden state,
//! safe to call concurrently from mixer worker threads once a device's decoder tables
//! have been published.

use crate::ambi::{AmbiBus, BfChannelConfig, ChannelConfigRow};
use crate::constants::MAX_OUTPUT_CHANNELS;
use crate::math;

/// Gains for a non-directional (ambient) source against a coefficient-style decoder.
///
/// `gains[i] = sqrt(row_i[0]) * ingain`. The square root of the W-channel average
/// provides a more perceptual average volume than the raw average, better suited to
/// non-directional gains.
pub fn ambient_gains_mc(rows: &[ChannelConfigRow], num_chans: usize, ingain: f32) -> [f32; MAX_OUTPUT_CHANNELS] {
    let mut gains = [0.0; MAX_OUTPUT_CHANNELS];
    for (i, row) in rows.iter().enumerate().take(num_chans) {
        gains[i] = math::sqrt(row[0]) * ingain;
    }
    gains
}

/// Gains for a non-directional (ambient) source against an index-style decoder.
///
/// Only channel 0 receives energy: `ingain * sqrt(2) * sum(scale_j where index_j == 0)`.
/// The `sqrt(2)` factor is a FuMa-style W-channel boost; see the open question in
/// `DESIGN.md` about whether it should still apply when the internal bus is already
/// N3D. Reproduced here verbatim from the source this core is grounded on.
pub fn ambient_gains_bf(map: &[BfChannelConfig], num_chans: usize, ingain: f32) -> [f32; MAX_OUTPUT_CHANNELS] {
    let mut gain = 0.0;
    for entry in map.iter().take(num_chans) {
        if entry.index == 0 {
            gain += entry.scale;
        }
    }
    let mut gains = [0.0; MAX_OUTPUT_CHANNELS];
    gains[0] = gain * 1.414_213_6 * ingain;
    gains
}

/// Gains for a directional source against a coefficient-style decoder.
///
/// `gains[i] = ⟨row_i[:numcoeffs], coeffs⟩ * ingain`.
pub fn panning_gains_mc(
    rows: &[ChannelConfigRow],
    num_chans: usize,
    num_coeffs: usize,
    coeffs: &[f32],
    ingain: f32,
) -> [f32; MAX_OUTPUT_CHANNELS] {
    let mut gains = [0.0; MAX_OUTPUT_CHANNELS];
    for (i, row) in rows.iter().enumerate().take(num_chans) {
        let mut gain = 0.0;
        for j in 0..num_coeffs {
            gain += row[j] * coeffs[j];
        }
        gains[i] = gain * ingain;
    }
    gains
}

/// Gains for a directional source against an index-style decoder.
///
/// `gains[i] = scale_i * coeffs[index_i] * ingain`.
pub fn panning_gains_bf(
    map: &[BfChannelConfig],
    num_chans: usize,
    coeffs: &[f32],
    ingain: f32,
) -> [f32; MAX_OUTPUT_CHANNELS] {
    let mut gains = [0.0; MAX_OUTPUT_CHANNELS];
    for (i, entry) in map.iter().enumerate().take(num_chans) {
        gains[i] = entry.scale * coeffs[entry.index] * ingain;
    }
    gains
}

/// Gains for a first-order (4-channel) matrix against a coefficient-style decoder.
///
/// `gains[i] = ⟨row_i[:4], mtx⟩ * ingain`.
pub fn first_order_gains_mc(
    rows: &[ChannelConfigRow],
    num_chans: usize,
    mtx: [f32; 4],
    ingain: f32,
) -> [f32; MAX_OUTPUT_CHANNELS] {
    let mut gains = [0.0; MAX_OUTPUT_CHANNELS];
    for (i, row) in rows.iter().enumerate().take(num_chans) {
        let mut gain = 0.0;
        for j in 0..4 {
            gain += row[j] * mtx[j];
        }
        gains[i] = gain * ingain;
    }
    gains
}

/// Gains for a first-order (4-channel) matrix against an index-style decoder.
///
/// `gains[i] = scale_i * mtx[index_i] * ingain`.
pub fn first_order_gains_bf(
    map: &[BfChannelConfig],
    num_chans: usize,
    mtx: [f32; 4],
    ingain: f32,
) -> [f32; MAX_OUTPUT_CHANNELS] {
    let mut gains = [0.0; MAX_OUTPUT_CHANNELS];
    for (i, entry) in map.iter().enumerate().take(num_chans) {
        gains[i] = entry.scale * mtx[entry.index] * ingain;
    }
    gains
}

/// Dispatch a directional panning gain computation over whichever representation
/// `bus` happens to be, branching on its tag rather than requiring the caller to know.
pub fn panning_gains(bus: &AmbiBus, coeffs: &[f32], ingain: f32) -> [f32; MAX_OUTPUT_CHANNELS] {
    match bus {
        AmbiBus::Coefficient {
            rows,
            num_channels,
            coeff_count,
        } => panning_gains_mc(rows, *num_channels, (*coeff_count).min(coeffs.len()), coeffs, ingain),
        AmbiBus::Index { map, num_channels } => panning_gains_bf(map, *num_channels, coeffs, ingain),
    }
}

/// Dispatch an ambient gain computation over whichever representation `bus` happens to
/// be.
pub fn ambient_gains(bus: &AmbiBus, ingain: f32) -> [f32; MAX_OUTPUT_CHANNELS] {
    match bus {
        AmbiBus::Coefficient { rows, num_channels, .. } => ambient_gains_mc(rows, *num_channels, ingain),
        AmbiBus::Index { map, num_channels } => ambient_gains_bf(map, *num_channels, ingain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_AMBI_COEFFS;

    fn row(first: f32) -> ChannelConfigRow {
        let mut r = [0.0; MAX_AMBI_COEFFS];
        r[0] = first;
        r
    }

    #[test]
    fn ambient_mc_takes_sqrt_of_w_coefficient() {
        let rows = [row(0.25), row(4.0)];
        let gains = ambient_gains_mc(&rows, 2, 1.0);
        assert!((gains[0] - 0.5).abs() < 1e-6);
        assert!((gains[1] - 2.0).abs() < 1e-6);
        assert_eq!(gains[2], 0.0);
    }

    #[test]
    fn ambient_bf_only_touches_channel_zero() {
        let map = [
            BfChannelConfig { scale: 0.5, index: 0 },
            BfChannelConfig { scale: 0.25, index: 0 },
            BfChannelConfig { scale: 1.0, index: 3 },
        ];
        let gains = ambient_gains_bf(&map, 3, 2.0);
        assert!((gains[0] - (0.75 * 1.414_213_6 * 2.0)).abs() < 1e-5);
        assert_eq!(gains[1], 0.0);
    }

    #[test]
    fn panning_bf_reads_through_index_and_scale() {
        let map = [BfChannelConfig { scale: 2.0, index: 1 }];
        let coeffs = [10.0, 20.0, 30.0, 40.0];
        let gains = panning_gains_bf(&map, 1, &coeffs, 1.0);
        assert!((gains[0] - 40.0).abs() < 1e-6);
    }

    #[test]
    fn first_order_mc_dot_products_first_four_entries() {
        let mut r = [0.0; MAX_AMBI_COEFFS];
        r[0] = 1.0;
        r[1] = 1.0;
        let rows = [r];
        let gains = first_order_gains_mc(&rows, 1, [1.0, 2.0, 0.0, 0.0], 1.0);
        assert!((gains[0] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn unused_channels_are_zeroed() {
        let rows = [row(1.0)];
        let gains = ambient_gains_mc(&rows, 1, 1.0);
        for &g in &gains[1..] {
            assert_eq!(g, 0.0);
        }
    }
}
