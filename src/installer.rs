//! Channel-map installation: turning a resolved speaker list plus coefficient rows
//! into a device's `AmbiBus`, reformatting between normalization conventions as
//! needed.
//!
//! Mirrors `SetChannelMap`: an LFE row is always zeroed (the LFE channel never carries
//! ambisonic energy), a FuMa-ordered row is permuted through [`FUMA_TO_ACN`] and
//! rescaled through [`FUMA_TO_N3D_SCALE`], an SN3D-ordered row is rescaled through
//! [`SN3D_TO_N3D_SCALE`], and an N3D row is copied straight through. A channel whose
//! label has no matching entry in the source table logs a warning and is left silent
//! rather than aborting the whole device.

use crate::ambi::{AmbiBus, ChannelConfigRow};
use crate::channel::ChannelLabel;
use crate::constants::{FUMA_TO_ACN, FUMA_TO_N3D_SCALE, MAX_OUTPUT_CHANNELS, SN3D_TO_N3D_SCALE};
use crate::error::SpatialError;
use log::warn;

/// Coefficient ordering/normalization convention of an incoming decoder row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Already ACN-ordered, N3D-normalized (straight copy).
    N3d,
    /// ACN-ordered, SN3D-normalized; rescaled via [`SN3D_TO_N3D_SCALE`] on install.
    Sn3d,
    /// FuMa channel order and normalization; reformatted via [`FUMA_TO_ACN`] and
    /// [`FUMA_TO_N3D_SCALE`] on install.
    FuMa,
}

/// One row of a channel map being installed: a device output's label together with its
/// source-format coefficients.
pub struct InstallRow<'a> {
    pub label: ChannelLabel,
    pub coeffs: &'a [f32],
}

/// Install `rows` into a coefficient-style [`AmbiBus`] in device-channel order.
///
/// `device_channels` gives the device's physical channel order; for each one,
/// `rows` is searched for a matching label. The LFE channel is always zeroed. A
/// device channel with no matching row is left zeroed and reported in the returned
/// list of unmatched labels (the caller logs these; this function never fails device
/// open).
pub fn install_channel_map(
    device_channels: &[ChannelLabel],
    rows: &[InstallRow<'_>],
    format: SourceFormat,
    coeff_count: usize,
) -> (AmbiBus, alloc_vec::Vec<ChannelLabel>) {
    let mut out_rows = [[0.0f32; crate::constants::MAX_AMBI_COEFFS]; MAX_OUTPUT_CHANNELS];
    let mut unmatched = alloc_vec::Vec::new();

    for (i, &label) in device_channels.iter().enumerate().take(MAX_OUTPUT_CHANNELS) {
        if label == ChannelLabel::Lfe {
            continue;
        }
        match rows.iter().find(|r| r.label == label) {
            Some(found) => {
                out_rows[i] = reformat_row(found.coeffs, format, coeff_count);
            }
            None => {
                let failure = SpatialError::ChannelMapMatchFailed {
                    channel: label.as_str(),
                    index: i,
                };
                warn!("{failure}");
                unmatched.push(label);
            }
        }
    }

    let bus = AmbiBus::Coefficient {
        rows: out_rows,
        num_channels: device_channels.len().min(MAX_OUTPUT_CHANNELS),
        coeff_count,
    };
    (bus, unmatched)
}

fn reformat_row(src: &[f32], format: SourceFormat, coeff_count: usize) -> ChannelConfigRow {
    let mut out = [0.0f32; crate::constants::MAX_AMBI_COEFFS];
    match format {
        SourceFormat::N3d => {
            for i in 0..coeff_count.min(src.len()) {
                out[i] = src[i];
            }
        }
        SourceFormat::Sn3d => {
            for i in 0..coeff_count.min(src.len()) {
                out[i] = src[i] / SN3D_TO_N3D_SCALE[i];
            }
        }
        SourceFormat::FuMa => {
            for (fuma_index, &acn_index) in FUMA_TO_ACN.iter().enumerate() {
                if fuma_index >= src.len() || acn_index >= coeff_count {
                    continue;
                }
                out[acn_index] = src[fuma_index] / FUMA_TO_N3D_SCALE[acn_index];
            }
        }
    }
    out
}

#[cfg(feature = "std")]
mod alloc_vec {
    pub use std::vec::Vec;
}

#[cfg(not(feature = "std"))]
mod alloc_vec {
    pub use alloc::vec::Vec;
}
