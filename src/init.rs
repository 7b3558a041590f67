//! Layout initializers: the five strategies that turn a device layout (plus optional
//! custom decoder file or HRTF dataset) into a populated [`AmbiBus`].
//!
//! Grounded on `Alc/panning.c`'s `InitPanning`/`InitCustomPanning`/`InitHQPanning`/
//! `InitHrtfPanning`/`InitUhjPanning`. Each one builds a bus; none of them owns the
//! decision of *which* strategy to use for a given device — that is
//! [`crate::renderer::RendererState::reinit`]'s job.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::ambi::{AmbiBus, BfChannelConfig};
use crate::channel::{ChannelLabel, FmtChans};
use crate::config::DecoderConf;
use crate::constants::{
    FUMA_TO_ACN, FUMA_TO_N3D_SCALE, HORIZONTAL_ACN_INDICES, MAX_AMBI_COEFFS, MAX_OUTPUT_CHANNELS,
};
use crate::decoders::{self, ChannelMapEntry, CUBE8_CFG};
use crate::error::{Result, SpatialError};
use crate::hrtf::HrtfDataset;
use crate::installer::{install_channel_map, InstallRow, SourceFormat};
use crate::speaker::resolve_speaker_name;
use log::warn;

/// Opaque handle to an externally-owned ambisonic decoder state (crossover filters,
/// distance compensation delay lines). This crate only decides *that* one is needed
/// and what order it runs at; construction is an external collaborator's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiDecoderHandle {
    pub order: u8,
    pub dual_band: bool,
}

/// Opaque handle to an externally-owned BS2B crossfeed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bs2bHandle {
    pub feed_level: u8,
}

/// Opaque handle to an externally-owned UHJ stereo encoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UhjEncoderHandle {
    pub order: u8,
}

/// Build the Dry bus for a device's built-in (non-custom) speaker layout.
///
/// `BFormat3D` devices get the fixed 4-channel FuMa→N3D/ACN passthrough bus (a
/// B-Format device is always exactly first order); every other layout looks up its
/// hardcoded FuMa decoder table and installs it via [`install_channel_map`].
pub fn init_panning(device_channels: &[ChannelLabel], device_fmt: FmtChans) -> (AmbiBus, Vec<ChannelLabel>) {
    if device_fmt == FmtChans::BFormat3D {
        return (bformat_passthrough_bus(device_channels.len()), Vec::new());
    }

    let Some((table, info)) = decoders::builtin_layout(device_fmt) else {
        return (AmbiBus::empty_coefficient(), Vec::new());
    };
    let rows = entries_as_rows(table);
    let (bus, unmatched) = install_channel_map(device_channels, &rows, SourceFormat::FuMa, info.coeff_count);
    (bus, unmatched)
}

/// Build the Dry bus from a host-parsed custom decoder file.
///
/// Validates `conf.chan_mask` fits the supported ACN range, resolves every speaker
/// name against the device's layout (failing hard on the first unrecognized one,
/// since a custom file's speaker list is user-authored and should be corrected, not
/// silently degraded), then installs the rows in the file's declared
/// [`crate::config::CoeffScale`].
pub fn init_custom_panning(
    conf: &DecoderConf,
    device_channels: &[ChannelLabel],
    device_fmt: FmtChans,
) -> Result<(AmbiBus, Vec<ChannelLabel>)> {
    if conf.chan_mask > 0xffff {
        return Err(SpatialError::ChannelMaskTooWide(conf.chan_mask));
    }

    if conf.freq_bands == 2 {
        warn!(
            "dual-band decoder: applying the high-frequency matrix only, \
             low-band/crossover mixing stays the mixer's responsibility"
        );
    }

    let mut owned_rows: Vec<(ChannelLabel, Vec<f32>)> = Vec::with_capacity(conf.speakers.len());
    for (speaker_idx, speaker) in conf.speakers.iter().enumerate() {
        let label = resolve_speaker_name(&speaker.name, device_fmt)?;
        if !device_channels.contains(&label) {
            warn!("{}", SpatialError::SpeakerLookupFailed(label.as_str()));
            continue;
        }
        let coeffs = dual_band_row(conf, speaker_idx, &speaker.coeffs);
        owned_rows.push((label, coeffs));
    }

    let rows: Vec<InstallRow<'_>> = owned_rows
        .iter()
        .map(|(label, coeffs)| InstallRow {
            label: *label,
            coeffs,
        })
        .collect();

    let format = match conf.coeff_scale {
        crate::config::CoeffScale::N3d => SourceFormat::N3d,
        crate::config::CoeffScale::Sn3d => SourceFormat::Sn3d,
        crate::config::CoeffScale::FuMa => SourceFormat::FuMa,
    };

    let coeff_count = mask_coeff_count(conf.chan_mask);
    Ok(install_channel_map(device_channels, &rows, format, coeff_count))
}

/// Apply a dual-band decoder's per-order HF gain to its high-frequency matrix row,
/// used in place of the low-band coefficients this single-band install path would
/// otherwise discard. Falls back to `base_coeffs` when the decoder is single-band or
/// the HF matrix has no row for this speaker.
fn dual_band_row(conf: &DecoderConf, speaker_idx: usize, base_coeffs: &[f32]) -> Vec<f32> {
    if conf.freq_bands != 2 {
        return base_coeffs.to_vec();
    }
    match conf.hf_matrix.get(speaker_idx) {
        Some(hf_row) => hf_row
            .iter()
            .enumerate()
            .map(|(acn, &c)| c * conf.hf_order_gain[order_of_acn(acn)])
            .collect(),
        None => base_coeffs.to_vec(),
    }
}

/// Ambisonic order (0..3) that ACN index `acn` belongs to.
fn order_of_acn(acn: usize) -> usize {
    match acn {
        0 => 0,
        1..=3 => 1,
        4..=8 => 2,
        _ => 3,
    }
}

/// Build the Dry bus for "HQ mode": like [`init_custom_panning`], but when the
/// decoder's channel mask covers only the horizontal plane, uses a sparse
/// [`AmbiBus::Index`] bus instead of a dense one, matching the source's
/// `HORIZONTAL_ACN_MASK` fast path.
pub fn init_hq_panning(
    conf: &DecoderConf,
    device_channels: &[ChannelLabel],
    device_fmt: FmtChans,
) -> Result<(AmbiBus, Vec<ChannelLabel>)> {
    if !conf.is_horizontal_only() {
        return init_custom_panning(conf, device_channels, device_fmt);
    }

    if conf.freq_bands == 2 {
        warn!(
            "dual-band decoder on the sparse horizontal-only HQ path: HF matrix/order \
             gain are not applicable to an index-style bus, using the low-band row only"
        );
    }

    let mut map = [BfChannelConfig::ZERO; MAX_OUTPUT_CHANNELS];
    let mut unmatched = Vec::new();

    for (i, &device_label) in device_channels.iter().enumerate().take(MAX_OUTPUT_CHANNELS) {
        if device_label == ChannelLabel::Lfe {
            continue;
        }
        let found = conf.speakers.iter().enumerate().find(|(_, s)| {
            resolve_speaker_name(&s.name, device_fmt)
                .map(|label| label == device_label)
                .unwrap_or(false)
        });
        match found {
            Some((speaker_idx, speaker)) => {
                let acn = HORIZONTAL_ACN_INDICES
                    .get(speaker_idx.min(HORIZONTAL_ACN_INDICES.len() - 1))
                    .copied()
                    .unwrap_or(0);
                let scale = speaker.coeffs.first().copied().unwrap_or(1.0);
                map[i] = BfChannelConfig { scale, index: acn };
            }
            None => unmatched.push(device_label),
        }
    }

    Ok((
        AmbiBus::Index {
            map,
            num_channels: device_channels.len().min(MAX_OUTPUT_CHANNELS),
        },
        unmatched,
    ))
}

/// Build the 8-point virtual-speaker Dry bus feeding HRTF convolution.
///
/// The dataset itself is an external collaborator — this only decides that HRTF
/// panning is in effect and returns the (fixed) cube decoder plus a cube-direction
/// list the caller feeds to [`HrtfDataset::nearest`] once per virtual speaker to fetch
/// HRIR coefficients for the mixer.
pub fn init_hrtf_panning(dataset: &dyn HrtfDataset) -> (AmbiBus, Vec<(ChannelLabel, f32, f32)>) {
    let rows = entries_as_rows(&CUBE8_CFG);
    let device_channels: Vec<ChannelLabel> = decoders::CUBE_POSITIONS.iter().map(|&(l, _, _)| l).collect();
    let (bus, _unmatched) = install_channel_map(&device_channels, &rows, SourceFormat::FuMa, 4);

    let directions = decoders::CUBE_POSITIONS
        .iter()
        .filter_map(|&(label, az, el)| {
            if dataset.nearest(az, el).is_some() {
                Some((label, az, el))
            } else {
                None
            }
        })
        .collect();

    (bus, directions)
}

/// Build the stereo Dry bus for UHJ rendering, plus the handle the caller should use
/// to construct the external UHJ encoder state.
///
/// UHJ is always a first-order, 2-channel front-stage encode: the bus itself is
/// identical to plain stereo panning, the difference is entirely in what the external
/// encoder does with the two channels downstream.
pub fn init_uhj_panning(device_channels: &[ChannelLabel]) -> (AmbiBus, UhjEncoderHandle) {
    let rows = entries_as_rows(&decoders::STEREO_CFG);
    let (bus, _unmatched) = install_channel_map(device_channels, &rows, SourceFormat::FuMa, 4);
    (bus, UhjEncoderHandle { order: 1 })
}

/// Effect-slot channel map: a fixed identity map from ambisonic channel to effect-send
/// channel, reset whenever a device's processing order changes.
///
/// Supplements the main Dry/FOAOut buses — grounded on `aluInitEffectPanning`, which
/// resets every effect slot's internal ambisonic-to-ambisonic passthrough map whenever
/// the device reinitializes.
#[derive(Debug, Clone)]
pub struct EffectChannelMap {
    pub map: [BfChannelConfig; MAX_AMBI_COEFFS],
    pub num_channels: usize,
}

impl EffectChannelMap {
    /// Rebuild as an identity map over the first `num_channels` ACN channels.
    pub fn reset(num_channels: usize) -> Self {
        let mut map = [BfChannelConfig::ZERO; MAX_AMBI_COEFFS];
        for (i, entry) in map.iter_mut().enumerate().take(num_channels) {
            *entry = BfChannelConfig::identity(i);
        }
        Self { map, num_channels }
    }
}

fn entries_as_rows(table: &[ChannelMapEntry]) -> Vec<InstallRow<'_>> {
    table
        .iter()
        .map(|entry| InstallRow {
            label: entry.label,
            coeffs: &entry.coeffs[..],
        })
        .collect()
}

/// The 4-channel B-Format passthrough bus: `Index = FuMa2ACN[i]`,
/// `Scale = 1 / FuMa2N3DScale[acn]`, exactly as `InitPanning`'s `BFormat3D` branch
/// hardcodes it. A B-Format device is always first-order regardless of any
/// requested decoder order.
fn bformat_passthrough_bus(num_channels: usize) -> AmbiBus {
    let count = num_channels.min(4);
    let mut map = [BfChannelConfig::ZERO; MAX_OUTPUT_CHANNELS];
    for (i, entry) in map.iter_mut().enumerate().take(count) {
        let acn = FUMA_TO_ACN[i];
        *entry = BfChannelConfig {
            scale: 1.0 / FUMA_TO_N3D_SCALE[acn],
            index: acn,
        };
    }
    AmbiBus::Index { map, num_channels: count }
}

fn mask_coeff_count(mask: u32) -> usize {
    (32 - mask.leading_zeros()) as usize
}
