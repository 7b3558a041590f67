//! Configuration surface: the key/value lookup contract and the custom ambisonic
//! decoder file shape.
//!
//! The renderer never parses a config file or reads the environment itself — a host
//! application supplies a [`ConfigSource`] implementation scoped to a device, and
//! custom-decoder files are handed in already parsed as [`DecoderConf`]. Both are
//! external collaborators per the design notes; this module only defines the
//! contracts and data shapes.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use serde::Deserialize;

/// Host-supplied key/value configuration lookup, scoped by device and section.
///
/// Mirrors the `ConfigValueExists`/`GetConfigValue` family: every getter returns
/// `None` when the key is absent rather than an error, since an absent key always
/// means "use the built-in default," never a failure.
pub trait ConfigSource {
    /// Look up a string-valued config key under `section` (empty for the device's
    /// top-level section).
    fn get_str(&self, section: &str, key: &str) -> Option<&str>;

    /// Look up a boolean-valued config key, parsed by the host from its own on/off
    /// vocabulary.
    fn get_bool(&self, section: &str, key: &str) -> Option<bool>;

    /// Look up an integer-valued config key.
    fn get_int(&self, section: &str, key: &str) -> Option<i64>;

    /// Look up a float-valued config key.
    fn get_float(&self, section: &str, key: &str) -> Option<f32>;
}

/// Host-supplied loader that turns a decoder-file path (as returned by
/// `ConfigSource::get_str("decoder", ...)`) into a parsed [`DecoderConf`].
///
/// Mirrors the external `ambdec` parser's entry point: this crate never reads a file
/// itself, it only asks the host to resolve a path it already looked up.
pub trait DecoderFileLoader {
    /// Parse the decoder file at `path`, or `None` if it can't be found or parsed.
    fn load(&self, path: &str) -> Option<DecoderConf>;
}

/// A `ConfigSource` with nothing configured; every lookup falls through to defaults.
/// Useful for tests and for Loopback devices, which never consult free-text config.
pub struct EmptyConfig;

impl ConfigSource for EmptyConfig {
    fn get_str(&self, _section: &str, _key: &str) -> Option<&str> {
        None
    }
    fn get_bool(&self, _section: &str, _key: &str) -> Option<bool> {
        None
    }
    fn get_int(&self, _section: &str, _key: &str) -> Option<i64> {
        None
    }
    fn get_float(&self, _section: &str, _key: &str) -> Option<f32> {
        None
    }
}

/// Normalization convention a custom decoder file's coefficients are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoeffScale {
    N3d,
    Sn3d,
    #[serde(rename = "fuma")]
    FuMa,
}

/// One speaker row of a custom decoder file: a speaker name (resolved via
/// [`crate::speaker::resolve_speaker_name`]) paired with its coefficient row.
#[derive(Debug, Clone, Deserialize)]
pub struct DecoderSpeaker {
    pub name: String,
    pub coeffs: Vec<f32>,
}

/// A parsed custom ambisonic decoder configuration, as produced by a host's config
/// file parser and handed to [`crate::init::init_custom_panning`].
///
/// Field shape mirrors `AmbDecConf`: a speaker list, the coefficient normalization
/// they're written in, the ACN channel mask they cover, and an optional dual-band
/// (low/high-frequency) crossover split.
#[derive(Debug, Clone, Deserialize)]
pub struct DecoderConf {
    pub num_speakers: usize,
    pub speakers: Vec<DecoderSpeaker>,
    pub coeff_scale: CoeffScale,
    pub chan_mask: u32,
    /// 1 for single-band, 2 for dual-band (low/high-frequency) decoders.
    pub freq_bands: u8,
    /// Per-order high-frequency gain compensation, used only when `freq_bands == 2`.
    pub hf_order_gain: [f32; 4],
    /// High-frequency-band coefficient rows, one per speaker, used only when
    /// `freq_bands == 2`.
    #[serde(default)]
    pub hf_matrix: Vec<Vec<f32>>,
    /// Crossover frequency in Hz between the low and high decoder bands.
    #[serde(default)]
    pub xover_freq: f32,
}

impl DecoderConf {
    /// `true` if `chan_mask` selects only the purely-horizontal ACN subset.
    pub fn is_horizontal_only(&self) -> bool {
        self.chan_mask & !crate::constants::HORIZONTAL_ACN_MASK == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_has_no_values() {
        let cfg = EmptyConfig;
        assert_eq!(cfg.get_str("", "hrtf-mode"), None);
        assert_eq!(cfg.get_bool("", "hrtf"), None);
    }

    #[test]
    fn horizontal_only_mask_is_detected() {
        let conf = DecoderConf {
            num_speakers: 1,
            speakers: Vec::new(),
            coeff_scale: CoeffScale::N3d,
            chan_mask: 0b1011, // ACN 0,1,3 - all horizontal
            freq_bands: 1,
            hf_order_gain: [1.0; 4],
            hf_matrix: Vec::new(),
            xover_freq: 0.0,
        };
        assert!(conf.is_horizontal_only());
    }

    #[test]
    fn periphonic_mask_is_not_horizontal_only() {
        let conf = DecoderConf {
            num_speakers: 1,
            speakers: Vec::new(),
            coeff_scale: CoeffScale::N3d,
            chan_mask: 0b100, // ACN 2 (Z) - periphonic
            freq_bands: 1,
            hf_order_gain: [1.0; 4],
            hf_matrix: Vec::new(),
            xover_freq: 0.0,
        };
        assert!(!conf.is_horizontal_only());
    }
}
