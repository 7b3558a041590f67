//! Renderer selection state machine.
//!
//! [`RendererState::reinit`] is the single entry point a host calls whenever a device
//! (re)opens or its HRTF/stereo-mode configuration changes. Grounded on
//! `aluInitRenderer`'s decision tree: non-stereo devices either load a custom decoder
//! file or fall back to their built-in layout; stereo devices choose among HRTF,
//! BS2B crossfeed, UHJ, or plain stereo panning depending on config and whether
//! headphones are reported.
//!
//! `reinit` never returns a [`crate::error::Result`] — per the error handling design,
//! every inner failure is logged and answered with the next-simplest fallback rather
//! than aborting device open.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use log::{trace, warn};

use crate::ambi::AmbiBus;
use crate::channel::{ChannelLabel, DeviceType, FmtChans, HrtfRequestMode, HrtfStatus, RenderMode};
use crate::config::{ConfigSource, DecoderConf, DecoderFileLoader};
use crate::constants::{FIRST_ORDER_SCALE, SECOND_ORDER_SCALE, THIRD_ORDER_SCALE, ZERO_ORDER_SCALE};
use crate::error::SpatialError;
use crate::hrtf::{HrtfEntry, HrtfRegistry};
use crate::init::{self, AmbiDecoderHandle, Bs2bHandle, EffectChannelMap, UhjEncoderHandle};

/// Everything a host needs to drive its mixer for one open device.
///
/// Construction only sets the device's fixed facts (`fmt_chans`, `frequency`,
/// `is_headphones`, `device_type`); [`RendererState::reinit`] fills in everything
/// derived from configuration.
pub struct RendererState {
    pub fmt_chans: FmtChans,
    pub frequency: u32,
    pub is_headphones: bool,
    pub device_type: DeviceType,

    pub render_mode: RenderMode,
    pub hrtf_status: HrtfStatus,
    pub hrtf_name: Option<String>,

    pub dry: AmbiBus,
    pub foa_out: AmbiBus,
    pub foa_scale: f32,
    pub effect_map: EffectChannelMap,

    pub ambi_decoder: Option<AmbiDecoderHandle>,
    pub bs2b: Option<Bs2bHandle>,
    pub uhj_encoder: Option<UhjEncoderHandle>,

    /// Device channels that had no match in the active channel map, surfaced for the
    /// host to log; never fatal.
    pub unmatched_channels: alloc_vec::Vec<ChannelLabel>,
}

impl RendererState {
    /// Construct a renderer for a newly-opened device, with no decoder tables built
    /// yet. Call [`RendererState::reinit`] before using it for panning.
    pub fn new(fmt_chans: FmtChans, frequency: u32, is_headphones: bool, device_type: DeviceType) -> Self {
        Self {
            fmt_chans,
            frequency,
            is_headphones,
            device_type,
            render_mode: RenderMode::NormalRender,
            hrtf_status: HrtfStatus::Disabled,
            hrtf_name: None,
            dry: AmbiBus::empty_coefficient(),
            foa_out: AmbiBus::empty_coefficient(),
            foa_scale: ZERO_ORDER_SCALE,
            effect_map: EffectChannelMap::reset(0),
            ambi_decoder: None,
            bs2b: None,
            uhj_encoder: None,
            unmatched_channels: alloc_vec::Vec::new(),
        }
    }

    /// Device channel layout used for decoder-table installation: for every
    /// `FmtChans` other than `BFormat3D`, this is the physical speaker set; for
    /// `BFormat3D` it's the ambisonic channel list itself (not meaningful here, callers
    /// pass it explicitly).
    fn device_channels(&self) -> alloc_vec::Vec<ChannelLabel> {
        use FmtChans::*;
        match self.fmt_chans {
            Mono => [ChannelLabel::FrontCenter].to_vec(),
            Stereo => [ChannelLabel::FrontLeft, ChannelLabel::FrontRight].to_vec(),
            Quad => [
                ChannelLabel::FrontLeft,
                ChannelLabel::FrontRight,
                ChannelLabel::BackLeft,
                ChannelLabel::BackRight,
            ]
            .to_vec(),
            X51 => [
                ChannelLabel::FrontLeft,
                ChannelLabel::FrontRight,
                ChannelLabel::FrontCenter,
                ChannelLabel::Lfe,
                ChannelLabel::SideLeft,
                ChannelLabel::SideRight,
            ]
            .to_vec(),
            X51Rear => [
                ChannelLabel::FrontLeft,
                ChannelLabel::FrontRight,
                ChannelLabel::FrontCenter,
                ChannelLabel::Lfe,
                ChannelLabel::BackLeft,
                ChannelLabel::BackRight,
            ]
            .to_vec(),
            X61 => [
                ChannelLabel::FrontLeft,
                ChannelLabel::FrontRight,
                ChannelLabel::FrontCenter,
                ChannelLabel::Lfe,
                ChannelLabel::BackCenter,
                ChannelLabel::SideLeft,
                ChannelLabel::SideRight,
            ]
            .to_vec(),
            X71 => [
                ChannelLabel::FrontLeft,
                ChannelLabel::FrontRight,
                ChannelLabel::FrontCenter,
                ChannelLabel::Lfe,
                ChannelLabel::BackLeft,
                ChannelLabel::BackRight,
                ChannelLabel::SideLeft,
                ChannelLabel::SideRight,
            ]
            .to_vec(),
            BFormat3D => [
                ChannelLabel::Aux(0),
                ChannelLabel::Aux(1),
                ChannelLabel::Aux(2),
                ChannelLabel::Aux(3),
            ]
            .to_vec(),
        }
    }

    /// Re-derive every decoder table from the device's fixed facts plus host
    /// configuration. Mirrors `aluInitRenderer`: non-stereo devices look for a custom
    /// decoder file first and fall back to their built-in layout; stereo devices pick
    /// among HRTF, BS2B, UHJ, and plain stereo panning.
    ///
    /// `decoder_loader` resolves a decoder-file path (read from `config`) into a parsed
    /// [`DecoderConf`] for non-stereo devices; `hrtf_registry` is the device's available
    /// HRTF datasets, if the platform exposes any. `hrtf_appreq` is the programmatic
    /// (application-layer) HRTF request; `hrtf_userreq` is the user/config-layer
    /// request and takes precedence over it. `hrtf_id` is an explicit dataset index
    /// request, preferred over the first sample-rate match when valid.
    pub fn reinit(
        &mut self,
        config: &dyn ConfigSource,
        decoder_loader: Option<&dyn DecoderFileLoader>,
        hrtf_registry: Option<&dyn HrtfRegistry>,
        hrtf_appreq: HrtfRequestMode,
        hrtf_userreq: HrtfRequestMode,
        hrtf_id: Option<usize>,
    ) {
        self.ambi_decoder = None;
        self.bs2b = None;
        self.uhj_encoder = None;
        self.unmatched_channels.clear();

        if self.fmt_chans != FmtChans::Stereo {
            self.reinit_non_stereo(config, decoder_loader, hrtf_appreq);
        } else {
            self.reinit_stereo(config, hrtf_registry, hrtf_appreq, hrtf_userreq, hrtf_id);
        }

        self.effect_map = EffectChannelMap::reset(self.dry.coeff_count().max(4));
    }

    fn reinit_non_stereo(
        &mut self,
        config: &dyn ConfigSource,
        decoder_loader: Option<&dyn DecoderFileLoader>,
        hrtf_appreq: HrtfRequestMode,
    ) {
        if hrtf_appreq == HrtfRequestMode::Enable {
            self.hrtf_status = HrtfStatus::UnsupportedFormat;
        }

        let device_channels = self.device_channels();
        let hq_mode = self.device_type != DeviceType::Loopback
            && config.get_bool("decoder", "hq-mode").unwrap_or(false);

        let custom_decoder = self.load_custom_decoder(config, decoder_loader);

        if let Some(conf) = custom_decoder.as_ref() {
            let result = if hq_mode {
                init::init_hq_panning(conf, &device_channels, self.fmt_chans)
            } else {
                init::init_custom_panning(conf, &device_channels, self.fmt_chans)
            };
            match result {
                Ok((bus, unmatched)) => {
                    self.unmatched_channels = unmatched;
                    self.install_dry(bus, order_from_mask(conf.chan_mask));
                    self.ambi_decoder = Some(AmbiDecoderHandle {
                        order: order_from_mask(conf.chan_mask),
                        dual_band: conf.freq_bands == 2,
                    });
                    self.render_mode = RenderMode::NormalRender;
                    return;
                }
                Err(err) => {
                    warn!("custom decoder rejected ({err}); falling back to the built-in layout");
                }
            }
        }

        let (bus, unmatched) = init::init_panning(&device_channels, self.fmt_chans);
        self.unmatched_channels = unmatched;
        let order = match self.fmt_chans {
            FmtChans::Mono => 0,
            FmtChans::Quad | FmtChans::X51 | FmtChans::X51Rear => 2,
            FmtChans::X61 | FmtChans::X71 | FmtChans::BFormat3D => 3,
            FmtChans::Stereo => 1,
        };
        self.install_dry(bus, order);
        self.render_mode = RenderMode::NormalRender;
    }

    /// Derive this device's layout-specific decoder config key, look up its path, and
    /// ask `decoder_loader` to parse it. `None` at any step (no loader, no key for this
    /// layout, no path configured, or a parse failure) means "no custom decoder file",
    /// which sends the caller to the built-in layout fallback.
    fn load_custom_decoder(
        &self,
        config: &dyn ConfigSource,
        decoder_loader: Option<&dyn DecoderFileLoader>,
    ) -> Option<DecoderConf> {
        let loader = decoder_loader?;
        let key = layout_config_key(self.fmt_chans)?;
        let path = config.get_str("decoder", key)?;
        loader.load(path)
    }

    fn reinit_stereo(
        &mut self,
        config: &dyn ConfigSource,
        hrtf_registry: Option<&dyn HrtfRegistry>,
        hrtf_appreq: HrtfRequestMode,
        hrtf_userreq: HrtfRequestMode,
        hrtf_id: Option<usize>,
    ) {
        let device_channels = self.device_channels();
        let headphones = self.effective_headphones(config);

        self.hrtf_status = HrtfStatus::Disabled;
        let (usehrtf, initial_status) = compute_usehrtf(hrtf_userreq, hrtf_appreq, headphones);
        if let Some(status) = initial_status {
            self.hrtf_status = status;
        }

        if usehrtf && self.try_hrtf(config, hrtf_registry, hrtf_id, headphones) {
            return;
        }

        let bs2b_level = self.bs2b_level(config, headphones, hrtf_appreq);
        if (1..=6).contains(&bs2b_level) {
            self.bs2b = Some(Bs2bHandle { feed_level: bs2b_level as u8 });
            let (bus, unmatched) = init::init_panning(&device_channels, FmtChans::Stereo);
            self.unmatched_channels = unmatched;
            self.install_dry(bus, 1);
            self.render_mode = RenderMode::StereoPair;
            return;
        }

        if self.wants_paired_panning(config) {
            let (bus, unmatched) = init::init_panning(&device_channels, FmtChans::Stereo);
            self.unmatched_channels = unmatched;
            self.install_dry(bus, 1);
            self.render_mode = RenderMode::StereoPair;
        } else {
            let (bus, handle) = init::init_uhj_panning(&device_channels);
            self.install_dry(bus, 1);
            self.uhj_encoder = Some(handle);
            self.render_mode = RenderMode::NormalRender;
        }
    }

    /// `IsHeadphones`, overridden by config `stereo-mode` ∈ {headphones, speakers,
    /// auto}. Loopback devices never consult free-text config.
    fn effective_headphones(&self, config: &dyn ConfigSource) -> bool {
        if self.device_type == DeviceType::Loopback {
            return self.is_headphones;
        }
        match config.get_str("", "stereo-mode") {
            Some("headphones") => true,
            Some("speakers") => false,
            Some("auto") | None => self.is_headphones,
            Some(other) => {
                warn!(
                    "{}",
                    SpatialError::UnknownConfigValue {
                        key: "stereo-mode",
                        value: owned_string(other),
                    }
                );
                self.is_headphones
            }
        }
    }

    /// Attempt HRTF rendering once `usehrtf` is true. Returns `true` if a dataset was
    /// found and installed (the caller should stop here); `false` sends the caller on
    /// to the non-HRTF fallback chain, having already set `Hrtf_Status`.
    fn try_hrtf(
        &mut self,
        config: &dyn ConfigSource,
        hrtf_registry: Option<&dyn HrtfRegistry>,
        hrtf_id: Option<usize>,
        headphones: bool,
    ) -> bool {
        let Some(registry) = hrtf_registry else {
            self.hrtf_status = HrtfStatus::UnsupportedFormat;
            return false;
        };

        let entries = registry.entries();
        let chosen = select_hrtf_index(entries, hrtf_id, self.frequency);
        let Some(index) = chosen else {
            // A sample-rate mismatch across every entry is only a status flip,
            // not a logged warning/error.
            trace!("{}", SpatialError::NoMatchingHrtfEntry);
            self.hrtf_status = HrtfStatus::UnsupportedFormat;
            return false;
        };

        let Some(dataset) = registry.load(Some(index), self.frequency) else {
            self.hrtf_status = HrtfStatus::UnsupportedFormat;
            return false;
        };

        let (bus, _directions) = init::init_hrtf_panning(dataset);
        self.dry = bus;
        self.foa_scale = FIRST_ORDER_SCALE;
        self.hrtf_status = if headphones {
            HrtfStatus::HeadphonesDetected
        } else {
            HrtfStatus::Enabled
        };
        self.render_mode = if self.downgrade_hrtf_to_basic(config) {
            RenderMode::NormalRender
        } else {
            RenderMode::HrtfRender
        };
        self.hrtf_name = entries.get(index).map(|e| e.name.clone());
        true
    }

    /// `hrtf-mode` ∈ {full, basic}; `basic` downgrades an already-enabled HRTF render
    /// to `NormalRender` without disabling HRTF itself. This is distinct from
    /// `hrtf_userreq`/`hrtf_appreq`, which decide *whether* HRTF is enabled at all.
    fn downgrade_hrtf_to_basic(&self, config: &dyn ConfigSource) -> bool {
        match config.get_str("", "hrtf-mode") {
            Some("basic") => true,
            Some("full") | None => false,
            Some(other) => {
                warn!(
                    "{}",
                    SpatialError::UnknownConfigValue {
                        key: "hrtf-mode",
                        value: owned_string(other),
                    }
                );
                false
            }
        }
    }

    fn bs2b_level(&self, config: &dyn ConfigSource, headphones: bool, hrtf_appreq: HrtfRequestMode) -> i64 {
        let default_level = if (headphones && hrtf_appreq != HrtfRequestMode::Disable) || hrtf_appreq == HrtfRequestMode::Enable {
            5
        } else {
            0
        };
        if self.device_type == DeviceType::Loopback {
            return default_level;
        }
        match config.get_int("", "cf_level") {
            Some(level) => level.clamp(1, 6),
            None => default_level,
        }
    }

    /// `stereo-panning` ∈ {paired, uhj}; default (and any unrecognized value) is uhj.
    fn wants_paired_panning(&self, config: &dyn ConfigSource) -> bool {
        match config.get_str("", "stereo-panning") {
            Some("paired") => true,
            Some("uhj") | None => false,
            Some(other) => {
                warn!(
                    "{}",
                    SpatialError::UnknownConfigValue {
                        key: "stereo-panning",
                        value: owned_string(other),
                    }
                );
                false
            }
        }
    }

    fn install_dry(&mut self, bus: AmbiBus, order: u8) {
        self.foa_scale = match order {
            0 => ZERO_ORDER_SCALE,
            1 => FIRST_ORDER_SCALE,
            2 => SECOND_ORDER_SCALE,
            _ => THIRD_ORDER_SCALE,
        };
        self.dry = bus;
    }
}

/// Config-section key for a non-stereo layout's custom decoder file, per
/// `"decoder"`/`<key>`. `None` for layouts with no custom-decoder slot.
fn layout_config_key(fmt_chans: FmtChans) -> Option<&'static str> {
    match fmt_chans {
        FmtChans::Quad => Some("quad"),
        FmtChans::X51 => Some("surround51"),
        FmtChans::X51Rear => Some("surround51rear"),
        FmtChans::X61 => Some("surround61"),
        FmtChans::X71 => Some("surround71"),
        FmtChans::Mono | FmtChans::Stereo | FmtChans::BFormat3D => None,
    }
}

/// `usehrtf` plus any `Hrtf_Status` the request itself pins (before a dataset is
/// looked up): `hrtf_userreq` dominates `hrtf_appreq`.
fn compute_usehrtf(
    hrtf_userreq: HrtfRequestMode,
    hrtf_appreq: HrtfRequestMode,
    headphones: bool,
) -> (bool, Option<HrtfStatus>) {
    match hrtf_userreq {
        HrtfRequestMode::Enable => (true, Some(HrtfStatus::Required)),
        HrtfRequestMode::Disable => {
            let status = if hrtf_appreq == HrtfRequestMode::Enable {
                Some(HrtfStatus::Denied)
            } else {
                None
            };
            (false, status)
        }
        HrtfRequestMode::Default => {
            let usehrtf = (headphones && hrtf_appreq != HrtfRequestMode::Disable) || hrtf_appreq == HrtfRequestMode::Enable;
            (usehrtf, None)
        }
    }
}

/// Explicit-ID-wins-else-first-matching-rate dataset selection.
fn select_hrtf_index(entries: &[HrtfEntry], hrtf_id: Option<usize>, device_rate: u32) -> Option<usize> {
    if let Some(id) = hrtf_id {
        if entries.get(id).is_some_and(|e| e.sample_rate == device_rate) {
            return Some(id);
        }
    }
    entries.iter().position(|e| e.sample_rate == device_rate)
}

fn order_from_mask(mask: u32) -> u8 {
    match mask {
        m if m & !0b1 == 0 => 0,
        m if m & !0b1111 == 0 => 1,
        m if m & !0x1ff == 0 => 2,
        _ => 3,
    }
}

#[cfg(feature = "std")]
fn owned_string(s: &str) -> String {
    s.to_string()
}

#[cfg(not(feature = "std"))]
fn owned_string(s: &str) -> String {
    alloc::string::ToString::to_string(s)
}

#[cfg(feature = "std")]
mod alloc_vec {
    pub use std::vec::Vec;
}

#[cfg(not(feature = "std"))]
mod alloc_vec {
    pub use alloc::vec::Vec;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmptyConfig;

    struct FakeLoader {
        conf: DecoderConf,
    }
    impl DecoderFileLoader for FakeLoader {
        fn load(&self, _path: &str) -> Option<DecoderConf> {
            Some(self.conf.clone())
        }
    }

    struct DecoderPathConfig {
        section: &'static str,
        key: &'static str,
        path: &'static str,
    }
    impl ConfigSource for DecoderPathConfig {
        fn get_str(&self, section: &str, key: &str) -> Option<&str> {
            if section == self.section && key == self.key {
                Some(self.path)
            } else {
                None
            }
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

    #[test]
    fn new_renderer_starts_in_normal_render() {
        let state = RendererState::new(FmtChans::Stereo, 44100, false, DeviceType::Normal);
        assert_eq!(state.render_mode, RenderMode::NormalRender);
        assert_eq!(state.hrtf_status, HrtfStatus::Disabled);
    }

    #[test]
    fn reinit_stereo_with_no_config_defaults_to_uhj_panning() {
        let mut state = RendererState::new(FmtChans::Stereo, 44100, false, DeviceType::Normal);
        state.reinit(&EmptyConfig, None, None, HrtfRequestMode::Default, HrtfRequestMode::Default, None);
        assert_eq!(state.render_mode, RenderMode::NormalRender);
        assert!(state.uhj_encoder.is_some());
        assert_eq!(state.dry.num_channels(), 2);
    }

    #[test]
    fn reinit_stereo_paired_panning_requested_uses_plain_panning() {
        struct PairedConfig;
        impl ConfigSource for PairedConfig {
            fn get_str(&self, _section: &str, key: &str) -> Option<&str> {
                if key == "stereo-panning" {
                    Some("paired")
                } else {
                    None
                }
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
        let mut state = RendererState::new(FmtChans::Stereo, 44100, false, DeviceType::Normal);
        state.reinit(&PairedConfig, None, None, HrtfRequestMode::Default, HrtfRequestMode::Default, None);
        assert_eq!(state.render_mode, RenderMode::StereoPair);
        assert!(state.uhj_encoder.is_none());
    }

    #[test]
    fn reinit_stereo_headphones_with_no_hrtf_registry_reports_unsupported() {
        let mut state = RendererState::new(FmtChans::Stereo, 44100, true, DeviceType::Normal);
        state.reinit(&EmptyConfig, None, None, HrtfRequestMode::Default, HrtfRequestMode::Default, None);
        assert_eq!(state.hrtf_status, HrtfStatus::UnsupportedFormat);
        assert_eq!(state.render_mode, RenderMode::NormalRender);
    }

    struct FakeDataset;
    impl crate::hrtf::HrtfDataset for FakeDataset {
        fn nearest(&self, _az: f32, _el: f32) -> Option<crate::hrtf::HrirCoeffs> {
            Some((vec![0.1], vec![0.1]))
        }
        fn sample_rate(&self) -> u32 {
            44100
        }
    }
    struct FakeRegistry {
        entries: alloc_vec::Vec<HrtfEntry>,
        dataset: FakeDataset,
    }
    impl HrtfRegistry for FakeRegistry {
        fn entries(&self) -> &[HrtfEntry] {
            &self.entries
        }
        fn load(&self, _index: Option<usize>, _device_rate: u32) -> Option<&dyn crate::hrtf::HrtfDataset> {
            Some(&self.dataset)
        }
    }

    #[test]
    fn reinit_stereo_headphones_auto_detect_sets_headphones_detected_not_enabled() {
        let mut state = RendererState::new(FmtChans::Stereo, 44100, true, DeviceType::Normal);
        let registry = FakeRegistry {
            entries: vec![HrtfEntry {
                name: "generic-44100".into(),
                sample_rate: 44100,
            }],
            dataset: FakeDataset,
        };
        state.reinit(&EmptyConfig, None, Some(&registry), HrtfRequestMode::Default, HrtfRequestMode::Default, None);
        assert_eq!(state.render_mode, RenderMode::HrtfRender);
        assert_eq!(state.hrtf_status, HrtfStatus::HeadphonesDetected);
        assert_eq!(state.dry.num_channels(), 8);
    }

    #[test]
    fn reinit_stereo_non_headphones_explicit_enable_sets_enabled() {
        let mut state = RendererState::new(FmtChans::Stereo, 44100, false, DeviceType::Normal);
        let registry = FakeRegistry {
            entries: vec![HrtfEntry {
                name: "generic-44100".into(),
                sample_rate: 44100,
            }],
            dataset: FakeDataset,
        };
        state.reinit(&EmptyConfig, None, Some(&registry), HrtfRequestMode::Enable, HrtfRequestMode::Default, None);
        assert_eq!(state.hrtf_status, HrtfStatus::Enabled);
    }

    #[test]
    fn hrtf_userreq_disable_wins_over_hrtf_appreq_enable() {
        let mut state = RendererState::new(FmtChans::Stereo, 44100, true, DeviceType::Normal);
        let registry = FakeRegistry {
            entries: vec![HrtfEntry {
                name: "generic-44100".into(),
                sample_rate: 44100,
            }],
            dataset: FakeDataset,
        };
        state.reinit(&EmptyConfig, None, Some(&registry), HrtfRequestMode::Enable, HrtfRequestMode::Disable, None);
        assert_eq!(state.hrtf_status, HrtfStatus::Denied);
        assert_ne!(state.render_mode, RenderMode::HrtfRender);
    }

    #[test]
    fn stereo_mode_speakers_override_suppresses_headphone_auto_detect() {
        struct SpeakersConfig;
        impl ConfigSource for SpeakersConfig {
            fn get_str(&self, _section: &str, key: &str) -> Option<&str> {
                if key == "stereo-mode" {
                    Some("speakers")
                } else {
                    None
                }
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
        let mut state = RendererState::new(FmtChans::Stereo, 44100, true, DeviceType::Normal);
        state.reinit(&SpeakersConfig, None, None, HrtfRequestMode::Default, HrtfRequestMode::Default, None);
        // Headphones hint is suppressed, so the default path never wants HRTF at all.
        assert_eq!(state.hrtf_status, HrtfStatus::Disabled);
    }

    #[test]
    fn hrtf_id_selects_explicit_dataset_when_rate_matches() {
        let entries = vec![
            HrtfEntry {
                name: "a-44100".into(),
                sample_rate: 44100,
            },
            HrtfEntry {
                name: "b-44100".into(),
                sample_rate: 44100,
            },
        ];
        assert_eq!(select_hrtf_index(&entries, Some(1), 44100), Some(1));
    }

    #[test]
    fn hrtf_id_falls_back_to_rate_match_when_invalid() {
        let entries = vec![HrtfEntry {
            name: "a-44100".into(),
            sample_rate: 44100,
        }];
        assert_eq!(select_hrtf_index(&entries, Some(7), 44100), Some(0));
    }

    #[test]
    fn reinit_non_stereo_quad_populates_second_order_dry_bus() {
        let mut state = RendererState::new(FmtChans::Quad, 44100, false, DeviceType::Normal);
        state.reinit(&EmptyConfig, None, None, HrtfRequestMode::Default, HrtfRequestMode::Default, None);
        assert_eq!(state.dry.coeff_count(), 9);
        assert!((state.foa_scale - SECOND_ORDER_SCALE).abs() < 1e-6);
    }

    #[test]
    fn reinit_non_stereo_looks_up_decoder_path_by_layout_key() {
        let conf = DecoderConf {
            num_speakers: 2,
            speakers: vec![
                crate::config::DecoderSpeaker {
                    name: "LF".into(),
                    coeffs: vec![0.5, 0.2, 0.0, 0.3],
                },
                crate::config::DecoderSpeaker {
                    name: "RF".into(),
                    coeffs: vec![0.5, 0.2, 0.0, -0.3],
                },
            ],
            coeff_scale: crate::config::CoeffScale::N3d,
            chan_mask: 0b1111,
            freq_bands: 1,
            hf_order_gain: [1.0; 4],
            hf_matrix: Vec::new(),
            xover_freq: 0.0,
        };
        let loader = FakeLoader { conf };
        let config = DecoderPathConfig {
            section: "decoder",
            key: "quad",
            path: "fixture://quad.ambdec",
        };
        let mut state = RendererState::new(FmtChans::Quad, 44100, false, DeviceType::Normal);
        state.reinit(&config, Some(&loader), None, HrtfRequestMode::Default, HrtfRequestMode::Default, None);
        assert!(state.ambi_decoder.is_some());
        assert_eq!(state.render_mode, RenderMode::NormalRender);
    }

    #[test]
    fn reinit_never_panics_on_unknown_custom_decoder_speaker() {
        let conf = DecoderConf {
            num_speakers: 1,
            speakers: vec![crate::config::DecoderSpeaker {
                name: "ZZ".into(),
                coeffs: vec![1.0],
            }],
            coeff_scale: crate::config::CoeffScale::N3d,
            chan_mask: 0b1,
            freq_bands: 1,
            hf_order_gain: [1.0; 4],
            hf_matrix: Vec::new(),
            xover_freq: 0.0,
        };
        let loader = FakeLoader { conf };
        let config = DecoderPathConfig {
            section: "decoder",
            key: "quad",
            path: "fixture://quad.ambdec",
        };
        let mut state = RendererState::new(FmtChans::Quad, 44100, false, DeviceType::Normal);
        // A rejected custom decoder must fall back to the built-in layout, not panic
        // or leave the Dry bus empty.
        state.reinit(&config, Some(&loader), None, HrtfRequestMode::Default, HrtfRequestMode::Default, None);
        assert_eq!(state.dry.coeff_count(), 9);
    }
}
