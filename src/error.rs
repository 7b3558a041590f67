//! Error types for the renderer configuration core.
//!
//! Mirrors `bbx_dsp::error`: a `thiserror`-derived enum plus a `Result` alias. Per the
//! renderer's error handling design, almost none of these ever leave the crate as a
//! hard failure — the selection state machine ([`crate::renderer::RendererState`])
//! catches every one of them and degrades to a simpler rendering strategy rather than
//! failing device open. The type exists so the fallible inner steps have a precise way
//! to describe *why* they gave up, for logging.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Result type alias for `bbx_spatial` operations.
pub type Result<T> = core::result::Result<T, SpatialError>;

/// Failure kinds that can arise while building renderer decoder tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpatialError {
    /// A decoder file declared a speaker label this core does not recognize.
    #[error("decoder speaker label \"{0}\" not recognized")]
    UnrecognizedSpeakerLabel(String),

    /// A recognized speaker label has no matching physical channel on this device.
    #[error("failed to resolve speaker label \"{0}\" for the current device layout")]
    SpeakerLookupFailed(String),

    /// The decoder file's channel mask exceeds the 16-bit ACN range this core supports.
    #[error("unsupported channel mask {0:#06x} (max 0xffff)")]
    ChannelMaskTooWide(u32),

    /// No HRTF dataset entry matched the device's sample rate.
    #[error("no HRTF dataset entry matches the device sample rate")]
    NoMatchingHrtfEntry,

    /// A device output channel had no corresponding entry in the channel map.
    #[error("failed to match {channel} channel (index {index}) in channel map")]
    ChannelMapMatchFailed {
        /// Human-readable label of the unmatched device channel.
        channel: String,
        /// Physical channel index that was left zero-initialized.
        index: usize,
    },

    /// A free-text configuration value was not one of the keyword's recognized values.
    #[error("unexpected value \"{value}\" for config key \"{key}\"")]
    UnknownConfigValue {
        /// The config key whose value was unrecognized.
        key: &'static str,
        /// The unrecognized value, treated as the key's default.
        value: String,
    },
}
