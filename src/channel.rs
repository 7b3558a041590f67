//! Channel labels, device channel layouts, and renderer mode/status enums.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// A physical-channel or virtual-speaker label.
///
/// Drawn from the closed set OpenAL Soft's renderer recognizes: the standard speaker
/// positions, the eight upper/lower cube corners used by HRTF virtualization, sixteen
/// auxiliary effect-send slots, and a sentinel marking "no more channels" in a device's
/// channel list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLabel {
    FrontLeft,
    FrontRight,
    FrontCenter,
    Lfe,
    BackLeft,
    BackRight,
    BackCenter,
    SideLeft,
    SideRight,
    UpperFrontLeft,
    UpperFrontRight,
    UpperBackLeft,
    UpperBackRight,
    LowerFrontLeft,
    LowerFrontRight,
    LowerBackLeft,
    LowerBackRight,
    Aux(u8),
    InvalidChannel,
}

impl ChannelLabel {
    /// Human-readable label, matching `Alc/panning.c`'s `GetLabelFromChannel` strings
    /// so log output reads the same as the source this core is grounded on.
    pub fn as_str(&self) -> String {
        match self {
            Self::FrontLeft => "front-left".into(),
            Self::FrontRight => "front-right".into(),
            Self::FrontCenter => "front-center".into(),
            Self::Lfe => "lfe".into(),
            Self::BackLeft => "back-left".into(),
            Self::BackRight => "back-right".into(),
            Self::BackCenter => "back-center".into(),
            Self::SideLeft => "side-left".into(),
            Self::SideRight => "side-right".into(),
            Self::UpperFrontLeft => "upper-front-left".into(),
            Self::UpperFrontRight => "upper-front-right".into(),
            Self::UpperBackLeft => "upper-back-left".into(),
            Self::UpperBackRight => "upper-back-right".into(),
            Self::LowerFrontLeft => "lower-front-left".into(),
            Self::LowerFrontRight => "lower-front-right".into(),
            Self::LowerBackLeft => "lower-back-left".into(),
            Self::LowerBackRight => "lower-back-right".into(),
            Self::Aux(n) => alloc_format_aux(*n),
            Self::InvalidChannel => "(unknown)".into(),
        }
    }
}

#[cfg(feature = "std")]
fn alloc_format_aux(n: u8) -> String {
    std::format!("aux-{n}")
}

#[cfg(not(feature = "std"))]
fn alloc_format_aux(n: u8) -> String {
    alloc::format!("aux-{n}")
}

/// Device output channel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FmtChans {
    Mono,
    Stereo,
    Quad,
    X51,
    X51Rear,
    X61,
    X71,
    BFormat3D,
}

/// Device type, used to decide whether free-text device config is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Normal,
    /// Loopback devices never consult free-text device config.
    Loopback,
}

/// The active render path for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    #[default]
    NormalRender,
    StereoPair,
    HrtfRender,
}

/// HRTF status surfaced back to the application layer (the `ALC_HRTF_*_SOFT` values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HrtfStatus {
    #[default]
    Disabled,
    Enabled,
    Required,
    Denied,
    UnsupportedFormat,
    HeadphonesDetected,
}

/// A caller's HRTF request, either from the application layer (`hrtf_appreq`) or from
/// user/config layer (`hrtf_userreq`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HrtfRequestMode {
    #[default]
    Default,
    Enable,
    Disable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_strings_match_source() {
        assert_eq!(ChannelLabel::FrontLeft.as_str(), "front-left");
        assert_eq!(ChannelLabel::Lfe.as_str(), "lfe");
        assert_eq!(ChannelLabel::UpperBackRight.as_str(), "upper-back-right");
        assert_eq!(ChannelLabel::Aux(3).as_str(), "aux-3");
        assert_eq!(ChannelLabel::InvalidChannel.as_str(), "(unknown)");
    }
}
