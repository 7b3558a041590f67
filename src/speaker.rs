//! Speaker-name resolution.
//!
//! Maps the short speaker names used in decoder-file channel lists (`LF`, `RF`, `LS`,
//! `RB`, ...) to [`ChannelLabel`]s, with device-layout-dependent aliasing: `LS`/`RS`
//! and `LB`/`RB` are interchangeable depending on whether the device's built-in layout
//! uses side or rear surrounds, matching `MakeSpeakerMap`.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::channel::{ChannelLabel, FmtChans};
use crate::error::{Result, SpatialError};

/// Resolve one decoder-file speaker name to a device channel label.
///
/// `device_fmt` disambiguates `LS`/`RS` vs `LB`/`RB`: on an `X51Rear` device, `LS`/`RS`
/// alias to `BackLeft`/`BackRight`; on an `X51` (side-surround) device, `LB`/`RB` alias
/// to `SideLeft`/`SideRight`. Any other name is a hard error — unlike a built-in
/// layout's channel labels, a decoder file's speaker names have no silent fallback.
pub fn resolve_speaker_name(name: &str, device_fmt: FmtChans) -> Result<ChannelLabel> {
    let label = match name {
        "LF" => ChannelLabel::FrontLeft,
        "RF" => ChannelLabel::FrontRight,
        "CE" => ChannelLabel::FrontCenter,
        "LS" => {
            if device_fmt == FmtChans::X51Rear {
                ChannelLabel::BackLeft
            } else {
                ChannelLabel::SideLeft
            }
        }
        "RS" => {
            if device_fmt == FmtChans::X51Rear {
                ChannelLabel::BackRight
            } else {
                ChannelLabel::SideRight
            }
        }
        "LB" => {
            if device_fmt == FmtChans::X51 {
                ChannelLabel::SideLeft
            } else {
                ChannelLabel::BackLeft
            }
        }
        "RB" => {
            if device_fmt == FmtChans::X51 {
                ChannelLabel::SideRight
            } else {
                ChannelLabel::BackRight
            }
        }
        "CB" => ChannelLabel::BackCenter,
        other => return Err(SpatialError::UnrecognizedSpeakerLabel(label_to_owned(other))),
    };
    Ok(label)
}

#[cfg(feature = "std")]
fn label_to_owned(s: &str) -> String {
    s.to_string()
}

#[cfg(not(feature = "std"))]
fn label_to_owned(s: &str) -> String {
    s.to_string()
}

/// Resolve a decoder file's full speaker list in order, failing on the first
/// unrecognized name. A successful call guarantees `result.len() == names.len()`.
pub fn make_speaker_map(names: &[&str], device_fmt: FmtChans) -> Result<Vec<ChannelLabel>> {
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        out.push(resolve_speaker_name(name, device_fmt)?);
    }
    Ok(out)
}
