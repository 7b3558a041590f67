//! # bbx_spatial
//!
//! Output renderer configuration core for spatial audio mixing.
//!
//! Given a device's channel layout, sample rate, and headphone/speaker hint, together
//! with optional user configuration (custom ambisonic decoder files, HRTF datasets,
//! stereo enhancement modes), this crate decides *how* positional source material is
//! spatialized to the device's physical output channels, and produces the numerical
//! decoder tables a real-time mixer consumes every audio block.
//!
//! This crate does not process audio samples, perform file I/O, or own any thread
//! scheduling. It is a pure configuration-and-coefficient layer invoked at device
//! (re)open time, plus a set of pure math helpers meant to be called from a mixer's
//! hot path.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod ambi;
pub mod channel;
pub mod config;
pub mod constants;
pub mod decoders;
pub mod direction;
pub mod error;
pub mod gains;

pub mod hrtf;
pub mod init;
pub mod installer;
pub mod math;
pub mod renderer;
pub mod speaker;

pub use ambi::{AmbiBus, BfChannelConfig, ChannelConfigRow};
pub use channel::{ChannelLabel, DeviceType, FmtChans, HrtfRequestMode, HrtfStatus, RenderMode};
pub use config::{ConfigSource, DecoderConf, DecoderFileLoader};
pub use constants::{MAX_AMBI_COEFFS, MAX_OUTPUT_CHANNELS};
pub use direction::{calc_angle_coeffs, calc_direction_coeffs, Direction};
pub use error::{Result, SpatialError};
pub use hrtf::{HrtfDataset, HrtfEntry, HrtfRegistry};
pub use renderer::RendererState;
pub use speaker::resolve_speaker_name;
