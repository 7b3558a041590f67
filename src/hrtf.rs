//! HRTF dataset contracts.
//!
//! HRIR measurement data and its lookup/interpolation live entirely outside this
//! crate; this module only defines the traits [`crate::init::init_hrtf_panning`] needs
//! to pick an entry and pull its coefficients, so the renderer logic can be exercised
//! against a fake dataset in tests without any real measurement data.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// One HRTF dataset entry as listed for a device: a display name and the sample rate
/// it was measured at.
#[derive(Debug, Clone, PartialEq)]
pub struct HrtfEntry {
    pub name: String,
    pub sample_rate: u32,
}

/// Left/right HRIR coefficient pair for one virtual speaker position, already
/// resampled to the device's output rate.
pub type HrirCoeffs = (Vec<f32>, Vec<f32>);

/// A host-supplied catalog of HRTF datasets available to a device.
///
/// Mirrors `VECTOR(HrtfEntry)` plus `GetLoadedHrtf`: entries are listed once at device
/// enumeration time, and a specific one is loaded (by index, or by nearest
/// sample-rate match) when the renderer actually switches to HRTF rendering.
pub trait HrtfRegistry {
    /// All datasets available for this device, in enumeration order.
    fn entries(&self) -> &[HrtfEntry];

    /// Load the dataset at `entries()[index]`, or the closest sample-rate match if
    /// `index` is `None` (the "Default" dataset selection).
    fn load(&self, index: Option<usize>, device_rate: u32) -> Option<&dyn HrtfDataset>;
}

/// A loaded HRTF dataset, ready to resolve virtual speaker directions to HRIR
/// coefficients.
pub trait HrtfDataset {
    /// Nearest dataset entry to `(azimuth, elevation)` in radians, returning its HRIR
    /// coefficients for both ears.
    fn nearest(&self, azimuth: f32, elevation: f32) -> Option<HrirCoeffs>;

    /// The dataset's native sample rate.
    fn sample_rate(&self) -> u32;
}
