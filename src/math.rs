//! Math function compatibility for std and no_std (libm) environments.
//!
//! In std builds this re-exports standard library methods. In no_std builds with the
//! `alloc` feature, this forwards to `libm`. Only the handful of transcendental
//! functions the SH kernel and gain evaluators actually need are wrapped.

/// Sine, f32.
#[inline]
pub fn sin(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.sin()
    }
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    {
        libm::sinf(x)
    }
}

/// Cosine, f32.
#[inline]
pub fn cos(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.cos()
    }
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    {
        libm::cosf(x)
    }
}

/// Square root, f32.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    {
        libm::sqrtf(x)
    }
}
