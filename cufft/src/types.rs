use std::ffi::c_void;
use std::fmt;
use std::str::FromStr;

use crate::ffi::{self, cudaStream_t, cufftCompatibility, cufftType};
use crate::FftTypeParseError;

/// Transform family of a plan. Discriminants are the `cufftType` tags.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FftType {
    /// Real to complex, single precision.
    R2C = ffi::CUFFT_R2C,
    /// Complex to real, single precision.
    C2R = ffi::CUFFT_C2R,
    /// Complex to complex, single precision.
    C2C = ffi::CUFFT_C2C,
    /// Real to complex, double precision.
    D2Z = ffi::CUFFT_D2Z,
    /// Complex to real, double precision.
    Z2D = ffi::CUFFT_Z2D,
    /// Complex to complex, double precision.
    Z2Z = ffi::CUFFT_Z2Z,
}

impl FftType {
    pub const ALL: [FftType; 6] = [
        FftType::R2C,
        FftType::C2R,
        FftType::C2C,
        FftType::D2Z,
        FftType::Z2D,
        FftType::Z2Z,
    ];

    #[inline]
    pub fn as_raw(self) -> cufftType {
        self as cufftType
    }

    pub fn from_raw(raw: cufftType) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_raw() == raw)
    }

    pub fn is_double_precision(self) -> bool {
        matches!(self, FftType::D2Z | FftType::Z2D | FftType::Z2Z)
    }

    /// Real transforms run in a fixed direction; complex ones take it per call.
    pub fn implied_direction(self) -> Option<Direction> {
        match self {
            FftType::R2C | FftType::D2Z => Some(Direction::Forward),
            FftType::C2R | FftType::Z2D => Some(Direction::Inverse),
            FftType::C2C | FftType::Z2Z => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FftType::R2C => "R2C",
            FftType::C2R => "C2R",
            FftType::C2C => "C2C",
            FftType::D2Z => "D2Z",
            FftType::Z2D => "Z2D",
            FftType::Z2Z => "Z2Z",
        }
    }
}

impl fmt::Display for FftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FftType {
    type Err = FftTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let short = upper.strip_prefix("CUFFT_").unwrap_or(upper.as_str());
        FftType::ALL
            .into_iter()
            .find(|t| t.name() == short)
            .ok_or_else(|| FftTypeParseError(s.to_string()))
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward = ffi::CUFFT_FORWARD,
    Inverse = ffi::CUFFT_INVERSE,
}

impl Direction {
    #[inline]
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            ffi::CUFFT_FORWARD => Some(Direction::Forward),
            ffi::CUFFT_INVERSE => Some(Direction::Inverse),
            _ => None,
        }
    }
}

/// FFTW-compatible data layout behavior of a plan.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompatibilityMode {
    #[default]
    Native = ffi::CUFFT_COMPATIBILITY_NATIVE,
    FftwPadding = ffi::CUFFT_COMPATIBILITY_FFTW_PADDING,
    FftwAsymmetric = ffi::CUFFT_COMPATIBILITY_FFTW_ASYMMETRIC,
    FftwAll = ffi::CUFFT_COMPATIBILITY_FFTW_ALL,
}

impl CompatibilityMode {
    #[inline]
    pub fn as_raw(self) -> cufftCompatibility {
        self as cufftCompatibility
    }

    pub fn from_raw(raw: cufftCompatibility) -> Option<Self> {
        match raw {
            ffi::CUFFT_COMPATIBILITY_NATIVE => Some(CompatibilityMode::Native),
            ffi::CUFFT_COMPATIBILITY_FFTW_PADDING => Some(CompatibilityMode::FftwPadding),
            ffi::CUFFT_COMPATIBILITY_FFTW_ASYMMETRIC => Some(CompatibilityMode::FftwAsymmetric),
            ffi::CUFFT_COMPATIBILITY_FFTW_ALL => Some(CompatibilityMode::FftwAll),
            _ => None,
        }
    }
}

/// A CUDA stream handle. The binding never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stream(cudaStream_t);

// Stream handles are plain device queue identifiers, usable from any host thread.
unsafe impl Send for Stream {}
unsafe impl Sync for Stream {}

impl Stream {
    /// The legacy default stream.
    pub const fn null() -> Self {
        Stream(std::ptr::null_mut())
    }

    /// # Safety
    /// `raw` must be a `cudaStream_t` that stays valid for as long as any plan
    /// is bound to it.
    pub const unsafe fn from_raw(raw: *mut c_void) -> Self {
        Stream(raw)
    }

    #[inline]
    pub fn as_raw(self) -> cudaStream_t {
        self.0
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl Default for Stream {
    fn default() -> Self {
        Stream::null()
    }
}

/// `cufftComplex`: interleaved single-precision complex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex32 {
    pub re: f32,
    pub im: f32,
}

/// `cufftDoubleComplex`: interleaved double-precision complex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}
