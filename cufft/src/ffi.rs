//! Raw C ABI of the cuFFT entry points bound by this crate.
//!
//! Names follow `cufft.h`. The function pointer types are resolved from the
//! shared library at load time, see [`crate::CufftLibrary`].

#![allow(non_camel_case_types)]

use std::ffi::{c_int, c_void};

use crate::{Complex32, Complex64};

pub type cufftResult = c_int;
pub type cufftHandle = c_int;
pub type cufftType = c_int;
pub type cufftCompatibility = c_int;
pub type cudaStream_t = *mut c_void;

pub type cufftReal = f32;
pub type cufftDoubleReal = f64;
pub type cufftComplex = Complex32;
pub type cufftDoubleComplex = Complex64;

pub const CUFFT_R2C: cufftType = 0x2a;
pub const CUFFT_C2R: cufftType = 0x2c;
pub const CUFFT_C2C: cufftType = 0x29;
pub const CUFFT_D2Z: cufftType = 0x6a;
pub const CUFFT_Z2D: cufftType = 0x6c;
pub const CUFFT_Z2Z: cufftType = 0x69;

pub const CUFFT_FORWARD: c_int = -1;
pub const CUFFT_INVERSE: c_int = 1;

pub const CUFFT_COMPATIBILITY_NATIVE: cufftCompatibility = 0x00;
pub const CUFFT_COMPATIBILITY_FFTW_PADDING: cufftCompatibility = 0x01;
pub const CUFFT_COMPATIBILITY_FFTW_ASYMMETRIC: cufftCompatibility = 0x02;
pub const CUFFT_COMPATIBILITY_FFTW_ALL: cufftCompatibility = 0x03;

pub type FnCufftPlan1d = unsafe extern "C" fn(
    plan: *mut cufftHandle,
    nx: c_int,
    fft_type: cufftType,
    batch: c_int,
) -> cufftResult;

pub type FnCufftPlan2d = unsafe extern "C" fn(
    plan: *mut cufftHandle,
    nx: c_int,
    ny: c_int,
    fft_type: cufftType,
) -> cufftResult;

pub type FnCufftPlan3d = unsafe extern "C" fn(
    plan: *mut cufftHandle,
    nx: c_int,
    ny: c_int,
    nz: c_int,
    fft_type: cufftType,
) -> cufftResult;

/// `inembed` / `onembed` may be null, in which case the stride and distance
/// arguments following them are ignored by the library.
pub type FnCufftPlanMany = unsafe extern "C" fn(
    plan: *mut cufftHandle,
    rank: c_int,
    n: *mut c_int,
    inembed: *mut c_int,
    istride: c_int,
    idist: c_int,
    onembed: *mut c_int,
    ostride: c_int,
    odist: c_int,
    fft_type: cufftType,
    batch: c_int,
) -> cufftResult;

pub type FnCufftDestroy = unsafe extern "C" fn(plan: cufftHandle) -> cufftResult;

pub type FnCufftSetCompatibilityMode =
    unsafe extern "C" fn(plan: cufftHandle, mode: cufftCompatibility) -> cufftResult;

pub type FnCufftSetStream =
    unsafe extern "C" fn(plan: cufftHandle, stream: cudaStream_t) -> cufftResult;

pub type FnCufftGetVersion = unsafe extern "C" fn(version: *mut c_int) -> cufftResult;

pub type FnCufftExecC2C = unsafe extern "C" fn(
    plan: cufftHandle,
    idata: *mut cufftComplex,
    odata: *mut cufftComplex,
    direction: c_int,
) -> cufftResult;

pub type FnCufftExecR2C = unsafe extern "C" fn(
    plan: cufftHandle,
    idata: *mut cufftReal,
    odata: *mut cufftComplex,
) -> cufftResult;

pub type FnCufftExecC2R = unsafe extern "C" fn(
    plan: cufftHandle,
    idata: *mut cufftComplex,
    odata: *mut cufftReal,
) -> cufftResult;

pub type FnCufftExecZ2Z = unsafe extern "C" fn(
    plan: cufftHandle,
    idata: *mut cufftDoubleComplex,
    odata: *mut cufftDoubleComplex,
    direction: c_int,
) -> cufftResult;

pub type FnCufftExecD2Z = unsafe extern "C" fn(
    plan: cufftHandle,
    idata: *mut cufftDoubleReal,
    odata: *mut cufftDoubleComplex,
) -> cufftResult;

pub type FnCufftExecZ2D = unsafe extern "C" fn(
    plan: cufftHandle,
    idata: *mut cufftDoubleComplex,
    odata: *mut cufftDoubleReal,
) -> cufftResult;
