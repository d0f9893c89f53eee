use std::ffi::c_int;

use crate::ffi::{
    cudaStream_t, cufftCompatibility, cufftComplex, cufftDoubleComplex, cufftDoubleReal,
    cufftHandle, cufftReal, cufftResult, cufftType,
};

/// One method per cuFFT entry point, with the C argument shapes.
///
/// Implementations forward to the native library (or emulate it) and return
/// the raw result code; status checking happens in [`crate::Cufft`].
/// Entry points that may be absent from a library build return `None` when
/// they are not available.
///
/// # Safety
/// All methods take raw pointers with the exact contract of the C function of
/// the same name.
pub trait CufftApi {
    unsafe fn plan_1d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        fft_type: cufftType,
        batch: c_int,
    ) -> cufftResult;

    unsafe fn plan_2d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        fft_type: cufftType,
    ) -> cufftResult;

    unsafe fn plan_3d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        nz: c_int,
        fft_type: cufftType,
    ) -> cufftResult;

    #[allow(clippy::too_many_arguments)]
    unsafe fn plan_many(
        &self,
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

    unsafe fn destroy(&self, plan: cufftHandle) -> cufftResult;

    unsafe fn set_compatibility_mode(
        &self,
        plan: cufftHandle,
        mode: cufftCompatibility,
    ) -> Option<cufftResult>;

    unsafe fn set_stream(&self, plan: cufftHandle, stream: cudaStream_t) -> cufftResult;

    unsafe fn get_version(&self, version: *mut c_int) -> Option<cufftResult>;

    unsafe fn exec_c2c(
        &self,
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftComplex,
        direction: c_int,
    ) -> cufftResult;

    unsafe fn exec_r2c(
        &self,
        plan: cufftHandle,
        idata: *mut cufftReal,
        odata: *mut cufftComplex,
    ) -> cufftResult;

    unsafe fn exec_c2r(
        &self,
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftReal,
    ) -> cufftResult;

    unsafe fn exec_z2z(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleComplex,
        direction: c_int,
    ) -> cufftResult;

    unsafe fn exec_d2z(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleReal,
        odata: *mut cufftDoubleComplex,
    ) -> cufftResult;

    unsafe fn exec_z2d(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleReal,
    ) -> cufftResult;
}

impl<T: CufftApi + ?Sized> CufftApi for &T {
    unsafe fn plan_1d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        fft_type: cufftType,
        batch: c_int,
    ) -> cufftResult {
        (**self).plan_1d(plan, nx, fft_type, batch)
    }

    unsafe fn plan_2d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        fft_type: cufftType,
    ) -> cufftResult {
        (**self).plan_2d(plan, nx, ny, fft_type)
    }

    unsafe fn plan_3d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        nz: c_int,
        fft_type: cufftType,
    ) -> cufftResult {
        (**self).plan_3d(plan, nx, ny, nz, fft_type)
    }

    unsafe fn plan_many(
        &self,
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
    ) -> cufftResult {
        (**self).plan_many(
            plan, rank, n, inembed, istride, idist, onembed, ostride, odist, fft_type, batch,
        )
    }

    unsafe fn destroy(&self, plan: cufftHandle) -> cufftResult {
        (**self).destroy(plan)
    }

    unsafe fn set_compatibility_mode(
        &self,
        plan: cufftHandle,
        mode: cufftCompatibility,
    ) -> Option<cufftResult> {
        (**self).set_compatibility_mode(plan, mode)
    }

    unsafe fn set_stream(&self, plan: cufftHandle, stream: cudaStream_t) -> cufftResult {
        (**self).set_stream(plan, stream)
    }

    unsafe fn get_version(&self, version: *mut c_int) -> Option<cufftResult> {
        (**self).get_version(version)
    }

    unsafe fn exec_c2c(
        &self,
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftComplex,
        direction: c_int,
    ) -> cufftResult {
        (**self).exec_c2c(plan, idata, odata, direction)
    }

    unsafe fn exec_r2c(
        &self,
        plan: cufftHandle,
        idata: *mut cufftReal,
        odata: *mut cufftComplex,
    ) -> cufftResult {
        (**self).exec_r2c(plan, idata, odata)
    }

    unsafe fn exec_c2r(
        &self,
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftReal,
    ) -> cufftResult {
        (**self).exec_c2r(plan, idata, odata)
    }

    unsafe fn exec_z2z(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleComplex,
        direction: c_int,
    ) -> cufftResult {
        (**self).exec_z2z(plan, idata, odata, direction)
    }

    unsafe fn exec_d2z(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleReal,
        odata: *mut cufftDoubleComplex,
    ) -> cufftResult {
        (**self).exec_d2z(plan, idata, odata)
    }

    unsafe fn exec_z2d(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleReal,
    ) -> cufftResult {
        (**self).exec_z2d(plan, idata, odata)
    }
}
