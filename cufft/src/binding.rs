//! Checked wrappers over the cuFFT entry points.
//!
//! Every method issues exactly one native call and checks its status before
//! returning. A failed plan constructor never yields a [`Plan`].

use std::ffi::c_int;

use log::{debug, trace};

use crate::ffi::cufftHandle;
use crate::status::check_status;
use crate::{
    CompatibilityMode, Complex32, Complex64, CufftApi, CufftError, CufftLibrary, CufftResult,
    Direction, FftType, Layout, Plan, PlanGuard, Stream,
};

pub struct Cufft<A: CufftApi = CufftLibrary> {
    api: A,
}

impl Cufft<&'static CufftLibrary> {
    /// Binds the process-wide library, loading it on first use.
    pub fn global() -> CufftResult<Self> {
        Ok(Self::new(CufftLibrary::global()?))
    }
}

impl<A: CufftApi> Cufft<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// One-dimensional plan of `nx` points, `batch` transforms (1 for a single one).
    pub fn plan_1d(&self, nx: i32, fft_type: FftType, batch: i32) -> CufftResult<Plan> {
        let mut handle: cufftHandle = 0;
        check_status(unsafe { self.api.plan_1d(&mut handle, nx, fft_type.as_raw(), batch) })?;
        debug!("cufftPlan1d nx={} type={} batch={} -> plan {}", nx, fft_type, batch, handle);
        Ok(Plan(handle))
    }

    pub fn plan_2d(&self, nx: i32, ny: i32, fft_type: FftType) -> CufftResult<Plan> {
        let mut handle: cufftHandle = 0;
        check_status(unsafe { self.api.plan_2d(&mut handle, nx, ny, fft_type.as_raw()) })?;
        debug!("cufftPlan2d nx={} ny={} type={} -> plan {}", nx, ny, fft_type, handle);
        Ok(Plan(handle))
    }

    pub fn plan_3d(&self, nx: i32, ny: i32, nz: i32, fft_type: FftType) -> CufftResult<Plan> {
        let mut handle: cufftHandle = 0;
        check_status(unsafe { self.api.plan_3d(&mut handle, nx, ny, nz, fft_type.as_raw()) })?;
        debug!(
            "cufftPlan3d nx={} ny={} nz={} type={} -> plan {}",
            nx, ny, nz, fft_type, handle
        );
        Ok(Plan(handle))
    }

    /// Batched plan of rank `dims.len()` with optional advanced layouts.
    ///
    /// Embeddings shorter than the rank are rejected before reaching the
    /// library, which would read `rank` entries from them.
    pub fn plan_many(
        &self,
        dims: &[i32],
        input: Layout<'_>,
        output: Layout<'_>,
        fft_type: FftType,
        batch: i32,
    ) -> CufftResult<Plan> {
        let rank = dims.len();
        input.check_rank(rank)?;
        output.check_rank(rank)?;

        let mut handle: cufftHandle = 0;
        let status = unsafe {
            self.api.plan_many(
                &mut handle,
                rank as c_int,
                dims.as_ptr() as *mut c_int,
                input.embed_ptr(),
                input.stride,
                input.dist,
                output.embed_ptr(),
                output.stride,
                output.dist,
                fft_type.as_raw(),
                batch,
            )
        };
        check_status(status)?;
        debug!(
            "cufftPlanMany dims={:?} type={} batch={} -> plan {}",
            dims, fft_type, batch, handle
        );
        Ok(Plan(handle))
    }

    /// Releases the native plan. A stale handle yields `CUFFT_INVALID_PLAN`.
    pub fn destroy(&self, plan: Plan) -> CufftResult<()> {
        check_status(unsafe { self.api.destroy(plan.0) })?;
        debug!("cufftDestroy plan {}", plan.0);
        Ok(())
    }

    /// Ties `plan` to this binding; it is destroyed when the guard drops.
    pub fn guard(&self, plan: Plan) -> PlanGuard<'_, A> {
        PlanGuard::new(self, plan)
    }

    pub fn set_compatibility_mode(&self, plan: Plan, mode: CompatibilityMode) -> CufftResult<()> {
        let status = unsafe { self.api.set_compatibility_mode(plan.0, mode.as_raw()) }
            .ok_or(CufftError::Unsupported("cufftSetCompatibilityMode"))?;
        check_status(status)?;
        trace!("cufftSetCompatibilityMode plan {} mode {:?}", plan.0, mode);
        Ok(())
    }

    /// Binds `plan` to `stream`, replacing any previous binding.
    pub fn set_stream(&self, plan: Plan, stream: Stream) -> CufftResult<()> {
        check_status(unsafe { self.api.set_stream(plan.0, stream.as_raw()) })?;
        trace!("cufftSetStream plan {} stream {:?}", plan.0, stream.as_raw());
        Ok(())
    }

    pub fn version(&self) -> CufftResult<i32> {
        let mut version: c_int = 0;
        let status = unsafe { self.api.get_version(&mut version) }
            .ok_or(CufftError::Unsupported("cufftGetVersion"))?;
        check_status(status)?;
        Ok(version)
    }

    /// # Safety
    /// `idata` and `odata` must be device allocations laid out as `plan`
    /// expects.
    pub unsafe fn exec_c2c(
        &self,
        plan: Plan,
        idata: *mut Complex32,
        odata: *mut Complex32,
        direction: Direction,
    ) -> CufftResult<()> {
        check_status(self.api.exec_c2c(plan.0, idata, odata, direction.as_raw()))?;
        trace!("cufftExecC2C plan {} {:?}", plan.0, direction);
        Ok(())
    }

    /// # Safety
    /// See [`Cufft::exec_c2c`]; `plan` must be an `R2C` plan.
    pub unsafe fn exec_r2c(
        &self,
        plan: Plan,
        idata: *mut f32,
        odata: *mut Complex32,
    ) -> CufftResult<()> {
        check_status(self.api.exec_r2c(plan.0, idata, odata))?;
        trace!("cufftExecR2C plan {}", plan.0);
        Ok(())
    }

    /// # Safety
    /// See [`Cufft::exec_c2c`]; `plan` must be a `C2R` plan.
    pub unsafe fn exec_c2r(
        &self,
        plan: Plan,
        idata: *mut Complex32,
        odata: *mut f32,
    ) -> CufftResult<()> {
        check_status(self.api.exec_c2r(plan.0, idata, odata))?;
        trace!("cufftExecC2R plan {}", plan.0);
        Ok(())
    }

    /// # Safety
    /// See [`Cufft::exec_c2c`]; `plan` must be a `Z2Z` plan.
    pub unsafe fn exec_z2z(
        &self,
        plan: Plan,
        idata: *mut Complex64,
        odata: *mut Complex64,
        direction: Direction,
    ) -> CufftResult<()> {
        check_status(self.api.exec_z2z(plan.0, idata, odata, direction.as_raw()))?;
        trace!("cufftExecZ2Z plan {} {:?}", plan.0, direction);
        Ok(())
    }

    /// # Safety
    /// See [`Cufft::exec_c2c`]; `plan` must be a `D2Z` plan.
    pub unsafe fn exec_d2z(
        &self,
        plan: Plan,
        idata: *mut f64,
        odata: *mut Complex64,
    ) -> CufftResult<()> {
        check_status(self.api.exec_d2z(plan.0, idata, odata))?;
        trace!("cufftExecD2Z plan {}", plan.0);
        Ok(())
    }

    /// # Safety
    /// See [`Cufft::exec_c2c`]; `plan` must be a `Z2D` plan.
    pub unsafe fn exec_z2d(
        &self,
        plan: Plan,
        idata: *mut Complex64,
        odata: *mut f64,
    ) -> CufftResult<()> {
        check_status(self.api.exec_z2d(plan.0, idata, odata))?;
        trace!("cufftExecZ2D plan {}", plan.0);
        Ok(())
    }
}
