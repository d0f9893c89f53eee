//! Dynamic loading of the cuFFT shared library.

use std::ffi::{c_int, OsStr};
use std::fmt;
use std::sync::OnceLock;

use itertools::Itertools;
use libloading::{Library, Symbol};
use log::{debug, info};

use crate::ffi::*;
use crate::{CufftApi, CufftResult, LibraryError, LoaderConfig};

static GLOBAL: OnceLock<CufftLibrary> = OnceLock::new();

/// Entry points resolved from a loaded cuFFT library.
///
/// The function pointers stay valid for as long as `_lib` is alive, which is
/// the lifetime of this value.
pub struct CufftLibrary {
    name: String,
    plan_1d: FnCufftPlan1d,
    plan_2d: FnCufftPlan2d,
    plan_3d: FnCufftPlan3d,
    plan_many: FnCufftPlanMany,
    destroy: FnCufftDestroy,
    set_stream: FnCufftSetStream,
    // Removed from cuFFT in CUDA 9.2.
    set_compatibility_mode: Option<FnCufftSetCompatibilityMode>,
    get_version: Option<FnCufftGetVersion>,
    exec_c2c: FnCufftExecC2C,
    exec_r2c: FnCufftExecR2C,
    exec_c2r: FnCufftExecC2R,
    exec_z2z: FnCufftExecZ2Z,
    exec_d2z: FnCufftExecD2Z,
    exec_z2d: FnCufftExecZ2D,
    _lib: Library,
}

impl fmt::Debug for CufftLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CufftLibrary")
            .field("name", &self.name)
            .field(
                "set_compatibility_mode",
                &self.set_compatibility_mode.is_some(),
            )
            .field("get_version", &self.get_version.is_some())
            .finish()
    }
}

impl CufftLibrary {
    /// The process-wide library, loaded on first use from
    /// [`LoaderConfig::from_env`] and never unloaded.
    pub fn global() -> CufftResult<&'static CufftLibrary> {
        if let Some(lib) = GLOBAL.get() {
            return Ok(lib);
        }
        let lib = Self::load(&LoaderConfig::from_env())?;
        // A concurrent loader may have won; its copy is kept and ours dropped.
        Ok(GLOBAL.get_or_init(|| lib))
    }

    /// Tries every candidate in order and resolves the entry points from the
    /// first library that opens.
    pub fn load(config: &LoaderConfig) -> Result<Self, LibraryError> {
        let (name, lib) = Self::open_first(config)?;
        unsafe { Self::resolve(name, lib) }
    }

    pub fn load_from(path: impl AsRef<OsStr>) -> Result<Self, LibraryError> {
        Self::load(&LoaderConfig::explicit(path.as_ref()))
    }

    /// Name or path of the library file that was opened.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_compatibility_mode(&self) -> bool {
        self.set_compatibility_mode.is_some()
    }

    fn open_first(config: &LoaderConfig) -> Result<(String, Library), LibraryError> {
        let candidates = config.candidates();
        if let [only] = candidates {
            let name = only.to_string_lossy().into_owned();
            return match unsafe { Library::new(only) } {
                Ok(lib) => {
                    info!("loaded cuFFT from: {}", name);
                    Ok((name, lib))
                }
                Err(source) => Err(LibraryError::Load { name, source }),
            };
        }

        for candidate in candidates {
            let name = candidate.to_string_lossy().into_owned();
            match unsafe { Library::new(candidate) } {
                Ok(lib) => {
                    info!("loaded cuFFT from: {}", name);
                    return Ok((name, lib));
                }
                Err(e) => debug!("failed to load {}: {}", name, e),
            }
        }

        Err(LibraryError::NotFound {
            tried: candidates.iter().map(|c| c.to_string_lossy()).join(", "),
        })
    }

    unsafe fn resolve(name: String, lib: Library) -> Result<Self, LibraryError> {
        Ok(Self {
            plan_1d: Self::load_fn(&lib, "cufftPlan1d")?,
            plan_2d: Self::load_fn(&lib, "cufftPlan2d")?,
            plan_3d: Self::load_fn(&lib, "cufftPlan3d")?,
            plan_many: Self::load_fn(&lib, "cufftPlanMany")?,
            destroy: Self::load_fn(&lib, "cufftDestroy")?,
            set_stream: Self::load_fn(&lib, "cufftSetStream")?,
            set_compatibility_mode: Self::load_fn_opt(&lib, "cufftSetCompatibilityMode"),
            get_version: Self::load_fn_opt(&lib, "cufftGetVersion"),
            exec_c2c: Self::load_fn(&lib, "cufftExecC2C")?,
            exec_r2c: Self::load_fn(&lib, "cufftExecR2C")?,
            exec_c2r: Self::load_fn(&lib, "cufftExecC2R")?,
            exec_z2z: Self::load_fn(&lib, "cufftExecZ2Z")?,
            exec_d2z: Self::load_fn(&lib, "cufftExecD2Z")?,
            exec_z2d: Self::load_fn(&lib, "cufftExecZ2D")?,
            name,
            _lib: lib,
        })
    }

    unsafe fn load_fn<F: Copy>(lib: &Library, symbol: &'static str) -> Result<F, LibraryError> {
        let sym: Symbol<F> = lib
            .get(symbol.as_bytes())
            .map_err(|source| LibraryError::MissingSymbol { symbol, source })?;
        Ok(*sym)
    }

    unsafe fn load_fn_opt<F: Copy>(lib: &Library, symbol: &'static str) -> Option<F> {
        match lib.get::<F>(symbol.as_bytes()) {
            Ok(sym) => Some(*sym),
            Err(e) => {
                debug!("optional cuFFT symbol {} unavailable: {}", symbol, e);
                None
            }
        }
    }
}

impl CufftApi for CufftLibrary {
    unsafe fn plan_1d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        fft_type: cufftType,
        batch: c_int,
    ) -> cufftResult {
        (self.plan_1d)(plan, nx, fft_type, batch)
    }

    unsafe fn plan_2d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        fft_type: cufftType,
    ) -> cufftResult {
        (self.plan_2d)(plan, nx, ny, fft_type)
    }

    unsafe fn plan_3d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        nz: c_int,
        fft_type: cufftType,
    ) -> cufftResult {
        (self.plan_3d)(plan, nx, ny, nz, fft_type)
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
        (self.plan_many)(
            plan, rank, n, inembed, istride, idist, onembed, ostride, odist, fft_type, batch,
        )
    }

    unsafe fn destroy(&self, plan: cufftHandle) -> cufftResult {
        (self.destroy)(plan)
    }

    unsafe fn set_compatibility_mode(
        &self,
        plan: cufftHandle,
        mode: cufftCompatibility,
    ) -> Option<cufftResult> {
        self.set_compatibility_mode.map(|f| f(plan, mode))
    }

    unsafe fn set_stream(&self, plan: cufftHandle, stream: cudaStream_t) -> cufftResult {
        (self.set_stream)(plan, stream)
    }

    unsafe fn get_version(&self, version: *mut c_int) -> Option<cufftResult> {
        self.get_version.map(|f| f(version))
    }

    unsafe fn exec_c2c(
        &self,
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftComplex,
        direction: c_int,
    ) -> cufftResult {
        (self.exec_c2c)(plan, idata, odata, direction)
    }

    unsafe fn exec_r2c(
        &self,
        plan: cufftHandle,
        idata: *mut cufftReal,
        odata: *mut cufftComplex,
    ) -> cufftResult {
        (self.exec_r2c)(plan, idata, odata)
    }

    unsafe fn exec_c2r(
        &self,
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftReal,
    ) -> cufftResult {
        (self.exec_c2r)(plan, idata, odata)
    }

    unsafe fn exec_z2z(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleComplex,
        direction: c_int,
    ) -> cufftResult {
        (self.exec_z2z)(plan, idata, odata, direction)
    }

    unsafe fn exec_d2z(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleReal,
        odata: *mut cufftDoubleComplex,
    ) -> cufftResult {
        (self.exec_d2z)(plan, idata, odata)
    }

    unsafe fn exec_z2d(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleReal,
    ) -> cufftResult {
        (self.exec_z2d)(plan, idata, odata)
    }
}
