//! In-process stand-in for the native cuFFT library.
//!
//! `MockCufft` keeps a plan table the way the native library does: handles
//! are handed out from an increasing counter and never reused, unknown
//! handles are rejected with `CUFFT_INVALID_PLAN`, and argument errors come
//! back as the matching status codes. It never touches the data pointers.

use std::collections::{HashMap, VecDeque};
use std::ffi::c_int;
use std::sync::{Mutex, MutexGuard};

use crate::ffi::{
    cudaStream_t, cufftCompatibility, cufftComplex, cufftDoubleComplex, cufftDoubleReal,
    cufftHandle, cufftReal, cufftResult, cufftType,
};
use crate::{CompatibilityMode, CufftApi, CufftStatus, Direction, FftType, Plan};

pub const MOCK_VERSION: i32 = 11_200;

/// Native state of one live plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockPlan {
    pub fft_type: FftType,
    pub dims: Vec<i32>,
    pub batch: i32,
    pub input_embed: Option<Vec<i32>>,
    pub output_embed: Option<Vec<i32>>,
    /// Address of the bound stream, 0 for the default stream.
    pub stream: usize,
    pub mode: CompatibilityMode,
    pub executions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecRecord {
    pub plan: cufftHandle,
    pub fft_type: FftType,
    pub stream: usize,
    pub direction: Option<Direction>,
}

#[derive(Debug, Default)]
struct MockState {
    last_handle: cufftHandle,
    plans: HashMap<cufftHandle, MockPlan>,
    injected: VecDeque<cufftResult>,
    execs: Vec<ExecRecord>,
}

const SUCCESS: cufftResult = CufftStatus::Success as cufftResult;
const INVALID_PLAN: cufftResult = CufftStatus::InvalidPlan as cufftResult;
const INVALID_TYPE: cufftResult = CufftStatus::InvalidType as cufftResult;
const INVALID_VALUE: cufftResult = CufftStatus::InvalidValue as cufftResult;
const INVALID_SIZE: cufftResult = CufftStatus::InvalidSize as cufftResult;

impl MockState {
    fn create(
        &mut self,
        out: *mut cufftHandle,
        fft_type: cufftType,
        dims: Vec<i32>,
        batch: c_int,
        embeds: (Option<Vec<i32>>, Option<Vec<i32>>),
    ) -> cufftResult {
        if let Some(code) = self.injected.pop_front() {
            return code;
        }
        let Some(fft_type) = FftType::from_raw(fft_type) else {
            return INVALID_TYPE;
        };
        if dims.is_empty() || dims.iter().any(|&d| d <= 0) || batch <= 0 {
            return INVALID_SIZE;
        }
        if out.is_null() {
            return INVALID_VALUE;
        }

        self.last_handle += 1;
        let handle = self.last_handle;
        self.plans.insert(
            handle,
            MockPlan {
                fft_type,
                dims,
                batch,
                input_embed: embeds.0,
                output_embed: embeds.1,
                stream: 0,
                mode: CompatibilityMode::default(),
                executions: 0,
            },
        );
        unsafe { *out = handle };
        SUCCESS
    }

    fn exec(
        &mut self,
        plan: cufftHandle,
        expected: FftType,
        has_null: bool,
        direction: Option<c_int>,
    ) -> cufftResult {
        if let Some(code) = self.injected.pop_front() {
            return code;
        }
        let Some(entry) = self.plans.get_mut(&plan) else {
            return INVALID_PLAN;
        };
        if entry.fft_type != expected {
            return INVALID_TYPE;
        }
        if has_null {
            return INVALID_VALUE;
        }
        let direction = match direction.map(Direction::from_raw) {
            Some(None) => return INVALID_VALUE,
            Some(parsed) => parsed,
            None => None,
        };

        entry.executions += 1;
        self.execs.push(ExecRecord {
            plan,
            fft_type: expected,
            stream: entry.stream,
            direction,
        });
        SUCCESS
    }
}

#[derive(Debug)]
pub struct MockCufft {
    state: Mutex<MockState>,
    compatibility_mode: bool,
    version: Option<i32>,
}

impl Default for MockCufft {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCufft {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
            compatibility_mode: true,
            version: Some(MOCK_VERSION),
        }
    }

    /// A library build without `cufftSetCompatibilityMode` or `cufftGetVersion`.
    pub fn minimal() -> Self {
        Self {
            compatibility_mode: false,
            version: None,
            ..Self::new()
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// The next native call returns `status` without any effect.
    pub fn fail_next(&self, status: CufftStatus) {
        self.fail_next_raw(status.code());
    }

    pub fn fail_next_raw(&self, code: cufftResult) {
        self.state().injected.push_back(code);
    }

    pub fn live_plans(&self) -> usize {
        self.state().plans.len()
    }

    pub fn plan(&self, plan: Plan) -> Option<MockPlan> {
        self.state().plans.get(&plan.as_raw()).cloned()
    }

    pub fn exec_log(&self) -> Vec<ExecRecord> {
        self.state().execs.clone()
    }
}

unsafe fn read_dims(ptr: *const c_int, rank: usize) -> Option<Vec<i32>> {
    if ptr.is_null() {
        None
    } else {
        Some(std::slice::from_raw_parts(ptr, rank).to_vec())
    }
}

impl CufftApi for MockCufft {
    unsafe fn plan_1d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        fft_type: cufftType,
        batch: c_int,
    ) -> cufftResult {
        self.state().create(plan, fft_type, vec![nx], batch, (None, None))
    }

    unsafe fn plan_2d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        fft_type: cufftType,
    ) -> cufftResult {
        self.state().create(plan, fft_type, vec![nx, ny], 1, (None, None))
    }

    unsafe fn plan_3d(
        &self,
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        nz: c_int,
        fft_type: cufftType,
    ) -> cufftResult {
        self.state().create(plan, fft_type, vec![nx, ny, nz], 1, (None, None))
    }

    unsafe fn plan_many(
        &self,
        plan: *mut cufftHandle,
        rank: c_int,
        n: *mut c_int,
        inembed: *mut c_int,
        _istride: c_int,
        _idist: c_int,
        onembed: *mut c_int,
        _ostride: c_int,
        _odist: c_int,
        fft_type: cufftType,
        batch: c_int,
    ) -> cufftResult {
        let mut state = self.state();
        if !(1..=3).contains(&rank) {
            return state.injected.pop_front().unwrap_or(INVALID_SIZE);
        }
        let rank = rank as usize;
        let Some(dims) = read_dims(n, rank) else {
            return state.injected.pop_front().unwrap_or(INVALID_VALUE);
        };
        let embeds = (read_dims(inembed, rank), read_dims(onembed, rank));
        state.create(plan, fft_type, dims, batch, embeds)
    }

    unsafe fn destroy(&self, plan: cufftHandle) -> cufftResult {
        let mut state = self.state();
        if let Some(code) = state.injected.pop_front() {
            return code;
        }
        match state.plans.remove(&plan) {
            Some(_) => SUCCESS,
            None => INVALID_PLAN,
        }
    }

    unsafe fn set_compatibility_mode(
        &self,
        plan: cufftHandle,
        mode: cufftCompatibility,
    ) -> Option<cufftResult> {
        if !self.compatibility_mode {
            return None;
        }
        let mut state = self.state();
        if let Some(code) = state.injected.pop_front() {
            return Some(code);
        }
        let Some(entry) = state.plans.get_mut(&plan) else {
            return Some(INVALID_PLAN);
        };
        let Some(mode) = CompatibilityMode::from_raw(mode) else {
            return Some(INVALID_VALUE);
        };
        entry.mode = mode;
        Some(SUCCESS)
    }

    unsafe fn set_stream(&self, plan: cufftHandle, stream: cudaStream_t) -> cufftResult {
        let mut state = self.state();
        if let Some(code) = state.injected.pop_front() {
            return code;
        }
        match state.plans.get_mut(&plan) {
            Some(entry) => {
                entry.stream = stream as usize;
                SUCCESS
            }
            None => INVALID_PLAN,
        }
    }

    unsafe fn get_version(&self, version: *mut c_int) -> Option<cufftResult> {
        let value = self.version?;
        if let Some(code) = self.state().injected.pop_front() {
            return Some(code);
        }
        *version = value;
        Some(SUCCESS)
    }

    unsafe fn exec_c2c(
        &self,
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftComplex,
        direction: c_int,
    ) -> cufftResult {
        let has_null = idata.is_null() || odata.is_null();
        self.state().exec(plan, FftType::C2C, has_null, Some(direction))
    }

    unsafe fn exec_r2c(
        &self,
        plan: cufftHandle,
        idata: *mut cufftReal,
        odata: *mut cufftComplex,
    ) -> cufftResult {
        let has_null = idata.is_null() || odata.is_null();
        self.state().exec(plan, FftType::R2C, has_null, None)
    }

    unsafe fn exec_c2r(
        &self,
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftReal,
    ) -> cufftResult {
        let has_null = idata.is_null() || odata.is_null();
        self.state().exec(plan, FftType::C2R, has_null, None)
    }

    unsafe fn exec_z2z(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleComplex,
        direction: c_int,
    ) -> cufftResult {
        let has_null = idata.is_null() || odata.is_null();
        self.state().exec(plan, FftType::Z2Z, has_null, Some(direction))
    }

    unsafe fn exec_d2z(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleReal,
        odata: *mut cufftDoubleComplex,
    ) -> cufftResult {
        let has_null = idata.is_null() || odata.is_null();
        self.state().exec(plan, FftType::D2Z, has_null, None)
    }

    unsafe fn exec_z2d(
        &self,
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleReal,
    ) -> cufftResult {
        let has_null = idata.is_null() || odata.is_null();
        self.state().exec(plan, FftType::Z2D, has_null, None)
    }
}
