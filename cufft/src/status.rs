use std::fmt;

use crate::ffi::cufftResult;
use crate::{CufftError, CufftResult};

/// Result codes returned by every cuFFT entry point.
///
/// The table is fixed by the native ABI: codes `0..=13`, in this order.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CufftStatus {
    Success = 0,
    InvalidPlan = 1,
    AllocFailed = 2,
    InvalidType = 3,
    InvalidValue = 4,
    InternalError = 5,
    ExecFailed = 6,
    SetupFailed = 7,
    InvalidSize = 8,
    UnalignedData = 9,
    IncompleteParameterList = 10,
    InvalidDevice = 11,
    ParseError = 12,
    NoWorkspace = 13,
}

impl CufftStatus {
    /// Every status in code order.
    pub const ALL: [CufftStatus; 14] = [
        CufftStatus::Success,
        CufftStatus::InvalidPlan,
        CufftStatus::AllocFailed,
        CufftStatus::InvalidType,
        CufftStatus::InvalidValue,
        CufftStatus::InternalError,
        CufftStatus::ExecFailed,
        CufftStatus::SetupFailed,
        CufftStatus::InvalidSize,
        CufftStatus::UnalignedData,
        CufftStatus::IncompleteParameterList,
        CufftStatus::InvalidDevice,
        CufftStatus::ParseError,
        CufftStatus::NoWorkspace,
    ];

    pub fn from_code(code: cufftResult) -> Option<Self> {
        match code {
            0 => Some(CufftStatus::Success),
            1 => Some(CufftStatus::InvalidPlan),
            2 => Some(CufftStatus::AllocFailed),
            3 => Some(CufftStatus::InvalidType),
            4 => Some(CufftStatus::InvalidValue),
            5 => Some(CufftStatus::InternalError),
            6 => Some(CufftStatus::ExecFailed),
            7 => Some(CufftStatus::SetupFailed),
            8 => Some(CufftStatus::InvalidSize),
            9 => Some(CufftStatus::UnalignedData),
            10 => Some(CufftStatus::IncompleteParameterList),
            11 => Some(CufftStatus::InvalidDevice),
            12 => Some(CufftStatus::ParseError),
            13 => Some(CufftStatus::NoWorkspace),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> cufftResult {
        self as cufftResult
    }

    #[inline]
    pub fn is_success(self) -> bool {
        self == CufftStatus::Success
    }

    /// Canonical name as spelled in `cufft.h`.
    pub fn name(self) -> &'static str {
        match self {
            CufftStatus::Success => "CUFFT_SUCCESS",
            CufftStatus::InvalidPlan => "CUFFT_INVALID_PLAN",
            CufftStatus::AllocFailed => "CUFFT_ALLOC_FAILED",
            CufftStatus::InvalidType => "CUFFT_INVALID_TYPE",
            CufftStatus::InvalidValue => "CUFFT_INVALID_VALUE",
            CufftStatus::InternalError => "CUFFT_INTERNAL_ERROR",
            CufftStatus::ExecFailed => "CUFFT_EXEC_FAILED",
            CufftStatus::SetupFailed => "CUFFT_SETUP_FAILED",
            CufftStatus::InvalidSize => "CUFFT_INVALID_SIZE",
            CufftStatus::UnalignedData => "CUFFT_UNALIGNED_DATA",
            CufftStatus::IncompleteParameterList => "CUFFT_INCOMPLETE_PARAMETER_LIST",
            CufftStatus::InvalidDevice => "CUFFT_INVALID_DEVICE",
            CufftStatus::ParseError => "CUFFT_PARSE_ERROR",
            CufftStatus::NoWorkspace => "CUFFT_NO_WORKSPACE",
        }
    }
}

impl fmt::Display for CufftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns a raw native result into `Ok(())` or the matching error.
#[inline]
pub fn check_status(code: cufftResult) -> CufftResult<()> {
    match CufftStatus::from_code(code) {
        Some(CufftStatus::Success) => Ok(()),
        Some(status) => Err(CufftError::Status(status)),
        None => Err(CufftError::UnrecognizedStatus(code)),
    }
}
