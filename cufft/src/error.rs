use thiserror::Error;

use crate::CufftStatus;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("no cuFFT shared library could be loaded (tried: {tried})")]
    NotFound { tried: String },

    #[error("failed to load `{name}`: {source}")]
    Load {
        name: String,
        #[source]
        source: libloading::Error,
    },

    #[error("symbol `{symbol}` not found in cuFFT library: {source}")]
    MissingSymbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}

#[derive(Debug, Error)]
pub enum CufftError {
    #[error("{0}")]
    Status(CufftStatus),

    #[error("unrecognized cuFFT status code {0}")]
    UnrecognizedStatus(i32),

    #[error("entry point `{0}` is not exported by the loaded cuFFT library")]
    Unsupported(&'static str),

    #[error("embedding has {len} entries but the transform rank is {rank}")]
    EmbeddingTooShort { rank: usize, len: usize },

    #[error("library error: {0}")]
    Library(#[from] LibraryError),
}

impl CufftError {
    /// The status category, when the error was reported by the native library.
    pub fn status(&self) -> Option<CufftStatus> {
        match self {
            CufftError::Status(status) => Some(*status),
            _ => None,
        }
    }

    /// The raw native result code, when there is one.
    pub fn code(&self) -> Option<i32> {
        match self {
            CufftError::Status(status) => Some(status.code()),
            CufftError::UnrecognizedStatus(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_invalid_plan(&self) -> bool {
        self.status() == Some(CufftStatus::InvalidPlan)
    }
}

impl From<CufftStatus> for CufftError {
    fn from(status: CufftStatus) -> Self {
        CufftError::Status(status)
    }
}

#[derive(Debug, Error)]
#[error("Unknown string `{0}` for FFT type")]
pub struct FftTypeParseError(pub String);

pub type CufftResult<T> = std::result::Result<T, CufftError>;
