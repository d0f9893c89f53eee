use std::env;
use std::ffi::OsString;

/// Environment variable naming an explicit cuFFT library file to try first.
pub const CUFFT_LIBRARY_PATH_ENV: &str = "CUFFT_LIBRARY_PATH";

#[cfg(target_os = "windows")]
const DEFAULT_CANDIDATES: &[&str] = &[
    "cufft64_12.dll",
    "cufft64_11.dll",
    "cufft64_10.dll",
    "cufft64_100.dll",
    "cufft64_92.dll",
    "cufft64_91.dll",
    "cufft64_90.dll",
    "cufft64_80.dll",
];

#[cfg(target_os = "macos")]
const DEFAULT_CANDIDATES: &[&str] = &["libcufft.dylib"];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const DEFAULT_CANDIDATES: &[&str] = &[
    "libcufft.so",
    "libcufft.so.12",
    "libcufft.so.11",
    "libcufft.so.10",
];

/// Ordered list of shared library names or paths the loader tries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    candidates: Vec<OsString>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(OsString::from).collect(),
        }
    }
}

impl LoaderConfig {
    /// Platform defaults, preceded by `CUFFT_LIBRARY_PATH` when it is set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env::var_os(CUFFT_LIBRARY_PATH_ENV) {
            Some(path) if !path.is_empty() => config.with_candidate(path),
            _ => config,
        }
    }

    /// Only the given file, no fallback.
    pub fn explicit(path: impl Into<OsString>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// Puts `candidate` in front of the current list.
    pub fn with_candidate(mut self, candidate: impl Into<OsString>) -> Self {
        self.candidates.insert(0, candidate.into());
        self
    }

    pub fn candidates(&self) -> &[OsString] {
        &self.candidates
    }
}
