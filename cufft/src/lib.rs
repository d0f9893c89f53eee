//! Binding to the cuFFT C ABI.
//!
//! The library is loaded at runtime ([`CufftLibrary`]), every entry point is
//! reached through the [`CufftApi`] seam, and [`Cufft`] wraps each call with a
//! status check so that native failures surface as [`CufftError`]s.

pub mod ffi;

mod api;
pub use api::*;

mod binding;
pub use binding::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod library;
pub use library::*;

mod plan;
pub use plan::*;

mod status;
pub use status::*;

mod types;
pub use types::*;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;
