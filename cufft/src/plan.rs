use log::warn;

use crate::ffi::cufftHandle;
use crate::{Cufft, CufftApi, CufftError, CufftResult};

/// Opaque cuFFT plan handle.
///
/// Plans are plain values: copying one does not duplicate the native plan and
/// dropping one does not release it. Call [`Cufft::destroy`], or wrap the plan
/// in a [`PlanGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plan(pub(crate) cufftHandle);

impl Plan {
    /// # Safety
    /// `raw` must come from a cuFFT plan constructor. Passing any other value
    /// to the native library is undefined.
    pub unsafe fn from_raw(raw: cufftHandle) -> Self {
        Plan(raw)
    }

    #[inline]
    pub fn as_raw(self) -> cufftHandle {
        self.0
    }
}

/// Advanced data layout of one side of a [`Cufft::plan_many`] transform.
///
/// With `embed == None` the library uses the basic contiguous layout and
/// ignores `stride` and `dist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout<'a> {
    pub embed: Option<&'a [i32]>,
    pub stride: i32,
    pub dist: i32,
}

impl Default for Layout<'_> {
    fn default() -> Self {
        Self::basic()
    }
}

impl<'a> Layout<'a> {
    pub const fn basic() -> Self {
        Self {
            embed: None,
            stride: 1,
            dist: 0,
        }
    }

    pub const fn new(embed: &'a [i32], stride: i32, dist: i32) -> Self {
        Self {
            embed: Some(embed),
            stride,
            dist,
        }
    }

    pub(crate) fn check_rank(&self, rank: usize) -> CufftResult<()> {
        match self.embed {
            Some(embed) if embed.len() < rank => Err(CufftError::EmbeddingTooShort {
                rank,
                len: embed.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Null for the basic layout. The library only reads through it.
    pub(crate) fn embed_ptr(&self) -> *mut i32 {
        match self.embed {
            Some(embed) => embed.as_ptr() as *mut i32,
            None => std::ptr::null_mut(),
        }
    }
}

/// Destroys the wrapped plan when dropped.
pub struct PlanGuard<'a, A: CufftApi> {
    cufft: &'a Cufft<A>,
    plan: Plan,
    armed: bool,
}

impl<'a, A: CufftApi> PlanGuard<'a, A> {
    pub fn new(cufft: &'a Cufft<A>, plan: Plan) -> Self {
        Self {
            cufft,
            plan,
            armed: true,
        }
    }

    #[inline]
    pub fn plan(&self) -> Plan {
        self.plan
    }

    /// Destroys the plan now and reports the native status.
    pub fn destroy(mut self) -> CufftResult<()> {
        self.armed = false;
        self.cufft.destroy(self.plan)
    }

    /// Hands the plan back to the caller without destroying it.
    pub fn into_inner(mut self) -> Plan {
        self.armed = false;
        self.plan
    }
}

impl<A: CufftApi> Drop for PlanGuard<'_, A> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = self.cufft.destroy(self.plan) {
            warn!("failed to destroy cuFFT plan {}: {}", self.plan.0, e);
        }
    }
}
