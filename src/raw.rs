//! Exact-size storage for [`IntArray`](crate::IntArray).
//!
//! Every buffer is its own anonymous mapping of exactly `elem_len` integers.
//! There is no spare capacity: growing or shrinking by one element remaps
//! the whole region.

use std::{
    slice,
    fmt::{
        self,
        Debug,
        Formatter,
    },
    ffi::c_void,
    ptr::NonNull,
    mem::size_of,
    num::NonZeroUsize,
    os::fd::BorrowedFd,
};

use nix::{
    errno::Errno,
    sys::mman::{
        mmap,
        mremap,
        munmap,
        MapFlags,
        MRemapFlags,
        ProtFlags,
    },
};

use crate::errors::Error;

pub(crate) struct RawBuffer{
    elem_len: usize,
    start: NonNull<i32>,
}

fn byte_len(elem_len: usize, call: &'static str) -> Result<NonZeroUsize, Error> {
    let bytes = elem_len.checked_mul(size_of::<i32>()).ok_or(Error::AllocationFailure{
        call,
        errno: Errno::ENOMEM,
    })?;
    NonZeroUsize::new(bytes).ok_or(Error::InvalidSize(elem_len))
}

impl RawBuffer {

    /// Maps a fresh region of `elem_len` integers, all zero.
    pub(crate) fn zeroed(elem_len: usize) -> Result<Self, Error> {
        let byte_len = byte_len(elem_len, "mmap")?;

        let memory_holder = unsafe{mmap(
            None,
            byte_len,
            ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
            MapFlags::MAP_PRIVATE | MapFlags::MAP_ANONYMOUS,
            None::<BorrowedFd>,
            0
        )}.map_err(|errno| {
            tracing::debug!(elem_len, %errno, "mmap failed");
            Error::AllocationFailure{call: "mmap", errno}
        })?;

        let start = NonNull::new(memory_holder as *mut i32).ok_or(Error::AllocationFailure{
            call: "mmap",
            errno: Errno::ENOMEM,
        })?;
        tracing::trace!(elem_len, "mapped buffer");

        Ok(Self{
            elem_len,
            start,
        })
    }

    /// Remaps to exactly `elem_len` integers, keeping the overlapping prefix.
    ///
    /// On failure the old mapping is untouched and still owned by `self`.
    /// Elements gained by growing read as zero.
    pub(crate) fn remap(&mut self, elem_len: usize) -> Result<(), Error> {
        let old_elem_len = self.elem_len;
        let new_byte_len = byte_len(elem_len, "mremap")?;

        let moved = unsafe{mremap(
            self.start.as_ptr() as *mut c_void,
            old_elem_len * size_of::<i32>(),
            new_byte_len.get(),
            MRemapFlags::MREMAP_MAYMOVE,
            None
        )}.map_err(|errno| {
            tracing::debug!(old_elem_len, elem_len, %errno, "mremap failed");
            Error::AllocationFailure{call: "mremap", errno}
        })?;

        // mremap never hands back null on success
        self.start = unsafe{NonNull::new_unchecked(moved as *mut i32)};
        self.elem_len = elem_len;
        if elem_len > old_elem_len {
            self.as_mut_slice()[old_elem_len..].fill(0);
        }
        tracing::trace!(old_elem_len, elem_len, "remapped buffer");
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.elem_len
    }

    pub(crate) fn as_slice(&self) -> &[i32] {
        unsafe{slice::from_raw_parts(self.start.as_ptr(), self.elem_len)}
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [i32] {
        unsafe{slice::from_raw_parts_mut(self.start.as_ptr(), self.elem_len)}
    }
}

impl Drop for RawBuffer {
    fn drop(&mut self) {
        let result = unsafe{munmap(
            self.start.as_ptr() as *mut c_void,
            self.elem_len * size_of::<i32>()
        )};
        if let Err(errno) = result {
            tracing::debug!(elem_len = self.elem_len, %errno, "munmap failed");
        }
    }
}

impl Debug for RawBuffer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("RawBuffer")
           .field("elem_len", &self.elem_len)
           .field("byte_len", &format!("0x{:X}", self.elem_len * size_of::<i32>()))
           .field("start", &self.start)
           .finish()
    }
}
