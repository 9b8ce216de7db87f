//! A growable array of `i32` that reallocates to exactly its length on every
//! size change, with a reusable buffer for its rendered text.


mod errors;
mod raw;
mod render;
pub mod predicate;

use std::fmt::{
    self,
    Debug,
    Display,
    Formatter,
};

pub use errors::Error;
pub use predicate::Predicate;

use raw::RawBuffer;

/// Integer array with no spare capacity.
///
/// `append`, `insert_at` and `remove_at` each change the length by one and
/// remap the storage to the new exact size.
pub struct IntArray{
    len: usize,
    buffer: Option<RawBuffer>,
    rendered: Option<String>,
}

impl IntArray {

    /// Creates an array of `size` zeroes.
    ///
    /// # Errors
    ///
    /// `Error::InvalidSize` when `size` is 0, `Error::AllocationFailure` when
    /// the storage cannot be mapped.
    pub fn new(size:usize) -> Result<Self, Error> {
        if size == 0 {
            tracing::debug!(size, "refusing to create an empty array");
            return Err(Error::InvalidSize(size));
        }

        Ok(Self{
            len: size,
            buffer: Some(RawBuffer::zeroed(size)?),
            rendered: None,
        })
    }

    /// Zeroes every element and sets the length to 0.
    ///
    /// The storage itself is kept, the rendered text is dropped.
    pub fn clear(&mut self) -> Result<(), Error> {
        let buffer = self.buffer.as_mut().ok_or_else(|| {
            tracing::debug!("clear on released storage");
            Error::NullReference
        })?;
        buffer.as_mut_slice().fill(0);
        self.len = 0;
        self.rendered = None;
        Ok(())
    }

    /// Releases the storage and the rendered text, leaving an empty shell.
    ///
    /// Calling it again is a no-op.
    pub fn finalize(&mut self) {
        self.buffer = None;
        self.rendered = None;
        self.len = 0;
    }

    /// Tears down the array held in `slot` and leaves `None` behind.
    pub fn delete(slot: &mut Option<IntArray>) -> Result<(), Error> {
        let mut array = slot.take().ok_or_else(|| {
            tracing::debug!("delete on an empty slot");
            Error::NullReference
        })?;
        array.finalize();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements, or `Error::NullReference` once the storage is released.
    pub fn as_slice(&self) -> Result<&[i32], Error> {
        match self.buffer.as_ref() {
            Some(buffer) => {
                debug_assert!(self.len <= buffer.len());
                Ok(&buffer.as_slice()[..self.len])
            }
            None => Err(Error::NullReference),
        }
    }

    fn as_mut_slice(&mut self) -> Result<&mut [i32], Error> {
        let length = self.len;
        match self.buffer.as_mut() {
            Some(buffer) => Ok(&mut buffer.as_mut_slice()[..length]),
            None => Err(Error::NullReference),
        }
    }

    /// Fails unless `index` is in `0..len`.
    pub fn check_boundary(&self, index:usize) -> Result<(), Error> {
        if index >= self.len {
            tracing::debug!(index, length = self.len, "index outside the array");
            return Err(Error::IndexOutOfRange{index, length: self.len});
        }
        Ok(())
    }

    // `index` must already have passed check_boundary
    fn check_span(&self, index:usize, size:usize) -> Result<(), Error> {
        let available = self.len - index;
        if size > available {
            tracing::debug!(index, size, length = self.len, "span runs past the end");
            return Err(Error::RangeOverflow{requested: size, available});
        }
        Ok(())
    }

    pub fn get(&self, index:usize) -> Result<i32, Error> {
        self.check_boundary(index)?;
        Ok(self.as_slice()?[index])
    }

    pub fn set(&mut self, index:usize, value:i32) -> Result<(), Error> {
        self.check_boundary(index)?;
        self.as_mut_slice()?[index] = value;
        Ok(())
    }

    /// Sets the length to `new_len` and remaps the storage to exactly that size.
    ///
    /// With `keep_data` the overlapping prefix survives and any new tail is
    /// zero; without it the whole array comes back zeroed. On failure both
    /// the length and the old storage are left as they were.
    pub fn resize(&mut self, new_len:usize, keep_data:bool) -> Result<(), Error> {
        if new_len == 0 {
            tracing::debug!(length = self.len, "refusing to resize to 0");
            return Err(Error::InvalidSize(new_len));
        }

        match (keep_data, self.buffer.as_mut()) {
            (true, Some(buffer)) => buffer.remap(new_len)?,
            _ => {
                let fresh = RawBuffer::zeroed(new_len)?;
                self.buffer = Some(fresh);
            }
        }
        self.len = new_len;
        Ok(())
    }

    pub fn append(&mut self, value:i32) -> Result<&mut Self, Error> {
        let length = self.len;
        self.resize(length + 1, true)?;
        self.set(length, value)?;
        Ok(self)
    }

    /// Inserts `value` before the element currently at `index`.
    ///
    /// `index` must name an existing element, so this never appends.
    pub fn insert_at(&mut self, index:usize, value:i32) -> Result<&mut Self, Error> {
        self.check_boundary(index)?;

        let length = self.len;
        let suffix_len = length - index;
        let mut scratch = IntArray::new(suffix_len)?;
        scratch.copy_from(0, self, index, suffix_len)?;

        self.resize(length + 1, true)?;
        self.copy_from(index + 1, &scratch, 0, suffix_len)?;
        self.set(index, value)?;

        scratch.finalize();
        Ok(self)
    }

    /// Removes the element at `index`, shifting the rest left.
    ///
    /// Removing the only element fails with `Error::InvalidSize`: the storage
    /// is never remapped to zero length.
    pub fn remove_at(&mut self, index:usize) -> Result<&mut Self, Error> {
        self.check_boundary(index)?;

        let length = self.len;
        let suffix_len = length - index - 1;
        let scratch = if suffix_len > 0 {
            let mut scratch = IntArray::new(suffix_len)?;
            scratch.copy_from(0, self, index + 1, suffix_len)?;
            Some(scratch)
        } else {
            None
        };

        self.resize(length - 1, true)?;

        if let Some(mut scratch) = scratch {
            self.copy_from(index, &scratch, 0, suffix_len)?;
            scratch.finalize();
        }
        Ok(self)
    }

    /// Copies `size` elements of `src` starting at `src_index` over this
    /// array starting at `dst_index`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidSize` for a zero `size`, `Error::IndexOutOfRange` when
    /// either start index is outside its array, `Error::RangeOverflow` when
    /// either span runs past the end.
    pub fn copy_from(&mut self, dst_index:usize, src:&IntArray, src_index:usize, size:usize) -> Result<&mut Self, Error> {
        if size == 0 {
            tracing::debug!("refusing a zero-length copy");
            return Err(Error::InvalidSize(size));
        }
        self.check_boundary(dst_index)?;
        src.check_boundary(src_index)?;
        src.check_span(src_index, size)?;
        self.check_span(dst_index, size)?;

        let values = &src.as_slice()?[src_index..src_index + size];
        self.as_mut_slice()?[dst_index..dst_index + size].copy_from_slice(values);
        Ok(self)
    }

    /// Same as [`copy_from`](Self::copy_from) with this array as the source.
    /// The two spans may overlap.
    pub fn copy_within(&mut self, dst_index:usize, src_index:usize, size:usize) -> Result<&mut Self, Error> {
        if size == 0 {
            tracing::debug!("refusing a zero-length copy");
            return Err(Error::InvalidSize(size));
        }
        self.check_boundary(dst_index)?;
        self.check_boundary(src_index)?;
        self.check_span(src_index, size)?;
        self.check_span(dst_index, size)?;

        self.as_mut_slice()?.copy_within(src_index..src_index + size, dst_index);
        Ok(self)
    }

    /// Builds an independent array with the same elements and rendered text.
    pub fn try_clone(&self) -> Result<IntArray, Error> {
        let length = self.as_slice()?.len();
        let mut clone = IntArray::new(length)?;
        clone.copy_from(0, self, 0, length)?;
        clone.rendered = self.rendered.clone();
        Ok(clone)
    }

    /// Index of the first element equal to `value`.
    pub fn index_of(&self, value:i32) -> Result<Option<usize>, Error> {
        Ok(self.as_slice()?.iter().position(|&element| element == value))
    }

    /// Index of the last element equal to `value`.
    pub fn last_index_of(&self, value:i32) -> Result<Option<usize>, Error> {
        Ok(self.as_slice()?.iter().rposition(|&element| element == value))
    }

    /// Index of the first element satisfying `predicate`.
    pub fn find<P>(&self, predicate:P) -> Result<Option<usize>, Error>
    where
        P: Fn(i32) -> bool,
    {
        Ok(self.as_slice()?.iter().position(|&element| predicate(element)))
    }

    /// Reverses the elements in place by swapping pairs inward from both ends.
    pub fn reverse(&mut self) -> Result<(), Error> {
        let values = self.as_mut_slice()?;
        let length = values.len();
        for left in 0..length / 2 {
            values.swap(left, length - left - 1);
        }
        Ok(())
    }

    pub fn fill(&mut self, value:i32) -> Result<(), Error> {
        self.as_mut_slice()?.fill(value);
        Ok(())
    }

    /// Renders the array as `{ v1, v2, ..., vN }` into the cached string and
    /// returns it.
    ///
    /// The text is recomputed on every call; only the allocation is reused.
    pub fn render(&mut self) -> Result<&str, Error> {
        let values = match self.buffer.as_ref() {
            Some(buffer) => &buffer.as_slice()[..self.len],
            None => {
                tracing::debug!("render on released storage");
                return Err(Error::NullReference);
            }
        };
        let rendered = self.rendered.get_or_insert_with(String::new);
        render::render_into(rendered, values);
        Ok(rendered.as_str())
    }

    /// The text produced by the last [`render`](Self::render), which may
    /// predate later mutations.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }
}

impl Display for IntArray {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        render::write_to(f, self.as_slice().unwrap_or(&[]))
    }
}

impl Debug for IntArray {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("IntArray")
           .field("len", &self.len)
           .field("buffer", &self.buffer)
           .field("content", &self.as_slice().unwrap_or(&[]))
           .finish()
    }
}
