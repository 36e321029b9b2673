/*
 * Copyright (c) Radzivon Bartoshyk, 11/2024. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::array_error::{
    check_dtype, check_overflow_v2, check_rank, isize_from, ArrayError, MismatchedSize,
};
use crate::array_support::{read_element, ArrayDtype, ArrayElement, MAX_DIMS};
use crate::cursor::for_each_offset;
use std::fmt::Debug;
use std::ops::Range;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Geometry of a view: dtype, right-aligned shape and byte strides, and the
/// byte offset of the first element.
///
/// Unused leading slots hold extent 1 and stride 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ArrayLayout {
    pub(crate) dtype: ArrayDtype,
    pub(crate) ndim: usize,
    pub(crate) shape: [usize; MAX_DIMS],
    pub(crate) strides: [isize; MAX_DIMS],
    pub(crate) offset: usize,
}

impl ArrayLayout {
    pub(crate) fn new(
        dtype: ArrayDtype,
        shape: &[usize],
        strides: &[isize],
        offset: usize,
    ) -> Result<Self, ArrayError> {
        check_rank(shape.len())?;
        if strides.len() != shape.len() {
            return Err(ArrayError::StridesLengthMismatch(MismatchedSize {
                expected: shape.len(),
                received: strides.len(),
            }));
        }
        let first = MAX_DIMS - shape.len();
        let mut layout = ArrayLayout {
            dtype,
            ndim: shape.len(),
            shape: [1; MAX_DIMS],
            strides: [0; MAX_DIMS],
            offset,
        };
        layout.shape[first..].copy_from_slice(shape);
        layout.strides[first..].copy_from_slice(strides);
        Ok(layout)
    }

    /// Row-major layout with canonical strides starting at byte 0.
    pub(crate) fn dense(dtype: ArrayDtype, shape: &[usize]) -> Result<Self, ArrayError> {
        check_rank(shape.len())?;
        let mut strides = [0isize; MAX_DIMS];
        let mut stride = dtype.itemsize();
        for (axis, &extent) in shape.iter().enumerate().rev() {
            strides[axis] = isize_from(stride)?;
            stride = check_overflow_v2(stride, extent)?;
        }
        isize_from(stride)?;
        ArrayLayout::new(dtype, shape, &strides[..shape.len()], 0)
    }

    #[inline]
    pub(crate) fn shape(&self) -> &[usize] {
        &self.shape[MAX_DIMS - self.ndim..]
    }

    #[inline]
    pub(crate) fn strides(&self) -> &[isize] {
        &self.strides[MAX_DIMS - self.ndim..]
    }

    /// Number of elements, overflow is ruled out by `check_bounds`.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.shape().iter().product()
    }

    pub(crate) fn is_dense(&self) -> bool {
        let mut stride = self.dtype.itemsize() as isize;
        for axis in (MAX_DIMS - self.ndim..MAX_DIMS).rev() {
            if self.strides[axis] != stride {
                return false;
            }
            stride = stride.wrapping_mul(self.shape[axis] as isize);
        }
        true
    }

    /// Byte range of a dense layout. Empty layouts map to `0..0`, their offset
    /// is not bounds checked.
    #[inline]
    pub(crate) fn dense_range(&self) -> Range<usize> {
        let len = self.len();
        if len == 0 {
            return 0..0;
        }
        self.offset..self.offset + len * self.dtype.itemsize()
    }

    /// Verifies that every element the layout can address lies inside a buffer
    /// of `buffer_len` bytes.
    pub(crate) fn check_bounds(&self, buffer_len: usize) -> Result<(), ArrayError> {
        let elements = self
            .shape()
            .iter()
            .try_fold(1usize, |acc, &extent| check_overflow_v2(acc, extent))?;
        if elements == 0 {
            return Ok(());
        }
        let mut lowest = 0isize;
        let mut highest = 0isize;
        for axis in MAX_DIMS - self.ndim..MAX_DIMS {
            let last_index = isize_from(self.shape[axis] - 1)?;
            let span = self.strides[axis]
                .checked_mul(last_index)
                .ok_or(ArrayError::PointerOverflow)?;
            if span < 0 {
                lowest = lowest.checked_add(span).ok_or(ArrayError::PointerOverflow)?;
            } else {
                highest = highest
                    .checked_add(span)
                    .ok_or(ArrayError::PointerOverflow)?;
            }
        }
        let offset = isize_from(self.offset)?;
        let start = offset
            .checked_add(lowest)
            .ok_or(ArrayError::PointerOverflow)?;
        if start < 0 {
            return Err(ArrayError::NegativeOffset);
        }
        let end = offset
            .checked_add(highest)
            .and_then(|v| v.checked_add(self.dtype.itemsize() as isize))
            .ok_or(ArrayError::PointerOverflow)? as usize;
        if end > buffer_len {
            return Err(ArrayError::BufferSizeMismatch(MismatchedSize {
                expected: end,
                received: buffer_len,
            }));
        }
        Ok(())
    }

    pub(crate) fn element_position(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.ndim {
            return None;
        }
        let mut position = self.offset as isize;
        for (&i, (&extent, &stride)) in index
            .iter()
            .zip(self.shape().iter().zip(self.strides().iter()))
        {
            if i >= extent {
                return None;
            }
            position += i as isize * stride;
        }
        Some(position as usize)
    }
}

/// Converts element strides and offset of a `T` slice into byte units.
fn byte_geometry<T: ArrayElement>(
    strides: &[isize],
    offset: usize,
) -> Result<([isize; MAX_DIMS], usize), ArrayError> {
    check_rank(strides.len())?;
    let itemsize = isize_from(size_of::<T>())?;
    let mut byte_strides = [0isize; MAX_DIMS];
    for (dst, &stride) in byte_strides.iter_mut().zip(strides.iter()) {
        *dst = stride
            .checked_mul(itemsize)
            .ok_or(ArrayError::PointerOverflow)?;
    }
    let byte_offset = check_overflow_v2(offset, size_of::<T>())?;
    Ok((byte_strides, byte_offset))
}

#[derive(Debug, Copy, Clone)]
/// Read-only strided view over a borrowed byte buffer
pub struct ArrayView<'a> {
    data: &'a [u8],
    layout: ArrayLayout,
}

impl<'a> ArrayView<'a> {
    /// Creates a view with explicit byte strides and byte offset.
    ///
    /// Strides may be negative or zero; the view is rejected if any element
    /// it addresses falls outside `data`.
    pub fn new(
        data: &'a [u8],
        dtype: ArrayDtype,
        shape: &[usize],
        strides: &[isize],
        offset: usize,
    ) -> Result<Self, ArrayError> {
        let layout = ArrayLayout::new(dtype, shape, strides, offset)?;
        layout.check_bounds(data.len())?;
        Ok(ArrayView { data, layout })
    }

    /// Creates a row-major view starting at the first byte of `data`.
    pub fn dense(data: &'a [u8], dtype: ArrayDtype, shape: &[usize]) -> Result<Self, ArrayError> {
        let layout = ArrayLayout::dense(dtype, shape)?;
        layout.check_bounds(data.len())?;
        Ok(ArrayView { data, layout })
    }

    pub fn from_elements<T: ArrayElement>(
        data: &'a [T],
        shape: &[usize],
    ) -> Result<Self, ArrayError> {
        ArrayView::dense(bytemuck::cast_slice(data), T::DTYPE, shape)
    }

    /// Strides and offset are counted in elements of `T`.
    pub fn from_elements_strided<T: ArrayElement>(
        data: &'a [T],
        shape: &[usize],
        strides: &[isize],
        offset: usize,
    ) -> Result<Self, ArrayError> {
        let (byte_strides, byte_offset) = byte_geometry::<T>(strides, offset)?;
        ArrayView::new(
            bytemuck::cast_slice(data),
            T::DTYPE,
            shape,
            &byte_strides[..strides.len()],
            byte_offset,
        )
    }

    #[inline]
    pub fn dtype(&self) -> ArrayDtype {
        self.layout.dtype
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Byte strides, one per dimension.
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.layout.offset
    }

    #[inline]
    pub fn is_dense(&self) -> bool {
        self.layout.is_dense()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.len() == 0
    }

    /// Reads one element, `None` if `T` is not the view's dtype or the index
    /// is out of range.
    pub fn get<T: ArrayElement>(&self, index: &[usize]) -> Option<T> {
        if T::DTYPE != self.layout.dtype {
            return None;
        }
        let position = self.layout.element_position(index)?;
        Some(read_element(self.data, position))
    }

    /// Copies the elements out in logical row-major order.
    pub fn to_vec<T: ArrayElement>(&self) -> Result<Vec<T>, ArrayError> {
        check_dtype(self.layout.dtype, T::DTYPE)?;
        let mut values = Vec::with_capacity(self.layout.len());
        for_each_offset(&self.layout, |position| {
            values.push(read_element::<T>(self.data, position));
        });
        Ok(values)
    }

    #[inline]
    pub(crate) fn layout(&self) -> &ArrayLayout {
        &self.layout
    }

    #[inline(always)]
    pub(crate) fn read<T: ArrayElement>(&self, position: usize) -> T {
        read_element(self.data, position)
    }
}

#[derive(Debug)]
/// Mutable strided view, either over a caller buffer or over storage it owns
pub struct ArrayViewMut<'a> {
    data: BufferStoreMut<'a, u8>,
    layout: ArrayLayout,
}

impl<'a> ArrayViewMut<'a> {
    pub fn new(
        data: &'a mut [u8],
        dtype: ArrayDtype,
        shape: &[usize],
        strides: &[isize],
        offset: usize,
    ) -> Result<Self, ArrayError> {
        let layout = ArrayLayout::new(dtype, shape, strides, offset)?;
        layout.check_bounds(data.len())?;
        Ok(ArrayViewMut {
            data: BufferStoreMut::Borrowed(data),
            layout,
        })
    }

    pub fn dense(
        data: &'a mut [u8],
        dtype: ArrayDtype,
        shape: &[usize],
    ) -> Result<Self, ArrayError> {
        let layout = ArrayLayout::dense(dtype, shape)?;
        layout.check_bounds(data.len())?;
        Ok(ArrayViewMut {
            data: BufferStoreMut::Borrowed(data),
            layout,
        })
    }

    pub fn from_elements_mut<T: ArrayElement>(
        data: &'a mut [T],
        shape: &[usize],
    ) -> Result<Self, ArrayError> {
        ArrayViewMut::dense(bytemuck::cast_slice_mut(data), T::DTYPE, shape)
    }

    /// Strides and offset are counted in elements of `T`.
    pub fn from_elements_strided_mut<T: ArrayElement>(
        data: &'a mut [T],
        shape: &[usize],
        strides: &[isize],
        offset: usize,
    ) -> Result<Self, ArrayError> {
        let (byte_strides, byte_offset) = byte_geometry::<T>(strides, offset)?;
        ArrayViewMut::new(
            bytemuck::cast_slice_mut(data),
            T::DTYPE,
            shape,
            &byte_strides[..strides.len()],
            byte_offset,
        )
    }

    /// Allocates a zeroed dense array, the number of dimensions is `shape.len()`.
    pub fn alloc_dense(shape: &[usize], dtype: ArrayDtype) -> Result<Self, ArrayError> {
        let layout = ArrayLayout::dense(dtype, shape)?;
        let target = vec![0u8; layout.len() * dtype.itemsize()];
        Ok(ArrayViewMut {
            data: BufferStoreMut::Owned(target),
            layout,
        })
    }

    /// Read-only view over the same elements.
    pub fn as_view(&self) -> ArrayView<'_> {
        ArrayView {
            data: self.data.borrow(),
            layout: self.layout,
        }
    }

    /// True when the view owns its buffer rather than borrowing a caller's.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self.data, BufferStoreMut::Owned(_))
    }

    #[inline]
    pub fn dtype(&self) -> ArrayDtype {
        self.layout.dtype
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    #[inline]
    pub fn is_dense(&self) -> bool {
        self.layout.is_dense()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.len() == 0
    }

    pub fn get<T: ArrayElement>(&self, index: &[usize]) -> Option<T> {
        self.as_view().get(index)
    }

    pub fn to_vec<T: ArrayElement>(&self) -> Result<Vec<T>, ArrayError> {
        self.as_view().to_vec()
    }

    #[inline]
    pub(crate) fn layout(&self) -> &ArrayLayout {
        &self.layout
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }

    /// Contiguous bytes of a dense view, in row-major order.
    #[inline]
    pub(crate) fn dense_bytes_mut(&mut self) -> &mut [u8] {
        let range = self.layout.dense_range();
        &mut self.data.as_mut()[range]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_strides() {
        let data = [0u8; 24];
        let view = ArrayView::dense(&data, ArrayDtype::Int16, &[2, 3, 2]).unwrap();
        assert_eq!(view.strides(), &[12, 4, 2]);
        assert_eq!(view.shape(), &[2, 3, 2]);
        assert_eq!(view.ndim(), 3);
        assert_eq!(view.len(), 12);
        assert!(view.is_dense());
    }

    #[test]
    fn test_transposed_view_reads_logical_order() {
        let data: Vec<u8> = (0..6).collect();
        let view = ArrayView::new(&data, ArrayDtype::Uint8, &[3, 2], &[1, 3], 0).unwrap();
        assert!(!view.is_dense());
        assert_eq!(view.to_vec::<u8>().unwrap(), vec![0, 3, 1, 4, 2, 5]);
        assert_eq!(view.get::<u8>(&[2, 1]), Some(5));
        assert_eq!(view.get::<u8>(&[3, 0]), None);
        assert_eq!(view.get::<i16>(&[0, 0]), None);
    }

    #[test]
    fn test_negative_stride_view() {
        let data = [10u8, 20, 30];
        let view = ArrayView::new(&data, ArrayDtype::Uint8, &[3], &[-1], 2).unwrap();
        assert_eq!(view.offset(), 2);
        assert_eq!(view.to_vec::<u8>().unwrap(), vec![30, 20, 10]);
        assert_eq!(
            ArrayView::new(&data, ArrayDtype::Uint8, &[3], &[-1], 1).unwrap_err(),
            ArrayError::NegativeOffset
        );
    }

    #[test]
    fn test_out_of_bounds_view_rejected() {
        let data = [0u8; 5];
        assert_eq!(
            ArrayView::dense(&data, ArrayDtype::Int16, &[3]).unwrap_err(),
            ArrayError::BufferSizeMismatch(MismatchedSize {
                expected: 6,
                received: 5,
            })
        );
        assert_eq!(
            ArrayView::new(&data, ArrayDtype::Uint8, &[2, 2], &[3, 1], 1).unwrap_err(),
            ArrayError::BufferSizeMismatch(MismatchedSize {
                expected: 6,
                received: 5,
            })
        );
        assert_eq!(
            ArrayView::new(&data, ArrayDtype::Uint8, &[2, 2], &[2], 0).unwrap_err(),
            ArrayError::StridesLengthMismatch(MismatchedSize {
                expected: 2,
                received: 1,
            })
        );
        assert_eq!(
            ArrayView::dense(&data, ArrayDtype::Uint8, &[1, 1, 1, 1, 1]).unwrap_err(),
            ArrayError::InvalidRank(5)
        );
        assert_eq!(
            ArrayView::dense(&data, ArrayDtype::Uint8, &[]).unwrap_err(),
            ArrayError::InvalidRank(0)
        );
    }

    #[test]
    fn test_empty_view_needs_no_storage() {
        let view = ArrayView::new(&[], ArrayDtype::Int16, &[0, 3], &[6, 2], 100).unwrap();
        assert!(view.is_empty());
        assert!(view.to_vec::<i16>().unwrap().is_empty());
    }

    #[test]
    fn test_element_strided_view() {
        let data = [1i16, 2, 3, 4, 5, 6];
        let view = ArrayView::from_elements_strided(&data, &[3], &[2], 0).unwrap();
        assert_eq!(view.strides(), &[4]);
        assert_eq!(view.to_vec::<i16>().unwrap(), vec![1, 3, 5]);
        assert!(matches!(
            view.to_vec::<u8>(),
            Err(ArrayError::DtypeMismatch(_))
        ));
    }

    #[test]
    fn test_alloc_dense_is_owned_and_zeroed() {
        let array = ArrayViewMut::alloc_dense(&[4, 3], ArrayDtype::Uint8).unwrap();
        assert!(array.is_owned());
        assert!(array.is_dense());
        assert_eq!(array.shape(), &[4, 3]);
        assert_eq!(array.to_vec::<u8>().unwrap(), vec![0u8; 12]);
    }

    #[test]
    fn test_borrowed_view_writes_reach_caller() {
        let mut data = [0i16; 4];
        {
            let mut array = ArrayViewMut::from_elements_mut(&mut data, &[2, 2]).unwrap();
            assert!(!array.is_owned());
            array.dense_bytes_mut()[2..4].copy_from_slice(&7i16.to_ne_bytes());
        }
        assert_eq!(data, [0, 7, 0, 0]);
    }
}
