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
use crate::array_support::MAX_DIMS;
use crate::views::ArrayLayout;

/// Byte position walking the last two axes of a layout.
///
/// The cursor never checks bounds: callers iterate exactly `shape[axis]`
/// times per axis of a layout already validated against its buffer.
#[derive(Debug, Copy, Clone)]
pub(crate) struct StridedCursor {
    row: isize,
    position: isize,
    major_stride: isize,
    minor_stride: isize,
}

impl StridedCursor {
    #[inline]
    pub(crate) fn new(layout: &ArrayLayout) -> Self {
        StridedCursor::at(
            layout.offset as isize,
            layout.strides[MAX_DIMS - 2],
            layout.strides[MAX_DIMS - 1],
        )
    }

    #[inline(always)]
    fn at(start: isize, major_stride: isize, minor_stride: isize) -> Self {
        StridedCursor {
            row: start,
            position: start,
            major_stride,
            minor_stride,
        }
    }

    #[inline(always)]
    pub(crate) fn position(&self) -> usize {
        self.position as usize
    }

    #[inline(always)]
    pub(crate) fn advance_minor(&mut self) {
        self.position = self.position.wrapping_add(self.minor_stride);
    }

    /// Moves to the start of the next row.
    #[inline(always)]
    pub(crate) fn advance_major(&mut self) {
        self.row = self.row.wrapping_add(self.major_stride);
        self.position = self.row;
    }

    /// Cursor at the start of row `rows` counted from this cursor's row.
    #[inline(always)]
    pub(crate) fn seek_major(&self, rows: usize) -> Self {
        let start = self
            .row
            .wrapping_add(self.major_stride.wrapping_mul(rows as isize));
        StridedCursor::at(start, self.major_stride, self.minor_stride)
    }
}

/// Visits the byte position of every element of `layout` in row-major order,
/// across all axes.
pub(crate) fn for_each_offset<F: FnMut(usize)>(layout: &ArrayLayout, mut f: F) {
    if layout.len() == 0 {
        return;
    }
    let shape = layout.shape;
    let strides = layout.strides;
    let mut index = [0usize; MAX_DIMS - 2];
    let mut outer = layout.offset as isize;
    loop {
        let mut cursor = StridedCursor::at(outer, strides[MAX_DIMS - 2], strides[MAX_DIMS - 1]);
        for _ in 0..shape[MAX_DIMS - 2] {
            for _ in 0..shape[MAX_DIMS - 1] {
                f(cursor.position());
                cursor.advance_minor();
            }
            cursor.advance_major();
        }

        let mut axis = MAX_DIMS - 2;
        loop {
            if axis == 0 {
                return;
            }
            axis -= 1;
            index[axis] += 1;
            outer = outer.wrapping_add(strides[axis]);
            if index[axis] < shape[axis] {
                break;
            }
            outer = outer.wrapping_sub(strides[axis].wrapping_mul(shape[axis] as isize));
            index[axis] = 0;
        }
    }
}
