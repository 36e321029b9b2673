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
use crate::array_support::{ArrayDtype, MAX_DIMS};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MismatchedDtype {
    pub expected: ArrayDtype,
    pub received: ArrayDtype,
}

/// Shapes are stored right-aligned, only the last `ndim` slots are meaningful.
///
/// With `any_rows` set the leading expected extent is unconstrained.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MismatchedShape {
    pub expected_ndim: usize,
    pub expected: [usize; MAX_DIMS],
    pub any_rows: bool,
    pub received_ndim: usize,
    pub received: [usize; MAX_DIMS],
}

impl MismatchedShape {
    pub(crate) fn new(expected: &[usize], received: &[usize]) -> Self {
        MismatchedShape {
            expected_ndim: expected.len(),
            expected: right_aligned(expected),
            any_rows: false,
            received_ndim: received.len(),
            received: right_aligned(received),
        }
    }

    /// Expected shape `(N, columns)` for any `N`.
    pub(crate) fn rows_of(columns: usize, received: &[usize]) -> Self {
        MismatchedShape {
            any_rows: true,
            ..MismatchedShape::new(&[0, columns], received)
        }
    }
}

fn right_aligned(shape: &[usize]) -> [usize; MAX_DIMS] {
    let mut slots = [1usize; MAX_DIMS];
    let count = shape.len().min(MAX_DIMS);
    slots[MAX_DIMS - count..].copy_from_slice(&shape[shape.len() - count..]);
    slots
}

struct ShapeDisplay<'a>(&'a [usize], bool);

impl Display for ShapeDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, extent) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if i == 0 && self.1 {
                f.write_str("N")?;
            } else {
                write!(f, "{}", extent)?;
            }
        }
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// Argument is not an array; carries the type name of what was received
    NotAnArray(&'static str),
    NotDense,
    DtypeMismatch(MismatchedDtype),
    ShapeMismatch(MismatchedShape),
    InvalidRank(usize),
    StridesLengthMismatch(MismatchedSize),
    PointerOverflow,
    NegativeOffset,
    BufferSizeMismatch(MismatchedSize),
}

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayError::NotAnArray(type_name) => f.write_fmt(format_args!(
                "Argument must be an ndarray, but it was {}",
                type_name
            )),
            ArrayError::NotDense => f.write_str("Output must be a dense ndarray"),
            ArrayError::DtypeMismatch(dtype) => f.write_fmt(format_args!(
                "Dtype mismatch: expected={}, received={}",
                dtype.expected, dtype.received
            )),
            ArrayError::ShapeMismatch(shape) => f.write_fmt(format_args!(
                "Shape mismatch: expected={}, received={}",
                ShapeDisplay(
                    &shape.expected[MAX_DIMS - shape.expected_ndim.min(MAX_DIMS)..],
                    shape.any_rows
                ),
                ShapeDisplay(
                    &shape.received[MAX_DIMS - shape.received_ndim.min(MAX_DIMS)..],
                    false
                )
            )),
            ArrayError::InvalidRank(ndim) => f.write_fmt(format_args!(
                "Arrays must have between 1 and {} dimensions, but it was {}",
                MAX_DIMS, ndim
            )),
            ArrayError::StridesLengthMismatch(size) => f.write_fmt(format_args!(
                "Strides must have one entry per dimension, expected {}, but it was {}",
                size.expected, size.received
            )),
            ArrayError::PointerOverflow => f.write_str("Array size overflow pointer capabilities"),
            ArrayError::NegativeOffset => {
                f.write_str("Array strides address memory before the start of its buffer")
            }
            ArrayError::BufferSizeMismatch(size) => f.write_fmt(format_args!(
                "Buffer must have size at least {} but it is {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for ArrayError {}

#[inline]
pub(crate) fn check_rank(ndim: usize) -> Result<(), ArrayError> {
    if ndim == 0 || ndim > MAX_DIMS {
        return Err(ArrayError::InvalidRank(ndim));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_dtype(expected: ArrayDtype, received: ArrayDtype) -> Result<(), ArrayError> {
    if expected != received {
        return Err(ArrayError::DtypeMismatch(MismatchedDtype { expected, received }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, ArrayError> {
    v0.checked_mul(v1).ok_or(ArrayError::PointerOverflow)
}

#[inline]
pub(crate) fn isize_from(value: usize) -> Result<isize, ArrayError> {
    isize::try_from(value).map_err(|_| ArrayError::PointerOverflow)
}
