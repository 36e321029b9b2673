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
use crate::array_error::{check_dtype, ArrayError};
use crate::array_support::{read_element, write_element, ArrayDtype};
use crate::cursor::for_each_offset;
use crate::views::ArrayViewMut;

#[inline(always)]
/// `(value + 256) % 256` with a truncating remainder, exact for `value >= -256`
pub(crate) fn wrap8(value: i16) -> i16 {
    ((value as i32 + 256) % 256) as i16
}

#[inline(always)]
pub(crate) fn clamp8(value: i16) -> i16 {
    num_traits::clamp(value, 0, 255)
}

fn map_in_place(array: &mut ArrayViewMut<'_>, op: fn(i16) -> i16) -> Result<(), ArrayError> {
    check_dtype(ArrayDtype::Int16, array.dtype())?;
    let layout = *array.layout();
    let bytes = array.bytes_mut();
    for_each_offset(&layout, |position| {
        let value = read_element::<i16>(bytes, position);
        write_element(bytes, position, op(value));
    });
    Ok(())
}

/// Wraps every element of an `int16` array into `0..=255` in place.
///
/// Computes `(value + 256) % 256`, which is a true modulo only for values down
/// to -256; anything lower keeps a negative remainder.
///
/// # Errors
///
/// [`ArrayError::DtypeMismatch`] if the array is not `int16`, nothing is written.
pub fn inplace_wrap8(array: &mut ArrayViewMut<'_>) -> Result<(), ArrayError> {
    map_in_place(array, wrap8)
}

/// Saturates every element of an `int16` array into `0..=255` in place.
///
/// # Errors
///
/// [`ArrayError::DtypeMismatch`] if the array is not `int16`, nothing is written.
pub fn inplace_clamp8(array: &mut ArrayViewMut<'_>) -> Result<(), ArrayError> {
    map_in_place(array, clamp8)
}
