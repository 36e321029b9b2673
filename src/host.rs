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
//! Entry points taking dynamically typed values from an embedding runtime.
use crate::array_error::ArrayError;
use crate::array_support::ArrayDtype;
use crate::hsv_to_rgb::{check_hsv_source, hsv16_to_rgb, hsv_to_rgb};
use crate::views::{ArrayView, ArrayViewMut};
use crate::wrap_clamp::{inplace_clamp8 as clamp_array, inplace_wrap8 as wrap_array};

#[derive(Debug)]
/// Argument value as seen by an embedding runtime
pub enum HostValue<'a> {
    None,
    Array(ArrayViewMut<'a>),
    Int(i64),
    Float(f64),
    Str(&'a str),
}

impl<'a> HostValue<'a> {
    /// Type name the host reports for this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            HostValue::None => "NoneType",
            HostValue::Array(_) => "ndarray",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Str(_) => "str",
        }
    }

    pub fn as_array(&self) -> Option<&ArrayViewMut<'a>> {
        match self {
            HostValue::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn into_array(self) -> Option<ArrayViewMut<'a>> {
        match self {
            HostValue::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl<'a> From<ArrayViewMut<'a>> for HostValue<'a> {
    fn from(array: ArrayViewMut<'a>) -> Self {
        HostValue::Array(array)
    }
}

fn source_array<'b>(value: &'b HostValue<'_>) -> Result<ArrayView<'b>, ArrayError> {
    match value {
        HostValue::Array(array) => Ok(array.as_view()),
        other => {
            log::debug!("rejecting {} where an ndarray input is required", other.type_name());
            Err(ArrayError::NotAnArray(other.type_name()))
        }
    }
}

fn destination_array(value: HostValue<'_>) -> Result<Option<ArrayViewMut<'_>>, ArrayError> {
    match value {
        HostValue::None => Ok(None),
        HostValue::Array(array) => Ok(Some(array)),
        other => {
            log::debug!("rejecting {} as output", other.type_name());
            Err(ArrayError::NotAnArray(other.type_name()))
        }
    }
}

type HsvKernel = for<'a, 'b> fn(
    &ArrayView<'b>,
    Option<ArrayViewMut<'a>>,
) -> Result<ArrayViewMut<'a>, ArrayError>;

fn call_hsv_kernel<'a>(
    dest: HostValue<'a>,
    src: &HostValue<'_>,
    dtype: ArrayDtype,
    kernel: HsvKernel,
) -> Result<HostValue<'a>, ArrayError> {
    let source = source_array(src)?;
    check_hsv_source(&source, dtype)?;
    let destination = destination_array(dest)?;
    kernel(&source, destination).map(HostValue::Array)
}

/// `hsv2rgb(dest, src)`: converts an `(N, 3)` `uint8` HSV array, writing into
/// `dest` unless it is [`HostValue::None`].
///
/// Arguments are validated in order: source type, source dtype and shape, then
/// the destination.
pub fn hsv2rgb<'a>(
    dest: HostValue<'a>,
    src: &HostValue<'_>,
) -> Result<HostValue<'a>, ArrayError> {
    call_hsv_kernel(dest, src, ArrayDtype::Uint8, hsv_to_rgb)
}

/// `hsv2rgb16(dest, src)`: as [`hsv2rgb`] for an `int16` source, output is
/// always `uint8`.
pub fn hsv2rgb16<'a>(
    dest: HostValue<'a>,
    src: &HostValue<'_>,
) -> Result<HostValue<'a>, ArrayError> {
    call_hsv_kernel(dest, src, ArrayDtype::Int16, hsv16_to_rgb)
}

fn array_mut<'v, 'a>(
    value: &'v mut HostValue<'a>,
) -> Result<&'v mut ArrayViewMut<'a>, ArrayError> {
    match value {
        HostValue::Array(array) => Ok(array),
        other => {
            log::debug!("rejecting {} for an in-place kernel", other.type_name());
            Err(ArrayError::NotAnArray(other.type_name()))
        }
    }
}

/// `inplace_wrap8(src)`
pub fn inplace_wrap8(src: &mut HostValue<'_>) -> Result<(), ArrayError> {
    wrap_array(array_mut(src)?)
}

/// `inplace_clamp8(src)`
pub fn inplace_clamp8(src: &mut HostValue<'_>) -> Result<(), ArrayError> {
    clamp_array(array_mut(src)?)
}
