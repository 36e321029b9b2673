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
use std::fmt::{Debug, Display, Formatter};

/// Maximum rank of an array view, shapes and strides are stored right-aligned
/// in this many slots.
pub const MAX_DIMS: usize = 4;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Element type tag of an array view
pub enum ArrayDtype {
    Uint8 = 0,
    Int16 = 1,
}

impl ArrayDtype {
    /// Returns the size of one element in bytes.
    #[inline(always)]
    pub const fn itemsize(&self) -> usize {
        match self {
            ArrayDtype::Uint8 => 1,
            ArrayDtype::Int16 => 2,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ArrayDtype::Uint8 => "uint8",
            ArrayDtype::Int16 => "int16",
        }
    }
}

impl Display for ArrayDtype {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rust type backing one of the supported dtypes.
///
/// Elements are stored in native byte order and read unaligned, so views may
/// start at any byte offset of their buffer.
pub trait ArrayElement: Copy + Debug + Default + bytemuck::Pod + Send + Sync + 'static {
    const DTYPE: ArrayDtype;
}

impl ArrayElement for u8 {
    const DTYPE: ArrayDtype = ArrayDtype::Uint8;
}

impl ArrayElement for i16 {
    const DTYPE: ArrayDtype = ArrayDtype::Int16;
}

#[inline(always)]
pub(crate) fn read_element<T: ArrayElement>(bytes: &[u8], position: usize) -> T {
    bytemuck::pod_read_unaligned(&bytes[position..position + size_of::<T>()])
}

#[inline(always)]
pub(crate) fn write_element<T: ArrayElement>(bytes: &mut [u8], position: usize, value: T) {
    bytes[position..position + size_of::<T>()].copy_from_slice(bytemuck::bytes_of(&value));
}
