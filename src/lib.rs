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
//! Integer HSV to RGB conversion and 8-bit wrap/clamp kernels over strided
//! `uint8`/`int16` array views.
//!
//! Sources may be arbitrary views (slices, transposes, reversed axes); HSV
//! results are always written to a dense `(N, 3)` `uint8` array, either freshly
//! allocated or supplied by the caller and reused in place.
//!
//! ```
//! use strided_hsv::{hsv_to_rgb, ArrayView};
//!
//! let hsv = [0u8, 255, 255, 85, 255, 255];
//! let source = ArrayView::from_elements(&hsv, &[2, 3]).unwrap();
//! let rgb = hsv_to_rgb(&source, None).unwrap();
//! assert_eq!(rgb.to_vec::<u8>().unwrap(), vec![255, 0, 0, 1, 255, 0]);
//! ```
#![forbid(unsafe_code)]
mod array_error;
mod array_support;
mod cursor;
pub mod host;
mod hsv_to_rgb;
mod numerics;
mod resolver;
mod views;
mod wrap_clamp;

pub use array_error::{ArrayError, MismatchedDtype, MismatchedShape, MismatchedSize};
pub use array_support::{ArrayDtype, ArrayElement, MAX_DIMS};
pub use host::HostValue;
pub use hsv_to_rgb::{hsv16_to_rgb, hsv_to_rgb};
pub use resolver::{resolve_output, resolve_output_like};
pub use views::{ArrayView, ArrayViewMut, BufferStoreMut};
pub use wrap_clamp::{inplace_clamp8, inplace_wrap8};
