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

#![no_main]

use libfuzzer_sys::fuzz_target;
use strided_hsv::{hsv16_to_rgb, hsv_to_rgb, ArrayDtype, ArrayView, ArrayViewMut};

fuzz_target!(|data: (u8, u8, bool, u8, u8, u8)| {
    fuzz_hsv(data.0, data.1, data.2, data.3, data.4, data.5);
});

fn fuzz_hsv(rows: u8, padding: u8, reversed: bool, h: u8, s: u8, v: u8) {
    let rows = rows as usize;
    let row_stride = 3 + padding as usize % 8;

    let mut samples = vec![0u8; rows * row_stride];
    for row in samples.chunks_exact_mut(row_stride) {
        if reversed {
            row[..3].copy_from_slice(&[v, s, h]);
        } else {
            row[..3].copy_from_slice(&[h, s, v]);
        }
    }
    let samples16: Vec<i16> = samples.iter().map(|&x| x as i16).collect();

    let (strides, offset) = if reversed {
        ([row_stride as isize, -1], 2)
    } else {
        ([row_stride as isize, 1], 0)
    };

    let source =
        ArrayView::new(&samples, ArrayDtype::Uint8, &[rows, 3], &strides, offset).unwrap();
    let rgb = hsv_to_rgb(&source, None).unwrap();
    assert!(rgb.is_dense());
    assert_eq!(rgb.shape(), &[rows, 3]);

    let source16 =
        ArrayView::from_elements_strided(&samples16, &[rows, 3], &strides, offset).unwrap();
    let mut reused = vec![0u8; rows * 3];
    let destination = ArrayViewMut::from_elements_mut(&mut reused, &[rows, 3]).unwrap();
    hsv16_to_rgb(&source16, Some(destination)).unwrap();

    let rgb = rgb.to_vec::<u8>().unwrap();
    assert_eq!(rgb, reused);
    for px in rgb.chunks_exact(3) {
        assert_eq!(*px.iter().max().unwrap(), v);
        if s == 0 {
            assert_eq!(px, &[v, v, v]);
        }
    }
}
