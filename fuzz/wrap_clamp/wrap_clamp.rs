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
use strided_hsv::{inplace_clamp8, inplace_wrap8, ArrayViewMut};

fuzz_target!(|data: (Vec<i16>, u8)| {
    fuzz_wrap_clamp(data.0, data.1);
});

fn fuzz_wrap_clamp(values: Vec<i16>, step: u8) {
    let step = 1 + step as usize % 4;
    let count = values.len().div_ceil(step);
    if count == 0 {
        return;
    }

    let mut clamped = values.clone();
    {
        let mut array =
            ArrayViewMut::from_elements_strided_mut(&mut clamped, &[count], &[step as isize], 0)
                .unwrap();
        inplace_clamp8(&mut array).unwrap();
        let once = array.to_vec::<i16>().unwrap();
        inplace_clamp8(&mut array).unwrap();
        assert_eq!(once, array.to_vec::<i16>().unwrap());
    }

    let mut wrapped = values.clone();
    {
        let mut array =
            ArrayViewMut::from_elements_strided_mut(&mut wrapped, &[count], &[step as isize], 0)
                .unwrap();
        inplace_wrap8(&mut array).unwrap();
    }

    for (i, &value) in values.iter().enumerate() {
        if i % step != 0 {
            assert_eq!(clamped[i], value);
            assert_eq!(wrapped[i], value);
            continue;
        }
        assert!((0..=255).contains(&clamped[i]));
        if value >= -256 {
            assert!((0..=255).contains(&wrapped[i]));
        }
        if (0..=255).contains(&value) {
            assert_eq!(wrapped[i], value);
            assert_eq!(clamped[i], value);
        }
    }
}
