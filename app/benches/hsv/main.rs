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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use strided_hsv::{
    hsv16_to_rgb, hsv_to_rgb, inplace_clamp8, inplace_wrap8, ArrayDtype, ArrayView, ArrayViewMut,
};

const PIXELS: usize = 1920 * 1080;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();
    let hsv: Vec<u8> = (0..PIXELS * 3).map(|_| rng.random()).collect();
    let hsv16: Vec<i16> = hsv.iter().map(|&x| x as i16).collect();
    let noise: Vec<i16> = (0..PIXELS).map(|_| rng.random_range(-256..512)).collect();
    let mut rgb = vec![0u8; PIXELS * 3];

    let source = ArrayView::from_elements(&hsv, &[PIXELS, 3]).unwrap();
    let source16 = ArrayView::from_elements(&hsv16, &[PIXELS, 3]).unwrap();
    // every other pixel
    let strided = ArrayView::new(&hsv, ArrayDtype::Uint8, &[PIXELS / 2, 3], &[6, 1], 0).unwrap();

    c.bench_function("hsv_to_rgb allocating", |b| {
        b.iter(|| {
            hsv_to_rgb(&source, None).unwrap();
        })
    });

    c.bench_function("hsv_to_rgb into destination", |b| {
        b.iter(|| {
            let destination = ArrayViewMut::from_elements_mut(&mut rgb, &[PIXELS, 3]).unwrap();
            hsv_to_rgb(&source, Some(destination)).unwrap();
        })
    });

    c.bench_function("hsv_to_rgb strided source", |b| {
        b.iter(|| {
            hsv_to_rgb(&strided, None).unwrap();
        })
    });

    c.bench_function("hsv16_to_rgb into destination", |b| {
        b.iter(|| {
            let destination = ArrayViewMut::from_elements_mut(&mut rgb, &[PIXELS, 3]).unwrap();
            hsv16_to_rgb(&source16, Some(destination)).unwrap();
        })
    });

    c.bench_function("inplace_wrap8", |b| {
        let mut work = noise.clone();
        b.iter(|| {
            work.copy_from_slice(&noise);
            let mut array = ArrayViewMut::from_elements_mut(&mut work, &[PIXELS]).unwrap();
            inplace_wrap8(&mut array).unwrap();
        })
    });

    c.bench_function("inplace_clamp8", |b| {
        let mut work = noise.clone();
        b.iter(|| {
            work.copy_from_slice(&noise);
            let mut array = ArrayViewMut::from_elements_mut(&mut work, &[PIXELS]).unwrap();
            inplace_clamp8(&mut array).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
