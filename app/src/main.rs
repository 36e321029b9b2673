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
use rand::Rng;
use std::time::Instant;
use strided_hsv::{
    hsv16_to_rgb, hsv_to_rgb, inplace_clamp8, inplace_wrap8, ArrayView, ArrayViewMut,
};

const LEDS: usize = 24;
const FRAMES: usize = 8;

fn main() {
    env_logger::init();

    let mut hsv = vec![0u8; LEDS * 3];
    let mut rgb = vec![0u8; LEDS * 3];

    let start_time = Instant::now();
    for frame in 0..FRAMES {
        for (i, led) in hsv.chunks_exact_mut(3).enumerate() {
            led[0] = ((i * 256 / LEDS + frame * 16) % 256) as u8;
            led[1] = 255;
            led[2] = 128;
        }
        let source = ArrayView::from_elements(&hsv, &[LEDS, 3]).unwrap();
        let destination = ArrayViewMut::from_elements_mut(&mut rgb, &[LEDS, 3]).unwrap();
        hsv_to_rgb(&source, Some(destination)).unwrap();

        let line: String = rgb
            .chunks_exact(3)
            .map(|px| format!("{:02x}{:02x}{:02x} ", px[0], px[1], px[2]))
            .collect();
        println!("frame {}: {}", frame, line.trim_end());
    }
    println!("hsv_to_rgb {} frames time: {:?}", FRAMES, start_time.elapsed());

    // hue drifts in 16 bits and is folded back into a byte
    let mut rng = rand::rng();
    let mut hue: Vec<i16> = (0..LEDS).map(|_| rng.random_range(-256..768)).collect();
    let mut saturation: Vec<i16> = (0..LEDS).map(|_| rng.random_range(-64..320)).collect();
    {
        let mut hue_view = ArrayViewMut::from_elements_mut(&mut hue, &[LEDS]).unwrap();
        inplace_wrap8(&mut hue_view).unwrap();
        let mut saturation_view =
            ArrayViewMut::from_elements_mut(&mut saturation, &[LEDS]).unwrap();
        inplace_clamp8(&mut saturation_view).unwrap();
    }

    let hsv16: Vec<i16> = hue
        .iter()
        .zip(saturation.iter())
        .flat_map(|(&h, &s)| [h, s, 200])
        .collect();
    let source = ArrayView::from_elements(&hsv16, &[LEDS, 3]).unwrap();
    let start_time = Instant::now();
    let rgb = hsv16_to_rgb(&source, None).unwrap();
    println!("hsv16_to_rgb time: {:?}", start_time.elapsed());
    println!("{:?}", rgb.to_vec::<u8>().unwrap());
}
