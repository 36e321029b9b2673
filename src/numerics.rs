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
#![forbid(unsafe_code)]

#[inline(always)]
/// Rounded `v * (255 - s) / 255`, the lowest channel of a saturated pixel
pub(crate) fn floor_channel(v: u8, s: u8) -> u8 {
    let mut ww = v as u16 * (255 - s) as u16;
    ww += 1;
    ww += ww >> 8;
    (ww >> 8) as u8
}

#[inline(always)]
/// Channel moving between floor and `v` across a sextant, in 24-bit fixed point.
///
/// Even sextants ramp up and odd ones ramp down, the two edges use different
/// factors and do not collapse into one formula.
pub(crate) fn ramp_channel(v: u8, s: u8, h_fraction: u8, sextant: u8) -> u8 {
    let factor = if sextant & 1 == 0 {
        s as u32 * (256 - h_fraction as u32)
    } else {
        s as u32 * h_fraction as u32
    };
    let mut d = v as u32 * ((255 << 8) - factor);
    d += d >> 8;
    d += v as u32;
    (d >> 16) as u8
}

#[inline(always)]
/// Output slots `(ramp, value, floor)` for a sextant.
///
/// Starts from `(R, G, B) = (0, 1, 2)` and swaps slots on the low three
/// sextant bits; `sextant & 7` of 6 and 7 also resolve to valid slots.
pub(crate) fn sextant_slots(sextant: u8) -> (usize, usize, usize) {
    let (mut r, mut g, mut b) = (0usize, 1usize, 2usize);
    if sextant & 2 != 0 {
        std::mem::swap(&mut r, &mut b);
    }
    if sextant & 4 != 0 {
        std::mem::swap(&mut g, &mut b);
    }
    if sextant & 6 == 0 {
        if sextant & 1 == 0 {
            std::mem::swap(&mut r, &mut g);
        }
    } else if sextant & 1 != 0 {
        std::mem::swap(&mut r, &mut g);
    }
    (r, g, b)
}

#[inline(always)]
/// Fixed-point HSV to RGB for one pixel.
///
/// `h` is the hue already scaled by 6: the high byte selects the sextant and
/// the low byte is the position inside it.
pub(crate) fn hsv_to_rgb_pixel(h: u16, s: u8, v: u8) -> [u8; 3] {
    if s == 0 {
        return [v, v, v];
    }
    let sextant = (h >> 8) as u8;
    let (ramp, value, floor) = sextant_slots(sextant);

    let mut rgb = [0u8; 3];
    rgb[value] = v;
    rgb[floor] = floor_channel(v, s);
    rgb[ramp] = ramp_channel(v, s, (h & 0xff) as u8, sextant);
    rgb
}
