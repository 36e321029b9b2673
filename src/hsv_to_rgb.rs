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
use crate::array_error::{check_dtype, ArrayError, MismatchedShape};
use crate::array_support::{ArrayDtype, ArrayElement};
use crate::cursor::StridedCursor;
use crate::numerics::hsv_to_rgb_pixel;
use crate::resolver::resolve_output;
use crate::views::{ArrayView, ArrayViewMut};
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

const CHANNELS: usize = 3;

/// Source must be `(N, 3)` of the kernel's sample dtype.
pub(crate) fn check_hsv_source(
    source: &ArrayView<'_>,
    dtype: ArrayDtype,
) -> Result<(), ArrayError> {
    check_dtype(dtype, source.dtype())?;
    let shape = source.shape();
    if source.ndim() != 2 || shape[1] != CHANNELS {
        return Err(ArrayError::ShapeMismatch(MismatchedShape::rows_of(
            CHANNELS, shape,
        )));
    }
    Ok(())
}

fn hsv_to_rgb_impl<'a, T>(
    source: &ArrayView<'_>,
    destination: Option<ArrayViewMut<'a>>,
) -> Result<ArrayViewMut<'a>, ArrayError>
where
    T: ArrayElement + AsPrimitive<u8> + AsPrimitive<u16>,
{
    check_hsv_source(source, T::DTYPE)?;
    let mut rgb = resolve_output(destination, source.shape(), ArrayDtype::Uint8)?;

    log::trace!(
        "hsv {} to rgb, {} rows, strides {:?}",
        T::DTYPE,
        source.shape()[0],
        source.strides()
    );

    let origin = StridedCursor::new(source.layout());

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = rgb.dense_bytes_mut().par_chunks_exact_mut(CHANNELS);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = rgb.dense_bytes_mut().chunks_exact_mut(CHANNELS);
    }

    iter.enumerate().for_each(|(row, dst)| {
        let mut cursor = origin.seek_major(row);
        let h: T = source.read(cursor.position());
        cursor.advance_minor();
        let s: T = source.read(cursor.position());
        cursor.advance_minor();
        let v: T = source.read(cursor.position());

        let h = <T as AsPrimitive<u16>>::as_(h).wrapping_mul(6);
        let s = <T as AsPrimitive<u8>>::as_(s);
        let v = <T as AsPrimitive<u8>>::as_(v);

        dst.copy_from_slice(&hsv_to_rgb_pixel(h, s, v));
    });

    Ok(rgb)
}

/// Convert 8-bit HSV rows to RGB.
///
/// Takes an `(N, 3)` `uint8` array of hue, saturation and value triples with
/// any strides and writes a dense `(N, 3)` `uint8` RGB array using integer
/// arithmetic only. Hue covers the full circle over `0..=255`.
///
/// # Arguments
///
/// * `source` - HSV rows, may be a non-contiguous view.
/// * `destination` - Optional dense `(N, 3)` `uint8` array to write into, a new
///   one is allocated when `None`.
///
/// # Errors
///
/// Fails with [`ArrayError::DtypeMismatch`] or [`ArrayError::ShapeMismatch`] for
/// a bad source, and with the [`resolve_output`] errors for a bad destination.
/// Nothing is written when an error is returned.
pub fn hsv_to_rgb<'a>(
    source: &ArrayView<'_>,
    destination: Option<ArrayViewMut<'a>>,
) -> Result<ArrayViewMut<'a>, ArrayError> {
    hsv_to_rgb_impl::<u8>(source, destination)
}

/// Convert 16-bit HSV rows to 8-bit RGB.
///
/// Same as [`hsv_to_rgb`] for an `(N, 3)` `int16` source. Saturation and value
/// are truncated to their low byte and hue is multiplied with 16-bit
/// wrapping, so samples outside `0..=255` alias rather than fail.
pub fn hsv16_to_rgb<'a>(
    source: &ArrayView<'_>,
    destination: Option<ArrayViewMut<'a>>,
) -> Result<ArrayViewMut<'a>, ArrayError> {
    hsv_to_rgb_impl::<i16>(source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array_error::MismatchedDtype;
    use rand::Rng;

    fn convert(hsv: &[[u8; 3]]) -> Vec<u8> {
        let flat: Vec<u8> = hsv.iter().flatten().copied().collect();
        let source = ArrayView::from_elements(&flat, &[hsv.len(), 3]).unwrap();
        hsv_to_rgb(&source, None).unwrap().to_vec::<u8>().unwrap()
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(
            convert(&[[0, 255, 255], [85, 255, 255], [171, 255, 255], [128, 255, 255]]),
            vec![255, 0, 0, 1, 255, 0, 1, 0, 255, 0, 255, 255]
        );
        assert_eq!(
            convert(&[[200, 100, 50], [10, 200, 180]]),
            vec![43, 30, 50, 180, 71, 38]
        );
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let mut rng = rand::rng();
        for _ in 0..64 {
            let h: u8 = rng.random();
            let v: u8 = rng.random();
            assert_eq!(convert(&[[h, 0, v]]), vec![v, v, v]);
        }
    }

    #[test]
    fn test_strided_source() {
        // rows 4 elements apart with the channel axis running backwards
        let data: Vec<u8> = vec![
            255, 255, 0, 99, //
            255, 255, 85, 99, //
            255, 255, 171, 99,
        ];
        let source = ArrayView::new(&data, ArrayDtype::Uint8, &[3, 3], &[4, -1], 2).unwrap();
        let rgb = hsv_to_rgb(&source, None).unwrap();
        assert_eq!(
            rgb.to_vec::<u8>().unwrap(),
            vec![255, 0, 0, 1, 255, 0, 1, 0, 255]
        );
    }

    #[test]
    fn test_transposed_source() {
        // (3, N) planes of h, s and v viewed as (N, 3)
        let planes: Vec<u8> = vec![
            0, 85, 171, 128, //
            255, 255, 255, 0, //
            255, 255, 255, 40,
        ];
        let source = ArrayView::new(&planes, ArrayDtype::Uint8, &[4, 3], &[1, 4], 0).unwrap();
        let rgb = hsv_to_rgb(&source, None).unwrap();
        assert_eq!(
            rgb.to_vec::<u8>().unwrap(),
            vec![255, 0, 0, 1, 255, 0, 1, 0, 255, 40, 40, 40]
        );
    }

    #[test]
    fn test_writes_into_destination() {
        let hsv = [0u8, 255, 255, 85, 255, 255];
        let source = ArrayView::from_elements(&hsv, &[2, 3]).unwrap();
        let mut storage = [7u8; 6];
        {
            let destination = ArrayViewMut::from_elements_mut(&mut storage, &[2, 3]).unwrap();
            let rgb = hsv_to_rgb(&source, Some(destination)).unwrap();
            assert!(!rgb.is_owned());
        }
        assert_eq!(storage, [255, 0, 0, 1, 255, 0]);
    }

    #[test]
    fn test_rejected_destination_is_untouched() {
        let hsv = [0u8, 255, 255, 85, 255, 255];
        let source = ArrayView::from_elements(&hsv, &[2, 3]).unwrap();

        let mut storage = [7u8; 12];
        let destination =
            ArrayViewMut::new(&mut storage, ArrayDtype::Uint8, &[2, 3], &[6, 1], 0).unwrap();
        assert_eq!(
            hsv_to_rgb(&source, Some(destination)).unwrap_err(),
            ArrayError::NotDense
        );
        assert_eq!(storage, [7u8; 12]);

        let mut storage = [7u8; 9];
        let destination = ArrayViewMut::from_elements_mut(&mut storage, &[3, 3]).unwrap();
        assert!(matches!(
            hsv_to_rgb(&source, Some(destination)),
            Err(ArrayError::ShapeMismatch(_))
        ));
        assert_eq!(storage, [7u8; 9]);

        let mut storage = [7i16; 6];
        let destination = ArrayViewMut::from_elements_mut(&mut storage, &[2, 3]).unwrap();
        assert!(matches!(
            hsv_to_rgb(&source, Some(destination)),
            Err(ArrayError::DtypeMismatch(_))
        ));
        assert_eq!(storage, [7i16; 6]);
    }

    #[test]
    fn test_source_validation() {
        let wide = [0u8; 8];
        let source = ArrayView::from_elements(&wide, &[2, 4]).unwrap();
        assert_eq!(
            hsv_to_rgb(&source, None).unwrap_err(),
            ArrayError::ShapeMismatch(MismatchedShape::rows_of(3, &[2, 4]))
        );
        let flat = [0u8; 6];
        let source = ArrayView::from_elements(&flat, &[6]).unwrap();
        assert!(matches!(
            hsv_to_rgb(&source, None),
            Err(ArrayError::ShapeMismatch(_))
        ));
        let samples = [0i16; 6];
        let source = ArrayView::from_elements(&samples, &[2, 3]).unwrap();
        assert_eq!(
            hsv_to_rgb(&source, None).unwrap_err(),
            ArrayError::DtypeMismatch(MismatchedDtype {
                expected: ArrayDtype::Uint8,
                received: ArrayDtype::Int16,
            })
        );
        let bytes = [0u8; 6];
        let source = ArrayView::from_elements(&bytes, &[2, 3]).unwrap();
        assert!(matches!(
            hsv16_to_rgb(&source, None),
            Err(ArrayError::DtypeMismatch(_))
        ));
    }

    #[test]
    fn test_flat_source_reports_rows_of_triples() {
        let flat = [0u8; 7];
        let source = ArrayView::from_elements(&flat, &[7]).unwrap();
        let error = hsv_to_rgb(&source, None).unwrap_err();
        assert_eq!(
            error,
            ArrayError::ShapeMismatch(MismatchedShape::rows_of(3, &[7]))
        );
        assert_eq!(
            error.to_string(),
            "Shape mismatch: expected=(N, 3), received=(7,)"
        );
    }

    #[test]
    fn test_empty_source_into_offset_destination() {
        let source = ArrayView::new(&[], ArrayDtype::Uint8, &[0, 3], &[3, 1], 0).unwrap();
        let mut storage: [u8; 0] = [];
        let destination =
            ArrayViewMut::new(&mut storage, ArrayDtype::Uint8, &[0, 3], &[3, 1], 100).unwrap();
        assert!(destination.is_dense());
        let rgb = hsv_to_rgb(&source, Some(destination)).unwrap();
        assert!(rgb.is_empty());

        let samples: [i16; 0] = [];
        let source16 = ArrayView::from_elements(&samples, &[0, 3]).unwrap();
        let mut storage: [u8; 0] = [];
        let destination =
            ArrayViewMut::new(&mut storage, ArrayDtype::Uint8, &[0, 3], &[3, 1], 100).unwrap();
        let rgb = hsv16_to_rgb(&source16, Some(destination)).unwrap();
        assert_eq!(rgb.shape(), &[0, 3]);
    }

    #[test]
    fn test_empty_source() {
        let source = ArrayView::new(&[], ArrayDtype::Uint8, &[0, 3], &[3, 1], 0).unwrap();
        let rgb = hsv_to_rgb(&source, None).unwrap();
        assert_eq!(rgb.shape(), &[0, 3]);
        assert!(rgb.is_empty());
    }

    #[test]
    fn test_16_bit_matches_8_bit() {
        let mut hsv8 = Vec::with_capacity(256 * 256 * 3);
        for h in 0..=255u8 {
            for s in 0..=255u8 {
                hsv8.extend_from_slice(&[h, s, s.wrapping_mul(7).wrapping_add(h)]);
            }
        }
        let hsv16: Vec<i16> = hsv8.iter().map(|&x| x as i16).collect();
        let rows = hsv8.len() / 3;

        let source8 = ArrayView::from_elements(&hsv8, &[rows, 3]).unwrap();
        let source16 = ArrayView::from_elements(&hsv16, &[rows, 3]).unwrap();
        let rgb8 = hsv_to_rgb(&source8, None).unwrap();
        let rgb16 = hsv16_to_rgb(&source16, None).unwrap();
        assert_eq!(rgb16.dtype(), ArrayDtype::Uint8);
        assert_eq!(rgb8.to_vec::<u8>().unwrap(), rgb16.to_vec::<u8>().unwrap());
    }

    #[test]
    fn test_16_bit_out_of_range_samples_alias() {
        let samples: [i16; 12] = [
            256, 255, 255, // hue wraps into sextant 6
            0, 256, 255, // saturation truncates to 0
            -1, 255, 255, // negative hue wraps the 16-bit product
            0, 255, -1, // value truncates to 255
        ];
        let source = ArrayView::from_elements(&samples, &[4, 3]).unwrap();
        let rgb = hsv16_to_rgb(&source, None).unwrap();
        assert_eq!(
            rgb.to_vec::<u8>().unwrap(),
            vec![255, 0, 0, 255, 255, 255, 5, 0, 255, 255, 0, 0]
        );
    }
}
