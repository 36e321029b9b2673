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
use crate::array_support::ArrayDtype;
use crate::views::{ArrayView, ArrayViewMut};

/// Returns the output array for a kernel.
///
/// With no destination a dense zeroed array of `shape` and `dtype` is
/// allocated. A supplied destination must be dense and match `shape` and
/// `dtype` exactly; it is handed back unchanged so results land in the
/// caller's buffer.
///
/// # Errors
///
/// Checks run in order: [`ArrayError::NotDense`], [`ArrayError::ShapeMismatch`],
/// [`ArrayError::DtypeMismatch`].
pub fn resolve_output<'a>(
    destination: Option<ArrayViewMut<'a>>,
    shape: &[usize],
    dtype: ArrayDtype,
) -> Result<ArrayViewMut<'a>, ArrayError> {
    let Some(destination) = destination else {
        log::trace!("allocating dense {} output of shape {:?}", dtype, shape);
        return ArrayViewMut::alloc_dense(shape, dtype);
    };

    if !destination.is_dense() {
        return Err(ArrayError::NotDense);
    }

    if destination.shape() != shape {
        return Err(ArrayError::ShapeMismatch(MismatchedShape::new(
            shape,
            destination.shape(),
        )));
    }

    check_dtype(dtype, destination.dtype())?;

    log::trace!("reusing caller {} output of shape {:?}", dtype, shape);
    Ok(destination)
}

/// [`resolve_output`] with the rank, shape and dtype of `source`.
pub fn resolve_output_like<'a>(
    destination: Option<ArrayViewMut<'a>>,
    source: &ArrayView<'_>,
) -> Result<ArrayViewMut<'a>, ArrayError> {
    resolve_output(destination, source.shape(), source.dtype())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array_error::MismatchedDtype;

    #[test]
    fn test_none_allocates_dense() {
        let output = resolve_output(None, &[5, 3], ArrayDtype::Uint8).unwrap();
        assert!(output.is_owned());
        assert!(output.is_dense());
        assert_eq!(output.shape(), &[5, 3]);
        assert_eq!(output.dtype(), ArrayDtype::Uint8);
    }

    #[test]
    fn test_matching_destination_is_reused() {
        let mut storage = [9u8; 15];
        let destination = ArrayViewMut::dense(&mut storage, ArrayDtype::Uint8, &[5, 3]).unwrap();
        let output = resolve_output(Some(destination), &[5, 3], ArrayDtype::Uint8).unwrap();
        assert!(!output.is_owned());
        assert_eq!(output.to_vec::<u8>().unwrap(), vec![9u8; 15]);
    }

    #[test]
    fn test_non_dense_destination() {
        let mut storage = [0u8; 30];
        let destination =
            ArrayViewMut::new(&mut storage, ArrayDtype::Uint8, &[5, 3], &[6, 1], 0).unwrap();
        assert_eq!(
            resolve_output(Some(destination), &[5, 3], ArrayDtype::Uint8).unwrap_err(),
            ArrayError::NotDense
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let mut storage = [0u8; 15];
        let destination = ArrayViewMut::dense(&mut storage, ArrayDtype::Uint8, &[15]).unwrap();
        assert_eq!(
            resolve_output(Some(destination), &[5, 3], ArrayDtype::Uint8).unwrap_err(),
            ArrayError::ShapeMismatch(MismatchedShape::new(&[5, 3], &[15]))
        );

        let mut storage = [0u8; 12];
        let destination = ArrayViewMut::dense(&mut storage, ArrayDtype::Uint8, &[4, 3]).unwrap();
        assert!(matches!(
            resolve_output(Some(destination), &[5, 3], ArrayDtype::Uint8),
            Err(ArrayError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_dtype_mismatch() {
        let mut storage = [0i16; 15];
        let destination = ArrayViewMut::from_elements_mut(&mut storage, &[5, 3]).unwrap();
        assert_eq!(
            resolve_output(Some(destination), &[5, 3], ArrayDtype::Uint8).unwrap_err(),
            ArrayError::DtypeMismatch(MismatchedDtype {
                expected: ArrayDtype::Uint8,
                received: ArrayDtype::Int16,
            })
        );
    }

    #[test]
    fn test_density_checked_before_shape() {
        let mut storage = [0u8; 30];
        let destination =
            ArrayViewMut::new(&mut storage, ArrayDtype::Int16, &[2, 3], &[10, 2], 0).unwrap();
        assert_eq!(
            resolve_output(Some(destination), &[5, 3], ArrayDtype::Uint8).unwrap_err(),
            ArrayError::NotDense
        );
    }

    #[test]
    fn test_resolve_like_source() {
        let data = [1i16, 2, 3, 4];
        let source = ArrayView::from_elements(&data, &[2, 2]).unwrap();
        let output = resolve_output_like(None, &source).unwrap();
        assert_eq!(output.shape(), &[2, 2]);
        assert_eq!(output.dtype(), ArrayDtype::Int16);
    }
}
