//! Utilities for sparse-to-dense and dense-to-sparse conversion
use ndarray::{Array2, ArrayView2, ArrayViewMut, Axis};
use num_traits::Zero;

use crate::errors::CrsError;
use crate::indexing::SpIndex;
use crate::sparse::CrsMatI;
use crate::Ix2;

/// Assign a sparse matrix into a dense matrix
///
/// The dense matrix will not be zeroed prior to assignment,
/// so existing values not corresponding to non-zeroes will be preserved.
///
/// # Errors
///
/// `InvalidDimensions` if the shapes differ.
pub fn assign_to_dense<N, I>(
    mut array: ArrayViewMut<N, Ix2>,
    spmat: &CrsMatI<N, I>,
) -> Result<(), CrsError>
where
    N: Clone,
    I: SpIndex,
{
    if array.shape() != [spmat.rows(), spmat.cols()] {
        return Err(CrsError::InvalidDimensions(
            "Cannot assign: dense and sparse shapes don't match",
        ));
    }
    let iterator = spmat.outer_iterator().zip(array.axis_iter_mut(Axis(0)));
    for ((_, indices, data), mut drow) in iterator {
        for (col, val) in indices.iter().zip(data) {
            drow[[col.index()]] = val.clone();
        }
    }
    Ok(())
}

impl<N, I: SpIndex> CrsMatI<N, I> {
    /// Create a dense copy of this matrix, with explicit zeros.
    pub fn to_dense(&self) -> Array2<N>
    where
        N: Zero + Clone,
    {
        let mut res = Array2::zeros(self.shape());
        for (val, (row, col)) in self.iter() {
            res[[row, col]] = val.clone();
        }
        res
    }

    /// Create a sparse matrix holding the non-zero values of a dense one.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the dense array has no row or no column.
    pub fn from_dense(dense: ArrayView2<N>) -> Result<Self, CrsError>
    where
        N: Zero + Clone,
    {
        let (nrows, ncols) = dense.dim();
        let mut res = Self::new((nrows, ncols))?;
        for ((row, col), val) in dense.indexed_iter() {
            res.set(val.clone(), row, col)?;
        }
        Ok(res)
    }
}
