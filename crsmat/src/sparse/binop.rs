//! Sparse matrix addition and subtraction
use std::ops::{Add, Sub};

use num_traits::Num;

use crate::errors::CrsError;
use crate::indexing::SpIndex;
use crate::sparse::CrsMatI;

impl<N, I: SpIndex> CrsMatI<N, I> {
    /// Sparse matrix addition, returning a new matrix.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the shapes differ.
    pub fn add_mat(&self, rhs: &CrsMatI<N, I>) -> Result<Self, CrsError>
    where
        N: Num + Clone,
    {
        if self.shape() != rhs.shape() {
            return Err(CrsError::InvalidDimensions(
                "Cannot add: matrices dimensions don't match",
            ));
        }
        crsmat_binop(self, rhs, |x, y| x + y)
    }

    /// Sparse matrix subtraction, returning a new matrix.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the shapes differ.
    pub fn sub_mat(&self, rhs: &CrsMatI<N, I>) -> Result<Self, CrsError>
    where
        N: Num + Clone,
    {
        if self.shape() != rhs.shape() {
            return Err(CrsError::InvalidDimensions(
                "Cannot subtract: matrices dimensions don't match",
            ));
        }
        crsmat_binop(self, rhs, |x, y| x - y)
    }

    /// Accumulate `sub` into the top-left corner of this matrix, so that
    /// `self[i, j] += sub[i, j]` for every `(i, j)` inside `sub`. Elements
    /// outside that block are left untouched.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if `sub` has more rows or columns than this
    /// matrix, in which case this matrix is left untouched.
    pub fn add_submatrix(&mut self, sub: &CrsMatI<N, I>) -> Result<(), CrsError>
    where
        N: Num + Clone,
    {
        if sub.rows() > self.rows() || sub.cols() > self.cols() {
            return Err(CrsError::InvalidDimensions(
                "Cannot add submatrix: submatrix is larger than the matrix",
            ));
        }
        log::debug!(
            target: "crsmat_perf",
            "element-wise accumulation of a {}x{} block",
            sub.rows(),
            sub.cols(),
        );
        for i in 0..sub.rows() {
            for j in 0..sub.cols() {
                let sum = self.get(i, j)? + sub.get(i, j)?;
                self.set(sum, i, j)?;
            }
        }
        Ok(())
    }
}

/// Applies a binary operation to every pair of elements of two matrices
/// sharing the same shape, storing the non-zero results in a new matrix.
///
/// Implicit zeros take part in the operation, so the behaviour is correct
/// for any `binop`, including those where `binop(0, 0) != 0`.
fn crsmat_binop<N, I, F>(
    lhs: &CrsMatI<N, I>,
    rhs: &CrsMatI<N, I>,
    binop: F,
) -> Result<CrsMatI<N, I>, CrsError>
where
    N: Num + Clone,
    I: SpIndex,
    F: Fn(N, N) -> N,
{
    let (nrows, ncols) = lhs.shape();
    log::debug!(
        target: "crsmat_perf",
        "element-wise binary operation over a {}x{} shape",
        nrows,
        ncols,
    );
    let mut res = CrsMatI::new((nrows, ncols))?;
    for i in 0..nrows {
        for j in 0..ncols {
            res.set(binop(lhs.get(i, j)?, rhs.get(i, j)?), i, j)?;
        }
    }
    Ok(res)
}

impl<'a, 'b, N, I> Add<&'b CrsMatI<N, I>> for &'a CrsMatI<N, I>
where
    N: Num + Clone,
    I: SpIndex,
{
    type Output = CrsMatI<N, I>;

    fn add(self, rhs: &'b CrsMatI<N, I>) -> Self::Output {
        self.add_mat(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<'a, 'b, N, I> Sub<&'b CrsMatI<N, I>> for &'a CrsMatI<N, I>
where
    N: Num + Clone,
    I: SpIndex,
{
    type Output = CrsMatI<N, I>;

    fn sub(self, rhs: &'b CrsMatI<N, I>) -> Self::Output {
        self.sub_mat(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}
