//! Sparse matrix products
use std::ops::Mul;

use ndarray::{Array1, ArrayBase, Data};
use num_traits::Num;

use crate::dense_vector::DenseVector;
use crate::errors::CrsError;
use crate::indexing::SpIndex;
use crate::sparse::CrsMatI;
use crate::Ix1;

impl<N, I: SpIndex> CrsMatI<N, I> {
    /// Multiply this matrix by a dense vector, returning the dense product.
    ///
    /// Only the stored values are visited; rows without stored values give
    /// zero.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the vector length differs from `cols()`.
    pub fn mul_vec<V>(&self, vector: &V) -> Result<Vec<N>, CrsError>
    where
        N: Num + Clone,
        V: DenseVector<Scalar = N> + ?Sized,
    {
        if vector.dim() != self.cols() {
            return Err(CrsError::InvalidDimensions(
                "Cannot multiply: matrix column count and vector size don't match",
            ));
        }
        let mut res = vec![N::zero(); self.rows()];
        for (row, indices, data) in self.outer_iterator() {
            res[row] = indices.iter().zip(data).fold(
                N::zero(),
                |acc, (col, val)| {
                    acc + val.clone() * vector.index(col.index()).clone()
                },
            );
        }
        Ok(res)
    }

    /// Multiply this matrix by `rhs`.
    ///
    /// Every element of the product is accumulated through `get` and written
    /// through `set`, which costs `rows * cols * rhs.cols()` element reads
    /// regardless of sparsity.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if `self.cols() != rhs.rows()`, or if the
    /// element count of the `rows() x rhs.cols()` product overflows the
    /// index type.
    pub fn mul_mat(&self, rhs: &CrsMatI<N, I>) -> Result<Self, CrsError>
    where
        N: Num + Clone,
    {
        if self.cols() != rhs.rows() {
            return Err(CrsError::InvalidDimensions(
                "Cannot multiply: left matrix column count and right matrix row count don't match",
            ));
        }
        log::debug!(
            target: "crsmat_perf",
            "element-wise product of a {}x{} matrix by a {}x{} matrix",
            self.rows(),
            self.cols(),
            rhs.rows(),
            rhs.cols(),
        );
        let mut res = Self::new((self.rows(), rhs.cols()))?;
        for i in 0..self.rows() {
            for j in 0..rhs.cols() {
                let mut acc = N::zero();
                for k in 0..self.cols() {
                    acc = acc + self.get(i, k)? * rhs.get(k, j)?;
                }
                res.set(acc, i, j)?;
            }
        }
        Ok(res)
    }
}

impl<'a, 'b, N, I> Mul<&'b CrsMatI<N, I>> for &'a CrsMatI<N, I>
where
    N: Num + Clone,
    I: SpIndex,
{
    type Output = CrsMatI<N, I>;

    fn mul(self, rhs: &'b CrsMatI<N, I>) -> Self::Output {
        self.mul_mat(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<'a, 'b, N, I> Mul<&'b [N]> for &'a CrsMatI<N, I>
where
    N: Num + Clone,
    I: SpIndex,
{
    type Output = Vec<N>;

    fn mul(self, rhs: &'b [N]) -> Self::Output {
        self.mul_vec(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<'a, 'b, N, I> Mul<&'b Vec<N>> for &'a CrsMatI<N, I>
where
    N: Num + Clone,
    I: SpIndex,
{
    type Output = Vec<N>;

    fn mul(self, rhs: &'b Vec<N>) -> Self::Output {
        self.mul_vec(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<'a, 'b, N, I, S> Mul<&'b ArrayBase<S, Ix1>> for &'a CrsMatI<N, I>
where
    N: Num + Clone,
    I: SpIndex,
    S: Data<Elem = N>,
{
    type Output = Array1<N>;

    fn mul(self, rhs: &'b ArrayBase<S, Ix1>) -> Self::Output {
        self.mul_vec(rhs)
            .map(Array1::from)
            .unwrap_or_else(|err| panic!("{err}"))
    }
}

#[cfg(test)]
mod test {
    use ndarray::arr1;
    use num_complex::Complex64;

    use crate::errors::CrsError;
    use crate::sparse::{CrsMat, CrsMatI};
    use crate::test_data::{mat_3x4, mat_4x2};

    #[test]
    fn mul_vec() {
        let m = mat_3x4();
        assert_eq!(m.mul_vec(&vec![1, 2, 3, 4]), Ok(vec![33, 0, 17]));
        assert_eq!(m.mul_vec(&[0, 0, 1, 0][..]), Ok(vec![4, 0, 3]));
        assert_eq!(m.mul_vec(&arr1(&[1, 1, 1, 1])), Ok(vec![10, 1, 5]));
    }

    #[test]
    fn mul_vec_empty_matrix() {
        let m: CrsMat<f64> = CrsMat::new((3, 2)).unwrap();
        assert_eq!(m.mul_vec(&vec![1., 2.]), Ok(vec![0.; 3]));
    }

    #[test]
    fn mul_vec_fails() {
        let m = mat_3x4();
        assert!(matches!(
            m.mul_vec(&vec![1, 2, 3]),
            Err(CrsError::InvalidDimensions(_))
        ));
        let m: CrsMat<i32> = CrsMat::new((4, 4)).unwrap();
        assert!(m.mul_vec(&vec![1, 2, 3]).is_err());
    }

    #[test]
    fn mul_mat() {
        let res = mat_3x4().mul_mat(&mat_4x2()).unwrap();
        assert_eq!(res.shape(), (3, 2));
        assert_eq!(res.indptr(), &[0, 2, 4, 5]);
        assert_eq!(res.indices(), Some(&[0, 1, 0, 1, 0][..]));
        assert_eq!(res.data(), Some(&[17, 2, 2, 1, 12][..]));
    }

    #[test]
    fn mul_mat_suppresses_cancellations() {
        // [1 1] * [ 1]   [0]
        //         [-1] =
        let mut lhs: CrsMat<i32> = CrsMat::new((1, 2)).unwrap();
        lhs.set(1, 0, 0).unwrap().set(1, 0, 1).unwrap();
        let mut rhs: CrsMat<i32> = CrsMat::new((2, 1)).unwrap();
        rhs.set(1, 0, 0).unwrap().set(-1, 1, 0).unwrap();
        let res = lhs.mul_mat(&rhs).unwrap();
        assert_eq!(res.nnz(), 0);
        assert_eq!(res.data(), None);
    }

    #[test]
    fn mul_mat_fails() {
        let a = mat_3x4();
        let b = mat_3x4();
        assert!(matches!(
            a.mul_mat(&b),
            Err(CrsError::InvalidDimensions(_))
        ));
        assert_eq!(a, mat_3x4());
        assert_eq!(b, mat_3x4());
        let c: CrsMat<i32> = CrsMat::new((2, 4)).unwrap();
        assert!(mat_4x2().mul_mat(&c).is_ok());
        assert!(c.mul_mat(&c).is_err());
    }

    #[test]
    fn mul_mat_narrow_index_capacity() {
        // 300x1 by 1x300 fits u16 on both sides, the 300x300 product doesn't
        let lhs: CrsMatI<i32, u16> = CrsMatI::new((300, 1)).unwrap();
        let rhs: CrsMatI<i32, u16> = CrsMatI::new((1, 300)).unwrap();
        assert!(matches!(
            lhs.mul_mat(&rhs),
            Err(CrsError::InvalidDimensions(_))
        ));
        assert_eq!(rhs.mul_mat(&lhs).unwrap().shape(), (1, 1));
    }

    #[test]
    fn operators() {
        let m = mat_3x4();
        assert_eq!(&m * &mat_4x2(), m.mul_mat(&mat_4x2()).unwrap());
        let v = vec![1, 2, 3, 4];
        assert_eq!(&m * &v, vec![33, 0, 17]);
        assert_eq!(&m * &v[..], vec![33, 0, 17]);
        assert_eq!(&m * &arr1(&[1, 2, 3, 4]), arr1(&[33, 0, 17]));
    }

    #[test]
    #[should_panic(expected = "invalid dimensions")]
    fn operator_panics_on_mismatch() {
        let m = mat_3x4();
        let _ = &m * &m;
    }

    #[test]
    fn complex_elements() {
        let mut m: CrsMat<Complex64> = CrsMat::new_square(2).unwrap();
        m.set(Complex64::new(0., 1.), 0, 0)
            .unwrap()
            .set(Complex64::new(2., 0.), 1, 0)
            .unwrap();
        let v = vec![Complex64::new(0., 1.), Complex64::new(5., 5.)];
        assert_eq!(
            m.mul_vec(&v).unwrap(),
            vec![Complex64::new(-1., 0.), Complex64::new(0., 2.)]
        );
        let sq = m.mul_mat(&m).unwrap();
        assert_eq!(sq.get(0, 0), Ok(Complex64::new(-1., 0.)));
        assert_eq!(sq.get(1, 0), Ok(Complex64::new(0., 2.)));
        assert_eq!(sq.nnz(), 2);
    }
}
