use ndarray::{ArrayBase, Data, Ix1};

/// A trait for types representing dense vectors, the right hand side of a
/// matrix-vector product.
pub trait DenseVector {
    type Scalar;

    /// The dimension of the vector
    fn dim(&self) -> usize;

    /// Random access to an element in the vector.
    ///
    /// # Panics
    ///
    /// If the index is out of bounds
    fn index(&self, idx: usize) -> &Self::Scalar;
}

impl<N> DenseVector for [N] {
    type Scalar = N;

    fn dim(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn index(&self, idx: usize) -> &N {
        &self[idx]
    }
}

impl<N> DenseVector for Vec<N> {
    type Scalar = N;

    fn dim(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn index(&self, idx: usize) -> &N {
        &self[idx]
    }
}

impl<N, S> DenseVector for ArrayBase<S, Ix1>
where
    S: Data<Elem = N>,
{
    type Scalar = N;

    fn dim(&self) -> usize {
        self.shape()[0]
    }

    #[inline(always)]
    fn index(&self, idx: usize) -> &N {
        &self[[idx]]
    }
}
