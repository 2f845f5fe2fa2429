//! Column extraction

use num_traits::Zero;

use crate::errors::CrsError;
use crate::indexing::SpIndex;
use crate::sparse::CrsMatI;

impl<N, I: SpIndex> CrsMatI<N, I> {
    /// Extract column `col` as a `rows() x 1` matrix.
    ///
    /// # Errors
    ///
    /// `InvalidCoordinates` if `col >= self.cols()`.
    pub fn column(&self, col: usize) -> Result<Self, CrsError>
    where
        N: Zero + Clone,
    {
        self.extract_column(col, |row| (row, 0), (self.rows(), 1))
    }

    /// Extract column `col` as a `1 x rows()` matrix.
    ///
    /// # Errors
    ///
    /// `InvalidCoordinates` if `col >= self.cols()`.
    pub fn column_transposed(&self, col: usize) -> Result<Self, CrsError>
    where
        N: Zero + Clone,
    {
        self.extract_column(col, |row| (0, row), (1, self.rows()))
    }

    fn extract_column<F>(
        &self,
        col: usize,
        target: F,
        shape: (usize, usize),
    ) -> Result<Self, CrsError>
    where
        N: Zero + Clone,
        F: Fn(usize) -> (usize, usize),
    {
        if col >= self.cols() {
            return Err(CrsError::InvalidCoordinates(
                "Column index out of range",
            ));
        }
        let mut res = Self::new(shape)?;
        let col_ind = I::from_usize(col);
        for (row, indices, data) in self.outer_iterator() {
            if let Ok(pos) = indices.binary_search(&col_ind) {
                let (i, j) = target(row);
                res.set(data[pos].clone(), i, j)?;
            }
        }
        Ok(res)
    }
}
