//! Construction, storage access and element access for `CrsMatI`
//!
//! The element accessors maintain the storage invariants: for every row,
//! the slice `indices[indptr[i]..indptr[i+1]]` is strictly increasing, and
//! no stored value is zero. `set` is the only entry point that changes the
//! structure, through the private `insert` and `remove` primitives.

use std::iter::FusedIterator;
use std::slice::Windows;

use num_traits::Zero;

use crate::errors::CrsError;
use crate::indexing::SpIndex;
use crate::sparse::utils;
use crate::sparse::{CrsMatI, NnzStorage};

/// Iterator on the rows of a matrix, yielding for each row its index and
/// the slices of its column indices and values.
pub struct OuterIterator<'a, N, I> {
    row: usize,
    indptr: Windows<'a, I>,
    indices: &'a [I],
    data: &'a [N],
}

impl<'a, N, I: SpIndex> Iterator for OuterIterator<'a, N, I> {
    type Item = (usize, &'a [I], &'a [N]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let window = self.indptr.next()?;
        let range = window[0].index()..window[1].index();
        let row = self.row;
        self.row += 1;
        Some((row, &self.indices[range.clone()], &self.data[range]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indptr.size_hint()
    }
}

impl<'a, N, I: SpIndex> ExactSizeIterator for OuterIterator<'a, N, I> {}

impl<'a, N, I: SpIndex> FusedIterator for OuterIterator<'a, N, I> {}

/// # Construction
impl<N, I: SpIndex> CrsMatI<N, I> {
    /// Create an empty matrix of the given `(rows, cols)` shape.
    ///
    /// No value is stored: every element reads as zero until it is `set`.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if an extent is zero, or if the element count
    /// `rows * cols` cannot be represented by the index type. The stored
    /// value count is bounded by that product, so `set` never overflows the
    /// row pointers.
    pub fn new(shape: (usize, usize)) -> Result<Self, CrsError> {
        let (nrows, ncols) = shape;
        if nrows == 0 || ncols == 0 {
            return Err(CrsError::InvalidDimensions(
                "Matrix dimensions cannot be zero",
            ));
        }
        if !utils::fits_index::<I>(nrows, ncols) {
            return Err(CrsError::InvalidDimensions(
                "Index type not large enough for this matrix",
            ));
        }
        Ok(Self {
            nrows,
            ncols,
            indptr: vec![I::zero(); nrows + 1],
            nnz_storage: None,
        })
    }

    /// Create an empty `n x n` matrix.
    pub fn new_square(n: usize) -> Result<Self, CrsError> {
        Self::new((n, n))
    }

    /// Create a matrix from its raw compressed arrays, checking that they
    /// describe a valid matrix.
    ///
    /// Empty `indices` and `data` create a matrix without stored values.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` on a zero extent, `BadStructure` if the arrays
    /// have inconsistent lengths, unsorted or out of bounds indices, store
    /// an explicit zero, or if `rows * cols` overflows the index type.
    pub fn try_from_parts(
        shape: (usize, usize),
        indptr: Vec<I>,
        indices: Vec<I>,
        data: Vec<N>,
    ) -> Result<Self, CrsError>
    where
        N: Zero,
    {
        let (nrows, ncols) = shape;
        if nrows == 0 || ncols == 0 {
            return Err(CrsError::InvalidDimensions(
                "Matrix dimensions cannot be zero",
            ));
        }
        if indices.len() != data.len() {
            return Err(CrsError::BadStructure(
                "Indices and data lengths do not match",
            ));
        }
        utils::check_compressed_structure(ncols, nrows, &indptr, &indices)?;
        if data.iter().any(N::is_zero) {
            return Err(CrsError::BadStructure("Explicit zero in data"));
        }
        let nnz_storage = if data.is_empty() {
            None
        } else {
            Some(NnzStorage { indices, data })
        };
        Ok(Self {
            nrows,
            ncols,
            indptr,
            nnz_storage,
        })
    }
}

/// # Storage access
impl<N, I: SpIndex> CrsMatI<N, I> {
    /// The number of rows of this matrix
    pub fn rows(&self) -> usize {
        self.nrows
    }

    /// The number of columns of this matrix
    pub fn cols(&self) -> usize {
        self.ncols
    }

    /// The shape of the matrix, as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// The number of stored (non-zero) values
    pub fn nnz(&self) -> usize {
        self.indptr[self.nrows].index()
    }

    /// The ratio of stored values over the total number of elements
    pub fn density(&self) -> f64 {
        self.nnz() as f64 / (self.nrows as f64 * self.ncols as f64)
    }

    /// The row pointers, of length `rows() + 1`
    pub fn indptr(&self) -> &[I] {
        &self.indptr[..]
    }

    /// The column indices of the stored values, `None` when nothing is
    /// stored
    pub fn indices(&self) -> Option<&[I]> {
        self.nnz_storage.as_ref().map(|s| &s.indices[..])
    }

    /// The stored values, `None` when nothing is stored
    pub fn data(&self) -> Option<&[N]> {
        self.nnz_storage.as_ref().map(|s| &s.data[..])
    }

    /// Iterate over the rows, yielding `(row, indices, data)` for each of
    /// them, empty rows included.
    pub fn outer_iterator(&self) -> OuterIterator<'_, N, I> {
        let (indices, data): (&[I], &[N]) = match &self.nnz_storage {
            Some(storage) => (&storage.indices[..], &storage.data[..]),
            None => (&[] as &[I], &[] as &[N]),
        };
        OuterIterator {
            row: 0,
            indptr: self.indptr.windows(2),
            indices,
            data,
        }
    }

    /// Iterate over the stored values in row-major order, yielding
    /// `(&value, (row, col))`.
    pub fn iter(&self) -> impl Iterator<Item = (&N, (usize, usize))> + '_ {
        self.outer_iterator().flat_map(|(row, indices, data)| {
            data.iter()
                .zip(indices)
                .map(move |(val, col)| (val, (row, col.index())))
        })
    }

    /// The column indices and values of a row.
    ///
    /// # Panics
    ///
    /// If `row >= self.rows()`
    pub(crate) fn row_slices(&self, row: usize) -> (&[I], &[N]) {
        let range = self.indptr[row].index()..self.indptr[row + 1].index();
        match &self.nnz_storage {
            Some(storage) => {
                (&storage.indices[range.clone()], &storage.data[range])
            }
            None => (&[] as &[I], &[] as &[N]),
        }
    }

    pub(crate) fn check_coordinates(
        &self,
        row: usize,
        col: usize,
    ) -> Result<(), CrsError> {
        if row >= self.nrows {
            return Err(CrsError::InvalidCoordinates("Row index out of range"));
        }
        if col >= self.ncols {
            return Err(CrsError::InvalidCoordinates(
                "Column index out of range",
            ));
        }
        Ok(())
    }

    /// Locate `(row, col)` in the storage: `Ok` with the position of the
    /// stored value, or `Err` with the position where it would be inserted.
    fn nnz_index(&self, row: usize, col: usize) -> Result<usize, usize> {
        let start = self.indptr[row].index();
        let (indices, _) = self.row_slices(row);
        indices
            .binary_search(&I::from_usize(col))
            .map(|pos| start + pos)
            .map_err(|pos| start + pos)
    }
}

/// # Element access
impl<N, I: SpIndex> CrsMatI<N, I> {
    /// Read the element at `(row, col)`, zero if it is not stored.
    ///
    /// # Errors
    ///
    /// `InvalidCoordinates` if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<N, CrsError>
    where
        N: Zero + Clone,
    {
        self.check_coordinates(row, col)?;
        let value = match (self.nnz_index(row, col), self.data()) {
            (Ok(pos), Some(data)) => data[pos].clone(),
            _ => N::zero(),
        };
        Ok(value)
    }

    /// Write the element at `(row, col)`.
    ///
    /// Writing zero removes a stored value, writing a non-zero value
    /// overwrites it in place or inserts it at its sorted position.
    /// Returns the matrix to allow chaining:
    ///
    /// ```rust
    /// # fn main() -> Result<(), crsmat::CrsError> {
    /// let mut mat = crsmat::CrsMat::new((2, 2))?;
    /// mat.set(1, 0, 0)?.set(2, 1, 1)?;
    /// assert_eq!(mat.nnz(), 2);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidCoordinates` if `row` or `col` is out of bounds, in which
    /// case the matrix is left untouched.
    pub fn set(
        &mut self,
        value: N,
        row: usize,
        col: usize,
    ) -> Result<&mut Self, CrsError>
    where
        N: Zero,
    {
        self.check_coordinates(row, col)?;
        match self.nnz_index(row, col) {
            Ok(pos) if value.is_zero() => self.remove(pos, row),
            Ok(pos) => {
                if let Some(storage) = self.nnz_storage.as_mut() {
                    storage.data[pos] = value;
                }
            }
            Err(pos) => {
                if !value.is_zero() {
                    self.insert(pos, row, col, value);
                }
            }
        }
        Ok(self)
    }

    /// Splice a new value at storage position `pos`, which must be the
    /// sorted position of `col` inside `row`.
    fn insert(&mut self, pos: usize, row: usize, col: usize, value: N) {
        let storage = self.nnz_storage.get_or_insert_with(|| NnzStorage {
            indices: Vec::new(),
            data: Vec::new(),
        });
        storage.indices.insert(pos, I::from_usize(col));
        storage.data.insert(pos, value);
        for ptr in &mut self.indptr[row + 1..] {
            *ptr += I::one();
        }
    }

    /// Delete the value at storage position `pos`, located inside `row`.
    /// Releases the storage when the last value goes away.
    fn remove(&mut self, pos: usize, row: usize) {
        let now_empty = match self.nnz_storage.as_mut() {
            Some(storage) => {
                storage.indices.remove(pos);
                storage.data.remove(pos);
                storage.data.is_empty()
            }
            None => return,
        };
        if now_empty {
            self.nnz_storage = None;
        }
        for ptr in &mut self.indptr[row + 1..] {
            *ptr = *ptr - I::one();
        }
    }
}
