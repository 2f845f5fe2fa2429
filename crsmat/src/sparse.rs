use crate::errors::CrsError;
use crate::indexing::SpIndex;

/// Sparse matrix in the Compressed Row Storage (CRS) format, with sorted
/// indices and no explicitly stored zeros.
///
/// The `CrsMatI` type is parameterized by the scalar type `N` and the
/// indexing type `I`, which defaults to `usize`. [`CrsMat`] is the alias
/// for the default index type.
///
/// [`CrsMat`]: type.CrsMat.html
///
/// ## Storage format
///
/// Only the non-zero values of the matrix are stored, together with their
/// column index, compressed along the rows.
///
/// ### Indptr
///
/// An index pointer array `indptr` of length `rows + 1` stores the
/// cumulative count of non-zero elements for each row. The number of
/// non-zero elements of the i-th row is `indptr[i + 1] - indptr[i]`, and
/// `indptr[rows]` is the total count `nnz`.
///
/// ### Indices and data
///
/// The column indices and values of the non-zero elements live in two
/// arrays of length `nnz`. For row `i` they are the slices
/// `indices[indptr[i]..indptr[i+1]]` and `data[indptr[i]..indptr[i+1]]`.
/// Each row slice of `indices` is strictly increasing, and no value of
/// `data` is zero.
///
/// Both arrays are allocated together on the first non-zero write and
/// released together when the last non-zero is removed: [`indices`] and
/// [`data`] return `None` exactly when `nnz() == 0`.
///
/// [`indices`]: struct.CrsMatI.html#method.indices
/// [`data`]: struct.CrsMatI.html#method.data
///
/// ## Construction
///
/// A matrix is created empty with [`new`] or [`new_square`] and filled
/// through [`set`]. It can also be built from its raw arrays with
/// [`try_from_parts`], whose structure is then verified, or from a dense
/// `ndarray` with [`from_dense`].
///
/// [`new`]: struct.CrsMatI.html#method.new
/// [`new_square`]: struct.CrsMatI.html#method.new_square
/// [`set`]: struct.CrsMatI.html#method.set
/// [`try_from_parts`]: struct.CrsMatI.html#method.try_from_parts
/// [`from_dense`]: struct.CrsMatI.html#method.from_dense
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct CrsMatI<N, I: SpIndex = usize> {
    nrows: usize,
    ncols: usize,
    indptr: Vec<I>,
    nnz_storage: Option<NnzStorage<N, I>>,
}

/// The column indices and values of the stored entries, always allocated
/// and released as a pair.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
struct NnzStorage<N, I> {
    indices: Vec<I>,
    data: Vec<N>,
}

pub type CrsMat<N> = CrsMatI<N, usize>;

pub(crate) mod utils {
    use super::*;

    /// Check the structure of CrsMat components
    /// This will ensure that:
    /// * indptr is of length rows + 1 and starts at zero
    /// * indices and data have the same length, nnz == indptr\[rows\]
    /// * indptr is sorted
    /// * indices is strictly increasing for each row
    /// * indices are lower than cols
    /// * the element count `rows * cols` fits the index type
    pub(crate) fn check_compressed_structure<I: SpIndex>(
        ncols: usize,
        nrows: usize,
        indptr: &[I],
        indices: &[I],
    ) -> Result<(), CrsError> {
        if indptr.len() != nrows + 1 {
            return Err(CrsError::BadStructure(
                "Indptr length does not match the row count",
            ));
        }
        if !fits_index::<I>(nrows, ncols) {
            return Err(CrsError::BadStructure(
                "Index type not large enough for this matrix",
            ));
        }
        if indptr.iter().any(|i| i.try_index().is_none())
            || indices.iter().any(|i| i.try_index().is_none())
        {
            return Err(CrsError::BadStructure(
                "Negative value in indptr or indices",
            ));
        }
        if indptr[0].index() != 0 {
            return Err(CrsError::BadStructure("Indptr does not start at 0"));
        }
        if !indptr.windows(2).all(|x| x[0] <= x[1]) {
            return Err(CrsError::BadStructure("Unsorted indptr"));
        }
        let nnz = indices.len();
        if indptr[nrows].index() != nnz {
            return Err(CrsError::BadStructure(
                "Indices length and indptr's nnz do not match",
            ));
        }
        for win in indptr.windows(2) {
            let row_indices = &indices[win[0].index()..win[1].index()];
            if !sorted_indices(row_indices) {
                return Err(CrsError::BadStructure(
                    "Indices are not strictly increasing in a row",
                ));
            }
            // Last index is the largest
            if let Some(i) = row_indices.last() {
                if i.index() >= ncols {
                    return Err(CrsError::BadStructure(
                        "Index is larger than the column count",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Whether every `(row, col)` cell of the shape could be stored, ie
    /// whether `nrows * ncols` is representable by `I`. Both extents, and
    /// any stored-value count, are then representable too.
    pub(crate) fn fits_index<I: SpIndex>(
        nrows: usize,
        ncols: usize,
    ) -> bool {
        nrows
            .checked_mul(ncols)
            .and_then(I::try_from_usize)
            .is_some()
    }

    pub fn sorted_indices<I: SpIndex>(indices: &[I]) -> bool {
        indices.windows(2).all(|w| w[0] < w[1])
    }
}

pub mod binop;
pub mod prod;
pub mod slicing;
pub mod storage;
pub mod to_dense;
pub mod visu;

#[cfg(feature = "approx")]
mod approx_eq;
