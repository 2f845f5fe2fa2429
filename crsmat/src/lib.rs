/*!
# crsmat

crsmat is a generic sparse matrix library for Rust.

It features a sparse matrix type, [`CrsMat`], storing only its non-zero
values in the Compressed Row Storage (CRS) format. Elements are read and
written one at a time through [`get`] and [`set`], which keep the storage
sorted and free of explicit zeros, and matrices can be added, subtracted
and multiplied together or with dense vectors.

[`CrsMat`]: sparse/struct.CrsMatI.html
[`get`]: sparse/struct.CrsMatI.html#method.get
[`set`]: sparse/struct.CrsMatI.html#method.set

## Examples

Matrix construction

```rust
use crsmat::CrsMat;
# fn main() -> Result<(), crsmat::CrsError> {
let mut a = CrsMat::new((3, 4))?;
a.set(1, 0, 0)?.set(4, 0, 2)?.set(5, 0, 3)?;
a.set(2, 1, 0)?.set(-1, 1, 1)?;
a.set(3, 2, 2)?.set(2, 2, 3)?;
assert_eq!(a.indptr(), &[0, 3, 5, 7]);
assert_eq!(a.to_string(), "1 0 4 5\n2 -1 0 0\n0 0 3 2");
# Ok(())
# }
```

Matrix vector multiplication

```rust
use crsmat::CrsMat;
# fn main() -> Result<(), crsmat::CrsError> {
let mut a = CrsMat::new_square(2)?;
a.set(2., 0, 0)?.set(3., 1, 1)?;
assert_eq!(a.mul_vec(&vec![1., 1.])?, vec![2., 3.]);
# Ok(())
# }
```

Matrix matrix multiplication, addition

```rust
use crsmat::CrsMat;
# fn main() -> Result<(), crsmat::CrsError> {
let mut eye = CrsMat::new_square(3)?;
for i in 0..3 {
    eye.set(1, i, i)?;
}
let mut a = CrsMat::new_square(3)?;
a.set(4, 0, 1)?.set(-2, 2, 0)?;
assert_eq!(eye.mul_mat(&a)?, a);
assert_eq!(&a + &eye, a.add_mat(&eye)?);
# Ok(())
# }
```

## Cargo features

- `approx`: approximate comparison of matrices with the
  [`approx`](https://docs.rs/approx) crate.
*/

pub mod dense_vector;
pub mod errors;
pub mod indexing;
pub mod sparse;

pub use crate::dense_vector::DenseVector;
pub use crate::errors::CrsError;
pub use crate::indexing::SpIndex;
pub use crate::sparse::storage::OuterIterator;
pub use crate::sparse::visu::{nnz_pattern_formatter, NnzPatternFormatter};
pub use crate::sparse::{CrsMat, CrsMatI};

pub type Ix1 = ndarray::Ix1;
pub type Ix2 = ndarray::Ix2;

#[cfg(test)]
mod test_data;
