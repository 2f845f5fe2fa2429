//! Random sparse matrix generation

use crate::rand::distr::uniform::SampleUniform;
use crate::rand::distr::{Bernoulli, Distribution, Uniform};
use crate::rand::Rng;
use crsmat::indexing::SpIndex;
use crsmat::{CrsError, CrsMat, CrsMatI};
use ndarray::Array2;
use num_traits::Zero;

/// Re-export [`rand`](https://docs.rs/rand/0.9.0/rand/)
/// for version compatibility
pub mod rand {
    pub use rand::*;
}

/// Re-export [`rand_distr`](https://docs.rs/rand_distr/0.5.0/rand_distr)
/// for version compatibility
pub mod rand_distr {
    pub use rand_distr::*;
}

/// Generate a random sparse matrix matching the given density and sampling
/// the values of its non-zero elements from the provided distribution.
///
/// Samples equal to zero are not stored, so the effective density can be
/// lower than requested for discrete distributions.
///
/// # Panics
///
/// If `density` is not in `[0, 1]`.
///
/// # Errors
///
/// `InvalidDimensions` if the shape has no row or no column, or holds more
/// elements than the index type can count.
pub fn rand_crs<R, N, D, I>(
    rng: &mut R,
    dist: D,
    shape: (usize, usize),
    density: f64,
) -> Result<CrsMatI<N, I>, CrsError>
where
    R: Rng + ?Sized,
    D: Distribution<N>,
    N: Zero + Clone,
    I: SpIndex,
{
    assert!((0. ..=1.).contains(&density));
    CrsMatI::<N, I>::new(shape)?;
    let struct_dist = Bernoulli::new(density)
        .unwrap_or_else(|err| panic!("invalid density {density}: {err}"));
    let exp_nnz =
        (density * (shape.0 as f64) * (shape.1 as f64)).ceil() as usize;
    let mut indptr = Vec::with_capacity(shape.0 + 1);
    let mut indices = Vec::with_capacity(exp_nnz);
    let mut data = Vec::with_capacity(exp_nnz);
    indptr.push(I::zero());
    for _row in 0..shape.0 {
        for col in 0..shape.1 {
            if struct_dist.sample(rng) {
                let val = dist.sample(rng);
                if !val.is_zero() {
                    indices.push(I::from_usize(col));
                    data.push(val);
                }
            }
        }
        indptr.push(I::from_usize(data.len()));
    }

    CrsMatI::try_from_parts(shape, indptr, indices, data)
}

/// Convenient wrapper for the common case of sampling a matrix with standard
/// normal distribution of the nnz values, using the thread rng for convenience.
pub fn rand_crs_std(
    shape: (usize, usize),
    density: f64,
) -> Result<CrsMat<f64>, CrsError> {
    let mut rng = rand::rng();
    rand_crs(&mut rng, crate::rand_distr::StandardNormal, shape, density)
}

/// Generate a dense matrix with every element sampled from `dist`.
pub fn rand_dense<R, N, D>(
    rng: &mut R,
    dist: D,
    shape: (usize, usize),
) -> Array2<N>
where
    R: Rng + ?Sized,
    D: Distribution<N>,
{
    Array2::from_shape_simple_fn(shape, || dist.sample(rng))
}

/// Generate a dense vector with every element sampled from `dist`.
pub fn rand_vec<R, N, D>(rng: &mut R, dist: D, dim: usize) -> Vec<N>
where
    R: Rng + ?Sized,
    D: Distribution<N>,
{
    (0..dim).map(|_| dist.sample(rng)).collect()
}

/// Uniform distribution over the closed range `[0, 100]`.
pub fn uniform_percent<N>() -> Uniform<N>
where
    N: SampleUniform + From<u8>,
{
    Uniform::new_inclusive(N::from(0), N::from(100))
        .unwrap_or_else(|err| panic!("empty percent range: {err}"))
}
