//! Randomized checks of the sparse operations against dense `ndarray`
//! computations.

use approx::assert_relative_eq;
use crsmat::CrsMat;
use crsmat_rand::rand::{Rng, SeedableRng};
use crsmat_rand::rand_distr::StandardNormal;
use crsmat_rand::{rand_crs, rand_vec, uniform_percent};
use ndarray::Array1;
use rand_pcg::Pcg64;

fn random_shape<R: Rng>(rng: &mut R) -> (usize, usize) {
    (rng.random_range(1..=16), rng.random_range(1..=16))
}

fn random_int_mat<R: Rng>(rng: &mut R, shape: (usize, usize)) -> CrsMat<i64> {
    let density = rng.random_range(0. ..=1.);
    rand_crs(rng, uniform_percent::<i64>(), shape, density).unwrap()
}

mod mul {
    use super::*;

    #[test]
    fn mul_vec_matches_dense() {
        let mut rng = Pcg64::seed_from_u64(0x5eed);
        for _ in 0..5000 {
            let shape = random_shape(&mut rng);
            let mat = random_int_mat(&mut rng, shape);
            let vec: Vec<i64> =
                rand_vec(&mut rng, uniform_percent::<i64>(), shape.1);

            let expected = mat.to_dense().dot(&Array1::from(vec.clone()));
            let res = mat.mul_vec(&vec).unwrap();
            assert_eq!(Array1::from(res), expected);
            assert_eq!(&mat * &Array1::from(vec), expected);
        }
    }

    #[test]
    fn mul_mat_matches_dense() {
        let mut rng = Pcg64::seed_from_u64(1789);
        for _ in 0..1000 {
            let (m, k) = random_shape(&mut rng);
            let n = rng.random_range(1..=16);
            let lhs = random_int_mat(&mut rng, (m, k));
            let rhs = random_int_mat(&mut rng, (k, n));

            let expected = lhs.to_dense().dot(&rhs.to_dense());
            let res = lhs.mul_mat(&rhs).unwrap();
            assert_eq!(res.shape(), (m, n));
            assert_eq!(res.to_dense(), expected);
            assert_eq!(res, CrsMat::from_dense(expected.view()).unwrap());
        }
    }

    #[test]
    fn mul_mat_float() {
        let mut rng = Pcg64::seed_from_u64(31);
        for _ in 0..200 {
            let (m, k) = random_shape(&mut rng);
            let n = rng.random_range(1..=16);
            let lhs: CrsMat<f64> =
                rand_crs(&mut rng, StandardNormal, (m, k), 0.4).unwrap();
            let rhs: CrsMat<f64> =
                rand_crs(&mut rng, StandardNormal, (k, n), 0.4).unwrap();

            let expected = lhs.to_dense().dot(&rhs.to_dense());
            let expected = CrsMat::from_dense(expected.view()).unwrap();
            assert_relative_eq!(
                lhs.mul_mat(&rhs).unwrap(),
                expected,
                epsilon = 1e-12,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn mul_mat_mismatch() {
        let mut rng = Pcg64::seed_from_u64(4);
        for _ in 0..100 {
            let (m, k) = random_shape(&mut rng);
            let other = rng.random_range(1..=16);
            if other == k {
                continue;
            }
            let lhs = random_int_mat(&mut rng, (m, k));
            let rhs = random_int_mat(&mut rng, (other, m));
            let lhs_copy = lhs.clone();
            assert!(lhs.mul_mat(&rhs).is_err());
            assert_eq!(lhs, lhs_copy);
        }
    }
}

mod binop {
    use super::*;

    #[test]
    fn add_sub_match_dense() {
        let mut rng = Pcg64::seed_from_u64(2024);
        for _ in 0..1000 {
            let shape = random_shape(&mut rng);
            let a = random_int_mat(&mut rng, shape);
            let b = random_int_mat(&mut rng, shape);
            let (da, db) = (a.to_dense(), b.to_dense());

            let sum = a.add_mat(&b).unwrap();
            assert_eq!(sum.to_dense(), &da + &db);
            let diff = a.sub_mat(&b).unwrap();
            assert_eq!(diff.to_dense(), &da - &db);
            assert_eq!(diff, CrsMat::from_dense((&da - &db).view()).unwrap());
        }
    }

    #[test]
    fn add_then_sub_restores() {
        let mut rng = Pcg64::seed_from_u64(77);
        for _ in 0..1000 {
            let shape = random_shape(&mut rng);
            let a = random_int_mat(&mut rng, shape);
            let b = random_int_mat(&mut rng, shape);
            assert_eq!(&(&a + &b) - &b, a);
        }
    }

    #[test]
    fn add_submatrix_matches_dense() {
        let mut rng = Pcg64::seed_from_u64(11);
        for _ in 0..500 {
            let (m, n) = random_shape(&mut rng);
            let sub_shape =
                (rng.random_range(1..=m), rng.random_range(1..=n));
            let mut mat = random_int_mat(&mut rng, (m, n));
            let sub = random_int_mat(&mut rng, sub_shape);

            let mut expected = mat.to_dense();
            for ((i, j), val) in sub.to_dense().indexed_iter() {
                expected[[i, j]] += val;
            }
            mat.add_submatrix(&sub).unwrap();
            assert_eq!(mat.to_dense(), expected);
        }
    }
}

mod storage {
    use super::*;

    #[test]
    fn random_writes_keep_storage_sorted() {
        let mut rng = Pcg64::seed_from_u64(99);
        for _ in 0..200 {
            let shape = random_shape(&mut rng);
            let mut mat: CrsMat<i64> = CrsMat::new(shape).unwrap();
            let mut dense = ndarray::Array2::zeros(shape);
            for _ in 0..64 {
                let row = rng.random_range(0..shape.0);
                let col = rng.random_range(0..shape.1);
                let val = if rng.random_bool(0.3) {
                    0
                } else {
                    rng.random_range(1..=100)
                };
                mat.set(val, row, col).unwrap();
                dense[[row, col]] = val;
            }
            assert_eq!(mat, CrsMat::from_dense(dense.view()).unwrap());
            assert_eq!(mat.data().is_none(), mat.nnz() == 0);
            for (_, indices, data) in mat.outer_iterator() {
                assert!(indices.windows(2).all(|w| w[0] < w[1]));
                assert!(data.iter().all(|&v| v != 0));
            }
        }
    }
}
