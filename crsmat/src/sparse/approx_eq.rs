//! Approximate equality of sparse matrices, for use with the `approx` crate

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Zero;

use crate::indexing::SpIndex;
use crate::sparse::CrsMatI;

impl<N, I> CrsMatI<N, I>
where
    I: SpIndex,
{
    /// Walks both matrices row by row, pairing stored values with their
    /// counterpart, or with zero where the other side has an implicit zero.
    /// Shapes must match.
    fn all_pairs<F>(&self, other: &Self, mut pred: F) -> bool
    where
        N: Zero,
        F: FnMut(&N, &N) -> bool,
    {
        if self.shape() != other.shape() {
            return false;
        }
        let zero = N::zero();
        for ((_, lind, ldata), (_, rind, rdata)) in
            self.outer_iterator().zip(other.outer_iterator())
        {
            let (mut l, mut r) = (0, 0);
            while l < lind.len() || r < rind.len() {
                let lcol = lind.get(l).map(|i| i.index());
                let rcol = rind.get(r).map(|i| i.index());
                let equal = match (lcol, rcol) {
                    (Some(lc), Some(rc)) if lc == rc => {
                        l += 1;
                        r += 1;
                        pred(&ldata[l - 1], &rdata[r - 1])
                    }
                    (Some(lc), Some(rc)) if lc < rc => {
                        l += 1;
                        pred(&ldata[l - 1], &zero)
                    }
                    (Some(_), None) => {
                        l += 1;
                        pred(&ldata[l - 1], &zero)
                    }
                    _ => {
                        r += 1;
                        pred(&zero, &rdata[r - 1])
                    }
                };
                if !equal {
                    return false;
                }
            }
        }
        true
    }
}

impl<N, I> AbsDiffEq for CrsMatI<N, I>
where
    I: SpIndex,
    N: AbsDiffEq + Zero,
    N::Epsilon: Clone,
{
    type Epsilon = N::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        N::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.all_pairs(other, |x, y| x.abs_diff_eq(y, epsilon.clone()))
    }
}

impl<N, I> RelativeEq for CrsMatI<N, I>
where
    I: SpIndex,
    N: RelativeEq + Zero,
    N::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        N::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.all_pairs(other, |x, y| {
            x.relative_eq(y, epsilon.clone(), max_relative.clone())
        })
    }
}

impl<N, I> UlpsEq for CrsMatI<N, I>
where
    I: SpIndex,
    N: UlpsEq + Zero,
    N::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        N::default_max_ulps()
    }

    fn ulps_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_ulps: u32,
    ) -> bool {
        self.all_pairs(other, |x, y| x.ulps_eq(y, epsilon.clone(), max_ulps))
    }
}
