//! Integer types usable for the row pointers and column indices
//!
//! A `CrsMatI` can store its `indptr` and `indices` arrays with any
//! primitive integer among `u16, u32, u64, usize, i16, i32, i64, isize`.
//! `usize` is the default; narrower types shrink the storage of large
//! matrices.
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::AddAssign;

use num_traits::int::PrimInt;

/// A sparse matrix index
pub trait SpIndex:
    Debug + PrimInt + AddAssign<Self> + Default + Hash
{
    /// Convert to usize
    ///
    /// # Panics
    ///
    /// If the integer is negative. The panic happens in debug builds only.
    fn index(self) -> usize;

    /// Convert from usize
    ///
    /// # Panics
    ///
    /// If the input overflows the index type. The panic happens in debug
    /// builds only.
    fn from_usize(ind: usize) -> Self;

    /// Checked conversion to usize, `None` for negative values.
    fn try_index(self) -> Option<usize> {
        self.to_usize()
    }

    /// Checked conversion from usize, `None` on overflow.
    fn try_from_usize(ind: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(ind)
    }
}

impl SpIndex for usize {
    #[inline(always)]
    fn index(self) -> usize {
        self
    }

    #[inline(always)]
    fn from_usize(ind: usize) -> Self {
        ind
    }
}

macro_rules! sp_index_signed_impl {
    ($int:ident) => {
        impl SpIndex for $int {
            #[inline(always)]
            fn index(self) -> usize {
                debug_assert!(self >= 0);
                self as usize
            }

            #[inline(always)]
            fn from_usize(ind: usize) -> Self {
                debug_assert!(ind <= $int::MAX as usize);
                ind as $int
            }
        }
    };
}

sp_index_signed_impl!(isize);
sp_index_signed_impl!(i64);
sp_index_signed_impl!(i32);
sp_index_signed_impl!(i16);

macro_rules! sp_index_unsigned_impl {
    ($int:ident) => {
        impl SpIndex for $int {
            #[inline(always)]
            fn index(self) -> usize {
                self as usize
            }

            #[inline(always)]
            fn from_usize(ind: usize) -> Self {
                debug_assert!(ind <= $int::MAX as usize);
                ind as $int
            }
        }
    };
}

sp_index_unsigned_impl!(u64);
sp_index_unsigned_impl!(u32);
sp_index_unsigned_impl!(u16);
