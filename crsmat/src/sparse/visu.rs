use std::fmt;

use num_traits::Zero;

use crate::indexing::SpIndex;
use crate::sparse::CrsMatI;

/// Dense rendering: space separated values, one line per row, implicit
/// zeros written out.
impl<N, I> fmt::Display for CrsMatI<N, I>
where
    N: fmt::Display + Zero,
    I: SpIndex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = N::zero();
        for (row, indices, data) in self.outer_iterator() {
            if row > 0 {
                writeln!(f)?;
            }
            let mut stored = indices.iter().zip(data).peekable();
            for col in 0..self.cols() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match stored.peek() {
                    Some((ind, val)) if ind.index() == col => {
                        write!(f, "{val}")?;
                        stored.next();
                    }
                    _ => write!(f, "{zero}")?,
                }
            }
        }
        Ok(())
    }
}

pub struct NnzPatternFormatter<'a, N, I: SpIndex> {
    mat: &'a CrsMatI<N, I>,
}

impl<'a, N, I> fmt::Display for NnzPatternFormatter<'a, N, I>
where
    I: SpIndex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, indices, _) in self.mat.outer_iterator() {
            let mut cur_col = 0;
            write!(f, "|")?;
            for col_ind in indices.iter().map(|ind| ind.index()) {
                while cur_col < col_ind {
                    write!(f, " ")?;
                    cur_col += 1;
                }
                write!(f, "x")?;
                cur_col = col_ind + 1;
            }
            while cur_col < self.mat.cols() {
                write!(f, " ")?;
                cur_col += 1;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

/// Display the location of the stored values of a matrix
pub fn nnz_pattern_formatter<N, I>(
    mat: &CrsMatI<N, I>,
) -> NnzPatternFormatter<'_, N, I>
where
    I: SpIndex,
{
    NnzPatternFormatter { mat }
}
