//! Some matrices used in tests

use crate::sparse::CrsMat;

/// ```text
/// [ 1  0 4 5 ]
/// [ 2 -1 0 0 ]
/// [ 0  0 3 2 ]
/// ```
pub fn mat_3x4() -> CrsMat<i32> {
    let mut mat = CrsMat::new((3, 4)).unwrap();
    mat.set(1, 0, 0)
        .unwrap()
        .set(4, 0, 2)
        .unwrap()
        .set(5, 0, 3)
        .unwrap()
        .set(2, 1, 0)
        .unwrap()
        .set(-1, 1, 1)
        .unwrap()
        .set(3, 2, 2)
        .unwrap()
        .set(2, 2, 3)
        .unwrap();
    mat
}

/// ```text
/// [ 10 0 0 2 ]
/// [  0 0 0 0 ]
/// [  3 1 0 4 ]
/// ```
pub fn mat_empty_row() -> CrsMat<i32> {
    let mut mat = CrsMat::new((3, 4)).unwrap();
    mat.set(10, 0, 0)
        .unwrap()
        .set(2, 0, 3)
        .unwrap()
        .set(3, 2, 0)
        .unwrap()
        .set(1, 2, 1)
        .unwrap()
        .set(4, 2, 3)
        .unwrap();
    mat
}

/// ```text
/// [ 1 2 ]
/// [ 0 3 ]
/// [ 4 0 ]
/// [ 0 0 ]
/// ```
pub fn mat_4x2() -> CrsMat<i32> {
    CrsMat::try_from_parts(
        (4, 2),
        vec![0, 2, 3, 4, 4],
        vec![0, 1, 1, 0],
        vec![1, 2, 3, 4],
    )
    .unwrap()
}

/// A 6x12 matrix holding 2 at every even column of rows 0 and 3
pub fn mat_striped() -> CrsMat<i32> {
    let mut mat = CrsMat::new((6, 12)).unwrap();
    for i in (0..mat.rows()).step_by(3) {
        for j in (0..mat.cols()).step_by(2) {
            mat.set(2, i, j).unwrap();
        }
    }
    mat
}
