/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::dim::{Dim, Dynamic, Const};
use crate::order::{StorageOrder, OrderTag, RowMajor};

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Owned dense matrix.
///
/// The row count `R` and column count `C` are each either [`Dynamic`] or
/// [`Const`], and the storage order `O` is either [`RowMajor`] or
/// [`ColMajor`](crate::ColMajor). All three are part of the type, so e.g.
/// a row-major matrix can never be mistaken for a column-major one.
// please resist the urge to go n-dimensional
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T = f64, R = Dynamic, C = Dynamic, O = RowMajor> {
    // contiguous, in the order given by O
    data: Vec<T>,
    // invariant: rows.value() * cols.value() == data.len()
    rows: R,
    cols: C,
    _order: PhantomData<O>,
}

/// A matrix whose shape is only known at runtime.
pub type DMatrix<T = f64, O = RowMajor> = Matrix<T, Dynamic, Dynamic, O>;
/// A square 2x2 matrix.
pub type Matrix2<T = f64, O = RowMajor> = Matrix<T, Const<2>, Const<2>, O>;
/// A square 3x3 matrix.
pub type Matrix3<T = f64, O = RowMajor> = Matrix<T, Const<3>, Const<3>, O>;
/// A square 4x4 matrix.
pub type Matrix4<T = f64, O = RowMajor> = Matrix<T, Const<4>, Const<4>, O>;

fn try_dims<R: Dim, C: Dim>((rows, cols): (usize, usize)) -> Option<(R, C)>
{ Some((R::try_from_usize(rows)?, C::try_from_usize(cols)?)) }

fn bad_dims<R: Dim, C: Dim>((rows, cols): (usize, usize)) -> ! {
    panic!(
        "dims {}x{} are not valid for a matrix with fixed dims {:?}x{:?}",
        rows, cols, R::fixed(), C::fixed(),
    )
}

// Calls `f(r, c)` once for each element, in storage order.
fn collect_in_order<T, O: StorageOrder>(
    (rows, cols): (usize, usize),
    mut f: impl FnMut(usize, usize) -> T,
) -> Vec<T> {
    let mut data = Vec::with_capacity(rows * cols);
    match O::IS_ROW_MAJOR {
        true => {
            for r in 0..rows {
                for c in 0..cols {
                    data.push(f(r, c));
                }
            }
        },
        false => {
            for c in 0..cols {
                for r in 0..rows {
                    data.push(f(r, c));
                }
            }
        },
    }
    data
}

impl<T, R: Dim, C: Dim, O: StorageOrder> Matrix<T, R, C, O> {
    /// Wrap data that is already laid out in the order `O`.
    ///
    /// Returns `None` if the dims are not valid for the type, or do not
    /// agree with the length of the data.
    pub fn try_from_storage_data(dims: (usize, usize), data: Vec<T>) -> Option<Self> {
        let (rows, cols) = try_dims::<R, C>(dims)?;
        if data.len() != dims.0 * dims.1 {
            return None;
        }
        Some(Matrix { data, rows, cols, _order: PhantomData })
    }

    /// Wrap data that is already laid out in the order `O`.
    ///
    /// # Panics
    ///
    /// Panics if the dims are not valid for the type or do not match the data.
    pub fn from_storage_data(dims: (usize, usize), data: Vec<T>) -> Self {
        assert_eq!(data.len(), dims.0 * dims.1, "data length does not match dims");
        match Self::try_from_storage_data(dims, data) {
            Some(m) => m,
            None => bad_dims::<R, C>(dims),
        }
    }

    /// Build a matrix by evaluating `f(row, col)` for each element.
    ///
    /// Elements are produced in storage order.
    pub fn try_from_fn(dims: (usize, usize), f: impl FnMut(usize, usize) -> T) -> Option<Self> {
        let (rows, cols) = try_dims::<R, C>(dims)?;
        let data = collect_in_order::<T, O>(dims, f);
        Some(Matrix { data, rows, cols, _order: PhantomData })
    }

    /// Build a matrix by evaluating `f(row, col)` for each element.
    ///
    /// # Panics
    ///
    /// Panics if the dims are not valid for the type.
    pub fn from_fn(dims: (usize, usize), f: impl FnMut(usize, usize) -> T) -> Self {
        match Self::try_from_fn(dims, f) {
            Some(m) => m,
            None => bad_dims::<R, C>(dims),
        }
    }

    /// A matrix with no elements.
    ///
    /// Dynamic dims are zero, fixed dims keep their value. Returns `None` when
    /// both dims are fixed and nonzero, since such a matrix cannot be empty.
    pub fn try_empty() -> Option<Self>
    { Self::try_from_storage_data((R::empty_extent(), C::empty_extent()), vec![]) }

    pub fn dims(&self) -> (usize, usize) { (self.rows.value(), self.cols.value()) }
    pub fn num_rows(&self) -> usize { self.rows.value() }
    pub fn num_cols(&self) -> usize { self.cols.value() }
    pub fn size(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
    pub fn is_square(&self) -> bool { self.num_rows() == self.num_cols() }

    pub fn strides(&self) -> (usize, usize) { O::strides(self.dims()) }
    pub fn row_stride(&self) -> usize { self.strides().0 }
    pub fn col_stride(&self) -> usize { self.strides().1 }

    pub fn is_row_major(&self) -> bool { O::IS_ROW_MAJOR }
    pub fn order_tag(&self) -> OrderTag { O::TAG }

    /// The elements, in storage order.
    pub fn storage_data(&self) -> &[T] { &self.data }
    pub fn storage_data_mut(&mut self) -> &mut [T] { &mut self.data }
    pub fn into_storage_data(self) -> Vec<T> { self.data }

    pub fn get(&self, (r, c): (usize, usize)) -> Option<&T> {
        match r < self.num_rows() && c < self.num_cols() {
            true => Some(&self.data[self.offset((r, c))]),
            false => None,
        }
    }

    pub fn get_mut(&mut self, (r, c): (usize, usize)) -> Option<&mut T> {
        match r < self.num_rows() && c < self.num_cols() {
            true => {
                let offset = self.offset((r, c));
                Some(&mut self.data[offset])
            },
            false => None,
        }
    }

    /// Iterate over the elements of one row, regardless of storage order.
    pub fn row(&self, r: usize) -> impl ExactSizeIterator<Item=&T> + '_ {
        assert!(r < self.num_rows(), "row {} out of range for {} rows", r, self.num_rows());
        (0..self.num_cols()).map(move |c| &self[(r, c)])
    }

    /// Forget which dims are fixed.
    pub fn into_dynamic(self) -> DMatrix<T, O> {
        let (rows, cols) = self.dims();
        Matrix {
            data: self.data,
            rows: Dynamic::new(rows),
            cols: Dynamic::new(cols),
            _order: PhantomData,
        }
    }

    #[inline(always)]
    fn offset(&self, (r, c): (usize, usize)) -> usize {
        let (row_stride, col_stride) = self.strides();
        r * row_stride + c * col_stride
    }
}

impl<T: Clone, R: Dim, C: Dim, O: StorageOrder> Matrix<T, R, C, O> {
    /// Build a matrix from elements listed one row after another.
    ///
    /// # Panics
    ///
    /// Panics if the dims are not valid for the type or do not match the data.
    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<T>) -> Self {
        assert_eq!(data.len(), height * width, "data length does not match dims");
        Self::from_fn((height, width), |r, c| data[r * width + c].clone())
    }

    pub fn new_filled(dims: (usize, usize), fill: &T) -> Self
    { Self::from_fn(dims, |_, _| fill.clone()) }

    /// The same logical matrix, stored in a different order.
    pub fn to_order<O2: StorageOrder>(&self) -> Matrix<T, R, C, O2> {
        Matrix {
            data: collect_in_order::<T, O2>(self.dims(), |r, c| self[(r, c)].clone()),
            rows: self.rows,
            cols: self.cols,
            _order: PhantomData,
        }
    }

    pub fn to_transpose(&self) -> Matrix<T, C, R, O> {
        let (rows, cols) = self.dims();
        Matrix {
            data: collect_in_order::<T, O>((cols, rows), |r, c| self[(c, r)].clone()),
            rows: self.cols,
            cols: self.rows,
            _order: PhantomData,
        }
    }

    /// Copy the elements into one `Vec` per row.
    pub fn to_nested_rows(&self) -> Vec<Vec<T>> {
        (0..self.num_rows())
            .map(|r| self.row(r).cloned().collect())
            .collect()
    }
}

impl<T: Clone, O: StorageOrder, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, Const<R>, Const<C>, O> {
    fn from(rows: [[T; C]; R]) -> Self
    { Matrix::from_fn((R, C), |r, c| rows[r][c].clone()) }
}

impl<T: Default, O: StorageOrder, const R: usize, const C: usize> Default for Matrix<T, Const<R>, Const<C>, O> {
    fn default() -> Self
    { Matrix::from_fn((R, C), |_, _| T::default()) }
}

impl<T, R: Dim, C: Dim, O: StorageOrder> Index<(usize, usize)> for Matrix<T, R, C, O> {
    type Output = T;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(r < self.num_rows() && c < self.num_cols(), "index {:?} out of range for {:?} matrix", (r, c), self.dims());
        &self.data[self.offset((r, c))]
    }
}

impl<T, R: Dim, C: Dim, O: StorageOrder> IndexMut<(usize, usize)> for Matrix<T, R, C, O> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(r < self.num_rows() && c < self.num_cols(), "index {:?} out of range for {:?} matrix", (r, c), self.dims());
        let offset = self.offset((r, c));
        &mut self.data[offset]
    }
}

// Prints nested rows with no surrounding type name, which makes the output
// valid JSON and Python for numeric matrices.
impl<T: fmt::Debug, R: Dim, C: Dim, O: StorageOrder> fmt::Debug for Matrix<T, R, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.num_rows()).map(|r| RowDebug(self, r)))
            .finish()
    }
}

struct RowDebug<'a, T, R, C, O>(&'a Matrix<T, R, C, O>, usize);

impl<'a, T: fmt::Debug, R: Dim, C: Dim, O: StorageOrder> fmt::Debug for RowDebug<'a, T, R, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.debug_list().entries(self.0.row(self.1)).finish() }
}
