#[macro_use]
extern crate failure;

use matser_matrix::{Matrix, Dim, StorageOrder};

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Assert that two values are equal up to a tolerance.
///
/// `rel=` and `abs=` may precede the operands; the defaults are a relative
/// tolerance of `DEFAULT_NONZERO_TOL` and no absolute tolerance.
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {$crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs;
            let mut rel;
            $(
                $crate::assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, $crate::Tolerances { abs, rel }) {
                panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                 format!($($fmt)*), rel, abs, a, b, e);
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

#[doc(hidden)]
#[inline]
pub fn __is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    // Implementation from Python 3.5.
    // https://hg.python.org/cpython/file/tip/Modules/mathmodule.c#l1993
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum CheckCloseError {
    #[fail(display = "failed at {}:\n  left: {:?}\n right: {:?}", location, left, right)]
    NotClose { location: Location, left: f64, right: f64 },

    #[fail(display = "shapes differ: {:?} vs {:?}", left, right)]
    ShapeMismatch { left: (usize, usize), right: (usize, usize) },
}

/// Where in a value a comparison failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Location {
    Scalar,
    Element(usize),
    Matrix(usize, usize),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Location::Scalar => write!(f, "scalar"),
            Location::Element(i) => write!(f, "index {}", i),
            Location::Matrix(r, c) => write!(f, "element ({}, {})", r, c),
        }
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

fn check_scalar(left: f64, right: f64, tol: Tolerances, location: Location) -> Result<(), CheckCloseError> {
    match __is_close(left, right, tol) {
        true => Ok(()),
        false => Err(CheckCloseError::NotClose { location, left, right }),
    }
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError>
    { check_scalar(*self, *other, tol, Location::Scalar) }
}

// widened to f64; the default tolerance is far tighter than f32 precision,
// so f32 comparisons normally want an explicit `rel=`.
impl CheckClose for f32 {
    #[inline]
    fn check_close(&self, other: &f32, tol: Tolerances) -> Result<(), CheckCloseError>
    { check_scalar(f64::from(*self), f64::from(*other), tol, Location::Scalar) }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: Copy + Into<f64>> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        if self.len() != other.len() {
            return Err(CheckCloseError::ShapeMismatch { left: (self.len(), 1), right: (other.len(), 1) });
        }
        self.iter().zip(other).enumerate()
            .map(|(i, (&a, &b))| check_scalar(a.into(), b.into(), tol, Location::Element(i)))
            .collect()
    }
}

impl<T: Copy + Into<f64>> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

/// Compares logical elements, so the two matrices may use different storage orders.
impl<T, R, C, O, R2, C2, O2> CheckClose<Matrix<T, R2, C2, O2>> for Matrix<T, R, C, O>
where
    T: Copy + Into<f64>,
    R: Dim, C: Dim, O: StorageOrder,
    R2: Dim, C2: Dim, O2: StorageOrder,
{
    fn check_close(&self, other: &Matrix<T, R2, C2, O2>, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        if self.dims() != other.dims() {
            return Err(CheckCloseError::ShapeMismatch { left: self.dims(), right: other.dims() });
        }
        let (rows, cols) = self.dims();
        for r in 0..rows {
            for c in 0..cols {
                let (a, b) = (self[(r, c)].into(), other[(r, c)].into());
                check_scalar(a, b, tol, Location::Matrix(r, c))?;
            }
        }
        Ok(())
    }
}
