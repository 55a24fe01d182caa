/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

/// Type-level description of one matrix extent (number of rows or columns).
///
/// There are exactly two implementations: [`Dynamic`], which stores the extent
/// at runtime, and [`Const`], which fixes it in the type.
///
/// This trait is sealed to avoid accidental commitments.
pub trait Dim: Copy + PartialEq + fmt::Debug + Send + Sync + 'static + private::Sealed {
    /// The extent fixed by the type, if any.
    fn fixed() -> Option<usize>;

    /// Produce the dimension for an extent, if the type admits it.
    fn try_from_usize(n: usize) -> Option<Self>;

    fn value(&self) -> usize;

    /// The extent this dimension takes in a matrix with no elements.
    ///
    /// Dynamic extents collapse to zero; fixed ones keep their value.
    #[inline]
    fn empty_extent() -> usize { Self::fixed().unwrap_or(0) }
}

mod private {
    pub trait Sealed { }
}

/// An extent only known at runtime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dynamic(usize);

/// An extent fixed at compile time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Const<const N: usize>;

impl Dynamic {
    #[inline(always)]
    pub fn new(n: usize) -> Self { Dynamic(n) }
}

impl private::Sealed for Dynamic { }
impl Dim for Dynamic {
    #[inline(always)] fn fixed() -> Option<usize> { None }
    #[inline(always)] fn try_from_usize(n: usize) -> Option<Self> { Some(Dynamic(n)) }
    #[inline(always)] fn value(&self) -> usize { self.0 }
}

impl<const N: usize> private::Sealed for Const<N> { }
impl<const N: usize> Dim for Const<N> {
    #[inline(always)] fn fixed() -> Option<usize> { Some(N) }
    #[inline(always)]
    fn try_from_usize(n: usize) -> Option<Self> {
        match n == N {
            true => Some(Const),
            false => None,
        }
    }
    #[inline(always)] fn value(&self) -> usize { N }
}

// print as the bare extent; "Const" and "Dynamic" are noise in matrix Debug output
impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "{}", self.0) }
}

impl<const N: usize> fmt::Debug for Const<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "{}", N) }
}

/// A matrix shape as it appears in error messages.
///
/// `None` stands for an extent that is not fixed by a type; it prints as `?`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Shape(pub Option<usize>, pub Option<usize>);

impl Shape {
    /// The shape a target type demands.
    pub fn of_type<R: Dim, C: Dim>() -> Shape { Shape(R::fixed(), C::fixed()) }

    pub fn exact((rows, cols): (usize, usize)) -> Shape { Shape(Some(rows), Some(cols)) }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "{}x{}", Extent(self.0), Extent(self.1)) }
}

struct Extent(Option<usize>);

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_only_accepts_its_extent() {
        assert_eq!(Const::<3>::try_from_usize(3), Some(Const));
        assert_eq!(Const::<3>::try_from_usize(2), None);
        assert_eq!(Const::<0>::try_from_usize(0), Some(Const));
        assert_eq!(Const::<4>::fixed(), Some(4));
    }

    #[test]
    fn dynamic_accepts_anything() {
        assert_eq!(Dynamic::try_from_usize(0).map(|d| d.value()), Some(0));
        assert_eq!(Dynamic::try_from_usize(17).map(|d| d.value()), Some(17));
        assert_eq!(Dynamic::fixed(), None);
    }

    #[test]
    fn empty_extent() {
        assert_eq!(Dynamic::empty_extent(), 0);
        assert_eq!(Const::<3>::empty_extent(), 3);
    }

    #[test]
    fn shape_display() {
        assert_eq!(Shape::exact((2, 3)).to_string(), "2x3");
        assert_eq!(Shape::of_type::<Dynamic, Const<3>>().to_string(), "?x3");
        assert_eq!(Shape::of_type::<Dynamic, Dynamic>().to_string(), "?x?");
    }
}
