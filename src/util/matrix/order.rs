/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::str::FromStr;

/// Runtime name of a storage order.
///
/// The string forms (`"RowMajor"` and `"ColMajor"`) are what gets written
/// into serialized matrices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderTag {
    RowMajor,
    ColMajor,
}

impl OrderTag {
    pub const ALL: [OrderTag; 2] = [OrderTag::RowMajor, OrderTag::ColMajor];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderTag::RowMajor => "RowMajor",
            OrderTag::ColMajor => "ColMajor",
        }
    }

    pub fn is_row_major(self) -> bool { self == OrderTag::RowMajor }

    pub fn opposite(self) -> OrderTag {
        match self {
            OrderTag::RowMajor => OrderTag::ColMajor,
            OrderTag::ColMajor => OrderTag::RowMajor,
        }
    }
}

impl fmt::Display for OrderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
#[fail(display = "unrecognized storage order: '{}'", _0)]
pub struct ParseOrderTagError(pub String);

/// Exact, case-sensitive match; surrounding whitespace is not trimmed.
impl FromStr for OrderTag {
    type Err = ParseOrderTagError;

    fn from_str(s: &str) -> Result<OrderTag, ParseOrderTagError> {
        OrderTag::ALL.iter().cloned()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseOrderTagError(s.to_string()))
    }
}

/// Type-level storage order of a [`Matrix`](crate::Matrix).
///
/// This trait is sealed; [`RowMajor`] and [`ColMajor`] are the only orders.
pub trait StorageOrder
    : Copy + Default + PartialEq + Eq + fmt::Debug
    + Send + Sync + 'static + private::Sealed
{
    const TAG: OrderTag;
    const IS_ROW_MAJOR: bool;

    /// Strides `(row_stride, col_stride)` of a contiguous matrix with the given dims.
    #[inline(always)]
    fn strides((rows, cols): (usize, usize)) -> (usize, usize) {
        match Self::IS_ROW_MAJOR {
            true => (cols, 1),
            false => (1, rows),
        }
    }
}

mod private {
    pub trait Sealed { }
}

/// C order. Each row is contiguous.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct RowMajor;

/// Fortran order. Each column is contiguous.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ColMajor;

impl private::Sealed for RowMajor { }
impl StorageOrder for RowMajor {
    const TAG: OrderTag = OrderTag::RowMajor;
    const IS_ROW_MAJOR: bool = true;
}

impl private::Sealed for ColMajor { }
impl StorageOrder for ColMajor {
    const TAG: OrderTag = OrderTag::ColMajor;
    const IS_ROW_MAJOR: bool = false;
}
