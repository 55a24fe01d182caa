/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense matrices whose shape and storage order can be part of their type.
//!
//! With the `serde-support` feature, matrices serialize through an
//! order-tagged record; see [`MatrixRecord`].

#[macro_use] extern crate failure;
#[cfg(feature = "serde")]
#[macro_use] extern crate log;

pub use self::dim::{Dim, Dynamic, Const, Shape};
pub use self::order::{StorageOrder, RowMajor, ColMajor, OrderTag, ParseOrderTagError};
pub use self::matrix::{Matrix, DMatrix, Matrix2, Matrix3, Matrix4};

#[cfg(feature = "serde")]
pub use self::serde_support::{MatrixRecord, DecodeError};

mod dim;
mod order;
mod matrix;
#[cfg(feature = "serde")]
mod serde_support;
