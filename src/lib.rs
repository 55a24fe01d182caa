/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Order-tagged serialization of dense matrices.
//!
//! Any [`Matrix`] can sit in a serde-derived struct.  It is written as
//! `{"storageOrder": ..., "data": [[...], ...]}`, and reading it back fails
//! unless the recorded storage order is the one the target type asks for.
//!
//! The functions in [`json`], [`yaml`] and [`save`] are the intended entry
//! points; every failure they see (syntax, missing fields, bad elements, or a
//! rejected matrix) comes back as a [`failure::Error`].

#[macro_use] extern crate log;

pub use matser_matrix::{
    Matrix, DMatrix, Matrix2, Matrix3, Matrix4,
    Dim, Dynamic, Const, Shape,
    StorageOrder, RowMajor, ColMajor, OrderTag, ParseOrderTagError,
    MatrixRecord, DecodeError,
};

pub mod json;
pub mod yaml;
pub mod save;
pub mod logging;

pub type FailResult<T> = Result<T, failure::Error>;
