/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! JSON text in and out.

use crate::FailResult;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};

/// Parse a value from JSON text.
pub fn read<T: DeserializeOwned>(text: &str) -> FailResult<T> {
    trace!("reading {} bytes of JSON", text.len());
    serde_json::from_str(text).map_err(|e| {
        debug!("JSON read failed: {}", e);
        e.into()
    })
}

pub fn write<T: Serialize + ?Sized>(value: &T) -> FailResult<String>
{ Ok(serde_json::to_string(value)?) }

pub fn write_pretty<T: Serialize + ?Sized>(value: &T) -> FailResult<String>
{ Ok(serde_json::to_string_pretty(value)?) }

pub fn from_reader<T: DeserializeOwned>(reader: impl Read) -> FailResult<T>
{ Ok(serde_json::from_reader(reader)?) }

pub fn to_writer<T: Serialize + ?Sized>(writer: impl Write, value: &T) -> FailResult<()>
{ Ok(serde_json::to_writer(writer, value)?) }
