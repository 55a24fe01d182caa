/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! YAML text in and out.
//!
//! Matrices look the same as in JSON (same field names, one sequence per row),
//! and are validated the same way.

use crate::FailResult;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn read<T: DeserializeOwned>(text: &str) -> FailResult<T> {
    trace!("reading {} bytes of YAML", text.len());
    serde_yaml::from_str(text).map_err(|e| {
        debug!("YAML read failed: {}", e);
        e.into()
    })
}

pub fn write<T: Serialize>(value: &T) -> FailResult<String>
{ Ok(serde_yaml::to_string(value)?) }
