/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use path_abs::{FileRead, FileWrite};
use std::path::Path;

pub trait Load: Sized {
    fn load<P>(path: P) -> FailResult<Self> where P: AsRef<Path>;
}

pub trait Save {
    fn save<P>(&self, path: P) -> FailResult<()> where P: AsRef<Path>;
}

/// Utility adapter for `Load`/`Save` that serializes as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Json<T: ?Sized>(pub T);

/// Utility adapter for `Load`/`Save` that serializes as YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Yaml<T: ?Sized>(pub T);

impl<T> Load for Json<T> where T: for<'de> serde::Deserialize<'de> {
    fn load<P: AsRef<Path>>(path: P) -> FailResult<Json<T>> {
        debug!("loading JSON from '{}'", path.as_ref().display());
        crate::json::from_reader(FileRead::read(path.as_ref())?).map(Json)
    }
}

impl<T> Load for Yaml<T> where T: for<'de> serde::Deserialize<'de> {
    fn load<P: AsRef<Path>>(path: P) -> FailResult<Yaml<T>> {
        debug!("loading YAML from '{}'", path.as_ref().display());
        Ok(serde_yaml::from_reader(FileRead::read(path.as_ref())?)?).map(Yaml)
    }
}

impl<T: ?Sized> Save for Json<T> where T: serde::Serialize {
    fn save<P: AsRef<Path>>(&self, path: P) -> FailResult<()> {
        debug!("saving JSON to '{}'", path.as_ref().display());
        crate::json::to_writer(FileWrite::create(path.as_ref())?, &self.0)
    }
}

impl<T: ?Sized> Save for Yaml<T> where T: serde::Serialize {
    fn save<P: AsRef<Path>>(&self, path: P) -> FailResult<()> {
        debug!("saving YAML to '{}'", path.as_ref().display());
        Ok(serde_yaml::to_writer(FileWrite::create(path.as_ref())?, &self.0)?)
    }
}
