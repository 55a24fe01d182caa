#![allow(dead_code)]

use matser::{DMatrix, Matrix2, Matrix3, RowMajor, ColMajor};

/// A record holding a column-major matrix.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct ModelColMajor {
    pub name: String,
    pub coefficients: DMatrix<f64, ColMajor>,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct ModelRowMajor {
    pub name: String,
    pub coefficients: DMatrix<f64, RowMajor>,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct ModelFixedSize {
    pub name: String,
    pub coefficients: Matrix3<f32, ColMajor>,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct ModelInt {
    pub name: String,
    pub coefficients: Matrix2<i32, ColMajor>,
}

pub fn init_logger() {
    // only the first test to get here installs it
    let _ = matser::logging::GlobalLogger::default().verbosity(1).apply();
}

/// Distinct, non-integral values so that transposition bugs show up.
pub fn sample<O: matser::StorageOrder>(dims: (usize, usize)) -> DMatrix<f64, O>
{ DMatrix::from_fn(dims, |r, c| 10.0 * r as f64 + c as f64 + 0.25) }
