/* ************************************************************************ **
** This file is part of matser, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Serialization of [`Matrix`] through an order-tagged record.
//!
//! A matrix serializes as
//!
//! ```json
//! {"storageOrder": "RowMajor", "data": [[1.1, 2.2, 3.3], [4.4, 5.5, 6.6]]}
//! ```
//!
//! where `data` always lists one array per row, whatever the storage order.
//! The tag only records the order of the type that wrote it.  On the way back
//! in, the tag must name the storage order of the target type; there is no
//! implicit reordering.  (use [`Matrix::to_order`] for that)

use crate::dim::{Dim, Shape};
use crate::matrix::Matrix;
use crate::order::{OrderTag, StorageOrder};

use serde::{Serialize, Serializer, Deserialize, Deserializer};

/// Serialization-neutral form of a matrix.
///
/// This is what actually goes over the wire.  It is rebuilt for every
/// call and never shared.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRecord<T> {
    /// `"RowMajor"` or `"ColMajor"`.
    ///
    /// Kept as a plain string so that a bad value produces a [`DecodeError`]
    /// rather than a generic "unknown variant" error.
    pub storage_order: String,
    /// One `Vec` per row.
    pub data: Vec<Vec<T>>,
}

/// Reasons a [`MatrixRecord`] cannot become a particular matrix type.
///
/// Missing fields and badly-typed elements never get this far; the
/// deserializer reports those on its own.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum DecodeError {
    #[fail(display = "Storage order tag is not valid: serialized data is '{}' but the accepted values are 'RowMajor' and 'ColMajor'", found)]
    InvalidOrderTag { found: String },

    #[fail(display = "Storage order mismatch: serialized data is '{}' but the target type expects '{}'", found, expected)]
    OrderMismatch { found: OrderTag, expected: OrderTag },

    #[fail(display = "Ragged matrix data: row {} has {} elements but the first row has {}", row, len, expected)]
    RaggedRows { row: usize, len: usize, expected: usize },

    #[fail(display = "Matrix shape mismatch: serialized data is {} but the target type expects {}", found, expected)]
    ShapeMismatch { found: Shape, expected: Shape },
}

impl<T: Clone> MatrixRecord<T> {
    /// Project a matrix onto a record.  Cannot fail.
    pub fn from_matrix<R: Dim, C: Dim, O: StorageOrder>(matrix: &Matrix<T, R, C, O>) -> Self {
        let (rows, cols) = matrix.dims();
        trace!("encoding {}x{} {} matrix", rows, cols, O::TAG);

        let mut data = Vec::with_capacity(rows);
        for r in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for c in 0..cols {
                row.push(matrix[(r, c)].clone());
            }
            data.push(row);
        }
        MatrixRecord { storage_order: O::TAG.as_str().to_string(), data }
    }

    /// Rebuild a matrix of a specific type.
    ///
    /// Checks are performed in this order, stopping at the first failure:
    ///
    /// 1. the tag is exactly `"RowMajor"` or `"ColMajor"`;
    /// 2. the tag names the storage order of the target type;
    /// 3. if there are no rows, or the first row is empty, the result is an
    ///    empty matrix (see [`Matrix::try_empty`]);
    /// 4. all rows are as long as the first one;
    /// 5. the shape agrees with any fixed dims of the target type.
    pub fn into_matrix<R: Dim, C: Dim, O: StorageOrder>(self) -> Result<Matrix<T, R, C, O>, DecodeError> {
        let result = self.decode();
        match &result {
            Ok(m) => trace!("decoded {}x{} {} matrix", m.num_rows(), m.num_cols(), O::TAG),
            Err(e) => debug!("rejected serialized matrix: {}", e),
        }
        result
    }

    fn decode<R: Dim, C: Dim, O: StorageOrder>(self) -> Result<Matrix<T, R, C, O>, DecodeError> {
        let found = self.order_tag()?;
        if found != O::TAG {
            return Err(DecodeError::OrderMismatch { found, expected: O::TAG });
        }

        let expected = Shape::of_type::<R, C>();
        let MatrixRecord { data, .. } = self;

        let cols = match data.first() {
            Some(first) if !first.is_empty() => first.len(),
            // an empty matrix has no distinguishable layout
            first => {
                let found = Shape::exact((data.len(), first.map_or(0, Vec::len)));
                return Matrix::try_empty()
                    .ok_or(DecodeError::ShapeMismatch { found, expected });
            },
        };

        if let Some((row, len)) = data.iter().map(Vec::len).enumerate().find(|&(_, len)| len != cols) {
            return Err(DecodeError::RaggedRows { row, len, expected: cols });
        }

        let rows = data.len();
        Matrix::try_from_fn((rows, cols), |r, c| data[r][c].clone())
            .ok_or(DecodeError::ShapeMismatch { found: Shape::exact((rows, cols)), expected })
    }
}

impl<T> MatrixRecord<T> {
    /// Parse the tag.
    pub fn order_tag(&self) -> Result<OrderTag, DecodeError> {
        self.storage_order.parse()
            .map_err(|_| DecodeError::InvalidOrderTag { found: self.storage_order.clone() })
    }
}

impl<T, R, C, O> Serialize for Matrix<T, R, C, O>
where
    T: Serialize + Clone,
    R: Dim,
    C: Dim,
    O: StorageOrder,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { MatrixRecord::from_matrix(self).serialize(serializer) }
}

impl<'de, T, R, C, O> Deserialize<'de> for Matrix<T, R, C, O>
where
    T: Deserialize<'de> + Clone,
    R: Dim,
    C: Dim,
    O: StorageOrder,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        MatrixRecord::<T>::deserialize(deserializer)?
            .into_matrix()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColMajor, Const, DMatrix, Dynamic, Matrix2, Matrix3, RowMajor};

    fn record<T>(tag: &str, data: Vec<Vec<T>>) -> MatrixRecord<T>
    { MatrixRecord { storage_order: tag.to_string(), data } }

    fn example_rows() -> Vec<Vec<f64>> {
        vec![
            vec![1.1, 2.2, 3.3],
            vec![4.4, 5.5, 6.6],
        ]
    }

    #[test]
    fn encode_lists_rows_for_either_order() {
        let rm = DMatrix::<f64, RowMajor>::from_row_major_data((2, 3), vec![1.1, 2.2, 3.3, 4.4, 5.5, 6.6]);
        let cm: DMatrix<f64, ColMajor> = rm.to_order();

        assert_eq!(MatrixRecord::from_matrix(&rm), record("RowMajor", example_rows()));
        assert_eq!(MatrixRecord::from_matrix(&cm), record("ColMajor", example_rows()));
    }

    #[test]
    fn json_shape() {
        let m = DMatrix::<f64, RowMajor>::from_row_major_data((2, 3), vec![1.1, 2.2, 3.3, 4.4, 5.5, 6.6]);
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"storageOrder":"RowMajor","data":[[1.1,2.2,3.3],[4.4,5.5,6.6]]}"#,
        );

        let m = Matrix2::<i32, ColMajor>::from([[-1, 0], [1, 100]]);
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"storageOrder":"ColMajor","data":[[-1,0],[1,100]]}"#,
        );
    }

    #[test]
    fn decode_matching_order() {
        let m: DMatrix<f64, ColMajor> = record("ColMajor", example_rows()).into_matrix().unwrap();
        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m.to_nested_rows(), example_rows());
        assert_eq!(m.storage_data(), &[1.1, 4.4, 2.2, 5.5, 3.3, 6.6]);
    }

    #[test]
    fn invalid_tag() {
        for tag in &["", "InvalidValue", "rowmajor", "COLMAJOR", " RowMajor", "RowMajor\n"] {
            let err = record(tag, example_rows()).into_matrix::<Dynamic, Dynamic, RowMajor>().unwrap_err();
            assert_eq!(err, DecodeError::InvalidOrderTag { found: tag.to_string() });

            let err = record(tag, example_rows()).into_matrix::<Dynamic, Dynamic, ColMajor>().unwrap_err();
            assert_eq!(err, DecodeError::InvalidOrderTag { found: tag.to_string() });
        }

        let message = record("InvalidValue", example_rows())
            .into_matrix::<Dynamic, Dynamic, RowMajor>().unwrap_err()
            .to_string();
        assert!(message.contains("Storage order tag is not valid"), "{}", message);
        assert!(message.contains("'InvalidValue'"), "{}", message);
        assert!(message.contains("'RowMajor'"), "{}", message);
        assert!(message.contains("'ColMajor'"), "{}", message);
    }

    #[test]
    fn order_mismatch() {
        let err = record("RowMajor", example_rows()).into_matrix::<Dynamic, Dynamic, ColMajor>().unwrap_err();
        assert_eq!(err, DecodeError::OrderMismatch { found: OrderTag::RowMajor, expected: OrderTag::ColMajor });
        assert_eq!(
            err.to_string(),
            "Storage order mismatch: serialized data is 'RowMajor' but the target type expects 'ColMajor'",
        );

        let err = record("ColMajor", example_rows()).into_matrix::<Dynamic, Dynamic, RowMajor>().unwrap_err();
        assert_eq!(err, DecodeError::OrderMismatch { found: OrderTag::ColMajor, expected: OrderTag::RowMajor });
    }

    #[test]
    fn empty_data() {
        for tag in &["RowMajor", "ColMajor"] {
            for data in vec![vec![], vec![vec![]], vec![vec![], vec![1.0]]] {
                let rec = record(tag, data);
                match *tag {
                    "RowMajor" => assert_eq!(rec.into_matrix::<Dynamic, Dynamic, RowMajor>().unwrap().dims(), (0, 0)),
                    _ => assert_eq!(rec.into_matrix::<Dynamic, Dynamic, ColMajor>().unwrap().dims(), (0, 0)),
                }
            }
        }

        // a fixed extent survives as long as the matrix still has no elements
        let m = record::<f64>("RowMajor", vec![]).into_matrix::<Dynamic, Const<3>, RowMajor>().unwrap();
        assert_eq!(m.dims(), (0, 3));

        let err = record::<f64>("RowMajor", vec![]).into_matrix::<Const<3>, Const<3>, RowMajor>().unwrap_err();
        assert_eq!(err, DecodeError::ShapeMismatch {
            found: Shape(Some(0), Some(0)),
            expected: Shape(Some(3), Some(3)),
        });
    }

    #[test]
    fn empty_data_still_checks_tag() {
        let err = record::<f64>("Nope", vec![]).into_matrix::<Dynamic, Dynamic, RowMajor>().unwrap_err();
        assert_eq!(err, DecodeError::InvalidOrderTag { found: "Nope".to_string() });

        let err = record::<f64>("ColMajor", vec![]).into_matrix::<Dynamic, Dynamic, RowMajor>().unwrap_err();
        assert_eq!(err, DecodeError::OrderMismatch { found: OrderTag::ColMajor, expected: OrderTag::RowMajor });
    }

    #[test]
    fn ragged_rows() {
        let data = vec![vec![1, 2], vec![3, 4], vec![5]];
        let err = record("RowMajor", data).into_matrix::<Dynamic, Dynamic, RowMajor>().unwrap_err();
        assert_eq!(err, DecodeError::RaggedRows { row: 2, len: 1, expected: 2 });

        let data = vec![vec![1, 2], vec![3, 4, 5]];
        let err = record("ColMajor", data).into_matrix::<Dynamic, Dynamic, ColMajor>().unwrap_err();
        assert_eq!(err, DecodeError::RaggedRows { row: 1, len: 3, expected: 2 });
    }

    #[test]
    fn tag_is_checked_before_rows() {
        let data = vec![vec![1, 2], vec![3]];
        let err = record("ColMajor", data).into_matrix::<Dynamic, Dynamic, RowMajor>().unwrap_err();
        assert_eq!(err, DecodeError::OrderMismatch { found: OrderTag::ColMajor, expected: OrderTag::RowMajor });
    }

    #[test]
    fn fixed_shape() {
        let rows = vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]];
        let m: Matrix3<f32, RowMajor> = record("RowMajor", rows).into_matrix().unwrap();
        assert_eq!(m[(2, 1)], 8.0);

        let err = record("RowMajor", vec![vec![1.0f32, 2.0], vec![3.0, 4.0]])
            .into_matrix::<Const<3>, Const<3>, RowMajor>().unwrap_err();
        assert_eq!(err, DecodeError::ShapeMismatch {
            found: Shape(Some(2), Some(2)),
            expected: Shape(Some(3), Some(3)),
        });
        assert_eq!(err.to_string(), "Matrix shape mismatch: serialized data is 2x2 but the target type expects 3x3");

        let err = record("ColMajor", vec![vec![1, 2], vec![3, 4]])
            .into_matrix::<Dynamic, Const<3>, ColMajor>().unwrap_err();
        assert_eq!(err.to_string(), "Matrix shape mismatch: serialized data is 2x2 but the target type expects ?x3");
    }

    #[test]
    fn serde_reports_missing_fields() {
        let err = serde_json::from_str::<DMatrix<i32, ColMajor>>(r#"{"data":[[1,2],[3,4]]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `storageOrder`"), "{}", err);

        let err = serde_json::from_str::<DMatrix<i32, ColMajor>>(r#"{"storageOrder":"ColMajor"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `data`"), "{}", err);
    }

    #[test]
    fn serde_reports_decode_errors() {
        let json = r#"{"storageOrder":"RowMajor","data":[[1,2],[3,4]]}"#;
        let err = serde_json::from_str::<DMatrix<i32, ColMajor>>(json).unwrap_err();
        assert!(err.to_string().contains("Storage order mismatch"), "{}", err);
    }

    #[test]
    fn serde_reports_element_errors() {
        let json = r#"{"storageOrder":"RowMajor","data":[[1,"two"],[3,4]]}"#;
        let err = serde_json::from_str::<DMatrix<i32, RowMajor>>(json).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{}", err);

        let json = r#"{"storageOrder":"RowMajor","data":[[1.5,2],[3,4]]}"#;
        assert!(serde_json::from_str::<DMatrix<i32, RowMajor>>(json).is_err());
    }
}
