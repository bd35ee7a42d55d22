use crate::decode::Decode;
use crate::values::Value;
use crate::{Error, Result};
use std::sync::Arc;

/// A record returned by a query.
///
/// A record is one materialized result row: an ordered sequence of column names shared by every
/// record of the same result set, and one [`Value`] per column. Records are immutable once
/// constructed by the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Arc<Vec<String>>,
    values: Vec<Value>,
}

impl Record {
    /// Create a new record.
    ///
    /// Users are not expected to call this function directly as it's intended to be only used by
    /// the drivers.
    pub fn new(columns: Arc<Vec<String>>, values: Vec<Value>) -> Self {
        Record { columns, values }
    }

    /// Get the column names of the record, in result-set order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Get the number of columns in the record.
    pub fn num_columns(&self) -> usize {
        self.values.len()
    }

    /// Check if the value of a column from its index is null.
    ///
    /// # Panics
    /// Panics if the column index is out of bounds (`usize` index) or not found (`&str` index).
    pub fn is_null<I: ColumnIndex>(&self, index: I) -> bool {
        match index.index(&self.columns) {
            Ok(index) => self.values[index].is_null(),
            Err(e) => panic!("{}", e),
        }
    }

    /// Get the raw value of a column by its index.
    ///
    /// The index of the column can be either a 0-based index or the name of the column.
    ///
    /// # Panics
    /// Panics if the column index is out of bounds (`usize` index) or not found (`&str` index).
    pub fn value<I: ColumnIndex>(&self, index: I) -> &Value {
        match self.try_value(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Get the raw value of a column by its index.
    pub fn try_value<I: ColumnIndex>(&self, index: I) -> Result<&Value> {
        let index = index.index(&self.columns)?;
        Ok(&self.values[index])
    }

    /// Get a decoded value from a column by its index.
    ///
    /// The index of the column can be either a 0-based index or the name of the column.
    ///
    /// # Panics
    /// Panics if the column index is out of bounds (`usize` index) or not found (`&str` index) or
    /// if the type is not the expected one.
    pub fn get<I: ColumnIndex, T: Decode>(&self, index: I) -> T {
        match index.index(&self.columns) {
            Ok(index) => T::decode(&self.values[index]),
            Err(e) => panic!("{}", e),
        }
    }

    /// Get a decoded value from a column by its index, or `None` if the value is null.
    ///
    /// # Panics
    /// Panics if the column index is out of bounds (`usize` index) or not found (`&str` index) or
    /// if the type is not the expected one.
    pub fn get_nullable<I: ColumnIndex, T: Decode>(&self, index: I) -> Option<T> {
        match index.index(&self.columns) {
            Ok(index) => {
                if self.values[index].is_null() {
                    return None;
                }
                Some(T::decode(&self.values[index]))
            }
            Err(e) => panic!("{}", e),
        }
    }

    /// Get a decoded value from a column by its index.
    ///
    /// The index of the column can be either a 0-based index or the name of the column.
    /// This method returns an error if the column index is out of bounds, or if the type is not
    /// the expected one.
    pub fn try_get<I: ColumnIndex, T: Decode>(&self, index: I) -> Result<T> {
        let index = index.index(&self.columns)?;
        T::try_decode(&self.values[index])
    }

    pub fn try_get_nullable<I: ColumnIndex, T: Decode>(&self, index: I) -> Result<Option<T>> {
        let index = index.index(&self.columns)?;
        if self.values[index].is_null() {
            return Ok(None);
        }
        Ok(Some(T::try_decode(&self.values[index])?))
    }
}

/// A trait implemented by types that can index into columns of a record.
pub trait ColumnIndex {
    fn index(&self, columns: &[String]) -> Result<usize>;
}

impl ColumnIndex for usize {
    fn index(&self, columns: &[String]) -> Result<usize> {
        if *self >= columns.len() {
            Err(Error::OutOfBounds { index: *self })?;
        }
        Ok(*self)
    }
}

impl ColumnIndex for &str {
    fn index(&self, columns: &[String]) -> Result<usize> {
        match columns.iter().position(|column| column == self) {
            Some(index) => Ok(index),
            None => Err(Error::NotFound),
        }
    }
}
