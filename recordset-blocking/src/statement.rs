use recordset_core::driver::DriverStatement;
use recordset_core::parameters::Parameters;
use recordset_core::record::Record;
use recordset_core::{Error, Result};

/// A prepared statement.
///
/// A statement is a query that has been prepared for execution. It can be bound with parameters and executed.
pub struct Statement<'c> {
    pub(crate) inner: Box<dyn DriverStatement + 'c>,
}

impl Statement<'_> {
    pub fn execute(&mut self, parameters: Option<Parameters>) -> Result<u64> {
        self.inner.execute(parameters).map_err(Error::from)
    }

    /// Query a statement and return an iterator of [Record].
    pub fn query_records<'s: 'i, 'i>(
        &'s mut self,
        parameters: Option<Parameters>,
    ) -> Result<Box<dyn Iterator<Item = Result<Record>> + 'i>> {
        match self.inner.query(parameters) {
            Ok(iterator) => {
                let iterator = iterator.map(|result| result.map_err(Error::from));
                Ok(Box::new(iterator))
            }
            Err(e) => Err(Error::from(e)),
        }
    }

    /// Query a statement that is expected to return a single [Record].
    ///
    /// Returns `Ok(None)` if the query returned no rows.
    /// If the query returns more than one row, the function will return the first row and ignore the rest.
    pub fn query_record(&mut self, parameters: Option<Parameters>) -> Result<Option<Record>> {
        let mut records = self.query_records(parameters)?;
        match records.next() {
            Some(Ok(record)) => Ok(Some(record)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }

    /// Query a statement that is expected to return a single record and map it to a value.
    ///
    /// Returns `Ok(None)` if the query returned no rows.
    /// If the query returns more than one row, the function will return the first row and ignore the rest.
    pub fn query_map_record<F, T>(&mut self, parameters: Option<Parameters>, mapping_fn: F) -> Result<Option<T>>
    where
        F: FnOnce(Record) -> std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
    {
        match self.query_record(parameters)? {
            Some(record) => Ok(Some(mapping_fn(record)?)),
            None => Ok(None),
        }
    }
}
