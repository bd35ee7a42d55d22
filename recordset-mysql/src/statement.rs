use crate::errors::driver_error;
use crate::values::{value_from_sql, value_to_sql};
use mysql::prelude::Queryable;
use recordset_core::driver::{DriverStatement, Result};
use recordset_core::parameters::Parameters;
use recordset_core::record::Record;
use recordset_core::Error;
use std::sync::Arc;

pub(crate) struct MySqlStatement<'c> {
    pub(crate) conn: &'c mut mysql::Conn,
    pub(crate) inner: mysql::Statement,
}

impl MySqlStatement<'_> {
    fn bind(&self, parameters: Option<Parameters>) -> Result<mysql::Params> {
        let expected = usize::from(self.inner.num_params());
        match parameters {
            None => {
                if expected > 0 {
                    return Err(Error::InvalidParameterCount { expected, actual: 0 }.into());
                }
                Ok(mysql::Params::Empty)
            }
            Some(Parameters::Positional(values)) => {
                if expected != values.len() {
                    return Err(Error::InvalidParameterCount { expected, actual: values.len() }.into());
                }
                Ok(mysql::Params::Positional(values.iter().map(value_to_sql).collect()))
            }
            Some(Parameters::Named(values)) => Ok(mysql::Params::Named(
                values.iter().map(|(name, value)| (name.clone().into_bytes(), value_to_sql(value))).collect(),
            )),
        }
    }
}

impl DriverStatement for MySqlStatement<'_> {
    fn execute(&mut self, parameters: Option<Parameters>) -> Result<u64> {
        let params = self.bind(parameters)?;
        let result = self.conn.exec_iter(&self.inner, params).map_err(driver_error)?;
        Ok(result.affected_rows())
    }

    fn query<'s>(
        &'s mut self,
        parameters: Option<Parameters>,
    ) -> Result<Box<dyn Iterator<Item = Result<Record>> + 's>> {
        let params = self.bind(parameters)?;
        let mut result = self.conn.exec_iter(&self.inner, params).map_err(driver_error)?;
        let columns: Arc<Vec<String>> =
            Arc::new(result.columns().as_ref().iter().map(|column| column.name_str().into_owned()).collect());
        // The result set borrows the connection, it is drained before returning.
        let mut records: Vec<Record> = Vec::new();
        for row in result.by_ref() {
            let row = row.map_err(driver_error)?;
            let mut values = Vec::with_capacity(columns.len());
            for value in row.unwrap() {
                values.push(value_from_sql(value)?);
            }
            records.push(Record::new(columns.clone(), values));
        }
        Ok(Box::new(records.into_iter().map(Ok)))
    }
}
