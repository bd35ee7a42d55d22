use crate::errors::driver_error;
use crate::value::{value_from_sql, Adapter};
use recordset_core::driver::{DriverStatement, Result};
use recordset_core::parameters::Parameters;
use recordset_core::record::Record;
use recordset_core::Error;
use std::sync::Arc;

pub(crate) struct SqliteStatement<'c> {
    pub(crate) inner: rusqlite::Statement<'c>,
}

impl SqliteStatement<'_> {
    /// Bind the parameters to the placeholders of the prepared statement.
    ///
    /// The valid values for the index in `raw_bind_parameter` begin at `1`, and end at
    /// [`rusqlite::Statement::parameter_count`], inclusive.
    fn bind(&mut self, parameters: Option<Parameters>) -> Result<()> {
        let expected = self.inner.parameter_count();
        match parameters {
            None => {
                if expected > 0 {
                    return Err(Error::InvalidParameterCount { expected, actual: 0 }.into());
                }
                Ok(())
            }
            Some(Parameters::Positional(values)) => {
                if expected != values.len() {
                    return Err(Error::InvalidParameterCount { expected, actual: values.len() }.into());
                }
                for (index, value) in values.iter().enumerate() {
                    self.inner.raw_bind_parameter(index + 1, Adapter(value)).map_err(driver_error)?;
                }
                Ok(())
            }
            Some(Parameters::Named(values)) => {
                if expected != values.len() {
                    return Err(Error::InvalidParameterCount { expected, actual: values.len() }.into());
                }
                for (name, value) in values.iter() {
                    let index = self.parameter_index(name)?;
                    self.inner.raw_bind_parameter(index, Adapter(value)).map_err(driver_error)?;
                }
                Ok(())
            }
        }
    }

    /// Resolve a named parameter to its 1-based placeholder index.
    ///
    /// The name is given without the placeholder prefix, the `:name`, `@name` and `$name` dialects
    /// are all accepted in the statement text.
    fn parameter_index(&self, name: &str) -> Result<usize> {
        for prefix in [":", "@", "$"] {
            if let Some(index) = self.inner.parameter_index(&format!("{}{}", prefix, name)).map_err(driver_error)? {
                return Ok(index);
            }
        }
        Err(Error::UnknownParameter { name: name.to_string() }.into())
    }
}

impl DriverStatement for SqliteStatement<'_> {
    fn execute(&mut self, parameters: Option<Parameters>) -> Result<u64> {
        self.bind(parameters)?;
        match self.inner.raw_execute() {
            Ok(affected_rows) => Ok(affected_rows as u64),
            Err(e) => Err(driver_error(e).into()),
        }
    }

    fn query<'s>(
        &'s mut self,
        parameters: Option<Parameters>,
    ) -> Result<Box<dyn Iterator<Item = Result<Record>> + 's>> {
        self.bind(parameters)?;
        let columns: Arc<Vec<String>> =
            Arc::new(self.inner.column_names().into_iter().map(|name| name.to_string()).collect());
        let rows = self.inner.raw_query();
        Ok(Box::new(SqliteRecords { columns, rows }))
    }
}

struct SqliteRecords<'s> {
    columns: Arc<Vec<String>>,
    rows: rusqlite::Rows<'s>,
}

impl Iterator for SqliteRecords<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Result<Record>> {
        match self.rows.next() {
            Ok(Some(row)) => {
                let mut values = Vec::with_capacity(self.columns.len());
                for index in 0..self.columns.len() {
                    match row.get_ref(index) {
                        Ok(value) => values.push(value_from_sql(value)),
                        Err(e) => return Some(Err(driver_error(e).into())),
                    }
                }
                Some(Ok(Record::new(self.columns.clone(), values)))
            }
            Ok(None) => None,
            Err(e) => Some(Err(driver_error(e).into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::IN_MEMORY_URI;
    use ctor::ctor;
    use recordset_core::factory::Factory;
    use recordset_core::{named_params, params, Error};

    #[ctor]
    fn before_all() {
        crate::register_driver();
    }

    #[test]
    fn test_execute() {
        let mut conn = Factory::open(IN_MEMORY_URI).unwrap();
        assert_eq!(
            conn.prepare("CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)").unwrap().execute(None).unwrap(),
            0
        );
        assert_eq!(conn.prepare("INSERT INTO test (id, name) VALUES (1, 'Alice')").unwrap().execute(None).unwrap(), 1);
        assert_eq!(
            conn.prepare("INSERT INTO test (id, name) VALUES (?, ?)").unwrap().execute(params!(2, "Bob")).unwrap(),
            1
        );
        // parameter count mismatch
        assert!(conn.prepare("INSERT INTO test (id, name) VALUES (?, ?)").unwrap().execute(params!(3)).is_err());
        conn.close().unwrap();
    }

    #[test]
    fn test_query() {
        let mut conn = Factory::open(IN_MEMORY_URI).unwrap();
        conn.prepare("CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)").unwrap().execute(None).unwrap();
        conn.prepare("INSERT INTO test (id, name) VALUES (1, NULL)").unwrap().execute(None).unwrap();
        conn.prepare("INSERT INTO test (id, name) VALUES (?, ?)").unwrap().execute(params!(2, "Bob")).unwrap();

        let mut stmt = conn.prepare("SELECT id, name FROM test ORDER BY id").unwrap();
        let mut records = stmt.query(None).unwrap();
        let record = records.next().unwrap().unwrap();
        assert_eq!(record.column_names(), &["id", "name"]);
        assert_eq!(record.get::<&str, i64>("id"), 1);
        assert!(record.is_null("name"));
        let record = records.next().unwrap().unwrap();
        assert_eq!(record.get::<&str, String>("name"), "Bob");
        assert!(records.next().is_none());
    }

    #[test]
    fn test_named_parameters() {
        let mut conn = Factory::open(IN_MEMORY_URI).unwrap();
        conn.prepare("CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)").unwrap().execute(None).unwrap();
        conn.prepare("INSERT INTO test (id, name) VALUES (:id, :name)")
            .unwrap()
            .execute(named_params! { "id" => 1, "name" => "Alice" })
            .unwrap();

        let mut stmt = conn.prepare("SELECT name FROM test WHERE id = :id").unwrap();
        let mut records = stmt.query(named_params! { "id" => 1 }).unwrap();
        assert_eq!(records.next().unwrap().unwrap().get::<&str, String>("name"), "Alice");
        drop(records);
        drop(stmt);

        // a name matching no placeholder
        let mut stmt = conn.prepare("SELECT name FROM test WHERE id = :id").unwrap();
        let result = stmt.query(named_params! { "unknown" => 1 });
        assert!(matches!(result.err().map(Error::from), Some(Error::UnknownParameter { .. })));
    }

    #[test]
    fn test_constraint_violation() {
        let mut conn = Factory::open(IN_MEMORY_URI).unwrap();
        conn.prepare("CREATE TABLE test (id INTEGER PRIMARY KEY)").unwrap().execute(None).unwrap();
        conn.prepare("INSERT INTO test (id) VALUES (1)").unwrap().execute(None).unwrap();
        let result = conn.prepare("INSERT INTO test (id) VALUES (1)").unwrap().execute(None);
        assert!(matches!(result.err().map(Error::from), Some(Error::ConstraintViolation { .. })));
    }
}
