use crate::statement::Statement;
use recordset_core::driver::DriverConnection;
use recordset_core::factory::Factory;
use recordset_core::parameters::Parameters;
use recordset_core::record::Record;
use recordset_core::{Error, Result};

/// A connection to a data source.
///
/// ```rust,ignore
/// use recordset_blocking::Connection;
///
/// let mut conn = Connection::open("sqlite:///:memory:")?;
///
/// conn.execute("CREATE TABLE employee (id BIGINT, name TEXT)", None)?;
/// conn.execute("INSERT INTO employee (id, name) VALUES (?, ?)", params!(1, "Alice"))?;
///
/// let employee = conn.query_record("SELECT * FROM employee", None)?;
/// ```
pub struct Connection {
    inner: Box<dyn DriverConnection>,
}

impl Connection {
    pub fn open(uri: &str) -> Result<Self> {
        let inner = Factory::open(uri)?;
        tracing::debug!(driver = inner.driver_name(), "connection open");
        Ok(Self { inner })
    }

    /// Get the driver name used by the connection.
    pub fn driver_name(&self) -> &str {
        self.inner.driver_name()
    }

    /// Prepare a statement.
    ///
    /// Return a [Statement] that can be later used to by `query` or `execute` functions. A prepared statement can be
    /// used multiple times with different parameters.
    pub fn prepare<S: AsRef<str>>(&mut self, statement: S) -> Result<Statement<'_>> {
        Ok(Statement { inner: self.inner.prepare(statement.as_ref())? })
    }

    /// Execute a statement.
    ///
    /// Returns the number of rows affected.
    pub fn execute<S: AsRef<str>>(&mut self, statement: S, parameters: Option<Parameters>) -> Result<u64> {
        let mut statement = self.prepare(statement)?;
        statement.execute(parameters)
    }

    /// Query a statement that is expected to return a single [Record].
    ///
    /// Returns `Ok(None)` if the query returned no rows.
    /// If the query returns more than one row, the function will return the first row and ignore the rest.
    pub fn query_record<S: AsRef<str>>(
        &mut self,
        statement: S,
        parameters: Option<Parameters>,
    ) -> Result<Option<Record>> {
        let mut statement = self.prepare(statement)?;
        statement.query_record(parameters)
    }

    /// Query a statement that is expected to return a single record and map it to a value.
    ///
    /// Returns `Ok(None)` if the query returned no rows.
    /// If the query returns more than one row, the function will return the first row and ignore the rest.
    ///
    /// See [Statement::query_map_record] for more information.
    pub fn query_map_record<S: AsRef<str>, F, T>(
        &mut self,
        statement: S,
        parameters: Option<Parameters>,
        mapping_fn: F,
    ) -> Result<Option<T>>
    where
        F: FnOnce(Record) -> std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
    {
        let mut statement = self.prepare(statement)?;
        statement.query_map_record(parameters, mapping_fn)
    }

    /// Close the connection.
    ///
    /// Because a {{Statement}} borrows the connection, all statements must be dropped before calling `close()`.
    pub fn close(self) -> Result<()> {
        self.inner.close().map_err(Error::from)
    }
}
