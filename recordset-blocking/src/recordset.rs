use crate::connection::Connection;
use recordset_core::clean_statement;
use recordset_core::parameters::Parameters;
use recordset_core::record::Record;
use recordset_core::values::Value;
use recordset_core::{Error, Result};

/// A buffered record set with a movable cursor.
///
/// A `RecordSet` owns a [Connection] and buffers the full result of the most recent query so the
/// caller can walk the records without re-querying. The buffer and the cursor position are
/// replaced wholesale by every call that executes a statement.
///
/// The cursor moves ([`next_record`](RecordSet::next_record),
/// [`previous_record`](RecordSet::previous_record)) clamp at the boundaries of the buffer: they
/// never wrap around and never fail on a boundary touch. Only indexed access outside
/// `[0, record_count())` and cursor access on an empty buffer fail, with
/// [`Error::OutOfBounds`].
///
/// ```rust,ignore
/// use recordset_blocking::RecordSet;
/// use recordset_core::params;
///
/// let mut rs = RecordSet::open("sqlite:///:memory:")?;
/// rs.execute("SELECT id, name FROM employee WHERE dept = ?", params!("sales"))?;
/// for record in rs.records() {
///     println!("{}", record.get::<&str, String>("name"));
/// }
/// ```
pub struct RecordSet {
    connection: Connection,
    records: Vec<Record>,
    position: usize,
}

impl RecordSet {
    /// Open a connection to the data source identified by the URI and wrap it in an empty record set.
    pub fn open(uri: &str) -> Result<Self> {
        Ok(Self::new(Connection::open(uri)?))
    }

    pub fn new(connection: Connection) -> Self {
        Self { connection, records: Vec::new(), position: 0 }
    }

    /// Execute a statement and buffer every record it returns.
    ///
    /// The statement is prepared and run through the driver's query path: a statement returning no
    /// rows (DML, DDL) leaves the buffer empty. The buffer is replaced and the cursor reset to 0
    /// on every call, whatever the outcome.
    ///
    /// Returns `Ok(false)` when the engine reports that the statement execution failed (a
    /// constraint violation); the buffer is left empty and consistent. Any other driver fault
    /// (malformed SQL, connectivity loss) propagates as `Err` untranslated.
    pub fn execute<S: AsRef<str>>(&mut self, statement: S, parameters: Option<Parameters>) -> Result<bool> {
        let statement = statement.as_ref();
        self.records = Vec::new();
        self.position = 0;

        let mut prepared = self.connection.prepare(statement)?;
        let buffered: Result<Vec<Record>> = match prepared.query_records(parameters) {
            Ok(iterator) => iterator.collect(),
            Err(e) => Err(e),
        };
        drop(prepared);

        match buffered {
            Ok(records) => {
                tracing::trace!(statement = %clean_statement(statement), records = records.len(), "statement executed");
                self.records = records;
                Ok(true)
            }
            Err(Error::ConstraintViolation { error }) => {
                tracing::debug!(statement = %clean_statement(statement), %error, "statement execution failed");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Get the full buffered result set. Does not move the cursor.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get the number of buffered records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Get the current cursor position.
    ///
    /// The position is only meaningful when the buffer is not empty, in which case it's always in
    /// `[0, record_count())`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the record at the given index.
    ///
    /// Returns [`Error::OutOfBounds`] if the index is not in `[0, record_count())`.
    pub fn record(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or(Error::OutOfBounds { index })
    }

    /// Get the record at the cursor position.
    ///
    /// Returns [`Error::OutOfBounds`] if the buffer is empty.
    pub fn current(&self) -> Result<&Record> {
        self.record(self.position)
    }

    /// Advance the cursor by one record and return the record at the new position.
    ///
    /// The cursor clamps at the last record: advancing past the end returns the last record again.
    /// Returns [`Error::OutOfBounds`] if the buffer is empty.
    pub fn next_record(&mut self) -> Result<&Record> {
        if self.records.is_empty() {
            return Err(Error::OutOfBounds { index: 0 });
        }
        if self.position + 1 < self.records.len() {
            self.position += 1;
        }
        Ok(&self.records[self.position])
    }

    /// Move the cursor back by one record and return the record at the new position.
    ///
    /// The cursor clamps at the first record: moving back from 0 returns the first record again.
    /// Returns [`Error::OutOfBounds`] if the buffer is empty.
    pub fn previous_record(&mut self) -> Result<&Record> {
        if self.records.is_empty() {
            return Err(Error::OutOfBounds { index: 0 });
        }
        self.position = self.position.saturating_sub(1);
        Ok(&self.records[self.position])
    }

    /// Execute a statement and return its first record.
    ///
    /// Returns `Ok(None)` if the query returned no rows or if the execution reported failure.
    pub fn query_first_record<S: AsRef<str>>(
        &mut self,
        statement: S,
        parameters: Option<Parameters>,
    ) -> Result<Option<Record>> {
        if !self.execute(statement, parameters)? {
            return Ok(None);
        }
        Ok(self.records.first().cloned())
    }

    /// Execute a statement and return one named column of its first record.
    ///
    /// Returns `Ok(None)` if the query returned no rows or if the execution reported failure.
    pub fn query_first_value<S: AsRef<str>>(
        &mut self,
        statement: S,
        parameters: Option<Parameters>,
        column: &str,
    ) -> Result<Option<Value>> {
        match self.query_first_record(statement, parameters)? {
            Some(record) => Ok(Some(record.try_value(column)?.clone())),
            None => Ok(None),
        }
    }

    /// Close the underlying connection, discarding the buffered records.
    pub fn close(self) -> Result<()> {
        self.connection.close()
    }
}
