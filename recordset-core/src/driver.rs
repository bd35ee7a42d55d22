use crate::parameters::Parameters;
use crate::record::Record;

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

/// The error type that the drivers will use to return errors.
///
/// It's a pass-through error type that the drivers will use to return errors. Because each driver may have to deal with
/// specific error types coming from the underlying crate used to interact with the database, the drivers will have to
/// convert those errors to this error type.
///
/// It doesn't prevent the drivers from using {{crate::error::Error}} when appropriate but it should be converted into
/// this error type using {{crate::error::Error::into}}.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait DriverConnection {
    /// Get the name of the driver.
    ///
    /// The name of the driver should be one of the schemes used to register the driver with the factory but it's not
    /// enforced. This name if mostly intended for logging and debugging purposes.
    fn driver_name(&self) -> &str;

    /// Prepare a statement for execution.
    ///
    /// If the statement uses parameters, the statement should be prepared with placeholders for the parameters. The
    /// placeholders themselves are depending on the driver implementation. For example, the placeholders could be
    /// `?` or `:name` when using SQLite and MySQL.
    fn prepare<'c, 's>(&'c mut self, statement: &str) -> Result<Box<dyn DriverStatement + 's>>
    where
        'c: 's;

    /// Close the connection.
    fn close(self: Box<Self>) -> Result<()>;
}

/// A prepared statement ready to be executed.
///
/// A prepared statement can be executed multiple times with different parameters.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait DriverStatement {
    /// Execute the statement.
    ///
    /// Returns the number of rows affected by the statement.
    /// Executing a statement that starts with "SELECT" may return an error depending on the driver implementation.
    fn execute(&mut self, parameters: Option<Parameters>) -> Result<u64>;

    /// Execute a statement returning rows.
    ///
    /// Returns an iterator over the records returned by the statement. A statement that returns no
    /// rows (e.g. an `INSERT` on engines that accept it through this call) yields an empty iterator.
    fn query<'s>(&'s mut self, parameters: Option<Parameters>)
        -> Result<Box<dyn Iterator<Item = Result<Record>> + 's>>;
}

#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait DriverFactory: Sync + Send {
    /// Get the schemes associated with the driver.
    fn schemes(&self) -> &'static [&'static str];
    fn open(&self, uri: &str) -> Result<Box<dyn DriverConnection>>;
}
