use recordset_core::error::Error;

// MySQL server error codes, see https://dev.mysql.com/doc/mysql-errors/8.0/en/server-error-reference.html
const ER_DISK_FULL: u16 = 1021;
const ER_DUP_KEY: u16 = 1022;
const ER_OUT_OF_RESOURCES: u16 = 1041;
const ER_DUP_ENTRY: u16 = 1062;
const ER_NO_REFERENCED_ROW: u16 = 1216;
const ER_ROW_IS_REFERENCED: u16 = 1217;

/// Convert a `mysql::Error` into a `recordset_core::error::Error`.
pub(crate) fn driver_error(mysql_error: mysql::Error) -> Error {
    let server_code = match &mysql_error {
        mysql::Error::MySqlError(server_error) => Some(server_error.code),
        _ => None,
    };
    match server_code {
        Some(ER_DUP_KEY | ER_DUP_ENTRY | ER_NO_REFERENCED_ROW | ER_ROW_IS_REFERENCED) => {
            Error::ConstraintViolation { error: Box::new(mysql_error) }
        }
        Some(ER_DISK_FULL) => Error::StorageFull { error: Box::new(mysql_error) },
        Some(ER_OUT_OF_RESOURCES) => Error::OutOfMemory { error: Box::new(mysql_error) },
        _ => Error::DriverError { error: Box::new(mysql_error) },
    }
}
