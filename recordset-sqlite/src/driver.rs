use crate::errors::driver_error;
use crate::statement::SqliteStatement;
use crate::{Sqlite, DRIVER_NAME};
use recordset_core::driver::{DriverConnection, DriverStatement, Result};

impl DriverConnection for Sqlite {
    fn driver_name(&self) -> &str {
        DRIVER_NAME
    }

    fn prepare<'c, 's>(&'c mut self, statement: &str) -> Result<Box<dyn DriverStatement + 's>>
    where
        'c: 's,
    {
        let inner = self.conn.prepare(statement).map_err(driver_error)?;
        Ok(Box::new(SqliteStatement { inner }))
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.conn.close().map_err(|(_conn, e)| driver_error(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::IN_MEMORY_URI;
    use ctor::ctor;
    use path_slash::PathExt;
    use recordset_core::factory::Factory;

    #[ctor]
    fn before_all() {
        crate::register_driver();
    }

    #[test]
    fn test_open_memory() {
        let conn = Factory::open(IN_MEMORY_URI).unwrap();
        assert_eq!(conn.driver_name(), "sqlite");
        assert!(conn.close().is_ok());
    }

    #[test]
    fn test_open_memory_short_form() {
        // `sqlite:/:memory:` parses to the in-memory path too, it must open and never panic
        let conn = Factory::open("sqlite:/:memory:").unwrap();
        assert_eq!(conn.driver_name(), "sqlite");
        assert!(conn.close().is_ok());
        // the query string of the URI is preserved
        assert!(Factory::open("sqlite:///:memory:?cache=shared").is_ok());
    }

    #[test]
    fn test_open_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("test.db");

        // trying to open a file that does not exist in read-only should fail
        assert!(Factory::open(&format!("sqlite://{}?mode=ro", file_path.to_slash_lossy())).is_err());
        // trying to open a file that does not exist in read-write should create it
        assert!(Factory::open(&format!("sqlite://{}", file_path.to_slash_lossy())).is_ok());
    }

    #[test]
    fn test_open_invalid_uri() {
        assert!(Factory::open("sqlite://localhost:999999/test.db").is_err());
    }
}
