use crate::Sqlite;
use crate::DRIVER_NAME;
use crate::IN_MEMORY_URI_PATH;
use recordset_core::driver::{DriverConnection, DriverFactory, Result};
use recordset_core::Error;

pub(crate) struct SqliteFactory {}

impl DriverFactory for SqliteFactory {
    fn schemes(&self) -> &'static [&'static str] {
        &[DRIVER_NAME]
    }

    fn open(&self, uri: &str) -> Result<Box<dyn DriverConnection>> {
        let parsed_uri = url::Url::parse(uri)
            .map_err(|e| Error::InvalidUri { uri: uri.to_string(), reason: e.to_string() })?;
        // SQLite is expecting to have some flags set when opening a database even if the `mode`
        // URI parameter will eventually override them.
        let mut flags = rusqlite::OpenFlags::SQLITE_OPEN_URI | rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE;
        let sqlite_uri = if parsed_uri.path() == IN_MEMORY_URI_PATH {
            // Rebuilt from the parsed components, the accepted spellings `sqlite:/:memory:` and
            // `sqlite:///:memory:` both normalize to the same in-memory database URI.
            match parsed_uri.query() {
                Some(query) => format!("file::memory:?{}", query),
                None => "file::memory:".to_string(),
            }
        } else {
            flags.insert(rusqlite::OpenFlags::SQLITE_OPEN_CREATE);
            let mut file_uri = uri.to_string();
            file_uri.replace_range(0.."sqlite:".len(), "file:");
            file_uri
        };
        let conn = rusqlite::Connection::open_with_flags(sqlite_uri, flags).map_err(crate::errors::driver_error)?;
        Ok(Box::new(Sqlite { conn }))
    }
}
