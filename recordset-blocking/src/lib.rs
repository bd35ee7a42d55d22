#![forbid(unsafe_code)]

pub mod connection;
pub mod recordset;
pub mod statement;

pub use connection::Connection;
pub use recordset::RecordSet;
pub use statement::Statement;

#[cfg(test)]
mod blocking_tests {
    use crate::connection::Connection;
    use recordset_core::error::Error;

    #[test]
    fn test_query_records() {
        let mut conn = Connection::open("mock://").unwrap();
        let mut stmt = conn.prepare("SELECT 2").unwrap();
        let mut records = stmt.query_records(None).unwrap();
        assert_eq!(records.next().unwrap().unwrap().get::<_, i32>(0), 1);
        let record = records.next().unwrap().unwrap();
        assert!(!record.is_null(0));
        assert_eq!(record.get::<&str, i32>("id"), 2);
        assert_eq!(record.get::<&str, String>("username"), "user2");
        assert!(records.next().is_none());
    }

    #[test]
    fn test_try_get() {
        let mut conn = Connection::open("mock://").unwrap();
        let record = conn.query_record("SELECT 1", None).unwrap().unwrap();
        assert_eq!(record.try_get::<_, i32>(0).unwrap(), 1);
        assert!(matches!(record.try_get::<_, i64>(1), Err(Error::InvalidType { expected: _, actual: _ })));
        assert!(matches!(record.try_get::<_, i32>(7), Err(Error::OutOfBounds { index: _ })));
    }
}
