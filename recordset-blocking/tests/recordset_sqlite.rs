use ctor::ctor;
use recordset_blocking::{Connection, RecordSet};
use recordset_core::values::Value;
use recordset_core::{params, Error};

#[ctor]
fn before_all() {
    recordset_sqlite::register_driver();
}

fn employees() -> RecordSet {
    let mut rs = RecordSet::open(recordset_sqlite::IN_MEMORY_URI).unwrap();
    assert!(rs
        .execute("CREATE TABLE employee (id INTEGER PRIMARY KEY, name TEXT NOT NULL, manager_id INTEGER)", None)
        .unwrap());
    assert!(rs.execute("INSERT INTO employee VALUES (1, 'alice', NULL)", None).unwrap());
    assert!(rs.execute("INSERT INTO employee VALUES (2, 'bob', 1)", None).unwrap());
    assert!(rs.execute("INSERT INTO employee VALUES (3, 'carol', 1)", None).unwrap());
    rs
}

#[test]
fn test_buffering_and_indexed_access() {
    let mut rs = employees();
    assert!(rs.execute("SELECT id, name FROM employee ORDER BY id", None).unwrap());
    assert_eq!(rs.record_count(), 3);
    assert_eq!(rs.record(0).unwrap().get::<_, String>("name"), "alice");
    assert_eq!(rs.record(1).unwrap().get::<_, String>("name"), "bob");
    assert_eq!(rs.record(2).unwrap().get::<_, i64>("id"), 3);
    assert!(matches!(rs.record(3), Err(Error::OutOfBounds { index: 3 })));
    rs.close().unwrap();
}

#[test]
fn test_cursor_walk() {
    let mut rs = employees();
    assert!(rs.execute("SELECT name FROM employee ORDER BY id", None).unwrap());
    assert_eq!(rs.current().unwrap().get::<_, String>(0), "alice");
    assert_eq!(rs.next_record().unwrap().get::<_, String>(0), "bob");
    assert_eq!(rs.next_record().unwrap().get::<_, String>(0), "carol");
    // the cursor clamps at the last record
    assert_eq!(rs.next_record().unwrap().get::<_, String>(0), "carol");
    assert_eq!(rs.position(), 2);
    assert_eq!(rs.previous_record().unwrap().get::<_, String>(0), "bob");
    assert_eq!(rs.previous_record().unwrap().get::<_, String>(0), "alice");
    // and at the first
    assert_eq!(rs.previous_record().unwrap().get::<_, String>(0), "alice");
    assert_eq!(rs.position(), 0);
}

#[test]
fn test_buffer_replacement_resets_position() {
    let mut rs = employees();
    assert!(rs.execute("SELECT id FROM employee ORDER BY id", None).unwrap());
    rs.next_record().unwrap();
    rs.next_record().unwrap();
    assert_eq!(rs.position(), 2);
    assert!(rs.execute("SELECT id FROM employee WHERE manager_id = ?", params!(1)).unwrap());
    assert_eq!(rs.record_count(), 2);
    assert_eq!(rs.position(), 0);
    // DML leaves an empty, consistent buffer
    assert!(rs.execute("UPDATE employee SET manager_id = 2 WHERE id = 3", None).unwrap());
    assert_eq!(rs.record_count(), 0);
    assert!(matches!(rs.current(), Err(Error::OutOfBounds { .. })));
}

#[test]
fn test_parameter_types_survive_round_trip() {
    let mut rs = RecordSet::open(recordset_sqlite::IN_MEMORY_URI).unwrap();
    assert!(rs.execute("CREATE TABLE probe (b BOOLEAN, i INTEGER, f REAL, s TEXT, n INTEGER)", None).unwrap());
    assert!(rs
        .execute("INSERT INTO probe VALUES (?, ?, ?, ?, ?)", params!(true, 42, 1.5, "forty-two", None::<i64>))
        .unwrap());
    assert!(rs.execute("SELECT b, i, f, s, n FROM probe", None).unwrap());
    let record = rs.current().unwrap();
    // a boolean binds as a boolean, not as the integer it is stored as
    assert!(record.get::<_, bool>("b"));
    assert_eq!(record.get::<_, i64>("i"), 42);
    assert_eq!(record.get::<_, f64>("f"), 1.5);
    assert_eq!(record.get::<_, String>("s"), "forty-two");
    assert!(record.is_null("n"));
    assert_eq!(record.get_nullable::<_, i64>("n"), None);
}

#[test]
fn test_execute_reports_constraint_failure() {
    let mut rs = employees();
    // a duplicate key is an execution failure, not a fault
    assert!(!rs.execute("INSERT INTO employee VALUES (1, 'dan', NULL)", None).unwrap());
    assert_eq!(rs.record_count(), 0);
    assert_eq!(rs.position(), 0);
    // the connection survives and the table is untouched
    assert_eq!(
        rs.query_first_value("SELECT COUNT(*) AS count FROM employee", None, "count").unwrap(),
        Some(Value::Int64(3))
    );
    // malformed SQL is a fault and propagates
    assert!(rs.execute("SELEKT 1", None).is_err());
}

#[test]
fn test_query_first_conveniences() {
    let mut rs = employees();
    let record = rs
        .query_first_record("SELECT id, name FROM employee WHERE id = ?", params!(2))
        .unwrap()
        .unwrap();
    assert_eq!(record.get::<_, String>("name"), "bob");
    assert!(rs.query_first_record("SELECT id FROM employee WHERE id = 99", None).unwrap().is_none());
    assert_eq!(
        rs.query_first_value("SELECT name FROM employee WHERE id = 3", None, "name").unwrap(),
        Some(Value::String("carol".to_string()))
    );
    assert_eq!(rs.query_first_value("SELECT name FROM employee WHERE id = 99", None, "name").unwrap(), None);
}

#[test]
fn test_file_backed_database() {
    let dir = tempfile::tempdir().unwrap();
    let uri = format!("sqlite://{}/test.db?mode=rwc", dir.path().to_str().unwrap());
    let mut rs = RecordSet::new(Connection::open(&uri).unwrap());
    assert!(rs.execute("CREATE TABLE t (x INTEGER)", None).unwrap());
    assert!(rs.execute("INSERT INTO t VALUES (7)", None).unwrap());
    rs.close().unwrap();

    let mut rs = RecordSet::open(&uri).unwrap();
    assert_eq!(rs.query_first_value("SELECT x FROM t", None, "x").unwrap(), Some(Value::Int64(7)));
}
