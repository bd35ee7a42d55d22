use crate::driver::MockDriverConnection;
use crate::driver::MockDriverFactory;
use crate::driver::MockDriverStatement;
use crate::driver::Result;
use crate::record::Record;
use crate::values::Value;
use crate::Error;
use ctor::ctor;
use std::sync::Arc;

/// A factory for mocking a {{DriverConnection}}.
///
/// The mock driver is registered under the `mock` scheme and recognizes a tiny statement grammar:
///
/// ```rust,ignore
/// use recordset_blocking::Connection;
///
/// // This should return a mock connection
/// let mut conn = Connection::open("mock://").unwrap();
///
/// // Opening a connection with the URI "mock://?error" should return an error
/// assert!(Connection::open("mock://?error").is_err());
///
/// // Calling `prepare` should return a mock statement unless the statement is "XINSERT"
/// assert!(conn.prepare("XINSERT").is_err());
/// assert!(conn.prepare("SELECT 1").is_ok());
///
/// // Calling `execute` should return an error if the statement starts with "SELECT"
/// let mut stmt = conn.prepare("INSERT").unwrap();
/// assert!(stmt.execute(None).is_ok());
///
/// // Calling `query` with "SELECT n" returns n records, "SELECT 0" an empty iterator and
/// // "SELECT -1" an iterator that fails at the first iteration. A DML statement yields an empty
/// // iterator unless it contains "conflict", in which case it reports a constraint violation.
/// ```
impl MockDriverFactory {
    pub fn register_with_default(schemes: &'static [&'static str]) {
        let mut mock_factory = MockDriverFactory::default();
        mock_factory.expect_open().returning(|uri| match uri.contains("?error") {
            false => Ok(Box::new(MockDriverConnection::with_default())),
            true => Err("Invalid URI".into()),
        });
        mock_factory.register(schemes);
    }

    pub fn register(mut self, schemes: &'static [&'static str]) {
        self.expect_schemes().returning(move || schemes);
        crate::factory::Factory::register(Box::new(self));
    }
}

fn check_parameter_count(statement: &str, parameters: &Option<crate::parameters::Parameters>) -> Result<()> {
    if let Some(parameters) = parameters {
        if statement.matches('?').count() != parameters.len() {
            return Err("Invalid parameter count".into());
        }
    }
    Ok(())
}

fn mock_records(count: i64) -> Vec<Result<Record>> {
    let columns = Arc::new(vec!["id".to_string(), "username".to_string()]);
    (1..=count)
        .map(|n| Ok(Record::new(columns.clone(), vec![Value::Int64(n), Value::String(format!("user{}", n))])))
        .collect()
}

impl MockDriverStatement {
    pub fn with_default(stmt: String) -> MockDriverStatement {
        let query_stmt = stmt.clone();
        let execute_stmt = stmt.clone();
        let mut mock_statement = MockDriverStatement::new();
        mock_statement.expect_execute().returning(move |parameters| match execute_stmt.starts_with("SELECT ") {
            false => {
                check_parameter_count(&execute_stmt, &parameters)?;
                if execute_stmt.contains("conflict") {
                    return Err(Box::new(Error::ConstraintViolation { error: "duplicate key".into() }));
                }
                Ok(1)
            }
            true => Err("Invalid statement".into()),
        });
        mock_statement.expect_query().returning(move |parameters| {
            check_parameter_count(&query_stmt, &parameters)?;
            match regex::Regex::new(r"^SELECT\s+(-?[0-9]+)").unwrap().captures(query_stmt.as_str()) {
                Some(captures) => {
                    let count = captures.get(1).unwrap().as_str().parse::<i64>().unwrap();
                    match count {
                        _ if count < 0 => {
                            // Fails at the first iteration
                            Ok(Box::new(std::iter::once(Err("Invalid count".into()) as Result<Record>)))
                        }
                        0 => {
                            // No records
                            Ok(Box::new(std::iter::empty()))
                        }
                        _ => Ok(Box::new(mock_records(count).into_iter())),
                    }
                }
                None => {
                    if query_stmt.contains("conflict") {
                        Err(Box::new(Error::ConstraintViolation { error: "duplicate key".into() }))
                    } else if ["INSERT", "UPDATE", "DELETE", "CREATE"].iter().any(|kw| query_stmt.starts_with(kw)) {
                        // DML routed through the query path yields no records
                        Ok(Box::new(std::iter::empty()))
                    } else {
                        Err(format!("Invalid statement: {}", query_stmt).into())
                    }
                }
            }
        });
        mock_statement
    }
}

impl MockDriverConnection {
    pub fn with_default() -> MockDriverConnection {
        let mut mock_connection = MockDriverConnection::default();
        mock_connection.expect_driver_name().return_const("mock".to_string());
        mock_connection.expect_close().returning(|| Ok(()));
        mock_connection.expect_prepare().returning(|stmt| match stmt {
            "XINSERT" => Err("Invalid statement".into()),
            _ => Ok(Box::new(MockDriverStatement::with_default(stmt.to_string()))),
        });
        mock_connection
    }
}

pub fn register_driver() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        MockDriverFactory::register_with_default(&["mock"]);
    });
}

#[ctor]
fn init() {
    register_driver();
}
