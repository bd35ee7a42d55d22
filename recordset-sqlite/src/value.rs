use recordset_core::parameters::Parameter;
use recordset_core::values::Value;
use rusqlite::types::{ToSqlOutput, Value as SqlValue, ValueRef};

/// Convert a SQLite value into a [`Value`].
pub(crate) fn value_from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Int64(v),
        ValueRef::Real(v) => Value::Float64(v),
        ValueRef::Text(v) => Value::String(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(v) => Value::Blob(v.to_vec()),
    }
}

/// An adapter to bind a [`Parameter`] through the `rusqlite::ToSql` machinery.
pub(crate) struct Adapter<'a>(pub(crate) &'a Parameter);

impl rusqlite::ToSql for Adapter<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        // Storage classes resolve in a fixed order: boolean, null, integer, float, then text.
        // SQLite has no boolean storage class, a boolean binds as the integers 0 and 1.
        Ok(match self.0 {
            Parameter::Bool(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Parameter::Null => ToSqlOutput::Owned(SqlValue::Null),
            Parameter::Int8(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Parameter::Int16(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Parameter::Int32(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Parameter::Int64(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            Parameter::UInt8(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Parameter::UInt16(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Parameter::UInt32(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Parameter::UInt64(v) => match i64::try_from(*v) {
                Ok(v) => ToSqlOutput::Owned(SqlValue::Integer(v)),
                Err(e) => return Err(rusqlite::Error::ToSqlConversionFailure(Box::new(e))),
            },
            Parameter::Float32(v) => ToSqlOutput::Owned(SqlValue::Real(*v as f64)),
            Parameter::Float64(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            Parameter::String(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ToSql;

    #[test]
    fn test_value_from_sql() {
        assert_eq!(value_from_sql(ValueRef::Null), Value::Null);
        assert_eq!(value_from_sql(ValueRef::Integer(42)), Value::Int64(42));
        assert_eq!(value_from_sql(ValueRef::Real(1.5)), Value::Float64(1.5));
        assert_eq!(value_from_sql(ValueRef::Text(b"hello")), Value::String("hello".to_string()));
        assert_eq!(value_from_sql(ValueRef::Blob(&[1, 2])), Value::Blob(vec![1, 2]));
    }

    #[test]
    fn test_adapter() {
        // a boolean binds as an integer but is classified before the integer check
        assert_eq!(Adapter(&Parameter::Bool(true)).to_sql().unwrap(), ToSqlOutput::Owned(SqlValue::Integer(1)));
        assert_eq!(Adapter(&Parameter::Null).to_sql().unwrap(), ToSqlOutput::Owned(SqlValue::Null));
        assert_eq!(Adapter(&Parameter::Int32(7)).to_sql().unwrap(), ToSqlOutput::Owned(SqlValue::Integer(7)));
        assert_eq!(
            Adapter(&Parameter::String("x".to_string())).to_sql().unwrap(),
            ToSqlOutput::Borrowed(ValueRef::Text(b"x"))
        );
        assert!(Adapter(&Parameter::UInt64(u64::MAX)).to_sql().is_err());
    }
}
