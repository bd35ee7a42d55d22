use recordset_core::driver::Result;
use recordset_core::parameters::Parameter;
use recordset_core::values::Value;
use recordset_core::Error;

/// Convert a wire value into a [`Value`].
///
/// MySQL reports text columns as raw bytes, they are decoded as UTF-8 and kept as a blob when the
/// decoding fails. Temporal values have no counterpart in [`Value`] and are rendered as text.
pub(crate) fn value_from_sql(value: mysql::Value) -> Result<Value> {
    match value {
        mysql::Value::NULL => Ok(Value::Null),
        mysql::Value::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(text) => Ok(Value::String(text)),
            Err(e) => Ok(Value::Blob(e.into_bytes())),
        },
        mysql::Value::Int(v) => Ok(Value::Int64(v)),
        mysql::Value::UInt(v) => match i64::try_from(v) {
            Ok(v) => Ok(Value::Int64(v)),
            Err(_) => Err(Error::InvalidType { expected: "Int64".to_string(), actual: "UInt64".to_string() }.into()),
        },
        mysql::Value::Float(v) => Ok(Value::Float64(v.into())),
        mysql::Value::Double(v) => Ok(Value::Float64(v)),
        mysql::Value::Date(year, month, day, hour, minute, second, micros) => Ok(Value::String(format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
            year, month, day, hour, minute, second, micros
        ))),
        mysql::Value::Time(negative, days, hours, minutes, seconds, micros) => Ok(Value::String(format!(
            "{}{:02}:{:02}:{:02}.{:06}",
            if negative { "-" } else { "" },
            u32::from(days) * 24 + u32::from(hours),
            minutes,
            seconds,
            micros
        ))),
    }
}

/// Convert a [`Parameter`] into a wire value.
///
/// Storage classes resolve in a fixed order: boolean, null, integer, float, then text. MySQL
/// treats `BOOLEAN` as `TINYINT(1)`, a boolean binds as the integers 0 and 1.
pub(crate) fn value_to_sql(parameter: &Parameter) -> mysql::Value {
    match parameter {
        Parameter::Bool(v) => mysql::Value::Int(*v as i64),
        Parameter::Null => mysql::Value::NULL,
        Parameter::Int8(v) => mysql::Value::Int(*v as i64),
        Parameter::Int16(v) => mysql::Value::Int(*v as i64),
        Parameter::Int32(v) => mysql::Value::Int(*v as i64),
        Parameter::Int64(v) => mysql::Value::Int(*v),
        Parameter::UInt8(v) => mysql::Value::Int(*v as i64),
        Parameter::UInt16(v) => mysql::Value::Int(*v as i64),
        Parameter::UInt32(v) => mysql::Value::Int(*v as i64),
        Parameter::UInt64(v) => mysql::Value::UInt(*v),
        Parameter::Float32(v) => mysql::Value::Float(*v),
        Parameter::Float64(v) => mysql::Value::Double(*v),
        Parameter::String(v) => mysql::Value::Bytes(v.clone().into_bytes()),
    }
}
