use std::fmt;

/// A scalar value materialized from a result row.
///
/// Drivers normalize the types of the underlying engine to this enum: every integer family is
/// widened to `Int64` and every floating point family to `Float64`. Engines that have no native
/// boolean storage (SQLite stores booleans as integers) will report `Int64` for boolean columns,
/// which is why {{crate::decode::Decode}} for `bool` also accepts `Int64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The name of the variant, used to build {{crate::error::Error::InvalidType}} messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int64(_) => "Int64",
            Value::Float64(_) => "Float64",
            Value::String(_) => "String",
            Value::Blob(_) => "Blob",
        }
    }
}

macro_rules! impl_from_for_value {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::$variant(value.into())
            }
        }
    };
}

impl_from_for_value!(bool, Bool);
impl_from_for_value!(i8, Int64);
impl_from_for_value!(i16, Int64);
impl_from_for_value!(i32, Int64);
impl_from_for_value!(i64, Int64);
impl_from_for_value!(f32, Float64);
impl_from_for_value!(f64, Float64);
impl_from_for_value!(String, String);
impl_from_for_value!(&str, String);
impl_from_for_value!(Vec<u8>, Blob);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int64(value) => write!(f, "{}", value),
            Value::Float64(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{}", value),
            Value::Blob(value) => write!(f, "<{} bytes>", value.len()),
        }
    }
}
