use crate::values::Value;
use crate::{Error, Result};

/// A trait to decode a [`Value`] into a Rust type.
pub trait Decode: Sized {
    /// Decode the value.
    ///
    /// # Panics
    /// Panics if the value cannot be decoded into the expected type.
    fn decode(value: &Value) -> Self;

    fn try_decode(value: &Value) -> Result<Self>;
}

fn invalid_type(expected: &str, value: &Value) -> Error {
    Error::InvalidType { expected: expected.to_string(), actual: value.type_name().to_string() }
}

macro_rules! impl_decode_integer {
    ($t:ty) => {
        impl Decode for $t {
            fn decode(value: &Value) -> Self {
                match Self::try_decode(value) {
                    Ok(value) => value,
                    Err(e) => panic!("{}", e),
                }
            }

            fn try_decode(value: &Value) -> Result<Self> {
                match value {
                    Value::Int64(v) => <$t>::try_from(*v).map_err(|_| invalid_type(stringify!($t), value)),
                    _ => Err(invalid_type(stringify!($t), value)),
                }
            }
        }
    };
}

impl_decode_integer!(i8);
impl_decode_integer!(i16);
impl_decode_integer!(i32);
impl_decode_integer!(i64);
impl_decode_integer!(u8);
impl_decode_integer!(u16);
impl_decode_integer!(u32);
impl_decode_integer!(u64);

/// Decoding a boolean from a [`Value`].
///
/// This implementation will decode a boolean from either a `Bool` or an `Int64` value in order to
/// support databases that store booleans as integers such as SQLite.
impl Decode for bool {
    fn decode(value: &Value) -> Self {
        match Self::try_decode(value) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    fn try_decode(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(*v),
            Value::Int64(v) => Ok(*v != 0),
            _ => Err(invalid_type("bool", value)),
        }
    }
}

impl Decode for f64 {
    fn decode(value: &Value) -> Self {
        match Self::try_decode(value) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    fn try_decode(value: &Value) -> Result<Self> {
        match value {
            Value::Float64(v) => Ok(*v),
            Value::Int64(v) => Ok(*v as f64),
            _ => Err(invalid_type("f64", value)),
        }
    }
}

impl Decode for f32 {
    fn decode(value: &Value) -> Self {
        match Self::try_decode(value) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    fn try_decode(value: &Value) -> Result<Self> {
        f64::try_decode(value).map(|v| v as f32)
    }
}

impl Decode for String {
    fn decode(value: &Value) -> Self {
        match Self::try_decode(value) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    fn try_decode(value: &Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v.clone()),
            _ => Err(invalid_type("String", value)),
        }
    }
}

impl Decode for Vec<u8> {
    fn decode(value: &Value) -> Self {
        match Self::try_decode(value) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    fn try_decode(value: &Value) -> Result<Self> {
        match value {
            Value::Blob(v) => Ok(v.clone()),
            _ => Err(invalid_type("Vec<u8>", value)),
        }
    }
}
