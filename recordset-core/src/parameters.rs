/// A value to be bound to a placeholder of a prepared statement.
///
/// Drivers resolve the storage class of a parameter from its variant, checked in a fixed order:
/// boolean, null, integer, float, then text. The order matters for weakly-typed engines where a
/// boolean is stored as an integer: a `Bool` must keep its boolean storage class and never be
/// reclassified as an integer of the same value.
#[derive(PartialEq, Debug, Clone)]
pub enum Parameter {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
}

macro_rules! impl_from_for_parameter {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Parameter {
            fn from(value: $t) -> Self {
                Parameter::$variant(value.into())
            }
        }
    };
}

impl_from_for_parameter!(i8, Int8);
impl_from_for_parameter!(i16, Int16);
impl_from_for_parameter!(i32, Int32);
impl_from_for_parameter!(i64, Int64);
impl_from_for_parameter!(u8, UInt8);
impl_from_for_parameter!(u16, UInt16);
impl_from_for_parameter!(u32, UInt32);
impl_from_for_parameter!(u64, UInt64);
impl_from_for_parameter!(bool, Bool);
impl_from_for_parameter!(f32, Float32);
impl_from_for_parameter!(f64, Float64);
impl_from_for_parameter!(String, String);
impl_from_for_parameter!(&str, String);

/// `None` binds as the SQL `NULL` storage class.
impl<T: Into<Parameter>> From<Option<T>> for Parameter {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Parameter::Null,
        }
    }
}

pub trait ToParameter {
    fn to_parameter(&self) -> Parameter;
}

impl<T> ToParameter for T
where
    T: Into<Parameter> + Clone,
{
    fn to_parameter(&self) -> Parameter {
        self.clone().into()
    }
}

/// The parameters bound to a statement execution.
pub enum Parameters {
    /// Parameters bound by position, matching `?` placeholders in order.
    Positional(Vec<Parameter>),

    /// Parameters bound by placeholder name.
    Named(Vec<(String, Parameter)>),
}

impl Parameters {
    pub fn from_slice(values: &[&dyn ToParameter]) -> Self {
        Parameters::Positional(values.iter().map(|v| v.to_parameter()).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Parameters::Positional(values) => values.len(),
            Parameters::Named(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Parameter> {
        match self {
            Parameters::Positional(values) => values.get(index),
            Parameters::Named(values) => values.get(index).map(|(_, value)| value),
        }
    }
}

impl From<&[&dyn ToParameter]> for Parameters {
    fn from(values: &[&dyn ToParameter]) -> Self {
        Parameters::from_slice(values)
    }
}
