/// Build the positional parameters of a statement execution.
///
/// Expands to an `Option<Parameters>`: `params!()` is `None`, anything else is a
/// `Parameters::Positional` with one entry per expression.
#[macro_export]
macro_rules! params {
    () => {
        Option::<$crate::parameters::Parameters>::None
    };
    ($($param:expr),+ $(,)?) => {
        Some($crate::parameters::Parameters::Positional(vec![
            $($crate::parameters::Parameter::from($param)),+
        ]))
    };
}

/// Build the named parameters of a statement execution.
///
/// ```rust
/// use recordset_core::named_params;
/// use recordset_core::parameters::{Parameter, Parameters};
///
/// let parameters = named_params! { "id" => 1, "name" => "Alice" };
/// assert!(matches!(parameters, Some(Parameters::Named(_))));
/// ```
#[macro_export]
macro_rules! named_params {
    () => {
        Option::<$crate::parameters::Parameters>::None
    };
    ($($name:expr => $param:expr),+ $(,)?) => {
        Some($crate::parameters::Parameters::Named(vec![
            $(($name.to_string(), $crate::parameters::Parameter::from($param))),+
        ]))
    };
}
