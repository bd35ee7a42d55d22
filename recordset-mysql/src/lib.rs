use recordset_core::factory::Factory;

mod driver;
mod errors;
mod factory;
mod statement;
mod values;

/// The name of the driver for MySQL.
pub const DRIVER_NAME: &str = "mysql";

pub(crate) struct MySql {
    conn: mysql::Conn,
}

pub fn register_driver() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        Factory::register(Box::new(factory::MySqlFactory {}));
    });
}
