//! # Crate Topology
//!
//! The `recordset-drivers` project is implemented as multiple sub-crates, which are then re-exported
//! by this top-level crate.
//!
//! Crate authors can choose to depend on this top-level crate, or just
//! the sub-crates they need.
//!
//! The current list of sub-crates is:
//!
//! * [`recordset-core`][recordset_core] - the core traits and types
//! * [`recordset-blocking`][recordset_blocking] - the blocking `Connection` and `RecordSet` API
//! * [`recordset-sqlite`][recordset_sqlite] - the [SQLite](https://sqlite.org) driver
//! * [`recordset-mysql`][recordset_mysql] - the [MySQL](https://www.mysql.com) driver

pub use recordset_core::parameters::{Parameter, Parameters};
pub use recordset_core::record::Record;
pub use recordset_core::values::Value;
pub use recordset_core::Error;
pub use recordset_core::Result;

// Re-export the `params!` and `named_params!` macros.
pub use recordset_core::named_params;
pub use recordset_core::params;

#[cfg(feature = "blocking-conn")]
pub mod blocking {
    pub use recordset_blocking::Connection;
    pub use recordset_blocking::RecordSet;
    pub use recordset_blocking::Statement;
}

pub fn register_drivers() {
    #[cfg(feature = "sqlite")]
    recordset_sqlite::register_driver();
    #[cfg(feature = "mysql")]
    recordset_mysql::register_driver();
}

#[cfg(test)]
mod tests {
    use recordset_core::factory::Factory;

    #[test]
    fn test_register_drivers() {
        super::register_drivers();
        // the mock driver registers itself, the feature-gated drivers are compiled out here
        let conn = Factory::open("mock://").unwrap();
        assert_eq!(conn.driver_name(), "mock");
        assert!(conn.close().is_ok());
    }

    #[test]
    fn test_reexports() {
        assert_eq!(crate::Value::Int64(1).to_string(), "1");
        assert!(crate::params!(1, "a", true).is_some());
        assert!(crate::named_params! { "id" => 1 }.is_some());
    }
}
