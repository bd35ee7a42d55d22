use crate::errors::driver_error;
use crate::statement::MySqlStatement;
use crate::{MySql, DRIVER_NAME};
use mysql::prelude::Queryable;
use recordset_core::driver::{DriverConnection, DriverStatement, Result};

impl DriverConnection for MySql {
    fn driver_name(&self) -> &str {
        DRIVER_NAME
    }

    fn prepare<'c, 's>(&'c mut self, statement: &str) -> Result<Box<dyn DriverStatement + 's>>
    where
        'c: 's,
    {
        let inner = self.conn.prep(statement).map_err(driver_error)?;
        Ok(Box::new(MySqlStatement { conn: &mut self.conn, inner }))
    }

    fn close(self: Box<Self>) -> Result<()> {
        // dropping the connection closes the socket
        Ok(())
    }
}
