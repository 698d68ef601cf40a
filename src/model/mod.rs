//! Model entities.

pub mod registration;

use diesel::prelude::*;
use diesel::{ConnectionError, PgConnection};

use crate::config::Config;

pub fn establish_connection(
    config: &Config,
) -> Result<PgConnection, ConnectionError> {
    PgConnection::establish(&config.database_url)
}
