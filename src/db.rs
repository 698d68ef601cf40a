//! Database connection pool and its request guard.
use std::ops::Deref;

use rocket::http::Status;
use rocket::request::{self, FromRequest};
use rocket::{Request, State, Outcome};
use diesel::PgConnection;
use diesel::r2d2::{self, ConnectionManager, PoolError};

// An alias to connection pool of PostgreSQL
pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub struct DbConn(pub r2d2::PooledConnection<ConnectionManager<PgConnection>>);

impl DbConn {
    /// Checks a connection out of the pool.
    pub fn get(pool: &Pool) -> Result<DbConn, String> {
        pool.get().map(DbConn).map_err(|e| e.to_string())
    }
}

impl<'a, 'r> FromRequest<'a, 'r> for DbConn {
    type Error = String;

    fn from_request(
        request: &'a Request<'r>,
    ) -> request::Outcome<DbConn, String> {
        let pool = match request.guard::<State<Pool>>() {
            Outcome::Success(pool) => pool,
            _ => {
                return Outcome::Failure((
                    Status::InternalServerError,
                    "connection pool is not managed".to_string(),
                ))
            },
        };
        match DbConn::get(&pool) {
            Ok(conn) => Outcome::Success(conn),
            Err(e) => Outcome::Failure((Status::InternalServerError, e)),
        }
    }
}

impl Deref for DbConn {
    type Target = PgConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Initializes db connection pool
pub fn init_pool(database_url: &str, max_size: u32) -> Result<Pool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder().max_size(max_size).build(manager)
}

/// Initializes db connection pool without connecting to the database.
///
/// Connections are established on their first checkout.
pub fn init_lazy_pool(database_url: &str, max_size: u32) -> Pool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(max_size)
        .min_idle(Some(0))
        .build_unchecked(manager)
}
