#![feature(proc_macro_hygiene, decl_macro)]

//! Event Registration API
//!
//! This is an API for the attendance registration form and its admin view.

#[macro_use]
extern crate accord;
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_contrib;
#[macro_use]
extern crate serde_derive;
#[macro_use(error, info, warn)]
extern crate slog;

#[cfg(test)]
extern crate parking_lot;
#[cfg(test)]
#[macro_use]
extern crate rusty_fork;

mod response;
mod schema;
mod validation;

pub mod client;
pub mod config;
pub mod db;
pub mod logger;
pub mod model;
pub mod request;
pub mod route;

use rocket::config::ConfigError;

use crate::config::Config;

// macros

#[macro_export]
macro_rules! hashmap(
    { $($key:expr => $value:expr),+ } => {
        {
            let mut m = ::std::collections::HashMap::new();
            $(m.insert($key, $value);)+
            m
        }
    };
);

#[macro_export]
macro_rules! fnvhashmap(
    { $($key:expr => $value:expr),+ } => {
        {
            let mut m = ::fnv::FnvHashMap::default();
            $(m.insert($key, $value);)+
            m
        }
    };
);

/// Builds the server from config.
///
/// The connection pool, the config and a logger fairing must still be
/// attached by the caller.
pub fn server(config: &Config) -> Result<rocket::Rocket, ConfigError> {
    let rocket_config = config.rocket_config()?;

    Ok(rocket::custom(rocket_config)
        .mount(
            "/",
            routes![
                route::health::check,
                route::registration::register,
                route::registration::registrations,
            ],
        )
        .register(catchers![
            route::error::bad_request,
            route::error::not_found,
            route::error::unprocessable_entity,
            route::error::internal_server_error,
        ]))
}
