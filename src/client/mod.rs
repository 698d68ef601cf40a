//! Client side counterparts of the API.
//!
//! `form` prepares a submission for `POST /register`, `admin` turns the body
//! of `GET /registrations` into table rows.

pub mod admin;
pub mod form;
