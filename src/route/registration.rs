use chrono::Utc;
use rocket::State;
use rocket::http::Status;
use rocket_contrib::json::{Json, JsonError};
use rocket_slog::SyncLogger;

use crate::config::Config;
use crate::db::{DbConn, Pool};
use crate::model::registration::Registration;
use crate::request::registration::Registration as RequestData;
use crate::response::Response;
use crate::validation::registration::Validator;

// Save a new registration.
//
// ```json
// {
//    "full_name": "Oswald",
//    "phone_number": "081234567890",
//    "attendance_date": "2026-10-19"
// }
// ```
//
// A body which can't be read as a JSON object (another content type, an
// array, duplicate keys, ...) is treated as an empty submission.
//
// A connection is checked out only after the submission has passed
// validation.
#[post("/register", data = "<data>")]
pub fn register(
    data: Result<Json<RequestData>, JsonError>,
    pool: State<Pool>,
    logger: SyncLogger,
    config: State<Config>,
) -> Response
{
    let res: Response = Default::default();

    let data = data.unwrap_or_else(|e| {
        match e {
            JsonError::Io(e) => warn!(logger, "unreadable body: {}", e),
            JsonError::Parse(_, e) => warn!(logger, "unreadable body: {}", e),
        }
        Json(RequestData::default())
    });

    let mut v = Validator::new(&data);
    if config.strict_attendance_date {
        v = v.not_before(Utc::now().naive_utc().date());
    }

    let r = match v.validate() {
        Err(rejection) => {
            warn!(logger, "rejected: {}", rejection.message);
            return res.status(Status::BadRequest).format(json!({
                "success": false,
                "message": rejection.message,
                "errors": rejection.errors,
            }));
        },
        Ok(r) => r,
    };

    let result = DbConn::get(&pool).and_then(|conn| {
        Registration::insert(&r, &conn, &logger).map_err(|e| e.to_string())
    });
    match result {
        Ok(registration) => {
            info!(logger, "registered: {}", registration);
            res.format(json!({
                "success": true,
                "message": "Registration successful",
                "data": registration,
            }))
        },
        Err(e) => {
            error!(logger, "err: {}", e);
            res.status(Status::InternalServerError).format(json!({
                "success": false,
                "message": "Registration failed",
                "error": e,
            }))
        },
    }
}

/// Lists all registrations, the newest first.
#[get("/registrations")]
pub fn registrations(
    conn: Result<DbConn, String>,
    logger: SyncLogger,
) -> Response
{
    let res: Response = Default::default();

    let result = conn.and_then(|conn| {
        Registration::recent(&conn, &logger).map_err(|e| e.to_string())
    });
    match result {
        Ok(registrations) => {
            info!(logger, "registrations: {}", registrations.len());
            res.format(json!({
                "success": true,
                "data": registrations,
            }))
        },
        Err(e) => {
            error!(logger, "err: {}", e);
            res.status(Status::InternalServerError).format(json!({
                "success": false,
                "message": "Failed to fetch registrations",
                "error": e,
            }))
        },
    }
}
