use rocket::Request;
use rocket::http::Status;

use crate::response::Response;

#[catch(400)]
pub fn bad_request(_req: &Request) -> Response {
    Response::failure(
        Status::BadRequest,
        "The request header/body is invalid",
    )
}

#[catch(404)]
pub fn not_found(req: &Request) -> Response {
    Response::failure(
        Status::NotFound,
        &format!("'{path}' is not found", path = req.uri().path()),
    )
}

#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> Response {
    Response::failure(Status::UnprocessableEntity, "The input is invalid")
}

#[catch(500)]
pub fn internal_server_error(_req: &Request) -> Response {
    Response::failure(Status::InternalServerError, "Internal server error")
}
