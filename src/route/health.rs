use rocket_slog::SyncLogger;

use crate::response::Response;

/// Returns just OK status. The database is not consulted.
#[get("/health")]
pub fn check(logger: SyncLogger) -> Response {
    info!(logger, "health");
    let res: Response = Default::default();
    res.format(json!({"status": "ok"}))
}
