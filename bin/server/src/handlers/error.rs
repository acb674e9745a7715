use tracing::error;

/// Helper function for bad request errors
pub fn handle_error<E: std::fmt::Display>(msg: &str, e: E) -> actix_web::Error {
    error!("{}: {}", msg, e);
    actix_web::error::ErrorBadRequest(format!("{}.\n", msg))
}

/// Helper function for server errors.
/// The cause is logged but never sent to the client.
pub fn handle_server_error<E: std::fmt::Display>(
    msg: &str,
    body: &'static str,
    e: E,
) -> actix_web::Error {
    error!("{}: {}", msg, e);
    actix_web::error::ErrorInternalServerError(body)
}
