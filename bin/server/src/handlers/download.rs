use crate::constants::NOT_FOUND_MESSAGE;
use crate::handlers::plain_text;
use crate::state::AppState;
use actix_web::http::header::ContentType;
use actix_web::{get, http::StatusCode, web, HttpResponse};
use depot::StorageError;
use tracing::{error, info, warn};

/// Handle file download.
///
/// Every failure, including downloads being disabled, produces the same 404
/// so clients learn nothing about which tokens exist or how the server is
/// configured. The distinct causes only show up in the logs.
#[get("/{token}")]
pub async fn download(token: web::Path<String>, state: web::Data<AppState>) -> HttpResponse {
    let token = token.into_inner();

    info!(token = %token, "GET /:token - Request received");

    if !state.settings.allow_download {
        info!(token = %token, "GET /:token - Downloads are disabled");
        return not_found();
    }

    match state.storage.read(&token).await {
        Ok(content) => {
            info!(token = %token, bytes = content.len(), "GET /:token - Sending file");
            HttpResponse::Ok()
                .content_type(ContentType::octet_stream())
                .body(content)
        }
        Err(StorageError::NotFound(_)) => {
            warn!(token = %token, "GET /:token - Unknown token requested");
            not_found()
        }
        Err(StorageError::InvalidToken(e)) => {
            warn!(token = %token, error = %e, "GET /:token - Malformed token requested");
            not_found()
        }
        Err(e) => {
            error!(token = %token, error = %e, "GET /:token - Failed to read depot entry");
            not_found()
        }
    }
}

fn not_found() -> HttpResponse {
    plain_text(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}
