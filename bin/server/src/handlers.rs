//! HTTP request handlers

pub mod download;
pub mod error;
pub mod root;
pub mod upload;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

/// Register every route on an app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::root)
        .service(upload::upload)
        .service(download::download);
}

/// Build a `text/plain` response
pub(crate) fn plain_text(status: StatusCode, body: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(body.into())
}
