use crate::handlers::plain_text;
use crate::state::AppState;
use actix_web::{get, http::StatusCode, web, HttpResponse};
use tracing::info;

/// Usage text pointing at this server's public URL
#[get("/")]
pub async fn root(state: web::Data<AppState>) -> HttpResponse {
    info!("GET / - Replying with usage");

    plain_text(StatusCode::OK, usage(&state.settings.public_base_url()))
}

fn usage(base_url: &str) -> String {
    format!("Use `curl -T <file> {}` to upload files.\n", base_url)
}
