use crate::constants::{
    MAX_TOKEN_ATTEMPTS, STORE_FAILED_MESSAGE, TOO_LARGE_MESSAGE, UPLOAD_PROHIBITED_MESSAGE,
};
use crate::handlers::error::{handle_error, handle_server_error};
use crate::handlers::plain_text;
use crate::state::AppState;
use actix_web::{http::StatusCode, put, web, HttpResponse, Result as ActixResult};
use depot::{Storage, StorageError};
use std::borrow::Cow;
use tracing::{info, warn};

/// Handle file upload (raw request body, e.g. `curl -T`).
///
/// `name` is only echoed back in the retrieval command; the file is stored
/// under a freshly generated token.
#[put("/{name}")]
pub async fn upload(
    name: web::Path<String>,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let name = name.into_inner();
    let settings = &state.settings;

    info!(name = ?name, "PUT /:name - Request received");

    // Checked before touching the payload so a disabled server never reads it
    if !settings.allow_upload {
        warn!(name = ?name, "PUT /:name - Uploads are disabled");
        return Ok(plain_text(StatusCode::FORBIDDEN, UPLOAD_PROHIBITED_MESSAGE));
    }

    let content = match payload.to_bytes_limited(settings.size_limit).await {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => return Err(handle_error("Failed to read request body", e)),
        Err(_) => {
            warn!(
                name = ?name,
                limit = settings.size_limit,
                "PUT /:name - Upload exceeds size limit"
            );
            return Ok(plain_text(StatusCode::PAYLOAD_TOO_LARGE, TOO_LARGE_MESSAGE));
        }
    };

    let token = store_with_fresh_token(state.storage.as_ref(), &content, common::generate)
        .await
        .map_err(|e| handle_server_error("Failed to store file", STORE_FAILED_MESSAGE, e))?;

    info!(
        name = ?name,
        token = %token,
        bytes = content.len(),
        "PUT /:name - File stored"
    );

    let reply = if settings.allow_download {
        format!(
            "curl {} >{}\n",
            settings.download_url(&token),
            shell_quote(&name)
        )
    } else {
        format!("{}\n", token)
    };

    Ok(plain_text(StatusCode::OK, reply))
}

/// Store `content` under a new token, drawing another one from `next_token`
/// whenever the previous one is already taken.
async fn store_with_fresh_token(
    storage: &dyn Storage,
    content: &[u8],
    mut next_token: impl FnMut() -> String,
) -> Result<String, StorageError> {
    let mut attempt = 1;
    loop {
        let token = next_token();
        match storage.store(&token, content).await {
            Ok(()) => return Ok(token),
            Err(StorageError::AlreadyExists(taken)) if attempt < MAX_TOKEN_ATTEMPTS => {
                warn!(token = %taken, attempt, "Token collision, regenerating");
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Quote `name` for the shell unless it only contains characters that are
/// safe unquoted.
fn shell_quote(name: &str) -> Cow<'_, str> {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | ',');
    if !name.is_empty() && name.chars().all(is_safe) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("'{}'", name.replace('\'', r"'\''")))
    }
}
