use crate::dtos::{BlogRequestBody, GenerationRequest};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use relay_core::error::AppError;

/// Relays one blog-generation request to Gemini and passes the reply through.
///
/// Validation failures never reach the provider. Every other failure
/// collapses into a 400 carrying the underlying message.
#[tracing::instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn generate_blog(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let payload = BlogRequestBody::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Malformed request body");
        e
    })?;

    let request = GenerationRequest::try_from(payload)?;

    tracing::info!(
        model = %state.gemini.model(),
        word_limit = request.word_limit,
        "Relaying blog generation request"
    );

    let upstream = state
        .gemini
        .generate_content(&request.prompt())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Gemini relay failed");
            e
        })?;

    tracing::info!(status = %upstream.status, "Relayed Gemini response");

    Ok((upstream.status, Json(upstream.body)))
}
